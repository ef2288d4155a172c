use gpui::{point, px, size, Bounds};
use gpui_slope::surface::Stroke;
use gpui_slope::{DrawCommand, DrawList, Surface};

#[test]
fn test_state_applies_to_later_primitives() {
    let mut list = DrawList::new();
    let line = [point(px(0.0), px(0.0)), point(px(10.0), px(10.0))];
    list.stroke_polyline(&line);
    list.set_color(gpui::red());
    list.set_line_width(3.0);
    list.stroke_polyline(&line);

    assert_eq!(
        list.commands(),
        &[
            DrawCommand::Polyline {
                points: line.to_vec(),
                stroke: Stroke {
                    color: gpui::black(),
                    width: 1.0
                },
            },
            DrawCommand::Polyline {
                points: line.to_vec(),
                stroke: Stroke {
                    color: gpui::red(),
                    width: 3.0
                },
            },
        ]
    );
}

#[test]
fn test_degenerate_primitives_are_dropped() {
    let mut list = DrawList::new();
    list.stroke_polyline(&[point(px(1.0), px(1.0))]);
    list.fill_polygon(&[point(px(1.0), px(1.0)), point(px(2.0), px(2.0))]);
    list.draw_text(point(px(0.0), px(0.0)), "", px(12.0));
    assert!(list.is_empty());
}

#[test]
fn test_unbalanced_pop_is_ignored() {
    let clip = Bounds::new(point(px(0.0), px(0.0)), size(px(50.0), px(50.0)));
    let mut list = DrawList::new();
    list.pop_clip();
    list.push_clip(clip);
    list.pop_clip();
    list.pop_clip();
    assert_eq!(
        list.commands(),
        &[DrawCommand::PushClip(clip), DrawCommand::PopClip]
    );

    list.clear();
    assert!(list.is_empty());
}
