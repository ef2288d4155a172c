//! Replays a [`DrawList`] on a GPUI window.

use crate::surface::{DrawCommand, DrawList};
use gpui::*;

pub fn paint_draw_list(list: &DrawList, window: &mut Window, cx: &mut App) {
    let mut clip_stack: Vec<ContentMask<Pixels>> = Vec::new();
    for command in list.commands() {
        match command {
            DrawCommand::PushClip(bounds) => {
                let bounds = match clip_stack.last() {
                    Some(mask) => bounds.intersect(&mask.bounds),
                    None => *bounds,
                };
                clip_stack.push(ContentMask { bounds });
            }
            DrawCommand::PopClip => {
                clip_stack.pop();
            }
            DrawCommand::Polyline { points, stroke } => {
                let mut builder = PathBuilder::stroke(px(stroke.width.max(0.5)));
                builder.move_to(points[0]);
                for p in &points[1..] {
                    builder.line_to(*p);
                }
                if let Ok(path) = builder.build() {
                    with_clip(window, &clip_stack, |window| {
                        window.paint_path(path, stroke.color);
                    });
                }
            }
            DrawCommand::Polygon { points, color } => {
                let mut builder = PathBuilder::fill();
                builder.move_to(points[0]);
                for p in &points[1..] {
                    builder.line_to(*p);
                }
                builder.line_to(points[0]);
                if let Ok(path) = builder.build() {
                    with_clip(window, &clip_stack, |window| {
                        window.paint_path(path, *color);
                    });
                }
            }
            DrawCommand::StrokeRect { bounds, stroke } => {
                let quad = quad(
                    *bounds,
                    Corners::all(px(0.0)),
                    transparent_black(),
                    Edges::all(px(stroke.width)),
                    stroke.color,
                    BorderStyle::default(),
                );
                with_clip(window, &clip_stack, |window| window.paint_quad(quad));
            }
            DrawCommand::FillRect { bounds, color } => {
                with_clip(window, &clip_stack, |window| {
                    window.paint_quad(fill(*bounds, *color));
                });
            }
            DrawCommand::Text {
                origin,
                text,
                size,
                color,
            } => {
                let run = TextRun {
                    len: text.len(),
                    font: TextStyle::default().font(),
                    color: *color,
                    background_color: None,
                    underline: None,
                    strikethrough: None,
                };
                if let Ok(lines) =
                    window
                        .text_system()
                        .shape_text(text.clone().into(), *size, &[run], None, None)
                {
                    with_clip(window, &clip_stack, |window| {
                        for line in lines {
                            let _ = line.paint(*origin, *size, TextAlign::Left, None, window, cx);
                        }
                    });
                }
            }
        }
    }
}

fn with_clip(window: &mut Window, stack: &[ContentMask<Pixels>], f: impl FnOnce(&mut Window)) {
    if let Some(mask) = stack.last() {
        window.with_content_mask(Some(mask.clone()), f);
    } else {
        f(window);
    }
}
