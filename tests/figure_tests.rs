use gpui::{point, px, size, Bounds, Pixels};
use gpui_slope::{
    ChangeKind, DataBounds, DrawCommand, DrawList, Figure, FigureChange, Item, ItemBase, Mapping,
    Metrics, MetricsId, Surface, XyItem, XyMetrics,
};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn rect(x: f32, y: f32, w: f32, h: f32) -> Bounds<Pixels> {
    Bounds::new(point(px(x), px(y)), size(px(w), px(h)))
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Item that counts how many times it was dropped.
struct ProbeItem {
    base: ItemBase,
    drops: Rc<Cell<usize>>,
}

impl ProbeItem {
    fn new(drops: &Rc<Cell<usize>>) -> Self {
        Self {
            base: ItemBase::new("probe"),
            drops: drops.clone(),
        }
    }
}

impl Drop for ProbeItem {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl Item for ProbeItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn bounds(&self) -> Option<DataBounds> {
        Some(DataBounds {
            xmin: 0.0,
            xmax: 1.0,
            ymin: 0.0,
            ymax: 1.0,
        })
    }

    fn draw(&self, _surface: &mut dyn Surface, _mapping: &dyn Mapping) {}

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn recorder(figure: &mut Figure) -> Rc<RefCell<Vec<FigureChange>>> {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = changes.clone();
    figure.set_change_callback(move |change| sink.borrow_mut().push(*change));
    changes
}

fn plotted_figure() -> (Figure, MetricsId) {
    let mut figure = Figure::new();
    let id = figure.add_xy_metrics();
    figure
        .metrics_mut(id)
        .unwrap()
        .add_item(Box::new(XyItem::new("c", vec![0.0, 10.0], vec![0.0, 100.0])));
    figure.draw(&mut DrawList::new(), rect(0.0, 0.0, 400.0, 300.0));
    (figure, id)
}

#[test]
fn test_metrics_list_and_default() {
    let mut figure = Figure::new();
    assert!(figure.get_default_metrics().is_none());

    let a = figure.add_xy_metrics();
    let b = figure.add_metrics(Box::new(XyMetrics::new()));
    let ids: Vec<_> = figure.get_metrics_list().iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(figure.get_default_metrics().unwrap().id(), b);

    assert!(figure.set_default_metrics(a));
    assert_eq!(figure.default_metrics_id(), Some(a));
    assert!(!figure.set_default_metrics(MetricsId(u64::MAX)));
    assert_eq!(figure.default_metrics_id(), Some(a));

    figure.remove_metrics(a).expect("removed");
    assert_eq!(figure.default_metrics_id(), Some(b));
}

#[test]
fn test_track_region_normalizes_corners() {
    let (mut figure, id) = plotted_figure();
    let changes = recorder(&mut figure);

    let m = figure.metrics(id).unwrap();
    let (xa, xb) = (m.unmap_x(50.0), m.unmap_x(150.0));
    let (y_low, y_high) = (m.unmap_y(200.0), m.unmap_y(50.0));
    assert!(y_low < y_high);

    assert!(figure.track_region(50.0, 200.0, 150.0, 50.0));
    let w = figure.metrics(id).unwrap().data_window();
    assert!(approx(w.xmin, xa) && approx(w.xmax, xb));
    assert!(approx(w.ymin, y_low) && approx(w.ymax, y_high));
    assert!(w.xmin < w.xmax && w.ymin < w.ymax);

    assert_eq!(
        changes.borrow().as_slice(),
        &[FigureChange {
            kind: ChangeKind::Data,
            item: None
        }]
    );
}

#[test]
fn test_track_region_order_independent() {
    let (mut a, ida) = plotted_figure();
    let (mut b, idb) = plotted_figure();
    a.track_region(100.0, 80.0, 200.0, 180.0);
    b.track_region(200.0, 180.0, 100.0, 80.0);
    let wa = a.metrics(ida).unwrap().data_window();
    let wb = b.metrics(idb).unwrap().data_window();
    assert!(approx(wa.xmin, wb.xmin) && approx(wa.xmax, wb.xmax));
    assert!(approx(wa.ymin, wb.ymin) && approx(wa.ymax, wb.ymax));
}

#[test]
fn test_small_drag_does_not_track() {
    let (mut figure, id) = plotted_figure();
    let changes = recorder(&mut figure);
    let before = figure.metrics(id).unwrap().data_window();

    assert!(!figure.track_region(100.0, 100.0, 102.0, 110.0));
    assert!(!figure.track_region(100.0, 100.0, 150.0, 101.0));
    assert_eq!(figure.metrics(id).unwrap().data_window(), before);
    assert!(changes.borrow().is_empty());
}

#[test]
fn test_track_region_before_draw_is_ignored() {
    let mut figure = Figure::new();
    let id = figure.add_xy_metrics();
    let before = figure.metrics(id).unwrap().data_window();
    assert!(!figure.track_region(10.0, 10.0, 100.0, 100.0));
    assert_eq!(figure.metrics(id).unwrap().data_window(), before);

    let mut empty = Figure::new();
    assert!(!empty.track_region(10.0, 10.0, 100.0, 100.0));
}

#[test]
fn test_notifications_and_callback_replacement() {
    let (mut figure, id) = plotted_figure();
    let item = figure.metrics(id).unwrap().items()[0].id();

    let first = Rc::new(Cell::new(0));
    let counter = first.clone();
    figure.set_change_callback(move |_| counter.set(counter.get() + 1));
    figure.notify_appearance_change(item);
    assert_eq!(first.get(), 1);

    let changes = recorder(&mut figure);
    figure.notify_appearance_change(item);
    figure.notify_data_change(item);
    assert_eq!(first.get(), 1, "replaced callback must not fire");
    assert_eq!(
        changes.borrow().as_slice(),
        &[
            FigureChange {
                kind: ChangeKind::Appearance,
                item: Some(item)
            },
            FigureChange {
                kind: ChangeKind::Data,
                item: Some(item)
            },
        ]
    );

    figure.clear_change_callback();
    figure.notify_data_change(item);
    assert_eq!(changes.borrow().len(), 2);
}

#[test]
fn test_update_item_owner_rescales() {
    let (mut figure, id) = plotted_figure();
    let item = figure.metrics(id).unwrap().items()[0].id();
    assert_eq!(figure.find_item_owner(item), Some(id));

    figure
        .xy_metrics_mut(id)
        .unwrap()
        .xy_item_mut(item)
        .unwrap()
        .set_data(vec![0.0, 100.0], vec![0.0, 100.0]);
    assert!(figure.update_item_owner(item));
    assert!(approx(figure.metrics(id).unwrap().data_window().xmax, 105.0));

    assert!(!figure.update_item_owner(gpui_slope::ItemId(u64::MAX)));
}

#[test]
fn test_figure_update_restores_auto_scale() {
    let (mut figure, id) = plotted_figure();
    figure.track_region(100.0, 80.0, 200.0, 180.0);
    figure.update();
    let w = figure.metrics(id).unwrap().data_window();
    assert!(approx(w.xmin, -0.5) && approx(w.xmax, 10.5));
    assert!(approx(w.ymin, -5.0) && approx(w.ymax, 105.0));
}

#[test]
fn test_dropping_figure_destroys_everything() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut figure = Figure::new();
        for _ in 0..2 {
            let id = figure.add_xy_metrics();
            let metrics = figure.metrics_mut(id).unwrap();
            metrics.add_item(Box::new(ProbeItem::new(&drops)));
            metrics.add_item(Box::new(ProbeItem::new(&drops)));
        }
        figure.update();
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 4);
}

#[test]
fn test_removing_item_hands_back_ownership() {
    let drops = Rc::new(Cell::new(0));
    let mut figure = Figure::new();
    let id = figure.add_xy_metrics();
    let item = figure
        .metrics_mut(id)
        .unwrap()
        .add_item(Box::new(ProbeItem::new(&drops)));

    let removed = figure.metrics_mut(id).unwrap().remove_item(item).unwrap();
    assert_eq!(drops.get(), 0);
    drop(removed);
    assert_eq!(drops.get(), 1);
    drop(figure);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_draw_skips_hidden_metrics() {
    let mut figure = Figure::new();
    let a = figure.add_xy_metrics();
    let b = figure.add_xy_metrics();
    figure.metrics_mut(b).unwrap().set_visible(false);

    let mut list = DrawList::new();
    figure.draw(&mut list, rect(0.0, 0.0, 400.0, 300.0));

    assert!(matches!(list.commands()[0], DrawCommand::FillRect { .. }));
    let clips = list
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::PushClip(_)))
        .count();
    assert_eq!(clips, 1);
    assert!(figure.metrics(a).unwrap().has_layout());
    assert!(!figure.metrics(b).unwrap().has_layout());
}

#[test]
fn test_legend_lists_named_items() {
    let (mut figure, _) = plotted_figure();
    let mut list = DrawList::new();
    figure.draw(&mut list, rect(0.0, 0.0, 400.0, 300.0));
    assert!(list
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "c")));

    figure.legend.enabled = false;
    let mut list = DrawList::new();
    figure.draw(&mut list, rect(0.0, 0.0, 400.0, 300.0));
    assert!(!list
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "c")));
}

#[test]
fn test_boundary_setters_ignore_unknown_metrics() {
    let mut figure = Figure::new();
    let id = figure.add_xy_metrics();
    figure.set_x_boundary(MetricsId(u64::MAX), 1.0, 2.0);
    figure.set_x_boundary(id, 10.0, 20.0);
    figure.set_y_boundary(id, 30.0, 40.0);

    let metrics = figure.xy_metrics(id).unwrap();
    assert_eq!(metrics.x_boundary(), (10.0, 20.0));
    assert_eq!(metrics.y_boundary(), (30.0, 40.0));
}
