//! Metrics regions: coordinate systems that own items and project them onto a surface.

use crate::item::{Item, ItemId};
use crate::surface::Surface;
use crate::transform::Mapping;
use gpui::{Bounds, Pixels};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_METRICS_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetricsId(pub u64);

impl MetricsId {
    pub fn next() -> Self {
        Self(NEXT_METRICS_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A region of a figure with its own coordinate system.
///
/// Only the Cartesian [`crate::XyMetrics`] exists today; other projections plug in here.
pub trait Metrics: Mapping + Any {
    fn id(&self) -> MetricsId;

    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Plotted items in draw order.
    fn items(&self) -> &[Box<dyn Item>];

    /// Takes ownership of `item` and returns its id.
    fn add_item(&mut self, item: Box<dyn Item>) -> ItemId;
    fn remove_item(&mut self, id: ItemId) -> Option<Box<dyn Item>>;
    fn clear_items(&mut self);

    fn item(&self, id: ItemId) -> Option<&dyn Item> {
        self.items()
            .iter()
            .find(|item| item.id() == id)
            .map(|item| item.as_ref())
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut dyn Item>;

    /// Recomputes the data-space window from the items.
    fn update(&mut self);

    /// Lays out the pixel-space window inside `rect` and draws items then frame.
    fn draw(&mut self, surface: &mut dyn Surface, rect: Bounds<Pixels>);

    fn set_x_range(&mut self, xi: f64, xf: f64);
    fn set_y_range(&mut self, yi: f64, yf: f64);

    /// Whether a draw has established the pixel-space window.
    fn has_layout(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
