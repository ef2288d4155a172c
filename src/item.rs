//! Drawable items held by a metrics region.

use crate::metrics::MetricsId;
use crate::surface::Surface;
use crate::transform::Mapping;
use gpui::{Pixels, Point};
use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl ItemId {
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Data-space bounding box reported by an item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataBounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl DataBounds {
    pub fn union(&self, other: &DataBounds) -> DataBounds {
        DataBounds {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }
}

/// State shared by every item kind.
#[derive(Clone, Debug)]
pub struct ItemBase {
    pub id: ItemId,
    pub name: String,
    pub visible: bool,
    pub rescalable: bool,
    /// Metrics region the item was added to. Never used for ownership.
    pub owner: Option<MetricsId>,
}

impl ItemBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::next(),
            name: name.into(),
            visible: true,
            rescalable: true,
            owner: None,
        }
    }
}

pub trait Item: Any {
    fn base(&self) -> &ItemBase;
    fn base_mut(&mut self) -> &mut ItemBase;

    /// Data bounding box, `None` when the item has nothing to contribute.
    fn bounds(&self) -> Option<DataBounds>;

    /// Refreshes cached state after the item's data changed.
    fn update(&mut self) {}

    fn draw(&self, surface: &mut dyn Surface, mapping: &dyn Mapping);

    /// Small legend sample centered on `center`.
    fn draw_thumb(&self, _surface: &mut dyn Surface, _center: Point<Pixels>) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn id(&self) -> ItemId {
        self.base().id
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn is_visible(&self) -> bool {
        self.base().visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    fn is_rescalable(&self) -> bool {
        self.base().rescalable
    }

    fn set_rescalable(&mut self, rescalable: bool) {
        self.base_mut().rescalable = rescalable;
    }

    fn owner(&self) -> Option<MetricsId> {
        self.base().owner
    }
}
