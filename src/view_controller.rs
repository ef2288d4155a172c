use crate::figure::{Figure, MIN_REGION_PIXELS};
use crate::utils::PixelsExt;
use gpui::*;

/// Press/move/release state of a region drag, independent of the GPUI event types.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionDrag {
    start: Option<Point<Pixels>>,
    current: Option<Point<Pixels>>,
}

impl RegionDrag {
    pub fn press(&mut self, position: Point<Pixels>) {
        self.start = Some(position);
        self.current = Some(position);
    }

    /// Returns `true` when a drag is in progress and the rubber band moved.
    pub fn drag(&mut self, position: Point<Pixels>) -> bool {
        if self.start.is_none() {
            return false;
        }
        self.current = Some(position);
        true
    }

    /// Ends the drag. Yields the corners only when the drag is a real region.
    pub fn release(&mut self, position: Point<Pixels>) -> Option<(Point<Pixels>, Point<Pixels>)> {
        let start = self.start.take()?;
        self.current = None;
        ViewController::is_region(start, position).then_some((start, position))
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Rectangle to outline while dragging.
    pub fn selection(&self) -> Option<Bounds<Pixels>> {
        match (self.start, self.current) {
            (Some(a), Some(b)) => Some(ViewController::selection_bounds(a, b)),
            _ => None,
        }
    }
}

/// Region-zoom rules shared by every host of a [`Figure`].
pub struct ViewController;

impl ViewController {
    /// A drag shorter than [`MIN_REGION_PIXELS`] on either axis is a click.
    pub fn is_region(start: Point<Pixels>, end: Point<Pixels>) -> bool {
        let dx = (end.x - start.x).as_f64().abs();
        let dy = (end.y - start.y).as_f64().abs();
        dx >= MIN_REGION_PIXELS && dy >= MIN_REGION_PIXELS
    }

    pub fn selection_bounds(a: Point<Pixels>, b: Point<Pixels>) -> Bounds<Pixels> {
        Bounds::from_corners(
            point(a.x.min(b.x), a.y.min(b.y)),
            point(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    pub fn track(figure: &mut Figure, start: Point<Pixels>, end: Point<Pixels>) -> bool {
        figure.track_region(
            start.x.as_f64(),
            start.y.as_f64(),
            end.x.as_f64(),
            end.y.as_f64(),
        )
    }
}
