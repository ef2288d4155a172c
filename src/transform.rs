//! Coordinate projection between data space and pixel space.

use gpui::*;
use serde::{Deserialize, Serialize};

/// Visible rectangle in data units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataWindow {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl DataWindow {
    pub const UNIT: DataWindow = DataWindow {
        xmin: 0.0,
        xmax: 1.0,
        ymin: 0.0,
        ymax: 1.0,
    };

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.xmin..=self.xmax).contains(&x) && (self.ymin..=self.ymax).contains(&y)
    }
}

impl Default for DataWindow {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Pixel rectangle the data window is projected into (plot area minus margins).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FigureWindow {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl FigureWindow {
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn bounds(&self) -> Bounds<Pixels> {
        Bounds::new(
            point(px(self.xmin as f32), px(self.ymin as f32)),
            size(px(self.width() as f32), px(self.height() as f32)),
        )
    }
}

/// Bidirectional data <-> pixel mapping.
///
/// `map_y` is decreasing: data y grows upward while pixel y grows downward.
pub trait Mapping {
    fn map_x(&self, x: f64) -> f64;
    fn map_y(&self, y: f64) -> f64;
    fn unmap_x(&self, px: f64) -> f64;
    fn unmap_y(&self, py: f64) -> f64;

    fn data_window(&self) -> DataWindow;
    fn figure_window(&self) -> FigureWindow;

    fn data_to_screen(&self, x: f64, y: f64) -> Point<Pixels> {
        point(px(self.map_x(x) as f32), px(self.map_y(y) as f32))
    }

    fn screen_to_data(&self, p: Point<Pixels>) -> (f64, f64) {
        (
            self.unmap_x(f32::from(p.x) as f64),
            self.unmap_y(f32::from(p.y) as f64),
        )
    }
}
