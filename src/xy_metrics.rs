//! Cartesian metrics: auto-scaling data window, margins, and the four frame axes.

use crate::axis::{Axis, AxisSide};
use crate::config::MetricsConfig;
use crate::item::{Item, ItemId};
use crate::metrics::{Metrics, MetricsId};
use crate::surface::Surface;
use crate::transform::{DataWindow, FigureWindow, Mapping};
use crate::utils::PixelsExt;
use crate::xy_item::XyItem;
use gpui::{Bounds, Pixels};
use std::any::Any;
use tracing::{debug, trace};

pub struct XyMetrics {
    id: MetricsId,
    visible: bool,
    items: Vec<Box<dyn Item>>,
    /// Indexed by [`AxisSide::index`].
    axes: [Axis; 4],

    x_low_bound: f64,
    x_up_bound: f64,
    y_low_bound: f64,
    y_up_bound: f64,
    padding: f64,

    data: DataWindow,
    figure: FigureWindow,
    laid_out: bool,
}

impl Default for XyMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl XyMetrics {
    pub fn new() -> Self {
        Self::with_config(&MetricsConfig::default())
    }

    pub fn with_config(config: &MetricsConfig) -> Self {
        let id = MetricsId::next();
        let mut axes = [
            Axis::new(AxisSide::Top, config.top_label.clone()),
            Axis::new(AxisSide::Bottom, config.bottom_label.clone()),
            Axis::new(AxisSide::Left, config.left_label.clone()),
            Axis::new(AxisSide::Right, config.right_label.clone()),
        ];
        for axis in axes.iter_mut() {
            axis.base_mut().owner = Some(id);
        }

        let mut metrics = Self {
            id,
            visible: true,
            items: Vec::new(),
            axes,
            x_low_bound: config.x_low_bound,
            x_up_bound: config.x_up_bound,
            y_low_bound: config.y_low_bound,
            y_up_bound: config.y_up_bound,
            padding: config.padding,
            data: DataWindow::UNIT,
            figure: FigureWindow::default(),
            laid_out: false,
        };
        metrics.update();
        metrics
    }

    pub fn get_axis(&self, side: AxisSide) -> &Axis {
        &self.axes[side.index()]
    }

    pub fn get_axis_mut(&mut self, side: AxisSide) -> &mut Axis {
        &mut self.axes[side.index()]
    }

    pub fn axes(&self) -> &[Axis; 4] {
        &self.axes
    }

    /// Pixel insets reserved left (`low`) and right (`hi`) of the plot area.
    pub fn set_x_boundary(&mut self, low: f64, hi: f64) {
        self.x_low_bound = low;
        self.x_up_bound = hi;
    }

    /// Pixel insets reserved above (`low`) and below (`hi`) the plot area.
    pub fn set_y_boundary(&mut self, low: f64, hi: f64) {
        self.y_low_bound = low;
        self.y_up_bound = hi;
    }

    pub fn x_boundary(&self) -> (f64, f64) {
        (self.x_low_bound, self.x_up_bound)
    }

    pub fn y_boundary(&self) -> (f64, f64) {
        (self.y_low_bound, self.y_up_bound)
    }

    /// Fraction of the data span added on each side by [`Metrics::update`].
    pub fn set_padding(&mut self, padding: f64) {
        self.padding = padding;
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    pub fn xy_item(&self, id: ItemId) -> Option<&XyItem> {
        self.item(id)?.as_any().downcast_ref::<XyItem>()
    }

    pub fn xy_item_mut(&mut self, id: ItemId) -> Option<&mut XyItem> {
        self.item_mut(id)?.as_any_mut().downcast_mut::<XyItem>()
    }

    fn pad(&self, min: f64, max: f64) -> (f64, f64) {
        let span = max - min;
        let (lo, hi) = if span == 0.0 {
            // Widening scales with the value so it survives at large magnitudes.
            let half = if min == 0.0 { 0.5 } else { min.abs() * 0.5 };
            (min - half, max + half)
        } else {
            let pad = span * self.padding;
            (min - pad, max + pad)
        };
        if hi > lo {
            (lo, hi)
        } else {
            (lo, lo.next_up())
        }
    }
}

impl Mapping for XyMetrics {
    fn map_x(&self, x: f64) -> f64 {
        let t = (x - self.data.xmin) / self.data.width();
        self.figure.xmin + t * self.figure.width()
    }

    fn map_y(&self, y: f64) -> f64 {
        let t = (y - self.data.ymin) / self.data.height();
        self.figure.ymax - t * self.figure.height()
    }

    fn unmap_x(&self, px: f64) -> f64 {
        let t = (px - self.figure.xmin) / self.figure.width();
        self.data.xmin + t * self.data.width()
    }

    fn unmap_y(&self, py: f64) -> f64 {
        let t = (self.figure.ymax - py) / self.figure.height();
        self.data.ymin + t * self.data.height()
    }

    fn data_window(&self) -> DataWindow {
        self.data
    }

    fn figure_window(&self) -> FigureWindow {
        self.figure
    }
}

impl Metrics for XyMetrics {
    fn id(&self) -> MetricsId {
        self.id
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn items(&self) -> &[Box<dyn Item>] {
        &self.items
    }

    fn add_item(&mut self, mut item: Box<dyn Item>) -> ItemId {
        item.base_mut().owner = Some(self.id);
        let id = item.id();
        self.items.push(item);
        self.update();
        id
    }

    fn remove_item(&mut self, id: ItemId) -> Option<Box<dyn Item>> {
        let pos = self.items.iter().position(|item| item.id() == id)?;
        let mut item = self.items.remove(pos);
        item.base_mut().owner = None;
        self.update();
        Some(item)
    }

    fn clear_items(&mut self) {
        self.items.clear();
        self.update();
    }

    fn item_mut(&mut self, id: ItemId) -> Option<&mut dyn Item> {
        for item in self.items.iter_mut() {
            if item.id() == id {
                let item: &mut dyn Item = item.as_mut();
                return Some(item);
            }
        }
        None
    }

    fn update(&mut self) {
        for item in self.items.iter_mut() {
            item.update();
        }

        // Only visible rescalable items with bounds count. None left means the unit square.
        let folded = self
            .items
            .iter()
            .filter(|item| item.is_visible() && item.is_rescalable())
            .filter_map(|item| item.bounds())
            .reduce(|acc, b| acc.union(&b));

        self.data = match folded {
            None => DataWindow::UNIT,
            Some(b) => {
                let (xmin, xmax) = self.pad(b.xmin, b.xmax);
                let (ymin, ymax) = self.pad(b.ymin, b.ymax);
                DataWindow {
                    xmin,
                    xmax,
                    ymin,
                    ymax,
                }
            }
        };
        debug!(metrics = self.id.0, window = ?self.data, "metrics updated");
    }

    fn draw(&mut self, surface: &mut dyn Surface, rect: Bounds<Pixels>) {
        let x = rect.origin.x.as_f64();
        let y = rect.origin.y.as_f64();
        let w = rect.size.width.as_f64();
        let h = rect.size.height.as_f64();
        self.figure = FigureWindow {
            xmin: x + self.x_low_bound,
            xmax: x + w - self.x_up_bound,
            ymin: y + self.y_low_bound,
            ymax: y + h - self.y_up_bound,
        };
        self.laid_out = true;
        trace!(metrics = self.id.0, figure = ?self.figure, "metrics draw");

        let this: &Self = self;
        surface.push_clip(this.figure.bounds());
        for item in this.items.iter().filter(|item| item.is_visible()) {
            item.draw(surface, this);
        }
        surface.pop_clip();

        // Frame axes go on top and may spill into the margins.
        for axis in this.axes.iter().filter(|axis| axis.is_visible()) {
            axis.draw(surface, this);
        }
    }

    fn set_x_range(&mut self, xi: f64, xf: f64) {
        self.data.xmin = xi;
        self.data.xmax = xf;
    }

    fn set_y_range(&mut self, yi: f64, yf: f64) {
        self.data.ymin = yi;
        self.data.ymax = yf;
    }

    fn has_layout(&self) -> bool {
        self.laid_out
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
