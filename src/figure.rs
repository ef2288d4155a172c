//! Figure: the top-level container of metrics regions.
//!
//! A figure owns its metrics, which own their items and axes, so dropping a
//! figure releases the whole tree. Host widgets learn about changes through a
//! single optional callback.

use crate::axis::text_width;
use crate::config::{FigureConfig, LegendConfig, LegendPosition, MetricsConfig};
use crate::item::{Item, ItemId};
use crate::metrics::{Metrics, MetricsId};
use crate::surface::Surface;
use crate::theme::FigureTheme;
use crate::transform::Mapping;
use crate::utils::ordered;
use crate::xy_metrics::XyMetrics;
use gpui::*;
use tracing::{debug, trace, warn};

/// Drags smaller than this on either axis are clicks, not regions.
pub const MIN_REGION_PIXELS: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// Only a repaint is needed (color, line width, visibility of a frame element).
    Appearance,
    /// The data window may be stale; the owning metrics should be updated before repainting.
    Data,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureChange {
    pub kind: ChangeKind,
    /// Item that changed. `None` when the figure itself changed the window (region tracking).
    pub item: Option<ItemId>,
}

pub type ChangeCallback = Box<dyn FnMut(&FigureChange)>;

pub struct Figure {
    metrics: Vec<Box<dyn Metrics>>,
    default_metrics: Option<MetricsId>,
    change_callback: Option<ChangeCallback>,
    metrics_config: MetricsConfig,
    pub legend: LegendConfig,
    pub theme: FigureTheme,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    pub fn new() -> Self {
        Self::with_config(&FigureConfig::default())
    }

    pub fn with_config(config: &FigureConfig) -> Self {
        Self {
            metrics: Vec::new(),
            default_metrics: None,
            change_callback: None,
            metrics_config: config.metrics.clone(),
            legend: config.legend.clone(),
            theme: FigureTheme::default(),
        }
    }

    pub fn add_metrics(&mut self, metrics: Box<dyn Metrics>) -> MetricsId {
        let id = metrics.id();
        self.metrics.push(metrics);
        id
    }

    /// Adds a Cartesian metrics built from this figure's metrics defaults.
    pub fn add_xy_metrics(&mut self) -> MetricsId {
        self.add_metrics(Box::new(XyMetrics::with_config(&self.metrics_config)))
    }

    pub fn remove_metrics(&mut self, id: MetricsId) -> Option<Box<dyn Metrics>> {
        let pos = self.metrics.iter().position(|m| m.id() == id)?;
        if self.default_metrics == Some(id) {
            self.default_metrics = None;
        }
        Some(self.metrics.remove(pos))
    }

    /// Metrics in insertion (stacking) order.
    pub fn get_metrics_list(&self) -> &[Box<dyn Metrics>] {
        &self.metrics
    }

    pub fn metrics(&self, id: MetricsId) -> Option<&dyn Metrics> {
        self.metrics
            .iter()
            .find(|m| m.id() == id)
            .map(|m| m.as_ref())
    }

    pub fn metrics_mut(&mut self, id: MetricsId) -> Option<&mut dyn Metrics> {
        for metrics in self.metrics.iter_mut() {
            if metrics.id() == id {
                let metrics: &mut dyn Metrics = metrics.as_mut();
                return Some(metrics);
            }
        }
        None
    }

    pub fn xy_metrics(&self, id: MetricsId) -> Option<&XyMetrics> {
        self.metrics(id)?.as_any().downcast_ref::<XyMetrics>()
    }

    pub fn xy_metrics_mut(&mut self, id: MetricsId) -> Option<&mut XyMetrics> {
        self.metrics_mut(id)?.as_any_mut().downcast_mut::<XyMetrics>()
    }

    /// The explicitly selected default metrics, else the most recently added one.
    pub fn default_metrics_id(&self) -> Option<MetricsId> {
        self.default_metrics
            .filter(|id| self.metrics.iter().any(|m| m.id() == *id))
            .or_else(|| self.metrics.last().map(|m| m.id()))
    }

    pub fn get_default_metrics(&self) -> Option<&dyn Metrics> {
        self.metrics(self.default_metrics_id()?)
    }

    pub fn get_default_metrics_mut(&mut self) -> Option<&mut dyn Metrics> {
        let id = self.default_metrics_id()?;
        self.metrics_mut(id)
    }

    pub fn set_default_metrics(&mut self, id: MetricsId) -> bool {
        if self.metrics(id).is_none() {
            warn!(metrics = id.0, "cannot make unknown metrics the default");
            return false;
        }
        self.default_metrics = Some(id);
        true
    }

    /// Sets the pixel insets of a Cartesian metrics. Unknown ids are ignored.
    pub fn set_x_boundary(&mut self, id: MetricsId, low: f64, hi: f64) {
        if let Some(metrics) = self.xy_metrics_mut(id) {
            metrics.set_x_boundary(low, hi);
        }
    }

    pub fn set_y_boundary(&mut self, id: MetricsId, low: f64, hi: f64) {
        if let Some(metrics) = self.xy_metrics_mut(id) {
            metrics.set_y_boundary(low, hi);
        }
    }

    /// Installs the change observer, replacing any previous one.
    pub fn set_change_callback(&mut self, callback: impl FnMut(&FigureChange) + 'static) {
        self.change_callback = Some(Box::new(callback));
    }

    pub fn clear_change_callback(&mut self) {
        self.change_callback = None;
    }

    pub fn notify_appearance_change(&mut self, item: ItemId) {
        self.notify(FigureChange {
            kind: ChangeKind::Appearance,
            item: Some(item),
        });
    }

    pub fn notify_data_change(&mut self, item: ItemId) {
        self.notify(FigureChange {
            kind: ChangeKind::Data,
            item: Some(item),
        });
    }

    fn notify(&mut self, change: FigureChange) {
        debug!(?change, "figure changed");
        if let Some(callback) = self.change_callback.as_mut() {
            callback(&change);
        }
    }

    /// Metrics holding `item`, if any.
    pub fn find_item_owner(&self, item: ItemId) -> Option<MetricsId> {
        self.metrics
            .iter()
            .find(|m| m.item(item).is_some())
            .map(|m| m.id())
    }

    /// Recomputes the data window of the metrics that owns `item`.
    pub fn update_item_owner(&mut self, item: ItemId) -> bool {
        let Some(owner) = self.find_item_owner(item) else {
            warn!(item = item.0, "item not found in any metrics");
            return false;
        };
        match self.metrics_mut(owner) {
            Some(metrics) => {
                metrics.update();
                true
            }
            None => false,
        }
    }

    /// Zooms the default metrics onto the pixel rectangle spanned by two corners.
    ///
    /// Returns `false` without touching the window when the drag is below
    /// [`MIN_REGION_PIXELS`] on either axis, or when the default metrics has not
    /// been laid out by a draw yet.
    pub fn track_region(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        if (x2 - x1).abs() < MIN_REGION_PIXELS || (y2 - y1).abs() < MIN_REGION_PIXELS {
            debug!(x1, y1, x2, y2, "region too small, ignored");
            return false;
        }
        let Some(metrics) = self.get_default_metrics_mut() else {
            warn!("track_region on a figure without metrics");
            return false;
        };
        if !metrics.has_layout() {
            warn!(metrics = metrics.id().0, "track_region before the first draw");
            return false;
        }

        let (xmin, xmax) = ordered(metrics.unmap_x(x1), metrics.unmap_x(x2));
        let (ymin, ymax) = ordered(metrics.unmap_y(y1), metrics.unmap_y(y2));
        metrics.set_x_range(xmin, xmax);
        metrics.set_y_range(ymin, ymax);
        debug!(xmin, xmax, ymin, ymax, "region tracked");

        self.notify(FigureChange {
            kind: ChangeKind::Data,
            item: None,
        });
        true
    }

    pub fn update(&mut self) {
        for metrics in self.metrics.iter_mut() {
            metrics.update();
        }
    }

    pub fn draw(&mut self, surface: &mut dyn Surface, rect: Bounds<Pixels>) {
        trace!(?rect, metrics = self.metrics.len(), "figure draw");
        surface.set_color(self.theme.background);
        surface.fill_rect(rect);

        for metrics in self.metrics.iter_mut().filter(|m| m.is_visible()) {
            metrics.draw(surface, rect);
        }

        if self.legend.enabled {
            self.draw_legend(surface);
        }
    }

    fn draw_legend(&self, surface: &mut dyn Surface) {
        let Some(metrics) = self.get_default_metrics() else {
            return;
        };
        if !metrics.is_visible() || !metrics.has_layout() {
            return;
        }
        let entries: Vec<_> = metrics
            .items()
            .iter()
            .filter(|item| item.is_visible() && !item.name().is_empty())
            .collect();
        if entries.is_empty() {
            return;
        }

        const PAD: f32 = 6.0;
        const THUMB: f32 = 24.0;
        let text_size = self.theme.legend_text_size;
        let line_height = f32::from(text_size) + 6.0;
        let text_w = entries
            .iter()
            .map(|item| text_width(item.name(), f32::from(text_size)))
            .fold(0.0f32, f32::max);
        let width = PAD * 3.0 + THUMB + text_w;
        let height = PAD * 2.0 + line_height * entries.len() as f32;

        let fw = metrics.figure_window();
        let (x0, x1, y0, y1) = (
            fw.xmin as f32,
            fw.xmax as f32,
            fw.ymin as f32,
            fw.ymax as f32,
        );
        let (left, top) = match self.legend.position {
            LegendPosition::TopLeft => (x0 + PAD, y0 + PAD),
            LegendPosition::TopRight => (x1 - PAD - width, y0 + PAD),
            LegendPosition::BottomLeft => (x0 + PAD, y1 - PAD - height),
            LegendPosition::BottomRight => (x1 - PAD - width, y1 - PAD - height),
        };
        let frame = Bounds::new(point(px(left), px(top)), size(px(width), px(height)));
        surface.set_color(self.theme.legend_background);
        surface.fill_rect(frame);
        surface.set_color(self.theme.legend_border);
        surface.set_line_width(1.0);
        surface.stroke_rect(frame);

        for (i, item) in entries.iter().enumerate() {
            let row_top = top + PAD + line_height * i as f32;
            let center = point(px(left + PAD + THUMB / 2.0), px(row_top + line_height / 2.0));
            item.draw_thumb(surface, center);
            surface.set_color(self.theme.legend_text);
            surface.draw_text(
                point(px(left + PAD * 2.0 + THUMB), px(row_top + 3.0)),
                item.name(),
                text_size,
            );
        }
    }
}
