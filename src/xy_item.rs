use crate::item::{DataBounds, Item, ItemBase};
use crate::surface::Surface;
use crate::transform::Mapping;
use gpui::*;
use serde::{Deserialize, Serialize};
use std::any::Any;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum XyItemStyle {
    #[default]
    Line,
    Circles,
    Squares,
    Plusses,
}

#[derive(Clone, Debug, PartialEq)]
pub struct XyItemConfig {
    pub color: Hsla,
    pub line_width: f32,
    pub style: XyItemStyle,
    /// Marker edge length in pixels for the scatter styles.
    pub marker_size: f32,
}

impl Default for XyItemConfig {
    fn default() -> Self {
        Self {
            color: gpui::blue(),
            line_width: 1.5,
            style: XyItemStyle::Line,
            marker_size: 6.0,
        }
    }
}

/// A plotted series of (x, y) samples.
pub struct XyItem {
    base: ItemBase,
    x: Vec<f64>,
    y: Vec<f64>,
    bounds: Option<DataBounds>,
    pub config: XyItemConfig,
}

impl XyItem {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        let mut item = Self {
            base: ItemBase::new(name),
            x: vec![],
            y: vec![],
            bounds: None,
            config: XyItemConfig::default(),
        };
        item.set_data(x, y);
        item
    }

    pub fn with_style(mut self, style: XyItemStyle) -> Self {
        self.config.style = style;
        self
    }

    pub fn with_color(mut self, color: Hsla) -> Self {
        self.config.color = color;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.config.line_width = width;
        self
    }

    /// Non-rescalable items (reference lines, guides) are drawn but never
    /// influence auto-scaling.
    pub fn with_rescalable(mut self, rescalable: bool) -> Self {
        self.base.rescalable = rescalable;
        self
    }

    /// Replaces the samples. Series of different lengths are truncated to the shorter one.
    pub fn set_data(&mut self, mut x: Vec<f64>, mut y: Vec<f64>) {
        if x.len() != y.len() {
            tracing::warn!(
                item = %self.base.name,
                x_len = x.len(),
                y_len = y.len(),
                "mismatched series lengths, truncating"
            );
            let n = x.len().min(y.len());
            x.truncate(n);
            y.truncate(n);
        }
        self.x = x;
        self.y = y;
        self.bounds = compute_bounds(&self.x, &self.y);
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn draw_marker(&self, surface: &mut dyn Surface, center: Point<Pixels>) {
        let half = px(self.config.marker_size / 2.0);
        match self.config.style {
            XyItemStyle::Line => {}
            XyItemStyle::Circles => {
                const SEGMENTS: usize = 12;
                let r = self.config.marker_size / 2.0;
                let points: Vec<Point<Pixels>> = (0..SEGMENTS)
                    .map(|i| {
                        let a = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
                        point(center.x + px(r * a.cos()), center.y + px(r * a.sin()))
                    })
                    .collect();
                surface.fill_polygon(&points);
            }
            XyItemStyle::Squares => {
                surface.fill_rect(Bounds::new(
                    point(center.x - half, center.y - half),
                    size(half * 2.0, half * 2.0),
                ));
            }
            XyItemStyle::Plusses => {
                surface.stroke_polyline(&[
                    point(center.x - half, center.y),
                    point(center.x + half, center.y),
                ]);
                surface.stroke_polyline(&[
                    point(center.x, center.y - half),
                    point(center.x, center.y + half),
                ]);
            }
        }
    }
}

impl Item for XyItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn bounds(&self) -> Option<DataBounds> {
        self.bounds
    }

    fn update(&mut self) {
        self.bounds = compute_bounds(&self.x, &self.y);
    }

    fn draw(&self, surface: &mut dyn Surface, mapping: &dyn Mapping) {
        surface.set_color(self.config.color);
        surface.set_line_width(self.config.line_width);

        match self.config.style {
            XyItemStyle::Line => {
                // Non-finite samples split the curve into separate runs.
                let mut run: Vec<Point<Pixels>> = Vec::with_capacity(self.x.len());
                for (&x, &y) in self.x.iter().zip(&self.y) {
                    if x.is_finite() && y.is_finite() {
                        run.push(mapping.data_to_screen(x, y));
                    } else {
                        surface.stroke_polyline(&run);
                        run.clear();
                    }
                }
                surface.stroke_polyline(&run);
            }
            _ => {
                for (&x, &y) in self.x.iter().zip(&self.y) {
                    if x.is_finite() && y.is_finite() {
                        self.draw_marker(surface, mapping.data_to_screen(x, y));
                    }
                }
            }
        }
    }

    fn draw_thumb(&self, surface: &mut dyn Surface, center: Point<Pixels>) {
        surface.set_color(self.config.color);
        surface.set_line_width(self.config.line_width);
        match self.config.style {
            XyItemStyle::Line => surface.stroke_polyline(&[
                point(center.x - px(10.0), center.y),
                point(center.x + px(10.0), center.y),
            ]),
            _ => self.draw_marker(surface, center),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn compute_bounds(x: &[f64], y: &[f64]) -> Option<DataBounds> {
    x.iter()
        .zip(y)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc: Option<DataBounds>, (&x, &y)| {
            let b = DataBounds {
                xmin: x,
                xmax: x,
                ymin: y,
                ymax: y,
            };
            Some(match acc {
                Some(acc) => acc.union(&b),
                None => b,
            })
        })
}
