//! Frame axes of a Cartesian metrics region.

use crate::item::{DataBounds, Item, ItemBase};
use crate::scales::TickScale;
use crate::surface::Surface;
use crate::transform::Mapping;
use gpui::*;
use serde::{Deserialize, Serialize};
use std::any::Any;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AxisSide {
    /// Draw order of the frame axes.
    pub const ALL: [AxisSide; 4] = [
        AxisSide::Top,
        AxisSide::Bottom,
        AxisSide::Left,
        AxisSide::Right,
    ];

    pub fn index(self) -> usize {
        match self {
            AxisSide::Top => 0,
            AxisSide::Bottom => 1,
            AxisSide::Left => 2,
            AxisSide::Right => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, AxisSide::Top | AxisSide::Bottom)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub line_color: Hsla,
    pub label_color: Hsla,
    pub label_size: Pixels,
    pub line_width: f32,
    pub tick_length: f32,
    /// Approximate pixel distance between ticks.
    pub tick_spacing: f32,
    pub show_ticks: bool,
    pub show_tick_labels: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            line_color: gpui::black(),
            label_color: gpui::black(),
            label_size: px(11.0),
            line_width: 1.0,
            tick_length: 5.0,
            tick_spacing: 80.0,
            show_ticks: true,
            show_tick_labels: true,
        }
    }
}

pub struct Axis {
    base: ItemBase,
    side: AxisSide,
    pub config: AxisConfig,
}

impl Axis {
    pub fn new(side: AxisSide, label: impl Into<String>) -> Self {
        let mut base = ItemBase::new(label);
        base.rescalable = false;
        let config = AxisConfig {
            show_tick_labels: matches!(side, AxisSide::Bottom | AxisSide::Left),
            ..Default::default()
        };
        Self { base, side, config }
    }

    pub fn side(&self) -> AxisSide {
        self.side
    }

    pub fn label(&self) -> &str {
        &self.base.name
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.base.name = label.into();
    }

    /// Tick values for the current data window of `mapping`.
    pub fn ticks(&self, mapping: &dyn Mapping) -> Vec<f64> {
        self.scale_and_ticks(mapping).1
    }

    fn scale_and_ticks(&self, mapping: &dyn Mapping) -> (TickScale, Vec<f64>) {
        let data = mapping.data_window();
        let figure = mapping.figure_window();
        let (scale, extent) = if self.side.is_horizontal() {
            (TickScale::new(data.xmin, data.xmax), figure.width())
        } else {
            (TickScale::new(data.ymin, data.ymax), figure.height())
        };
        let ticks = scale.ticks(TickScale::count_for_extent(
            extent,
            self.config.tick_spacing as f64,
        ));
        (scale, ticks)
    }
}

impl Item for Axis {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn bounds(&self) -> Option<DataBounds> {
        None
    }

    fn draw(&self, surface: &mut dyn Surface, mapping: &dyn Mapping) {
        let fw = mapping.figure_window();
        let (x0, x1, y0, y1) = (
            fw.xmin as f32,
            fw.xmax as f32,
            fw.ymin as f32,
            fw.ymax as f32,
        );
        let font = self.config.label_size;
        let font_f = f32::from(font);
        let tick = self.config.tick_length;

        surface.set_color(self.config.line_color);
        surface.set_line_width(self.config.line_width);
        let spine = match self.side {
            AxisSide::Top => [point(px(x0), px(y0)), point(px(x1), px(y0))],
            AxisSide::Bottom => [point(px(x0), px(y1)), point(px(x1), px(y1))],
            AxisSide::Left => [point(px(x0), px(y0)), point(px(x0), px(y1))],
            AxisSide::Right => [point(px(x1), px(y0)), point(px(x1), px(y1))],
        };
        surface.stroke_polyline(&spine);

        let (scale, ticks) = self.scale_and_ticks(mapping);
        let step = scale.step(&ticks);
        for value in &ticks {
            let (mark, label_origin, text) = match self.side {
                AxisSide::Top | AxisSide::Bottom => {
                    let x = mapping.map_x(*value) as f32;
                    let text = scale.format_tick(*value, step);
                    let w = text_width(&text, font_f);
                    if self.side == AxisSide::Top {
                        (
                            [point(px(x), px(y0)), point(px(x), px(y0 + tick))],
                            point(px(x - w / 2.0), px(y0 - font_f - 4.0)),
                            text,
                        )
                    } else {
                        (
                            [point(px(x), px(y1)), point(px(x), px(y1 - tick))],
                            point(px(x - w / 2.0), px(y1 + 4.0)),
                            text,
                        )
                    }
                }
                AxisSide::Left | AxisSide::Right => {
                    let y = mapping.map_y(*value) as f32;
                    let text = scale.format_tick(*value, step);
                    let w = text_width(&text, font_f);
                    if self.side == AxisSide::Left {
                        (
                            [point(px(x0), px(y)), point(px(x0 + tick), px(y))],
                            point(px(x0 - w - 6.0), px(y - font_f / 2.0)),
                            text,
                        )
                    } else {
                        (
                            [point(px(x1), px(y)), point(px(x1 - tick), px(y))],
                            point(px(x1 + 6.0), px(y - font_f / 2.0)),
                            text,
                        )
                    }
                }
            };
            if self.config.show_ticks {
                surface.set_color(self.config.line_color);
                surface.stroke_polyline(&mark);
            }
            if self.config.show_tick_labels {
                surface.set_color(self.config.label_color);
                surface.draw_text(label_origin, &text, font);
            }
        }

        let label = self.label();
        if label.is_empty() {
            return;
        }
        let w = text_width(label, font_f);
        let gap = if self.config.show_tick_labels {
            font_f + 10.0
        } else {
            6.0
        };
        let origin = match self.side {
            AxisSide::Top => point(px((x0 + x1 - w) / 2.0), px(y0 - gap - font_f)),
            AxisSide::Bottom => point(px((x0 + x1 - w) / 2.0), px(y1 + gap)),
            AxisSide::Left => point(px(x0 - w - gap * 3.0), px((y0 + y1 - font_f) / 2.0)),
            AxisSide::Right => point(px(x1 + gap * 3.0), px((y0 + y1 - font_f) / 2.0)),
        };
        surface.set_color(self.config.label_color);
        surface.draw_text(origin, label, font);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Rough advance width; the core has no access to font metrics.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6
}
