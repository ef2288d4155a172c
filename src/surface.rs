//! Drawing surface abstraction.
//!
//! Items, axes and metrics never talk to a graphics backend directly; they issue
//! primitives through [`Surface`]. [`DrawList`] records those primitives so they can
//! be replayed on a GPUI window (see [`crate::gpui_backend`]) or inspected headlessly.

use gpui::{Bounds, Hsla, Pixels, Point};

/// Graphics backend consumed by the plotting core.
pub trait Surface {
    fn set_color(&mut self, color: Hsla);
    fn set_line_width(&mut self, width: f32);

    fn stroke_polyline(&mut self, points: &[Point<Pixels>]);
    fn fill_polygon(&mut self, points: &[Point<Pixels>]);

    /// Outline of a rectangle with the current color and line width.
    fn stroke_rect(&mut self, bounds: Bounds<Pixels>);
    fn fill_rect(&mut self, bounds: Bounds<Pixels>);

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point<Pixels>, text: &str, size: Pixels);

    /// Restricts subsequent drawing to `bounds` (intersected with any active clip).
    fn push_clip(&mut self, bounds: Bounds<Pixels>);
    /// Restores the clip region active before the matching [`Surface::push_clip`].
    fn pop_clip(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Hsla,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<Point<Pixels>>,
        stroke: Stroke,
    },
    Polygon {
        points: Vec<Point<Pixels>>,
        color: Hsla,
    },
    StrokeRect {
        bounds: Bounds<Pixels>,
        stroke: Stroke,
    },
    FillRect {
        bounds: Bounds<Pixels>,
        color: Hsla,
    },
    Text {
        origin: Point<Pixels>,
        text: String,
        size: Pixels,
        color: Hsla,
    },
    PushClip(Bounds<Pixels>),
    PopClip,
}

/// Records surface primitives in issue order.
#[derive(Clone, Debug)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    color: Hsla,
    line_width: f32,
    clip_depth: usize,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            color: gpui::black(),
            line_width: 1.0,
            clip_depth: 0,
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_depth = 0;
    }

    fn stroke(&self) -> Stroke {
        Stroke {
            color: self.color,
            width: self.line_width,
        }
    }
}

impl Surface for DrawList {
    fn set_color(&mut self, color: Hsla) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn stroke_polyline(&mut self, points: &[Point<Pixels>]) {
        if points.len() < 2 {
            return;
        }
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke: self.stroke(),
        });
    }

    fn fill_polygon(&mut self, points: &[Point<Pixels>]) {
        if points.len() < 3 {
            return;
        }
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color: self.color,
        });
    }

    fn stroke_rect(&mut self, bounds: Bounds<Pixels>) {
        self.commands.push(DrawCommand::StrokeRect {
            bounds,
            stroke: self.stroke(),
        });
    }

    fn fill_rect(&mut self, bounds: Bounds<Pixels>) {
        self.commands.push(DrawCommand::FillRect {
            bounds,
            color: self.color,
        });
    }

    fn draw_text(&mut self, origin: Point<Pixels>, text: &str, size: Pixels) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            size,
            color: self.color,
        });
    }

    fn push_clip(&mut self, bounds: Bounds<Pixels>) {
        self.clip_depth += 1;
        self.commands.push(DrawCommand::PushClip(bounds));
    }

    fn pop_clip(&mut self) {
        // Unbalanced pops are dropped.
        if self.clip_depth == 0 {
            tracing::warn!("pop_clip without matching push_clip");
            return;
        }
        self.clip_depth -= 1;
        self.commands.push(DrawCommand::PopClip);
    }
}
