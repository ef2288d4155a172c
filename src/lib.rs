//! gpui_slope: figures, Cartesian metrics and plot items rendered through GPUI

pub mod axis;
pub mod config;
pub mod figure;
pub mod figure_view;
pub mod gpui_backend;
pub mod item;
pub mod metrics;
pub mod scales;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;
pub mod xy_item;
pub mod xy_metrics;

pub use axis::{Axis, AxisSide};
pub use config::{FigureConfig, LegendConfig, LegendPosition, MetricsConfig};
pub use figure::{ChangeKind, Figure, FigureChange, MIN_REGION_PIXELS};
pub use figure_view::FigureView;
pub use item::{DataBounds, Item, ItemBase, ItemId};
pub use metrics::{Metrics, MetricsId};
pub use surface::{DrawCommand, DrawList, Surface};
pub use transform::{DataWindow, FigureWindow, Mapping};
pub use xy_item::{XyItem, XyItemStyle};
pub use xy_metrics::XyMetrics;
