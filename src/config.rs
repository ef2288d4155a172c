//! Serializable defaults for figures and metrics regions.

use eyre::{bail, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub x_low_bound: f64,
    pub x_up_bound: f64,
    pub y_low_bound: f64,
    pub y_up_bound: f64,
    /// Fraction of the data span added on each side when auto-scaling.
    pub padding: f64,
    pub top_label: String,
    pub bottom_label: String,
    pub left_label: String,
    pub right_label: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            x_low_bound: 80.0,
            x_up_bound: 80.0,
            y_low_bound: 45.0,
            y_up_bound: 45.0,
            padding: 1.0 / 20.0,
            top_label: String::new(),
            bottom_label: "X".to_string(),
            left_label: "Y".to_string(),
            right_label: String::new(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        let margins = [
            ("x_low_bound", self.x_low_bound),
            ("x_up_bound", self.x_up_bound),
            ("y_low_bound", self.y_low_bound),
            ("y_up_bound", self.y_up_bound),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                bail!("metrics margin `{name}` must be a non-negative number, got {value}");
            }
        }
        if !(0.0..0.5).contains(&self.padding) {
            bail!("metrics `padding` must be in [0, 0.5), got {}", self.padding);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum LegendPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub enabled: bool,
    pub position: LegendPosition,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: LegendPosition::TopRight,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub metrics: MetricsConfig,
    pub legend: LegendConfig,
}

impl FigureConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FigureConfig =
            serde_json::from_str(json).wrap_err("failed to parse figure config")?;
        config.metrics.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read figure config {}", path.display()))?;
        Self::from_json(&json).wrap_err_with(|| format!("invalid figure config {}", path.display()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize figure config")
    }
}
