use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Tick generation for one axis direction of a data window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickScale {
    pub min: f64,
    pub max: f64,
}

impl TickScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// "Nice" tick values inside `[min, max]`, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max <= self.min {
            return vec![];
        }
        let mut ticks = LinearScale::new()
            .domain(self.min, self.max)
            .range(0.0, 1.0)
            .ticks(count.max(2));
        ticks.retain(|t| *t >= self.min && *t <= self.max);
        ticks
    }

    /// Tick count that keeps labels about `spacing` pixels apart over `extent` pixels.
    pub fn count_for_extent(extent: f64, spacing: f64) -> usize {
        if spacing <= 0.0 || !extent.is_finite() {
            return 2;
        }
        ((extent / spacing).floor() as usize).clamp(2, 20)
    }

    /// Distance between consecutive ticks, or the whole span with fewer than two ticks.
    pub fn step(&self, ticks: &[f64]) -> f64 {
        match ticks {
            [a, b, ..] => b - a,
            _ => self.max - self.min,
        }
    }

    /// Formats a tick with just enough digits to tell ticks `step` apart.
    pub fn format_tick(&self, value: f64, step: f64) -> String {
        let step = step.abs();
        if !step.is_finite() || step == 0.0 {
            return format!("{}", value);
        }
        // Ticks that should be zero often come out as 1e-17 noise.
        if value.abs() < step * 1e-9 {
            return "0".to_string();
        }
        let step_exp = (step.log10() + 1e-9).floor() as i32;
        if value.abs() >= 1e6 || value.abs() < 1e-3 {
            let value_exp = value.abs().log10().floor() as i32;
            let digits = (value_exp - step_exp).clamp(0, 15) as usize;
            format!("{:.*e}", digits, value)
        } else {
            let decimals = (-step_exp).clamp(0, 15) as usize;
            format!("{:.*}", decimals, value)
        }
    }
}
