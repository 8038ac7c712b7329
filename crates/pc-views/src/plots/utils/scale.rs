//! Axis bounds generation

/// Value range of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Produces the bounds an axis is drawn with from the raw data extent.
///
/// Implementations must return `min < max`.
pub trait AxisScale: Send + Sync {
    fn nice_bounds(&self, min: f64, max: f64) -> AxisBounds;
}

/// Rounds the extent outward to a multiple of a 1/2/5 tick spacing
#[derive(Debug, Clone, Copy)]
pub struct NiceScale {
    pub max_ticks: usize,
}

impl Default for NiceScale {
    fn default() -> Self {
        Self { max_ticks: 5 }
    }
}

impl AxisScale for NiceScale {
    fn nice_bounds(&self, min: f64, max: f64) -> AxisBounds {
        let (min, max) = widen(min, max);
        let range = nice_number(max - min, false);
        let spacing = nice_number(range / (self.max_ticks.max(2) - 1) as f64, true);
        // Rounding in the division can land one ulp inside the extent
        let nice_min = ((min / spacing).floor() * spacing).min(min);
        let nice_max = ((max / spacing).ceil() * spacing).max(max);
        AxisBounds::new(nice_min, nice_max)
    }
}

/// Uses the raw extent as is, widened only when it is empty
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactScale;

impl AxisScale for ExactScale {
    fn nice_bounds(&self, min: f64, max: f64) -> AxisBounds {
        let (min, max) = widen(min, max);
        AxisBounds::new(min, max)
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}

fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;

    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}
