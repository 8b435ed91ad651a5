//! Progress ring geometry.
//!
//! The ring is a circle of fixed radius whose visible arc is controlled by
//! its dash offset: `offset = circumference - percentage / 100 * circumference`.
//! An offset equal to the circumference draws nothing, an offset of zero
//! draws the full circle.
//!
//! ```rust
//! use taskboard::libs::progress::{ProgressRing, RING_RADIUS};
//!
//! let ring = ProgressRing::new(40.0);
//! let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
//! assert!((ring.offset - (circumference - 0.40 * circumference)).abs() < 1e-9);
//! assert_eq!(ring.label(), "40%");
//! ```

use std::f64::consts::PI;

/// Radius of the ring in view units.
pub const RING_RADIUS: f64 = 54.0;

/// Cells in the terminal gauge.
pub const GAUGE_WIDTH: usize = 24;

const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressRing {
    /// Percentage after clamping to 0..=100.
    pub percentage: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Dash offset of the visible arc.
    pub offset: f64,
}

impl ProgressRing {
    pub fn new(percentage: f64) -> Self {
        Self::with_radius(percentage, RING_RADIUS)
    }

    pub fn with_radius(percentage: f64, radius: f64) -> Self {
        let percentage = clamp_percentage(percentage);
        let circumference = 2.0 * PI * radius;
        Self {
            percentage,
            radius,
            circumference,
            offset: dash_offset(percentage, circumference),
        }
    }

    /// Share of the circle that is drawn, 0.0 to 1.0.
    pub fn filled_fraction(&self) -> f64 {
        if self.circumference == 0.0 {
            return 0.0;
        }
        (self.circumference - self.offset) / self.circumference
    }

    /// Rounded percentage as shown in the middle of the ring.
    pub fn label(&self) -> String {
        format!("{}%", self.percentage.round() as i64)
    }

    /// Text rendition of the arc, `width` cells wide.
    pub fn gauge(&self, width: usize) -> String {
        let filled = ((self.filled_fraction() * width as f64).round() as usize).min(width);
        let mut gauge = String::with_capacity(width * FILLED.len_utf8());
        gauge.extend(std::iter::repeat(FILLED).take(filled));
        gauge.extend(std::iter::repeat(EMPTY).take(width - filled));
        gauge
    }
}

/// Dash offset for `percentage` of a circle with the given circumference.
pub fn dash_offset(percentage: f64, circumference: f64) -> f64 {
    circumference - (percentage / 100.0 * circumference)
}

fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
