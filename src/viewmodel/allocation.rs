//! Allocation Chart View Model
//!
//! Slice fractions and angles for the portfolio allocation doughnut.
//! Angles are in radians; the first slice starts at 12 o'clock and
//! slices run clockwise.

use std::f64::consts::PI;

use crate::api::dto::AllocationEntry;

/// Slice palette, cycled when there are more asset classes than colors.
pub const SLICE_COLORS: [&str; 4] = ["#007bff", "#28a745", "#ffc107", "#17a2b8"];

/// Separator color between slices, matching the card background.
pub const SLICE_BORDER: &str = "#1e1e1e";

/// One doughnut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceView {
    pub name: String,
    pub color: &'static str,
    /// Share of the total in [0, 1]
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// The full doughnut. Empty when the allocation has no positive value.
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationView {
    pub slices: Vec<SliceView>,
}

/// Negative and non-finite values contribute nothing to the doughnut.
fn weight(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

impl AllocationView {
    pub fn from_allocation(allocation: &[AllocationEntry]) -> Self {
        let total: f64 = allocation.iter().map(|entry| weight(entry.value)).sum();

        if total <= 0.0 {
            return Self { slices: Vec::new() };
        }

        let mut angle = -PI / 2.0;
        let slices = allocation
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let fraction = weight(entry.value) / total;
                let start_angle = angle;
                angle += fraction * 2.0 * PI;
                SliceView {
                    name: entry.name.clone(),
                    color: SLICE_COLORS[i % SLICE_COLORS.len()],
                    fraction,
                    start_angle,
                    end_angle: angle,
                }
            })
            .collect();

        Self { slices }
    }
}
