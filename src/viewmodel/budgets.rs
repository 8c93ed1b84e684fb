//! Budget Chart View Model
//!
//! Values and pixel layout for the grouped spent-vs-allocated bar
//! chart. The layout works in plot-area coordinates with the origin at
//! the top-left; the component adds the axis margins.

use crate::api::dto::Budget;

pub const SPENT_FILL: &str = "rgba(0, 123, 255, 0.6)";
pub const SPENT_BORDER: &str = "rgba(0, 123, 255, 1)";
pub const ALLOCATED_FILL: &str = "rgba(230, 230, 230, 0.2)";
pub const ALLOCATED_BORDER: &str = "rgba(230, 230, 230, 0.5)";

/// One category's pair of bars.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetBarGroup {
    pub category: String,
    pub spent: f64,
    pub allocated: f64,
}

/// Chart data: one group per budget category, in wire order.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetChartView {
    pub groups: Vec<BudgetBarGroup>,
    /// Top of the y axis: the largest value present, 0 for an empty chart
    pub y_max: f64,
}

impl BudgetChartView {
    pub fn from_budgets(budgets: &[Budget]) -> Self {
        let groups = budgets
            .iter()
            .map(|b| BudgetBarGroup {
                category: b.category.clone(),
                spent: b.spent_amount,
                allocated: b.allocated_amount,
            })
            .collect();

        let y_max = budgets
            .iter()
            .flat_map(|b| [b.spent_amount, b.allocated_amount])
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        Self { groups, y_max }
    }
}

/// A bar in plot-area pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Spent bar when true, allocated bar when false
    pub spent: bool,
}

/// Lay the grouped bars out over a `width` x `height` plot area. Each
/// category gets an equal slot holding its two bars; bars rise from the
/// bottom edge and `y_max` maps to the top.
pub fn layout_bars(view: &BudgetChartView, width: f64, height: f64) -> Vec<BarRect> {
    if view.groups.is_empty() || view.y_max <= 0.0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let slot = width / view.groups.len() as f64;
    // Two bars and a half-bar gutter on each side per slot
    let bar = slot / 3.0;

    let mut rects = Vec::with_capacity(view.groups.len() * 2);
    for (i, group) in view.groups.iter().enumerate() {
        let x0 = i as f64 * slot + bar / 2.0;
        for (offset, value, spent) in [(0.0, group.spent, true), (bar, group.allocated, false)] {
            let h = (value.max(0.0) / view.y_max * height).min(height);
            rects.push(BarRect {
                x: x0 + offset,
                y: height - h,
                width: bar,
                height: h,
                spent,
            });
        }
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(category: &str, allocated: f64, spent: f64) -> Budget {
        Budget {
            category: category.to_string(),
            allocated_amount: allocated,
            spent_amount: spent,
        }
    }

    #[test]
    fn view_keeps_wire_order_and_finds_y_max() {
        let view = BudgetChartView::from_budgets(&[
            budget("Food", 5000.0, 1500.0),
            budget("Transport", 3000.0, 4200.0),
        ]);

        assert_eq!(view.groups[0].category, "Food");
        assert_eq!(view.groups[1].category, "Transport");
        assert_eq!(view.y_max, 5000.0);
    }

    #[test]
    fn overspent_category_dominates_y_max() {
        let view = BudgetChartView::from_budgets(&[budget("Dining", 2000.0, 9000.0)]);
        assert_eq!(view.y_max, 9000.0);
    }

    #[test]
    fn empty_budgets_lay_out_to_nothing() {
        let view = BudgetChartView::from_budgets(&[]);
        assert_eq!(view.y_max, 0.0);
        assert!(layout_bars(&view, 600.0, 300.0).is_empty());
    }

    #[test]
    fn each_group_yields_a_spent_and_an_allocated_bar() {
        let view = BudgetChartView::from_budgets(&[
            budget("Food", 5000.0, 1500.0),
            budget("Transport", 3000.0, 1200.0),
        ]);
        let rects = layout_bars(&view, 600.0, 300.0);

        assert_eq!(rects.len(), 4);
        assert!(rects[0].spent);
        assert!(!rects[1].spent);
        assert!(rects[2].spent);
        assert!(!rects[3].spent);
    }

    #[test]
    fn tallest_bar_reaches_the_top_of_the_plot() {
        let view = BudgetChartView::from_budgets(&[budget("Food", 5000.0, 2500.0)]);
        let rects = layout_bars(&view, 600.0, 300.0);

        // allocated = y_max fills the full height
        assert_eq!(rects[1].y, 0.0);
        assert_eq!(rects[1].height, 300.0);
        // spent = half of y_max rises halfway
        assert_eq!(rects[0].y, 150.0);
        assert_eq!(rects[0].height, 150.0);
    }

    #[test]
    fn bars_stay_inside_their_slots() {
        let view = BudgetChartView::from_budgets(&[
            budget("A", 100.0, 50.0),
            budget("B", 100.0, 50.0),
            budget("C", 100.0, 50.0),
        ]);
        let width = 600.0;
        let slot = width / 3.0;
        let rects = layout_bars(&view, width, 300.0);

        for (i, pair) in rects.chunks(2).enumerate() {
            let slot_start = i as f64 * slot;
            for rect in pair {
                assert!(rect.x >= slot_start);
                assert!(rect.x + rect.width <= slot_start + slot + 1e-9);
            }
        }
    }

    #[test]
    fn negative_values_clamp_to_zero_height() {
        let view = BudgetChartView::from_budgets(&[budget("Refunds", 1000.0, -250.0)]);
        let rects = layout_bars(&view, 600.0, 300.0);

        assert_eq!(rects[0].height, 0.0);
        assert_eq!(rects[0].y, 300.0);
    }
}
