//! Goal Progress View Model

use crate::api::dto::Goal;
use crate::viewmodel::currency::format_inr;
use crate::viewmodel::percent_of;

/// One rendered savings goal.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalRow {
    pub name: String,
    /// `₹25,000 / ₹75,000`
    pub amounts_label: String,
    /// Progress bar width in percent, clamped to [0, 100]. A zero
    /// target renders an empty bar.
    pub progress_percent: f64,
}

impl GoalRow {
    pub fn rows(goals: &[Goal]) -> Vec<GoalRow> {
        goals.iter().map(Self::from_goal).collect()
    }

    fn from_goal(goal: &Goal) -> Self {
        let progress = percent_of(goal.current_amount, goal.target_amount)
            .unwrap_or(0.0)
            .clamp(0.0, 100.0);

        Self {
            name: goal.goal_name.clone(),
            amounts_label: format!(
                "{} / {}",
                format_inr(goal.current_amount),
                format_inr(goal.target_amount)
            ),
            progress_percent: progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str, target: f64, current: f64) -> Goal {
        Goal {
            goal_name: name.to_string(),
            target_amount: target,
            current_amount: current,
        }
    }

    #[test]
    fn progress_is_current_over_target() {
        let rows = GoalRow::rows(&[goal("Goa Trip", 12000.0, 3000.0)]);

        assert_eq!(rows[0].name, "Goa Trip");
        assert_eq!(rows[0].progress_percent, 25.0);
        assert_eq!(rows[0].amounts_label, "₹3,000 / ₹12,000");
    }

    #[test]
    fn overfunded_goal_caps_at_full_bar() {
        let rows = GoalRow::rows(&[goal("Emergency Fund", 50000.0, 65000.0)]);
        assert_eq!(rows[0].progress_percent, 100.0);
    }

    #[test]
    fn zero_target_renders_empty_bar() {
        let rows = GoalRow::rows(&[goal("Unplanned", 0.0, 5000.0)]);
        assert_eq!(rows[0].progress_percent, 0.0);
        assert_eq!(rows[0].amounts_label, "₹5,000 / ₹0");
    }

    #[test]
    fn negative_progress_clamps_to_zero() {
        let rows = GoalRow::rows(&[goal("Overdrawn", 10000.0, -500.0)]);
        assert_eq!(rows[0].progress_percent, 0.0);
    }

    #[test]
    fn no_goals_yield_no_rows() {
        assert!(GoalRow::rows(&[]).is_empty());
    }
}
