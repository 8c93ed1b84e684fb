//! Summary View Model
//!
//! The topline cards: portfolio value with PnL, day gain, financial
//! health, and total monthly spend.

use crate::api::dto::DashboardSnapshot;
use crate::viewmodel::currency::format_inr;
use crate::viewmodel::{percent_of, Polarity};

/// Everything the summary section renders, preformatted.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    /// Current portfolio value, e.g. `₹1,29,200`
    pub portfolio_value: String,
    /// PnL with percent of invested, e.g. `₹8,665 (7.19%)`. The percent
    /// reads `—` when nothing is invested.
    pub pnl_label: String,
    pub pnl_polarity: Polarity,
    /// `Today: ₹851`
    pub day_gain_label: String,
    pub day_gain_polarity: Polarity,
    /// Health score copied verbatim from the server
    pub health_score: String,
    pub health_assessment: String,
    /// Sum of `spent_amount` across all budgets
    pub total_spent: String,
}

impl SummaryView {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        let portfolio = &snapshot.portfolio;

        let pnl_label = match percent_of(portfolio.overall_pnl, portfolio.total_invested) {
            Some(percent) => format!("{} ({:.2}%)", format_inr(portfolio.overall_pnl), percent),
            None => format!("{} (—)", format_inr(portfolio.overall_pnl)),
        };

        let total_spent: f64 = snapshot.budgets.iter().map(|b| b.spent_amount).sum();

        Self {
            portfolio_value: format_inr(portfolio.current_value),
            pnl_label,
            pnl_polarity: Polarity::of(portfolio.overall_pnl),
            day_gain_label: format!("Today: {}", format_inr(portfolio.day_gain)),
            day_gain_polarity: Polarity::of(portfolio.day_gain),
            health_score: snapshot.financial_health.score.to_string(),
            health_assessment: snapshot.financial_health.assessment.clone(),
            total_spent: format_inr(total_spent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{Budget, FinancialHealth, Portfolio};

    fn snapshot(portfolio: Portfolio, budgets: Vec<Budget>) -> DashboardSnapshot {
        DashboardSnapshot {
            portfolio,
            financial_health: FinancialHealth {
                score: 742,
                assessment: "Good".to_string(),
            },
            budgets,
            goals: Vec::new(),
            transactions: Vec::new(),
        }
    }

    fn portfolio(invested: f64, value: f64, day_gain: f64, pnl: f64) -> Portfolio {
        Portfolio {
            total_invested: invested,
            current_value: value,
            day_gain,
            overall_pnl: pnl,
            allocation: Vec::new(),
        }
    }

    fn budget(category: &str, allocated: f64, spent: f64) -> Budget {
        Budget {
            category: category.to_string(),
            allocated_amount: allocated,
            spent_amount: spent,
        }
    }

    #[test]
    fn pnl_percent_is_relative_to_invested() {
        let view = SummaryView::from_snapshot(&snapshot(
            portfolio(100000.0, 115000.0, 0.0, 15000.0),
            Vec::new(),
        ));

        assert_eq!(view.pnl_label, "₹15,000 (15.00%)");
        assert_eq!(view.pnl_polarity, Polarity::Positive);
    }

    #[test]
    fn losing_portfolio_reads_negative() {
        let view = SummaryView::from_snapshot(&snapshot(
            portfolio(100000.0, 95000.0, -850.5, -5000.0),
            Vec::new(),
        ));

        assert_eq!(view.pnl_label, "-₹5,000 (-5.00%)");
        assert_eq!(view.pnl_polarity, Polarity::Negative);
        assert_eq!(view.day_gain_label, "Today: -₹851");
        assert_eq!(view.day_gain_polarity, Polarity::Negative);
    }

    #[test]
    fn zero_invested_renders_percent_placeholder() {
        let view =
            SummaryView::from_snapshot(&snapshot(portfolio(0.0, 0.0, 0.0, 0.0), Vec::new()));

        assert_eq!(view.pnl_label, "₹0 (—)");
        assert_eq!(view.pnl_polarity, Polarity::Positive);
    }

    #[test]
    fn total_spent_sums_every_budget() {
        let view = SummaryView::from_snapshot(&snapshot(
            portfolio(0.0, 0.0, 0.0, 0.0),
            vec![budget("Food", 5000.0, 500.0), budget("Transport", 3000.0, 1500.0)],
        ));

        assert_eq!(view.total_spent, "₹2,000");
    }

    #[test]
    fn no_budgets_means_zero_spent() {
        let view =
            SummaryView::from_snapshot(&snapshot(portfolio(0.0, 0.0, 0.0, 0.0), Vec::new()));

        assert_eq!(view.total_spent, "₹0");
    }

    #[test]
    fn health_fields_are_copied_verbatim() {
        let view = SummaryView::from_snapshot(&snapshot(
            portfolio(120535.0, 129200.0, 850.5, 8665.0),
            Vec::new(),
        ));

        assert_eq!(view.health_score, "742");
        assert_eq!(view.health_assessment, "Good");
        assert_eq!(view.portfolio_value, "₹1,29,200");
        assert_eq!(view.day_gain_label, "Today: ₹851");
    }
}
