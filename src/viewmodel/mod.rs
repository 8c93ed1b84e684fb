//! View Models
//!
//! Pure transformations from the dashboard snapshot to what each
//! renderer draws. Nothing in here touches the DOM; the render math
//! runs and is tested on the host target.

pub mod allocation;
pub mod budgets;
pub mod currency;
pub mod goals;
pub mod summary;
pub mod transactions;

pub use allocation::AllocationView;
pub use budgets::BudgetChartView;
pub use goals::GoalRow;
pub use summary::SummaryView;
pub use transactions::TransactionRow;

/// Sign bucket for money values. Zero counts as positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }

    /// Style class applied to the value's element.
    pub fn css_class(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }
}

/// `part / whole * 100`, or `None` when the denominator is zero or
/// either input is non-finite.
pub(crate) fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 || !part.is_finite() || !whole.is_finite() {
        return None;
    }
    Some(part / whole * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_plain_ratio() {
        assert_eq!(percent_of(15000.0, 100000.0), Some(15.0));
        assert_eq!(percent_of(3000.0, 12000.0), Some(25.0));
    }

    #[test]
    fn percent_of_zero_denominator_is_undefined() {
        assert_eq!(percent_of(500.0, 0.0), None);
        assert_eq!(percent_of(0.0, 0.0), None);
    }

    #[test]
    fn percent_of_rejects_non_finite_input() {
        assert_eq!(percent_of(f64::NAN, 100.0), None);
        assert_eq!(percent_of(100.0, f64::INFINITY), None);
    }

    #[test]
    fn percent_of_negative_numerator() {
        assert_eq!(percent_of(-5000.0, 10000.0), Some(-50.0));
    }

    #[test]
    fn polarity_treats_zero_as_positive() {
        assert_eq!(Polarity::of(0.0), Polarity::Positive);
        assert_eq!(Polarity::of(12.5), Polarity::Positive);
        assert_eq!(Polarity::of(-0.01), Polarity::Negative);
    }

    #[test]
    fn polarity_css_classes() {
        assert_eq!(Polarity::Positive.css_class(), "positive");
        assert_eq!(Polarity::Negative.css_class(), "negative");
    }
}
