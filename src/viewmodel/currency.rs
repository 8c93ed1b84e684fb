//! Currency Formatting
//!
//! Zero-decimal INR formatting with Indian digit grouping, matching
//! what `Intl.NumberFormat('en-IN')` produces for currency: the last
//! three digits form one group, every group above that has two.

/// Format `amount` as whole-rupee INR: `₹1,29,200`, `-₹851`.
///
/// Rounds half away from zero. Non-finite input renders as `₹0`, and a
/// negative amount that rounds to zero drops its sign: `-0.4` renders
/// as `₹0`, where `Intl.NumberFormat('en-IN')` would keep the minus.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }

    let negative = amount < 0.0;
    let units = amount.abs().round() as i64;
    let grouped = group_indian(units);

    if negative && units != 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Indian grouping: `12345678` becomes `1,23,45,678`.
fn group_indian(value: i64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
