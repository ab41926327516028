//! Display helpers shared by insights, metric cards and the terminal renderer.
//!
//! Every helper rounds half away from zero before formatting.

use rust_decimal::{Decimal, RoundingStrategy};

pub(crate) fn two_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `17.80%`
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", two_dp(value))
}

/// `0.86`: ratios such as Sharpe and profit factor.
pub fn ratio(value: Decimal) -> String {
    format!("{:.2}", two_dp(value))
}

/// `63%`: pie slice labels.
pub fn whole_percent(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.0}%", whole)
}

/// `80%` or `80.95%`: at most two decimals, trailing zeros dropped.
pub fn compact_percent(value: Decimal) -> String {
    format!("{}%", two_dp(value).normalize())
}

/// `$4,714` for whole amounts, `$1,250.50` otherwise. Negative amounts get a
/// leading minus sign.
pub fn money(value: Decimal) -> String {
    let fixed = format!("{:.2}", two_dp(value.abs()));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    if cents == "00" {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{}", sign, grouped, cents)
    }
}
