//! Currency-cell normalization using rust_decimal for precision
//!
//! The backing sheet is hand-entered in a locale that mixes comma/period
//! conventions row by row ("R$ 1.234,56", "1234,56", "45.5", "mesa 7").
//! `normalize` is total: it never fails, it degrades to 0, because it runs
//! inside the aggregation path where one bad cell must not abort the whole
//! computation. Separator handling is classified up front so the
//! thousands-vs-decimal ambiguity stays testable in isolation.

use rust_decimal::prelude::*;
use std::str::FromStr;

/// Currency marker found in hand-entered price cells
const CURRENCY_MARKER: &str = "R$";

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// How a cleaned cell uses `.` and `,`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeparatorLayout {
    /// "1.234,56": dot groups thousands, comma is the decimal mark
    DotThousandsCommaDecimal,
    /// "1234,56": comma is the decimal mark
    CommaDecimal,
    /// "1234.56": dot is the decimal mark, taken as-is
    DotDecimal,
    /// No separator at all
    Plain,
}

fn classify(cleaned: &str) -> SeparatorLayout {
    match (cleaned.contains('.'), cleaned.contains(',')) {
        (true, true) => SeparatorLayout::DotThousandsCommaDecimal,
        (false, true) => SeparatorLayout::CommaDecimal,
        (true, false) => SeparatorLayout::DotDecimal,
        (false, false) => SeparatorLayout::Plain,
    }
}

/// Normalize a hand-entered currency/number cell into a numeric value.
///
/// Total function: unparseable input returns 0. Empty cells and the
/// spreadsheet artifacts "None"/"NaN" read as 0. Cells with a currency
/// marker or separator are parsed as decimals under the layout rules
/// above; anything else yields its first run of digits ("mesa 7" → 7).
pub fn normalize(raw: &str) -> f64 {
    let value = raw.trim().to_uppercase();
    if value.is_empty() || value == "NONE" || value == "NAN" {
        return 0.0;
    }

    if value.contains(CURRENCY_MARKER) || value.contains(',') || value.contains('.') {
        return parse_separated(&value);
    }

    first_digit_run(&value).unwrap_or(0.0)
}

fn parse_separated(value: &str) -> f64 {
    let cleaned = value.replace(CURRENCY_MARKER, "").replace(' ', "");
    let canonical = match classify(&cleaned) {
        SeparatorLayout::DotThousandsCommaDecimal => cleaned.replace('.', "").replace(',', "."),
        SeparatorLayout::CommaDecimal => cleaned.replace(',', "."),
        SeparatorLayout::DotDecimal | SeparatorLayout::Plain => cleaned,
    };
    Decimal::from_str(&canonical)
        .ok()
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

fn first_digit_run(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok().map(|n| n as f64)
}

/// Convert f64 to Decimal for accumulation
#[inline]
pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub(crate) fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Render a charged amount for a sheet cell, trailing zeros stripped
/// so "80" round-trips as 80 and "80.5" as 80.5
pub fn format_amount(value: f64) -> String {
    to_decimal(value)
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}
