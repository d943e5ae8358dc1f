//! Salary parsing and summary statistics.
//!
//! Salary columns hold free text such as `"€80k-€100k"`, `"90K/yr"`,
//! `"80,000"` or `"Competitive"`. Parsing yields a range in whole currency
//! units; currency markers are stripped, never converted.

use std::str::FromStr;
use std::sync::LazyLock;

use joblens_core::Listing;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{mean_of_two, SalaryPoint, SalaryRange, SalaryStats};

/// ISO codes of currencies commonly written next to amounts. Symbols are
/// matched by Unicode category instead.
static CURRENCY_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\p{Sc}|eur|usd|gbp|chf|cad|aud").expect("valid currency regex")
});

static PERIOD_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/(yr|year|annum)$").expect("valid period regex"));

/// First dash splits the range; the left side is matched lazily.
static RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)-(.+)$").expect("valid range regex"));

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)(k)?$").expect("valid amount regex"));

/// Parses a free-text salary into a range.
///
/// Accepted forms, after stripping currency markers, whitespace, thousands
/// separators and a trailing `/yr`, `/year` or `/annum`:
/// - `"<amount>-<amount>"` with `min <= max`
/// - a single `"<amount>"`, yielding a degenerate range
///
/// An amount is an integer or decimal with an optional `k` suffix (×1000),
/// rounded to the nearest unit. Returns `None` for anything else, including
/// blank input and non-numeric text like `"Competitive"`.
#[must_use]
pub fn parse_salary(raw: &str) -> Option<SalaryRange> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(caps) = RANGE.captures(&cleaned) {
        if let (Some(min), Some(max)) = (parse_amount(&caps[1]), parse_amount(&caps[2])) {
            if min <= max {
                return Some(SalaryRange { min, max });
            }
        }
    }

    parse_amount(&cleaned).map(|value| SalaryRange {
        min: value,
        max: value,
    })
}

fn clean(raw: &str) -> String {
    let without_currency = CURRENCY_MARKERS.replace_all(raw, "");
    let compact: String = without_currency
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| if matches!(c, '\u{2013}' | '\u{2014}') { '-' } else { c })
        .collect();
    PERIOD_SUFFIX.replace(&compact, "").into_owned()
}

/// Parses one amount token. `None` means "no value", which is distinct from
/// a parsed zero.
fn parse_amount(token: &str) -> Option<u64> {
    let token = CURRENCY_MARKERS.replace_all(token.trim(), "");
    let caps = AMOUNT.captures(&token)?;

    let mut value = Decimal::from_str(&caps[1]).ok()?;
    if caps.get(2).is_some() {
        value = value.checked_mul(Decimal::ONE_THOUSAND)?;
    }

    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

/// Summarizes the salaries of all listings whose salary text parses.
///
/// Unparseable salaries are excluded rather than counted as zero. The
/// statistics are taken over per-listing midpoints: `min`/`max` are the
/// smallest and largest midpoint, `average` the rounded mean, and `median`
/// the middle midpoint (rounded mean of the middle two for even counts).
#[must_use]
pub fn salary_stats(listings: &[Listing]) -> SalaryStats {
    let mut data: Vec<SalaryPoint> = listings
        .iter()
        .filter_map(|listing| {
            let range = parse_salary(&listing.salary)?;
            Some(SalaryPoint {
                title: listing.title.clone(),
                min: range.min,
                max: range.max,
                midpoint: range.midpoint(),
            })
        })
        .collect();

    tracing::debug!(
        listings = listings.len(),
        parsed = data.len(),
        "aggregated salary statistics"
    );

    if data.is_empty() {
        return SalaryStats::default();
    }

    data.sort_by_key(|point| point.midpoint);
    let midpoints: Vec<u64> = data.iter().map(|point| point.midpoint).collect();

    SalaryStats {
        min: midpoints.first().copied(),
        max: midpoints.last().copied(),
        average: rounded_mean(&midpoints),
        median: median(&midpoints),
        data,
    }
}

/// Rounded (half up) mean. `None` for an empty slice.
fn rounded_mean(values: &[u64]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as u128;
    let sum: u128 = values.iter().map(|&v| u128::from(v)).sum();
    // The mean never exceeds the largest value, so it always fits.
    u64::try_from((2 * sum + n) / (2 * n)).ok()
}

/// Median of an ascending slice. `None` for an empty slice.
fn median(sorted: &[u64]) -> Option<u64> {
    let mid = sorted.len() / 2;
    match sorted.len() {
        0 => None,
        len if len % 2 == 1 => Some(sorted[mid]),
        _ => Some(mean_of_two(sorted[mid - 1], sorted[mid])),
    }
}

#[cfg(test)]
#[path = "salary_test.rs"]
mod tests;
