use std::fmt::Write;

use chrono::{DateTime, Local, NaiveDateTime, Utc};

const NOT_AVAILABLE: &str = "N/A";
const FALLBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Inserts `,` between every group of three digits.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Formats a number the way en-US locales do: grouped thousands, at most
/// three fraction digits, no trailing zeros.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats a USD amount, or `N/A` when missing.
#[must_use]
pub fn format_usd(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("${}", format_number(v)))
}

/// Formats a percentage change with two decimals, or `N/A` when missing.
#[must_use]
pub fn format_change(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{v:.2}"))
}

/// Upper-cases a ticker symbol, or `N/A` when missing.
#[must_use]
pub fn format_symbol(symbol: Option<&str>) -> String {
    symbol
        .filter(|s| !s.is_empty())
        .map_or_else(|| NOT_AVAILABLE.to_string(), str::to_uppercase)
}

/// Converts a backend timestamp from UTC to local time using `format`.
///
/// Timestamps without an offset are read as UTC. Unparseable input is
/// returned as is; missing input becomes `N/A`.
#[must_use]
pub fn format_timestamp(raw: Option<&str>, format: &str) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    let Some(utc) = parse_utc(raw) else {
        return raw.to_string();
    };

    let local: DateTime<Local> = utc.into();
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        tracing::debug!(format, "Invalid timestamp format, using fallback");
        return local.format(FALLBACK_TIMESTAMP_FORMAT).to_string();
    }
    out
}

fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Some(dt);
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
