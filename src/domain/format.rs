// src/domain/format.rs

use chrono::NaiveDate;

/// Placeholder shown wherever a date is missing.
pub const MISSING_DATE: &str = "N/A";

/// Formats an upstream date string as `DD Mon YYYY` (en-GB).
///
/// Two shapes come back from the MOT API:
/// - ISO, `2024-03-05` (sometimes with a time part appended)
/// - dotted, `2024.03.05`
///
/// Anything else is returned as-is rather than guessed at.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return MISSING_DATE.to_string();
    }

    parse_upstream_date(raw)
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn parse_upstream_date(raw: &str) -> Option<NaiveDate> {
    if raw.contains('-') {
        let day_part = raw.get(..10)?;
        return NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok();
    }

    let parts: Vec<&str> = raw.split('.').collect();
    if let [y, m, d] = parts.as_slice() {
        let y = y.trim().parse::<i32>().ok()?;
        let m = m.trim().parse::<u32>().ok()?;
        let d = d.trim().parse::<u32>().ok()?;
        return NaiveDate::from_ymd_opt(y, m, d);
    }

    None
}

/// `1234567` -> `1,234,567`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Money with exactly two decimals, e.g. `£5,800.00`.
pub fn format_gbp(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let pence = (value.abs() * 100.0).round() as u64;
    format!("£{sign}{}.{:02}", format_thousands(pence / 100), pence % 100)
}

/// Money without forced decimals, e.g. `£450` or `£1,200.5`.
/// Keeps up to three fraction digits, matching the en-GB number default.
pub fn format_gbp_whole(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let thousandths = (value.abs() * 1000.0).round() as u64;
    let whole = format_thousands(thousandths / 1000);
    let frac = thousandths % 1000;

    if frac == 0 {
        return format!("£{sign}{whole}");
    }

    let frac = format!("{frac:03}");
    format!("£{sign}{whole}.{}", frac.trim_end_matches('0'))
}

/// Scores print without a trailing `.0`: `72`, `72.5`.
pub fn format_score(value: f64) -> String {
    format!("{value}")
}

/// `reliability_score` -> `Reliability Score`
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
