//! Currency parsing and Rupiah formatting.
//!
//! The club sheet is edited by hand, so money cells arrive in whatever shape
//! the person typing used: `Rp 25.000`, `25,000`, `1.234,56`, `1,234.56` or a
//! plain number. [`parse_currency`] settles which separator is the decimal one
//! by position and digit count and never fails.

use once_cell::sync::Lazy;
use regex::Regex;

static CURRENCY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)rp\s*").expect("currency prefix pattern is valid"));

/// A money cell before normalization
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount<'a> {
    Number(f64),
    Text(&'a str),
    Empty,
}

/// Parse a money cell into a number, falling back to 0
pub fn parse_currency(raw: RawAmount<'_>) -> f64 {
    match raw {
        RawAmount::Number(value) => value,
        RawAmount::Empty => 0.0,
        RawAmount::Text(text) => parse_currency_text(text),
    }
}

/// Parse a money string into a number, falling back to 0
pub fn parse_currency_text(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let normalized = normalize_separators(text);
    leading_float(&normalized).unwrap_or(0.0)
}

/// Strip the currency prefix and rewrite separators into a plain decimal string
pub fn normalize_separators(text: &str) -> String {
    let clean = CURRENCY_PREFIX.replace_all(text, "");
    let clean = clean.trim();

    match (clean.rfind(','), clean.rfind('.')) {
        (Some(last_comma), Some(last_dot)) => {
            if last_comma > last_dot {
                // 1.234,56
                clean.replace('.', "").replacen(',', ".", 1)
            } else {
                // 1,234.56
                clean.replace(',', "")
            }
        }
        (Some(last_comma), None) => {
            if clean[last_comma + 1..].chars().count() == 3 {
                // 25,000
                clean.replace(',', "")
            } else {
                // 25,50
                clean.replacen(',', ".", 1)
            }
        }
        (None, Some(last_dot)) => {
            let single_dot = clean.matches('.').count() == 1;
            if clean[last_dot + 1..].chars().count() == 3 && single_dot {
                // 25.000
                clean.replace('.', "")
            } else {
                clean.to_string()
            }
        }
        (None, None) => clean.to_string(),
    }
}

/// Read the longest floating point number at the start of `text`.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fraction and an optional exponent. Trailing garbage is ignored, so
/// `"1.5kg"` reads as 1.5 and `"1.2.3"` as 1.2.
pub fn leading_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return if s[int_start..].starts_with("Infinity") {
            let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
            Some(sign * f64::INFINITY)
        } else {
            None
        };
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Read the integer at the start of `text`, truncating any fraction
pub fn leading_integer(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse::<i64>().ok()
}

/// Format an amount the way the Indonesian locale prints Rupiah: `Rp 1.234,5`
pub fn format_rupiah(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}Rp {}", sign, format_id_number(amount.abs()))
}

/// Format a non-negative number with `.` thousands and up to 3 decimals after `,`
pub fn format_id_number(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        grouped
    } else {
        format!("{},{}", grouped, frac_part)
    }
}
