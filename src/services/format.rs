// src/services/format.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// `€1.234,56`
    #[default]
    Eu,
    /// `€1,234.56`
    En,
}

impl Locale {
    fn separators(self) -> (char, char) {
        match self {
            Locale::Eu => ('.', ','),
            Locale::En => (',', '.'),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eu" | "nl" | "de" => Ok(Locale::Eu),
            "en" | "us" | "uk" => Ok(Locale::En),
            other => Err(format!("unknown locale '{}'", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Locale::Eu => write!(f, "eu"),
            Locale::En => write!(f, "en"),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

fn format_number(value: f64, decimals: usize, locale: Locale, grouped: bool) -> String {
    let (thousands, decimal_mark) = locale.separators();
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::new();
    // "-0" after rounding is shown as 0
    if value < 0.0 && raw.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    if grouped {
        out.push_str(&group_thousands(int_part, thousands));
    } else {
        out.push_str(int_part);
    }
    if let Some(frac) = frac_part {
        out.push(decimal_mark);
        out.push_str(frac);
    }
    out
}

/// Euro amount with thousands grouping. Non-finite amounts render as `€0`.
pub fn format_currency(value: f64, decimals: usize, locale: Locale) -> String {
    if !value.is_finite() {
        return "€0".to_string();
    }
    format!("€{}", format_number(value, decimals, locale, true))
}

pub fn format_percent(fraction: f64, decimals: usize, locale: Locale) -> String {
    format!("{}%", format_number(fraction * 100.0, decimals, locale, false))
}

pub fn format_months(months: f64, locale: Locale) -> String {
    if !months.is_finite() {
        return "n/a".to_string();
    }
    format!("{} mo", format_number(months, 1, locale, false))
}
