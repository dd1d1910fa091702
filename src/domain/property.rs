// src/domain/property.rs

use serde::Serialize;

const CURRENCY_PREFIX: &str = "Rp ";
const BILLION_SUFFIX: &str = " Billion";

/// A single listing as shown on a property card.
/// Records are literals and live for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub image: &'static str,
    pub title: &'static str,
    /// Free text, e.g. "Rp 5.2 Billion".
    pub price_label: &'static str,
    /// Free text in the form "Area, Region".
    pub location_label: &'static str,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Free text, e.g. "350m²".
    pub area_label: &'static str,
    pub is_hot_deal: bool,
}

impl PropertyRecord {
    /// Price in billions of rupiah, or `None` when the label can't be read.
    pub fn price_in_billions(&self) -> Option<f64> {
        parse_billions(self.price_label)
    }
}

/// Reads a "Rp <n> Billion" label as a number of billions.
///
/// Only the first occurrence of the currency prefix and of the suffix is
/// removed, then the longest leading decimal number is taken. A label
/// with no leading number yields `None`, which never satisfies a price
/// bracket. Labels in other units ("Rp 850 Million") are read as the bare
/// number, so they land in the wrong bracket; that matches how the
/// listing page has always behaved.
pub fn parse_billions(label: &str) -> Option<f64> {
    let stripped = label
        .replacen(CURRENCY_PREFIX, "", 1)
        .replacen(BILLION_SUFFIX, "", 1);
    leading_number(stripped.trim_start())
}

/// Longest prefix of `s` that reads as a decimal number (optional sign,
/// digits, optional fraction, optional exponent). A signed or bare
/// `Infinity` is also a number, so "Rp Infinity Billion" sits above every
/// finite bracket bound.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let infinity = if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY };
        return Some(infinity);
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
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
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
