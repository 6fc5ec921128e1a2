//! Numeral parsing and formatting
//!
//! The calculator keeps its display as text. Converting between that text and
//! `f64` follows the behaviour of JavaScript's `parseFloat` and
//! `Number.prototype.toString`, so partially typed numerals such as `"12."`
//! survive round trips through arithmetic unchanged.

use serde::Deserialize;
use thousands::Separable;

/// Magnitude from which display text is grouped with thousands separators
pub const GROUPING_THRESHOLD: f64 = 1000.0;

/// Parses the longest numeric prefix of `text`.
///
/// Returns `NaN` when no numeric prefix exists (`""`, `"-"`, `"."`, `"abc"`).
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Renders a number the way JavaScript's `String(number)` does.
///
/// Shortest round-trip digits; positional notation for decimal exponents in
/// `[-7, 21)`, exponent notation (`1e+21`, `1.5e-7`) outside of it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let exp = (n - 1).abs();
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{exp_sign}{exp}")
        } else {
            format!("{head}.{tail}e{exp_sign}{exp}")
        }
    };

    format!("{sign}{body}")
}

/// Locale settings for grouped numbers
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NumberFormat {
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: usize,
}

fn default_thousands_separator() -> String {
    String::from(",")
}

fn default_max_fraction_digits() -> usize {
    3
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: default_thousands_separator(),
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

impl NumberFormat {
    /// Groups the integer part and rounds the fraction, like `toLocaleString()`
    ///
    /// Digits come from the shortest round-trip representation, so the grouped
    /// text never shows digits absent from [`format_number`].
    pub fn localize(&self, value: f64) -> String {
        if value.is_nan() {
            return String::from("NaN");
        }
        if value.is_infinite() {
            return String::from(if value > 0.0 { "∞" } else { "-∞" });
        }

        let (int_part, frac_part) = positional_parts(value.abs());
        let (int_part, frac_part) = round_half_up(&int_part, &frac_part, self.max_fraction_digits);
        let frac_part = frac_part.trim_end_matches('0');
        let grouped = int_part
            .separate_with_commas()
            .replace(',', &self.thousands_separator);

        let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            "-"
        } else {
            ""
        };

        if frac_part.is_empty() {
            format!("{sign}{grouped}")
        } else {
            format!("{sign}{grouped}.{frac_part}")
        }
    }
}

/// Integer and fraction digits of a non-negative finite value, without exponent
fn positional_parts(magnitude: f64) -> (String, String) {
    if magnitude == 0.0 {
        return (String::from("0"), String::new());
    }

    let scientific = format!("{magnitude:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    // Number of digits left of the decimal point
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;
    let k = digits.len() as i32;

    if point <= 0 {
        (
            String::from("0"),
            format!("{}{digits}", "0".repeat((-point) as usize)),
        )
    } else if point >= k {
        (
            format!("{digits}{}", "0".repeat((point - k) as usize)),
            String::new(),
        )
    } else {
        let (int_part, frac_part) = digits.split_at(point as usize);
        (int_part.to_string(), frac_part.to_string())
    }
}

/// Rounds a decimal digit string half away from zero at `places` fraction digits
fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    if frac_part.len() <= places {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let int_part: String = digits[..split].iter().map(|&b| char::from(b)).collect();
    let frac_part: String = digits[split..].iter().map(|&b| char::from(b)).collect();
    (int_part, frac_part)
}

/// Exponent form such as `1.37e+20`, keeping as many mantissa digits as fit
/// in `width` columns. `None` for non-finite values or when nothing fits.
pub fn format_compact(value: f64, width: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    (0..=16).rev().find_map(|precision| {
        let scientific = format!("{value:.precision$e}");
        let (mantissa, exponent) = scientific.split_once('e')?;
        let mantissa = if mantissa.contains('.') {
            mantissa.trim_end_matches('0').trim_end_matches('.')
        } else {
            mantissa
        };
        let exponent: i32 = exponent.parse().ok()?;
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let text = format!("{mantissa}e{exp_sign}{}", exponent.abs());
        (text.chars().count() <= width).then_some(text)
    })
}

/// Presentation form of the display text.
///
/// Text that does not parse is returned unchanged, as is anything below
/// [`GROUPING_THRESHOLD`] in magnitude (keeping in-progress input like `"0."`).
pub fn format_display(text: &str, format: &NumberFormat) -> String {
    let value = parse_float(text);
    if value.is_nan() {
        return text.to_string();
    }

    if value.abs() >= GROUPING_THRESHOLD {
        format.localize(value)
    } else {
        text.to_string()
    }
}
