//! Parsing of manual form values and generation of simulated sensor values.

use std::ops::Range;

use rand::Rng;
use thiserror::Error;

use super::quality::round2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter both weight and size!")]
    MissingMeasurement,
}

/// Parse the weight and size fields of the manual form.
///
/// Zero counts as missing, same as an empty or non-numeric field. That is a
/// long-standing behaviour of the form and is kept so saved workflows don't
/// change.
pub fn parse_manual(weight: &str, size: &str) -> Result<(f64, f64), InputError> {
    let weight = parse_measurement(weight).ok_or(InputError::MissingMeasurement)?;
    let size = parse_measurement(size).ok_or(InputError::MissingMeasurement)?;
    Ok((weight, size))
}

fn parse_measurement(raw: &str) -> Option<f64> {
    let value = parse_leading_float(raw)?;
    if value.is_nan() || value == 0.0 {
        None
    } else {
        Some(value)
    }
}

/// Parse the longest numeric prefix of `raw`, ignoring leading whitespace and
/// any trailing unit text (`"2.5 kg"` → `2.5`).
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return None;
    }
    trimmed[..end].parse::<f64>().ok()
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Optional exponent, only consumed when it carries digits.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// Value ranges for simulated readings.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRanges {
    pub weight: Range<f64>,
    pub size: Range<f64>,
}

impl Default for SimulationRanges {
    fn default() -> Self {
        Self {
            weight: 1.0..4.0,
            size: 5.0..10.0,
        }
    }
}

impl SimulationRanges {
    /// Draw a `(weight, size)` pair, each rounded to two decimals.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let weight = round2(rng.gen_range(self.weight.clone()));
        let size = round2(rng.gen_range(self.size.clone()));
        (weight, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_manual("2.5", "7"), Ok((2.5, 7.0)));
        assert_eq!(parse_manual(" 3.25 ", "-1"), Ok((3.25, -1.0)));
    }

    #[test]
    fn empty_field_is_missing() {
        assert_eq!(parse_manual("", "7"), Err(InputError::MissingMeasurement));
        assert_eq!(parse_manual("2.5", "   "), Err(InputError::MissingMeasurement));
    }

    #[test]
    fn zero_is_treated_as_missing() {
        assert_eq!(parse_manual("0", "7"), Err(InputError::MissingMeasurement));
        assert_eq!(parse_manual("2.5", "0.00"), Err(InputError::MissingMeasurement));
    }

    #[test]
    fn non_numeric_is_missing() {
        assert_eq!(parse_manual("abc", "7"), Err(InputError::MissingMeasurement));
        assert_eq!(parse_manual("NaN", "7"), Err(InputError::MissingMeasurement));
    }

    #[test]
    fn trailing_text_is_ignored() {
        assert_eq!(parse_leading_float("2.5kg"), Some(2.5));
        assert_eq!(parse_leading_float("7 cm"), Some(7.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("3."), Some(3.0));
        assert_eq!(parse_leading_float("1e2x"), Some(100.0));
        assert_eq!(parse_leading_float("4e"), Some(4.0));
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
    }

    #[test]
    fn error_message_matches_toast_text() {
        assert_eq!(
            InputError::MissingMeasurement.to_string(),
            "Please enter both weight and size!"
        );
    }

    #[test]
    fn simulated_values_stay_in_range() {
        let ranges = SimulationRanges::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (weight, size) = ranges.sample(&mut rng);
            assert!((1.0..=4.0).contains(&weight), "weight {weight}");
            assert!((5.0..=10.0).contains(&size), "size {size}");
            assert_eq!(round2(weight), weight);
            assert_eq!(round2(size), size);
        }
    }
}
