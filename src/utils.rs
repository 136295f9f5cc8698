use std::time::Instant;

use tracing::debug;

/// Logs how long a request took when dropped, whichever way the request ended.
pub(crate) struct Timing<'a> {
    start: Instant,
    identifier: &'static str,
    url: &'a str,
}

impl<'a> Timing<'a> {
    pub(crate) fn new(identifier: &'static str, url: &'a str) -> Self {
        Timing {
            start: Instant::now(),
            identifier,
            url,
        }
    }
}

impl Drop for Timing<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_millis();
        debug!(url = self.url, "{}, elapsed: {}ms", self.identifier, elapsed);
    }
}

/// Formats like C's `%.{precision}g`: `precision` significant digits, trailing zeros
/// dropped, exponent notation when the exponent is below -4 or at least `precision`.
pub fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Rounding to the requested digits first gives the exponent of the printed value.
    let scientific = format!("{:.*e}", precision.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let digits = i32::try_from(precision).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals =
            usize::try_from(digits.saturating_sub(1).saturating_sub(exponent)).unwrap_or_default();
        trim_fraction(&format!("{:.*}", decimals, value)).to_owned()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_significant_digits() {
        assert_eq!(format_significant(43.5446, 4), "43.54");
        assert_eq!(format_significant(-96.7311, 4), "-96.73");
        assert_eq!(format_significant(-122.4194, 4), "-122.4");
        assert_eq!(format_significant(43.5, 4), "43.5");
        assert_eq!(format_significant(40.0, 4), "40");
        assert_eq!(format_significant(0.0, 4), "0");
    }

    #[test]
    fn rounding_carries_into_the_exponent() {
        assert_eq!(format_significant(99.996, 4), "100");
        assert_eq!(format_significant(9999.6, 4), "1e+04");
    }

    #[test]
    fn exponent_form() {
        assert_eq!(format_significant(12346.0, 4), "1.235e+04");
        assert_eq!(format_significant(0.000012341, 4), "1.234e-05");
        assert_eq!(format_significant(0.0012341, 4), "0.001234");
    }

    #[test]
    fn single_digit_precision() {
        assert_eq!(format_significant(7.3, 1), "7");
        assert_eq!(format_significant(0.07, 0), "0.07");
        assert_eq!(format_significant(123.0, 1), "1e+02");
    }
}
