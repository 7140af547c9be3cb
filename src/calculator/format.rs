//! Number formatting for the display and the clipboard.

/// Largest magnitude shown as plain digits.
const PLAIN_LIMIT: f64 = 1e15;

/// Smallest magnitude kept in the raw form before switching to exponent notation.
const RAW_SMALL_LIMIT: f64 = 1e-6;

/// How results are shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    /// Group integer digits in threes with commas.
    pub thousands_separator: bool,
    /// Maximum digits after the decimal point.
    pub max_decimals: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: false,
            max_decimals: 10,
        }
    }
}

/// Format a number for display.
///
/// Fractions are rounded to `max_decimals` with trailing zeros removed, so
/// `sin(180)` shows as `0` rather than a floating-point residue.
pub fn format_display(value: f64, format: &NumberFormat) -> String {
    if value.abs() >= PLAIN_LIMIT {
        return format!("{value:e}");
    }

    let formatted = format!("{:.*}", format.max_decimals, value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    // Rounding can leave "-0" behind for tiny negative values
    let trimmed = if trimmed == "-0" { "0" } else { trimmed };

    if !format.thousands_separator {
        return trimmed.to_string();
    }

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    match unsigned.split_once('.') {
        Some((int_part, dec_part)) => {
            format!("{sign}{}.{dec_part}", format_with_separators(int_part))
        }
        None => format!("{sign}{}", format_with_separators(unsigned)),
    }
}

/// Group a run of digits with thousand separators.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a number for the clipboard and for reuse as input.
///
/// This is the shortest text that parses back to exactly `value`.
pub fn format_clipboard(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };

    if value.fract() == 0.0 && value.abs() < PLAIN_LIMIT {
        format!("{}", value as i64)
    } else if value.abs() >= PLAIN_LIMIT || value.abs() < RAW_SMALL_LIMIT {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_separators() -> NumberFormat {
        NumberFormat {
            thousands_separator: true,
            ..NumberFormat::default()
        }
    }

    #[test]
    fn test_integers() {
        let plain = NumberFormat::default();
        assert_eq!(format_display(4.0, &plain), "4");
        assert_eq!(format_display(-120.0, &plain), "-120");
        assert_eq!(format_display(1_000_000.0, &plain), "1000000");
    }

    #[test]
    fn test_thousand_separators() {
        let fmt = with_separators();
        assert_eq!(format_display(1_000_000.0, &fmt), "1,000,000");
        assert_eq!(format_display(-1234.5, &fmt), "-1,234.5");
        assert_eq!(format_display(999.0, &fmt), "999");
        assert_eq!(format_clipboard(1_000_000.0), "1000000");
    }

    #[test]
    fn test_decimal_rounding() {
        let plain = NumberFormat::default();
        assert!(format_display(1.0 / 3.0, &plain).starts_with("0.333"));
        assert_eq!(format_display(0.1 + 0.2, &plain), "0.3");
        assert_eq!(format_display(1.2246467991473532e-16, &plain), "0");
        assert_eq!(format_display(-1e-17, &plain), "0");

        let short = NumberFormat {
            max_decimals: 2,
            ..NumberFormat::default()
        };
        assert_eq!(format_display(3.14159, &short), "3.14");
        assert_eq!(format_display(2.0, &short), "2");
    }

    #[test]
    fn test_large_values_use_exponent() {
        let plain = NumberFormat::default();
        assert_eq!(format_display(1e20, &plain), "1e20");
        assert_eq!(format_clipboard(1e20), "1e20");
    }

    #[test]
    fn test_clipboard_round_trips() {
        for value in [0.1 + 0.2, 1.0 / 3.0, 1.2246467991473532e-16, -2.5, 1e300] {
            let text = format_clipboard(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
        assert_eq!(format_clipboard(-0.0), "0");
    }
}
