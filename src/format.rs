/// Magnitude below which a coefficient is treated as zero when displayed.
pub const EPSILON: f64 = 1e-12;

/// Decimal places used for stored coefficients.
pub const COEFFICIENT_DECIMALS: usize = 2;

/// Decimal places used for evaluation results.
pub const VALUE_DECIMALS: usize = 4;

/// Formats `value` with fixed `decimals` and `,` between groups of thousands,
/// e.g. `-1234567.891` with 2 decimals gives `-1,234,567.89`.
/// A value that rounds to zero is printed without a sign.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let digits = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let is_negative = value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if is_negative {
        result.push('-');
    }
    result.push_str(&group_thousands(integer_part));
    if let Some(fraction) = fraction_part {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

fn group_thousands(integer_part: &str) -> String {
    let length = integer_part.len();
    let mut grouped = String::with_capacity(length + length / 3);
    for (i, digit) in integer_part.chars().enumerate() {
        if i > 0 && (length - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
