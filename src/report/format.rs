//! Abbreviated currency formatting for large amounts

/// Suffixes by power-of-ten exponent, ascending
const ABBREVIATIONS: &[(i32, &str)] = &[
    (3, "K"),
    (6, "M"),
    (9, "B"),
    (12, "T"),
    (15, "Qa"),
    (18, "Qi"),
    (21, "Sx"),
    (24, "Sp"),
];

/// Leading digits kept when rounding before abbreviation
const LEFT_DIGITS_TO_ROUND_TO: usize = 3;

/// Significant digits in the compact numeric rendering
const GENERAL_PRECISION: i32 = 6;

/// Format an amount as `~$<value><suffix>`, e.g. `~$1.23K` or `~$45M`.
///
/// The amount is truncated to a whole number and rounded to three leading
/// digits (ties to even) before a suffix is chosen. Amounts at or beyond
/// 10^24 are expressed in units of 10^21 with the largest suffix.
///
/// Negative amounts are never abbreviated, and their minus sign takes one of
/// the three leading digits (`-123456` renders as `~$-120000`).
pub fn format_num(num: f64) -> String {
    if num.is_nan() {
        return "~$nan".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "~$inf" } else { "~$-inf" }.to_string();
    }

    let whole = num.trunc();
    if whole < 0.0 {
        let (mantissa, exponent) = round_to_left_digits(-whole, LEFT_DIGITS_TO_ROUND_TO - 1);
        return format!("~$-{}", format_general(scale(mantissa, exponent)));
    }

    let (mantissa, exponent) = round_to_left_digits(whole, LEFT_DIGITS_TO_ROUND_TO);
    let (divisor_exponent, suffix) = select_abbreviation(mantissa, exponent);
    let value = scale(mantissa, exponent - divisor_exponent);

    format!("~${}{}", format_general(value), suffix)
}

/// Round a non-negative whole number to its leading digits.
///
/// Returns `(mantissa, exponent)` with the rounded value equal to
/// `mantissa * 10^exponent`. Works on the exact decimal expansion so that
/// values beyond 2^53 round the same way integers do.
fn round_to_left_digits(whole: f64, keep: usize) -> (u64, i32) {
    let digits = format!("{:.0}", whole);

    if digits.len() <= keep {
        return (digits.parse().unwrap_or(0), 0);
    }

    let (head, rest) = digits.split_at(keep);
    let head: u64 = head.parse().unwrap_or(0);
    let rest = rest.as_bytes();

    let round_up = match rest[0] {
        b'6'..=b'9' => true,
        b'5' => rest[1..].iter().any(|&d| d != b'0') || head % 2 == 1,
        _ => false,
    };

    (head + round_up as u64, (digits.len() - keep) as i32)
}

/// Pick the divisor exponent and suffix for `mantissa * 10^exponent`
fn select_abbreviation(mantissa: u64, exponent: i32) -> (i32, &'static str) {
    let mut previous = (0, "");

    for &(threshold, suffix) in ABBREVIATIONS {
        if is_below_power(mantissa, exponent, threshold) {
            return previous;
        }
        previous = (threshold, suffix);
    }

    // Beyond the table: one order of thousands past the largest entry
    let (largest, suffix) = previous;
    (largest - 3, suffix)
}

/// Whether `mantissa * 10^exponent < 10^power`
fn is_below_power(mantissa: u64, exponent: i32, power: i32) -> bool {
    if exponent > power {
        return false;
    }
    (mantissa as u128) < 10u128.pow((power - exponent) as u32)
}

fn scale(mantissa: u64, exponent: i32) -> f64 {
    if exponent >= 0 {
        mantissa as f64 * 10f64.powi(exponent)
    } else {
        mantissa as f64 / 10f64.powi(-exponent)
    }
}

/// Compact rendering with six significant digits and no trailing zeros,
/// switching to `d.ddde+XX` outside `1e-4 <= |value| < 1e6`
pub fn format_general(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (-4..GENERAL_PRECISION).contains(&exponent) {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
