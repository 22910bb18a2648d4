//! Result rounding and number-to-text conversion.

/// Maximum number of fractional digits kept in an evaluated result.
pub const RESULT_DECIMALS: usize = 4;

/// Rounds an evaluation result for display.
///
/// - NaN becomes `0`
/// - integers (and infinities) pass through unchanged
/// - everything else is rounded to at most [`RESULT_DECIMALS`] fractional digits
///
/// Rounding goes through decimal text so that `2.0 / 3.0` becomes exactly the
/// double nearest to `0.6667`, with no trailing zero padding. Exact ties round
/// away from zero (`1/32` gives `0.0313`).
pub fn format_result(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    if value.is_infinite() || value.fract() == 0.0 {
        return value;
    }

    round_half_away(value, RESULT_DECIMALS)
}

/// Fractional digits needed to print any double that can tie at the rounding
/// digit without loss (|x| >= 5e-5 has at most 67 fractional digits).
const EXACT_DIGITS: usize = 80;

fn round_half_away(value: f64, decimals: usize) -> f64 {
    let exact = format!("{:.*}", EXACT_DIGITS, value);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = fraction.split_at(decimals.min(fraction.len()));

    let is_tie = dropped
        .strip_prefix('5')
        .is_some_and(|rest| rest.bytes().all(|b| b == b'0'));

    if !is_tie {
        // `{:.N}` rounds the exact binary value, so only ties need care
        return format!("{:.*}", decimals, value)
            .parse()
            .unwrap_or(value);
    }

    let truncated: f64 = format!("{whole}.{kept}").parse().unwrap_or(value);
    let step = 10f64.powi(-(decimals as i32)).copysign(value);
    format!("{:.*}", decimals, truncated + step)
        .parse()
        .unwrap_or(value)
}

/// Value shown on the main display for an evaluated result.
///
/// Non-finite results have no sensible digit representation on a keypad
/// display, so they collapse to `0`.
pub fn display_value(value: f64) -> f64 {
    let rounded = format_result(value);
    if rounded.is_finite() { rounded } else { 0.0 }
}

/// Converts a number to the text used on both display lines.
///
/// Integers print without a fractional part and negative zero prints as `0`.
/// Non-finite values use the spelled-out `Infinity`/`-Infinity`/`NaN` forms.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
