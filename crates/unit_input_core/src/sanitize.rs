//! Text sanitizer shared by every path that turns typed text into a value.
//!
//! Rules, in order:
//! 1. `,` is read as a decimal separator and becomes `.`
//! 2. anything that is not an ASCII digit or `.` is dropped
//! 3. only the first `.` survives; digits after later periods are appended
//!    to the fraction (`"1.2.3"` → `"1.23"`)

/// Normalizes raw text into something [`str::parse::<f64>`] may accept.
///
/// The output only ever contains ASCII digits and at most one period, so it
/// can still be empty or a lone `"."`.
#[must_use]
pub fn sanitize_input(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut has_period = false;

    for ch in input.chars() {
        match ch {
            '0'..='9' => sanitized.push(ch),
            '.' | ',' if !has_period => {
                sanitized.push('.');
                has_period = true;
            }
            _ => {}
        }
    }

    sanitized
}

/// Sanitizes `input` and parses it as a float.
///
/// Returns `None` when nothing numeric is left (`""`, `"."`) or when the
/// digits overflow to infinity.
#[must_use]
pub fn parse_input(input: &str) -> Option<f64> {
    sanitize_input(input)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
