//! Exact decimal arithmetic on digit-strings.
//!
//! A *digit-string* is a non-empty run of ASCII decimal digits with no leading
//! zero unless the value is exactly zero (`"0"`). The Karatsuba engine keeps
//! every intermediate in this form so each quantity it records can be shown
//! digit for digit.
//!
//! All functions here are total over digit-strings. Addition and comparison
//! also tolerate zero-padded operands (the engine adds zero-padded halves);
//! every output is canonical.

use std::cmp::Ordering;

/// Strip every non-digit character, then strip leading zeros.
///
/// Returns `"0"` if nothing is left. Idempotent.
pub fn normalize_number_string(s: &str) -> String {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    strip_leading_zeros(&digits).to_string()
}

/// Exact sum of two digit-strings, carry propagated from the least
/// significant digit.
pub fn add_strings(a: &str, b: &str) -> String {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut i = a.len();
    let mut j = b.len();
    let mut carry = 0u8;

    while i > 0 || j > 0 || carry > 0 {
        let da = if i > 0 { i -= 1; a[i] - b'0' } else { 0 };
        let db = if j > 0 { j -= 1; b[j] - b'0' } else { 0 };
        let sum = da + db + carry;
        out.push(b'0' + sum % 10);
        carry = sum / 10;
    }

    finish_reversed(out)
}

/// Exact difference `a - b`, or `None` when `b > a`.
///
/// The shorter operand is treated as zero-padded on the left; borrows are
/// propagated from the least significant digit.
pub fn checked_subtract_strings(a: &str, b: &str) -> Option<String> {
    if compare_digit_strings(a, b) == Ordering::Less {
        return None;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u8;
    let mut j = b.len();

    for i in (0..a.len()).rev() {
        let db = if j > 0 { j -= 1; b[j] - b'0' } else { 0 };
        let mut da = a[i] - b'0';
        let sub = db + borrow;
        if da < sub {
            da += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(b'0' + (da - sub));
    }
    // `a >= b` and any surplus digits of `b` are leading zeros.
    debug_assert_eq!(borrow, 0);

    Some(finish_reversed(out))
}

/// Exact difference `a - b` for `a >= b`.
///
/// # Panics
/// Panics if `b > a`. A negative intermediate means the caller's algebra is
/// wrong; use [`checked_subtract_strings`] to probe instead.
pub fn subtract_strings(a: &str, b: &str) -> String {
    match checked_subtract_strings(a, b) {
        Some(diff) => diff,
        None => panic!("subtract_strings: minuend {a} is smaller than subtrahend {b}"),
    }
}

/// Multiply by `10^power` by appending zeros. `"0"` is returned unchanged.
pub fn multiply_by_power_of_10(num: &str, power: usize) -> String {
    if num == "0" {
        return num.to_string();
    }
    let mut out = String::with_capacity(num.len() + power);
    out.push_str(num);
    out.extend(std::iter::repeat('0').take(power));
    out
}

/// Numeric comparison of two digit-strings, ignoring leading zeros.
pub fn compare_digit_strings(a: &str, b: &str) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &str) -> &str {
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Turn little-endian ASCII digits into a canonical digit-string.
fn finish_reversed(mut digits: Vec<u8>) -> String {
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(b'0');
    }
    digits.reverse();
    // Only ASCII digits are ever pushed.
    digits.into_iter().map(char::from).collect()
}
