//! Assorted formatting helpers and defaults.
//!
//! These are intentionally minimal; a presentation layer is free to replace them.

use std::time::Duration;

/// Time between automatic steps when a [`Playback`](crate::playback::Playback)
/// is playing and no interval was configured.
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(1500);

/// Format `num` with exactly `decimals` fractional digits.
#[inline]
pub fn format_number(num: f64, decimals: usize) -> String {
    format!("{num:.decimals$}")
}

/// Insert thousands separators into a digit-string.
///
/// Non-digit input is returned with separators placed by position only.
pub fn format_with_commas(num: &str) -> String {
    let len = num.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in num.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Keep the first `max_len` characters of `s`, appending `...` if anything was cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}...", &s[..cut]),
    }
}
