//! Parsing and validation of the plain-text input formats.
//!
//! This is the only fallible stage: the engines assume validated input, so
//! every malformed file is turned into an [`InputError`] here, before any
//! algorithm runs.
//!
//! Closest pair:
//! ```text
//! 3          <- point count n
//! 0 0        <- n lines of "x y"
//! 3 4
//! 1 1
//! ```
//!
//! Karatsuba: two non-blank lines, one operand each. Non-digit characters
//! (separators, signs, stray whitespace) are dropped.
//!
//! Blank lines are ignored in both formats. Line numbers in errors are 1-based
//! positions in the original text.

use thiserror::Error;

use crate::problems::closest_pair::Point;

/// A user-facing validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty file")]
    Empty,

    #[error("invalid number of points")]
    InvalidCount,

    #[error("expected {expected} points, but found {found}")]
    MissingPoints { expected: usize, found: usize },

    #[error("invalid point format at line {line}")]
    InvalidPointFormat { line: usize },

    #[error("invalid coordinates at line {line}")]
    InvalidCoordinates { line: usize },

    #[error("need at least 2 points")]
    TooFewPoints,

    #[error("need two numbers (one per line)")]
    MissingOperands,

    #[error("invalid number at line {line} (must contain digits)")]
    EmptyOperand { line: usize },
}

/// Non-blank lines paired with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse a closest-pair input file into points with ids `0..n`.
pub fn parse_closest_pair_input(text: &str) -> Result<Vec<Point>, InputError> {
    let mut lines = content_lines(text);

    let (_, header) = lines.next().ok_or(InputError::Empty)?;
    let n = header
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or(InputError::InvalidCount)?;

    let data: Vec<(usize, &str)> = lines.take(n).collect();
    if data.len() < n {
        return Err(InputError::MissingPoints {
            expected: n,
            found: data.len(),
        });
    }

    let mut points = Vec::with_capacity(n);
    for (id, (line, content)) in data.into_iter().enumerate() {
        let mut parts = content.split_whitespace();
        let (Some(xs), Some(ys)) = (parts.next(), parts.next()) else {
            return Err(InputError::InvalidPointFormat { line });
        };
        let x = parse_coordinate(xs).ok_or(InputError::InvalidCoordinates { line })?;
        let y = parse_coordinate(ys).ok_or(InputError::InvalidCoordinates { line })?;
        points.push(Point::new(x, y, id));
    }

    if points.len() < 2 {
        return Err(InputError::TooFewPoints);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(points = points.len(), "parsed closest-pair input");

    Ok(points)
}

fn parse_coordinate(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a Karatsuba input file into two digit-only operands.
///
/// Operands keep any leading zeros; the engine normalizes them.
pub fn parse_karatsuba_input(text: &str) -> Result<(String, String), InputError> {
    let mut lines = content_lines(text);
    let (Some((line1, first)), Some((line2, second))) = (lines.next(), lines.next()) else {
        return Err(InputError::MissingOperands);
    };

    let num1 = digits_only(first);
    if num1.is_empty() {
        return Err(InputError::EmptyOperand { line: line1 });
    }
    let num2 = digits_only(second);
    if num2.is_empty() {
        return Err(InputError::EmptyOperand { line: line2 });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        digits1 = num1.len(),
        digits2 = num2.len(),
        "parsed karatsuba input"
    );

    Ok((num1, num2))
}

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
