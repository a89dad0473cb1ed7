//! Karatsuba multiplication of decimal digit-strings, with a replayable trace.
//!
//! For operands of `n > 2` digits (after normalization) both are left-padded to
//! `n` digits and split at `mid = n / 2`:
//!
//! ```text
//! x = a·10^mid + b        y = c·10^mid + d
//! x·y = ac·10^(2·mid) + ((a+b)(c+d) - ac - bd)·10^mid + bd
//! ```
//!
//! The three sub-products are computed recursively in the order `ac`, `bd`,
//! `(a+b)(c+d)`, one level deeper. Operands of at most two digits are
//! multiplied natively. Every quantity stays a digit-string (see
//! [`crate::string_math`]) so each record shows exact values.
//!
//! Record order for one recursion node: `divide`, the three children's records,
//! `combine`, then `multiply` with the node's product. A run is wrapped in a
//! leading `divide` (no halves) and a trailing `result`, both at level 0.

use serde::Serialize;

use crate::string_math::{
    add_strings, multiply_by_power_of_10, normalize_number_string, subtract_strings,
};
use crate::traits::{StepSink, TraceStep, Traced};

/// Operands with at most this many digits are multiplied natively.
pub const BASE_CASE_DIGITS: usize = 2;

/// Product and ordered step log of a Karatsuba run.
pub type KaratsubaResult = Traced<String, KaratsubaStep>;

/// High and low halves of both operands at one recursion node.
///
/// Halves are the literal slices of the zero-padded operands, so a low half
/// such as `"03"` keeps its width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Halves {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

/// One event of a Karatsuba run. `level` is the recursion depth (root = 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum KaratsubaStep {
    /// The starting operands (no `halves`) or a split into halves.
    Divide {
        num1: String,
        num2: String,
        #[serde(flatten)]
        halves: Option<Halves>,
        level: usize,
        description: String,
    },
    /// A product: native on a base case, assembled otherwise.
    Multiply {
        num1: String,
        num2: String,
        result: String,
        level: usize,
        description: String,
    },
    /// The three sub-products and the derived cross term `ad + bc`.
    Combine {
        num1: String,
        num2: String,
        ac: String,
        bd: String,
        ad_plus_bc: String,
        level: usize,
        description: String,
    },
    /// The final product.
    Result {
        num1: String,
        num2: String,
        result: String,
        level: usize,
        description: String,
    },
}

impl KaratsubaStep {
    /// Operands at this recursion node.
    pub fn operands(&self) -> (&str, &str) {
        match self {
            KaratsubaStep::Divide { num1, num2, .. }
            | KaratsubaStep::Multiply { num1, num2, .. }
            | KaratsubaStep::Combine { num1, num2, .. }
            | KaratsubaStep::Result { num1, num2, .. } => (num1, num2),
        }
    }

    /// Product carried by `multiply` and `result` records.
    pub fn product(&self) -> Option<&str> {
        match self {
            KaratsubaStep::Multiply { result, .. } | KaratsubaStep::Result { result, .. } => {
                Some(result)
            }
            _ => None,
        }
    }

    fn depth(&self) -> usize {
        match self {
            KaratsubaStep::Divide { level, .. }
            | KaratsubaStep::Multiply { level, .. }
            | KaratsubaStep::Combine { level, .. }
            | KaratsubaStep::Result { level, .. } => *level,
        }
    }
}

impl TraceStep for KaratsubaStep {
    fn tag(&self) -> &'static str {
        match self {
            KaratsubaStep::Divide { .. } => "divide",
            KaratsubaStep::Multiply { .. } => "multiply",
            KaratsubaStep::Combine { .. } => "combine",
            KaratsubaStep::Result { .. } => "result",
        }
    }

    fn description(&self) -> &str {
        match self {
            KaratsubaStep::Divide { description, .. }
            | KaratsubaStep::Multiply { description, .. }
            | KaratsubaStep::Combine { description, .. }
            | KaratsubaStep::Result { description, .. } => description,
        }
    }

    fn level(&self) -> Option<usize> {
        Some(self.depth())
    }
}

/// Multiply two numbers given as arbitrary strings.
///
/// Both inputs are normalized first (non-digits dropped, leading zeros
/// stripped, empty becomes `"0"`), so this never fails.
///
/// ```
/// use dnc_trace::problems::karatsuba::karatsuba;
///
/// let run = karatsuba("1234", "5678");
/// assert_eq!(run.result, "7006652");
/// assert_eq!(karatsuba("", "12").result, "0");
/// ```
pub fn karatsuba(num1: &str, num2: &str) -> KaratsubaResult {
    let mut steps = Vec::new();
    let result = karatsuba_into(num1, num2, &mut steps);
    Traced { result, steps }
}

/// Like [`karatsuba`], but appends the steps to `sink` and returns the product.
pub fn karatsuba_into<K>(num1: &str, num2: &str, sink: &mut K) -> String
where
    K: StepSink<KaratsubaStep>,
{
    let n1 = normalize_number_string(num1);
    let n2 = normalize_number_string(num2);

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("karatsuba", digits1 = n1.len(), digits2 = n2.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    sink.record(KaratsubaStep::Divide {
        description: format!(
            "Start: Multiply {n1} ({} digits) × {n2} ({} digits)",
            n1.len(),
            n2.len()
        ),
        num1: n1.clone(),
        num2: n2.clone(),
        halves: None,
        level: 0,
    });

    let result = solve(&n1, &n2, 0, sink);

    #[cfg(feature = "tracing")]
    tracing::debug!(digits = result.len(), "product computed");

    sink.record(KaratsubaStep::Result {
        description: format!("Final Result: {n1} × {n2} = {result}"),
        num1: n1,
        num2: n2,
        result: result.clone(),
        level: 0,
    });

    result
}

fn solve<K: StepSink<KaratsubaStep>>(x: &str, y: &str, level: usize, sink: &mut K) -> String {
    let x = normalize_number_string(x);
    let y = normalize_number_string(y);
    let n = x.len().max(y.len());

    if n <= BASE_CASE_DIGITS {
        let result = (small_value(&x) * small_value(&y)).to_string();
        sink.record(KaratsubaStep::Multiply {
            description: format!("Base case: {x} × {y} = {result}"),
            num1: x,
            num2: y,
            result: result.clone(),
            level,
        });
        return result;
    }

    let x = format!("{x:0>n$}");
    let y = format!("{y:0>n$}");
    let mid = n / 2;
    let (a, b) = x.split_at(n - mid);
    let (c, d) = y.split_at(n - mid);

    #[cfg(feature = "tracing")]
    tracing::trace!(level, n, mid, "divide");

    sink.record(KaratsubaStep::Divide {
        num1: x.clone(),
        num2: y.clone(),
        halves: Some(Halves {
            a: a.to_string(),
            b: b.to_string(),
            c: c.to_string(),
            d: d.to_string(),
        }),
        level,
        description: format!("Divide: {x} = {a}×10^{mid} + {b}, {y} = {c}×10^{mid} + {d}"),
    });

    let ac = solve(a, c, level + 1, sink);
    let bd = solve(b, d, level + 1, sink);
    let abcd = solve(&add_strings(a, b), &add_strings(c, d), level + 1, sink);

    // (a+b)(c+d) >= ac + bd for non-negative operands
    let ad_plus_bc = subtract_strings(&subtract_strings(&abcd, &ac), &bd);

    #[cfg(feature = "tracing")]
    tracing::trace!(level, "combine");

    sink.record(KaratsubaStep::Combine {
        num1: x.clone(),
        num2: y.clone(),
        description: format!("Combine: ac={ac}, bd={bd}, (ad+bc)={ad_plus_bc}"),
        ac: ac.clone(),
        bd: bd.clone(),
        ad_plus_bc: ad_plus_bc.clone(),
        level,
    });

    let high = multiply_by_power_of_10(&ac, 2 * mid);
    let cross = multiply_by_power_of_10(&ad_plus_bc, mid);
    let result = add_strings(&add_strings(&high, &cross), &bd);

    sink.record(KaratsubaStep::Multiply {
        description: format!("Result: {x} × {y} = {result}"),
        num1: x,
        num2: y,
        result: result.clone(),
        level,
    });

    result
}

/// Value of a digit-string of at most [`BASE_CASE_DIGITS`] digits.
fn small_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}
