//! Algorithm dispatch: from raw input text to a traced run.
//!
//! This module ties the fallible parsing stage to the infallible engines:
//! 1. parse and validate the text for the chosen [`Algorithm`],
//! 2. run the engine once, collecting its full step log,
//! 3. hand back a [`Run`] that a presentation layer can index step by step.
//!
//! Validation errors are returned before any engine work starts, so a failed
//! run never yields a partial trace.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::input::{parse_closest_pair_input, parse_karatsuba_input, InputError};
use crate::problems::closest_pair::{find_closest_pair, ClosestPairResult, ClosestPairStep};
use crate::problems::karatsuba::{karatsuba, KaratsubaResult};
use crate::traits::{TraceStep, Traced};

/// The two supported divide-and-conquer algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    ClosestPair,
    IntegerMultiplication,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::ClosestPair => "closest-pair",
            Algorithm::IntegerMultiplication => "integer-mult",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "closest-pair" | "closest_pair" => Ok(Algorithm::ClosestPair),
            "integer-mult" | "karatsuba" => Ok(Algorithm::IntegerMultiplication),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// A completed, traced run of either engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", content = "run", rename_all = "kebab-case")]
pub enum Run {
    ClosestPair(Traced<ClosestPairResult, ClosestPairStep>),
    #[serde(rename = "integer-mult")]
    Karatsuba(KaratsubaResult),
}

impl Run {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Run::ClosestPair(_) => Algorithm::ClosestPair,
            Run::Karatsuba(_) => Algorithm::IntegerMultiplication,
        }
    }

    pub fn step_count(&self) -> usize {
        match self {
            Run::ClosestPair(traced) => traced.len(),
            Run::Karatsuba(traced) => traced.len(),
        }
    }

    /// Type-erased view of step `index`.
    pub fn step(&self, index: usize) -> Option<&dyn TraceStep> {
        match self {
            Run::ClosestPair(traced) => traced.steps.get(index).map(|s| s as &dyn TraceStep),
            Run::Karatsuba(traced) => traced.steps.get(index).map(|s| s as &dyn TraceStep),
        }
    }

    /// All steps in recorded order.
    pub fn steps(&self) -> Box<dyn Iterator<Item = &dyn TraceStep> + '_> {
        match self {
            Run::ClosestPair(traced) => {
                Box::new(traced.steps.iter().map(|s| s as &dyn TraceStep))
            }
            Run::Karatsuba(traced) => Box::new(traced.steps.iter().map(|s| s as &dyn TraceStep)),
        }
    }

    /// One-line summary of the final answer.
    pub fn summary(&self) -> String {
        match self {
            Run::ClosestPair(traced) => {
                let r = &traced.result;
                format!(
                    "closest pair: #{} ({}, {}) and #{} ({}, {}), distance {:.6}",
                    r.point1.id, r.point1.x, r.point1.y, r.point2.id, r.point2.x, r.point2.y,
                    r.distance
                )
            }
            Run::Karatsuba(traced) => format!("product: {}", traced.result),
        }
    }
}

/// Parse `text` for `algorithm` and run it.
pub fn run_input(algorithm: Algorithm, text: &str) -> Result<Run, InputError> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("run_input", algorithm = algorithm.as_str());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let run = match algorithm {
        Algorithm::ClosestPair => {
            let points = parse_closest_pair_input(text)?;
            Run::ClosestPair(find_closest_pair(&points))
        }
        Algorithm::IntegerMultiplication => {
            let (num1, num2) = parse_karatsuba_input(text)?;
            Run::Karatsuba(karatsuba(&num1, &num2))
        }
    };

    #[cfg(feature = "tracing")]
    tracing::info!(steps = run.step_count(), "run complete");

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in [Algorithm::ClosestPair, Algorithm::IntegerMultiplication] {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "karatsuba".parse::<Algorithm>(),
            Ok(Algorithm::IntegerMultiplication)
        );
        assert!("quicksort".parse::<Algorithm>().is_err());
    }

    #[test]
    fn runs_closest_pair_from_text() {
        let run = run_input(Algorithm::ClosestPair, "3\n0 0\n3 4\n1 1\n").expect("valid");
        assert_eq!(run.algorithm(), Algorithm::ClosestPair);
        assert_eq!(run.step_count(), 3);
        assert_eq!(run.step(2).map(|s| s.tag()), Some("result"));
    }

    #[test]
    fn runs_karatsuba_from_text() {
        let run = run_input(Algorithm::IntegerMultiplication, "1234\n5678\n").expect("valid");
        assert_eq!(run.summary(), "product: 7006652");
        assert!(run.steps().all(|s| s.level().is_some()));
    }

    #[test]
    fn validation_error_stops_before_the_engine() {
        let err = run_input(Algorithm::ClosestPair, "1\n0 0\n").unwrap_err();
        assert_eq!(err, InputError::TooFewPoints);
        let err = run_input(Algorithm::IntegerMultiplication, "42\n").unwrap_err();
        assert_eq!(err, InputError::MissingOperands);
    }
}
