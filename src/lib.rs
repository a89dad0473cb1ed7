//! Traced divide-and-conquer engines.
//!
//! This crate computes two classic divide-and-conquer results and, alongside
//! each answer, records an ordered log of every divide, base-case and combine
//! event, with enough data in each record to redraw the algorithm's state at
//! that point.
//!
//! ## Core idea
//! 1. Each engine is a pure function of an immutable input.
//! 2. Its recursion appends records to a [`StepSink`] in strict depth-first
//!    order; nothing is reordered afterwards.
//! 3. The caller gets a [`Traced`] value `{ result, steps }` that a
//!    presentation layer can replay with a [`Playback`] cursor.
//!
//! ## Quick start
//! ```
//! use dnc_trace::problems::{closest_pair::{find_closest_pair, Point}, karatsuba::karatsuba};
//! use dnc_trace::TraceStep;
//!
//! let product = karatsuba("1234", "5678");
//! assert_eq!(product.result, "7006652");
//! assert_eq!(product.steps.last().map(|s| s.tag()), Some("result"));
//!
//! let points = [Point::new(0.0, 0.0, 0), Point::new(5.0, 5.0, 1), Point::new(1.0, 0.0, 2)];
//! let pair = find_closest_pair(&points);
//! assert_eq!(pair.result.distance, 1.0);
//! ```
//!
//! ## Modules
//! - [`problems`]: the closest-pair and Karatsuba engines.
//! - [`string_math`]: exact digit-string arithmetic used by Karatsuba.
//! - [`input`]: validation of the plain-text input formats.
//! - [`engine`]: algorithm dispatch from text to a traced [`Run`].
//! - [`playback`] / [`builder`]: a cursor for stepping through a trace.
//!
//! Enable the `tracing` feature for spans and events from every run.

pub mod builder;
pub mod engine;
pub mod input;
pub mod playback;
pub mod problems;
pub mod string_math;
pub mod traits;
pub mod utils;

pub use crate::builder::PlaybackBuilder;
pub use crate::engine::{run_input, Algorithm, Run};
pub use crate::input::InputError;
pub use crate::playback::Playback;
pub use crate::traits::{StepSink, TraceStep, Traced};
