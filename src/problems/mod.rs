//! The two traced divide-and-conquer engines.
//!
//! - [`closest_pair`] : closest pair of points in the plane, O(n log n).
//! - [`karatsuba`]    : Karatsuba multiplication of decimal digit-strings.
//!
//! Both follow the same shape: a recursive solve that appends records to a
//! [`StepSink`](crate::traits::StepSink) and returns its partial result up the
//! call stack. They share no code beyond that seam.

pub mod closest_pair;
pub mod karatsuba;
