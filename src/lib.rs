//! Clamped arithmetic pipeline.
//!
//! A [`Transformer`] holds a value plus fixed bounds and a coefficient. Each step (add,
//! multiply, power, compound) computes a candidate and clamps it back into the bounds.
//! [`run_full_sequence`] runs the fixed multiply, add, power, compound pipeline.
#![forbid(unsafe_code)]

pub mod core;
pub mod error;
pub mod sequence;
pub mod step;
pub mod transformer;

pub use crate::core::{Params, checked_pow, clamp};
pub use error::{ClampError, ClampResult};
pub use sequence::{
    FULL_SEQUENCE, SequenceInput, SequenceTrace, StepRecord, run_full_sequence,
    run_full_sequence_traced,
};
pub use step::Step;
pub use transformer::Transformer;
