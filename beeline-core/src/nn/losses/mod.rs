// src/nn/losses/mod.rs

//! Per-example cost functions evaluated on dual numbers, so that the cost's
//! derivative is the gradient component of whichever parameter is seeded.

pub mod cross_entropy;
pub mod quadratic;

pub use cross_entropy::cross_entropy;
pub use quadratic::sum_of_squares;

use crate::dual::{Dual, DualEngine};
use crate::error::BeeLineError;
use crate::nn::activation::Activation;
use crate::training_example::Target;

/// The two supported costs. Chosen per example by the form of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostKind {
    SumOfSquares,
    CrossEntropy,
}

/// Scores `output` against `target` with the cost the target calls for.
///
/// # Errors
/// * `OutputSizeMismatch` / `ClassIndexOutOfRange` for a malformed target.
/// * `CostActivationMismatch` for a class target when `activation` is not softmax.
pub fn cost(
    engine: &DualEngine,
    activation: Activation,
    output: &[Dual],
    target: &Target,
) -> Result<Dual, BeeLineError> {
    match target {
        Target::Values(values) => sum_of_squares(engine, output, values),
        Target::Class(class) => {
            if activation != Activation::Softmax {
                return Err(BeeLineError::CostActivationMismatch { activation });
            }
            cross_entropy(engine, output, *class)
        }
    }
}

#[cfg(test)]
#[path = "losses_test.rs"]
mod tests;
