// src/training_example.rs

use crate::nn::losses::CostKind;

/// What an example is scored against.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// One target per output unit, scored with sum-of-squares.
    Values(Vec<f32>),
    /// Index of the correct output unit, scored with cross-entropy.
    Class(usize),
}

/// One input vector and its target.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExample {
    pub inputs: Vec<f32>,
    pub target: Target,
}

impl TrainingExample {
    pub fn regression(inputs: Vec<f32>, outputs: Vec<f32>) -> Self {
        TrainingExample {
            inputs,
            target: Target::Values(outputs),
        }
    }

    pub fn classification(inputs: Vec<f32>, class: usize) -> Self {
        TrainingExample {
            inputs,
            target: Target::Class(class),
        }
    }

    /// Picks the target form from raw parts: a non-empty `outputs` vector
    /// means sum-of-squares, an empty one means the class index is used.
    pub fn from_parts(inputs: Vec<f32>, outputs: Vec<f32>, class: usize) -> Self {
        if outputs.is_empty() {
            Self::classification(inputs, class)
        } else {
            Self::regression(inputs, outputs)
        }
    }

    pub fn cost_kind(&self) -> CostKind {
        match self.target {
            Target::Values(_) => CostKind::SumOfSquares,
            Target::Class(_) => CostKind::CrossEntropy,
        }
    }
}
