//! Small boolean problems used to exercise training end to end.

use crate::vec_dataset::VecDataset;
use beeline_core::TrainingExample;

fn boolean_table<const N: usize>(rows: &[([f32; N], f32)]) -> VecDataset {
    let examples = rows
        .iter()
        .map(|(inputs, output)| TrainingExample::regression(inputs.to_vec(), vec![*output]))
        .collect();
    // every row has N inputs and one output
    VecDataset { examples }
}

/// Exclusive or of two inputs.
pub fn xor() -> VecDataset {
    boolean_table(&[
        ([0.0, 0.0], 0.0),
        ([1.0, 0.0], 1.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 1.0], 0.0),
    ])
}

/// Target bit of a controlled-controlled-not gate: `c XOR (a AND b)`.
pub fn ccnot() -> VecDataset {
    boolean_table(&[
        ([0.0, 0.0, 0.0], 0.0),
        ([1.0, 0.0, 0.0], 0.0),
        ([0.0, 1.0, 0.0], 0.0),
        ([1.0, 1.0, 0.0], 1.0),
        ([0.0, 0.0, 1.0], 1.0),
        ([1.0, 0.0, 1.0], 1.0),
        ([0.0, 1.0, 1.0], 1.0),
        ([1.0, 1.0, 1.0], 0.0),
    ])
}
