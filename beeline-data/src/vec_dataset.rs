use crate::Dataset;
use beeline_core::{BeeLineError, Target, TrainingExample};

/// A dataset held in a `Vec`, checked to be rectangular.
///
/// All examples have the same input width and the same kind of target:
/// either value vectors of one common width, or class indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VecDataset {
    pub(crate) examples: Vec<TrainingExample>,
}

impl VecDataset {
    /// Wraps `examples` after checking their shapes agree with the first one.
    ///
    /// # Errors
    /// * `InputSizeMismatch` for an example of a different input width.
    /// * `OutputSizeMismatch` for a value target of a different width.
    /// * `ConfigurationError` when value and class targets are mixed.
    pub fn new(examples: Vec<TrainingExample>) -> Result<Self, BeeLineError> {
        if let Some((first, rest)) = examples.split_first() {
            for example in rest {
                if example.inputs.len() != first.inputs.len() {
                    return Err(BeeLineError::InputSizeMismatch {
                        expected: first.inputs.len(),
                        actual: example.inputs.len(),
                    });
                }
                match (&first.target, &example.target) {
                    (Target::Values(a), Target::Values(b)) if a.len() != b.len() => {
                        return Err(BeeLineError::OutputSizeMismatch {
                            expected: a.len(),
                            actual: b.len(),
                        });
                    }
                    (Target::Values(_), Target::Values(_))
                    | (Target::Class(_), Target::Class(_)) => {}
                    _ => {
                        return Err(BeeLineError::ConfigurationError(
                            "dataset mixes value targets and class targets".to_string(),
                        ));
                    }
                }
            }
        }
        log::debug!("dataset of {} examples", examples.len());
        Ok(VecDataset { examples })
    }

    /// Input width shared by every example, `None` when empty.
    pub fn input_width(&self) -> Option<usize> {
        self.examples.first().map(|e| e.inputs.len())
    }

    pub fn examples_mut(&mut self) -> &mut [TrainingExample] {
        &mut self.examples
    }

    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.examples
    }
}

impl Dataset for VecDataset {
    fn get(&self, index: usize) -> Option<&TrainingExample> {
        self.examples.get(index)
    }

    fn len(&self) -> usize {
        self.examples.len()
    }

    fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
