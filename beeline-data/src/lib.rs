//! Dataset plumbing for `beeline-core`: in-memory datasets, the canonical
//! boolean problems and simple input transforms.

use beeline_core::TrainingExample;

/// Read access to an ordered collection of training examples.
pub trait Dataset {
    /// The example at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&TrainingExample>;

    /// Returns the total number of examples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no examples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All examples as one slice, in dataset order.
    fn examples(&self) -> &[TrainingExample];
}

pub mod canonical;
pub mod transforms;
pub mod vec_dataset;

// Re-export main components
pub use transforms::{normalize_by_feature_max, one_hot};
pub use vec_dataset::VecDataset;
