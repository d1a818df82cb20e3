//! Forward-mode training of small feed-forward networks.
//!
//! Every gradient component is obtained by rerunning the forward pass with
//! one parameter's dual-number derivative seeded to one. Parameters may be
//! tied together through tags; training splits over-shared tags over time.

pub mod autograd;
pub mod dual;
pub mod error;
pub mod nn;
pub mod optim;
pub mod train;
pub mod training_example;

pub use dual::{Dual, DualEngine, EngineOptions};
pub use error::BeeLineError;
pub use nn::{Activation, LayerMeta, Network, NetworkConfig};
pub use train::{TrainConfig, Trainer, TrainingHistory};
pub use training_example::{Target, TrainingExample};

// Re-export traits required by public functions/structs
pub use num_traits;
