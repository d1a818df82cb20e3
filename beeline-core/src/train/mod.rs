// src/train/mod.rs

//! Epoch-based training with momentum, gradient-norm clipping and tag splits.

pub mod config;
pub mod history;
pub mod trainer;

pub use config::TrainConfig;
pub use history::TrainingHistory;
pub use trainer::Trainer;
