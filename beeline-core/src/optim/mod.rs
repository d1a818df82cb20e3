// src/optim/mod.rs

//! Parameter updates.
//!
//! This module provides the `Optimizer` trait, the momentum update used by the
//! training loop, gradient-norm clipping and the tag-sharing reductions.

pub mod grad_clipping;
pub mod momentum;
pub mod optimizer_trait;
pub mod sharing;

// Re-export key items for easier access
pub use grad_clipping::{clip_coefficient, gradient_norm};
pub use momentum::MomentumSgd;
pub use optimizer_trait::Optimizer;
pub use sharing::{average_shared_gradients, split_tags};
