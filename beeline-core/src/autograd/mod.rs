// src/autograd/mod.rs

//! Gradients by per-parameter forward-mode differentiation.
//!
//! There is no tape and no backward pass. For each parameter the whole network
//! is re-evaluated with that parameter's derivative seeded to 1, and the cost's
//! derivative is read off as the gradient component. That is one forward pass
//! per parameter per example, exact up to float rounding and the engine's
//! derivative guard.

pub mod grad_check;
pub mod gradient;

pub use grad_check::{check_gradients, GradCheckError};
pub use gradient::{compute_gradients, example_cost};
