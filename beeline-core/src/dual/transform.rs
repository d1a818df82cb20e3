// src/dual/transform.rs

//! Elementwise transforms applied in place to a layer's worth of dual numbers.
//!
//! `sigmoid`, `log` and `neg` act on each element independently. `softmax`
//! couples the whole slice through its normalising sum, which is why layer
//! activations are applied to the full vector rather than unit by unit.

use super::{Dual, DualEngine};
use num_traits::Zero;

impl DualEngine {
    pub fn sigmoid_transform(&self, values: &mut [Dual]) {
        for value in values.iter_mut() {
            *value = self.sigmoid(*value);
        }
    }

    /// `exp(x_i) / Σ_j exp(x_j)`.
    ///
    /// The largest value is subtracted first as a constant. Softmax is
    /// invariant under a common shift, so values and derivatives are unchanged
    /// and `exp` cannot overflow for finite inputs.
    pub fn softmax_transform(&self, values: &mut [Dual]) {
        if values.is_empty() {
            return;
        }
        let max = values
            .iter()
            .map(|d| d.val)
            .fold(f32::NEG_INFINITY, f32::max);
        let shift = Dual::constant(if max.is_finite() { max } else { 0.0 });

        let mut sum = Dual::zero();
        for value in values.iter_mut() {
            *value = self.exp(self.sub(*value, shift));
            sum = self.add(sum, *value);
        }
        for value in values.iter_mut() {
            *value = self.div(*value, sum);
        }
    }

    pub fn log_transform(&self, values: &mut [Dual]) {
        for value in values.iter_mut() {
            *value = self.log(*value);
        }
    }

    pub fn neg_transform(&self, values: &mut [Dual]) {
        for value in values.iter_mut() {
            *value = self.neg(*value);
        }
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
