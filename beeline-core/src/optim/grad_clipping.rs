use crate::nn::network::Network;

/// Euclidean norm of the full gradient vector, weights and biases together.
pub fn gradient_norm(network: &Network) -> f32 {
    network
        .params()
        .map(|param| param.gradient * param.gradient)
        .sum::<f32>()
        .sqrt()
}

/// Factor to scale this step's update by: `threshold / norm` when the norm
/// exceeds `threshold`, otherwise 1.
///
/// The stored gradients are not modified. A NaN norm never compares greater
/// than the threshold and so leaves the step unscaled.
pub fn clip_coefficient(norm: f32, threshold: f32) -> f32 {
    if norm > threshold {
        threshold / norm
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "grad_clipping_test.rs"]
mod tests;
