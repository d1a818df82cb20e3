use crate::dual::Dual;
use crate::error::BeeLineError;
use crate::nn::parameter::Parameter;
use crate::nn::tags::TagArena;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// How a freshly built network's parameters get their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitPolicy {
    /// Uniform on [-1, 1] scaled by `1/sqrt(fan_in)`.
    ScaledUniform,
    /// Random anchor tag per entry, value taken from the tag.
    Shared,
}

/// Fills `params` with uniform [-1, 1] draws divided by `sqrt(fan_in)`.
///
/// Operates in-place. Tags, momentum and gradients are left untouched.
///
/// # Errors
/// `ConfigurationError` if `fan_in` is 0.
pub fn scaled_uniform_<R: Rng + ?Sized>(
    params: &mut [Parameter],
    fan_in: usize,
    rng: &mut R,
) -> Result<(), BeeLineError> {
    if fan_in == 0 {
        return Err(BeeLineError::ConfigurationError(
            "fan_in must be positive".to_string(),
        ));
    }
    let scale = (fan_in as f32).sqrt();
    let uniform = Uniform::new_inclusive(-1.0f32, 1.0f32);
    for param in params.iter_mut() {
        param.value = Dual::constant(uniform.sample(rng) / scale);
    }
    Ok(())
}

/// Assigns every entry a tag drawn uniformly from `arena` and that tag's value.
pub fn shared_<R: Rng + ?Sized>(
    params: &mut [Parameter],
    arena: &TagArena,
    rng: &mut R,
) -> Result<(), BeeLineError> {
    for param in params.iter_mut() {
        let tag = arena.random_tag(rng);
        param.tag = tag;
        param.value = Dual::constant(arena.value(tag)?);
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
