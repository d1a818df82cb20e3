use crate::error::BeeLineError;
use crate::nn::network::Network;

/// Trait defining the common interface for optimizers.
///
/// Optimizers read the `gradient` field of every parameter and update its
/// value. They never compute or clear gradients; each gradient pass
/// overwrites every `gradient` field.
pub trait Optimizer {
    /// Performs a single update step.
    ///
    /// # Arguments
    ///
    /// * `network`: The network whose parameters are updated in place.
    /// * `scaling`: Factor applied to this step's gradient contribution, e.g.
    ///   the clipping coefficient. `1.0` leaves the step unscaled.
    fn step(&mut self, network: &mut Network, scaling: f32) -> Result<(), BeeLineError>;
}
