use crate::error::BeeLineError;
use crate::nn::network::Network;
use crate::optim::optimizer_trait::Optimizer;

/// Stochastic gradient descent with classical momentum.
///
/// For every parameter:
///
/// ```text
/// momentum = alpha * momentum - eta * gradient * scaling
/// value   += momentum
/// ```
///
/// The momentum buffers live in the parameters themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSgd {
    /// Momentum retention.
    pub alpha: f32,
    /// Learning rate.
    pub eta: f32,
}

impl MomentumSgd {
    pub fn new(alpha: f32, eta: f32) -> Self {
        MomentumSgd { alpha, eta }
    }
}

impl Optimizer for MomentumSgd {
    fn step(&mut self, network: &mut Network, scaling: f32) -> Result<(), BeeLineError> {
        let (alpha, eta) = (self.alpha, self.eta);
        for param in network.params_mut() {
            param.momentum = alpha * param.momentum - eta * param.gradient * scaling;
            param.value.val += param.momentum;
        }
        Ok(())
    }
}
