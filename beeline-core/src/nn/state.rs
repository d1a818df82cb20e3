// src/nn/state.rs

use crate::dual::{Dual, DualEngine};
use crate::error::BeeLineError;
use crate::nn::network::Network;
use num_traits::Zero;

/// Activation buffers for one forward evaluation, one `Vec<Dual>` per layer.
///
/// The network is only borrowed per call, so the same buffer can be reused
/// across the many seeded passes of a gradient computation.
#[derive(Debug, Clone)]
pub struct NetState {
    layers: Vec<Vec<Dual>>,
    engine: DualEngine,
}

impl NetState {
    /// Zeroed buffers shaped like `network`, with an engine built from its options.
    pub fn new(network: &Network) -> Self {
        NetState {
            layers: network
                .meta()
                .iter()
                .map(|meta| vec![Dual::zero(); meta.size])
                .collect(),
            engine: DualEngine::new(network.engine_options()),
        }
    }

    pub fn engine(&self) -> &DualEngine {
        &self.engine
    }

    /// Writes `inputs` as constants into layer 0.
    ///
    /// # Errors
    /// `InputSizeMismatch` if the length differs from the input layer.
    pub fn load_inputs(&mut self, inputs: &[f32]) -> Result<(), BeeLineError> {
        let input = &mut self.layers[0];
        if inputs.len() != input.len() {
            return Err(BeeLineError::InputSizeMismatch {
                expected: input.len(),
                actual: inputs.len(),
            });
        }
        for (slot, value) in input.iter_mut().zip(inputs) {
            *slot = Dual::constant(*value);
        }
        Ok(())
    }

    pub fn layer(&self, index: usize) -> &[Dual] {
        &self.layers[index]
    }

    pub fn output(&self) -> &[Dual] {
        &self.layers[self.layers.len() - 1]
    }

    pub fn output_values(&self) -> Vec<f32> {
        self.output().iter().map(|d| d.val).collect()
    }

    /// Runs the layers in order: weighted sum of the previous layer plus bias
    /// for every unit, then the layer's activation over the whole vector.
    ///
    /// # Errors
    /// * `ConfigurationError` if this buffer was built for another topology.
    /// * `NumericDegeneracy` if the engine runs with diagnostics and a
    ///   primitive saw a degenerate operand during the pass.
    pub fn forward(&mut self, network: &Network) -> Result<(), BeeLineError> {
        let meta = network.meta();
        if meta.len() != self.layers.len()
            || meta.iter().zip(&self.layers).any(|(m, l)| m.size != l.len())
        {
            return Err(BeeLineError::ConfigurationError(
                "state buffer does not match the network topology".to_string(),
            ));
        }

        let engine = &self.engine;
        for i in 0..network.transitions() {
            let (done, rest) = self.layers.split_at_mut(i + 1);
            let previous = &done[i];
            let next = &mut rest[0];
            let weights = network.weights(i);
            let biases = network.biases(i);
            let width = next.len();

            for (k, unit) in next.iter_mut().enumerate() {
                let mut sum = Dual::zero();
                for (j, activation) in previous.iter().enumerate() {
                    sum = engine.add(sum, engine.mul(*activation, weights[j * width + k].value));
                }
                *unit = engine.add(sum, biases[k].value);
            }
            meta[i + 1].activation.apply(engine, next);
        }

        match engine.take_fault() {
            Some(fault) => Err(fault.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
