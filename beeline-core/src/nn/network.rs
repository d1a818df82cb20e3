// src/nn/network.rs

use crate::dual::EngineOptions;
use crate::error::BeeLineError;
use crate::nn::activation::{Activation, LayerMeta};
use crate::nn::config::NetworkConfig;
use crate::nn::init::{scaled_uniform_, shared_, InitPolicy};
use crate::nn::parameter::{ParamId, ParamKind, Parameter};
use crate::nn::state::NetState;
use crate::nn::tags::{TagArena, TagId};
use crate::training_example::{Target, TrainingExample};
use rand::Rng;
use std::collections::BTreeSet;

/// The learnable state of a fully connected feed-forward network.
///
/// For the transition from layer `i` to layer `i + 1` the network stores
/// `size[i] * size[i+1]` weights, row-major by source unit (see
/// [`weight_index`](Network::weight_index)), and `size[i+1]` biases.
#[derive(Debug, Clone)]
pub struct Network {
    meta: Vec<LayerMeta>,
    weights: Vec<Vec<Parameter>>,
    biases: Vec<Vec<Parameter>>,
    tags: Option<TagArena>,
    engine: EngineOptions,
}

impl Network {
    /// Builds a network from `config`, drawing initial values from `rng`.
    ///
    /// # Errors
    /// `ConfigurationError` for fewer than two layers or a zero-sized layer.
    pub fn new<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Self, BeeLineError> {
        config.validate()?;
        let meta = config.layers.clone();
        let policy = config.init_policy();
        let tags = match policy {
            InitPolicy::Shared => Some(TagArena::with_anchors()),
            InitPolicy::ScaledUniform => None,
        };

        let transitions = meta.len() - 1;
        let mut weights = Vec::with_capacity(transitions);
        let mut biases = Vec::with_capacity(transitions);
        for pair in meta.windows(2) {
            let (last, size) = (pair[0].size, pair[1].size);
            let mut layer = vec![Parameter::default(); last * size];
            let mut bias = vec![Parameter::default(); size];
            match &tags {
                Some(arena) => {
                    shared_(&mut layer, arena, rng)?;
                    shared_(&mut bias, arena, rng)?;
                }
                None => {
                    scaled_uniform_(&mut layer, last, rng)?;
                    scaled_uniform_(&mut bias, last, rng)?;
                }
            }
            weights.push(layer);
            biases.push(bias);
        }

        log::debug!(
            "built network {:?} with {:?} initialisation",
            meta.iter().map(|m| m.size).collect::<Vec<_>>(),
            policy
        );

        Ok(Network {
            meta,
            weights,
            biases,
            tags,
            engine: config.engine,
        })
    }

    pub fn meta(&self) -> &[LayerMeta] {
        &self.meta
    }

    pub fn input_size(&self) -> usize {
        self.meta[0].size
    }

    pub fn output_size(&self) -> usize {
        self.meta[self.meta.len() - 1].size
    }

    pub fn output_activation(&self) -> Activation {
        self.meta[self.meta.len() - 1].activation
    }

    pub fn engine_options(&self) -> EngineOptions {
        self.engine
    }

    /// Number of layer transitions (layers minus one).
    pub fn transitions(&self) -> usize {
        self.weights.len()
    }

    /// Position of the weight from unit `source` of layer `layer` to unit
    /// `target` of layer `layer + 1`.
    #[inline]
    pub fn weight_index(&self, layer: usize, source: usize, target: usize) -> usize {
        source * self.meta[layer + 1].size + target
    }

    pub fn weights(&self, layer: usize) -> &[Parameter] {
        &self.weights[layer]
    }

    pub fn biases(&self, layer: usize) -> &[Parameter] {
        &self.biases[layer]
    }

    /// Every parameter address: all weights layer by layer, then all biases.
    /// Gradients are extracted in this order.
    pub fn param_ids(&self) -> Vec<ParamId> {
        let weights = self.weights.iter().enumerate().flat_map(|(layer, w)| {
            (0..w.len()).map(move |index| ParamId {
                kind: ParamKind::Weight,
                layer,
                index,
            })
        });
        let biases = self.biases.iter().enumerate().flat_map(|(layer, b)| {
            (0..b.len()).map(move |index| ParamId {
                kind: ParamKind::Bias,
                layer,
                index,
            })
        });
        weights.chain(biases).collect()
    }

    pub fn param_count(&self) -> usize {
        let weights: usize = self.weights.iter().map(Vec::len).sum();
        let biases: usize = self.biases.iter().map(Vec::len).sum();
        weights + biases
    }

    pub fn param(&self, id: ParamId) -> Option<&Parameter> {
        let layers = match id.kind {
            ParamKind::Weight => &self.weights,
            ParamKind::Bias => &self.biases,
        };
        layers.get(id.layer).and_then(|layer| layer.get(id.index))
    }

    pub fn param_mut(&mut self, id: ParamId) -> Option<&mut Parameter> {
        let layers = match id.kind {
            ParamKind::Weight => &mut self.weights,
            ParamKind::Bias => &mut self.biases,
        };
        layers.get_mut(id.layer).and_then(|layer| layer.get_mut(id.index))
    }

    /// Like [`param_mut`](Network::param_mut) but an absent id is an error.
    pub(crate) fn expect_param_mut(&mut self, id: ParamId) -> Result<&mut Parameter, BeeLineError> {
        self.param_mut(id)
            .ok_or_else(|| BeeLineError::UnknownParameter(id.to_string()))
    }

    /// Weights then biases, in [`param_ids`](Network::param_ids) order.
    pub fn params(&self) -> impl Iterator<Item = &Parameter> + '_ {
        self.weights.iter().flatten().chain(self.biases.iter().flatten())
    }

    pub fn params_mut(&mut self) -> impl Iterator<Item = &mut Parameter> + '_ {
        self.weights
            .iter_mut()
            .flatten()
            .chain(self.biases.iter_mut().flatten())
    }

    pub fn is_shared(&self) -> bool {
        self.tags.is_some()
    }

    pub fn tags(&self) -> Option<&TagArena> {
        self.tags.as_ref()
    }

    pub(crate) fn tags_mut(&mut self) -> Option<&mut TagArena> {
        self.tags.as_mut()
    }

    /// Tags referenced by at least one entry. Empty without sharing.
    pub fn live_tags(&self) -> BTreeSet<TagId> {
        if self.tags.is_none() {
            return BTreeSet::new();
        }
        self.params().map(|p| p.tag).collect()
    }

    /// Checks an example against the topology.
    ///
    /// # Errors
    /// * `InputSizeMismatch` / `OutputSizeMismatch` for wrong vector lengths.
    /// * `ClassIndexOutOfRange` for a class index past the output layer.
    /// * `CostActivationMismatch` for a class target without a softmax output.
    pub fn validate_example(&self, example: &TrainingExample) -> Result<(), BeeLineError> {
        if example.inputs.len() != self.input_size() {
            return Err(BeeLineError::InputSizeMismatch {
                expected: self.input_size(),
                actual: example.inputs.len(),
            });
        }
        match &example.target {
            Target::Values(values) if values.len() != self.output_size() => {
                Err(BeeLineError::OutputSizeMismatch {
                    expected: self.output_size(),
                    actual: values.len(),
                })
            }
            Target::Values(_) => Ok(()),
            Target::Class(index) if *index >= self.output_size() => {
                Err(BeeLineError::ClassIndexOutOfRange {
                    index: *index,
                    classes: self.output_size(),
                })
            }
            Target::Class(_) if self.output_activation() != Activation::Softmax => {
                Err(BeeLineError::CostActivationMismatch {
                    activation: self.output_activation(),
                })
            }
            Target::Class(_) => Ok(()),
        }
    }

    /// Forward pass only: the output activations for `inputs`.
    pub fn predict(&self, inputs: &[f32]) -> Result<Vec<f32>, BeeLineError> {
        let mut state = NetState::new(self);
        state.load_inputs(inputs)?;
        state.forward(self)?;
        Ok(state.output_values())
    }

    /// Index of the largest output activation.
    pub fn classify(&self, inputs: &[f32]) -> Result<usize, BeeLineError> {
        let outputs = self.predict(inputs)?;
        let mut best = 0;
        for (i, value) in outputs.iter().enumerate() {
            if *value > outputs[best] {
                best = i;
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
