use crate::dual::EngineOptions;
use crate::error::BeeLineError;
use crate::nn::activation::{Activation, LayerMeta};
use crate::nn::init::InitPolicy;

/// Topology and construction options of a [`Network`](crate::nn::Network).
///
/// Layers are added in order, input first:
///
/// ```
/// use beeline_core::nn::NetworkConfig;
///
/// let config = NetworkConfig::new().input(4).sigmoid(2).softmax(3).shared(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkConfig {
    pub layers: Vec<LayerMeta>,
    pub sharing: bool,
    pub engine: EngineOptions,
}

impl NetworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input layer followed by sigmoid layers of the given sizes.
    pub fn sigmoid_stack(sizes: &[usize]) -> Self {
        let mut config = NetworkConfig::new();
        for (i, &size) in sizes.iter().enumerate() {
            config = if i == 0 {
                config.input(size)
            } else {
                config.sigmoid(size)
            };
        }
        config
    }

    pub fn layer(mut self, size: usize, activation: Activation) -> Self {
        self.layers.push(LayerMeta::new(size, activation));
        self
    }

    pub fn input(self, size: usize) -> Self {
        self.layer(size, Activation::Identity)
    }

    pub fn identity(self, size: usize) -> Self {
        self.layer(size, Activation::Identity)
    }

    pub fn sigmoid(self, size: usize) -> Self {
        self.layer(size, Activation::Sigmoid)
    }

    pub fn softmax(self, size: usize) -> Self {
        self.layer(size, Activation::Softmax)
    }

    pub fn shared(mut self, sharing: bool) -> Self {
        self.sharing = sharing;
        self
    }

    pub fn engine(mut self, engine: EngineOptions) -> Self {
        self.engine = engine;
        self
    }

    pub fn init_policy(&self) -> InitPolicy {
        if self.sharing {
            InitPolicy::Shared
        } else {
            InitPolicy::ScaledUniform
        }
    }

    /// At least an input and an output layer, every size positive.
    pub fn validate(&self) -> Result<(), BeeLineError> {
        if self.layers.len() < 2 {
            return Err(BeeLineError::ConfigurationError(format!(
                "a network needs at least 2 layers, got {}",
                self.layers.len()
            )));
        }
        if let Some(position) = self.layers.iter().position(|meta| meta.size == 0) {
            return Err(BeeLineError::ConfigurationError(format!(
                "layer {} has size 0",
                position
            )));
        }
        Ok(())
    }
}
