use crate::dual::{Dual, DualEngine};

/// Nonlinearity applied to a whole layer after the weighted sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Identity,
    Sigmoid,
    Softmax,
}

impl Activation {
    /// Applies the transform in place to a layer's pre-activation sums.
    pub fn apply(self, engine: &DualEngine, values: &mut [Dual]) {
        match self {
            Activation::Identity => {}
            Activation::Sigmoid => engine.sigmoid_transform(values),
            Activation::Softmax => engine.softmax_transform(values),
        }
    }
}

/// Size and activation of one layer. The input layer's activation is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMeta {
    pub size: usize,
    pub activation: Activation,
}

impl LayerMeta {
    pub fn new(size: usize, activation: Activation) -> Self {
        LayerMeta { size, activation }
    }
}
