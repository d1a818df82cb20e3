use crate::dual::Dual;
use crate::nn::tags::TagId;
use std::fmt;

/// One learnable scalar: a connection weight or a unit bias.
///
/// `value.der` is the seed slot. It is 0 except while this entry is the one
/// being differentiated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parameter {
    pub tag: TagId,
    pub value: Dual,
    pub momentum: f32,
    pub gradient: f32,
}

impl Parameter {
    pub fn new(value: f32) -> Self {
        Parameter {
            value: Dual::constant(value),
            ..Default::default()
        }
    }

    pub fn tagged(tag: TagId, value: f32) -> Self {
        Parameter {
            tag,
            value: Dual::constant(value),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Weight,
    Bias,
}

/// Address of a parameter: `layer` is the index of the transition
/// (layer `layer` to layer `layer + 1`), `index` the position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId {
    pub kind: ParamKind,
    pub layer: usize,
    pub index: usize,
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParamKind::Weight => write!(f, "w{}_{}", self.layer, self.index),
            ParamKind::Bias => write!(f, "b{}_{}", self.layer, self.index),
        }
    }
}
