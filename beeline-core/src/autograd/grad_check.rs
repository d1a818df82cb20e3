use crate::autograd::gradient::{compute_gradients, example_cost};
use crate::error::BeeLineError;
use crate::nn::network::Network;
use crate::nn::state::NetState;
use crate::training_example::TrainingExample;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error(
        "Gradient check failed for {param}: analytical grad {analytical:?} != numerical grad \
         {numerical:?}. Difference: {difference:?}"
    )]
    GradientMismatch {
        param: String,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error(
        "Numerical gradient is NaN or infinite for {param}. \
         Cost+: {cost_plus:?}, Cost-: {cost_minus:?}"
    )]
    NumericalGradNaNOrInfinite {
        param: String,
        cost_plus: f64,
        cost_minus: f64,
    },
    #[error("Network error during gradient check: {0}")]
    Network(BeeLineError),
}

impl From<BeeLineError> for GradCheckError {
    fn from(err: BeeLineError) -> Self {
        GradCheckError::Network(err)
    }
}

/// Compares forward-mode gradients against central finite differences.
///
/// Every parameter is moved to `value ± epsilon`, the cost is re-evaluated
/// and restored afterwards; parameter values are unchanged on return (the
/// `gradient` fields hold the forward-mode gradients). A component passes when
/// `|analytical - numerical| <= tolerance * max(1, |analytical|, |numerical|)`.
///
/// Run this on a network built with
/// [`EngineOptions::unguarded`](crate::dual::EngineOptions::unguarded) when the
/// gradients may exceed the derivative guard's bound.
pub fn check_gradients(
    network: &mut Network,
    example: &TrainingExample,
    epsilon: f32,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    let mut state = NetState::new(network);
    compute_gradients(network, &mut state, example)?;

    for id in network.param_ids() {
        let (original, analytical) = {
            let param = network.expect_param_mut(id)?;
            (param.value.val, param.gradient as f64)
        };

        let plus = original + epsilon;
        let minus = original - epsilon;
        network.expect_param_mut(id)?.value.val = plus;
        let cost_plus = example_cost(network, &mut state, example);
        network.expect_param_mut(id)?.value.val = minus;
        let cost_minus = example_cost(network, &mut state, example);
        network.expect_param_mut(id)?.value.val = original;
        let (cost_plus, cost_minus) = (cost_plus? as f64, cost_minus? as f64);

        let numerical = (cost_plus - cost_minus) / (plus as f64 - minus as f64);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                param: id.to_string(),
                cost_plus,
                cost_minus,
            });
        }
        let difference = (analytical - numerical).abs();
        let scale = 1.0f64.max(analytical.abs()).max(numerical.abs());
        if difference > tolerance * scale {
            return Err(GradCheckError::GradientMismatch {
                param: id.to_string(),
                analytical,
                numerical,
                difference,
            });
        }
    }
    Ok(())
}
