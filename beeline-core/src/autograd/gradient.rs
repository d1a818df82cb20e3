use crate::dual::Dual;
use crate::error::BeeLineError;
use crate::nn::losses;
use crate::nn::network::Network;
use crate::nn::parameter::ParamId;
use crate::nn::state::NetState;
use crate::training_example::TrainingExample;

/// Cost of `example` under the current parameter values, without seeding.
pub fn example_cost(
    network: &Network,
    state: &mut NetState,
    example: &TrainingExample,
) -> Result<f32, BeeLineError> {
    network.validate_example(example)?;
    state.load_inputs(&example.inputs)?;
    evaluate(network, state, example).map(|cost| cost.val)
}

/// Fills the `gradient` field of every weight and bias with the partial
/// derivative of the example's cost and returns the cost itself.
///
/// Parameters are visited in [`Network::param_ids`] order. Each seed is
/// cleared again before the next parameter is touched, including when an
/// evaluation fails.
///
/// # Errors
/// Propagates example validation errors and, with diagnostics enabled,
/// `NumericDegeneracy` from the forward pass.
pub fn compute_gradients(
    network: &mut Network,
    state: &mut NetState,
    example: &TrainingExample,
) -> Result<f32, BeeLineError> {
    let cost = example_cost(network, state, example)?;
    for id in network.param_ids() {
        set_seed(network, id, 1.0)?;
        let result = evaluate(network, state, example);
        set_seed(network, id, 0.0)?;
        network.expect_param_mut(id)?.gradient = result?.der;
    }
    Ok(cost)
}

fn set_seed(network: &mut Network, id: ParamId, seed: f32) -> Result<(), BeeLineError> {
    network.expect_param_mut(id)?.value.der = seed;
    Ok(())
}

fn evaluate(
    network: &Network,
    state: &mut NetState,
    example: &TrainingExample,
) -> Result<Dual, BeeLineError> {
    state.forward(network)?;
    let cost = losses::cost(
        state.engine(),
        network.output_activation(),
        state.output(),
        &example.target,
    )?;
    // faults raised while scoring belong to this pass, not the next one
    match state.engine().take_fault() {
        Some(fault) => Err(fault.into()),
        None => Ok(cost),
    }
}

#[cfg(test)]
#[path = "gradient_test.rs"]
mod tests;
