use super::*;
use crate::dual::EngineOptions;
use crate::nn::config::NetworkConfig;
use crate::nn::parameter::{ParamId, ParamKind};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 2-2-1 identity network with hand-set parameters.
fn linear_network() -> Result<Network, BeeLineError> {
    let config = NetworkConfig::new().input(2).identity(2).identity(1);
    let mut network = Network::new(&config, &mut StdRng::seed_from_u64(0))?;
    let values = [
        // layer 0 weights, index = source * 2 + target
        (ParamKind::Weight, 0, 0, 1.0),
        (ParamKind::Weight, 0, 1, 2.0),
        (ParamKind::Weight, 0, 2, 3.0),
        (ParamKind::Weight, 0, 3, 4.0),
        (ParamKind::Bias, 0, 0, 0.5),
        (ParamKind::Bias, 0, 1, -0.5),
        (ParamKind::Weight, 1, 0, 1.0),
        (ParamKind::Weight, 1, 1, -1.0),
        (ParamKind::Bias, 1, 0, 0.25),
    ];
    for (kind, layer, index, value) in values {
        let param = network
            .param_mut(ParamId { kind, layer, index })
            .ok_or_else(|| BeeLineError::UnknownParameter(format!("{:?}", (kind, layer, index))))?;
        param.value = Dual::constant(value);
    }
    Ok(network)
}

#[test]
fn test_forward_weighted_sums() -> Result<(), BeeLineError> {
    let network = linear_network()?;
    let mut state = NetState::new(&network);
    state.load_inputs(&[1.0, 2.0])?;
    state.forward(&network)?;
    // hidden[0] = 1*1 + 2*3 + 0.5, hidden[1] = 1*2 + 2*4 - 0.5
    assert_relative_eq!(state.layer(1)[0].val, 7.5);
    assert_relative_eq!(state.layer(1)[1].val, 9.5);
    assert_relative_eq!(state.output()[0].val, 7.5 - 9.5 + 0.25);
    Ok(())
}

#[test]
fn test_seeded_weight_propagates_derivative() -> Result<(), BeeLineError> {
    let mut network = linear_network()?;
    let id = ParamId { kind: ParamKind::Weight, layer: 0, index: 2 };
    if let Some(param) = network.param_mut(id) {
        param.value.der = 1.0;
    }
    let mut state = NetState::new(&network);
    state.load_inputs(&[1.0, 2.0])?;
    state.forward(&network)?;
    // w(0, source 1, target 0) feeds hidden[0] with input 2, output weight 1.
    assert_relative_eq!(state.layer(1)[0].der, 2.0);
    assert_relative_eq!(state.output()[0].der, 2.0);
    Ok(())
}

#[test]
fn test_forward_is_deterministic() -> Result<(), BeeLineError> {
    let config = NetworkConfig::new().input(3).sigmoid(4).softmax(2);
    let network = Network::new(&config, &mut StdRng::seed_from_u64(9))?;
    let mut first = NetState::new(&network);
    let mut second = NetState::new(&network);
    for state in [&mut first, &mut second] {
        state.load_inputs(&[0.1, -0.4, 0.9])?;
        state.forward(&network)?;
    }
    let a: Vec<u32> = first.output().iter().map(|d| d.val.to_bits()).collect();
    let b: Vec<u32> = second.output().iter().map(|d| d.val.to_bits()).collect();
    assert_eq!(a, b);

    // Reusing a buffer gives the same bits again.
    first.forward(&network)?;
    let c: Vec<u32> = first.output().iter().map(|d| d.val.to_bits()).collect();
    assert_eq!(a, c);
    Ok(())
}

#[test]
fn test_softmax_output_layer_is_normalised() -> Result<(), BeeLineError> {
    let config = NetworkConfig::new().input(2).sigmoid(3).softmax(4);
    let network = Network::new(&config, &mut StdRng::seed_from_u64(2))?;
    let outputs = network.predict(&[0.5, 0.25])?;
    assert_relative_eq!(outputs.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
    Ok(())
}

#[test]
fn test_mismatched_buffer_is_rejected() -> Result<(), BeeLineError> {
    let mut rng = StdRng::seed_from_u64(0);
    let small = Network::new(&NetworkConfig::sigmoid_stack(&[2, 1]), &mut rng)?;
    let large = Network::new(&NetworkConfig::sigmoid_stack(&[2, 3, 1]), &mut rng)?;
    let mut state = NetState::new(&small);
    assert!(matches!(state.forward(&large), Err(BeeLineError::ConfigurationError(_))));
    Ok(())
}

#[test]
fn test_diagnostics_surface_degenerate_forward_pass() -> Result<(), BeeLineError> {
    let config = NetworkConfig::sigmoid_stack(&[1, 1]).engine(EngineOptions::diagnostic());
    let mut network = Network::new(&config, &mut StdRng::seed_from_u64(0))?;
    let weight = ParamId { kind: ParamKind::Weight, layer: 0, index: 0 };
    if let Some(param) = network.param_mut(weight) {
        param.value = Dual::constant(f32::NAN);
    }
    let mut state = NetState::new(&network);
    state.load_inputs(&[1.0])?;
    assert!(matches!(
        state.forward(&network),
        Err(BeeLineError::NumericDegeneracy { .. })
    ));
    Ok(())
}
