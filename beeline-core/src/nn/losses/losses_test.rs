use super::*;
use crate::dual::EngineOptions;
use approx::assert_relative_eq;

#[test]
fn test_sum_of_squares_value_and_derivative() -> Result<(), BeeLineError> {
    let engine = DualEngine::new(EngineOptions::unguarded());
    let output = [Dual::new(0.8, 1.0), Dual::new(0.1, 0.5)];
    let cost = sum_of_squares(&engine, &output, &[1.0, 0.0])?;
    // 0.5 * (0.04 + 0.01)
    assert_relative_eq!(cost.val, 0.025, epsilon = 1e-7);
    // (0.8 - 1)*1 + 0.1*0.5
    assert_relative_eq!(cost.der, -0.15, epsilon = 1e-7);
    Ok(())
}

#[test]
fn test_sum_of_squares_rejects_wrong_length() {
    let engine = DualEngine::default();
    let result = sum_of_squares(&engine, &[Dual::constant(0.0)], &[1.0, 0.0]);
    assert_eq!(result, Err(BeeLineError::OutputSizeMismatch { expected: 1, actual: 2 }));
}

#[test]
fn test_cross_entropy_picks_target_class() -> Result<(), BeeLineError> {
    let engine = DualEngine::default();
    let output = [Dual::new(0.2, 0.0), Dual::new(0.5, 0.25), Dual::new(0.3, 0.0)];
    let loss = cross_entropy(&engine, &output, 1)?;
    assert_relative_eq!(loss.val, -(0.5f32.ln()));
    assert_relative_eq!(loss.der, -0.5);
    assert_eq!(
        cross_entropy(&engine, &output, 3),
        Err(BeeLineError::ClassIndexOutOfRange { index: 3, classes: 3 })
    );
    Ok(())
}

#[test]
fn test_cross_entropy_ignores_other_underflowed_classes() -> Result<(), BeeLineError> {
    let engine = DualEngine::new(EngineOptions::diagnostic());
    let output = [Dual::constant(0.0), Dual::constant(1.0)];
    let loss = cross_entropy(&engine, &output, 1)?;
    assert_eq!(loss.val, 0.0);
    assert!(engine.take_fault().is_none());
    Ok(())
}

#[test]
fn test_cost_dispatch_and_pairing() -> Result<(), BeeLineError> {
    let engine = DualEngine::default();
    let output = [Dual::constant(0.25), Dual::constant(0.75)];

    let quadratic = cost(&engine, Activation::Sigmoid, &output, &Target::Values(vec![0.0, 1.0]))?;
    assert_relative_eq!(quadratic.val, 0.0625);

    let entropy = cost(&engine, Activation::Softmax, &output, &Target::Class(1))?;
    assert_relative_eq!(entropy.val, -(0.75f32.ln()));

    assert_eq!(
        cost(&engine, Activation::Sigmoid, &output, &Target::Class(1)),
        Err(BeeLineError::CostActivationMismatch { activation: Activation::Sigmoid })
    );
    Ok(())
}
