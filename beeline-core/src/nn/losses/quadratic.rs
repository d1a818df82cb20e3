use crate::dual::{Dual, DualEngine};
use crate::error::BeeLineError;
use num_traits::Zero;

/// `0.5 * Σ (output_k - target_k)²`.
pub fn sum_of_squares(
    engine: &DualEngine,
    output: &[Dual],
    targets: &[f32],
) -> Result<Dual, BeeLineError> {
    if output.len() != targets.len() {
        return Err(BeeLineError::OutputSizeMismatch {
            expected: output.len(),
            actual: targets.len(),
        });
    }
    let mut sum = Dual::zero();
    for (unit, target) in output.iter().zip(targets) {
        let diff = engine.sub(*unit, Dual::constant(*target));
        sum = engine.add(sum, engine.mul(diff, diff));
    }
    Ok(engine.mul(Dual::constant(0.5), sum))
}
