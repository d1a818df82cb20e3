use crate::dual::{Dual, DualEngine};
use crate::error::BeeLineError;

/// `-log(p_class)`. `output` is expected to already hold probabilities.
///
/// Only the target unit goes through the log and negate transforms, so an
/// underflowed probability of another class does not trip diagnostics.
pub fn cross_entropy(
    engine: &DualEngine,
    output: &[Dual],
    class: usize,
) -> Result<Dual, BeeLineError> {
    let probability = output
        .get(class)
        .copied()
        .ok_or(BeeLineError::ClassIndexOutOfRange {
            index: class,
            classes: output.len(),
        })?;
    let mut loss = [probability];
    engine.log_transform(&mut loss);
    engine.neg_transform(&mut loss);
    Ok(loss[0])
}
