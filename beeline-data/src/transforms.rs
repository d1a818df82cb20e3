use beeline_core::{BeeLineError, TrainingExample};

/// Divides every input feature by that feature's maximum over `examples` and
/// returns the maxima.
///
/// A column whose maximum is not positive is left as it is.
///
/// # Errors
/// `InputSizeMismatch` if the examples disagree on input width. Nothing is
/// modified in that case.
pub fn normalize_by_feature_max(
    examples: &mut [TrainingExample],
) -> Result<Vec<f32>, BeeLineError> {
    let width = match examples.first() {
        Some(first) => first.inputs.len(),
        None => return Ok(Vec::new()),
    };
    let mut maxima = vec![f32::NEG_INFINITY; width];
    for example in examples.iter() {
        if example.inputs.len() != width {
            return Err(BeeLineError::InputSizeMismatch {
                expected: width,
                actual: example.inputs.len(),
            });
        }
        for (slot, value) in maxima.iter_mut().zip(&example.inputs) {
            *slot = slot.max(*value);
        }
    }
    for (feature, max) in maxima.iter().enumerate() {
        if !(max.is_finite() && *max > 0.0) {
            log::debug!("feature {} has maximum {}, left unscaled", feature, max);
        }
    }
    for example in examples.iter_mut() {
        for (value, max) in example.inputs.iter_mut().zip(&maxima) {
            if max.is_finite() && *max > 0.0 {
                *value /= max;
            }
        }
    }
    Ok(maxima)
}

/// `classes` values, all zero except a one at `class`.
pub fn one_hot(class: usize, classes: usize) -> Result<Vec<f32>, BeeLineError> {
    if class >= classes {
        return Err(BeeLineError::ClassIndexOutOfRange {
            index: class,
            classes,
        });
    }
    let mut values = vec![0.0; classes];
    values[class] = 1.0;
    Ok(values)
}
