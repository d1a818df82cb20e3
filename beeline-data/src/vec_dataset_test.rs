use super::*;

#[test]
fn test_accepts_rectangular_data() -> Result<(), BeeLineError> {
    let dataset = VecDataset::new(vec![
        TrainingExample::regression(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::regression(vec![1.0, 1.0], vec![0.0]),
    ])?;
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.input_width(), Some(2));
    assert_eq!(dataset.get(1).map(|e| e.inputs.clone()), Some(vec![1.0, 1.0]));
    assert!(dataset.get(2).is_none());
    Ok(())
}

#[test]
fn test_empty_dataset_is_allowed() -> Result<(), BeeLineError> {
    let dataset = VecDataset::new(Vec::new())?;
    assert!(dataset.is_empty());
    assert_eq!(dataset.input_width(), None);
    Ok(())
}

#[test]
fn test_rejects_ragged_inputs() {
    let result = VecDataset::new(vec![
        TrainingExample::regression(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::regression(vec![1.0], vec![0.0]),
    ]);
    assert_eq!(result, Err(BeeLineError::InputSizeMismatch { expected: 2, actual: 1 }));
}

#[test]
fn test_rejects_ragged_targets() {
    let result = VecDataset::new(vec![
        TrainingExample::regression(vec![0.0], vec![1.0]),
        TrainingExample::regression(vec![1.0], vec![0.0, 1.0]),
    ]);
    assert_eq!(result, Err(BeeLineError::OutputSizeMismatch { expected: 1, actual: 2 }));
}

#[test]
fn test_rejects_mixed_target_kinds() {
    let result = VecDataset::new(vec![
        TrainingExample::regression(vec![0.0], vec![1.0]),
        TrainingExample::classification(vec![1.0], 0),
    ]);
    assert!(matches!(result, Err(BeeLineError::ConfigurationError(_))));
}

#[test]
fn test_class_targets_of_any_index_are_consistent() -> Result<(), BeeLineError> {
    let dataset = VecDataset::new(vec![
        TrainingExample::classification(vec![0.0], 0),
        TrainingExample::classification(vec![1.0], 2),
    ])?;
    assert_eq!(dataset.examples().len(), 2);
    Ok(())
}
