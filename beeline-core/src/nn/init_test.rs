use super::*;
use crate::nn::tags::{NEGATIVE_ANCHOR, POSITIVE_ANCHOR};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_scaled_uniform_bounds() -> Result<(), BeeLineError> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut params = vec![Parameter::default(); 500];
    scaled_uniform_(&mut params, 16, &mut rng)?;
    let bound = 1.0 / 4.0;
    assert!(params.iter().all(|p| p.value.val.abs() <= bound));
    assert!(params.iter().all(|p| p.value.der == 0.0));
    // Not degenerate: both signs show up.
    assert!(params.iter().any(|p| p.value.val > 0.0));
    assert!(params.iter().any(|p| p.value.val < 0.0));
    Ok(())
}

#[test]
fn test_scaled_uniform_is_reproducible() -> Result<(), BeeLineError> {
    let mut a = vec![Parameter::default(); 10];
    let mut b = vec![Parameter::default(); 10];
    scaled_uniform_(&mut a, 3, &mut StdRng::seed_from_u64(42))?;
    scaled_uniform_(&mut b, 3, &mut StdRng::seed_from_u64(42))?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_scaled_uniform_rejects_zero_fan_in() {
    let mut params = vec![Parameter::default(); 2];
    let result = scaled_uniform_(&mut params, 0, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(BeeLineError::ConfigurationError(_))));
}

#[test]
fn test_shared_takes_anchor_values() -> Result<(), BeeLineError> {
    let mut rng = StdRng::seed_from_u64(5);
    let arena = TagArena::with_anchors();
    let mut params = vec![Parameter::default(); 64];
    shared_(&mut params, &arena, &mut rng)?;
    for param in &params {
        match param.tag {
            POSITIVE_ANCHOR => assert_eq!(param.value.val, 1.0),
            NEGATIVE_ANCHOR => assert_eq!(param.value.val, -1.0),
            other => panic!("unexpected tag {}", other),
        }
    }
    assert!(params.iter().any(|p| p.tag == POSITIVE_ANCHOR));
    assert!(params.iter().any(|p| p.tag == NEGATIVE_ANCHOR));
    Ok(())
}
