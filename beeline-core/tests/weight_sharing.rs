mod common;

use beeline_core::nn::tags::{NEGATIVE_ANCHOR, POSITIVE_ANCHOR};
use beeline_core::{NetworkConfig, TrainConfig};
use common::{seeded_network, xor_examples};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn shared_initialisation_uses_anchor_values() {
    let network = seeded_network(NetworkConfig::sigmoid_stack(&[3, 4, 2]).shared(true), 6);
    let arena = network.tags().expect("sharing enabled");
    assert_eq!(arena.len(), 2);
    for param in network.params() {
        assert!(param.tag == POSITIVE_ANCHOR || param.tag == NEGATIVE_ANCHOR);
        let expected = if param.tag == POSITIVE_ANCHOR { 1.0 } else { -1.0 };
        assert_eq!(param.value.val, expected);
    }
}

#[test]
fn training_never_leaves_dangling_tags() {
    let mut network = seeded_network(NetworkConfig::sigmoid_stack(&[2, 2, 1]).shared(true), 3);
    let mut rng = StdRng::seed_from_u64(3);
    let config = TrainConfig::new().max_epochs(Some(1));
    let mut previous = network.tags().map(|a| a.len()).unwrap_or(0);
    for _ in 0..30 {
        network
            .train(&xor_examples(), config, &mut rng)
            .expect("epoch");
        let arena = network.tags().expect("sharing enabled");
        assert!(arena.len() >= previous, "tags are never removed");
        previous = arena.len();
        for tag in network.live_tags() {
            assert!(arena.contains(tag));
        }
    }
}

#[test]
fn unshared_network_has_no_tag_table() {
    let network = seeded_network(NetworkConfig::sigmoid_stack(&[2, 2, 1]), 3);
    assert!(!network.is_shared());
    assert!(network.live_tags().is_empty());
}
