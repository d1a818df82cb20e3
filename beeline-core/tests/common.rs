use beeline_core::{Network, NetworkConfig, TrainingExample};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Shared by several test binaries; not every binary uses every helper.
#[allow(dead_code)]
pub fn seeded_network(config: NetworkConfig, seed: u64) -> Network {
    Network::new(&config, &mut StdRng::seed_from_u64(seed)).expect("test network")
}

#[allow(dead_code)]
pub fn xor_examples() -> Vec<TrainingExample> {
    vec![
        TrainingExample::regression(vec![0.0, 0.0], vec![0.0]),
        TrainingExample::regression(vec![1.0, 0.0], vec![1.0]),
        TrainingExample::regression(vec![0.0, 1.0], vec![1.0]),
        TrainingExample::regression(vec![1.0, 1.0], vec![0.0]),
    ]
}
