//! Trains a 2-2-1 sigmoid network on XOR, once with independent weights and
//! once with tag-shared weights, and prints the per-epoch cost trace.
//!
//! Run with `RUST_LOG=info` to see every epoch.

use beeline_core::{BeeLineError, Network, NetworkConfig, TrainConfig};
use beeline_data::canonical::xor;
use beeline_data::Dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run(shared: bool) -> Result<(), BeeLineError> {
    let mut rng = StdRng::seed_from_u64(1);
    let dataset = xor();
    let config = NetworkConfig::sigmoid_stack(&[2, 2, 1]).shared(shared);
    let mut network = Network::new(&config, &mut rng)?;

    let train = TrainConfig::new().verbose(true).max_epochs(Some(50_000));
    let history = network.train(dataset.examples(), train, &mut rng)?;

    let label = if shared { "shared" } else { "normal" };
    println!(
        "{}: {} epochs, converged={}, final cost {:?}",
        label,
        history.epochs(),
        history.converged,
        history.final_cost()
    );
    if let Some(arena) = network.tags() {
        println!("{}: {} tags minted, {} live", label, arena.len(), network.live_tags().len());
    }

    let mut fails = 0;
    for example in dataset.examples() {
        let output = network.predict(&example.inputs)?;
        println!("{:?} -> {:.4}", example.inputs, output[0]);
        if (output[0] > 0.5) != (example.inputs[0] != example.inputs[1]) {
            fails += 1;
        }
    }
    println!("{}: fails={}", label, fails);
    Ok(())
}

fn main() -> Result<(), BeeLineError> {
    env_logger::init();
    run(true)?;
    run(false)
}
