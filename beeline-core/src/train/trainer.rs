// src/train/trainer.rs

use crate::autograd::gradient::compute_gradients;
use crate::error::BeeLineError;
use crate::nn::network::Network;
use crate::nn::state::NetState;
use crate::optim::grad_clipping::{clip_coefficient, gradient_norm};
use crate::optim::momentum::MomentumSgd;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::sharing::{average_shared_gradients, split_tags};
use crate::train::config::TrainConfig;
use crate::train::history::TrainingHistory;
use crate::training_example::TrainingExample;
use log::Level;
use rand::seq::SliceRandom;
use rand::Rng;

/// Runs epochs of per-example momentum updates over a dataset.
///
/// ```
/// use beeline_core::{Network, NetworkConfig, TrainConfig, Trainer, TrainingExample};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let mut network = Network::new(&NetworkConfig::sigmoid_stack(&[1, 1]), &mut rng)?;
/// let data = vec![TrainingExample::regression(vec![1.0], vec![1.0])];
/// let mut trainer = Trainer::new(TrainConfig::new().max_epochs(Some(10)))?;
/// let history = trainer.fit(&mut network, &data, &mut rng)?;
/// assert!(history.epochs() <= 10);
/// # Ok::<(), beeline_core::BeeLineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainConfig,
    optimizer: MomentumSgd,
}

impl Trainer {
    /// # Errors
    /// `ConfigurationError` if `config` does not validate.
    pub fn new(config: TrainConfig) -> Result<Self, BeeLineError> {
        config.validate()?;
        Ok(Trainer {
            optimizer: MomentumSgd::new(config.alpha, config.eta),
            config,
        })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Trains until an epoch's total cost drops below the target or the
    /// epoch cap is hit.
    ///
    /// The dataset is checked against the network once before the first
    /// update, so a malformed example never leaves the network half trained.
    pub fn fit<R: Rng + ?Sized>(
        &mut self,
        network: &mut Network,
        data: &[TrainingExample],
        rng: &mut R,
    ) -> Result<TrainingHistory, BeeLineError> {
        validate_dataset(network, data)?;
        let mut state = NetState::new(network);
        let mut order: Vec<usize> = (0..data.len()).collect();
        let mut history = TrainingHistory::default();

        loop {
            if let Some(max) = self.config.max_epochs {
                if history.epochs() >= max {
                    log::warn!(
                        "stopped after {} epochs without reaching target cost {} (last cost {:?})",
                        max,
                        self.config.target_cost,
                        history.final_cost()
                    );
                    break;
                }
            }

            let cost = self.run_epoch(network, &mut state, data, &mut order, rng)?;
            let epoch = history.epochs();
            history.costs.push(cost);
            self.log_epoch(network, epoch, cost);

            if cost < self.config.target_cost {
                history.converged = true;
                log::info!("reached target cost after {} epochs", history.epochs());
                break;
            }
        }
        Ok(history)
    }

    /// One pass over `data` in a fresh random order, followed by a tag split
    /// when the network shares parameters. Returns the epoch's total cost.
    pub fn epoch<R: Rng + ?Sized>(
        &mut self,
        network: &mut Network,
        data: &[TrainingExample],
        rng: &mut R,
    ) -> Result<f64, BeeLineError> {
        validate_dataset(network, data)?;
        let mut state = NetState::new(network);
        let mut order: Vec<usize> = (0..data.len()).collect();
        self.run_epoch(network, &mut state, data, &mut order, rng)
    }

    fn run_epoch<R: Rng + ?Sized>(
        &mut self,
        network: &mut Network,
        state: &mut NetState,
        data: &[TrainingExample],
        order: &mut [usize],
        rng: &mut R,
    ) -> Result<f64, BeeLineError> {
        order.shuffle(rng);
        let mut total = 0.0f64;
        for &i in order.iter() {
            let cost = compute_gradients(network, state, &data[i])?;
            let norm = gradient_norm(network);
            average_shared_gradients(network)?;
            let scaling = clip_coefficient(norm, self.config.clip_threshold);
            self.optimizer.step(network, scaling)?;
            total += f64::from(cost);
        }
        split_tags(network, rng)?;
        Ok(total)
    }

    fn log_epoch(&self, network: &Network, epoch: usize, cost: f64) {
        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Debug
        };
        match network.tags() {
            Some(arena) => {
                log::log!(level, "epoch {}: cost {:.6}, {} tags", epoch, cost, arena.len())
            }
            None => log::log!(level, "epoch {}: cost {:.6}", epoch, cost),
        }
    }
}

fn validate_dataset(network: &Network, data: &[TrainingExample]) -> Result<(), BeeLineError> {
    if data.is_empty() {
        return Err(BeeLineError::ConfigurationError(
            "cannot train on an empty dataset".to_string(),
        ));
    }
    data.iter().try_for_each(|example| network.validate_example(example))
}

impl Network {
    /// Shorthand for building a [`Trainer`] from `config` and fitting `data`.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        data: &[TrainingExample],
        config: TrainConfig,
        rng: &mut R,
    ) -> Result<TrainingHistory, BeeLineError> {
        Trainer::new(config)?.fit(self, data, rng)
    }
}

#[cfg(test)]
#[path = "trainer_test.rs"]
mod tests;
