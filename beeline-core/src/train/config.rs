use crate::error::BeeLineError;

/// Hyperparameters of one training run.
///
/// `alpha` and `eta` belong to the caller; the loop only applies them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    /// Training stops once an epoch's total cost falls below this.
    pub target_cost: f64,
    /// Momentum retention, in `[0, 1)`.
    pub alpha: f32,
    /// Learning rate.
    pub eta: f32,
    /// Gradient norm above which the update is scaled down.
    pub clip_threshold: f32,
    /// Log every epoch at `info` instead of `debug`.
    pub verbose: bool,
    /// Upper bound on epochs. `None` trains until the target is reached.
    pub max_epochs: Option<usize>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            target_cost: 0.001,
            alpha: 0.4,
            eta: 0.6,
            clip_threshold: 1.0,
            verbose: false,
            max_epochs: Some(100_000),
        }
    }
}

impl TrainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_cost(mut self, target_cost: f64) -> Self {
        self.target_cost = target_cost;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn eta(mut self, eta: f32) -> Self {
        self.eta = eta;
        self
    }

    pub fn clip_threshold(mut self, clip_threshold: f32) -> Self {
        self.clip_threshold = clip_threshold;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn max_epochs(mut self, max_epochs: Option<usize>) -> Self {
        self.max_epochs = max_epochs;
        self
    }

    /// # Errors
    /// `ConfigurationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), BeeLineError> {
        let fail = |msg: String| Err(BeeLineError::ConfigurationError(msg));
        if !(self.target_cost >= 0.0) {
            return fail(format!("target cost must be non-negative, got {}", self.target_cost));
        }
        if !(0.0..1.0).contains(&self.alpha) {
            return fail(format!("momentum alpha must lie in [0, 1), got {}", self.alpha));
        }
        if !(self.eta > 0.0 && self.eta.is_finite()) {
            return fail(format!("learning rate must be positive, got {}", self.eta));
        }
        if !(self.clip_threshold > 0.0) {
            return fail(format!(
                "clip threshold must be positive, got {}",
                self.clip_threshold
            ));
        }
        if self.max_epochs == Some(0) {
            return fail("max_epochs must be at least 1".to_string());
        }
        Ok(())
    }
}
