/// Per-epoch record of a training run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    /// `costs[i]` is the total cost of epoch `i`, summed over its examples.
    pub costs: Vec<f64>,
    /// Whether the run stopped because the cost fell below the target.
    pub converged: bool,
}

impl TrainingHistory {
    pub fn epochs(&self) -> usize {
        self.costs.len()
    }

    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}
