/// Caps the recorded history to bound memory usage on very long runs.
pub const RECORD_LIMIT: usize = 100_000;

/// Per-iteration record of cost values and parameter snapshots.
///
/// Append-only; iterations past [`RECORD_LIMIT`] are not recorded.
pub struct TrainingHistory<S> {
    costs: Vec<f64>,
    snapshots: Vec<S>,
}

impl<S> TrainingHistory<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            costs: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn record(&mut self, cost: f64, snapshot: S) {
        if !self.is_full() {
            self.costs.push(cost);
            self.snapshots.push(snapshot);
        }
    }

    #[must_use]
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    #[must_use]
    pub fn snapshots(&self) -> &[S] {
        &self.snapshots
    }

    #[must_use]
    pub fn last_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.costs.len() >= RECORD_LIMIT
    }
}

impl<S> Default for TrainingHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_caps_ok() {
        let mut history = TrainingHistory::new();
        for i in 0..=RECORD_LIMIT {
            history.record(i as f64, ());
        }
        assert_eq!(history.len(), RECORD_LIMIT);
        assert!(history.is_full());
        assert_eq!(history.last_cost(), Some((RECORD_LIMIT - 1) as f64));
    }

    #[test]
    fn record_ok() {
        let mut history = TrainingHistory::new();
        history.record(1.5, [0.5, 0.25]);
        assert_eq!(history.costs(), &[1.5]);
        assert_eq!(history.snapshots(), &[[0.5, 0.25]]);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }
}
