use std::fmt;

use crate::trainer::model::Model;

/// State of a training run at one reporting point.
pub struct Progress<'a, M: Model> {
    pub iteration: usize,
    pub cost: f64,
    pub gradient: &'a M::Gradient,
    pub model: &'a M,
}

/// Sink for the periodic training progress reports.
pub trait Report<M: Model> {
    fn publish(&mut self, progress: Progress<'_, M>);
}

/// Logs the progress via `tracing`.
pub struct TracingReporter;

impl<M> Report<M> for TracingReporter
where
    M: Model + fmt::Display,
    M::Gradient: fmt::Display,
{
    fn publish(&mut self, progress: Progress<'_, M>) {
        tracing::info!(
            iteration = progress.iteration,
            cost = progress.cost,
            gradient = %progress.gradient,
            model = %progress.model,
            "training",
        );
    }
}
