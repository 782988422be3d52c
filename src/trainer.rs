//! Linear regression by batch gradient descent.

pub mod dataset;
pub mod history;
pub mod loss;
pub mod model;
pub mod report;
pub mod vector;

use std::fmt;

use itertools::Itertools;

use crate::helpers::format_elapsed;
use crate::opts::FitOpts;
use crate::prelude::*;
use crate::trainer::dataset::{Dataset, RawDataset, TypedDataset};
use crate::trainer::history::TrainingHistory;
use crate::trainer::model::{Model, ScalarModel, VectorModel};
use crate::trainer::report::{Progress, Report, TracingReporter};

const PREVIEW_LIMIT: usize = 5;

pub fn run(opts: FitOpts) -> Result {
    let raw = RawDataset::load(&opts.dataset_path)?;
    match raw.into_typed()? {
        TypedDataset::Scalar(dataset) => {
            let model = ScalarModel::new(opts.initial_weight, opts.initial_bias);
            fit(&dataset, model, &opts)
        }
        TypedDataset::Vector(dataset) => {
            let model =
                VectorModel::uniform(dataset.n_features(), opts.initial_weight, opts.initial_bias);
            fit(&dataset, model, &opts)
        }
    }
}

fn fit<M>(dataset: &Dataset<M::Input>, model: M, opts: &FitOpts) -> Result
where
    M: Model + fmt::Display,
    M::Gradient: fmt::Display,
{
    tracing::info!(
        n_examples = dataset.len(),
        learning_rate = opts.learning_rate,
        n_iterations = opts.n_iterations,
        "fitting…",
    );
    let start_instant = Instant::now();
    let outcome = gradient_descent(
        dataset,
        model,
        opts.learning_rate,
        opts.n_iterations,
        &mut TracingReporter,
    );
    if let Some(cost) = outcome.history.last_cost() {
        tracing::info!(
            cost,
            model = %outcome.model,
            elapsed = format_elapsed(start_instant).as_str(),
            "done",
        );
    }
    let predictions = outcome.model.predict_all(dataset);
    for (index, ((_, target), prediction)) in
        dataset.iter().zip_eq(predictions).enumerate().take(PREVIEW_LIMIT)
    {
        tracing::debug!(index, target, prediction, "fitted");
    }
    Ok(())
}

/// Outcome of a gradient descent run.
pub struct Fit<M: Model> {
    pub model: M,
    pub history: TrainingHistory<M::Snapshot>,
}

/// Runs batch gradient descent for a fixed number of iterations.
///
/// The weights and the bias are updated simultaneously: both updates are
/// applied from one gradient taken at the pre-update parameters. There is
/// no convergence check and no divergence check; a too-large learning rate
/// propagates `NaN`/`Inf` silently.
pub fn gradient_descent<M, R>(
    dataset: &Dataset<M::Input>,
    mut model: M,
    learning_rate: f64,
    n_iterations: usize,
    reporter: &mut R,
) -> Fit<M>
where
    M: Model,
    R: Report<M>,
{
    let mut history = TrainingHistory::new();
    let report_interval = n_iterations.div_ceil(10).max(1);

    for iteration in 0..n_iterations {
        let gradient = model.gradient(dataset);
        model.step(&gradient, learning_rate);
        if !history.is_full() {
            history.record(model.cost(dataset), model.snapshot());
        }
        if iteration % report_interval == 0 {
            let cost = history
                .last_cost()
                .expect("the history is never empty at reporting time");
            reporter.publish(Progress {
                iteration,
                cost,
                gradient: &gradient,
                model: &model,
            });
        }
    }

    Fit { model, history }
}
