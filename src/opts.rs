//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod parsers;

#[derive(Parser)]
#[command(version, about)]
pub struct Opts {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

pub fn parse() -> Opts {
    Opts::parse()
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Fit(FitOpts),
    CheckSecret(CheckSecretOpts),
}

/// Fits a linear model to a dataset
#[derive(Args)]
pub struct FitOpts {
    /// Path to the dataset file
    #[arg(value_name = "DATASET")]
    pub dataset_path: PathBuf,

    /// Gradient descent step size
    #[arg(long, default_value = "0.01", value_parser = parsers::learning_rate)]
    pub learning_rate: f64,

    /// Number of gradient descent iterations
    #[arg(
        short = 'n',
        long,
        default_value = "1000",
        value_parser = parsers::non_zero_usize,
    )]
    pub n_iterations: usize,

    /// Initial value for each weight component
    #[arg(long, default_value = "0")]
    pub initial_weight: f64,

    /// Initial bias
    #[arg(long, default_value = "0")]
    pub initial_bias: f64,
}

/// Verifies that a secret is configured in the environment
#[derive(Args)]
pub struct CheckSecretOpts {
    /// Name of the environment variable
    pub name: String,
}
