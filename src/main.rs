use crate::opts::Subcommand;
use crate::prelude::*;
use crate::secrets::Secrets;

mod helpers;
mod opts;
mod prelude;
mod secrets;
mod trainer;

fn main() -> Result {
    let opts = opts::parse();
    helpers::tracing::init()?;
    let secrets = Secrets::from_env();
    match opts.subcommand {
        Subcommand::Fit(opts) => trainer::run(opts),
        Subcommand::CheckSecret(opts) => secrets::check(&secrets, &opts),
    }
}
