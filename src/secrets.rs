//! Secret lookup backed by the process environment.

use std::env;

use crate::opts::CheckSecretOpts;
use crate::prelude::*;

/// Credentials snapshotted from the process environment.
///
/// Constructed once at startup, queried on demand, never mutated.
pub struct Secrets {
    values: AHashMap<String, String>,
}

impl Secrets {
    #[must_use]
    pub fn from_env() -> Self {
        env::vars().collect()
    }

    /// Looks up a named credential, absent if unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Secrets {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

pub fn check(secrets: &Secrets, opts: &CheckSecretOpts) -> Result {
    match secrets.get(&opts.name) {
        Some(_) => {
            tracing::info!(name = opts.name.as_str(), "the secret is configured");
            Ok(())
        }
        None => Err(anyhow!("`{}` is not configured", opts.name)),
    }
}
