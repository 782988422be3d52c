pub use std::time::{Duration as StdDuration, Instant};

pub use anyhow::anyhow;

pub type AHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
