pub mod tracing;

pub use self::tracing::{format_duration, format_elapsed};
