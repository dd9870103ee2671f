//! Process bootstrap helpers.

mod tracing_init;

pub use tracing_init::{init_tracing, verbosity_filter};
