//! Fuzzy filtering of result candidates, backed by `frizbee`.

mod config;
mod matcher;

pub use config::config_for_dataset;
pub use matcher::{Dataset, fuzzy_filter, rank_matches};

/// Dataset size at which `frizbee`'s prefilter is switched on.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;
