//! Tracing subscriber setup for the binary.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `default_filter`.
pub fn initialize(default_filter: &str) -> Result<()> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(default_filter)
			.map_err(|err| anyhow!("invalid log filter '{default_filter}': {err}"))?,
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
