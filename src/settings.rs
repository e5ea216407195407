use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use config::{Config, ConfigError, File};
use quick_open::{SearchLimits, app_dirs};
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	search: SearchSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	max_results: Option<usize>,
	top_sources: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	pub limits: SearchLimits,
	pub log_filter: String,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		eprintln!("Effective configuration:");
		eprintln!("  Max results: {}", self.limits.max_results);
		eprintln!("  Top sources: {}", self.limits.top_sources);
		eprintln!("  Log filter: {}", self.log_filter);
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw = load_raw(&cli.config, !cli.no_config)?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn load_raw(extra_files: &[PathBuf], include_defaults: bool) -> Result<RawConfig> {
	build_config(extra_files, include_defaults)?
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))
}

fn build_config(extra_files: &[PathBuf], include_defaults: bool) -> Result<Config> {
	let mut builder = Config::builder();

	if include_defaults {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in extra_files {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("QUICK_OPEN")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".quick-open.toml"));
		files.push(current_dir.join("quick-open.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(max_results) = cli.max_results {
			self.search.max_results = Some(max_results);
		}
		if let Some(top_sources) = cli.top_sources {
			self.search.top_sources = Some(top_sources);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let defaults = SearchLimits::default();
		let limits = SearchLimits {
			max_results: self.search.max_results.unwrap_or(defaults.max_results),
			top_sources: self.search.top_sources.unwrap_or(defaults.top_sources),
		};
		ensure!(limits.max_results > 0, "search.max_results must be greater than zero");
		ensure!(limits.top_sources > 0, "search.top_sources must be greater than zero");

		let log_filter = self
			.logging
			.filter
			.map(|filter| filter.trim().to_string())
			.filter(|filter| !filter.is_empty())
			.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

		Ok(ResolvedConfig { limits, log_filter })
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn config_file(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	#[test]
	fn defaults_apply_without_sources() {
		let resolved = RawConfig::default().resolve().expect("resolves");
		assert_eq!(resolved.limits, SearchLimits::default());
		assert_eq!(resolved.log_filter, "warn");
	}

	#[test]
	fn reads_search_and_logging_sections() {
		let file = config_file("[search]\nmax_results = 50\n\n[logging]\nfilter = \"debug\"\n");
		let resolved = load_raw(&[file.path().to_path_buf()], false)
			.and_then(RawConfig::resolve)
			.expect("resolves");
		assert_eq!(resolved.limits.max_results, 50);
		assert_eq!(resolved.limits.top_sources, 100);
		assert_eq!(resolved.log_filter, "debug");
	}

	#[test]
	fn rejects_zero_limits() {
		let file = config_file("[search]\ntop_sources = 0\n");
		let err = load_raw(&[file.path().to_path_buf()], false)
			.and_then(RawConfig::resolve)
			.unwrap_err();
		assert!(err.to_string().contains("top_sources"));
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let missing = PathBuf::from("/nonexistent/quick-open/config.toml");
		assert!(load_raw(&[missing], false).is_err());
	}
}
