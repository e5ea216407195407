use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};
use quick_open::QuickOpenKey;

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `quick-open` binary.
#[derive(Parser, Debug)]
#[command(
	name = "quick-open",
	version,
	long_version = long_version(),
	about = "Sigil-driven quick-open search over a debugger project snapshot",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "QUICK_OPEN_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "max-results",
		value_name = "COUNT",
		global = true,
		help = "Cap for fuzzy-filtered result lists (default: 1000)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		long = "top-sources",
		value_name = "COUNT",
		global = true,
		help = "Sources listed for an empty query without open tabs (default: 100)"
	)]
	pub(crate) top_sources: Option<usize>,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the effective configuration to stderr before running"
	)]
	pub(crate) print_config: bool,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Print the results a query produces.
	Search(SearchArgs),
	/// Open the modal, press keys, and print the host callbacks it fires.
	Replay(ReplayArgs),
	/// Answer JSON-lines worker requests on stdin, one reply per line on stdout.
	Worker,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Project snapshot (JSON) with sources, symbols, tabs and the selected source"
	)]
	pub(crate) project: PathBuf,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how results are printed"
	)]
	pub(crate) output: OutputFormat,
	#[arg(value_name = "QUERY", default_value = "", help = "Query text, optionally starting with @ # : or ?")]
	pub(crate) query: String,
}

#[derive(Args, Debug)]
pub(crate) struct ReplayArgs {
	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Project snapshot (JSON) with sources, symbols, tabs and the selected source"
	)]
	pub(crate) project: PathBuf,
	#[arg(
		short,
		long,
		value_name = "QUERY",
		default_value = "",
		help = "Query the modal opens with (default: empty)"
	)]
	pub(crate) query: String,
	#[arg(value_name = "KEY", help = "Keys to press in order: up, down, enter, tab, esc")]
	pub(crate) keys: Vec<QuickOpenKey>,
}
