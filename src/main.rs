mod cli;
mod settings;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use cli::{Command, OutputFormat, ReplayArgs, SearchArgs, parse_cli, print_actions, print_json, print_plain};
use quick_open::worker::{SourceStore, serve, source_store_table};
use quick_open::{ActionLog, ProjectSnapshot, QuickOpenModal, SearchLimits, logging};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;
	logging::initialize(&resolved.log_filter)?;

	if cli.print_config {
		resolved.print_summary();
	}

	match cli.command {
		Command::Search(args) => run_search(args, &resolved),
		Command::Replay(args) => run_replay(args, resolved.limits),
		Command::Worker => run_worker(),
	}
}

/// Serve the source store over stdin/stdout until stdin closes.
fn run_worker() -> Result<()> {
	let table = source_store_table(Arc::new(SourceStore::default()));
	tracing::info!(?table, "worker listening on stdin");
	serve(&table, io::stdin().lock(), io::stdout().lock())
}

/// Open the modal on the query and print the results it lists.
fn run_search(args: SearchArgs, settings: &ResolvedConfig) -> Result<()> {
	let project = ProjectSnapshot::load(&args.project)?;
	let context = project.context();

	let mut modal = QuickOpenModal::new(settings.limits);
	let mut actions = ActionLog::default();
	modal.open(&context, &mut actions, &args.query);
	tracing::debug!(mode = modal.mode().kind().id(), "search finished");

	match args.output {
		OutputFormat::Plain => print_plain(modal.results()),
		OutputFormat::Json => print_json(modal.results())?,
	}

	Ok(())
}

/// Drive the modal with a key sequence and print every host callback.
fn run_replay(args: ReplayArgs, limits: SearchLimits) -> Result<()> {
	let project = ProjectSnapshot::load(&args.project)?;
	let context = project.context();

	let mut modal = QuickOpenModal::new(limits);
	let mut actions = ActionLog::default();
	modal.open(&context, &mut actions, &args.query);
	for key in args.keys {
		if !modal.is_open() {
			tracing::warn!(?key, "modal closed; ignoring remaining keys");
			break;
		}
		modal.handle_key(&context, &mut actions, key);
	}

	print_actions(actions.actions());
	Ok(())
}
