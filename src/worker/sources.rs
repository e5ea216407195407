//! In-memory source registry served by the `worker` command.
//!
//! Only the source-text operations are registered. Analysis operations stay
//! unregistered and are answered as unknown by the adapter.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{DispatchTable, Operation};

#[derive(Debug, Deserialize)]
struct SourceText {
	id: String,
	#[serde(default)]
	text: String,
}

/// Source text keyed by source id.
#[derive(Debug, Default)]
pub struct SourceStore {
	sources: Mutex<HashMap<String, String>>,
}

impl SourceStore {
	fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
		self.sources.lock().map_err(|_| anyhow!("source store poisoned"))
	}

	/// `setSource({id, text})`
	pub fn set_source(&self, args: &[Value]) -> Result<Value> {
		let source: SourceText = serde_json::from_value(first_arg(args)?.clone())
			.context("expected a source object with an id")?;
		tracing::debug!(source = %source.id, bytes = source.text.len(), "source registered");
		self.lock()?.insert(source.id, source.text);
		Ok(Value::Null)
	}

	/// `hasSource(id)`
	pub fn has_source(&self, args: &[Value]) -> Result<Value> {
		let id = source_id(args)?;
		Ok(Value::Bool(self.lock()?.contains_key(id)))
	}

	pub fn clear_sources(&self, _args: &[Value]) -> Result<Value> {
		self.lock()?.clear();
		Ok(Value::Null)
	}

	/// `getEmptyLines(id)`: 1-based numbers of whitespace-only lines.
	pub fn get_empty_lines(&self, args: &[Value]) -> Result<Value> {
		let id = source_id(args)?;
		let sources = self.lock()?;
		let text = sources
			.get(id)
			.with_context(|| format!("source {id} has not been set"))?;
		let lines: Vec<usize> = text
			.lines()
			.enumerate()
			.filter(|(_, line)| line.trim().is_empty())
			.map(|(index, _)| index + 1)
			.collect();
		Ok(json!(lines))
	}
}

fn first_arg(args: &[Value]) -> Result<&Value> {
	args.first().context("missing first argument")
}

fn source_id(args: &[Value]) -> Result<&str> {
	first_arg(args)?.as_str().context("expected a source id")
}

fn cleared(_args: &[Value]) -> Result<Value> {
	Ok(Value::Null)
}

/// Register `store`'s operations. The cache-clearing operations have nothing
/// to clear and answer `null`.
pub fn source_store_table(store: Arc<SourceStore>) -> DispatchTable {
	let mut table = DispatchTable::new();
	let bound: [(Operation, fn(&SourceStore, &[Value]) -> Result<Value>); 4] = [
		(Operation::SetSource, SourceStore::set_source),
		(Operation::HasSource, SourceStore::has_source),
		(Operation::ClearSources, SourceStore::clear_sources),
		(Operation::GetEmptyLines, SourceStore::get_empty_lines),
	];
	for (operation, method) in bound {
		let store = Arc::clone(&store);
		table.register(operation.name(), move |args: &[Value]| method(&store, args));
	}
	for operation in [Operation::ClearSymbols, Operation::ClearScopes, Operation::ClearAsts] {
		table.register(operation.name(), cleared);
	}
	table
}
