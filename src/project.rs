//! JSON snapshot of the host state the modal searches over.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::modal::QuickOpenContext;
use crate::types::{Source, SymbolDeclarations};

/// Sources, their declarations, the open tabs and the selected source.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSnapshot {
	pub sources: Vec<Source>,
	pub symbols: HashMap<String, SymbolDeclarations>,
	pub tabs: Vec<String>,
	pub selected_source: Option<String>,
}

impl ProjectSnapshot {
	/// Read and validate a snapshot file.
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("failed to read project snapshot {}", path.display()))?;
		let snapshot: Self = serde_json::from_str(&text)
			.with_context(|| format!("failed to parse project snapshot {}", path.display()))?;
		snapshot.validate()?;
		Ok(snapshot)
	}

	fn validate(&self) -> Result<()> {
		if let Some(id) = &self.selected_source
			&& self.source(id).is_none()
		{
			bail!("selected source '{id}' is not in the source list");
		}
		Ok(())
	}

	#[must_use]
	pub fn source(&self, id: &str) -> Option<&Source> {
		self.sources.iter().find(|source| source.id == id)
	}

	/// Borrow the snapshot as modal context.
	#[must_use]
	pub fn context(&self) -> QuickOpenContext<'_> {
		QuickOpenContext {
			sources: &self.sources,
			symbols: &self.symbols,
			tabs: &self.tabs,
			selected_source: self.selected_source.as_deref().and_then(|id| self.source(id)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	fn write_snapshot(json: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(json.as_bytes()).unwrap();
		file
	}

	#[test]
	fn loads_camel_case_snapshot() {
		let file = write_snapshot(
			r#"{
				"sources": [{"id": "s1", "url": "http://localhost/app.js"}],
				"symbols": {"s1": {"functions": [{"name": "main", "location": {"start": {"line": 1, "column": 0}, "end": {"line": 4, "column": 1}}}]}},
				"tabs": ["http://localhost/app.js"],
				"selectedSource": "s1"
			}"#,
		);
		let snapshot = ProjectSnapshot::load(file.path()).unwrap();
		let context = snapshot.context();
		assert_eq!(context.selected_source.map(|s| s.id.as_str()), Some("s1"));
		let symbols = context.selected_symbols().unwrap();
		assert_eq!(symbols.functions[0].name, "main");
		assert!(symbols.variables.is_empty());
	}

	#[test]
	fn rejects_unknown_selected_source() {
		let file = write_snapshot(r#"{"sources": [], "selectedSource": "missing"}"#);
		let err = ProjectSnapshot::load(file.path()).unwrap_err();
		assert!(err.to_string().contains("missing"));
	}

	#[test]
	fn missing_sections_default_to_empty() {
		let file = write_snapshot("{}");
		let snapshot = ProjectSnapshot::load(file.path()).unwrap();
		assert!(snapshot.sources.is_empty());
		assert!(snapshot.context().selected_source.is_none());
	}
}
