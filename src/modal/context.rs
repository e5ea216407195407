use std::collections::HashMap;

use crate::types::{Source, SymbolDeclarations};

/// Read-only host data the modal searches over.
#[derive(Clone, Copy, Debug)]
pub struct QuickOpenContext<'a> {
	/// Every source known to the debugger, in host order.
	pub sources: &'a [Source],
	/// Declarations per source id.
	pub symbols: &'a HashMap<String, SymbolDeclarations>,
	/// URLs of the sources open in editor tabs.
	pub tabs: &'a [String],
	/// Source currently shown in the editor.
	pub selected_source: Option<&'a Source>,
}

impl<'a> QuickOpenContext<'a> {
	/// Declarations of the selected source, if it has been parsed.
	#[must_use]
	pub fn selected_symbols(&self) -> Option<&'a SymbolDeclarations> {
		let source = self.selected_source?;
		self.symbols.get(&source.id)
	}
}
