use serde::{Deserialize, Serialize};

use super::SourceRange;

/// A named declaration extracted from a source by the parser worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDeclaration {
	pub name: String,
	pub location: SourceRange,
}

impl SymbolDeclaration {
	#[must_use]
	pub fn new(name: impl Into<String>, location: SourceRange) -> Self {
		Self {
			name: name.into(),
			location,
		}
	}
}

/// Declarations of a single source, split by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolDeclarations {
	pub functions: Vec<SymbolDeclaration>,
	pub variables: Vec<SymbolDeclaration>,
}

impl SymbolDeclarations {
	#[must_use]
	pub fn of_kind(&self, kind: SymbolKind) -> &[SymbolDeclaration] {
		match kind {
			SymbolKind::Functions => &self.functions,
			SymbolKind::Variables => &self.variables,
		}
	}
}

/// Which declaration list a symbol search runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
	Functions,
	Variables,
}
