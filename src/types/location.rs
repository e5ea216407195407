use serde::{Deserialize, Serialize};

/// A line/column pair inside a source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
	pub line: u32,
	#[serde(default)]
	pub column: u32,
}

impl Position {
	#[must_use]
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// Span covered by a declaration, as reported by the parser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
	pub start: Position,
	pub end: Position,
}

impl SourceRange {
	#[must_use]
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}
}

/// Navigation target handed to the host when a result is confirmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
	pub source_id: String,
	pub line: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub column: Option<u32>,
}

impl Location {
	#[must_use]
	pub fn new(source_id: impl Into<String>, line: u32, column: Option<u32>) -> Self {
		Self {
			source_id: source_id.into(),
			line,
			column,
		}
	}
}

/// Inclusive range of lines to highlight while previewing a function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
	pub source_id: String,
	pub start: u32,
	pub end: u32,
}
