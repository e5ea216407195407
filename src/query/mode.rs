use super::{FUNCTIONS_SIGIL, GOTO_LINE_SIGIL, GotoTarget, SHORTCUTS_SIGIL, VARIABLES_SIGIL};
use crate::types::SymbolKind;

/// The active search, classified from the query text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMode {
	/// Fuzzy search over the source list.
	Sources { filter: String },
	/// Source search followed by a `:line[:column]` suffix.
	GotoSource {
		base: String,
		target: Option<GotoTarget>,
	},
	/// `@` search over the selected source's functions.
	Functions { filter: String },
	/// `#` search over the selected source's variables.
	Variables { filter: String },
	/// `:` jump inside the selected source.
	GotoLine { target: Option<GotoTarget> },
	/// `?` search over the mode shortcuts.
	Shortcuts { filter: String },
}

impl Default for SearchMode {
	fn default() -> Self {
		Self::Sources {
			filter: String::new(),
		}
	}
}

impl SearchMode {
	/// Classify a query by its leading sigil.
	///
	/// Without a sigil, a `:` anywhere after the first character switches to
	/// [`SearchMode::GotoSource`], splitting on the first `:`.
	#[must_use]
	pub fn parse(query: &str) -> Self {
		let mut chars = query.chars();
		let Some(first) = chars.next() else {
			return Self::default();
		};
		let rest = chars.as_str();

		match first {
			FUNCTIONS_SIGIL => Self::Functions {
				filter: rest.to_string(),
			},
			VARIABLES_SIGIL => Self::Variables {
				filter: rest.to_string(),
			},
			GOTO_LINE_SIGIL => Self::GotoLine {
				target: GotoTarget::parse(rest),
			},
			SHORTCUTS_SIGIL => Self::Shortcuts {
				filter: rest.to_string(),
			},
			_ => match query.split_once(':') {
				Some((base, suffix)) => Self::GotoSource {
					base: base.to_string(),
					target: GotoTarget::parse(suffix),
				},
				None => Self::Sources {
					filter: query.to_string(),
				},
			},
		}
	}

	/// Fieldless discriminant of this mode.
	#[must_use]
	pub const fn kind(&self) -> ModeKind {
		match self {
			Self::Sources { .. } => ModeKind::Sources,
			Self::GotoSource { .. } => ModeKind::GotoSource,
			Self::Functions { .. } => ModeKind::Functions,
			Self::Variables { .. } => ModeKind::Variables,
			Self::GotoLine { .. } => ModeKind::GotoLine,
			Self::Shortcuts { .. } => ModeKind::Shortcuts,
		}
	}

	/// Declaration list searched by this mode, if it is a symbol search.
	#[must_use]
	pub const fn symbol_kind(&self) -> Option<SymbolKind> {
		match self {
			Self::Functions { .. } => Some(SymbolKind::Functions),
			Self::Variables { .. } => Some(SymbolKind::Variables),
			_ => None,
		}
	}
}

/// Identifies a [`SearchMode`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
	Sources,
	GotoSource,
	Functions,
	Variables,
	GotoLine,
	Shortcuts,
}

impl ModeKind {
	/// Stable string identifier, used in logs and CLI output.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			ModeKind::Sources => "sources",
			ModeKind::GotoSource => "gotoSource",
			ModeKind::Functions => "functions",
			ModeKind::Variables => "variables",
			ModeKind::GotoLine => "goto",
			ModeKind::Shortcuts => "shortcuts",
		}
	}
}
