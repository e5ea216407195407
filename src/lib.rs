//! Quick-open search for debugger front-ends.
//!
//! The [`modal`] module classifies the typed query by its leading sigil,
//! produces the matching result list and turns keyboard input into host
//! callbacks. The [`worker`] module exposes parser operations to a
//! background worker through a name-keyed dispatch table.

pub mod app_dirs;
pub mod error;
pub mod format;
pub mod logging;
pub mod modal;
pub mod project;
pub mod query;
pub mod search;
pub mod shortcuts;
pub mod types;
pub mod worker;

pub use error::{KeyParseError, WorkerError};
pub use modal::{
	ActionLog, QuickOpenActions, QuickOpenContext, QuickOpenKey, QuickOpenModal, RecordedAction,
	ResultNavigator, ResultResolver, SearchLimits,
};
pub use project::ProjectSnapshot;
pub use query::{GotoTarget, ModeKind, SearchMode};
pub use types::{
	LineRange, Location, Position, ResultItem, Source, SourceRange, SymbolDeclaration,
	SymbolDeclarations, SymbolKind,
};
