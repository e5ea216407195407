//! Classification of the raw query text into a search mode.

mod goto;
mod mode;

pub use goto::GotoTarget;
pub use mode::{ModeKind, SearchMode};

pub const FUNCTIONS_SIGIL: char = '@';
pub const VARIABLES_SIGIL: char = '#';
pub const GOTO_LINE_SIGIL: char = ':';
pub const SHORTCUTS_SIGIL: char = '?';
