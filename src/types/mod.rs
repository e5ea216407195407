//! Records shared between the host, the quick-open modal and the result list.

mod item;
mod location;
mod source;
mod symbol;

pub use item::ResultItem;
pub use location::{LineRange, Location, Position, SourceRange};
pub use source::Source;
pub use symbol::{SymbolDeclaration, SymbolDeclarations, SymbolKind};
