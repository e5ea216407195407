//! Message-based dispatch of parser operations to a background worker.
//!
//! The [`DispatchTable`] maps operation names to handlers and carries no
//! logic of its own. [`handle_request`] frames a single call, [`serve`]
//! drives a JSON-lines stream, and [`WorkerClient`] runs a table on a
//! dedicated thread behind a channel. [`source_store_table`] backs the
//! `worker` command with an in-memory [`SourceStore`].

mod client;
mod operation;
mod parser;
mod protocol;
mod server;
mod sources;
mod table;
#[cfg(test)]
mod tests;

pub use client::WorkerClient;
pub use operation::Operation;
pub use parser::{ParserWorker, parser_dispatch_table};
pub use protocol::{ReplyError, WorkerRequest, WorkerResponse, handle_request};
pub use server::serve;
pub use sources::{SourceStore, source_store_table};
pub use table::{DispatchTable, Handler};
