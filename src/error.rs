use thiserror::Error;

/// A key name that does not map to a [`QuickOpenKey`](crate::modal::QuickOpenKey).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown key '{name}' (expected up, down, enter, tab or esc)")]
pub struct KeyParseError {
	pub name: String,
}

/// Failures surfaced by the worker adapter and client.
#[derive(Debug, Error)]
pub enum WorkerError {
	/// The request named an operation the dispatch table does not register.
	#[error("unknown worker operation '{0}'")]
	UnknownOperation(String),

	/// The handler failed; the message is passed through untouched.
	#[error("{0}")]
	Handler(String),

	/// A frame could not be encoded or decoded.
	#[error("malformed worker message: {0}")]
	Codec(#[from] serde_json::Error),

	/// The worker thread stopped before replying.
	#[error("worker thread is no longer running")]
	Disconnected,
}
