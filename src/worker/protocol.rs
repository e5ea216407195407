//! Request/response framing around the dispatch table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::DispatchTable;
use crate::error::WorkerError;

/// Inbound message: run `method` with `args`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerRequest {
	#[serde(default)]
	pub id: Value,
	pub method: String,
	#[serde(default)]
	pub args: Vec<Value>,
}

impl WorkerRequest {
	#[must_use]
	pub fn new(id: impl Into<Value>, method: impl Into<String>, args: Vec<Value>) -> Self {
		Self {
			id: id.into(),
			method: method.into(),
			args,
		}
	}
}

/// Outbound message carrying either the handler's return value or its failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkerResponse {
	pub id: Value,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<ReplyError>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyError {
	pub message: String,
	/// Set when no handler is registered under the requested name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub unknown_operation: Option<String>,
}

impl WorkerResponse {
	#[must_use]
	pub fn success(id: Value, result: Value) -> Self {
		Self {
			id,
			result: Some(result),
			error: None,
		}
	}

	#[must_use]
	pub fn failure(id: Value, message: impl Into<String>) -> Self {
		Self {
			id,
			result: None,
			error: Some(ReplyError {
				message: message.into(),
				unknown_operation: None,
			}),
		}
	}

	/// Reply for a request naming an unregistered operation.
	#[must_use]
	pub fn unknown_operation(id: Value, method: String) -> Self {
		let message = WorkerError::UnknownOperation(method.clone()).to_string();
		Self {
			id,
			result: None,
			error: Some(ReplyError {
				message,
				unknown_operation: Some(method),
			}),
		}
	}

	/// Unwrap the reply. A reply with neither field carries `null`.
	pub fn into_result(self) -> Result<Value, WorkerError> {
		match self.error {
			Some(ReplyError {
				unknown_operation: Some(method),
				..
			}) => Err(WorkerError::UnknownOperation(method)),
			Some(error) => Err(WorkerError::Handler(error.message)),
			None => Ok(self.result.unwrap_or(Value::Null)),
		}
	}
}

/// Run one request against `table`.
///
/// Handler failures are forwarded as the reply's error message with their
/// context chain intact; the table itself never inspects them.
pub fn handle_request(table: &DispatchTable, request: WorkerRequest) -> WorkerResponse {
	let WorkerRequest { id, method, args } = request;
	let Some(handler) = table.get(&method) else {
		tracing::warn!(method = %method, "request for unregistered worker operation");
		return WorkerResponse::unknown_operation(id, method);
	};

	match handler(args.as_slice()) {
		Ok(result) => WorkerResponse::success(id, result),
		Err(err) => {
			tracing::debug!(method = %method, error = %err, "worker operation failed");
			WorkerResponse::failure(id, format!("{err:#}"))
		}
	}
}
