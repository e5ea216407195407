use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde_json::Value;

use super::{DispatchTable, WorkerRequest, WorkerResponse, handle_request};

/// Serve newline-delimited JSON requests from `reader` until it is exhausted,
/// writing one response line per request to `writer`.
///
/// Blank lines are skipped. Frames that fail to decode get an error reply
/// with a `null` id instead of ending the loop.
pub fn serve<R, W>(table: &DispatchTable, reader: R, mut writer: W) -> Result<()>
where
	R: BufRead,
	W: Write,
{
	for line in reader.lines() {
		let line = line.context("failed to read worker request")?;
		if line.trim().is_empty() {
			continue;
		}

		let response = match serde_json::from_str::<WorkerRequest>(&line) {
			Ok(request) => handle_request(table, request),
			Err(err) => {
				tracing::warn!(error = %err, "discarding malformed worker request");
				WorkerResponse::failure(Value::Null, format!("invalid request: {err}"))
			}
		};

		writeln!(writer, "{}", serde_json::to_string(&response)?)
			.context("failed to write worker response")?;
		writer.flush().context("failed to flush worker response")?;
	}

	Ok(())
}
