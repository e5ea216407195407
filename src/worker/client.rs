use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde_json::Value;

use super::{DispatchTable, Operation, WorkerRequest, WorkerResponse, handle_request};
use crate::error::WorkerError;

struct Envelope {
	request: WorkerRequest,
	reply: Sender<WorkerResponse>,
}

/// Handle to a dispatch table running on its own thread.
///
/// Requests travel over a channel and are answered in arrival order. Dropping
/// the client stops the thread once pending requests are answered.
pub struct WorkerClient {
	sender: Option<Sender<Envelope>>,
	thread: Option<JoinHandle<()>>,
	next_id: u64,
}

impl WorkerClient {
	/// Move `table` onto a new worker thread.
	pub fn spawn(table: DispatchTable) -> std::io::Result<Self> {
		let (sender, receiver) = mpsc::channel::<Envelope>();
		let thread = thread::Builder::new()
			.name("parser-worker".into())
			.spawn(move || run(&table, &receiver))?;
		Ok(Self {
			sender: Some(sender),
			thread: Some(thread),
			next_id: 0,
		})
	}

	/// Call a registered operation and wait for its reply.
	pub fn call(&mut self, operation: Operation, args: Vec<Value>) -> Result<Value, WorkerError> {
		self.call_named(operation.name(), args)
	}

	/// Call an operation by wire name and wait for its reply.
	pub fn call_named(&mut self, method: &str, args: Vec<Value>) -> Result<Value, WorkerError> {
		let id = self.next_id;
		self.next_id += 1;

		let sender = self.sender.as_ref().ok_or(WorkerError::Disconnected)?;
		let (reply, response) = mpsc::channel();
		sender
			.send(Envelope {
				request: WorkerRequest::new(id, method, args),
				reply,
			})
			.map_err(|_| WorkerError::Disconnected)?;

		response
			.recv()
			.map_err(|_| WorkerError::Disconnected)?
			.into_result()
	}
}

impl Drop for WorkerClient {
	fn drop(&mut self) {
		self.sender.take();
		if let Some(thread) = self.thread.take()
			&& thread.join().is_err()
		{
			tracing::warn!("parser worker thread panicked");
		}
	}
}

fn run(table: &DispatchTable, receiver: &Receiver<Envelope>) {
	while let Ok(Envelope { request, reply }) = receiver.recv() {
		let response = handle_request(table, request);
		if reply.send(response).is_err() {
			tracing::debug!("worker caller hung up before the reply");
		}
	}
}
