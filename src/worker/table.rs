use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

/// A registered operation. Arguments and return value are opaque JSON.
pub type Handler = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Name to handler registry consulted by the worker adapter.
#[derive(Clone, Default)]
pub struct DispatchTable {
	handlers: HashMap<String, Handler>,
}

impl fmt::Debug for DispatchTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<_> = self.names().collect();
		names.sort();
		f.debug_struct("DispatchTable").field("operations", &names).finish()
	}
}

impl DispatchTable {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `handler` under `name`, replacing any previous handler.
	pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		self.handlers.insert(name.into(), Arc::new(handler));
		self
	}

	/// Builder form of [`register`](Self::register).
	#[must_use]
	pub fn with<F>(mut self, name: impl Into<String>, handler: F) -> Self
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		self.register(name, handler);
		self
	}

	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Handler> {
		self.handlers.get(name)
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.handlers.contains_key(name)
	}

	/// Registered names in no particular order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.handlers.keys().map(String::as_str)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.handlers.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.handlers.is_empty()
	}
}
