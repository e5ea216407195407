use serde::{Deserialize, Serialize};

/// A script known to the debugger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
	pub id: String,
	#[serde(default)]
	pub url: String,
}

impl Source {
	#[must_use]
	pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			url: url.into(),
		}
	}

	/// Path portion of the URL with the scheme and host removed.
	///
	/// `http://localhost:8000/examples/app.js` becomes `examples/app.js`.
	/// URLs without a scheme only lose their leading slashes.
	#[must_use]
	pub fn path(&self) -> &str {
		let without_scheme = match self.url.split_once("://") {
			Some((_, rest)) => rest.split_once('/').map_or("", |(_, path)| path),
			None => self.url.as_str(),
		};
		let path = without_scheme.trim_start_matches('/');
		if path.is_empty() { self.url.as_str() } else { path }
	}

	/// Final path segment, used as the display title.
	#[must_use]
	pub fn file_name(&self) -> &str {
		let path = self.path().trim_end_matches('/');
		match path.rsplit_once('/') {
			Some((_, name)) if !name.is_empty() => name,
			_ => path,
		}
	}
}
