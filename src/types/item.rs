use serde::Serialize;

use super::SourceRange;

/// A display candidate in the quick-open result list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultItem {
	pub id: String,
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub subtitle: Option<String>,
	/// Text scored by the fuzzy filter.
	pub value: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location: Option<SourceRange>,
}
