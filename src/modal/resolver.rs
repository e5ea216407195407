//! Produces the result list for a classified query.

use super::QuickOpenContext;
use crate::format::{format_sources, format_symbols};
use crate::query::SearchMode;
use crate::search::fuzzy_filter;
use crate::shortcuts::shortcut_items;
use crate::types::{ResultItem, SymbolKind};

/// Caps applied to result lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
	/// Maximum number of fuzzy-filtered results.
	pub max_results: usize,
	/// Number of sources listed for an empty query when no tabs are open.
	pub top_sources: usize,
}

impl Default for SearchLimits {
	fn default() -> Self {
		Self {
			max_results: 1_000,
			top_sources: 100,
		}
	}
}

/// Turns a [`SearchMode`] into a result list.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResultResolver {
	limits: SearchLimits,
}

impl ResultResolver {
	#[must_use]
	pub const fn new(limits: SearchLimits) -> Self {
		Self { limits }
	}

	/// Compute the results for `query`, already classified as `mode`.
	///
	/// Returns `None` in goto-line mode, which never lists results.
	pub fn resolve(
		&self,
		mode: &SearchMode,
		query: &str,
		context: &QuickOpenContext<'_>,
	) -> Option<Vec<ResultItem>> {
		let results = match mode {
			SearchMode::GotoLine { .. } => return None,
			_ if query.is_empty() => self.top_sources(context),
			SearchMode::Functions { filter } => {
				self.search_symbols(context, SymbolKind::Functions, filter)
			}
			SearchMode::Variables { filter } => {
				self.search_symbols(context, SymbolKind::Variables, filter)
			}
			SearchMode::Shortcuts { filter } => self.filter_all(shortcut_items(), filter),
			SearchMode::GotoSource { base, .. } => self.search_sources(context, base),
			SearchMode::Sources { filter } => self.search_sources(context, filter),
		};
		tracing::trace!(mode = mode.kind().id(), count = results.len(), "resolved results");
		Some(results)
	}

	/// Sources open in tabs, or the head of the source list when none are.
	pub fn top_sources(&self, context: &QuickOpenContext<'_>) -> Vec<ResultItem> {
		let sources = format_sources(context.sources);
		if context.tabs.is_empty() {
			return sources.into_iter().take(self.limits.top_sources).collect();
		}

		sources
			.into_iter()
			.filter(|item| {
				item.url
					.as_ref()
					.is_some_and(|url| context.tabs.iter().any(|tab| tab == url))
			})
			.collect()
	}

	fn search_symbols(
		&self,
		context: &QuickOpenContext<'_>,
		kind: SymbolKind,
		filter: &str,
	) -> Vec<ResultItem> {
		let Some(symbols) = context.selected_symbols() else {
			return Vec::new();
		};
		self.filter_all(format_symbols(symbols.of_kind(kind)), filter)
	}

	fn search_sources(&self, context: &QuickOpenContext<'_>, filter: &str) -> Vec<ResultItem> {
		fuzzy_filter(&format_sources(context.sources), filter, self.limits.max_results)
	}

	/// Bare sigils list everything; anything else goes through the filter.
	fn filter_all(&self, items: Vec<ResultItem>, filter: &str) -> Vec<ResultItem> {
		if filter.is_empty() {
			return items;
		}
		fuzzy_filter(&items, filter, self.limits.max_results)
	}
}
