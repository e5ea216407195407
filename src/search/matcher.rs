use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use frizbee::match_list;

use super::config_for_dataset;
use crate::types::ResultItem;

/// Represents a collection that can be searched via fuzzy matching.
pub trait Dataset {
	/// Total number of entries in the dataset.
	fn len(&self) -> usize;

	/// Returns true if the dataset contains no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Return the searchable key associated with `index`.
	fn key_for(&self, index: usize) -> &str;
}

impl Dataset for [ResultItem] {
	fn len(&self) -> usize {
		<[ResultItem]>::len(self)
	}

	fn key_for(&self, index: usize) -> &str {
		&self[index].value
	}
}

#[derive(Clone, Eq, PartialEq)]
struct RankedMatch {
	index: usize,
	score: u16,
}

impl Ord for RankedMatch {
	fn cmp(&self, other: &Self) -> Ordering {
		self.score
			.cmp(&other.score)
			.then_with(|| other.index.cmp(&self.index))
	}
}

impl PartialOrd for RankedMatch {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Keeps the `limit` highest scoring matches seen so far.
struct TopMatches {
	limit: usize,
	heap: BinaryHeap<Reverse<RankedMatch>>,
}

impl TopMatches {
	fn new(limit: usize) -> Self {
		Self {
			limit,
			heap: BinaryHeap::with_capacity(limit.min(1_024)),
		}
	}

	fn push(&mut self, entry: RankedMatch) {
		if self.heap.len() < self.limit {
			self.heap.push(Reverse(entry));
		} else if let Some(mut current_min) = self.heap.peek_mut()
			&& entry > current_min.0
		{
			*current_min = Reverse(entry);
		}
	}

	/// Best match first; equal scores keep dataset order.
	fn into_indices(self) -> Vec<usize> {
		let mut entries: Vec<RankedMatch> = self.heap.into_iter().map(|entry| entry.0).collect();
		entries.sort_unstable_by(|a, b| b.cmp(a));
		entries.into_iter().map(|entry| entry.index).collect()
	}
}

/// Score `dataset` against `needle` and return the indices of the best
/// `limit` matches, best first. Zero-score entries are dropped.
pub fn rank_matches<D>(dataset: &D, needle: &str, limit: usize) -> Vec<usize>
where
	D: Dataset + ?Sized,
{
	if limit == 0 || dataset.is_empty() {
		return Vec::new();
	}

	let haystacks: Vec<&str> = (0..dataset.len()).map(|index| dataset.key_for(index)).collect();
	let config = config_for_dataset(haystacks.len());

	let mut top = TopMatches::new(limit);
	for entry in match_list(needle, &haystacks, &config) {
		if entry.score == 0 {
			continue;
		}
		top.push(RankedMatch {
			index: entry.index as usize,
			score: entry.score,
		});
	}

	top.into_indices()
}

/// Fuzzy-filter result candidates by their `value`, capped at `limit`.
///
/// A blank needle returns the candidates unfiltered.
pub fn fuzzy_filter(items: &[ResultItem], needle: &str, limit: usize) -> Vec<ResultItem> {
	let needle = needle.trim();
	if needle.is_empty() {
		return items.iter().take(limit).cloned().collect();
	}

	let ranked = rank_matches(items, needle, limit);
	tracing::trace!(needle, candidates = items.len(), matches = ranked.len(), "fuzzy filter");
	ranked.into_iter().map(|index| items[index].clone()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(value: &str) -> ResultItem {
		ResultItem {
			id: value.to_string(),
			title: value.to_string(),
			subtitle: None,
			value: value.to_string(),
			url: None,
			location: None,
		}
	}

	fn values(items: &[ResultItem]) -> Vec<&str> {
		items.iter().map(|item| item.value.as_str()).collect()
	}

	#[test]
	fn best_match_ranks_first() {
		let items = vec![item("main.js"), item("renderList.js"), item("reducer.js")];
		let filtered = fuzzy_filter(&items, "renderList", 10);
		assert_eq!(filtered.first().map(|item| item.value.as_str()), Some("renderList.js"));
	}

	#[test]
	fn drops_candidates_that_do_not_contain_the_needle() {
		let items = vec![item("src/app.js"), item("lib/utils.js"), item("main.ts")];
		assert_eq!(values(&fuzzy_filter(&items, "app", 10)), vec!["src/app.js"]);
	}

	#[test]
	fn large_datasets_reject_near_misses() {
		let mut items: Vec<_> = (0..crate::search::PREFILTER_ENABLE_THRESHOLD)
			.map(|i| item(&format!("module{i}.js")))
			.collect();
		items.push(item("deadbf"));
		items.push(item("deadbeef"));
		assert_eq!(values(&fuzzy_filter(&items, "deadbe", 10)), vec!["deadbeef"]);
	}

	#[test]
	fn caps_result_count() {
		let items: Vec<_> = (0..5).map(|i| item(&format!("item-{i}"))).collect();
		assert_eq!(fuzzy_filter(&items, "item", 2).len(), 2);
	}

	#[test]
	fn equal_scores_keep_candidate_order() {
		let items = vec![item("same"), item("same"), item("same")];
		let ranked = rank_matches(items.as_slice(), "same", 10);
		assert_eq!(ranked, vec![0, 1, 2]);
	}

	#[test]
	fn blank_needle_returns_candidates() {
		let items = vec![item("b"), item("a")];
		assert_eq!(values(&fuzzy_filter(&items, "  ", 10)), vec!["b", "a"]);
	}

	#[test]
	fn zero_limit_matches_nothing() {
		let items = vec![item("a")];
		assert!(rank_matches(items.as_slice(), "a", 0).is_empty());
	}
}
