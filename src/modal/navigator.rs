//! Selection state over the current result list.

use crate::types::ResultItem;

/// Selected index over a result list that may be absent.
///
/// When results are present and non-empty the index is always in bounds.
#[derive(Clone, Debug, Default)]
pub struct ResultNavigator {
	results: Option<Vec<ResultItem>>,
	selected: usize,
}

impl ResultNavigator {
	#[must_use]
	pub fn new(results: Option<Vec<ResultItem>>) -> Self {
		Self {
			results,
			selected: 0,
		}
	}

	/// Replace the results and reset the selection to the first row.
	pub fn replace(&mut self, results: Option<Vec<ResultItem>>) {
		self.results = results;
		self.selected = 0;
	}

	#[must_use]
	pub fn results(&self) -> Option<&[ResultItem]> {
		self.results.as_deref()
	}

	/// Index of the selected row, `None` when there is nothing to select.
	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		match &self.results {
			Some(results) if !results.is_empty() => Some(self.selected),
			_ => None,
		}
	}

	#[must_use]
	pub fn selected(&self) -> Option<&ResultItem> {
		self.results.as_ref()?.get(self.selected)
	}

	/// Move the selection by `delta` rows, wrapping at both ends.
	pub fn move_by(&mut self, delta: isize) -> Option<&ResultItem> {
		let count = self.results.as_ref().map_or(0, Vec::len);
		if count == 0 {
			return None;
		}
		let count = isize::try_from(count).ok()?;
		let current = isize::try_from(self.selected).ok()?;
		self.selected = usize::try_from((current + delta).rem_euclid(count)).ok()?;
		self.selected()
	}

	pub fn select_next(&mut self) -> Option<&ResultItem> {
		self.move_by(1)
	}

	pub fn select_previous(&mut self) -> Option<&ResultItem> {
		self.move_by(-1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn items(count: usize) -> Vec<ResultItem> {
		(0..count)
			.map(|i| ResultItem {
				id: i.to_string(),
				title: format!("item {i}"),
				subtitle: None,
				value: format!("item {i}"),
				url: None,
				location: None,
			})
			.collect()
	}

	#[test]
	fn up_from_first_wraps_to_last() {
		let mut navigator = ResultNavigator::new(Some(items(4)));
		assert_eq!(navigator.select_previous().map(|item| item.id.as_str()), Some("3"));
		assert_eq!(navigator.selected_index(), Some(3));
	}

	#[test]
	fn down_from_last_wraps_to_first() {
		let mut navigator = ResultNavigator::new(Some(items(3)));
		navigator.select_next();
		navigator.select_next();
		assert_eq!(navigator.selected_index(), Some(2));
		navigator.select_next();
		assert_eq!(navigator.selected_index(), Some(0));
	}

	#[test]
	fn single_result_stays_selected() {
		let mut navigator = ResultNavigator::new(Some(items(1)));
		navigator.select_next();
		navigator.select_previous();
		assert_eq!(navigator.selected_index(), Some(0));
	}

	#[test]
	fn navigation_without_results_is_a_noop() {
		let mut navigator = ResultNavigator::new(None);
		assert!(navigator.select_next().is_none());
		assert_eq!(navigator.selected_index(), None);

		let mut navigator = ResultNavigator::new(Some(Vec::new()));
		assert!(navigator.select_previous().is_none());
		assert_eq!(navigator.selected_index(), None);
	}

	#[test]
	fn replacing_results_resets_selection() {
		let mut navigator = ResultNavigator::new(Some(items(5)));
		navigator.move_by(3);
		navigator.replace(Some(items(2)));
		assert_eq!(navigator.selected_index(), Some(0));
	}
}
