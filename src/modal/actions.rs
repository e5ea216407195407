use std::fmt;

use crate::types::{LineRange, Location};

/// Callbacks the modal fires into its host.
pub trait QuickOpenActions {
	/// Move the editor to `location`.
	fn select_location(&mut self, location: Location);

	/// Replace the query held by the host.
	fn set_query(&mut self, query: &str);

	/// Highlight a line range while previewing a function.
	fn highlight_line_range(&mut self, range: LineRange);

	/// Dismiss the modal.
	fn close(&mut self);
}

/// A callback recorded by [`ActionLog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedAction {
	SelectLocation(Location),
	SetQuery(String),
	HighlightLineRange(LineRange),
	Close,
}

impl fmt::Display for RecordedAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RecordedAction::SelectLocation(location) => {
				write!(f, "select-location {}:{}", location.source_id, location.line)?;
				if let Some(column) = location.column {
					write!(f, ":{column}")?;
				}
				Ok(())
			}
			RecordedAction::SetQuery(query) => write!(f, "set-query {query:?}"),
			RecordedAction::HighlightLineRange(range) => write!(
				f,
				"highlight-line-range {}:{}-{}",
				range.source_id, range.start, range.end
			),
			RecordedAction::Close => f.write_str("close"),
		}
	}
}

/// Host implementation that records every callback in order.
#[derive(Debug, Default)]
pub struct ActionLog {
	actions: Vec<RecordedAction>,
}

impl ActionLog {
	#[must_use]
	pub fn actions(&self) -> &[RecordedAction] {
		&self.actions
	}

	/// Take the recorded callbacks, leaving the log empty.
	pub fn drain(&mut self) -> Vec<RecordedAction> {
		std::mem::take(&mut self.actions)
	}
}

impl QuickOpenActions for ActionLog {
	fn select_location(&mut self, location: Location) {
		self.actions.push(RecordedAction::SelectLocation(location));
	}

	fn set_query(&mut self, query: &str) {
		self.actions.push(RecordedAction::SetQuery(query.to_string()));
	}

	fn highlight_line_range(&mut self, range: LineRange) {
		self.actions.push(RecordedAction::HighlightLineRange(range));
	}

	fn close(&mut self) {
		self.actions.push(RecordedAction::Close);
	}
}
