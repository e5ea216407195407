//! The quick-open controller: query classification, result production,
//! keyboard navigation and host callbacks.

mod actions;
mod context;
mod keys;
mod navigator;
mod resolver;

pub use actions::{ActionLog, QuickOpenActions, RecordedAction};
pub use context::QuickOpenContext;
pub use keys::QuickOpenKey;
pub use navigator::ResultNavigator;
pub use resolver::{ResultResolver, SearchLimits};

use crate::query::SearchMode;
use crate::types::{LineRange, Location, ResultItem, SymbolKind};

/// State of the quick-open modal.
///
/// The host owns the query; it reports every change through
/// [`update_query`](Self::update_query). Results are recomputed whenever the
/// query changes or the modal opens, and discarded when it closes.
#[derive(Debug, Default)]
pub struct QuickOpenModal {
	resolver: ResultResolver,
	query: String,
	mode: SearchMode,
	/// `None` while the modal is closed.
	selection: Option<ResultNavigator>,
}

impl QuickOpenModal {
	#[must_use]
	pub fn new(limits: SearchLimits) -> Self {
		Self {
			resolver: ResultResolver::new(limits),
			..Self::default()
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.selection.is_some()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn mode(&self) -> &SearchMode {
		&self.mode
	}

	#[must_use]
	pub fn results(&self) -> Option<&[ResultItem]> {
		self.selection.as_ref()?.results()
	}

	#[must_use]
	pub fn selected_index(&self) -> Option<usize> {
		self.selection.as_ref()?.selected_index()
	}

	#[must_use]
	pub fn selected_item(&self) -> Option<&ResultItem> {
		self.selection.as_ref()?.selected()
	}

	/// Open the modal on `query` and compute its first result list.
	pub fn open(
		&mut self,
		context: &QuickOpenContext<'_>,
		actions: &mut dyn QuickOpenActions,
		query: &str,
	) {
		self.selection = Some(ResultNavigator::default());
		self.update_query(context, actions, query);
	}

	/// Record a new query. While open, results are recomputed, the selection
	/// returns to the first row and symbol searches preview it.
	pub fn update_query(
		&mut self,
		context: &QuickOpenContext<'_>,
		actions: &mut dyn QuickOpenActions,
		query: &str,
	) {
		self.query = query.to_string();
		self.mode = SearchMode::parse(query);
		tracing::debug!(query, mode = self.mode.kind().id(), "quick open query changed");
		if self.selection.is_some() {
			self.refresh(context, actions);
		}
	}

	/// Close the modal and drop its selection state.
	pub fn close(&mut self, actions: &mut dyn QuickOpenActions) {
		if self.selection.take().is_some() {
			actions.close();
		}
	}

	/// React to a navigation or confirmation key. No-op while closed.
	pub fn handle_key(
		&mut self,
		context: &QuickOpenContext<'_>,
		actions: &mut dyn QuickOpenActions,
		key: QuickOpenKey,
	) {
		let Some(selection) = self.selection.as_mut() else {
			return;
		};
		match key {
			QuickOpenKey::Up => {
				if selection.select_previous().is_some() {
					self.preview(context, actions);
				}
			}
			QuickOpenKey::Down => {
				if selection.select_next().is_some() {
					self.preview(context, actions);
				}
			}
			QuickOpenKey::Enter => self.confirm(context, actions),
			QuickOpenKey::Tab | QuickOpenKey::Escape => self.close(actions),
		}
	}

	/// Act on `item` according to the current mode.
	///
	/// Shortcuts re-seed the query and keep the modal open; every other mode
	/// navigates and closes.
	pub fn select_item(
		&mut self,
		context: &QuickOpenContext<'_>,
		actions: &mut dyn QuickOpenActions,
		item: &ResultItem,
	) {
		match &self.mode {
			SearchMode::Shortcuts { .. } => {
				actions.set_query(&item.id);
				self.update_query(context, actions, &item.id);
				return;
			}
			SearchMode::GotoSource { target, .. } => {
				let (line, column) = target.map_or((0, None), |target| (target.line, target.column));
				actions.select_location(Location::new(&item.id, line, column));
			}
			SearchMode::Functions { .. } | SearchMode::Variables { .. } => {
				if let (Some(source), Some(range)) = (context.selected_source, item.location) {
					actions.select_location(Location::new(&source.id, range.start.line, None));
				}
			}
			SearchMode::Sources { .. } => {
				actions.select_location(Location::new(&item.id, 0, None));
			}
			SearchMode::GotoLine { .. } => {}
		}
		self.close(actions);
	}

	fn refresh(&mut self, context: &QuickOpenContext<'_>, actions: &mut dyn QuickOpenActions) {
		let results = self.resolver.resolve(&self.mode, &self.query, context);
		if let Some(selection) = self.selection.as_mut() {
			selection.replace(results);
		}
		self.preview(context, actions);
	}

	fn confirm(&mut self, context: &QuickOpenContext<'_>, actions: &mut dyn QuickOpenActions) {
		if let SearchMode::GotoLine { target } = self.mode {
			if let (Some(source), Some(target)) = (context.selected_source, target) {
				actions.select_location(Location::new(&source.id, target.line, target.column));
			}
			self.close(actions);
			return;
		}

		let Some(item) = self.selected_item().cloned() else {
			return;
		};
		self.select_item(context, actions, &item);
	}

	/// Preview the selected symbol in the editor without confirming it.
	fn preview(&self, context: &QuickOpenContext<'_>, actions: &mut dyn QuickOpenActions) {
		let Some(source) = context.selected_source else {
			return;
		};
		let Some(range) = self.selected_item().and_then(|item| item.location) else {
			return;
		};
		match self.mode.symbol_kind() {
			Some(SymbolKind::Functions) => actions.highlight_line_range(LineRange {
				source_id: source.id.clone(),
				start: range.start.line,
				end: range.end.line,
			}),
			Some(SymbolKind::Variables) => {
				actions.select_location(Location::new(&source.id, range.start.line, None));
			}
			None => {}
		}
	}
}
