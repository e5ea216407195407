//! Static list offered by the `?` mode. Each shortcut's id is the sigil it
//! re-seeds the query with.

use crate::query::{FUNCTIONS_SIGIL, GOTO_LINE_SIGIL, VARIABLES_SIGIL};
use crate::types::ResultItem;

struct Shortcut {
	sigil: char,
	title: &'static str,
	subtitle: &'static str,
}

const SHORTCUTS: [Shortcut; 3] = [
	Shortcut {
		sigil: FUNCTIONS_SIGIL,
		title: "@ Function Search",
		subtitle: "Search for functions in file",
	},
	Shortcut {
		sigil: VARIABLES_SIGIL,
		title: "# Variable Search",
		subtitle: "Search for variables in file",
	},
	Shortcut {
		sigil: GOTO_LINE_SIGIL,
		title: ": Go to line",
		subtitle: "Go to line in file",
	},
];

/// Shortcut rows in their display order.
pub fn shortcut_items() -> Vec<ResultItem> {
	SHORTCUTS
		.iter()
		.map(|shortcut| ResultItem {
			id: shortcut.sigil.to_string(),
			title: shortcut.title.to_string(),
			subtitle: Some(shortcut.subtitle.to_string()),
			value: shortcut.title.to_string(),
			url: None,
			location: None,
		})
		.collect()
}
