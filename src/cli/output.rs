use anyhow::Result;
use quick_open::{RecordedAction, ResultItem};
use unicode_width::UnicodeWidthStr;

/// Render results as aligned `title  subtitle` lines.
pub(crate) fn format_plain(results: Option<&[ResultItem]>) -> String {
	let Some(results) = results else {
		return "(no result list in goto-line mode)\n".to_string();
	};
	if results.is_empty() {
		return "No results\n".to_string();
	}

	let width = results
		.iter()
		.map(|item| item.title.width())
		.max()
		.unwrap_or(0);

	let mut out = String::new();
	for item in results {
		out.push_str(&item.title);
		if let Some(subtitle) = &item.subtitle {
			let padding = width - item.title.width() + 2;
			out.extend(std::iter::repeat_n(' ', padding));
			out.push_str(subtitle);
		}
		out.push('\n');
	}
	out
}

/// Print a plain-text representation of the results.
pub(crate) fn print_plain(results: Option<&[ResultItem]>) {
	print!("{}", format_plain(results));
}

/// Format the results as a JSON string; goto-line mode yields `null`.
pub(crate) fn format_results_json(results: Option<&[ResultItem]>) -> Result<String> {
	Ok(serde_json::to_string_pretty(&results)?)
}

/// Print the JSON representation of the results.
pub(crate) fn print_json(results: Option<&[ResultItem]>) -> Result<()> {
	println!("{}", format_results_json(results)?);
	Ok(())
}

/// Print one line per recorded host callback.
pub(crate) fn print_actions(actions: &[RecordedAction]) {
	for action in actions {
		println!("{action}");
	}
}
