//! Conversion of host records into display candidates.

use crate::types::{ResultItem, Source, SymbolDeclaration};

/// Format every listable source. Sources without a URL are skipped.
pub fn format_sources(sources: &[Source]) -> Vec<ResultItem> {
	sources
		.iter()
		.filter(|source| !source.url.is_empty())
		.map(format_source)
		.collect()
}

/// Format a single source as a result row titled by its file name.
pub fn format_source(source: &Source) -> ResultItem {
	let path = source.path();
	ResultItem {
		id: source.id.clone(),
		title: source.file_name().to_string(),
		subtitle: Some(path.to_string()),
		value: path.to_string(),
		url: Some(source.url.clone()),
		location: None,
	}
}

/// Format symbol declarations, keyed by name and declaration line.
pub fn format_symbols(declarations: &[SymbolDeclaration]) -> Vec<ResultItem> {
	declarations
		.iter()
		.map(|declaration| {
			let line = declaration.location.start.line;
			ResultItem {
				id: format!("{}:{line}", declaration.name),
				title: declaration.name.clone(),
				subtitle: Some(format!(":{line}")),
				value: declaration.name.clone(),
				url: None,
				location: Some(declaration.location),
			}
		})
		.collect()
}
