use serde::Serialize;

/// Line and optional column parsed from a `line[:column]` suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GotoTarget {
	pub line: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub column: Option<u32>,
}

impl GotoTarget {
	/// Parse `line[:column]`.
	///
	/// Parsing is lenient: each part contributes its leading digits, and a
	/// column that does not parse is dropped rather than failing the whole
	/// target. Returns `None` when no line number can be read.
	#[must_use]
	pub fn parse(text: &str) -> Option<Self> {
		let mut parts = text.split(':');
		let line = parts.next().and_then(leading_number)?;
		let column = parts.next().and_then(leading_number);
		Some(Self { line, column })
	}
}

fn leading_number(part: &str) -> Option<u32> {
	let trimmed = part.trim_start();
	let digits = trimmed
		.find(|c: char| !c.is_ascii_digit())
		.map_or(trimmed, |end| &trimmed[..end]);
	digits.parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_line_and_column() {
		assert_eq!(
			GotoTarget::parse("42:7"),
			Some(GotoTarget {
				line: 42,
				column: Some(7)
			})
		);
	}

	#[test]
	fn parses_line_only() {
		assert_eq!(
			GotoTarget::parse("42"),
			Some(GotoTarget {
				line: 42,
				column: None
			})
		);
	}

	#[test]
	fn drops_unparseable_column() {
		assert_eq!(
			GotoTarget::parse("42:x"),
			Some(GotoTarget {
				line: 42,
				column: None
			})
		);
		assert_eq!(
			GotoTarget::parse("12abc:3"),
			Some(GotoTarget {
				line: 12,
				column: Some(3)
			})
		);
	}

	#[test]
	fn rejects_missing_line() {
		assert_eq!(GotoTarget::parse(""), None);
		assert_eq!(GotoTarget::parse("x:4"), None);
		assert_eq!(GotoTarget::parse(":4"), None);
	}
}
