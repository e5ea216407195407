use std::str::FromStr;

use crate::error::KeyParseError;

/// Keys the modal reacts to. Text input arrives through
/// [`QuickOpenModal::update_query`](super::QuickOpenModal::update_query).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickOpenKey {
	Up,
	Down,
	Enter,
	Tab,
	Escape,
}

impl FromStr for QuickOpenKey {
	type Err = KeyParseError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name.trim().to_ascii_lowercase().as_str() {
			"up" | "arrowup" => Ok(Self::Up),
			"down" | "arrowdown" => Ok(Self::Down),
			"enter" | "return" => Ok(Self::Enter),
			"tab" => Ok(Self::Tab),
			"esc" | "escape" => Ok(Self::Escape),
			_ => Err(KeyParseError {
				name: name.to_string(),
			}),
		}
	}
}
