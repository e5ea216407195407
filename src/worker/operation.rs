use std::fmt;
use std::str::FromStr;

use crate::error::WorkerError;

/// Operations exposed by the parser worker, named as they appear on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	GetClosestExpression,
	FindOutOfScopeLocations,
	GetSymbols,
	GetScopes,
	ClearSymbols,
	ClearScopes,
	ClearAsts,
	HasSource,
	SetSource,
	ClearSources,
	GetVariablesInScope,
	GetNextStep,
	GetEmptyLines,
	HasSyntaxError,
	IsReactComponent,
	ReplaceOriginalVariableName,
}

impl Operation {
	pub const ALL: [Operation; 16] = [
		Operation::GetClosestExpression,
		Operation::FindOutOfScopeLocations,
		Operation::GetSymbols,
		Operation::GetScopes,
		Operation::ClearSymbols,
		Operation::ClearScopes,
		Operation::ClearAsts,
		Operation::HasSource,
		Operation::SetSource,
		Operation::ClearSources,
		Operation::GetVariablesInScope,
		Operation::GetNextStep,
		Operation::GetEmptyLines,
		Operation::HasSyntaxError,
		Operation::IsReactComponent,
		Operation::ReplaceOriginalVariableName,
	];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Operation::GetClosestExpression => "getClosestExpression",
			Operation::FindOutOfScopeLocations => "findOutOfScopeLocations",
			Operation::GetSymbols => "getSymbols",
			Operation::GetScopes => "getScopes",
			Operation::ClearSymbols => "clearSymbols",
			Operation::ClearScopes => "clearScopes",
			Operation::ClearAsts => "clearASTs",
			Operation::HasSource => "hasSource",
			Operation::SetSource => "setSource",
			Operation::ClearSources => "clearSources",
			Operation::GetVariablesInScope => "getVariablesInScope",
			Operation::GetNextStep => "getNextStep",
			Operation::GetEmptyLines => "getEmptyLines",
			Operation::HasSyntaxError => "hasSyntaxError",
			Operation::IsReactComponent => "isReactComponent",
			Operation::ReplaceOriginalVariableName => "replaceOriginalVariableName",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Operation {
	type Err = WorkerError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Operation::ALL
			.into_iter()
			.find(|operation| operation.name() == name)
			.ok_or_else(|| WorkerError::UnknownOperation(name.to_string()))
	}
}
