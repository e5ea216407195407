//! Binding between the parser's analysis functions and the dispatch table.

use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;

use super::{DispatchTable, Operation};

/// The analysis functions a parser worker exposes, one per [`Operation`].
///
/// Arguments arrive exactly as sent by the caller; implementations own their
/// validation and any state (parsed ASTs, cached scopes, registered sources).
pub trait ParserWorker: Send + Sync + 'static {
	fn get_closest_expression(&self, args: &[Value]) -> Result<Value>;
	fn find_out_of_scope_locations(&self, args: &[Value]) -> Result<Value>;
	fn get_symbols(&self, args: &[Value]) -> Result<Value>;
	fn get_scopes(&self, args: &[Value]) -> Result<Value>;
	fn clear_symbols(&self, args: &[Value]) -> Result<Value>;
	fn clear_scopes(&self, args: &[Value]) -> Result<Value>;
	fn clear_asts(&self, args: &[Value]) -> Result<Value>;
	fn has_source(&self, args: &[Value]) -> Result<Value>;
	fn set_source(&self, args: &[Value]) -> Result<Value>;
	fn clear_sources(&self, args: &[Value]) -> Result<Value>;
	fn get_variables_in_scope(&self, args: &[Value]) -> Result<Value>;
	fn get_next_step(&self, args: &[Value]) -> Result<Value>;
	fn get_empty_lines(&self, args: &[Value]) -> Result<Value>;
	fn has_syntax_error(&self, args: &[Value]) -> Result<Value>;
	fn is_react_component(&self, args: &[Value]) -> Result<Value>;
	fn replace_original_variable_name(&self, args: &[Value]) -> Result<Value>;
}

type Method<P> = fn(&P, &[Value]) -> Result<Value>;

fn method_for<P: ParserWorker>(operation: Operation) -> Method<P> {
	match operation {
		Operation::GetClosestExpression => P::get_closest_expression,
		Operation::FindOutOfScopeLocations => P::find_out_of_scope_locations,
		Operation::GetSymbols => P::get_symbols,
		Operation::GetScopes => P::get_scopes,
		Operation::ClearSymbols => P::clear_symbols,
		Operation::ClearScopes => P::clear_scopes,
		Operation::ClearAsts => P::clear_asts,
		Operation::HasSource => P::has_source,
		Operation::SetSource => P::set_source,
		Operation::ClearSources => P::clear_sources,
		Operation::GetVariablesInScope => P::get_variables_in_scope,
		Operation::GetNextStep => P::get_next_step,
		Operation::GetEmptyLines => P::get_empty_lines,
		Operation::HasSyntaxError => P::has_syntax_error,
		Operation::IsReactComponent => P::is_react_component,
		Operation::ReplaceOriginalVariableName => P::replace_original_variable_name,
	}
}

/// Register every [`Operation`] of `worker` under its wire name.
pub fn parser_dispatch_table<P: ParserWorker>(worker: Arc<P>) -> DispatchTable {
	let mut table = DispatchTable::new();
	for operation in Operation::ALL {
		let method = method_for::<P>(operation);
		let worker = Arc::clone(&worker);
		table.register(operation.name(), move |args: &[Value]| method(&worker, args));
	}
	table
}
