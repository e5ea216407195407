use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Value, json};

use super::*;
use crate::error::WorkerError;

/// Keeps source text in memory; analysis calls report which operation ran.
#[derive(Default)]
struct FakeParser {
	sources: Mutex<HashMap<String, String>>,
}

impl FakeParser {
	fn echo(operation: Operation, args: &[Value]) -> Result<Value> {
		Ok(json!({ "operation": operation.name(), "args": args }))
	}

	fn source_id(args: &[Value]) -> Result<String> {
		args.first()
			.and_then(Value::as_str)
			.map(str::to_string)
			.ok_or_else(|| anyhow!("expected a source id"))
	}
}

impl ParserWorker for FakeParser {
	fn get_closest_expression(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::GetClosestExpression, args)
	}
	fn find_out_of_scope_locations(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::FindOutOfScopeLocations, args)
	}
	fn get_symbols(&self, args: &[Value]) -> Result<Value> {
		let id = Self::source_id(args)?;
		let sources = self.sources.lock().map_err(|_| anyhow!("source store poisoned"))?;
		if !sources.contains_key(&id) {
			bail!("source {id} has not been set");
		}
		Ok(json!({ "functions": [], "variables": [] }))
	}
	fn get_scopes(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::GetScopes, args)
	}
	fn clear_symbols(&self, _args: &[Value]) -> Result<Value> {
		Ok(Value::Null)
	}
	fn clear_scopes(&self, _args: &[Value]) -> Result<Value> {
		Ok(Value::Null)
	}
	fn clear_asts(&self, _args: &[Value]) -> Result<Value> {
		Ok(Value::Null)
	}
	fn has_source(&self, args: &[Value]) -> Result<Value> {
		let id = Self::source_id(args)?;
		let sources = self.sources.lock().map_err(|_| anyhow!("source store poisoned"))?;
		Ok(Value::Bool(sources.contains_key(&id)))
	}
	fn set_source(&self, args: &[Value]) -> Result<Value> {
		let id = Self::source_id(args)?;
		let text = args
			.get(1)
			.and_then(Value::as_str)
			.context("expected source text")?;
		let mut sources = self.sources.lock().map_err(|_| anyhow!("source store poisoned"))?;
		sources.insert(id, text.to_string());
		Ok(Value::Null)
	}
	fn clear_sources(&self, _args: &[Value]) -> Result<Value> {
		let mut sources = self.sources.lock().map_err(|_| anyhow!("source store poisoned"))?;
		sources.clear();
		Ok(Value::Null)
	}
	fn get_variables_in_scope(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::GetVariablesInScope, args)
	}
	fn get_next_step(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::GetNextStep, args)
	}
	fn get_empty_lines(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::GetEmptyLines, args)
	}
	fn has_syntax_error(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::HasSyntaxError, args)
	}
	fn is_react_component(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::IsReactComponent, args)
	}
	fn replace_original_variable_name(&self, args: &[Value]) -> Result<Value> {
		Self::echo(Operation::ReplaceOriginalVariableName, args)
	}
}

fn table() -> DispatchTable {
	parser_dispatch_table(Arc::new(FakeParser::default()))
}

#[test]
fn registers_every_operation_by_wire_name() {
	let table = table();
	assert_eq!(table.len(), 16);
	for operation in Operation::ALL {
		assert!(table.contains(operation.name()), "{operation} missing");
	}
	assert!(table.contains("clearASTs"));
}

#[test]
fn each_name_reaches_its_own_handler() {
	let table = table();
	let echoing = [
		Operation::GetClosestExpression,
		Operation::FindOutOfScopeLocations,
		Operation::GetScopes,
		Operation::GetVariablesInScope,
		Operation::GetNextStep,
		Operation::GetEmptyLines,
		Operation::HasSyntaxError,
		Operation::IsReactComponent,
		Operation::ReplaceOriginalVariableName,
	];
	for operation in echoing {
		let response = handle_request(
			&table,
			WorkerRequest::new(1, operation.name(), vec![json!("x")]),
		);
		assert_eq!(
			response.result,
			Some(json!({ "operation": operation.name(), "args": ["x"] }))
		);
	}
}

#[test]
fn unknown_operation_is_reported_by_the_adapter() {
	let response = handle_request(&table(), WorkerRequest::new(7, "parseEverything", Vec::new()));
	assert_eq!(response.id, json!(7));
	assert!(response.result.is_none());
	let error = response.error.unwrap();
	assert_eq!(error.message, "unknown worker operation 'parseEverything'");
	assert_eq!(error.unknown_operation.as_deref(), Some("parseEverything"));
}

#[test]
fn unknown_operation_stays_typed_across_the_wire() {
	let response = handle_request(&table(), WorkerRequest::new(8, "parseEverything", Vec::new()));
	let encoded = serde_json::to_string(&response).unwrap();
	assert!(encoded.contains(r#""unknownOperation":"parseEverything""#), "{encoded}");
	let decoded: WorkerResponse = serde_json::from_str(&encoded).unwrap();
	assert!(matches!(
		decoded.into_result(),
		Err(WorkerError::UnknownOperation(name)) if name == "parseEverything"
	));
}

#[test]
fn debug_lists_operations_sorted() {
	let table = DispatchTable::new()
		.with("setSource", |_args: &[Value]| Ok(Value::Null))
		.with("clearASTs", |_args: &[Value]| Ok(Value::Null));
	assert_eq!(
		format!("{table:?}"),
		r#"DispatchTable { operations: ["clearASTs", "setSource"] }"#
	);
}

#[test]
fn handler_failures_pass_through_unchanged() {
	let table = DispatchTable::new().with("explode", |_args: &[Value]| {
		Err(anyhow!("root cause")).context("while exploding")
	});
	let response = handle_request(&table, WorkerRequest::new(2, "explode", Vec::new()));
	assert_eq!(
		response.into_result().unwrap_err().to_string(),
		"while exploding: root cause"
	);
}

#[test]
fn null_results_round_trip_as_null() {
	let response = handle_request(&table(), WorkerRequest::new(3, "clearSymbols", Vec::new()));
	let encoded = serde_json::to_string(&response).unwrap();
	let decoded: WorkerResponse = serde_json::from_str(&encoded).unwrap();
	assert_eq!(decoded.into_result().unwrap(), Value::Null);
}

#[test]
fn serve_answers_each_line() {
	let input = concat!(
		r#"{"id":1,"method":"setSource","args":["s1","let a = 1;"]}"#,
		"\n\n",
		r#"{"id":2,"method":"hasSource","args":["s1"]}"#,
		"\n",
		"not json\n",
		r#"{"id":3,"method":"getSymbols","args":["s2"]}"#,
		"\n",
	);
	let mut output = Vec::new();
	serve(&table(), Cursor::new(input), &mut output).unwrap();

	let responses: Vec<WorkerResponse> = String::from_utf8(output)
		.unwrap()
		.lines()
		.map(|line| serde_json::from_str(line).unwrap())
		.collect();
	assert_eq!(responses.len(), 4);
	assert_eq!(responses[0].id, json!(1));
	assert_eq!(responses[1].result, Some(json!(true)));
	assert_eq!(responses[2].id, Value::Null);
	assert!(responses[2].error.is_some());
	assert_eq!(
		responses[3].error.as_ref().map(|error| error.message.as_str()),
		Some("source s2 has not been set")
	);
}

#[test]
fn client_runs_table_on_worker_thread() {
	let mut client = WorkerClient::spawn(table()).unwrap();
	client
		.call(Operation::SetSource, vec![json!("s1"), json!("function f() {}")])
		.unwrap();
	assert_eq!(
		client.call(Operation::HasSource, vec![json!("s1")]).unwrap(),
		json!(true)
	);

	client.call(Operation::ClearSources, Vec::new()).unwrap();
	assert_eq!(
		client.call(Operation::HasSource, vec![json!("s1")]).unwrap(),
		json!(false)
	);
}

#[test]
fn client_surfaces_adapter_and_handler_errors() {
	let mut client = WorkerClient::spawn(table()).unwrap();
	assert!(matches!(
		client.call_named("nope", Vec::new()),
		Err(WorkerError::UnknownOperation(name)) if name == "nope"
	));
	assert!(matches!(
		client.call(Operation::GetSymbols, Vec::new()),
		Err(WorkerError::Handler(message)) if message == "expected a source id"
	));
}
