mod args;
mod output;

pub(crate) use args::{CliArgs, Command, OutputFormat, ReplayArgs, SearchArgs, parse_cli};
pub(crate) use output::{print_actions, print_json, print_plain};
