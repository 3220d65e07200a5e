mod args;
mod output;

#[cfg(test)]
pub(crate) use args::cli_command;
pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use output::print_rows;
