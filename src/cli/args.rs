use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use verbtab::{ThemePreference, app_dirs};

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let data_dir = match app_dirs::get_data_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("verbtab {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "data directory: {data_dir}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = cli_command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

pub(crate) fn cli_command() -> Command {
    CliArgs::command()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemePreference {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => ThemePreference::Dark,
            ThemeArg::Light => ThemePreference::Light,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "verbtab",
    version,
    long_version = long_version(),
    about = "Search a dictionary of English irregular verbs",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `verbtab` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long,
        value_name = "PATH|URL",
        help = "Load verbs from a JSON file or URL (default: bundled list)"
    )]
    pub(crate) source: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "VERBTAB_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short,
        long,
        value_enum,
        help = "Colour theme; overrides the saved preference (default: saved or dark)"
    )]
    pub(crate) theme: Option<ThemeArg>,
    #[arg(
        short,
        long,
        value_name = "TEXT",
        help = "Start with this search query (default: empty)"
    )]
    pub(crate) query: Option<String>,
    #[arg(long, help = "Print the effective configuration before starting")]
    pub(crate) print_config: bool,
    #[arg(
        long,
        help = "Print matching verbs as plain text instead of starting the interface"
    )]
    pub(crate) dump: bool,
}
