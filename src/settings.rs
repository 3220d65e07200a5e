use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use verbtab::viewport::DEFAULT_UNITS_PER_COLUMN;
use verbtab::{SearchTimings, ThemePreference, VerbSource, app_dirs};

use crate::cli::CliArgs;

/// Upper bound for configured debounce delays.
const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    source: SourceSection,
    ui: UiSection,
    search: SearchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SourceSection {
    location: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
    initial_query: Option<String>,
    units_per_column: Option<u16>,
    user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    debounce_ms: Option<u64>,
    resize_debounce_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: VerbSource,
    /// Explicitly configured theme; `None` defers to the saved preference.
    pub theme: Option<ThemePreference>,
    pub initial_query: String,
    pub units_per_column: u16,
    pub user_agent: Option<String>,
    pub timings: SearchTimings,
}

impl ResolvedConfig {
    pub fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Source: {}", self.source.describe());
        println!(
            "  Theme: {}",
            self.theme
                .map(|theme| theme.as_str().to_string())
                .unwrap_or_else(|| "(saved preference)".to_string())
        );
        if !self.initial_query.is_empty() {
            println!("  Initial query: {}", self.initial_query);
        }
        println!("  Units per column: {}", self.units_per_column);
        if let Some(agent) = &self.user_agent {
            println!("  User agent: {agent}");
        }
        println!("  Input debounce: {} ms", self.timings.input.as_millis());
        println!("  Resize debounce: {} ms", self.timings.resize.as_millis());
    }
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let defaults = if cli.no_config {
        Vec::new()
    } else {
        default_config_files()
    };
    load_with(cli, defaults)
}

fn load_with(cli: &CliArgs, default_files: Vec<PathBuf>) -> Result<ResolvedConfig> {
    let builder = build_config(cli, default_files)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs, default_files: Vec<PathBuf>) -> Result<Config> {
    let mut builder = Config::builder();

    for path in default_files {
        builder = builder.add_source(File::from(path).required(false));
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("verbtab")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join("verbtab.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(source) = cli.source.clone() {
            self.source.location = Some(source);
        }
        if let Some(theme) = cli.theme {
            self.ui.theme = Some(ThemePreference::from(theme).as_str().to_string());
        }
        if let Some(query) = cli.query.clone() {
            self.ui.initial_query = Some(query);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let source = self
            .source
            .location
            .as_deref()
            .map(VerbSource::parse)
            .unwrap_or_default();

        let theme = match self.ui.theme.as_deref() {
            None => None,
            Some(value) => Some(
                value
                    .parse::<ThemePreference>()
                    .context("invalid `ui.theme` setting")?,
            ),
        };

        let units_per_column = self.ui.units_per_column.unwrap_or(DEFAULT_UNITS_PER_COLUMN);
        ensure!(
            units_per_column > 0,
            "ui.units_per_column must be greater than zero"
        );

        let defaults = SearchTimings::default();
        let input = debounce_setting("search.debounce_ms", self.search.debounce_ms)?
            .unwrap_or(defaults.input);
        let resize = debounce_setting("search.resize_debounce_ms", self.search.resize_debounce_ms)?
            .unwrap_or(defaults.resize);

        Ok(ResolvedConfig {
            source,
            theme,
            initial_query: self.ui.initial_query.unwrap_or_default(),
            units_per_column,
            user_agent: self.ui.user_agent.filter(|agent| !agent.trim().is_empty()),
            timings: SearchTimings {
                input,
                resize,
                orientation: defaults.orientation,
            },
        })
    }
}

fn debounce_setting(name: &str, value: Option<u64>) -> Result<Option<Duration>> {
    match value {
        None => Ok(None),
        Some(ms) if ms > MAX_DEBOUNCE_MS => {
            bail!("{name} must be at most {MAX_DEBOUNCE_MS} ms (got {ms})")
        }
        Some(ms) => Ok(Some(Duration::from_millis(ms))),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::FromArgMatches;

    use super::*;
    use crate::cli::cli_command;

    fn cli(args: &[&str]) -> CliArgs {
        let mut matches = cli_command().get_matches_from(args);
        CliArgs::from_arg_matches_mut(&mut matches).unwrap()
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_without_files() {
        let resolved = load_with(&cli(&["verbtab"]), Vec::new()).unwrap();
        assert_eq!(resolved.source, VerbSource::Bundled);
        assert_eq!(resolved.theme, None);
        assert_eq!(resolved.units_per_column, DEFAULT_UNITS_PER_COLUMN);
        assert_eq!(resolved.timings, SearchTimings::default());
    }

    #[test]
    fn file_values_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
[source]
location = "https://example.org/verbs.json"

[ui]
theme = "light"
units_per_column = 10

[search]
debounce_ms = 300
"#,
        );
        let resolved = load_with(&cli(&["verbtab"]), vec![path]).unwrap();
        assert_eq!(
            resolved.source,
            VerbSource::Url("https://example.org/verbs.json".into())
        );
        assert_eq!(resolved.theme, Some(ThemePreference::Light));
        assert_eq!(resolved.units_per_column, 10);
        assert_eq!(resolved.timings.input, Duration::from_millis(300));
        assert_eq!(resolved.timings.resize, Duration::from_millis(250));
    }

    #[test]
    fn cli_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ui]\ntheme = \"light\"\ninitial_query = \"be\"\n");
        let resolved = load_with(
            &cli(&["verbtab", "--theme", "dark", "--query", "went"]),
            vec![path],
        )
        .unwrap();
        assert_eq!(resolved.theme, Some(ThemePreference::Dark));
        assert_eq!(resolved.initial_query, "went");
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let args = cli(&["verbtab", "--config", missing.to_str().unwrap()]);
        assert!(load_with(&args, Vec::new()).is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ui]\ntheme = \"sepia\"\n");
        assert!(load_with(&cli(&["verbtab"]), vec![path]).is_err());
    }

    #[test]
    fn zero_units_per_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[ui]\nunits_per_column = 0\n");
        assert!(load_with(&cli(&["verbtab"]), vec![path]).is_err());
    }

    #[test]
    fn oversized_debounce_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[search]\nresize_debounce_ms = 60000\n");
        assert!(load_with(&cli(&["verbtab"]), vec![path]).is_err());
    }
}
