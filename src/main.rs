mod cli;
mod settings;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use ratatui::crossterm::terminal;
use tracing::{error, info, warn};

use verbtab::prefs::{JsonFilePreferenceStore, Preferences};
use verbtab::ui::{self, App};
use verbtab::{
    Renderer, SearchController, SearchQuery, VerbStore, Viewport, app_dirs, logging,
};

use cli::{parse_cli, print_rows};
use settings::ResolvedConfig;

const SHORTCUTS: &[(&str, &str)] = &[
    ("Ctrl+K", "focus search"),
    ("Ctrl+T", "toggle theme"),
    ("Esc", "clear search"),
    ("Enter", "move to the table"),
    ("Ctrl+Q", "quit"),
];

fn main() -> Result<()> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    let _logging = logging::init();

    if cli.dump {
        return dump(&resolved);
    }
    run_interface(resolved)
}

/// Print the rows matching the initial query without starting the interface.
fn dump(settings: &ResolvedConfig) -> Result<()> {
    let mut store = VerbStore::new();
    let fetcher = settings.source.fetcher();
    if let Err(err) = store.load(fetcher.as_ref()) {
        bail!(err.user_message());
    }

    let query = SearchQuery::new(&settings.initial_query);
    let verbs = store.filter(&query);
    let output = Renderer::new().render(&verbs, query.as_str(), false);
    print_rows(&output)
}

fn run_interface(settings: ResolvedConfig) -> Result<()> {
    let prefs = open_preferences();

    let mut store = VerbStore::new();
    store.set_history(prefs.history());
    let fetcher = settings.source.fetcher();
    let loaded = store.load(fetcher.as_ref());

    let (columns, rows) = terminal::size().context("failed to query terminal size")?;
    let viewport = Viewport::new(columns, rows)
        .with_units_per_column(settings.units_per_column)
        .with_user_agent(settings.user_agent.clone());

    let mut controller = SearchController::new(store, prefs, viewport, settings.timings);
    match &loaded {
        Ok(_) if !settings.initial_query.is_empty() => controller.submit(&settings.initial_query),
        Ok(_) => {}
        Err(err) => {
            error!(source = %settings.source.describe(), error = %err, "error loading verbs");
            controller.on_load_failed(err);
        }
    }

    log_banner(controller.total_count());

    let app = App::new(
        controller,
        &settings.initial_query,
        settings.theme,
        Instant::now(),
    );
    ui::run(app)
}

fn open_preferences() -> Preferences {
    match app_dirs::get_data_dir() {
        Ok(dir) => Preferences::new(JsonFilePreferenceStore::in_dir(&dir)),
        Err(err) => {
            warn!(error = %err, "no data directory; preferences will not be saved");
            Preferences::in_memory()
        }
    }
}

fn log_banner(verb_count: usize) {
    let shortcuts = SHORTCUTS
        .iter()
        .map(|(keys, action)| format!("{keys}: {action}"))
        .collect::<Vec<_>>()
        .join(", ");
    info!(
        verbs = verb_count,
        shortcuts = %shortcuts,
        "irregular verbs dictionary ready"
    );
}
