//! Launchpad CLI
//!
//! Browse, filter, favorite, launch and manage the personal catalog of games
//! and websites. Input is validated here before it reaches the catalog store.

mod render;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use launchpad_core::config::{Config, Directories};
use launchpad_core::view::{self, View};
use launchpad_core::{
    CatalogStore, Category, FileStore, ItemDraft, ItemKind, ItemPatch, Launcher, Opener,
    Persistence, SystemOpener, Theme,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Launchpad - a personal launcher for games and websites
#[derive(Parser)]
#[command(name = "launchpad")]
#[command(version, about)]
#[command(after_help = "\
Examples:
  launchpad                                List items in the default category
  launchpad list -c favorites -s git       Favorites whose name contains \"git\"
  launchpad add --name Foo --kind website --url https://foo.com
  launchpad add --name Steam --kind game --native-url steam://
  launchpad edit <ID> --icon \"\"            Clear an item's icon
  launchpad launch <ID>                    Open the item and mark it as recently used
  launchpad theme toggle                   Switch between dark and light
")]
struct Cli {
    /// Data directory (overrides config and the XDG default)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List items, filtered by category and search
    List {
        /// Category id: all, games, websites, favorites, recent, manage, or a custom tag
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Print the projected items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show categories with item counts
    Categories,

    /// Add an item to the catalog
    Add(AddArgs),

    /// Edit an item (an empty value clears url, native url or icon)
    Edit {
        id: String,

        #[command(flatten)]
        fields: EditArgs,
    },

    /// Remove an item
    Remove { id: String },

    /// Toggle an item's favorite flag
    Favorite { id: String },

    /// Launch an item
    Launch { id: String },

    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Args)]
struct AddArgs {
    #[arg(long)]
    name: String,

    /// game or website
    #[arg(long, default_value = "website")]
    kind: ItemKind,

    /// Web address
    #[arg(long)]
    url: Option<String>,

    /// Native app URI (games only), e.g. steam://
    #[arg(long)]
    native_url: Option<String>,

    #[arg(long)]
    icon: Option<String>,

    /// Category tag (defaults to games/websites by kind)
    #[arg(long)]
    category: Option<String>,
}

#[derive(Args)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    kind: Option<ItemKind>,

    #[arg(long)]
    url: Option<String>,

    #[arg(long)]
    native_url: Option<String>,

    #[arg(long)]
    icon: Option<String>,

    #[arg(long)]
    category: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

/// Everything a command needs: resolved config and the open catalog
struct App {
    config: Config,
    store: CatalogStore<FileStore>,
}

impl App {
    fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let dirs = Directories::new()?;
        let config = Config::load(&dirs.config_file)
            .with_context(|| format!("Failed to load {}", dirs.config_file.display()))?;

        let dirs = match data_dir.or_else(|| config.storage.data_dir.clone()) {
            Some(dir) => dirs.with_data_dir(dir),
            None => dirs,
        };
        dirs.ensure_exists()
            .with_context(|| format!("Failed to create {}", dirs.data.display()))?;

        debug!("Using store at {}", dirs.store.display());
        let store = CatalogStore::open(Persistence::new(FileStore::new(&dirs.store)));

        Ok(Self { config, store })
    }
}

/// Set up logging. Warnings go to stderr; debug builds also keep a full log file.
///
/// The returned guard flushes the file writer when dropped, so it must live
/// until the command has finished.
fn setup_logging(verbose: bool) -> Option<WorkerGuard> {
    let level = if verbose { "debug" } else { "warn" };
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("launchpad={level}")));

    if cfg!(debug_assertions) {
        let temp_dir = std::env::temp_dir();
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_filename = format!("launchpad-{timestamp}.log");

        let file_appender = tracing_appender::rolling::never(&temp_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("launchpad=debug"));

        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(stderr_filter);

        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .init();

        Some(guard)
    } else {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_filter(stderr_filter);

        tracing_subscriber::registry().with(stderr_layer).init();

        None
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = setup_logging(cli.verbose);

    let mut app = App::open(cli.data_dir)?;
    let mut changes = app.store.subscribe();

    match cli.command {
        None => {
            let category = app.config.display.default_category.clone();
            run_list(&app, Some(category), "", false)?;
        }
        Some(Commands::List {
            category,
            search,
            json,
        }) => run_list(&app, category.map(Category::from), &search, json)?,
        Some(Commands::Categories) => run_categories(&app),
        Some(Commands::Add(args)) => run_add(&mut app, args)?,
        Some(Commands::Edit { id, fields }) => run_edit(&mut app, &id, fields)?,
        Some(Commands::Remove { id }) => run_remove(&mut app, &id)?,
        Some(Commands::Favorite { id }) => run_favorite(&mut app, &id)?,
        Some(Commands::Launch { id }) => {
            let opener = SystemOpener::new().with_browser(app.config.launch.browser.clone());
            run_launch(&mut app, &Launcher::new(opener), &id)?;
        }
        Some(Commands::Theme { action }) => run_theme(&mut app, action),
    }

    while let Ok(event) = changes.try_recv() {
        debug!(?event, "Catalog changed");
    }

    Ok(())
}

fn run_list(app: &App, category: Option<Category>, search: &str, json: bool) -> Result<()> {
    let category = category.unwrap_or_else(|| app.config.display.default_category.clone());
    let view = View::new(category, search);
    let items = view.project(app.store.items());

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if view.is_manage() {
        print!(
            "{}",
            render::render_manage(&items, &app.config.display.placeholder_icon)
        );
    } else {
        print!("{}", render::render_grid(&items, chrono::Utc::now()));
    }
    Ok(())
}

fn run_categories(app: &App) {
    let counts = view::category_counts(app.store.items());
    print!(
        "{}",
        render::render_categories(&counts, &app.config.display.default_category)
    );
}

fn run_add(app: &mut App, args: AddArgs) -> Result<()> {
    let draft = ItemDraft {
        name: args.name,
        kind: args.kind,
        url: args.url,
        native_url: args.native_url,
        icon: args.icon,
        category: args.category,
    };
    draft.validate().context("Cannot add item")?;

    let item = app.store.add(draft);
    println!("Added {} ({})", item.name, item.id);
    Ok(())
}

fn run_edit(app: &mut App, id: &str, fields: EditArgs) -> Result<()> {
    let patch = ItemPatch {
        name: fields.name,
        kind: fields.kind,
        url: fields.url.map(Some),
        native_url: fields.native_url.map(Some),
        icon: fields.icon.map(Some),
        category: fields.category,
    };
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one field to edit.");
    }

    let Some(current) = app.store.get(id) else {
        bail!("No item with id {id}");
    };
    patch
        .validate_against(current)
        .with_context(|| format!("Cannot edit {}", current.name))?;

    if let Some(item) = app.store.update(id, &patch) {
        println!("Updated {} ({})", item.name, item.id);
    }
    Ok(())
}

fn run_remove(app: &mut App, id: &str) -> Result<()> {
    let removed = app.store.try_remove(id)?;
    println!("Removed {}", removed.name);
    Ok(())
}

fn run_favorite(app: &mut App, id: &str) -> Result<()> {
    let item = app.store.try_toggle_favorite(id)?;
    let state = if item.favorite { "added to" } else { "removed from" };
    println!("{} {state} favorites", item.name);
    Ok(())
}

fn run_launch<O: Opener>(app: &mut App, launcher: &Launcher<O>, id: &str) -> Result<()> {
    match launcher.launch(&mut app.store, id) {
        Some(target) => {
            let name = app.store.get(id).map_or(id, |item| item.name.as_str());
            println!("Launched {name} via {}", target.uri());
            Ok(())
        }
        None if app.store.get(id).is_none() => bail!("No item with id {id}"),
        None => bail!("Item {id} has no URL to launch"),
    }
}

fn run_theme(app: &mut App, action: ThemeAction) {
    let persistence = app.store.persistence_mut();
    let current = persistence.load_theme();

    let next = match action {
        ThemeAction::Show => {
            println!("{current}");
            return;
        }
        ThemeAction::Toggle => current.toggle(),
        ThemeAction::Dark => Theme::Dark,
        ThemeAction::Light => Theme::Light,
    };

    persistence.save_theme(next);
    println!("{next}");
}
