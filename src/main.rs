use clap::{ArgAction, Parser, Subcommand};
use dialoguer::{Input, Select};
use show_scout::{
    Catalog, Controller, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, EpisodeArea, MISSING_IMAGE_URL,
    Settings, ShowId, ShowScoutError, TvMazeCatalog, connect, render_episodes, render_html,
    render_text,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search the TVmaze catalog for tv shows and browse their episodes
#[derive(Debug, Parser)]
#[command(name = "show-scout", version, about)]
struct Cli {
    /// Root URL of the catalog service
    #[arg(long, env = "SHOW_SCOUT_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Image URL used for shows without artwork
    #[arg(long, env = "SHOW_SCOUT_PLACEHOLDER_IMAGE", default_value = MISSING_IMAGE_URL, global = true)]
    placeholder_image: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "SHOW_SCOUT_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    timeout: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search shows by name
    Search {
        /// Search term (may be empty)
        term: String,

        /// Also list the episodes of the N-th result (starting at 1)
        #[arg(long, value_name = "N")]
        episodes: Option<usize>,

        /// Write the rendered page as HTML to this file
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,
    },

    /// List the episodes of a show by its catalog id
    Episodes {
        /// Show id as printed by `search`
        id: String,

        /// Print the episode records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session
    Browse,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_search(
    controller: &mut Controller<TvMazeCatalog>,
    term: String,
    episodes: Option<usize>,
    html: Option<PathBuf>,
) -> Result<(), ShowScoutError> {
    controller.type_query(term);
    controller.submit_search()?;

    if let Some(position) = episodes {
        controller.open_episodes(position.saturating_sub(1))?;
    }

    print!("{}", render_text(controller.page()));

    if let Some(path) = html {
        fs::write(&path, render_html(controller.page()))?;
        info!(path = %path.display(), "wrote page");
    }

    Ok(())
}

fn run_episodes(catalog: &TvMazeCatalog, id: &str, json: bool) -> Result<(), ShowScoutError> {
    let episodes = catalog.list_episodes(&ShowId::from(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&episodes)?);
        return Ok(());
    }

    let mut area = EpisodeArea::default();
    render_episodes(&mut area, &episodes);

    for entry in area.entries() {
        println!("{}", entry.text);
    }
    for notice in area.notices() {
        println!("{notice}");
    }

    Ok(())
}

fn run_browse(controller: &mut Controller<TvMazeCatalog>) -> Result<(), ShowScoutError> {
    loop {
        let term: String = Input::new()
            .with_prompt("Search shows (empty to quit)")
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::from)?;

        if term.trim().is_empty() {
            return Ok(());
        }

        controller.type_query(term);
        if let Err(e) = controller.submit_search() {
            eprintln!("Search failed: {e}");
            continue;
        }

        print!("{}", render_text(controller.page()));
        if controller.page().shows.is_empty() {
            continue;
        }

        loop {
            let mut items: Vec<String> = controller
                .page()
                .shows
                .blocks()
                .iter()
                .map(|block| format!("{}: {}", block.control_label(), block.name))
                .collect();
            items.push("New search".to_string());

            let selection = Select::new()
                .with_prompt("Pick a show")
                .items(&items)
                .default(0)
                .interact_opt()
                .map_err(io::Error::from)?;

            let index = match selection {
                Some(index) if index < controller.page().shows.len() => index,
                Some(_) => break,
                None => return Ok(()),
            };

            if let Err(e) = controller.open_episodes(index) {
                eprintln!("Loading episodes failed: {e}");
                continue;
            }

            println!("\n=== Episodes ===");
            let area = &controller.page().episodes;
            for entry in area.entries() {
                println!("  {}", entry.text);
            }
            for notice in area.notices() {
                println!("  {notice}");
            }
            println!();
        }
    }
}

fn run(cli: Cli) -> Result<(), ShowScoutError> {
    let settings = Settings::new(&cli.base_url, &cli.placeholder_image, cli.timeout)?;
    let mut controller = connect(&settings)?;

    match cli.command {
        Command::Search {
            term,
            episodes,
            html,
        } => run_search(&mut controller, term, episodes, html),
        Command::Episodes { id, json } => run_episodes(controller.catalog(), &id, json),
        Command::Browse => run_browse(&mut controller),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
