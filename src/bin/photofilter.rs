//! Command-line front end: apply a filter to a photo, list the palette,
//! and inspect or clear the recent-edits history.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use photofilter::{AppConfig, EditorSession, FileImageStore, FilterId, PreferencesStore};

#[derive(Parser, Debug)]
#[command(name = "photofilter", version, about = "Apply fixed-palette photo filters")]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, default_value = "photofilter.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the filters in palette order
    List,
    /// Filter a photo and save the result
    Apply {
        input: String,
        /// Slug, display name, or palette index
        #[arg(short, long)]
        filter: FilterId,
        /// Intensity in percent (0-100)
        #[arg(short, long)]
        intensity: Option<f32>,
        /// Also write a share copy into the cache directory
        #[arg(long)]
        share: bool,
    },
    /// Show recent edits, most recent first
    Recent,
    /// Forget all recent edits
    ClearRecent,
    /// Show or set the favorite filter
    Favorite { filter: Option<FilterId> },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;
    let prefs_path = config.preferences_path.clone();
    let preferences = PreferencesStore::with_capacity(&prefs_path, config.max_recent_edits);
    let prefs_context = || format!("updating preferences {}", prefs_path.display());

    match cli.command {
        Command::List => {
            for id in FilterId::ALL {
                println!("{:>2}  {:<22} {}", id.index(), id.slug(), id.display_name());
            }
        }
        Command::Apply {
            input,
            filter,
            intensity,
            share,
        } => {
            let store = FileImageStore::from_config(&config);
            let mut session = EditorSession::with_default_intensity(store, config.default_intensity);

            session
                .load_image(&input)
                .with_context(|| format!("loading image {input}"))?;
            if let Some(percent) = intensity {
                session.update_intensity(percent)?;
            }
            session
                .apply_filter(filter.index())
                .with_context(|| format!("applying {filter} to {input}"))?;
            let location = session
                .save(&preferences)
                .with_context(|| format!("saving edit into {}", config.output_dir.display()))?;
            println!("{location}");

            if share {
                let shared = session
                    .prepare_for_sharing()
                    .with_context(|| format!("exporting share copy into {}", config.cache_dir.display()))?;
                println!("{}", shared.display());
            }
        }
        Command::Recent => {
            let edits = preferences
                .recent_edits()
                .with_context(|| format!("reading preferences {}", prefs_path.display()))?;
            for edit in edits {
                let when = edit
                    .edited_at_utc()
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| edit.edited_at.to_string());
                println!("{when}  {:<14} {}", edit.filter_name, edit.image_uri);
            }
        }
        Command::ClearRecent => preferences.clear_recent_edits().with_context(prefs_context)?,
        Command::Favorite { filter } => match filter {
            Some(id) => preferences
                .save_favorite_filter(id.index())
                .with_context(prefs_context)?,
            None => {
                let favorite = preferences
                    .favorite_filter()
                    .with_context(|| format!("reading preferences {}", prefs_path.display()))?;
                match favorite.and_then(|i| FilterId::from_index(i).ok()) {
                    Some(id) => println!("{} ({})", id.display_name(), id.index()),
                    None => println!("no favorite filter"),
                }
            }
        },
    }

    Ok(())
}
