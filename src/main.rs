//! moodmuse - mood-based inspiration from the command line

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use moodmuse::config::{Paths, UserConfig};
use moodmuse::core::{
    ContentOrchestrator, ContentSource, LoadState, MoodCatalog, OrchestratorSettings, Session,
};
use moodmuse::db::JsonFileStore;
use moodmuse::models::{Content, Mood};
use moodmuse::plugins::{GeminiClient, Generator};
use moodmuse::stores::FavoritesStore;

/// moodmuse - quotes, affirmations and songs for how you feel
#[derive(Parser, Debug)]
#[command(name = "moodmuse")]
#[command(version)]
#[command(about = "Mood-based quotes, affirmations and song picks")]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available moods
    Moods,

    /// Get inspiration for a mood
    Inspire {
        /// One of: happy, sad, chill, angry, excited, lonely
        mood: Mood,

        /// Skip the generator and use offline content
        #[arg(long)]
        offline: bool,

        /// Print the content as JSON
        #[arg(long)]
        json: bool,

        /// Add the result to favorites
        #[arg(long)]
        save: bool,
    },

    /// Manage saved favorites
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
}

#[derive(Subcommand, Debug)]
enum FavoritesAction {
    /// List saved favorites
    List {
        /// Print favorites as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a favorite by its position in the list (1-based)
    Remove { index: usize },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(format!(
        "{},reqwest=warn,hyper=warn",
        log_level
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let paths = Paths::init(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let mut config = UserConfig::load()?;
    let favorites = FavoritesStore::load(JsonFileStore::open(paths.storage_path())?);

    match args.command {
        Command::Moods => {
            let catalog = MoodCatalog::builtin();
            for mood in Mood::ALL {
                println!("{:<8} {}", mood.as_str(), catalog.fallback_for(mood).quote);
            }
            Ok(())
        }
        Command::Inspire {
            mood,
            offline,
            json,
            save,
        } => {
            if offline {
                config.use_mock_data = true;
            }
            inspire(&config, favorites, mood, json, save).await
        }
        Command::Favorites { action } => {
            manage_favorites(favorites, action.unwrap_or(FavoritesAction::List { json: false }))
        }
    }
}

async fn inspire(
    config: &UserConfig,
    favorites: FavoritesStore<JsonFileStore>,
    mood: Mood,
    json: bool,
    save: bool,
) -> Result<()> {
    let generator = GeminiClient::from_config(config);
    if generator.is_configured() && !config.use_mock_data {
        info!("Using Gemini model {}", generator.model());
    }

    let orchestrator = ContentOrchestrator::new(generator, OrchestratorSettings::from(config));
    let mut session = Session::new(orchestrator, favorites);

    session.select_mood(mood);
    if session.request_content().await == LoadState::Failed {
        let snapshot = session.snapshot();
        bail!(
            "{}. Run the command again to retry.",
            snapshot.error.unwrap_or("Failed to generate content")
        );
    }

    if save {
        if let Some(content) = session.orchestrator().content().cloned() {
            if session.add_favorite(content)? {
                info!("Saved to favorites");
            } else {
                info!("Already in favorites");
            }
        }
    }

    let snapshot = session.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else if let Some(content) = snapshot.content {
        let label = match snapshot.source {
            Some(ContentSource::Generated) => "Powered by Gemini",
            _ => "Offline content",
        };
        println!("{} mood · {}", mood, label);
        print_content(content, snapshot.is_favorite);
    }

    Ok(())
}

fn manage_favorites(
    mut favorites: FavoritesStore<JsonFileStore>,
    action: FavoritesAction,
) -> Result<()> {
    match action {
        FavoritesAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(favorites.list())?);
            } else if favorites.is_empty() {
                println!("No favorites yet. Use `moodmuse inspire <mood> --save`.");
            } else {
                for (i, content) in favorites.list().iter().enumerate() {
                    println!("[{}]", i + 1);
                    print_content(content, true);
                }
            }
        }
        FavoritesAction::Remove { index } => {
            let Some(content) = index
                .checked_sub(1)
                .and_then(|i| favorites.list().get(i))
                .cloned()
            else {
                bail!("No favorite at position {} ({} saved)", index, favorites.len());
            };

            favorites.remove(&content)?;
            println!("Removed \"{}\"", content.quote);
        }
    }

    Ok(())
}

fn print_content(content: &Content, is_favorite: bool) {
    let marker = if is_favorite { " ★" } else { "" };
    println!();
    println!("  \"{}\"{}", content.quote, marker);
    println!("  {}", content.affirmation);
    println!();
    for song in &content.songs {
        match &song.link {
            Some(link) => println!("  ♪ {} - {}  {}", song.title, song.artist, link),
            None => println!("  ♪ {} - {}", song.title, song.artist),
        }
    }
    if let Some(image) = &content.background_image {
        println!();
        println!("  background: {}", image);
    }
    println!();
}
