use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use std::{io::Write, path::PathBuf};

use crate::catalog::TrackCatalog;
use crate::config;
use crate::domain::track::{LibraryItem, TrackKey};

pub mod playlist;
pub mod validate;

use playlist::Playlist;
use validate::{validate_rating, validate_track_number};

#[derive(Parser)]
#[command(name = "trackshelf")]
#[command(version = "0.1")]
#[command(about = "Small music library manager")]
pub struct Cli {
    /// Path to a config TOML file with the tracks to load
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all tracks
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show details of one track
    View {
        /// Track number
        track: String,
    },
    /// Search tracks by number, name or artist
    Search {
        query: String,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update the rating of a track
    Rate {
        /// Track number
        track: String,
        /// New rating, 1 to 5
        rating: String,
    },
    /// Build a playlist from track numbers and play it
    Play {
        /// Track numbers, in play order
        tracks: Vec<String>,
    },
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    key: &'a TrackKey,
    #[serde(flatten)]
    item: &'a LibraryItem,
}

fn to_json<'a>(
    entries: impl IntoIterator<Item = (&'a TrackKey, &'a LibraryItem)>,
) -> anyhow::Result<String> {
    let entries: Vec<CatalogEntry> = entries
        .into_iter()
        .map(|(key, item)| CatalogEntry { key, item })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => config::Config::load(path)?,
        None => config::Config::default(),
    };
    let mut catalog = TrackCatalog::from_seed(cfg.seed_tracks())?;
    info!("catalog loaded with {} tracks", catalog.len());

    let stdout = std::io::stdout();
    execute(&cli.command, &mut catalog, &mut stdout.lock())
}

/// runs one command against the catalog, writing its output to `out`
pub fn execute(
    command: &Commands,
    catalog: &mut TrackCatalog,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::List { json } => {
            if *json {
                writeln!(out, "{}", to_json(catalog.iter())?)?;
            } else {
                writeln!(out, "{}", catalog.list_all())?;
            }
        }

        Commands::View { track } => match catalog.get_name(track) {
            Some(name) => {
                writeln!(out, "{name}")?;
                writeln!(out, "{}", catalog.get_artist(track).unwrap_or_default())?;
                writeln!(out, "rating: {}", catalog.get_rating(track).unwrap_or_default())?;
                writeln!(out, "plays: {}", catalog.get_play_count(track).unwrap_or_default())?;
            }
            None => writeln!(out, "Track {track} not found")?,
        },

        Commands::Search { query, json } => {
            let matches = catalog.search(query);
            debug!("search '{query}' matched {} tracks", matches.len());

            if *json {
                writeln!(out, "{}", to_json(matches)?)?;
            } else if matches.is_empty() {
                writeln!(out, "No tracks found matching '{}'", query.trim().to_lowercase())?;
            } else {
                for (key, item) in matches {
                    writeln!(out, "{}: {} - {}", key, item.name, item.artist)?;
                }
            }
        }

        Commands::Rate { track, rating } => {
            let key = validate_track_number(track, catalog)?;
            let rating = validate_rating(rating)?;

            catalog.set_rating(key.as_str(), rating);
            info!("rating updated for track {key}");

            let name = catalog.get_name(key.as_str()).unwrap_or_default();
            let plays = catalog.get_play_count(key.as_str()).unwrap_or_default();
            writeln!(out, "Track: {name}")?;
            writeln!(out, "New Rating: {rating}")?;
            writeln!(out, "Play Count: {plays}")?;
        }

        Commands::Play { tracks } => {
            let mut playlist = Playlist::new();
            for track in tracks {
                playlist.add(validate_track_number(track, catalog)?);
            }
            playlist.play(catalog)?;

            writeln!(out, "{}", playlist.render(catalog))?;
            writeln!(out, "Playlist played successfully!")?;
            for (key, item) in catalog.iter() {
                if playlist.keys().contains(key) {
                    let entry = catalog.format_entry(key.as_str()).unwrap_or_default();
                    writeln!(out, "{entry}  plays: {}", item.play_count)?;
                }
            }
        }
    }
    Ok(())
}
