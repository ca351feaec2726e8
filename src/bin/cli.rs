//! PlacePicker CLI
//!
//! Command-line interface for PlacePicker:
//! - Browse the catalog
//! - Show, add to and remove from the saved list
//! - Check status
//! - Generate a config file

use clap::{Parser, Subcommand};
use placepicker::client::{ClientConfig, ClientError, PlacesClient};
use placepicker::storage::{list, Place};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "placepicker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect the places you would like to visit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = placepicker::client::DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every place in the catalog
    Places,

    /// List the saved places, newest first
    Saved,

    /// Add a catalog place to the saved list
    Add {
        /// Place id (see `placepicker places`)
        id: String,
    },

    /// Remove a place from the saved list
    Remove {
        /// Place id
        id: String,
    },

    /// Show API status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    placepicker::config::LoggingConfig {
        level: "warn".to_string(),
        ..Default::default()
    }
    .init();

    let client = PlacesClient::new(ClientConfig::new(&cli.api_url))?;

    match cli.command {
        Commands::Places => {
            let places = client.fetch_places().await.map_err(|e| unreachable_hint(&cli.api_url, e))?;
            print_places(&places, &cli.format, "No places available.")?;
        }

        Commands::Saved => {
            let saved = client
                .fetch_user_places()
                .await
                .map_err(|e| unreachable_hint(&cli.api_url, e))?;
            print_places(
                &saved.places,
                &cli.format,
                "Select the places you would like to visit with `placepicker add <id>`.",
            )?;
        }

        Commands::Add { id } => {
            let catalog = client.fetch_places().await?;
            let Some(place) = list::find(&catalog, &id).cloned() else {
                anyhow::bail!("No place with id {:?} in the catalog", id);
            };

            let saved = client.fetch_user_places().await?;
            if list::contains(&saved.places, &id) {
                println!("{} is already on your list", place.title);
                return Ok(());
            }

            let updated = list::with_added(&saved.places, place.clone());
            client
                .replace_user_places(updated, Some(saved.version))
                .await
                .map_err(conflict_hint)?;
            println!("Added {} ({})", place.title, place.id);
        }

        Commands::Remove { id } => {
            let saved = client.fetch_user_places().await?;
            let Some(place) = list::find(&saved.places, &id).cloned() else {
                anyhow::bail!("{:?} is not on your list", id);
            };

            let updated = list::without(&saved.places, &id);
            client
                .replace_user_places(updated, Some(saved.version))
                .await
                .map_err(conflict_hint)?;
            println!("Removed {} ({})", place.title, place.id);
        }

        Commands::Status => {
            let health = client.health().await.map_err(|e| unreachable_hint(&cli.api_url, e))?;

            println!("PlacePicker v{}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("API Status: {} (server v{})", health.status, health.version);
            println!("Catalog: {} places", health.catalog_places);
            println!("Saved: {} places", health.user_places);
            println!();
            println!("Uptime: {}", format_duration(health.uptime_seconds));
        }

        Commands::Config { output } => {
            let config = placepicker::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn print_places(places: &[Place], format: &str, fallback: &str) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(places)?);
        return Ok(());
    }

    if places.is_empty() {
        println!("{}", fallback);
        return Ok(());
    }

    println!("{:<8} {:<32} {}", "ID", "Title", "Image");
    println!("{}", "-".repeat(64));
    for place in places {
        let image = place.image.as_ref().map(|image| image.src()).unwrap_or("-");
        println!("{:<8} {:<32} {}", place.id, place.title, image);
    }
    Ok(())
}

fn unreachable_hint(api_url: &str, err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Request(e) if e.is_connect() => anyhow::anyhow!(
            "Cannot connect to PlacePicker API at {}: {}\n\nMake sure the server is running:\n  cargo run --bin placepicker-api",
            api_url,
            e
        ),
        other => other.into(),
    }
}

fn conflict_hint(err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Conflict(message) => {
            anyhow::anyhow!("{}\nThe saved list changed while updating; run the command again.", message)
        }
        other => other.into(),
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
