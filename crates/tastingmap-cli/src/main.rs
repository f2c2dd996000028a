mod geocode;
mod query;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tastingmap_core::BeverageType;
use tastingmap_search::VenueFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tastingmap-cli")]
#[command(about = "Craft beverage venue catalog tools")]
struct Cli {
    /// Catalog artifact to read (defaults to `TASTINGMAP_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Category and region narrowing shared by the query commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, clap::Args)]
struct FilterArgs {
    /// Keep venues tagged with any of these beverage types (repeatable)
    #[arg(long = "category")]
    categories: Vec<BeverageType>,

    /// Keep venues in exactly this region
    #[arg(long)]
    region: Option<String>,
}

impl FilterArgs {
    fn to_filter(&self) -> VenueFilter {
        VenueFilter {
            categories: (!self.categories.is_empty())
                .then(|| self.categories.iter().copied().collect()),
            region: self.region.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Attach coordinates from a CSV source to the catalog artifact
    Geocode {
        /// CSV file with a header row followed by `name,lat,lng` rows
        #[arg(long)]
        source: PathBuf,
        /// Write the enriched catalog here instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
        /// Report matches without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// List venues within a radius of a point, nearest first
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Search radius in miles (defaults to `TASTINGMAP_DEFAULT_RADIUS_MILES`)
        #[arg(long, allow_negative_numbers = true)]
        radius: Option<f64>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Find venues whose name or city contains the query
    Search {
        query: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show regions with venue counts
    Regions,
    /// List catalog venues
    Venues {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tastingmap_core::load_app_config()?;
    init_tracing(&config.log_level)?;

    let catalog_path: &Path = cli.catalog.as_deref().unwrap_or(&config.catalog_path);

    match cli.command {
        Some(Commands::Geocode {
            source,
            output,
            dry_run,
        }) => geocode::run_geocode(catalog_path, source, output, dry_run)?,
        Some(Commands::Nearby {
            lat,
            lng,
            radius,
            limit,
            filter,
        }) => query::run_nearby(
            catalog_path,
            lat,
            lng,
            radius.unwrap_or(config.default_radius_miles),
            limit,
            &filter.to_filter(),
        )?,
        Some(Commands::Search { query, filter }) => {
            query::run_search(catalog_path, &query, &filter.to_filter())?;
        }
        Some(Commands::Regions) => query::run_regions(catalog_path)?,
        Some(Commands::Venues { filter }) => query::run_venues(catalog_path, &filter.to_filter())?,
        None => println!("no command given; see `tastingmap-cli --help`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
