mod browse;
mod lists;
mod ratings;

use std::sync::Arc;
use std::time::Duration;

use barlie_catalog::{
    BeerBrowser, BrewDate, HttpSettings, PunkClient, RequestQuota, WineyVibeClient,
    WineyVibeEndpoints,
};
use barlie_core::{AppConfig, BeerListStore, RatingStore};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "barlie")]
#[command(about = "Discover, filter and rate beers from public beer catalogs")]
struct Cli {
    /// Catalog to query
    #[arg(long, value_enum, global = true, default_value = "punk")]
    provider: Provider,
    /// Keep only beers of this style (e.g. IPA, Stout, "Pale Ale")
    #[arg(long, global = true)]
    style: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Provider {
    Punk,
    #[value(name = "wineyvibe")]
    WineyVibe,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Page through the catalog
    Browse {
        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: u32,
    },
    /// Search beers by name
    Search { query: String },
    /// Filter by alcohol by volume (exclusive bounds)
    Abv {
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
    },
    /// A shuffled sample of popular strengths
    Popular,
    /// Beers under 4.5% abv
    Light,
    /// Beers between 7% and 15% abv
    Strong,
    /// Show one random beer
    Random,
    /// Show one beer by id
    Beer { id: String },
    /// Filter by first-brewed month (punk only), as MM-YYYY
    Brewed {
        #[arg(
            long,
            value_parser = parse_month,
            conflicts_with = "after",
            required_unless_present = "after"
        )]
        before: Option<NaiveDate>,
        #[arg(long, value_parser = parse_month)]
        after: Option<NaiveDate>,
    },
    /// List the style vocabulary
    Styles,
    /// Rate a beer from 1 to 5 stars
    Rate {
        beer_id: String,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        stars: u8,
        #[arg(long, default_value = "")]
        review: String,
    },
    /// Remove a rating
    Unrate { beer_id: String },
    /// Show saved ratings and stats
    Ratings {
        /// Only beers rated four stars or more
        #[arg(long)]
        favorites: bool,
    },
    /// Manage the personal "Next" and "Drank" lists
    List {
        #[command(subcommand)]
        action: ListAction,
    },
}

#[derive(Debug, Subcommand)]
enum ListAction {
    /// Print one list, or every list when no name is given
    Show { name: Option<String> },
    /// Put a beer on a list
    Add { list: String, beer_id: String },
    /// Take a beer off a list
    Remove { list: String, beer_id: String },
    /// Move a beer between lists, by default from Next to Drank
    Move {
        beer_id: String,
        #[arg(long, default_value = "Next")]
        from: String,
        #[arg(long, default_value = "Drank")]
        to: String,
    },
}

/// Parses `MM-YYYY` into the first day of that month.
fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("01-{}", value.trim()), "%d-%m-%Y")
        .map_err(|e| format!("expected MM-YYYY, got '{value}': {e}"))
}

fn http_settings(config: &AppConfig) -> HttpSettings {
    HttpSettings {
        timeout_secs: config.request_timeout_secs,
        user_agent: config.user_agent.clone(),
        headers: Vec::new(),
    }
}

fn punk_client(config: &AppConfig) -> anyhow::Result<PunkClient> {
    let quota = Arc::new(RequestQuota::new(
        config.punk_max_requests,
        Duration::from_secs(config.punk_window_secs),
    ));
    PunkClient::new(&config.punk_base_url, &http_settings(config), quota)
        .map_err(|e| anyhow::anyhow!("failed to build Punk client: {e}"))
}

fn wineyvibe_client(config: &AppConfig) -> anyhow::Result<WineyVibeClient> {
    let settings = config.wineyvibe.as_ref().ok_or_else(|| {
        anyhow::anyhow!("BARLIE_WINEYVIBE_BASE_URL is not set; cannot use the wineyvibe provider")
    })?;
    let quota = Arc::new(RequestQuota::new(
        settings.max_requests,
        Duration::from_secs(settings.window_secs),
    ));
    let endpoints = WineyVibeEndpoints {
        beers: settings.beers_path.clone(),
        details: settings.details_path.clone(),
        search: settings.search_path.clone(),
    };
    WineyVibeClient::new(
        &settings.base_url,
        endpoints,
        settings.api_key.as_deref(),
        &http_settings(config),
        quota,
    )
    .map_err(|e| anyhow::anyhow!("failed to build WineyVibe client: {e}"))
}

/// Commands that need neither configuration nor a catalog provider.
fn runs_offline(command: &Commands) -> bool {
    matches!(command, Commands::Styles)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let style = browse::parse_style(cli.style.as_deref())?;
    if runs_offline(&cli.command) {
        browse::print_styles();
        return Ok(());
    }

    let config = barlie_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(provider = ?cli.provider, env = %config.env, "barlie starting");

    match cli.command {
        Commands::Rate {
            beer_id,
            stars,
            review,
        } => {
            let mut store = RatingStore::open(&config.data_dir)?;
            ratings::run_rate(&mut store, &beer_id, stars, &review)
        }
        Commands::Unrate { beer_id } => {
            let mut store = RatingStore::open(&config.data_dir)?;
            ratings::run_unrate(&mut store, &beer_id)
        }
        Commands::Ratings { favorites } => {
            let store = RatingStore::open(&config.data_dir)?;
            ratings::run_ratings(&store, favorites);
            Ok(())
        }
        Commands::List { action } => {
            let mut store = BeerListStore::open(&config.data_dir)?;
            lists::run(&mut store, action)
        }
        Commands::Brewed { before, after } => {
            if cli.provider != Provider::Punk {
                anyhow::bail!("brewed is only supported by the punk provider");
            }
            let when = match (before, after) {
                (Some(date), _) => BrewDate::Before(date),
                (None, Some(date)) => BrewDate::After(date),
                (None, None) => anyhow::bail!("pass --before or --after"),
            };
            let store = RatingStore::open(&config.data_dir)?;
            let client = punk_client(&config)?;
            browse::run_brewed(&client, when, config.page_size, style, &store).await
        }
        command => {
            let store = RatingStore::open(&config.data_dir)?;
            match cli.provider {
                Provider::Punk => {
                    let browser = BeerBrowser::new(punk_client(&config)?, config.page_size);
                    browse::run(&browser, command, style, &store).await
                }
                Provider::WineyVibe => {
                    let browser = BeerBrowser::new(wineyvibe_client(&config)?, config.page_size);
                    browse::run(&browser, command, style, &store).await
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
