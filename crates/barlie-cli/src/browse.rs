//! Catalog command handlers for the CLI.
//!
//! Each handler drives a [`BeerBrowser`] through one operation, then prints
//! the resulting snapshot. The optional `--style` filter narrows the printed
//! list locally; it is never sent to a provider.

use barlie_catalog::{BeerBrowser, BeerCatalog, Bounds, BrewDate, Page, PunkClient};
use barlie_core::{Beer, BeerStyle, RatingStore};

use crate::Commands;

/// Resolves `--style`, rejecting labels outside the vocabulary.
///
/// # Errors
///
/// Returns an error naming the valid labels when `label` is not one of them.
pub(crate) fn parse_style(label: Option<&str>) -> anyhow::Result<BeerStyle> {
    let Some(label) = label else {
        return Ok(BeerStyle::All);
    };
    BeerStyle::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = BeerStyle::ALL_STYLES.iter().map(|s| s.label()).collect();
        anyhow::anyhow!("unknown style '{label}'; expected one of: {}", known.join(", "))
    })
}

pub(crate) fn print_styles() {
    let popular: Vec<&str> = BeerStyle::popular_styles()
        .iter()
        .map(|s| s.label())
        .collect();
    println!("Popular: {}", popular.join(", "));
    println!();
    for style in BeerStyle::ALL_STYLES {
        println!("{style}");
    }
}

/// Runs a catalog command against `browser` and prints the outcome.
///
/// # Errors
///
/// Returns the browser's error message when the operation failed.
pub(crate) async fn run<C: BeerCatalog>(
    browser: &BeerBrowser<C>,
    command: Commands,
    style: BeerStyle,
    store: &RatingStore,
) -> anyhow::Result<()> {
    match command {
        Commands::Browse { pages } => {
            browser.load().await;
            for _ in 1..pages {
                if !browser.can_load_more() {
                    break;
                }
                browser.load_more().await;
            }
        }
        Commands::Search { query } => browser.search(&query).await,
        Commands::Abv { min, max } => browser.filter_by_abv(Bounds::new(min, max)).await,
        Commands::Popular => browser.popular().await,
        Commands::Light => browser.light().await,
        Commands::Strong => browser.strong().await,
        Commands::Random => {
            return match browser.random().await {
                Some(beer) => {
                    print_detail(&beer, store);
                    Ok(())
                }
                None => fail_or(browser, "the catalog returned no beer"),
            };
        }
        Commands::Beer { id } => {
            return match browser.catalog().get_beer(&id).await {
                Ok(Some(beer)) => {
                    print_detail(&beer, store);
                    Ok(())
                }
                Ok(None) => Err(anyhow::anyhow!("no beer with id '{id}'")),
                Err(e) => Err(e.into()),
            };
        }
        Commands::Brewed { .. }
        | Commands::Styles
        | Commands::Rate { .. }
        | Commands::Unrate { .. }
        | Commands::Ratings { .. }
        | Commands::List { .. } => {
            anyhow::bail!("not a catalog browsing command");
        }
    }

    let snapshot = browser.snapshot();
    if let Some(message) = snapshot.error {
        anyhow::bail!(message);
    }
    print_beers(&filter_style(snapshot.beers, style), store);
    if snapshot.has_more {
        println!("(more available; pass --pages to load further)");
    }
    Ok(())
}

/// Lists beers by first-brewed month. The Punk catalog is the only one that
/// records brew dates.
///
/// # Errors
///
/// Returns an error if the catalog request fails.
pub(crate) async fn run_brewed(
    client: &PunkClient,
    when: BrewDate,
    page_size: u32,
    style: BeerStyle,
    store: &RatingStore,
) -> anyhow::Result<()> {
    let beers = client.brewed(when, Page::first(page_size)).await?;
    print_beers(&filter_style(beers, style), store);
    Ok(())
}

fn fail_or<C: BeerCatalog>(browser: &BeerBrowser<C>, fallback: &str) -> anyhow::Result<()> {
    let message = browser
        .snapshot()
        .error
        .unwrap_or_else(|| fallback.to_string());
    Err(anyhow::anyhow!(message))
}

pub(crate) fn filter_style(beers: Vec<Beer>, style: BeerStyle) -> Vec<Beer> {
    beers
        .into_iter()
        .filter(|beer| style.matches(&beer.style))
        .collect()
}

/// Truncates `text` to `max` characters, marking the cut with `...`.
pub(crate) fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

pub(crate) fn stars(count: u8) -> String {
    "*".repeat(usize::from(count))
}

fn print_beers(beers: &[Beer], store: &RatingStore) {
    if beers.is_empty() {
        println!("no beers found");
        return;
    }

    let header = format!(
        "{:<10}{:<34}{:<22}{:<7}{:<5}{:<12}RATED",
        "ID", "NAME", "BREWERY", "ABV", "IBU", "COLOR"
    );
    println!("{header}");
    for beer in beers {
        let rated = store
            .get(&beer.id)
            .map(|r| stars(r.rating))
            .unwrap_or_default();
        println!(
            "{:<10}{:<34}{:<22}{:<7}{:<5}{:<12}{}",
            clip(&beer.id, 8),
            clip(&beer.name, 30),
            clip(&beer.brewery, 18),
            format!("{:.1}%", beer.abv),
            beer.ibu,
            beer.color.as_str(),
            rated
        );
    }
    println!("{} beers", beers.len());
}

fn print_detail(beer: &Beer, store: &RatingStore) {
    println!("{} ({})", beer.name, beer.id);
    println!("{}", beer.style_and_abv());
    println!("Brewery: {}", beer.brewery);
    println!("IBU: {}  Color: {}", beer.ibu, beer.color);
    if let Some(url) = &beer.image_url {
        println!("Image: {url}");
    }
    if !beer.description.is_empty() {
        println!();
        println!("{}", beer.description);
    }
    if let Some(rating) = store.get(&beer.id) {
        println!();
        println!(
            "Your rating: {} ({})",
            stars(rating.rating),
            rating.date.format("%Y-%m-%d")
        );
        if !rating.review.is_empty() {
            println!("Review: {}", rating.review);
        }
    }
}
