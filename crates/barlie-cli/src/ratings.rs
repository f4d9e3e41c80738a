//! Rating command handlers for the CLI.

use barlie_core::RatingStore;

use crate::browse::{clip, stars};

/// # Errors
///
/// Returns an error if the star count is invalid or the store cannot be saved.
pub(crate) fn run_rate(
    store: &mut RatingStore,
    beer_id: &str,
    star_count: u8,
    review: &str,
) -> anyhow::Result<()> {
    let rating = store.rate(beer_id, star_count, review)?;
    println!("rated {beer_id} {}", stars(rating.rating));
    Ok(())
}

/// # Errors
///
/// Returns an error if the store cannot be saved.
pub(crate) fn run_unrate(store: &mut RatingStore, beer_id: &str) -> anyhow::Result<()> {
    if store.remove(beer_id)? {
        println!("removed rating for {beer_id}");
    } else {
        println!("{beer_id} was not rated");
    }
    Ok(())
}

pub(crate) fn run_ratings(store: &RatingStore, favorites_only: bool) {
    let stats = store.stats();
    if stats.total == 0 {
        println!("no ratings yet; run `barlie rate <id> <stars>` first");
        return;
    }

    println!(
        "{} rated, average {}",
        stats.total,
        stats.average_label()
    );
    println!();
    println!("{:<12}{:<7}{:<12}REVIEW", "BEER", "STARS", "DATE");

    let favorites = store.favorites();
    for (beer_id, rating) in store.iter() {
        if favorites_only && !favorites.contains(&beer_id) {
            continue;
        }
        println!(
            "{:<12}{:<7}{:<12}{}",
            clip(beer_id, 10),
            stars(rating.rating),
            rating.date.format("%Y-%m-%d"),
            clip(&rating.review, 50)
        );
    }
}
