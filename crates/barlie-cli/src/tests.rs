use barlie_core::{Beer, BeerColor, BeerStyle, RatingStore};

use super::*;
use crate::browse::{clip, filter_style, parse_style};

#[test]
fn parses_browse_with_pages() {
    let cli = Cli::try_parse_from(["barlie", "browse", "--pages", "3"]).expect("expected valid cli args");

    assert_eq!(cli.provider, Provider::Punk);
    assert!(matches!(cli.command, Commands::Browse { pages: 3 }));
}

#[test]
fn browse_defaults_to_one_page() {
    let cli = Cli::try_parse_from(["barlie", "browse"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Browse { pages: 1 }));
}

#[test]
fn provider_flag_is_global() {
    let cli = Cli::try_parse_from(["barlie", "search", "hazy", "--provider", "wineyvibe"])
        .expect("expected valid cli args");

    assert_eq!(cli.provider, Provider::WineyVibe);
    assert!(matches!(cli.command, Commands::Search { ref query } if query == "hazy"));
}

#[test]
fn parses_abv_bounds() {
    let cli = Cli::try_parse_from(["barlie", "abv", "--min", "7", "--max", "15"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Abv { min, max } => {
            assert_eq!(min, Some(7.0));
            assert_eq!(max, Some(15.0));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn abv_bounds_are_optional() {
    let cli = Cli::try_parse_from(["barlie", "abv", "--max", "4.5"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Abv {
            min: None,
            max: Some(_)
        }
    ));
}

#[test]
fn parses_style_filter() {
    let cli = Cli::try_parse_from(["barlie", "popular", "--style", "IPA"]).expect("expected valid cli args");
    assert_eq!(cli.style.as_deref(), Some("IPA"));
    assert!(matches!(cli.command, Commands::Popular));
}

#[test]
fn parses_brewed_before_as_month() {
    let cli = Cli::try_parse_from(["barlie", "brewed", "--before", "03-2010"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Brewed { before, after } => {
            assert_eq!(before, NaiveDate::from_ymd_opt(2010, 3, 1));
            assert!(after.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn brewed_requires_exactly_one_bound() {
    assert!(Cli::try_parse_from(["barlie", "brewed"]).is_err());
    assert!(Cli::try_parse_from([
        "barlie", "brewed", "--before", "03-2010", "--after", "01-2008"
    ])
    .is_err());
}

#[test]
fn brewed_rejects_bad_month() {
    assert!(Cli::try_parse_from(["barlie", "brewed", "--after", "2010-03"]).is_err());
    assert!(Cli::try_parse_from(["barlie", "brewed", "--after", "13-2010"]).is_err());
}

#[test]
fn parses_rate_with_review() {
    let cli = Cli::try_parse_from(["barlie", "rate", "192", "4", "--review", "Bright and bitter"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Rate {
            beer_id,
            stars,
            review,
        } => {
            assert_eq!(beer_id, "192");
            assert_eq!(stars, 4);
            assert_eq!(review, "Bright and bitter");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rate_rejects_out_of_range_stars() {
    assert!(Cli::try_parse_from(["barlie", "rate", "192", "0"]).is_err());
    assert!(Cli::try_parse_from(["barlie", "rate", "192", "6"]).is_err());
}

#[test]
fn parses_ratings_favorites() {
    let cli = Cli::try_parse_from(["barlie", "ratings", "--favorites"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Ratings { favorites: true }));
}

#[test]
fn only_styles_runs_without_config() {
    let styles = Cli::try_parse_from(["barlie", "styles"]).expect("expected valid cli args");
    assert!(runs_offline(&styles.command));

    for args in [["barlie", "popular"], ["barlie", "ratings"]] {
        let cli = Cli::try_parse_from(args).expect("expected valid cli args");
        assert!(!runs_offline(&cli.command), "{args:?} needs config");
    }
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["barlie"]).is_err());
}

#[test]
fn parse_style_defaults_to_all_and_rejects_unknown() {
    assert_eq!(parse_style(None).unwrap(), BeerStyle::All);
    assert_eq!(parse_style(Some("stout")).unwrap(), BeerStyle::Stout);
    let err = parse_style(Some("Alcopop")).unwrap_err();
    assert!(err.to_string().contains("unknown style 'Alcopop'"));
}

#[test]
fn filter_style_keeps_matching_beers() {
    let beer = |id: &str, style: &str| Beer {
        id: id.to_string(),
        name: format!("Beer {id}"),
        brewery: "Test".to_string(),
        style: style.to_string(),
        abv: 5.0,
        ibu: 30,
        color: BeerColor::Amber,
        description: String::new(),
        image_url: None,
    };
    let beers = vec![beer("1", "American IPA"), beer("2", "Dry Stout"), beer("3", "Session IPA")];

    let ipas = filter_style(beers.clone(), BeerStyle::Ipa);
    assert_eq!(ipas.len(), 2);
    assert_eq!(filter_style(beers, BeerStyle::All).len(), 3);
}

#[test]
fn clip_marks_truncation() {
    assert_eq!(clip("Punk IPA", 20), "Punk IPA");
    assert_eq!(clip("Elvis Juice", 5), "Elvis...");
}

#[test]
fn rate_and_unrate_persist_through_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = RatingStore::open(dir.path()).expect("open store");

    ratings::run_rate(&mut store, "192", 5, "Classic").expect("rate");
    let reopened = RatingStore::open(dir.path()).expect("reopen store");
    assert_eq!(reopened.get("192").map(|r| r.rating), Some(5));

    ratings::run_unrate(&mut store, "192").expect("unrate");
    let reopened = RatingStore::open(dir.path()).expect("reopen store");
    assert!(reopened.get("192").is_none());
}

#[test]
fn parses_list_move_with_default_lists() {
    let cli = Cli::try_parse_from(["barlie", "list", "move", "192"]).expect("expected valid cli args");
    match cli.command {
        Commands::List {
            action: ListAction::Move { beer_id, from, to },
        } => {
            assert_eq!(beer_id, "192");
            assert_eq!(from, "Next");
            assert_eq!(to, "Drank");
        }
        other => panic!("expected list move, got {other:?}"),
    }
}

#[test]
fn list_commands_persist_through_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = BeerListStore::open(dir.path()).expect("open store");

    let add = ListAction::Add {
        list: "next".to_string(),
        beer_id: "192".to_string(),
    };
    lists::run(&mut store, add).expect("add");
    let moved = ListAction::Move {
        beer_id: "192".to_string(),
        from: "Next".to_string(),
        to: "Drank".to_string(),
    };
    lists::run(&mut store, moved).expect("move");

    let reopened = BeerListStore::open(dir.path()).expect("reopen store");
    assert!(reopened.get("Drank").is_some_and(|l| l.contains("192")));

    let unknown = ListAction::Show {
        name: Some("Wishlist".to_string()),
    };
    assert!(lists::run(&mut store, unknown).is_err());
}
