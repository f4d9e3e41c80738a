use std::time::Duration;

use super::*;

fn test_client(base_url: &str) -> PunkClient {
    PunkClient::new(
        base_url,
        &HttpSettings::default(),
        Arc::new(RequestQuota::new(3600, Duration::from_secs(3600))),
    )
    .expect("client construction should not fail")
}

#[test]
fn beers_url_puts_paging_first() {
    let client = test_client(DEFAULT_BASE_URL);
    let url = client.beers_url(Page::new(2, 25), &[]).unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.punkapi.com/v2/beers?page=2&per_page=25"
    );
}

#[test]
fn beers_url_appends_filters_after_paging() {
    let client = test_client("https://api.punkapi.com/v2/");
    let url = client
        .beers_url(
            Page::first(25),
            &[("abv_gt", format_bound(7.0)), ("abv_lt", format_bound(15.0))],
        )
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.punkapi.com/v2/beers?page=1&per_page=25&abv_gt=7.0&abv_lt=15.0"
    );
}

#[test]
fn range_keys_per_attribute() {
    assert_eq!(RangeAttribute::Abv.query_keys(), ("abv_gt", "abv_lt"));
    assert_eq!(RangeAttribute::Ibu.query_keys(), ("ibu_gt", "ibu_lt"));
    assert_eq!(RangeAttribute::Ebc.query_keys(), ("ebc_gt", "ebc_lt"));
}

#[test]
fn brew_date_renders_month_and_year() {
    let date = NaiveDate::from_ymd_opt(2010, 3, 17).unwrap();
    assert_eq!(
        BrewDate::Before(date).query_pair(),
        ("brewed_before", "03-2010".to_string())
    );
    assert_eq!(
        BrewDate::After(date).query_pair(),
        ("brewed_after", "03-2010".to_string())
    );
}

#[tokio::test]
async fn non_numeric_id_fails_before_any_request() {
    let client = test_client("http://127.0.0.1:9");
    let result = BeerCatalog::get_beer(&client, "abc").await;
    assert!(
        matches!(result, Err(CatalogError::InvalidUrl { .. })),
        "expected InvalidUrl, got: {result:?}"
    );
    assert_eq!(client.quota().used(), 0);
}
