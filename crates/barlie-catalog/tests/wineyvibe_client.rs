//! Integration tests for `WineyVibeClient` using wiremock HTTP mocks.

use std::sync::Arc;
use std::time::Duration;

use barlie_catalog::{
    BeerCatalog, Bounds, CatalogError, HttpSettings, Page, RequestQuota, WineyVibeClient,
    WineyVibeEndpoints,
};
use barlie_core::BeerColor;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str, api_key: Option<&str>) -> WineyVibeClient {
    WineyVibeClient::new(
        base_url,
        WineyVibeEndpoints::default(),
        api_key,
        &HttpSettings::default(),
        Arc::new(RequestQuota::new(1000, Duration::from_secs(3600))),
    )
    .expect("client construction should not fail")
}

fn catalog_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "message": null,
        "data": [
            {"id": "wv-1", "name": "Morning Lager", "brewery": "Dawn Co", "style": "Lager", "abv": 4.2, "ibu": 12, "color": "Pale"},
            {"id": "wv-2", "name": "Copper Pot", "brewery": "Kettle Works", "style": "Amber Ale", "abv": 5.4, "ibu": 30, "color": "copper"},
            {"id": "wv-3", "name": "Night Shift", "style": "Imperial Stout", "abv": 9.8, "color": "Pitch"},
            {"name": "Mystery Brew"}
        ]
    })
}

#[tokio::test]
async fn fetch_sends_fixed_headers_and_normalizes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beers"))
        .and(header("accept", "application/json"))
        .and(header("x-api-key", "sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("sekret"));
    let beers = client.fetch_all().await.expect("should fetch");

    assert_eq!(beers.len(), 4);
    assert_eq!(beers[0].color, BeerColor::Pale);
    assert_eq!(beers[1].color, BeerColor::Copper);
    assert_eq!(beers[2].color, BeerColor::Unknown);
    assert_eq!(beers[2].brewery, "Unknown Brewery");
    assert_eq!(beers[3].style, "Unknown");
    assert!(!beers[3].id.is_empty());
}

#[tokio::test]
async fn missing_api_key_sends_no_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header_exists("x-api-key"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    assert!(client.fetch_all().await.is_ok());
}

#[tokio::test]
async fn pages_are_cut_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let second = client
        .fetch_beers(Page::new(2, 3))
        .await
        .expect("should fetch");
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].name, "Mystery Brew");
}

#[tokio::test]
async fn abv_filter_is_applied_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let strong = client
        .strong()
        .await
        .expect("should fetch");
    assert_eq!(strong.len(), 1);
    assert_eq!(strong[0].id, "wv-3");
}

#[tokio::test]
async fn search_sends_q_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "copper pot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [{"id": "wv-2", "name": "Copper Pot", "abv": 5.4}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let hits = BeerCatalog::search(&client, "copper pot", Page::first(25))
        .await
        .expect("search should succeed");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "wv-2");
}

#[tokio::test]
async fn details_template_resolves_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beers/wv-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "wv-2", "name": "Copper Pot", "abv": 5.4, "color": "Copper"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/beers/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    let beer = client
        .get_beer("wv-2")
        .await
        .expect("lookup should succeed")
        .expect("beer should exist");
    assert_eq!(beer.name, "Copper Pot");
    assert_eq!(beer.color, BeerColor::Copper);

    assert!(client.get_beer("nope").await.expect("404 is not an error").is_none());
}

#[tokio::test]
async fn unsuccessful_envelope_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "API key expired",
            "data": null
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Some("old"));
    let err = client.fetch_all().await.unwrap_err();
    assert!(
        matches!(err, CatalogError::Api(ref message) if message == "API key expired"),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn random_picks_from_list_or_none_when_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/beers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), None);
    assert!(client.random_beer().await.expect("should fetch").is_none());
}

#[tokio::test]
async fn custom_endpoints_are_honoured() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = WineyVibeClient::new(
        &format!("{}/api", server.uri()),
        WineyVibeEndpoints {
            beers: "v2/catalog".to_string(),
            details: "v2/catalog/{id}".to_string(),
            search: "v2/find".to_string(),
        },
        None,
        &HttpSettings::default(),
        Arc::new(RequestQuota::new(5, Duration::from_secs(60))),
    )
    .expect("client construction should not fail");

    let light = client
        .filter_by_abv(Bounds::between(0.0, 4.5), Page::first(25))
        .await
        .expect("should fetch");
    assert_eq!(light.len(), 1);
    assert_eq!(light[0].id, "wv-1");
}
