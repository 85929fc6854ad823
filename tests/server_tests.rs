//! Integration tests for the HTTP exposure: criteria decoding from the
//! query string and filtered/sorted responses.

use agora::prelude::*;
use agora::server;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::Arc;

fn seed() -> Vec<Listing> {
    let mut listings = vec![
        Listing::new("Bike", vec!["sports".into()], "Lyon", Some(120.0)),
        Listing::new("Tent", vec!["sports".into(), "outdoor".into()], "Lyon", Some(60.0)),
        Listing::new("Novel", vec!["books".into()], "Oslo", Some(8.0)),
    ];
    // Deterministic chronological order regardless of clock resolution.
    let base = Utc::now();
    for (hours, listing) in listings.iter_mut().enumerate() {
        listing.created_at = base + chrono::Duration::hours(hours as i64);
    }
    listings
}

fn test_server() -> TestServer {
    let store = InMemoryListings::with_listings(seed());
    let app = server::router(Arc::new(store));
    TestServer::try_new(app).expect("Failed to create test server")
}

fn titles(body: &Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|l| l["title"].as_str().expect("title"))
        .collect()
}

#[tokio::test]
async fn test_list_listings_unfiltered_defaults_to_newest() {
    let server = test_server();

    let response = server.get("/listings").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["criteria"]["sortBy"], "date");
    assert_eq!(body["criteria"]["sortOrder"], "desc");
    // Seeded in chronological order, so newest-first reverses it.
    assert_eq!(titles(&body), vec!["Novel", "Tent", "Bike"]);
}

#[tokio::test]
async fn test_list_listings_filters_by_tag_and_city() {
    let server = test_server();

    let response = server.get("/listings?tag=sports&city=Lyon").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 2);
    assert!(titles(&body).iter().all(|t| *t == "Bike" || *t == "Tent"));
}

#[tokio::test]
async fn test_list_listings_sorts_by_price_ascending() {
    let server = test_server();

    let response = server.get("/listings?sortBy=price&sortOrder=asc").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(titles(&body), vec!["Novel", "Tent", "Bike"]);
    assert_eq!(body["criteria"]["sortBy"], "price");
}

#[tokio::test]
async fn test_malformed_sort_params_fall_back_to_defaults() {
    let server = test_server();

    let response = server.get("/listings?sortBy=popularity&sortOrder=up").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["criteria"]["sortBy"], "date");
    assert_eq!(body["criteria"]["sortOrder"], "desc");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_unmatched_filter_returns_empty_collection() {
    let server = test_server();

    let response = server.get("/listings?tag=vehicles").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["total"], 0);
    assert!(body["data"].as_array().expect("data array").is_empty());
}
