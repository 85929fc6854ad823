//! Minimal listings server
//!
//! Seeds an in-memory store and serves the filtered collection on
//! `GET /listings`. Try:
//!
//! ```text
//! curl 'http://127.0.0.1:3000/listings?sortBy=price&sortOrder=asc'
//! curl 'http://127.0.0.1:3000/listings?tag=sports&city=Lyon'
//! ```

use agora::prelude::*;
use agora::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let store = InMemoryListings::with_listings(vec![
        Listing::new("City bike", vec!["sports".into()], "Lyon", Some(120.0)),
        Listing::new("Tent, 3 person", vec!["sports".into(), "outdoor".into()], "Lyon", Some(60.0)),
        Listing::new("Paperback novels", vec!["books".into()], "Oslo", Some(8.0)),
        Listing::new("Free couch", vec!["furniture".into()], "Oslo", None),
    ]);

    server::serve("127.0.0.1:3000", Arc::new(store)).await
}
