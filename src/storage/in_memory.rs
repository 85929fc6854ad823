//! In-memory listing store for testing, demos, and server-side filtering
//!
//! Holds the full candidate collection behind an `RwLock` and answers
//! fetches by applying the reference filter/sort semantics. Cheap to clone;
//! clones share the same collection.

use crate::core::criteria::FilterCriteria;
use crate::core::fetch::{ListingFetcher, apply_criteria};
use crate::core::listing::Listing;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory listing fetcher implementation
#[derive(Clone, Default)]
pub struct InMemoryListings {
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl InMemoryListings {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a candidate collection
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings: Arc::new(RwLock::new(listings)),
        }
    }

    /// Add a listing to the candidate collection
    pub fn insert(&self, listing: Listing) -> Result<()> {
        let mut listings = self
            .listings
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        listings.push(listing);

        Ok(())
    }

    /// The full unfiltered collection
    pub fn all(&self) -> Result<Vec<Listing>> {
        let listings = self
            .listings
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(listings.clone())
    }
}

#[async_trait]
impl ListingFetcher for InMemoryListings {
    async fn fetch(&self, criteria: &FilterCriteria) -> Result<Vec<Listing>> {
        let candidates = self.all()?;
        Ok(apply_criteria(candidates, criteria))
    }
}
