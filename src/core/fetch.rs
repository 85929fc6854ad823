//! The pluggable fetch seam and the reference filter/sort semantics
//!
//! The sync engine never assumes HTTP, a specific endpoint, or a storage
//! technology: it is handed a [`ListingFetcher`] and calls it with the
//! criteria it wants displayed. [`apply_criteria`] is the reference
//! semantics any fetcher is expected to honor, used by the in-memory store
//! and by the HTTP exposure.

use crate::core::criteria::{FilterCriteria, SortBy, SortOrder};
use crate::core::listing::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Produces the listings collection matching a criteria value
///
/// Implementations may filter a pre-supplied in-memory collection or call a
/// remote service; the coalescer is agnostic to which.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    async fn fetch(&self, criteria: &FilterCriteria) -> Result<Vec<Listing>>;
}

/// Filter and sort a candidate collection per the given criteria
///
/// A listing is kept iff the tag filter is absent or present in its tags,
/// and the city filter is absent or equal to its city. The sort is stable:
/// ties preserve the prior relative order.
pub fn apply_criteria(items: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
    let mut out: Vec<Listing> = items
        .into_iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .collect();

    out.sort_by(|a, b| {
        let ordering = match criteria.sort_by {
            SortBy::Date => a.created_at.cmp(&b.created_at),
            SortBy::Price => a.sort_price().total_cmp(&b.sort_price()),
        };
        match criteria.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    out
}

fn matches_criteria(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let tag_ok = criteria
        .tag
        .as_deref()
        .is_none_or(|tag| listing.has_tag(tag));
    let city_ok = criteria
        .city()
        .is_none_or(|city| listing.location.city == city);
    tag_ok && city_ok
}
