//! Listing storage backends
//!
//! The sync engine only depends on the [`ListingFetcher`] seam; this module
//! provides the in-memory implementation used by tests, demos, and the HTTP
//! exposure.
//!
//! [`ListingFetcher`]: crate::core::fetch::ListingFetcher

mod in_memory;

pub use in_memory::InMemoryListings;
