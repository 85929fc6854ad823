//! Core types: filter criteria, the listing record, query param
//! translation, errors, and the fetch seam

pub mod criteria;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod query;

pub use criteria::{ALL, FilterCriteria, LocationFilter, Selections, SortBy, SortOrder, SortSelection};
pub use error::{AgoraError, AgoraResult, ErrorResponse};
pub use fetch::{ListingFetcher, apply_criteria};
pub use listing::{Listing, ListingLocation};
pub use query::ListingQuery;
