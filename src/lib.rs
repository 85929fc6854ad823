//! # Agora
//!
//! Filter synchronization and request coalescing engine for community
//! listings views.
//!
//! A listings view has three sources of truth that must stay consistent:
//! the address bar's query string, the in-memory filter selections, and the
//! displayed result list. Agora reconciles them while serializing
//! asynchronous refreshes — at most one fetch is in flight at a time, rapid
//! filter changes collapse to the latest-requested criteria, and a result
//! computed for superseded criteria is never shown.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agora::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryListings::with_listings(listings));
//! let params = Arc::new(MemoryParams::new());
//!
//! // Mount a view: criteria hydrate from the params store.
//! let controller = ListingsController::mount(store, params, None);
//!
//! // Filter controls dispatch into the controller...
//! controller.set_sort_selection("lowest");
//! controller.set_tag_selection("garden");
//!
//! // ...and the renderer observes the resolved view.
//! let view = controller.settled().await;
//! assert!(!view.is_refreshing);
//! ```

pub mod core;
pub mod server;
pub mod storage;
pub mod sync;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        criteria::{ALL, FilterCriteria, LocationFilter, Selections, SortBy, SortOrder, SortSelection},
        error::{AgoraError, AgoraResult},
        fetch::{ListingFetcher, apply_criteria},
        listing::{Listing, ListingLocation},
        query::ListingQuery,
    };

    // === Sync engine ===
    pub use crate::sync::{
        controller::{ListingsController, ViewState},
        params::{MemoryParams, ParamsStore},
    };

    // === Storage ===
    pub use crate::storage::InMemoryListings;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
