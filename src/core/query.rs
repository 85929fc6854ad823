//! Query parameter decode/encode for filter criteria
//!
//! The address bar is one of the three sources of truth the sync engine
//! reconciles. This module translates between the query-string
//! representation (`sortBy`, `sortOrder`, `tag`, `city`) and the typed
//! [`FilterCriteria`].
//!
//! Decoding is defensive: unrecognized `sortBy`/`sortOrder` values fall back
//! to the defaults (`date`/`desc`) rather than failing page load, and empty
//! parameter values are treated as absent so no empty-string sentinel ever
//! reaches the fetch layer.
//!
//! # Example
//! ```rust,ignore
//! // In handler:
//! pub async fn list_listings(
//!     Query(query): Query<ListingQuery>,
//! ) -> Json<ListingsResponse> {
//!     let criteria = query.criteria();
//!     // ...
//! }
//!
//! // Usage:
//! GET /listings?sortBy=price&sortOrder=asc
//! GET /listings?tag=garden&city=Lyon
//! ```

use crate::core::criteria::{FilterCriteria, LocationFilter, SortBy, SortOrder};
use crate::core::error::{AgoraError, AgoraResult};
use serde::Deserialize;
use std::collections::HashMap;

/// Query parameter names read from and written to the address bar.
pub const PARAM_SORT_BY: &str = "sortBy";
pub const PARAM_SORT_ORDER: &str = "sortOrder";
pub const PARAM_TAG: &str = "tag";
pub const PARAM_CITY: &str = "city";

/// Raw query parameters for the listings collection
///
/// All parameters are optional; [`ListingQuery::criteria`] resolves them
/// into a fully-defaulted [`FilterCriteria`].
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingQuery {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub tag: Option<String>,
    pub city: Option<String>,
}

impl ListingQuery {
    /// Resolve the raw parameters into criteria, applying defaults for
    /// anything missing or unrecognized
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            sort_by: resolve(&self.sort_by, SortBy::parse),
            sort_order: resolve(&self.sort_order, SortOrder::parse),
            tag: non_empty(&self.tag),
            location: non_empty(&self.city).map(LocationFilter::city),
        }
    }

    /// Strict variant of [`ListingQuery::criteria`]: an unrecognized sort
    /// value is an error instead of falling back to the default. Hosts that
    /// prefer rejecting bad links over silently correcting them use this.
    pub fn try_criteria(&self) -> AgoraResult<FilterCriteria> {
        resolve_strict(&self.sort_by, SortBy::parse, PARAM_SORT_BY)?;
        resolve_strict(&self.sort_order, SortOrder::parse, PARAM_SORT_ORDER)?;
        Ok(self.criteria())
    }
}

fn resolve_strict<T>(
    raw: &Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    param: &str,
) -> AgoraResult<()> {
    match raw.as_deref() {
        Some(value) if !value.is_empty() && parse(value).is_none() => {
            Err(AgoraError::InvalidParam {
                param: param.to_string(),
                value: value.to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn resolve<T: Default>(raw: &Option<String>, parse: impl Fn(&str) -> Option<T>) -> T {
    raw.as_deref().and_then(parse).unwrap_or_default()
}

fn non_empty(raw: &Option<String>) -> Option<String> {
    raw.as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Decode criteria from a params map (the on-mount hydration path)
pub fn decode(params: &HashMap<String, String>) -> FilterCriteria {
    let query = ListingQuery {
        sort_by: params.get(PARAM_SORT_BY).cloned(),
        sort_order: params.get(PARAM_SORT_ORDER).cloned(),
        tag: params.get(PARAM_TAG).cloned(),
        city: params.get(PARAM_CITY).cloned(),
    };
    query.criteria()
}

/// Encode criteria as params-store updates
///
/// Every known key is emitted: `Some` sets the key, `None` deletes it, so a
/// previously-set tag or city disappears from the query string when the
/// criteria no longer carries it.
pub fn encode(criteria: &FilterCriteria) -> Vec<(&'static str, Option<String>)> {
    vec![
        (PARAM_SORT_BY, Some(criteria.sort_by.as_str().to_string())),
        (
            PARAM_SORT_ORDER,
            Some(criteria.sort_order.as_str().to_string()),
        ),
        (PARAM_TAG, criteria.tag.clone()),
        (PARAM_CITY, criteria.city().map(str::to_string)),
    ]
}
