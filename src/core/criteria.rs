//! Filter criteria value types and the UI selection mapping
//!
//! `FilterCriteria` is the fully-defaulted, typed description of what the
//! listings view should show. Optional fields are genuinely optional
//! (`None`), never empty-string sentinels. `Selections` mirrors the discrete
//! UI controls (sort dropdown, tag dropdown, city dropdown) and knows how to
//! translate between the two representations.

use serde::{Deserialize, Serialize};

/// Dropdown value meaning "no filter" for the tag and city controls.
pub const ALL: &str = "all";

/// Field the listings collection is sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Date,
    Price,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::Price => "price",
        }
    }

    /// Parse a query-string value. Unknown values yield `None` so callers
    /// can fall back to the default instead of failing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(SortBy::Date),
            "price" => Some(SortBy::Price),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Optional location constraint
///
/// Absent (`FilterCriteria::location == None`) means "no location filter";
/// a present filter with `city: None` matches everything and is never
/// produced by the setters or the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl LocationFilter {
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
        }
    }
}

/// The user-controlled filter/sort specification
///
/// Always fully defaulted: `sort_by`/`sort_order` are never absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationFilter>,
}

impl FilterCriteria {
    /// The city this criteria filters on, if any
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|loc| loc.city.as_deref())
    }
}

/// The closed enumeration offered by the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortSelection {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl SortSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortSelection::Newest => "newest",
            SortSelection::Oldest => "oldest",
            SortSelection::Highest => "highest",
            SortSelection::Lowest => "lowest",
        }
    }

    /// Parse a dropdown value. This is a closed enumeration: anything else
    /// yields `None` and the caller treats the input as a no-op.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(SortSelection::Newest),
            "oldest" => Some(SortSelection::Oldest),
            "highest" => Some(SortSelection::Highest),
            "lowest" => Some(SortSelection::Lowest),
            _ => None,
        }
    }

    /// Map the friendly label to its `(sort_by, sort_order)` pair
    pub fn sort_pair(&self) -> (SortBy, SortOrder) {
        match self {
            SortSelection::Newest => (SortBy::Date, SortOrder::Desc),
            SortSelection::Oldest => (SortBy::Date, SortOrder::Asc),
            SortSelection::Highest => (SortBy::Price, SortOrder::Desc),
            SortSelection::Lowest => (SortBy::Price, SortOrder::Asc),
        }
    }

    fn from_sort_pair(sort_by: SortBy, sort_order: SortOrder) -> Self {
        match (sort_by, sort_order) {
            (SortBy::Date, SortOrder::Desc) => SortSelection::Newest,
            (SortBy::Date, SortOrder::Asc) => SortSelection::Oldest,
            (SortBy::Price, SortOrder::Desc) => SortSelection::Highest,
            (SortBy::Price, SortOrder::Asc) => SortSelection::Lowest,
        }
    }
}

/// The UI mirror of the three filter controls
///
/// `tag`/`city` hold the literal dropdown value, with [`ALL`] standing for
/// "no filter". Defaults are `newest/all/all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selections {
    pub sort: SortSelection,
    pub tag: String,
    pub city: String,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            sort: SortSelection::default(),
            tag: ALL.to_string(),
            city: ALL.to_string(),
        }
    }
}

impl Selections {
    /// Merge the current selections into a fully-defaulted criteria value
    pub fn criteria(&self) -> FilterCriteria {
        let (sort_by, sort_order) = self.sort.sort_pair();
        FilterCriteria {
            sort_by,
            sort_order,
            tag: (self.tag != ALL).then(|| self.tag.clone()),
            location: (self.city != ALL).then(|| LocationFilter::city(self.city.clone())),
        }
    }

    /// Rebuild the UI mirrors from decoded criteria (used on mount)
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            sort: SortSelection::from_sort_pair(criteria.sort_by, criteria.sort_order),
            tag: criteria.tag.clone().unwrap_or_else(|| ALL.to_string()),
            city: criteria
                .city()
                .map(str::to_string)
                .unwrap_or_else(|| ALL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_date_desc_unfiltered() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.sort_by, SortBy::Date);
        assert_eq!(criteria.sort_order, SortOrder::Desc);
        assert!(criteria.tag.is_none());
        assert!(criteria.location.is_none());
    }

    #[test]
    fn test_sort_selection_mapping() {
        assert_eq!(
            SortSelection::Newest.sort_pair(),
            (SortBy::Date, SortOrder::Desc)
        );
        assert_eq!(
            SortSelection::Oldest.sort_pair(),
            (SortBy::Date, SortOrder::Asc)
        );
        assert_eq!(
            SortSelection::Highest.sort_pair(),
            (SortBy::Price, SortOrder::Desc)
        );
        assert_eq!(
            SortSelection::Lowest.sort_pair(),
            (SortBy::Price, SortOrder::Asc)
        );
    }

    #[test]
    fn test_sort_selection_is_closed() {
        assert!(SortSelection::parse("newest").is_some());
        assert!(SortSelection::parse("cheapest").is_none());
        assert!(SortSelection::parse("").is_none());
        assert!(SortSelection::parse("NEWEST").is_none());
    }

    #[test]
    fn test_selections_all_means_unfiltered() {
        let criteria = Selections::default().criteria();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn test_selections_set_tag_and_city() {
        let selections = Selections {
            sort: SortSelection::Lowest,
            tag: "garden".to_string(),
            city: "Lyon".to_string(),
        };
        let criteria = selections.criteria();
        assert_eq!(criteria.sort_by, SortBy::Price);
        assert_eq!(criteria.sort_order, SortOrder::Asc);
        assert_eq!(criteria.tag.as_deref(), Some("garden"));
        assert_eq!(criteria.city(), Some("Lyon"));
    }

    #[test]
    fn test_selections_round_trip_through_criteria() {
        let selections = Selections {
            sort: SortSelection::Highest,
            tag: "books".to_string(),
            city: ALL.to_string(),
        };
        let rebuilt = Selections::from_criteria(&selections.criteria());
        assert_eq!(rebuilt, selections);
    }

    #[test]
    fn test_from_criteria_defaults_mirrors() {
        let mirrors = Selections::from_criteria(&FilterCriteria::default());
        assert_eq!(mirrors.sort, SortSelection::Newest);
        assert_eq!(mirrors.tag, ALL);
        assert_eq!(mirrors.city, ALL);
    }
}
