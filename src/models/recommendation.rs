//! Filter criteria and ranked results for destination recommendations

use serde::{Deserialize, Serialize};

/// Sentinel offered in the region dropdown meaning "no region restriction"
pub const REGION_ALL: &str = "All";

/// Filter criteria for one recommendation query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Required visit mode, one of the dataset's distinct values
    pub visit_mode: String,
    /// Required attraction type, one of the dataset's distinct values
    pub attraction_type: String,
    /// Optional region restriction; `None` means all regions
    pub region: Option<String>,
}

impl FilterCriteria {
    /// Create criteria without a region restriction
    #[must_use]
    pub fn new(visit_mode: impl Into<String>, attraction_type: impl Into<String>) -> Self {
        Self {
            visit_mode: visit_mode.into(),
            attraction_type: attraction_type.into(),
            region: None,
        }
    }

    /// Restrict the criteria to a single region
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Build criteria from dropdown selections, mapping the "All" sentinel
    /// (or an empty selection) to no region restriction
    #[must_use]
    pub fn from_selection(
        visit_mode: impl Into<String>,
        attraction_type: impl Into<String>,
        region: &str,
    ) -> Self {
        let criteria = Self::new(visit_mode, attraction_type);
        if region.is_empty() || region == REGION_ALL {
            criteria
        } else {
            criteria.with_region(region)
        }
    }
}

/// One ranked destination produced by a recommendation query
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecommendationRow {
    /// Destination city
    pub city: String,
    /// Destination country
    pub country: String,
    /// Mean of the non-null ratings in the destination's matching records
    pub avg_rating: f64,
}
