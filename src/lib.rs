//! `TourAlytics` - Tourism experience analytics dashboard
//!
//! This library provides the core functionality behind the dashboard:
//! destination recommendations, visit-mode prediction, and insight
//! aggregations over a read-only tourism experience dataset.

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod insights;
pub mod models;
pub mod predict;
pub mod recommend;
pub mod web;

// Re-export core types for public API
pub use config::TouralyticsConfig;
pub use dataset::Dataset;
pub use error::TouralyticsError;
pub use insights::{RegionRating, average_rating_by_region, visit_mode_frequency};
pub use models::{
    AgeGroup, Budget, FilterCriteria, REGION_ALL, RecommendationRow, TourismRecord,
    TravelerProfile, VisitMode,
};
pub use predict::predict;
pub use recommend::recommend;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TouralyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
