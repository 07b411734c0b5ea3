//! Data models for the TourAlytics application
//!
//! This module contains the core domain models organized by concern:
//! - Record: one row of the tourism experience dataset
//! - Profile: traveler profile inputs for visit-mode prediction
//! - Recommendation: filter criteria and ranked destination results

pub mod profile;
pub mod record;
pub mod recommendation;

// Re-export all public types for convenient access
pub use profile::{AgeGroup, Budget, TravelerProfile, VisitMode};
pub use record::TourismRecord;
pub use recommendation::{FilterCriteria, RecommendationRow, REGION_ALL};
