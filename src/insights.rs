//! Insights & trends aggregations
//!
//! Whole-dataset series feeding the two dashboard charts: visit-mode
//! frequency and average rating per region. Both are pure reads with
//! deterministic ordering so chart rendering and tests are reproducible.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Average rating for one region
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegionRating {
    /// Region name
    pub region: String,
    /// Mean of the region's non-null ratings
    pub avg_rating: f64,
}

/// Count of records per visit mode across the whole dataset
///
/// Null visit modes are not counted. Sorted by count descending, then
/// label ascending.
#[must_use]
pub fn visit_mode_frequency(dataset: &Dataset) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for record in dataset.records() {
        if let Some(mode) = record.visit_mode.as_deref() {
            *counts.entry(mode).or_insert(0) += 1;
        }
    }

    let mut frequency: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(mode, count)| (mode.to_string(), count))
        .collect();
    frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequency
}

/// Mean rating per region across the whole dataset
///
/// A record needs a non-null region to join a group and a non-null rating
/// to count toward the mean; regions with no rated records are dropped.
/// Sorted by average descending, then region ascending.
#[must_use]
pub fn average_rating_by_region(dataset: &Dataset) -> Vec<RegionRating> {
    let mut groups: HashMap<&str, (f64, u32)> = HashMap::new();
    for record in dataset.records() {
        let Some(region) = record.region.as_deref() else {
            continue;
        };
        let Some(rating) = record.rating else {
            continue;
        };

        let entry = groups.entry(region).or_insert((0.0, 0));
        entry.0 += rating;
        entry.1 += 1;
    }

    let mut ratings: Vec<RegionRating> = groups
        .into_iter()
        .map(|(region, (sum, count))| RegionRating {
            region: region.to_string(),
            avg_rating: sum / f64::from(count),
        })
        .collect();
    ratings.sort_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| a.region.cmp(&b.region))
    });
    ratings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TourismRecord;

    fn record(visit_mode: Option<&str>, region: Option<&str>, rating: Option<f64>) -> TourismRecord {
        TourismRecord {
            visit_mode: visit_mode.map(String::from),
            attraction_type: Some("Museum".to_string()),
            region: region.map(String::from),
            city: Some("A".to_string()),
            country: Some("X".to_string()),
            rating,
        }
    }

    #[test]
    fn test_visit_mode_frequency_counts_and_order() {
        let dataset = Dataset::from_records(vec![
            record(Some("Solo"), Some("West"), Some(4.0)),
            record(Some("Family"), Some("West"), Some(3.0)),
            record(Some("Solo"), Some("East"), Some(5.0)),
            record(None, Some("East"), Some(2.0)),
        ]);

        let frequency = visit_mode_frequency(&dataset);

        assert_eq!(
            frequency,
            vec![("Solo".to_string(), 2), ("Family".to_string(), 1)]
        );

        // Counts sum to the number of records with a non-null visit mode
        let total: u64 = frequency.iter().map(|(_, count)| count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_visit_mode_frequency_ties_order_by_label() {
        let dataset = Dataset::from_records(vec![
            record(Some("Solo"), None, None),
            record(Some("Family"), None, None),
        ]);

        let frequency = visit_mode_frequency(&dataset);
        assert_eq!(
            frequency,
            vec![("Family".to_string(), 1), ("Solo".to_string(), 1)]
        );
    }

    #[test]
    fn test_average_rating_by_region_sorted_descending() {
        let dataset = Dataset::from_records(vec![
            record(Some("Solo"), Some("West"), Some(4.0)),
            record(Some("Solo"), Some("West"), Some(2.0)),
            record(Some("Family"), Some("East"), Some(5.0)),
            record(Some("Family"), Some("North"), None),
            record(Some("Family"), None, Some(1.0)),
        ]);

        let ratings = average_rating_by_region(&dataset);

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[0].region, "East");
        assert_eq!(ratings[0].avg_rating, 5.0);
        assert_eq!(ratings[1].region, "West");
        assert_eq!(ratings[1].avg_rating, 3.0);

        // Sorted non-increasing
        assert!(ratings[0].avg_rating >= ratings[1].avg_rating);
    }

    #[test]
    fn test_empty_dataset_yields_empty_series() {
        let dataset = Dataset::from_records(vec![]);
        assert!(visit_mode_frequency(&dataset).is_empty());
        assert!(average_rating_by_region(&dataset).is_empty());
    }
}
