//! Destination recommendation query
//!
//! Filters the dataset by visit mode, attraction type and optional region,
//! groups the surviving records by destination, ranks destinations by mean
//! rating and truncates to the requested count.

use std::collections::HashMap;

use tracing::debug;

use crate::Result;
use crate::dataset::Dataset;
use crate::error::TouralyticsError;
use crate::models::{FilterCriteria, RecommendationRow};

/// Run a recommendation query against the dataset snapshot
///
/// Returns at most `limit` destinations sorted by average rating descending.
/// Ties are broken by city then country ascending, so equal-rated
/// destinations always come back in the same order. An empty result is a
/// valid answer, not an error.
pub fn recommend(
    dataset: &Dataset,
    criteria: &FilterCriteria,
    limit: usize,
) -> Result<Vec<RecommendationRow>> {
    validate_criteria(dataset, criteria, limit)?;

    // Accumulate (rating sum, rating count) per destination; records with a
    // null rating contribute nothing, and destinations that never receive a
    // rated record drop out entirely.
    let mut groups: HashMap<(String, String), (f64, u32)> = HashMap::new();

    for record in dataset.records() {
        if record.visit_mode.as_deref() != Some(criteria.visit_mode.as_str()) {
            continue;
        }
        if record.attraction_type.as_deref() != Some(criteria.attraction_type.as_str()) {
            continue;
        }
        if let Some(region) = &criteria.region
            && record.region.as_deref() != Some(region.as_str())
        {
            continue;
        }

        let Some((city, country)) = record.destination() else {
            continue;
        };
        let Some(rating) = record.rating else {
            continue;
        };

        let entry = groups
            .entry((city.to_string(), country.to_string()))
            .or_insert((0.0, 0));
        entry.0 += rating;
        entry.1 += 1;
    }

    let mut rows: Vec<RecommendationRow> = groups
        .into_iter()
        .map(|((city, country), (sum, count))| RecommendationRow {
            city,
            country,
            avg_rating: sum / f64::from(count),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.avg_rating
            .total_cmp(&a.avg_rating)
            .then_with(|| a.city.cmp(&b.city))
            .then_with(|| a.country.cmp(&b.country))
    });
    rows.truncate(limit);

    debug!(
        "Recommendation query for {}/{} returned {} destinations",
        criteria.visit_mode,
        criteria.attraction_type,
        rows.len()
    );

    Ok(rows)
}

/// Defensive validation against the dataset's known distinct values
///
/// The UI only offers dataset-derived choices, so these failures should not
/// occur through the normal surface.
fn validate_criteria(dataset: &Dataset, criteria: &FilterCriteria, limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(TouralyticsError::invalid_criteria(
            "Recommendation count must be at least 1",
        ));
    }

    if !dataset
        .visit_modes()
        .iter()
        .any(|v| v == &criteria.visit_mode)
    {
        return Err(TouralyticsError::invalid_criteria(format!(
            "Unknown visit mode '{}'",
            criteria.visit_mode
        )));
    }

    if !dataset
        .attraction_types()
        .iter()
        .any(|v| v == &criteria.attraction_type)
    {
        return Err(TouralyticsError::invalid_criteria(format!(
            "Unknown attraction type '{}'",
            criteria.attraction_type
        )));
    }

    if let Some(region) = &criteria.region
        && !dataset.regions().iter().any(|v| v == region)
    {
        return Err(TouralyticsError::invalid_criteria(format!(
            "Unknown region '{region}'"
        )));
    }

    Ok(())
}
