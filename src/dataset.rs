//! Dataset Loading Module
//!
//! Loads the cleaned tourism experience CSV once at startup into an
//! immutable in-memory snapshot. The snapshot is shared by reference
//! across all queries for the lifetime of the process; nothing mutates it.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::Result;
use crate::error::TouralyticsError;
use crate::models::TourismRecord;

/// Columns the source CSV must carry; extra columns are ignored
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "VisitMode",
    "AttractionType",
    "Region",
    "City",
    "Country",
    "Rating",
];

/// Immutable snapshot of the tourism experience dataset
///
/// Holds the records plus the distinct categorical values offered as
/// filter choices, each sorted ascending with nulls excluded.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<TourismRecord>,
    visit_modes: Vec<String>,
    attraction_types: Vec<String>,
    regions: Vec<String>,
}

impl Dataset {
    /// Load the dataset from a CSV file
    ///
    /// A missing file, malformed header, or unparseable rating value is a
    /// fatal error; the application must not start with a partial dataset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TouralyticsError::dataset(format!(
                "Dataset file not found: {}",
                path.display()
            )));
        }

        debug!("Loading dataset from {}", path.display());
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| {
                TouralyticsError::dataset(format!("Failed to open {}: {e}", path.display()))
            })?;

        let dataset = Self::from_csv(reader)?;

        info!(
            "Loaded {} tourism records ({} visit modes, {} attraction types, {} regions)",
            dataset.records.len(),
            dataset.visit_modes.len(),
            dataset.attraction_types.len(),
            dataset.regions.len()
        );

        Ok(dataset)
    }

    /// Build a dataset from any CSV source with a header row
    pub fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader
            .headers()
            .map_err(|e| TouralyticsError::dataset(format!("Failed to read header row: {e}")))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(TouralyticsError::dataset(format!(
                "Missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize().enumerate() {
            // Header occupies line 1, so data starts at line 2
            let record: TourismRecord = row.map_err(|e| {
                TouralyticsError::dataset(format!("Invalid record at line {}: {e}", index + 2))
            })?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    /// Build a dataset from already-parsed records
    #[must_use]
    pub fn from_records(records: Vec<TourismRecord>) -> Self {
        let mut visit_modes = BTreeSet::new();
        let mut attraction_types = BTreeSet::new();
        let mut regions = BTreeSet::new();

        for record in &records {
            if let Some(mode) = &record.visit_mode {
                visit_modes.insert(mode.clone());
            }
            if let Some(kind) = &record.attraction_type {
                attraction_types.insert(kind.clone());
            }
            if let Some(region) = &record.region {
                regions.insert(region.clone());
            }
        }

        Self {
            records,
            visit_modes: visit_modes.into_iter().collect(),
            attraction_types: attraction_types.into_iter().collect(),
            regions: regions.into_iter().collect(),
        }
    }

    /// All records in the snapshot
    #[must_use]
    pub fn records(&self) -> &[TourismRecord] {
        &self.records
    }

    /// Number of records in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-null visit modes, sorted ascending
    #[must_use]
    pub fn visit_modes(&self) -> &[String] {
        &self.visit_modes
    }

    /// Distinct non-null attraction types, sorted ascending
    #[must_use]
    pub fn attraction_types(&self) -> &[String] {
        &self.attraction_types
    }

    /// Distinct non-null regions, sorted ascending
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_from(data: &str) -> Result<Dataset> {
        Dataset::from_csv(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn test_distinct_values_sorted_and_nulls_excluded() {
        let dataset = dataset_from(
            "VisitMode,AttractionType,Region,City,Country,Rating\n\
             Solo,Museum,West,A,X,4\n\
             Family,Beach,,B,Y,5\n\
             ,Museum,East,C,Z,3\n",
        )
        .unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.visit_modes(), ["Family", "Solo"]);
        assert_eq!(dataset.attraction_types(), ["Beach", "Museum"]);
        assert_eq!(dataset.regions(), ["East", "West"]);
    }

    #[test]
    fn test_missing_required_column_is_fatal() {
        let result = dataset_from(
            "VisitMode,AttractionType,Region,City,Country\n\
             Solo,Museum,West,A,X\n",
        );

        let err = result.unwrap_err();
        assert!(matches!(err, TouralyticsError::DatasetLoad { .. }));
        assert!(err.to_string().contains("Rating"));
    }

    #[test]
    fn test_unparseable_rating_is_fatal() {
        let result = dataset_from(
            "VisitMode,AttractionType,Region,City,Country,Rating\n\
             Solo,Museum,West,A,X,great\n",
        );

        let err = result.unwrap_err();
        assert!(matches!(err, TouralyticsError::DatasetLoad { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let dataset = dataset_from(
            "VisitMode,AttractionType,Region,City,Country,Rating,UserId\n\
             Solo,Museum,West,A,X,4,42\n",
        )
        .unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].rating, Some(4.0));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = Dataset::load("does/not/exist.csv");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
