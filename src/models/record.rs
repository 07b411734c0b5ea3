//! Record model for one row of the tourism experience dataset

use serde::{Deserialize, Serialize};

/// One tourism visit record
///
/// Every field may be missing in the source data; empty CSV fields
/// deserialize to `None`. Operations skip records that are missing the
/// fields they need rather than failing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TourismRecord {
    /// Trip context of the visit (e.g. Solo, Family, Business, Friends)
    #[serde(rename = "VisitMode")]
    pub visit_mode: Option<String>,
    /// Kind of destination or activity (e.g. Museum, Beach)
    #[serde(rename = "AttractionType")]
    pub attraction_type: Option<String>,
    /// Geographic grouping coarser than city/country
    #[serde(rename = "Region")]
    pub region: Option<String>,
    /// Destination city
    #[serde(rename = "City")]
    pub city: Option<String>,
    /// Destination country
    #[serde(rename = "Country")]
    pub country: Option<String>,
    /// Traveler-submitted score, expected range 1-5
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
}

impl TourismRecord {
    /// The (city, country) pair identifying the destination, when both are present
    #[must_use]
    pub fn destination(&self) -> Option<(&str, &str)> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) => Some((city, country)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: Option<&str>, country: Option<&str>) -> TourismRecord {
        TourismRecord {
            visit_mode: Some("Solo".to_string()),
            attraction_type: Some("Museum".to_string()),
            region: Some("West".to_string()),
            city: city.map(String::from),
            country: country.map(String::from),
            rating: Some(4.0),
        }
    }

    #[test]
    fn test_destination_requires_both_fields() {
        assert_eq!(
            record(Some("Lisbon"), Some("Portugal")).destination(),
            Some(("Lisbon", "Portugal"))
        );
        assert_eq!(record(Some("Lisbon"), None).destination(), None);
        assert_eq!(record(None, Some("Portugal")).destination(), None);
    }

    #[test]
    fn test_csv_row_with_empty_fields_deserializes_to_none() {
        let data = "VisitMode,AttractionType,Region,City,Country,Rating\n\
                    Solo,Museum,,Lisbon,Portugal,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let record: TourismRecord = reader
            .deserialize()
            .next()
            .expect("one row")
            .expect("valid row");

        assert_eq!(record.visit_mode.as_deref(), Some("Solo"));
        assert_eq!(record.region, None);
        assert_eq!(record.rating, None);
    }
}
