//! Traveler profile model used by visit-mode prediction

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket offered by the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    Age18To25,
    #[serde(rename = "26-35")]
    Age26To35,
    #[serde(rename = "36-50")]
    Age36To50,
    #[serde(rename = "50+")]
    Age50Plus,
}

impl AgeGroup {
    /// All brackets in form order
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Age18To25,
        AgeGroup::Age26To35,
        AgeGroup::Age36To50,
        AgeGroup::Age50Plus,
    ];

    /// The bracket label as shown in the form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Age18To25 => "18-25",
            AgeGroup::Age26To35 => "26-35",
            AgeGroup::Age36To50 => "36-50",
            AgeGroup::Age50Plus => "50+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel budget tier offered by the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    /// All tiers in form order
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];

    /// The tier label as shown in the form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted visit-mode label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitMode {
    Family,
    Business,
    Solo,
    Friends,
}

impl VisitMode {
    /// The label as rendered to the user
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitMode::Family => "Family",
            VisitMode::Business => "Business",
            VisitMode::Solo => "Solo",
            VisitMode::Friends => "Friends",
        }
    }
}

impl fmt::Display for VisitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Traveler profile inputs for visit-mode prediction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct TravelerProfile {
    /// Age bracket of the traveler
    pub age_group: AgeGroup,
    /// Travel budget tier
    pub budget: Budget,
    /// Number of people traveling together, at least 1
    pub group_size: u32,
}

impl TravelerProfile {
    /// Create a new traveler profile
    #[must_use]
    pub fn new(age_group: AgeGroup, budget: Budget, group_size: u32) -> Self {
        Self {
            age_group,
            budget,
            group_size,
        }
    }
}
