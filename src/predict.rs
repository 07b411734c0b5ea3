//! Visit-mode prediction
//!
//! A fixed, priority-ordered decision table over the traveler profile.
//! This is a placeholder heuristic, not a trained model; the rule order is
//! part of the contract. Each condition is only checked when all earlier
//! ones failed, so a high-budget group of four is Family, never Business.

use crate::models::{AgeGroup, Budget, TravelerProfile, VisitMode};

/// Predict the most likely visit mode for a traveler profile
///
/// Total over all well-formed profiles; every profile yields exactly one label.
#[must_use]
pub fn predict(profile: &TravelerProfile) -> VisitMode {
    if profile.group_size >= 4 {
        VisitMode::Family
    } else if profile.budget == Budget::High {
        VisitMode::Business
    } else if profile.age_group == AgeGroup::Age18To25 {
        VisitMode::Solo
    } else {
        VisitMode::Friends
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // Group size dominates everything else
    #[case(AgeGroup::Age18To25, Budget::High, 4, VisitMode::Family)]
    #[case(AgeGroup::Age50Plus, Budget::Low, 7, VisitMode::Family)]
    // Budget dominates age
    #[case(AgeGroup::Age18To25, Budget::High, 1, VisitMode::Business)]
    #[case(AgeGroup::Age36To50, Budget::High, 3, VisitMode::Business)]
    // Age rule applies only below the earlier thresholds
    #[case(AgeGroup::Age18To25, Budget::Low, 1, VisitMode::Solo)]
    #[case(AgeGroup::Age18To25, Budget::Medium, 3, VisitMode::Solo)]
    // Fallback
    #[case(AgeGroup::Age36To50, Budget::Low, 2, VisitMode::Friends)]
    #[case(AgeGroup::Age26To35, Budget::Medium, 1, VisitMode::Friends)]
    fn test_decision_table(
        #[case] age_group: AgeGroup,
        #[case] budget: Budget,
        #[case] group_size: u32,
        #[case] expected: VisitMode,
    ) {
        let profile = TravelerProfile::new(age_group, budget, group_size);
        assert_eq!(predict(&profile), expected);
    }

    #[test]
    fn test_every_profile_yields_a_label() {
        for age_group in AgeGroup::ALL {
            for budget in Budget::ALL {
                for group_size in 1..=10 {
                    let profile = TravelerProfile::new(age_group, budget, group_size);
                    // Must not panic; the table is total
                    let _ = predict(&profile);
                }
            }
        }
    }

    #[test]
    fn test_boundary_at_group_size_four() {
        let three = TravelerProfile::new(AgeGroup::Age26To35, Budget::Low, 3);
        let four = TravelerProfile::new(AgeGroup::Age26To35, Budget::Low, 4);
        assert_eq!(predict(&three), VisitMode::Friends);
        assert_eq!(predict(&four), VisitMode::Family);
    }
}
