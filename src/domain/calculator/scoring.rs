//! Shipment impact scoring.
//!
//! Grades an emission quantity into a letter grade and qualitative level
//! via fixed half-open bands (kg CO2e):
//!
//! | emission      | grade | level      |
//! |---------------|-------|------------|
//! | < 100         | A     | Low        |
//! | [100, 300)    | B     | Medium-Low |
//! | [300, 500)    | C     | Medium     |
//! | ≥ 500         | D     | High       |

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Letter grade for a shipment's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{}", s)
    }
}

/// Qualitative impact level paired with the grade.
///
/// Serializes as the display labels the results view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    Low,
    #[serde(rename = "Medium-Low")]
    MediumLow,
    Medium,
    High,
}

impl ImpactLevel {
    /// Display label, e.g. `Medium-Low`.
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::MediumLow => "Medium-Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A graded emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactScore {
    pub grade: Grade,
    pub level: ImpactLevel,
}

/// Errors from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoringError {
    /// An emission below zero has no meaning; upstream must not produce
    /// one, so it surfaces instead of being clamped.
    #[error("Emission must be non-negative, got {0}")]
    NegativeEmission(f64),

    #[error("Emission must be a finite number")]
    NotFinite,
}

/// Grades an emission quantity in kg CO2e.
///
/// Total over all non-negative finite reals; negative and non-finite
/// inputs are errors.
pub fn score_emission(emission_kg: f64) -> Result<ImpactScore, ScoringError> {
    if emission_kg.is_nan() || emission_kg.is_infinite() {
        return Err(ScoringError::NotFinite);
    }
    if emission_kg < 0.0 {
        return Err(ScoringError::NegativeEmission(emission_kg));
    }

    let score = if emission_kg < 100.0 {
        ImpactScore {
            grade: Grade::A,
            level: ImpactLevel::Low,
        }
    } else if emission_kg < 300.0 {
        ImpactScore {
            grade: Grade::B,
            level: ImpactLevel::MediumLow,
        }
    } else if emission_kg < 500.0 {
        ImpactScore {
            grade: Grade::C,
            level: ImpactLevel::Medium,
        }
    } else {
        ImpactScore {
            grade: Grade::D,
            level: ImpactLevel::High,
        }
    };
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn grades_inside_each_band() {
        assert_eq!(score_emission(0.0).unwrap().grade, Grade::A);
        assert_eq!(score_emission(99.99).unwrap().grade, Grade::A);
        assert_eq!(score_emission(150.0).unwrap().grade, Grade::B);
        assert_eq!(score_emission(452.78).unwrap().grade, Grade::C);
        assert_eq!(score_emission(1200.0).unwrap().grade, Grade::D);
    }

    #[test]
    fn band_boundaries_are_half_open() {
        assert_eq!(score_emission(100.0).unwrap().grade, Grade::B);
        assert_eq!(score_emission(300.0).unwrap().grade, Grade::C);
        assert_eq!(score_emission(500.0).unwrap().grade, Grade::D);
    }

    #[test]
    fn levels_pair_with_grades() {
        assert_eq!(score_emission(50.0).unwrap().level, ImpactLevel::Low);
        assert_eq!(score_emission(100.0).unwrap().level, ImpactLevel::MediumLow);
        assert_eq!(score_emission(499.0).unwrap().level, ImpactLevel::Medium);
        assert_eq!(score_emission(500.0).unwrap().level, ImpactLevel::High);
    }

    #[test]
    fn negative_emission_is_an_error() {
        assert_eq!(
            score_emission(-0.01),
            Err(ScoringError::NegativeEmission(-0.01))
        );
    }

    #[test]
    fn non_finite_emission_is_an_error() {
        assert_eq!(score_emission(f64::NAN), Err(ScoringError::NotFinite));
        assert_eq!(score_emission(f64::INFINITY), Err(ScoringError::NotFinite));
    }

    #[test]
    fn level_labels_render_with_hyphen() {
        assert_eq!(ImpactLevel::MediumLow.label(), "Medium-Low");
        assert_eq!(ImpactLevel::MediumLow.to_string(), "Medium-Low");
    }

    #[test]
    fn level_serializes_as_the_display_label() {
        assert_eq!(
            serde_json::to_string(&ImpactLevel::MediumLow).unwrap(),
            "\"Medium-Low\""
        );
        assert_eq!(serde_json::to_string(&ImpactLevel::High).unwrap(), "\"High\"");
    }

    proptest! {
        /// The scorer is total over non-negative finite reals.
        #[test]
        fn scores_every_non_negative_emission(emission in 0.0f64..1.0e12) {
            prop_assert!(score_emission(emission).is_ok());
        }

        /// Grade and level always move together through the bands.
        #[test]
        fn grade_and_level_agree(emission in 0.0f64..1.0e6) {
            let score = score_emission(emission).unwrap();
            let expected_level = match score.grade {
                Grade::A => ImpactLevel::Low,
                Grade::B => ImpactLevel::MediumLow,
                Grade::C => ImpactLevel::Medium,
                Grade::D => ImpactLevel::High,
            };
            prop_assert_eq!(score.level, expected_level);
        }

        /// Band edges: everything below 100 is an A, everything at or
        /// above 500 is a D.
        #[test]
        fn outer_bands_hold(emission in 0.0f64..100.0, heavy in 500.0f64..1.0e9) {
            prop_assert_eq!(score_emission(emission).unwrap().grade, Grade::A);
            prop_assert_eq!(score_emission(heavy).unwrap().grade, Grade::D);
        }
    }
}
