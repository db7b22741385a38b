//! Partner NGO directory.
//!
//! A static table of environmental organizations with focus-area and
//! free-text filtering. Search matches name, campaign, and focus label;
//! the longer description is display-only and deliberately outside the
//! match set.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Focus area of a partner organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FocusArea {
    Reforestation,
    CleanEnergy,
    Logistics,
    Maritime,
}

impl FocusArea {
    /// All filter chips, in display order.
    pub const ALL: [FocusArea; 4] = [
        FocusArea::Reforestation,
        FocusArea::CleanEnergy,
        FocusArea::Logistics,
        FocusArea::Maritime,
    ];

    /// Display label, e.g. `Clean Energy`.
    pub fn label(&self) -> &'static str {
        match self {
            FocusArea::Reforestation => "Reforestation",
            FocusArea::CleanEnergy => "Clean Energy",
            FocusArea::Logistics => "Logistics",
            FocusArea::Maritime => "Maritime",
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FocusArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reforestation" => Ok(FocusArea::Reforestation),
            "clean-energy" => Ok(FocusArea::CleanEnergy),
            "logistics" => Ok(FocusArea::Logistics),
            "maritime" => Ok(FocusArea::Maritime),
            other => Err(ValidationError::invalid_value(
                "focus",
                format!("unknown focus area '{}'", other),
            )),
        }
    }
}

/// One partner organization card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub campaign: String,
    pub description: String,
    /// Headline impact figure, e.g. `Planted 2M trees`.
    pub impact: String,
    pub focus: FocusArea,
}

static DIRECTORY: Lazy<Vec<Organization>> = Lazy::new(|| {
    vec![
        Organization {
            name: "Green Earth Alliance".to_string(),
            campaign: "Global Reforestation Initiative".to_string(),
            description:
                "Focused on restoring vital forest ecosystems and biodiversity across the globe."
                    .to_string(),
            impact: "Planted 2M trees".to_string(),
            focus: FocusArea::Reforestation,
        },
        Organization {
            name: "Clean Energy Coalition".to_string(),
            campaign: "Renewable Transport Network".to_string(),
            description:
                "Accelerating the transition to sustainable energy in logistics and public transport."
                    .to_string(),
            impact: "50K EVs deployed".to_string(),
            focus: FocusArea::CleanEnergy,
        },
        Organization {
            name: "Circular Logistics Network".to_string(),
            campaign: "Zero-Waste Supply Chain".to_string(),
            description:
                "Innovating solutions to create a fully circular economy, eliminating waste in supply chains."
                    .to_string(),
            impact: "100K tons diverted".to_string(),
            focus: FocusArea::Logistics,
        },
        Organization {
            name: "Ocean Guardian Project".to_string(),
            campaign: "Maritime Emissions Reduction".to_string(),
            description:
                "Dedicated to protecting marine life by reducing the carbon footprint of global shipping."
                    .to_string(),
            impact: "500K kg CO2e reduced".to_string(),
            focus: FocusArea::Maritime,
        },
    ]
});

/// The full partner directory.
pub fn directory() -> &'static [Organization] {
    &DIRECTORY
}

/// Filter over the directory: an optional focus chip plus an optional
/// case-insensitive search term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationFilter {
    pub focus: Option<FocusArea>,
    pub query: Option<String>,
}

impl OrganizationFilter {
    /// True when the organization passes both the chip and the search.
    pub fn matches(&self, org: &Organization) -> bool {
        if let Some(focus) = self.focus {
            if org.focus != focus {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                org.name.to_lowercase().contains(&needle)
                    || org.campaign.to_lowercase().contains(&needle)
                    || org.focus.label().to_lowercase().contains(&needle)
            }
        }
    }

    /// Applies the filter over the static directory.
    pub fn apply(&self) -> Vec<Organization> {
        directory()
            .iter()
            .filter(|org| self.matches(org))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_covers_every_focus_area() {
        for focus in FocusArea::ALL {
            assert!(
                directory().iter().any(|org| org.focus == focus),
                "no organization for {:?}",
                focus
            );
        }
    }

    #[test]
    fn empty_filter_returns_everything() {
        assert_eq!(OrganizationFilter::default().apply().len(), 4);
    }

    #[test]
    fn focus_chip_narrows_to_one() {
        let filter = OrganizationFilter {
            focus: Some(FocusArea::Maritime),
            query: None,
        };
        let hits = filter.apply();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ocean Guardian Project");
    }

    #[test]
    fn search_is_case_insensitive_over_name_campaign_and_focus() {
        let by_name = OrganizationFilter {
            focus: None,
            query: Some("green earth".to_string()),
        };
        assert_eq!(by_name.apply().len(), 1);

        let by_campaign = OrganizationFilter {
            focus: None,
            query: Some("ZERO-WASTE".to_string()),
        };
        assert_eq!(by_campaign.apply().len(), 1);

        let by_focus_label = OrganizationFilter {
            focus: None,
            query: Some("clean energy".to_string()),
        };
        assert_eq!(by_focus_label.apply().len(), 1);
    }

    #[test]
    fn search_ignores_the_description() {
        // "biodiversity" appears only in a description.
        let filter = OrganizationFilter {
            focus: None,
            query: Some("biodiversity".to_string()),
        };
        assert!(filter.apply().is_empty());
    }

    #[test]
    fn chip_and_search_combine_with_and() {
        let filter = OrganizationFilter {
            focus: Some(FocusArea::Reforestation),
            query: Some("ocean".to_string()),
        };
        assert!(filter.apply().is_empty());
    }

    #[test]
    fn focus_parses_kebab_case_keys() {
        assert_eq!("clean-energy".parse::<FocusArea>(), Ok(FocusArea::CleanEnergy));
        assert!("solar".parse::<FocusArea>().is_err());
    }
}
