//! Offset marketplace project listings.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Funding state of a marketplace listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Live,
    #[default]
    Funding,
    /// Also the bucket for any status the backend invents later.
    #[serde(other)]
    Waitlist,
}

/// One crowdfunded offset project.
///
/// SDG alignment tags are display-only metadata. Sparse live entries
/// default their missing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffsetProject {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub price_per_tonne: f64,
    #[serde(default)]
    pub expected_impact: String,
    #[serde(default)]
    pub sdg_alignment: Vec<String>,
    #[serde(default)]
    pub status: ProjectStatus,
}

static FALLBACK: Lazy<Vec<OffsetProject>> = Lazy::new(|| {
    vec![
        OffsetProject {
            id: "project-urban-forest".to_string(),
            title: "Bronx Urban Forest Pods".to_string(),
            summary: "Plant modular forests cooling trucking corridors with community revenue share."
                .to_string(),
            price_per_tonne: 14.5,
            expected_impact: "1,200 tCO₂e avoided".to_string(),
            sdg_alignment: vec![
                "SDG 11".to_string(),
                "SDG 13".to_string(),
                "SDG 15".to_string(),
            ],
            status: ProjectStatus::Funding,
        },
        OffsetProject {
            id: "project-blue-carbon".to_string(),
            title: "Gulf Coast Blue Carbon Labs".to_string(),
            summary: "Autonomous drones restore wetlands and capture methane hotspots.".to_string(),
            price_per_tonne: 22.0,
            expected_impact: "2,750 tCO₂e sequestered".to_string(),
            sdg_alignment: vec![
                "SDG 9".to_string(),
                "SDG 13".to_string(),
                "SDG 14".to_string(),
            ],
            status: ProjectStatus::Live,
        },
        OffsetProject {
            id: "project-biochar".to_string(),
            title: "Appalachia Biochar Collective".to_string(),
            summary: "Convert sawmill waste into regenerative soil biochar with profit sharing."
                .to_string(),
            price_per_tonne: 18.75,
            expected_impact: "950 tCO₂e locked per cycle".to_string(),
            sdg_alignment: vec![
                "SDG 8".to_string(),
                "SDG 12".to_string(),
                "SDG 13".to_string(),
            ],
            status: ProjectStatus::Waitlist,
        },
    ]
});

/// The staged listings shown when the backend is unreachable or
/// returns an empty list.
pub fn fallback_projects() -> Vec<OffsetProject> {
    FALLBACK.clone()
}

/// Number of listings currently live.
pub fn live_count(projects: &[OffsetProject]) -> usize {
    projects
        .iter()
        .filter(|project| project.status == ProjectStatus::Live)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_three_curated_projects() {
        let projects = fallback_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(live_count(&projects), 1);
    }

    #[test]
    fn sparse_live_entries_default_missing_fields() {
        let project: OffsetProject =
            serde_json::from_str(r#"{"id": "project-x", "title": "Kelp Highways"}"#).unwrap();
        assert_eq!(project.price_per_tonne, 0.0);
        assert_eq!(project.status, ProjectStatus::Funding);
        assert!(project.sdg_alignment.is_empty());
    }

    #[test]
    fn unknown_status_coerces_to_waitlist() {
        let project: OffsetProject = serde_json::from_str(
            r#"{"id": "project-x", "title": "Kelp Highways", "status": "archived"}"#,
        )
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Waitlist);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Live).unwrap(),
            "\"live\""
        );
    }
}
