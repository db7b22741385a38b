//! HTTP DTOs for the NGO directory endpoints.

pub use crate::domain::directory::Organization;

use serde::{Deserialize, Serialize};

use crate::domain::directory::FocusArea;

/// Query string for the directory listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryParams {
    /// Focus chip key (`reforestation`, `clean-energy`, …); absent means "All".
    pub focus: Option<String>,
    /// Free-text search term.
    pub q: Option<String>,
}

/// One selectable focus chip.
#[derive(Debug, Clone, Serialize)]
pub struct FocusChip {
    pub key: FocusArea,
    pub label: &'static str,
}

/// The directory listing plus the chips to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryResponse {
    pub organizations: Vec<Organization>,
    pub focus_areas: Vec<FocusChip>,
}

impl DirectoryResponse {
    pub fn new(organizations: Vec<Organization>) -> Self {
        Self {
            organizations,
            focus_areas: FocusArea::ALL
                .into_iter()
                .map(|focus| FocusChip {
                    key: focus,
                    label: focus.label(),
                })
                .collect(),
        }
    }
}
