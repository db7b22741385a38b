//! SearchOrganizationsHandler - NGO directory filtering.

use crate::domain::directory::{FocusArea, Organization, OrganizationFilter};

/// Query over the partner directory.
#[derive(Debug, Clone, Default)]
pub struct SearchOrganizationsQuery {
    /// Focus chip; `None` is the "All" chip.
    pub focus: Option<FocusArea>,
    /// Free-text search over name, campaign, and focus label.
    pub query: Option<String>,
}

/// Handler filtering the static directory.
///
/// Stateless: the directory is reference data, so there is no port
/// behind this handler.
#[derive(Debug, Clone, Default)]
pub struct SearchOrganizationsHandler;

impl SearchOrganizationsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: SearchOrganizationsQuery) -> Vec<Organization> {
        OrganizationFilter {
            focus: query.focus,
            query: query.query,
        }
        .apply()
    }
}
