//! NGO partner directory.

mod organization;

pub use organization::{directory, FocusArea, Organization, OrganizationFilter};
