//! Directory handlers.

mod search_organizations;

pub use search_organizations::{SearchOrganizationsHandler, SearchOrganizationsQuery};
