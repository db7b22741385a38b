//! Emission model adapters.

mod fixed_model;

pub use fixed_model::FixedEmissionModel;
