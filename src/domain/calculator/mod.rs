//! The transport emission calculator.
//!
//! A linear three-step wizard (Route → Cargo → Transport) accumulating
//! a shipment draft, followed by a scored results view. The emission
//! quantity itself comes from the `EmissionModel` port; everything in
//! this module is pure state and derivation.

mod aggregate;
mod report;
mod scoring;
mod shipment;
mod step;
mod transport;

pub use aggregate::{
    Calculation, CalculationError, CalculationPhase, CalculationTicket, CompletionOutcome,
};
pub use report::{Alternative, CalculationSummary, EmissionReport};
pub use scoring::{score_emission, Grade, ImpactLevel, ImpactScore, ScoringError};
pub use shipment::{CargoDetails, RouteLeg, ShipmentDraft, TransportChoice};
pub use step::{CalculatorStep, StepSequence};
pub use transport::{
    vehicle_label, vehicle_options, TransportMode, TransportSelection, VehicleClass,
};
