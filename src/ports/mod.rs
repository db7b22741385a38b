//! Ports - the seams between the application layer and the outside
//! world. Each port is an async trait with its own error enum; adapters
//! provide the implementations.

mod assistant;
mod backend_gateway;
mod calculation_store;
mod emission_model;
mod result_sink;

pub use assistant::Assistant;
pub use backend_gateway::{BackendError, BackendGateway};
pub use calculation_store::{CalculationStore, CalculationStoreError};
pub use emission_model::{EmissionModel, EmissionModelError};
pub use result_sink::{ResultSink, ResultSinkError};
