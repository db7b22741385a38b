//! Storage adapters.

mod in_memory_calculation_store;

pub use in_memory_calculation_store::InMemoryCalculationStore;
