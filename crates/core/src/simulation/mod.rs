//! The synchronous recompute entry point and its input/output snapshots.

mod simulation_model;
mod simulation_service;

pub use simulation_model::{SimulationInput, SimulationOutput};
pub use simulation_service::{SimulationService, SimulationServiceTrait};
