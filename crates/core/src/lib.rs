//! Fundforge Core - VC fund construction calculation engine.
//!
//! A stateless set of pure calculations turning fund-level parameters and
//! round-level assumptions into a capital waterfall, an enriched per-round
//! allocation table, and chart-ready payloads. It owns no rendering and no
//! persistence: a hosting UI (or test harness) hands over an input snapshot
//! and re-renders from the output snapshot on every change.

pub mod allocation;
pub mod charts;
pub mod constants;
pub mod errors;
pub mod fund;
pub mod rounds;
pub mod scenario;
pub mod simulation;

// Re-export the engine surface
pub use allocation::*;
pub use charts::*;
pub use fund::*;
pub use rounds::*;
pub use scenario::*;
pub use simulation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
