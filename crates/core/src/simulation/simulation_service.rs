//! The recompute entry point.

use log::debug;

use super::simulation_model::{SimulationInput, SimulationOutput};
use crate::allocation::{compute_allocation_table, remaining_capital_pct};
use crate::charts::build_charts;
use crate::errors::Result;
use crate::fund::compute_waterfall;

/// Trait for the simulation service.
pub trait SimulationServiceTrait: Send + Sync {
    /// Runs one full recomputation pass over an input snapshot.
    fn recompute(&self, input: &SimulationInput) -> Result<SimulationOutput>;
}

/// Stateless recomputation service. Each call is a pure, idempotent
/// transformation of the input snapshot; the hosting UI calls it on every
/// input change (input change -> synchronous recompute -> re-render).
#[derive(Debug, Default)]
pub struct SimulationService;

impl SimulationService {
    pub fn new() -> Self {
        Self
    }
}

impl SimulationServiceTrait for SimulationService {
    fn recompute(&self, input: &SimulationInput) -> Result<SimulationOutput> {
        debug!(
            "Recomputing simulation: {}M committed, {} allocation rows",
            input.fund.committed_capital,
            input.allocations.len()
        );

        input.fund.validate()?;

        let waterfall = compute_waterfall(&input.fund);
        let allocation = compute_allocation_table(
            &input.profiles,
            &input.allocations,
            waterfall.investable_capital,
        );
        let remaining_capital_pct = remaining_capital_pct(&allocation.totals);
        let charts = build_charts(&waterfall, &allocation);

        Ok(SimulationOutput {
            waterfall,
            allocation,
            remaining_capital_pct,
            charts,
        })
    }
}
