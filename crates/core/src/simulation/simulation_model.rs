//! Input and output snapshots for one recomputation pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::allocation::AllocationTable;
use crate::charts::ChartBundle;
use crate::fund::{FundParameters, WaterfallBreakdown};
use crate::rounds::{RoundAllocationInput, RoundProfile};
use crate::scenario::ScenarioConfig;

/// Full snapshot of current user inputs. The hosting UI rebuilds this on
/// every input change and hands it to the engine whole; there is no
/// incremental state between passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub fund: FundParameters,
    pub profiles: Vec<RoundProfile>,
    pub allocations: Vec<RoundAllocationInput>,
}

impl SimulationInput {
    /// The input a fresh session starts from: every control at its
    /// scenario default.
    pub fn from_scenario(config: &ScenarioConfig) -> Self {
        Self {
            fund: config.default_fund_parameters(),
            profiles: config.round_profiles.clone(),
            allocations: config.round_allocations.clone(),
        }
    }
}

/// Full snapshot of engine outputs for one pass: everything the hosting UI
/// needs to re-render its tables and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutput {
    pub waterfall: WaterfallBreakdown,
    pub allocation: AllocationTable,
    /// Share of investable capital left for follow-on investment, percent.
    pub remaining_capital_pct: Option<Decimal>,
    pub charts: ChartBundle,
}
