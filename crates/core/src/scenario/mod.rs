//! Scenario variant configuration and defaults.

mod scenario_model;

pub use scenario_model::{FundExpenseSetting, RoundAllocationBounds, ScenarioConfig, SliderRange};
