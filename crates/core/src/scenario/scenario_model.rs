//! Scenario variant configuration.
//!
//! The reference material exists in several near-duplicate drafts that only
//! disagree on slider bounds and on whether the fund-expense rate is fixed.
//! Those differences are configuration, not engine branches: each draft is a
//! [`ScenarioConfig`] preset and the engine itself never special-cases one.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::fund::FundParameters;
use crate::rounds::{
    default_round_allocations, default_round_profiles, RoundAllocationInput, RoundProfile,
};

/// Bounds and default for one numeric input control. Monetary ranges are in
/// the unit of their field ($M for committed capital, dollars for checks);
/// rate ranges are display percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
    pub default: Decimal,
}

impl SliderRange {
    pub fn new(min: Decimal, max: Decimal, step: Decimal, default: Decimal) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }
}

/// Fund-expense configuration. The rate is always a live [`FundParameters`]
/// field at the engine level; `range: None` tells the UI to render it as a
/// fixed constant instead of a slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundExpenseSetting {
    /// Default annual expense rate, display percent.
    pub default_pct: Decimal,
    /// Slider bounds, display percent. `None` = fixed in the UI.
    pub range: Option<SliderRange>,
}

/// Per-round bounds for the deal-count and check-size controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAllocationBounds {
    pub round: String,
    pub deals: SliderRange,
    pub avg_check: SliderRange,
}

/// One scenario variant: input bounds, fixed-vs-adjustable choices, and the
/// default round data a fresh session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// Committed capital bounds, $M.
    pub committed_capital_range: SliderRange,
    pub fund_expense: FundExpenseSetting,
    /// Annual management fee bounds, display percent.
    pub management_fee_range: SliderRange,
    /// Carry bounds, display percent.
    pub carry_range: SliderRange,
    pub round_profiles: Vec<RoundProfile>,
    pub round_allocations: Vec<RoundAllocationInput>,
    pub allocation_bounds: Vec<RoundAllocationBounds>,
}

impl ScenarioConfig {
    /// The current reference scenario: Carta Q1 2024 round data, a 2%-style
    /// management fee band, and an adjustable fund-expense rate defaulting
    /// to 8%.
    pub fn carta_q1_2024() -> Self {
        Self {
            committed_capital_range: SliderRange::new(dec!(20), dec!(100), dec!(5), dec!(75)),
            fund_expense: FundExpenseSetting {
                default_pct: dec!(8),
                range: Some(SliderRange::new(dec!(4), dec!(12), dec!(1), dec!(8))),
            },
            management_fee_range: SliderRange::new(dec!(1), dec!(3), dec!(0.5), dec!(2)),
            carry_range: SliderRange::new(dec!(10), dec!(30), dec!(1), dec!(20)),
            round_profiles: default_round_profiles(),
            round_allocations: default_round_allocations(),
            allocation_bounds: default_allocation_bounds(),
        }
    }

    /// The earlier draft's variant: a wide management-fee band and a fixed
    /// 10% fund-expense rate.
    pub fn classic() -> Self {
        Self {
            fund_expense: FundExpenseSetting {
                default_pct: dec!(10),
                range: None,
            },
            management_fee_range: SliderRange::new(dec!(10), dec!(25), dec!(1), dec!(20)),
            ..Self::carta_q1_2024()
        }
    }

    /// Fund parameters a fresh session starts from: the default of every
    /// range, with display percentages converted to fractions.
    pub fn default_fund_parameters(&self) -> FundParameters {
        FundParameters {
            committed_capital: self.committed_capital_range.default,
            fund_expense_rate: self.fund_expense.default_pct / dec!(100),
            management_fee_rate: self.management_fee_range.default / dec!(100),
            carry_rate: self.carry_range.default / dec!(100),
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::carta_q1_2024()
    }
}

fn default_allocation_bounds() -> Vec<RoundAllocationBounds> {
    vec![
        RoundAllocationBounds {
            round: "Pre-Seed".to_string(),
            deals: SliderRange::new(dec!(10), dec!(50), dec!(1), dec!(30)),
            avg_check: SliderRange::new(
                dec!(250_000),
                dec!(1_500_000),
                dec!(50_000),
                dec!(750_000),
            ),
        },
        RoundAllocationBounds {
            round: "Seed".to_string(),
            deals: SliderRange::new(dec!(5), dec!(20), dec!(1), dec!(10)),
            avg_check: SliderRange::new(
                dec!(500_000),
                dec!(2_500_000),
                dec!(100_000),
                dec!(1_500_000),
            ),
        },
        RoundAllocationBounds {
            round: "Series A".to_string(),
            deals: SliderRange::new(dec!(0), dec!(10), dec!(1), dec!(2)),
            avg_check: SliderRange::new(
                dec!(1_000_000),
                dec!(5_000_000),
                dec!(1_000_000),
                dec!(3_000_000),
            ),
        },
    ]
}
