//! Round profile and allocation input models.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Market profile of one financing stage, ordered Pre-Seed, Seed,
/// Series A, ... Every field is user-editable; rates are display
/// percentages (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundProfile {
    /// Round name, the join key against allocation inputs.
    pub round: String,
    /// Pre-money valuation in dollars.
    pub pre_money_valuation: Decimal,
    /// Post-money valuation in dollars. Expected >= pre-money.
    pub post_money_valuation: Decimal,
    /// Option pool carved out at this round, percent.
    pub option_pool_pct: Decimal,
    /// Share of deals that advance to the next round, percent.
    pub ascension_rate_pct: Decimal,
    /// Share of deals that exit at this round, percent.
    pub exit_rate_pct: Decimal,
    /// Average years from investment to the next round.
    pub years_to_ascension: Decimal,
    /// Average years from investment to exit.
    pub years_to_exit: Decimal,
    /// Expected valuation at exit, in dollars.
    pub exit_valuation: Decimal,
}

/// Per-round allocation choices: how many initial checks, and how large.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAllocationInput {
    /// Round name, the join key against round profiles.
    pub round: String,
    /// Number of initial investments at this round.
    pub deals: u32,
    /// Average check size in dollars.
    pub avg_check: Decimal,
}

/// Default round profiles: industry averages from Carta's Q1 2024 private
/// markets reporting (pre-seed through Series A).
pub fn default_round_profiles() -> Vec<RoundProfile> {
    vec![
        RoundProfile {
            round: "Pre-Seed".to_string(),
            pre_money_valuation: dec!(10_500_000),
            post_money_valuation: dec!(12_000_000),
            option_pool_pct: dec!(10),
            ascension_rate_pct: dec!(60),
            exit_rate_pct: dec!(1),
            years_to_ascension: dec!(1.5),
            years_to_exit: dec!(1.5),
            exit_valuation: dec!(15_000_000),
        },
        RoundProfile {
            round: "Seed".to_string(),
            pre_money_valuation: dec!(16_000_000),
            post_money_valuation: dec!(20_000_000),
            option_pool_pct: dec!(10),
            ascension_rate_pct: dec!(40),
            exit_rate_pct: dec!(2),
            years_to_ascension: dec!(1.5),
            years_to_exit: dec!(1.5),
            exit_valuation: dec!(40_000_000),
        },
        RoundProfile {
            round: "Series A".to_string(),
            pre_money_valuation: dec!(40_000_000),
            post_money_valuation: dec!(50_000_000),
            option_pool_pct: dec!(10),
            ascension_rate_pct: dec!(20),
            exit_rate_pct: dec!(5),
            years_to_ascension: dec!(1.5),
            years_to_exit: dec!(1.5),
            exit_valuation: dec!(100_000_000),
        },
    ]
}

/// Default allocation inputs matching the default round profiles.
pub fn default_round_allocations() -> Vec<RoundAllocationInput> {
    vec![
        RoundAllocationInput {
            round: "Pre-Seed".to_string(),
            deals: 30,
            avg_check: dec!(750_000),
        },
        RoundAllocationInput {
            round: "Seed".to_string(),
            deals: 10,
            avg_check: dec!(1_500_000),
        },
        RoundAllocationInput {
            round: "Series A".to_string(),
            deals: 2,
            avg_check: dec!(3_000_000),
        },
    ]
}
