//! Fund-level parameter and capital waterfall models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Fund-level construction parameters, as collected from the hosting UI.
///
/// Rates are fractions of committed capital (0.02 = 2% annual management
/// fee), not display percentages. Carry is the manager's share of profit;
/// it is round-tripped for the UI but takes no part in the capital
/// waterfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundParameters {
    /// Total capital committed to the fund, in millions of dollars.
    pub committed_capital: Decimal,
    /// Annual fund expenses as a fraction of committed capital.
    pub fund_expense_rate: Decimal,
    /// Annual management fee as a fraction of committed capital.
    pub management_fee_rate: Decimal,
    /// Carry as a fraction of investment profit.
    pub carry_rate: Decimal,
}

impl FundParameters {
    /// Checks the structural invariants: capital non-negative, every rate
    /// within [0, 1]. A fee + expense sum above 1 is economically degenerate
    /// but structurally valid; the waterfall surfaces it as negative
    /// investable capital rather than rejecting it here.
    pub fn validate(&self) -> Result<()> {
        if self.committed_capital < Decimal::ZERO {
            return Err(ValidationError::OutOfRange {
                field: "committedCapital".to_string(),
                value: self.committed_capital.to_string(),
            }
            .into());
        }
        for (field, rate) in [
            ("fundExpenseRate", self.fund_expense_rate),
            ("managementFeeRate", self.management_fee_rate),
            ("carryRate", self.carry_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value: rate.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Capital waterfall derived from [`FundParameters`].
///
/// All amounts are in millions of dollars. `investable_capital` may be
/// negative when fee and expense rates sum past 100%; callers visualize the
/// underfunded scenario instead of this type clamping it away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterfallBreakdown {
    pub committed_capital: Decimal,
    pub management_fee_amount: Decimal,
    pub fund_expense_amount: Decimal,
    pub investable_capital: Decimal,
}
