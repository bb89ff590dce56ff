//! Capital waterfall computation.

use log::debug;
use rust_decimal::Decimal;

use super::fund_model::{FundParameters, WaterfallBreakdown};

/// Computes the capital waterfall: committed capital less management fees
/// and fund expenses leaves investable capital.
///
/// Pure and infallible for numeric inputs. The decomposition is exact:
/// `management_fee_amount + fund_expense_amount + investable_capital`
/// reconstructs `committed_capital` with no floating-point drift, since all
/// arithmetic is decimal.
pub fn compute_waterfall(params: &FundParameters) -> WaterfallBreakdown {
    let management_fee_amount = params.management_fee_rate * params.committed_capital;
    let fund_expense_amount = params.fund_expense_rate * params.committed_capital;
    let investable_capital = params.committed_capital
        * (Decimal::ONE - params.fund_expense_rate - params.management_fee_rate);

    debug!(
        "Waterfall: committed {} -> fee {} -> expenses {} -> investable {}",
        params.committed_capital, management_fee_amount, fund_expense_amount, investable_capital
    );

    WaterfallBreakdown {
        committed_capital: params.committed_capital,
        management_fee_amount,
        fund_expense_amount,
        investable_capital,
    }
}
