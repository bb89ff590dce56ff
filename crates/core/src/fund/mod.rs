//! Fund parameters and the capital waterfall.

mod fund_model;
mod fund_service;

pub use fund_model::{FundParameters, WaterfallBreakdown};
pub use fund_service::compute_waterfall;
