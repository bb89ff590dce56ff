//! Chart view models driven directly by engine outputs.

mod charts_model;
mod charts_service;

pub use charts_model::{
    BarAnnotation, ChartBundle, DealSharePie, InvestmentBar, WaterfallChart, WaterfallMeasure,
};
pub use charts_service::{
    build_charts, build_deal_share_pie, build_investment_bar, build_waterfall_chart,
};
