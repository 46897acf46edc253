//! Financial records, the metrics engine and client reports.

mod financials_model;
mod financials_service;
mod financials_traits;
mod metrics_calculator;
mod metrics_model;
mod report_builder;
mod report_export;
mod report_model;

pub use financials_model::*;
pub use financials_service::FinancialReportService;
pub use financials_traits::FinancialReportServiceTrait;
pub use metrics_calculator::{
    analyze, analyze_statement, compute_metrics, compute_statement_metrics,
    derive_recommendations,
};
pub use metrics_model::*;
pub use report_builder::{build_report, round_for_display};
pub use report_export::export_report_csv;
pub use report_model::*;

#[cfg(test)]
mod financials_model_tests;
