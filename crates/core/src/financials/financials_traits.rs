//! Financial report service traits.

use super::financials_model::FinancialRecord;
use super::metrics_model::MetricsAnalysis;
use super::report_model::FinancialReport;
use crate::errors::Result;

/// Trait defining the contract for client metrics and report operations.
///
/// Every call re-reads the client's stored record; nothing is cached.
pub trait FinancialReportServiceTrait: Send + Sync {
    /// Derived metrics and advisories for a stored client record.
    ///
    /// Fails with `DatabaseError::NotFound` when the client does not exist or
    /// has no financial data yet.
    fn get_client_metrics(&self, client_id: &str) -> Result<MetricsAnalysis>;

    /// Full report (metrics, breakdowns, protection, goals) for a client.
    fn get_client_report(&self, client_id: &str) -> Result<FinancialReport>;

    /// The client report rendered as CSV.
    fn export_client_report_csv(&self, client_id: &str) -> Result<String>;

    /// Metrics and advisories for a record that has not been saved.
    fn preview_metrics(&self, record: &FinancialRecord) -> MetricsAnalysis;
}
