use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::financials_model::{FinancialRecord, FinancialStatement};
use super::financials_traits::FinancialReportServiceTrait;
use super::metrics_calculator::{analyze, analyze_statement};
use super::metrics_model::MetricsAnalysis;
use super::report_builder::build_report;
use super::report_export::export_report_csv;
use super::report_model::FinancialReport;
use crate::clients::{Client, ClientRepositoryTrait};
use crate::errors::{DatabaseError, Error, Result};

/// Service producing metrics and reports for stored clients.
pub struct FinancialReportService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
}

impl FinancialReportService {
    pub fn new(client_repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        Self { client_repository }
    }

    /// Loads a client and normalizes its financial record.
    fn load_statement(&self, client_id: &str) -> Result<(Client, FinancialStatement)> {
        let client = self.client_repository.get_by_id(client_id)?;
        let statement = client
            .financial_data
            .as_ref()
            .map(FinancialRecord::normalize)
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Financial data for client {}",
                    client_id
                )))
            })?;
        Ok((client, statement))
    }
}

impl FinancialReportServiceTrait for FinancialReportService {
    fn get_client_metrics(&self, client_id: &str) -> Result<MetricsAnalysis> {
        let (_, statement) = self.load_statement(client_id)?;
        let analysis = analyze_statement(&statement);
        debug!(
            "Computed metrics for client {}: {} advisories",
            client_id,
            analysis.advisories.len()
        );
        Ok(analysis)
    }

    fn get_client_report(&self, client_id: &str) -> Result<FinancialReport> {
        let (client, statement) = self.load_statement(client_id)?;
        Ok(build_report(&client, &statement, Utc::now().naive_utc()))
    }

    fn export_client_report_csv(&self, client_id: &str) -> Result<String> {
        let report = self.get_client_report(client_id)?;
        export_report_csv(&report)
    }

    fn preview_metrics(&self, record: &FinancialRecord) -> MetricsAnalysis {
        analyze(record)
    }
}
