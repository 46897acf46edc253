//! Client report models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::financials_model::{FinancialGoals, InvestmentPreferences};
use super::metrics_model::{Advisory, DerivedMetrics};

/// Individual line in an income, expense, asset or liability breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    /// Field key (e.g., "salary", "cashSavings")
    pub category: String,
    /// Display name
    pub name: String,
    pub value: Decimal,
}

/// Derived metrics rounded for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_income: Decimal,
    pub net_worth: Decimal,
    /// Percentage, one decimal place
    pub savings_rate: Decimal,
    /// Percentage, one decimal place
    pub debt_to_income_ratio: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateDocumentStatus {
    pub document: String,
    pub name: String,
    pub on_file: bool,
}

/// Insurance and estate planning overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionSummary {
    pub total_life_coverage: Decimal,
    pub total_life_premiums: Decimal,
    pub estate_documents: Vec<EstateDocumentStatus>,
    pub documents_on_file: usize,
}

/// Goal targets with progress where it can be measured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalsSummary {
    #[serde(flatten)]
    pub targets: FinancialGoals,
    /// Cash savings as a percentage of the emergency fund goal
    pub emergency_fund_progress: Option<Decimal>,
}

/// Everything a report page or printout needs for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub client_id: String,
    pub client_name: String,
    pub generated_at: NaiveDateTime,
    /// Full-precision metrics
    pub derived_metrics: DerivedMetrics,
    pub advisories: Vec<Advisory>,
    /// Metrics rounded for display
    pub summary: MetricsSummary,
    pub income_breakdown: Vec<BreakdownItem>,
    pub expense_breakdown: Vec<BreakdownItem>,
    pub asset_breakdown: Vec<BreakdownItem>,
    pub liability_breakdown: Vec<BreakdownItem>,
    /// Months of expenses covered by cash savings, one decimal place
    pub emergency_fund_months: Decimal,
    pub protection: ProtectionSummary,
    pub goals: GoalsSummary,
    pub preferences: InvestmentPreferences,
}
