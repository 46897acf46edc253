//! Derived metrics and advisory models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregates computed from a financial statement. Never stored.
///
/// Values are kept at full precision; rounding happens only when a report
/// is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// totalIncome - totalExpenses
    pub net_income: Decimal,
    /// totalAssets - totalLiabilities
    pub net_worth: Decimal,
    /// Net income as a percentage of income, 0 when there is no income
    pub savings_rate: Decimal,
    /// Liabilities as a percentage of income, 0 when there is no income
    pub debt_to_income_ratio: Decimal,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AdvisorySeverity {
    #[default]
    Info,
    Warning,
}

impl AdvisorySeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisorySeverity::Info => "info",
            AdvisorySeverity::Warning => "warning",
        }
    }
}

impl fmt::Display for AdvisorySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The rule that produced an advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryKind {
    LowSavingsRate,
    HighDebtToIncome,
    NoWill,
    LowEmergencyFund,
}

impl AdvisoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryKind::LowSavingsRate => "LOW_SAVINGS_RATE",
            AdvisoryKind::HighDebtToIncome => "HIGH_DEBT_TO_INCOME",
            AdvisoryKind::NoWill => "NO_WILL",
            AdvisoryKind::LowEmergencyFund => "LOW_EMERGENCY_FUND",
        }
    }
}

impl fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A severity-tagged recommendation shown on a client report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub severity: AdvisorySeverity,
    pub message: String,
}

impl Advisory {
    pub fn warning(kind: AdvisoryKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: AdvisorySeverity::Warning,
            message: message.into(),
        }
    }
}

/// Metrics together with the advisories they trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsAnalysis {
    pub derived_metrics: DerivedMetrics,
    pub advisories: Vec<Advisory>,
}
