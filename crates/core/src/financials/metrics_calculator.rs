//! Financial metrics engine.
//!
//! Pure functions from a financial record to [`DerivedMetrics`] and the list
//! of [`Advisory`] values shown on a client report. Nothing here can fail:
//! absent inputs are zero, divisions by zero income yield zero, and
//! arithmetic saturates instead of overflowing.

use rust_decimal::Decimal;

use super::financials_model::{FinancialRecord, FinancialStatement};
use super::metrics_model::{Advisory, AdvisoryKind, DerivedMetrics, MetricsAnalysis};
use crate::constants::{
    EMERGENCY_FUND_MONTHS, MAX_DEBT_TO_INCOME_PCT, MIN_SAVINGS_RATE_PCT, PERCENT,
};

/// Computes derived metrics for a raw record.
pub fn compute_metrics(record: &FinancialRecord) -> DerivedMetrics {
    compute_statement_metrics(&record.normalize())
}

/// Computes derived metrics for a normalized statement.
pub fn compute_statement_metrics(statement: &FinancialStatement) -> DerivedMetrics {
    let total_income = statement.income.total();
    let total_expenses = statement.expenses.total();
    let total_assets = statement.assets.total();
    let total_liabilities = statement.liabilities.total();

    let net_income = total_income.saturating_sub(total_expenses);
    let net_worth = total_assets.saturating_sub(total_liabilities);

    DerivedMetrics {
        total_income,
        total_expenses,
        total_assets,
        total_liabilities,
        net_income,
        net_worth,
        savings_rate: percent_of_income(net_income, total_income),
        debt_to_income_ratio: percent_of_income(total_liabilities, total_income),
    }
}

/// `part / income * 100`, or zero when income is not positive.
fn percent_of_income(part: Decimal, income: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part.checked_div(income)
        .and_then(|ratio| ratio.checked_mul(PERCENT))
        .unwrap_or(if part.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Applies the advisory rules in their fixed order.
///
/// 1. savings rate below 10% (only when there is income to save from)
/// 2. debt-to-income ratio above 36%
/// 3. no will on file
/// 4. cash savings below three months of expenses
pub fn derive_recommendations(
    statement: &FinancialStatement,
    metrics: &DerivedMetrics,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if metrics.total_income > Decimal::ZERO && metrics.savings_rate < MIN_SAVINGS_RATE_PCT {
        advisories.push(Advisory::warning(
            AdvisoryKind::LowSavingsRate,
            "Savings rate is below 10%. Consider increasing savings to 10-15% of income.",
        ));
    }

    if metrics.debt_to_income_ratio > MAX_DEBT_TO_INCOME_PCT {
        advisories.push(Advisory::warning(
            AdvisoryKind::HighDebtToIncome,
            "Debt-to-income ratio exceeds 36%. Consider a debt reduction plan.",
        ));
    }

    if !statement.estate.has_will {
        advisories.push(Advisory::warning(
            AdvisoryKind::NoWill,
            "No will on file. Consider estate planning.",
        ));
    }

    let emergency_target = metrics
        .total_expenses
        .saturating_mul(EMERGENCY_FUND_MONTHS);
    if statement.assets.cash_savings < emergency_target {
        advisories.push(Advisory::warning(
            AdvisoryKind::LowEmergencyFund,
            "Emergency fund covers less than 3 months of expenses.",
        ));
    }

    advisories
}

/// Normalizes a record once and returns its metrics with their advisories.
pub fn analyze(record: &FinancialRecord) -> MetricsAnalysis {
    analyze_statement(&record.normalize())
}

/// Metrics and advisories for an already normalized statement.
///
/// Callers that also build a report from the same statement use this to avoid
/// normalizing the record twice.
pub fn analyze_statement(statement: &FinancialStatement) -> MetricsAnalysis {
    let derived_metrics = compute_statement_metrics(statement);
    let advisories = derive_recommendations(statement, &derived_metrics);
    MetricsAnalysis {
        derived_metrics,
        advisories,
    }
}
