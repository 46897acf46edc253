//! Builds client reports from a normalized statement.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

use super::financials_model::{FinancialStatement, StatementLine};
use super::metrics_calculator::analyze_statement;
use super::metrics_model::DerivedMetrics;
use super::report_model::{
    BreakdownItem, EstateDocumentStatus, FinancialReport, GoalsSummary, MetricsSummary,
    ProtectionSummary,
};
use crate::clients::Client;
use crate::constants::{DISPLAY_DECIMAL_PRECISION, DISPLAY_PERCENT_PRECISION, PERCENT};

/// Rounds a value for display, half away from zero.
pub fn round_for_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Builds the report for a client from its normalized financial statement.
pub fn build_report(
    client: &Client,
    statement: &FinancialStatement,
    generated_at: NaiveDateTime,
) -> FinancialReport {
    let analysis = analyze_statement(statement);
    let metrics = &analysis.derived_metrics;

    FinancialReport {
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        generated_at,
        summary: summarize(metrics),
        income_breakdown: build_breakdown(&statement.income.lines()),
        expense_breakdown: build_breakdown(&statement.expenses.lines()),
        asset_breakdown: build_breakdown(&statement.assets.lines()),
        liability_breakdown: build_breakdown(&statement.liabilities.lines()),
        emergency_fund_months: emergency_fund_months(
            statement.assets.cash_savings,
            metrics.total_expenses,
        ),
        protection: build_protection(statement),
        goals: build_goals(statement),
        preferences: statement.preferences.clone(),
        derived_metrics: analysis.derived_metrics,
        advisories: analysis.advisories,
    }
}

fn summarize(metrics: &DerivedMetrics) -> MetricsSummary {
    let amount = |v: Decimal| round_for_display(v, DISPLAY_DECIMAL_PRECISION);
    let percent = |v: Decimal| round_for_display(v, DISPLAY_PERCENT_PRECISION);

    MetricsSummary {
        total_income: amount(metrics.total_income),
        total_expenses: amount(metrics.total_expenses),
        total_assets: amount(metrics.total_assets),
        total_liabilities: amount(metrics.total_liabilities),
        net_income: amount(metrics.net_income),
        net_worth: amount(metrics.net_worth),
        savings_rate: percent(metrics.savings_rate),
        debt_to_income_ratio: percent(metrics.debt_to_income_ratio),
    }
}

/// Non-zero lines, largest first.
fn build_breakdown(lines: &[StatementLine]) -> Vec<BreakdownItem> {
    let mut breakdown: Vec<BreakdownItem> = lines
        .iter()
        .filter(|l| !l.value.is_zero())
        .map(|l| BreakdownItem {
            category: l.key.to_string(),
            name: l.name.to_string(),
            value: l.value,
        })
        .collect();

    breakdown.sort_by(|a, b| b.value.cmp(&a.value));
    breakdown
}

fn emergency_fund_months(cash_savings: Decimal, total_expenses: Decimal) -> Decimal {
    if total_expenses <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    cash_savings
        .checked_div(total_expenses)
        .map(|months| round_for_display(months, DISPLAY_PERCENT_PRECISION))
        .unwrap_or(Decimal::MAX)
}

fn build_protection(statement: &FinancialStatement) -> ProtectionSummary {
    let estate_documents: Vec<EstateDocumentStatus> = statement
        .estate
        .documents()
        .iter()
        .map(|(document, name, on_file)| EstateDocumentStatus {
            document: document.to_string(),
            name: name.to_string(),
            on_file: *on_file,
        })
        .collect();
    let documents_on_file = estate_documents.iter().filter(|d| d.on_file).count();

    ProtectionSummary {
        total_life_coverage: statement.protection.total_coverage(),
        total_life_premiums: statement.protection.total_premiums(),
        estate_documents,
        documents_on_file,
    }
}

fn build_goals(statement: &FinancialStatement) -> GoalsSummary {
    let emergency_fund_progress = statement
        .goals
        .emergency_fund_goal
        .filter(|goal| *goal > Decimal::ZERO)
        .and_then(|goal| statement.assets.cash_savings.checked_div(goal))
        .and_then(|ratio| ratio.checked_mul(PERCENT))
        .map(|pct| round_for_display(pct, DISPLAY_PERCENT_PRECISION));

    GoalsSummary {
        targets: statement.goals.clone(),
        emergency_fund_progress,
    }
}
