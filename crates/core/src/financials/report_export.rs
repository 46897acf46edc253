//! CSV export of client reports.

use rust_decimal::Decimal;

use super::report_model::{BreakdownItem, FinancialReport};
use crate::errors::{Error, Result};

/// Writes a report as `section,item,amount` rows.
///
/// Amounts are the rounded display values; advisories carry their severity
/// in the amount column.
pub fn export_report_csv(report: &FinancialReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["section", "item", "amount"])?;

    let summary = &report.summary;
    let metrics: [(&str, Decimal); 8] = [
        ("Total Income", summary.total_income),
        ("Total Expenses", summary.total_expenses),
        ("Net Income", summary.net_income),
        ("Savings Rate (%)", summary.savings_rate),
        ("Total Assets", summary.total_assets),
        ("Total Liabilities", summary.total_liabilities),
        ("Net Worth", summary.net_worth),
        ("Debt-to-Income Ratio (%)", summary.debt_to_income_ratio),
    ];
    for (item, amount) in metrics {
        let amount = amount.to_string();
        writer.write_record(["metrics", item, amount.as_str()])?;
    }
    let months = report.emergency_fund_months.to_string();
    writer.write_record(["metrics", "Emergency Fund (months)", months.as_str()])?;

    write_breakdown(&mut writer, "income", &report.income_breakdown)?;
    write_breakdown(&mut writer, "expenses", &report.expense_breakdown)?;
    write_breakdown(&mut writer, "assets", &report.asset_breakdown)?;
    write_breakdown(&mut writer, "liabilities", &report.liability_breakdown)?;

    for advisory in &report.advisories {
        writer.write_record([
            "advisory",
            advisory.message.as_str(),
            advisory.severity.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::Report(e.to_string()))
}

fn write_breakdown(
    writer: &mut csv::Writer<Vec<u8>>,
    section: &str,
    items: &[BreakdownItem],
) -> Result<()> {
    for item in items {
        let value = item.value.to_string();
        writer.write_record([section, item.name.as_str(), value.as_str()])?;
    }
    Ok(())
}
