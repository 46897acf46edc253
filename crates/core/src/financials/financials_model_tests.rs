//! Tests for financial record decoding and normalization.

use super::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn test_missing_fields_decode_as_absent() {
    let record: FinancialRecord = serde_json::from_value(json!({})).unwrap();
    assert_eq!(record, FinancialRecord::default());
    assert!(!record.has_will);
    assert_eq!(record.risk_tolerance, None);
}

#[test]
fn test_numeric_strings_and_numbers_are_accepted() {
    let record: FinancialRecord = serde_json::from_value(json!({
        "salary": 8500,
        "businessIncome": "2000",
        "investmentIncome": " 500.50 ",
        "cashSavings": 1234.56,
        "retirementAge": "65",
    }))
    .unwrap();

    assert_eq!(record.salary, Some(dec!(8500)));
    assert_eq!(record.business_income, Some(dec!(2000)));
    assert_eq!(record.investment_income, Some(dec!(500.50)));
    assert_eq!(record.cash_savings, Some(dec!(1234.56)));
    assert_eq!(record.retirement_age, Some(65));
}

#[test]
fn test_non_numeric_values_become_zero_after_normalize() {
    let record: FinancialRecord = serde_json::from_value(json!({
        "salary": "abc",
        "housing": null,
        "food": "",
        "mortgage": true,
        "checking": [100],
        "otherIncome": { "amount": 5 },
    }))
    .unwrap();

    let statement = record.normalize();
    assert_eq!(statement.income.salary, Decimal::ZERO);
    assert_eq!(statement.income.other_income, Decimal::ZERO);
    assert_eq!(statement.expenses.housing, Decimal::ZERO);
    assert_eq!(statement.expenses.food, Decimal::ZERO);
    assert_eq!(statement.liabilities.mortgage, Decimal::ZERO);
    assert_eq!(statement.assets.checking, Decimal::ZERO);
}

#[test]
fn test_flags_accept_booleans_and_strings() {
    let record: FinancialRecord = serde_json::from_value(json!({
        "hasWill": true,
        "hasTrust": "TRUE",
        "hasPowerOfAttorney": "yes",
        "hasHealthcareDirective": 1,
        "hasEstateplan": "true",
    }))
    .unwrap();

    assert!(record.has_will);
    assert!(record.has_trust);
    assert!(!record.has_power_of_attorney);
    assert!(!record.has_healthcare_directive);
    assert!(!record.has_beneficiary_designations);
    assert!(record.has_estateplan);
}

#[test]
fn test_preferences_decode_leniently() {
    let record: FinancialRecord = serde_json::from_value(json!({
        "riskTolerance": "Moderate",
        "investmentTimeline": "",
    }))
    .unwrap();
    assert_eq!(record.risk_tolerance, Some(RiskTolerance::Moderate));
    assert_eq!(record.investment_timeline, None);

    let record: FinancialRecord = serde_json::from_value(json!({
        "riskTolerance": "reckless",
        "investmentTimeline": "long",
    }))
    .unwrap();
    assert_eq!(record.risk_tolerance, None);
    assert_eq!(record.investment_timeline, Some(InvestmentTimeline::Long));
}

#[test]
fn test_record_serializes_camel_case_and_skips_absent_amounts() {
    let record = FinancialRecord {
        cash_savings: Some(dec!(2500)),
        has_estateplan: true,
        risk_tolerance: Some(RiskTolerance::Aggressive),
        ..Default::default()
    };
    let value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["cashSavings"], json!("2500"));
    assert!(value.get("salary").is_none());
    assert_eq!(value["hasEstateplan"], json!(true));
    assert_eq!(value["hasWill"], json!(false));
    assert_eq!(value["riskTolerance"], json!("aggressive"));

    let decoded: FinancialRecord = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn test_out_of_range_amount_is_absent_not_an_error() {
    let record: FinancialRecord =
        serde_json::from_str(r#"{"salary":1e400,"housing":5}"#).unwrap();

    assert_eq!(record.salary, None);
    assert_eq!(record.housing, Some(dec!(5)));
}

#[test]
fn test_large_json_numbers_decode_exactly() {
    let record: FinancialRecord =
        serde_json::from_str(r#"{"salary":12345678901234567.89,"housing":0.1}"#).unwrap();

    assert_eq!(record.salary, Some(dec!(12345678901234567.89)));
    assert_eq!(record.housing, Some(dec!(0.1)));
}

#[test]
fn test_amounts_survive_a_json_round_trip_exactly() {
    let record = FinancialRecord {
        salary: Some(dec!(12345678901234567.89)),
        housing: Some(dec!(0.1)),
        retirement_goal: Some(dec!(1500000.01)),
        ..Default::default()
    };
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains(r#""salary":"12345678901234567.89""#));

    let decoded: FinancialRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(
        decoded.normalize().income.total() - decoded.normalize().expenses.total(),
        dec!(12345678901234567.79)
    );
}

#[test]
fn test_normalize_keeps_goals_optional() {
    let record = FinancialRecord {
        retirement_goal: Some(dec!(1500000)),
        retirement_age: Some(62),
        ..Default::default()
    };
    let statement = record.normalize();

    assert_eq!(statement.goals.retirement_goal, Some(dec!(1500000)));
    assert_eq!(statement.goals.retirement_age, Some(62));
    assert_eq!(statement.goals.home_goal, None);
}

#[test]
fn test_statement_lines_cover_every_category_field() {
    let statement = FinancialRecord::default().normalize();

    assert_eq!(statement.income.lines().len(), 4);
    assert_eq!(statement.expenses.lines().len(), 8);
    assert_eq!(statement.assets.lines().len(), 8);
    assert_eq!(statement.liabilities.lines().len(), 6);
    assert_eq!(statement.estate.documents().len(), 6);
}
