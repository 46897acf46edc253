//! Property-based tests for the financial metrics engine.
//!
//! These tests verify that the arithmetic identities of the derived metrics
//! hold across arbitrary records, using `proptest` for case generation.

use advisory_core::financials::{
    analyze, compute_metrics, AdvisoryKind, FinancialRecord,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a monetary amount in cents, up to ten billion.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_optional_amount() -> impl Strategy<Value = Option<Decimal>> {
    proptest::option::of(arb_amount())
}

/// Generates a record with every monetary field either absent or present.
fn arb_record() -> impl Strategy<Value = FinancialRecord> {
    (
        proptest::collection::vec(arb_optional_amount(), 4),
        proptest::collection::vec(arb_optional_amount(), 8),
        proptest::collection::vec(arb_optional_amount(), 8),
        proptest::collection::vec(arb_optional_amount(), 6),
        any::<bool>(),
    )
        .prop_map(|(income, expenses, assets, liabilities, has_will)| FinancialRecord {
            salary: income[0],
            business_income: income[1],
            investment_income: income[2],
            other_income: income[3],
            housing: expenses[0],
            transportation: expenses[1],
            food: expenses[2],
            utilities: expenses[3],
            insurance: expenses[4],
            entertainment: expenses[5],
            healthcare: expenses[6],
            miscellaneous: expenses[7],
            cash_savings: assets[0],
            checking: assets[1],
            investments: assets[2],
            retirement: assets[3],
            real_estate: assets[4],
            vehicles: assets[5],
            personal_property: assets[6],
            other_assets: assets[7],
            mortgage: liabilities[0],
            auto_loans: liabilities[1],
            credit_cards: liabilities[2],
            student_loans: liabilities[3],
            personal_loans: liabilities[4],
            other_debts: liabilities[5],
            has_will,
            ..Default::default()
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Net worth is exactly assets minus liabilities.
    #[test]
    fn prop_net_worth_is_assets_minus_liabilities(record in arb_record()) {
        let metrics = compute_metrics(&record);
        prop_assert_eq!(metrics.total_assets - metrics.total_liabilities, metrics.net_worth);
    }

    /// Net income is exactly income minus expenses.
    #[test]
    fn prop_net_income_is_income_minus_expenses(record in arb_record()) {
        let metrics = compute_metrics(&record);
        prop_assert_eq!(metrics.total_income - metrics.total_expenses, metrics.net_income);
    }

    /// The same record always produces the same metrics and advisories.
    #[test]
    fn prop_analysis_is_idempotent(record in arb_record()) {
        prop_assert_eq!(analyze(&record), analyze(&record));
    }

    /// Ratios are zero whenever there is no income.
    #[test]
    fn prop_ratios_are_zero_without_income(mut record in arb_record()) {
        record.salary = None;
        record.business_income = None;
        record.investment_income = None;
        record.other_income = None;

        let analysis = analyze(&record);
        prop_assert_eq!(analysis.derived_metrics.savings_rate, Decimal::ZERO);
        prop_assert_eq!(analysis.derived_metrics.debt_to_income_ratio, Decimal::ZERO);
        prop_assert!(!analysis
            .advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::LowSavingsRate || a.kind == AdvisoryKind::HighDebtToIncome));
    }

    /// Raising one expense lowers net income by exactly the increase.
    #[test]
    fn prop_expense_increase_lowers_net_income_by_delta(
        record in arb_record(),
        delta in 1i64..100_000_000,
    ) {
        let delta = Decimal::new(delta, 2);
        let mut raised = record.clone();
        raised.utilities = Some(raised.utilities.unwrap_or(Decimal::ZERO) + delta);

        let before = compute_metrics(&record);
        let after = compute_metrics(&raised);
        prop_assert!(after.net_income < before.net_income);
        prop_assert_eq!(before.net_income - after.net_income, delta);
    }

    /// The will advisory appears exactly when no will is on file.
    #[test]
    fn prop_will_advisory_tracks_flag(record in arb_record()) {
        let has_will_advisory = analyze(&record)
            .advisories
            .iter()
            .any(|a| a.kind == AdvisoryKind::NoWill);
        prop_assert_eq!(has_will_advisory, !record.has_will);
    }
}
