//! Financial record domain models.
//!
//! A [`FinancialRecord`] is what clients and advisors type in: every field is
//! optional and decoded leniently. [`FinancialRecord::normalize`] is the only
//! place where absent values become zero; the metrics engine works on the
//! resulting [`FinancialStatement`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::decimal_serde::{
    lenient_bool, lenient_decimal_option, lenient_enum_option, lenient_u32_option,
};

/// Client risk tolerance preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskTolerance::Conservative),
            "moderate" => Ok(RiskTolerance::Moderate),
            "aggressive" => Ok(RiskTolerance::Aggressive),
            other => Err(format!("Unknown risk tolerance: {}", other)),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Client investment horizon preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentTimeline {
    Short,
    Medium,
    Long,
}

impl InvestmentTimeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentTimeline::Short => "short",
            InvestmentTimeline::Medium => "medium",
            InvestmentTimeline::Long => "long",
        }
    }
}

impl FromStr for InvestmentTimeline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "short" => Ok(InvestmentTimeline::Short),
            "medium" => Ok(InvestmentTimeline::Medium),
            "long" => Ok(InvestmentTimeline::Long),
            other => Err(format!("Unknown investment timeline: {}", other)),
        }
    }
}

impl fmt::Display for InvestmentTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw financial data for one client, as entered.
///
/// Any field may be missing or hold something that is not a number; such
/// fields count as zero once the record is normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialRecord {
    // Income
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub business_income: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub investment_income: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub other_income: Option<Decimal>,

    // Expenses
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub housing: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub transportation: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub food: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub utilities: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub insurance: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub entertainment: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub healthcare: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub miscellaneous: Option<Decimal>,

    // Assets
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub cash_savings: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub checking: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub investments: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub retirement: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub real_estate: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub personal_property: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub other_assets: Option<Decimal>,

    // Liabilities
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub auto_loans: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub credit_cards: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub student_loans: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub personal_loans: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub other_debts: Option<Decimal>,

    // Goals
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub retirement_goal: Option<Decimal>,
    #[serde(deserialize_with = "lenient_u32_option::deserialize", skip_serializing_if = "Option::is_none")]
    pub retirement_age: Option<u32>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub emergency_fund_goal: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub education_goal: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub home_goal: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub vacation_goal: Option<Decimal>,

    // Insurance
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub term_life_coverage: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub term_life_premium: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub whole_life_coverage: Option<Decimal>,
    #[serde(with = "lenient_decimal_option", skip_serializing_if = "Option::is_none")]
    pub whole_life_premium: Option<Decimal>,

    // Estate planning
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_will: bool,
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_trust: bool,
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_power_of_attorney: bool,
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_healthcare_directive: bool,
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_beneficiary_designations: bool,
    #[serde(deserialize_with = "lenient_bool::deserialize")]
    pub has_estateplan: bool,

    // Preferences
    #[serde(deserialize_with = "lenient_enum_option::deserialize", skip_serializing_if = "Option::is_none")]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(deserialize_with = "lenient_enum_option::deserialize", skip_serializing_if = "Option::is_none")]
    pub investment_timeline: Option<InvestmentTimeline>,
}

impl FinancialRecord {
    /// Fills every absent amount with zero and groups the fields by category.
    pub fn normalize(&self) -> FinancialStatement {
        let amount = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);

        FinancialStatement {
            income: IncomeStatement {
                salary: amount(self.salary),
                business_income: amount(self.business_income),
                investment_income: amount(self.investment_income),
                other_income: amount(self.other_income),
            },
            expenses: ExpenseStatement {
                housing: amount(self.housing),
                transportation: amount(self.transportation),
                food: amount(self.food),
                utilities: amount(self.utilities),
                insurance: amount(self.insurance),
                entertainment: amount(self.entertainment),
                healthcare: amount(self.healthcare),
                miscellaneous: amount(self.miscellaneous),
            },
            assets: AssetStatement {
                cash_savings: amount(self.cash_savings),
                checking: amount(self.checking),
                investments: amount(self.investments),
                retirement: amount(self.retirement),
                real_estate: amount(self.real_estate),
                vehicles: amount(self.vehicles),
                personal_property: amount(self.personal_property),
                other_assets: amount(self.other_assets),
            },
            liabilities: LiabilityStatement {
                mortgage: amount(self.mortgage),
                auto_loans: amount(self.auto_loans),
                credit_cards: amount(self.credit_cards),
                student_loans: amount(self.student_loans),
                personal_loans: amount(self.personal_loans),
                other_debts: amount(self.other_debts),
            },
            goals: FinancialGoals {
                retirement_goal: self.retirement_goal,
                retirement_age: self.retirement_age,
                emergency_fund_goal: self.emergency_fund_goal,
                education_goal: self.education_goal,
                home_goal: self.home_goal,
                vacation_goal: self.vacation_goal,
            },
            protection: LifeInsuranceCoverage {
                term_life_coverage: amount(self.term_life_coverage),
                term_life_premium: amount(self.term_life_premium),
                whole_life_coverage: amount(self.whole_life_coverage),
                whole_life_premium: amount(self.whole_life_premium),
            },
            estate: EstatePlanning {
                has_will: self.has_will,
                has_trust: self.has_trust,
                has_power_of_attorney: self.has_power_of_attorney,
                has_healthcare_directive: self.has_healthcare_directive,
                has_beneficiary_designations: self.has_beneficiary_designations,
                has_estate_plan: self.has_estateplan,
            },
            preferences: InvestmentPreferences {
                risk_tolerance: self.risk_tolerance,
                investment_timeline: self.investment_timeline,
            },
        }
    }
}

/// A single named amount inside one of the statement categories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatementLine {
    /// Field key as it appears in the record (camelCase)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub value: Decimal,
}

const fn line(key: &'static str, name: &'static str, value: Decimal) -> StatementLine {
    StatementLine { key, name, value }
}

fn sum_lines(lines: &[StatementLine]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, l| acc.saturating_add(l.value))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub salary: Decimal,
    pub business_income: Decimal,
    pub investment_income: Decimal,
    pub other_income: Decimal,
}

impl IncomeStatement {
    pub fn lines(&self) -> [StatementLine; 4] {
        [
            line("salary", "Salary", self.salary),
            line("businessIncome", "Business Income", self.business_income),
            line("investmentIncome", "Investment Income", self.investment_income),
            line("otherIncome", "Other Income", self.other_income),
        ]
    }

    pub fn total(&self) -> Decimal {
        sum_lines(&self.lines())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseStatement {
    pub housing: Decimal,
    pub transportation: Decimal,
    pub food: Decimal,
    pub utilities: Decimal,
    pub insurance: Decimal,
    pub entertainment: Decimal,
    pub healthcare: Decimal,
    pub miscellaneous: Decimal,
}

impl ExpenseStatement {
    pub fn lines(&self) -> [StatementLine; 8] {
        [
            line("housing", "Housing", self.housing),
            line("transportation", "Transportation", self.transportation),
            line("food", "Food", self.food),
            line("utilities", "Utilities", self.utilities),
            line("insurance", "Insurance", self.insurance),
            line("entertainment", "Entertainment", self.entertainment),
            line("healthcare", "Healthcare", self.healthcare),
            line("miscellaneous", "Miscellaneous", self.miscellaneous),
        ]
    }

    pub fn total(&self) -> Decimal {
        sum_lines(&self.lines())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatement {
    pub cash_savings: Decimal,
    pub checking: Decimal,
    pub investments: Decimal,
    pub retirement: Decimal,
    pub real_estate: Decimal,
    pub vehicles: Decimal,
    pub personal_property: Decimal,
    pub other_assets: Decimal,
}

impl AssetStatement {
    pub fn lines(&self) -> [StatementLine; 8] {
        [
            line("cashSavings", "Cash Savings", self.cash_savings),
            line("checking", "Checking", self.checking),
            line("investments", "Investments", self.investments),
            line("retirement", "Retirement Accounts", self.retirement),
            line("realEstate", "Real Estate", self.real_estate),
            line("vehicles", "Vehicles", self.vehicles),
            line("personalProperty", "Personal Property", self.personal_property),
            line("otherAssets", "Other Assets", self.other_assets),
        ]
    }

    pub fn total(&self) -> Decimal {
        sum_lines(&self.lines())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiabilityStatement {
    pub mortgage: Decimal,
    pub auto_loans: Decimal,
    pub credit_cards: Decimal,
    pub student_loans: Decimal,
    pub personal_loans: Decimal,
    pub other_debts: Decimal,
}

impl LiabilityStatement {
    pub fn lines(&self) -> [StatementLine; 6] {
        [
            line("mortgage", "Mortgage", self.mortgage),
            line("autoLoans", "Auto Loans", self.auto_loans),
            line("creditCards", "Credit Cards", self.credit_cards),
            line("studentLoans", "Student Loans", self.student_loans),
            line("personalLoans", "Personal Loans", self.personal_loans),
            line("otherDebts", "Other Debts", self.other_debts),
        ]
    }

    pub fn total(&self) -> Decimal {
        sum_lines(&self.lines())
    }
}

/// Savings targets. These are goals rather than balances, so absent stays absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoals {
    pub retirement_goal: Option<Decimal>,
    pub retirement_age: Option<u32>,
    pub emergency_fund_goal: Option<Decimal>,
    pub education_goal: Option<Decimal>,
    pub home_goal: Option<Decimal>,
    pub vacation_goal: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeInsuranceCoverage {
    pub term_life_coverage: Decimal,
    pub term_life_premium: Decimal,
    pub whole_life_coverage: Decimal,
    pub whole_life_premium: Decimal,
}

impl LifeInsuranceCoverage {
    pub fn total_coverage(&self) -> Decimal {
        self.term_life_coverage
            .saturating_add(self.whole_life_coverage)
    }

    pub fn total_premiums(&self) -> Decimal {
        self.term_life_premium.saturating_add(self.whole_life_premium)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstatePlanning {
    pub has_will: bool,
    pub has_trust: bool,
    pub has_power_of_attorney: bool,
    pub has_healthcare_directive: bool,
    pub has_beneficiary_designations: bool,
    pub has_estate_plan: bool,
}

impl EstatePlanning {
    /// Estate documents as (key, display name, on file).
    pub fn documents(&self) -> [(&'static str, &'static str, bool); 6] {
        [
            ("will", "Will", self.has_will),
            ("trust", "Trust", self.has_trust),
            ("powerOfAttorney", "Power of Attorney", self.has_power_of_attorney),
            ("healthcareDirective", "Healthcare Directive", self.has_healthcare_directive),
            (
                "beneficiaryDesignations",
                "Beneficiary Designations",
                self.has_beneficiary_designations,
            ),
            ("estatePlan", "Estate Plan", self.has_estate_plan),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPreferences {
    pub risk_tolerance: Option<RiskTolerance>,
    pub investment_timeline: Option<InvestmentTimeline>,
}

/// Fully populated financial data, grouped by category.
///
/// Produced by [`FinancialRecord::normalize`]; every amount is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatement {
    pub income: IncomeStatement,
    pub expenses: ExpenseStatement,
    pub assets: AssetStatement,
    pub liabilities: LiabilityStatement,
    pub goals: FinancialGoals,
    pub protection: LifeInsuranceCoverage,
    pub estate: EstatePlanning,
    pub preferences: InvestmentPreferences,
}
