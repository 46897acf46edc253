//! Demo clients loaded into an empty store.

use advisory_core::clients::{ClientStatus, NewClient};
use advisory_core::financials::{FinancialRecord, InvestmentTimeline, RiskTolerance};
use rust_decimal_macros::dec;

pub const DEMO_HOUSEHOLD_ID: &str = "demo-household";
pub const DEMO_MORTGAGE_ID: &str = "demo-mortgage";
pub const DEMO_PROSPECT_ID: &str = "demo-prospect";

/// Returns the demo client set.
pub fn demo_clients() -> Vec<NewClient> {
    vec![
        NewClient {
            id: Some(DEMO_HOUSEHOLD_ID.to_string()),
            name: "Jordan Whitfield".to_string(),
            email: Some("jordan.whitfield@example.com".to_string()),
            phone: Some("555-0142".to_string()),
            status: ClientStatus::Active,
            notes: Some("Dual income, two children".to_string()),
            financial_data: Some(FinancialRecord {
                salary: Some(dec!(8500)),
                business_income: Some(dec!(2000)),
                investment_income: Some(dec!(500)),
                housing: Some(dec!(2500)),
                transportation: Some(dec!(800)),
                food: Some(dec!(900)),
                utilities: Some(dec!(400)),
                insurance: Some(dec!(500)),
                entertainment: Some(dec!(400)),
                healthcare: Some(dec!(300)),
                miscellaneous: Some(dec!(300)),
                cash_savings: Some(dec!(25000)),
                checking: Some(dec!(5000)),
                investments: Some(dec!(120000)),
                retirement: Some(dec!(250000)),
                real_estate: Some(dec!(450000)),
                mortgage: Some(dec!(280000)),
                auto_loans: Some(dec!(15000)),
                retirement_goal: Some(dec!(1500000)),
                retirement_age: Some(62),
                emergency_fund_goal: Some(dec!(36600)),
                education_goal: Some(dec!(120000)),
                term_life_coverage: Some(dec!(1000000)),
                term_life_premium: Some(dec!(85)),
                has_will: true,
                has_power_of_attorney: true,
                has_beneficiary_designations: true,
                risk_tolerance: Some(RiskTolerance::Moderate),
                investment_timeline: Some(InvestmentTimeline::Long),
                ..Default::default()
            }),
        },
        NewClient {
            id: Some(DEMO_MORTGAGE_ID.to_string()),
            name: "Priya Ramanathan".to_string(),
            email: Some("priya.r@example.com".to_string()),
            phone: None,
            status: ClientStatus::Active,
            notes: Some("Recently refinanced".to_string()),
            financial_data: Some(FinancialRecord {
                salary: Some(dec!(6200)),
                housing: Some(dec!(3100)),
                transportation: Some(dec!(650)),
                food: Some(dec!(700)),
                utilities: Some(dec!(350)),
                credit_cards: Some(dec!(4800)),
                entertainment: Some(dec!(450)),
                cash_savings: Some(dec!(4000)),
                checking: Some(dec!(1800)),
                retirement: Some(dec!(38000)),
                real_estate: Some(dec!(410000)),
                mortgage: Some(dec!(385000)),
                student_loans: Some(dec!(22000)),
                home_goal: Some(dec!(0)),
                risk_tolerance: Some(RiskTolerance::Conservative),
                investment_timeline: Some(InvestmentTimeline::Medium),
                ..Default::default()
            }),
        },
        NewClient {
            id: Some(DEMO_PROSPECT_ID.to_string()),
            name: "Sam Okonkwo".to_string(),
            email: Some("sam.okonkwo@example.com".to_string()),
            phone: None,
            status: ClientStatus::Prospect,
            notes: Some("Intro call booked".to_string()),
            financial_data: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_clients_have_unique_ids() {
        let clients = demo_clients();
        let mut ids: Vec<_> = clients.iter().filter_map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), clients.len());
        assert!(clients.iter().all(|c| c.validate().is_ok()));
    }
}
