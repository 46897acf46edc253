use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for monetary amounts in reports
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for percentages and ratios in reports
pub const DISPLAY_PERCENT_PRECISION: u32 = 1;

/// Savings rate (percent) below which a client is warned
pub const MIN_SAVINGS_RATE_PCT: Decimal = dec!(10);

/// Debt-to-income ratio (percent) above which a client is warned
pub const MAX_DEBT_TO_INCOME_PCT: Decimal = dec!(36);

/// Months of expenses an emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: Decimal = dec!(3);

/// Multiplier used to turn a fraction into a percentage
pub const PERCENT: Decimal = dec!(100);
