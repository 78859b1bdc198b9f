use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Inclusive score bounds for scorecard and Berkus criteria
pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 5;

/// Inclusive rating bounds for risk factor summation
pub const MIN_RISK_RATING: i32 = -2;
pub const MAX_RISK_RATING: i32 = 2;

/// Sanity ceiling for the terminal growth rate (10%)
pub const MAX_TERMINAL_GROWTH: Decimal = dec!(0.10);

/// Maximum value a single Berkus criterion can contribute
pub const BERKUS_MAX_VALUE_PER_CRITERION: Decimal = dec!(500000);

/// Risk adjustment per rating step (12.5% / 2)
pub const RISK_ADJUSTMENT_STEP: Decimal = dec!(0.0625);

/// Cap on the summed risk adjustment, applied after summation
pub const RISK_TOTAL_ADJUSTMENT_CAP: Decimal = dec!(0.5);
