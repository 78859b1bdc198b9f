//! Supporting financial math: CAGR, NPV, IRR, and summary statistics.
//!
//! These helpers back the valuation methods and the reporting layer but are
//! not valuation methods themselves. They deliberately return neutral
//! defaults (zero, `None`) on degenerate inputs instead of erroring, since
//! they feed display surfaces rather than the engine contract.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Newton-Raphson iteration budget for the IRR root-find.
const IRR_MAX_ITERATIONS: usize = 100;

/// Convergence threshold on |NPV| during IRR iteration.
const IRR_CONVERGENCE: Decimal = dec!(0.000001);

/// Acceptance tolerance on |NPV| for the final IRR candidate.
const IRR_SOLUTION_TOLERANCE: Decimal = dec!(0.001);

/// Divides `numerator` by `denominator`, returning `default` when the
/// denominator is zero.
pub fn safe_divide(numerator: Decimal, denominator: Decimal, default: Decimal) -> Decimal {
    if denominator == Decimal::ZERO {
        default
    } else {
        numerator / denominator
    }
}

/// Compound annual growth rate between two values over `periods` periods.
///
/// Returns zero when either value or the period count is non-positive.
pub fn calculate_growth_rate(initial_value: Decimal, final_value: Decimal, periods: u32) -> Decimal {
    if initial_value <= Decimal::ZERO || final_value <= Decimal::ZERO || periods == 0 {
        return Decimal::ZERO;
    }

    let exponent = Decimal::ONE / Decimal::from(periods);
    (final_value / initial_value).powd(exponent) - Decimal::ONE
}

/// Net present value of `cash_flows` (year 1 onwards) at `discount_rate`,
/// less an optional initial investment at t=0.
pub fn calculate_npv(
    cash_flows: &[Decimal],
    discount_rate: Decimal,
    initial_investment: Decimal,
) -> Decimal {
    if cash_flows.is_empty() || discount_rate < Decimal::ZERO {
        return Decimal::ZERO;
    }

    let discount_base = Decimal::ONE + discount_rate;
    let mut npv = -initial_investment;
    for (index, cash_flow) in cash_flows.iter().enumerate() {
        let year = (index + 1) as i64;
        npv += cash_flow / discount_base.powi(year);
    }
    npv
}

/// Internal rate of return via Newton-Raphson, or `None` when the iteration
/// does not converge to an acceptable root.
///
/// The candidate rate is kept inside (-99%, 1000%); outside that band the
/// search is abandoned rather than chased into numeric extremes.
pub fn calculate_irr(cash_flows: &[Decimal], initial_investment: Decimal) -> Option<Decimal> {
    if cash_flows.is_empty() || initial_investment <= Decimal::ZERO {
        return None;
    }

    let mut all_flows = Vec::with_capacity(cash_flows.len() + 1);
    all_flows.push(-initial_investment);
    all_flows.extend_from_slice(cash_flows);

    let mut irr = dec!(0.1);

    for _ in 0..IRR_MAX_ITERATIONS {
        let npv = npv_at(&all_flows, irr);
        if npv.abs() < IRR_CONVERGENCE {
            return Some(irr);
        }

        let derivative = npv_derivative_at(&all_flows, irr);
        if derivative.abs() < dec!(0.000000000001) {
            break;
        }

        irr -= npv / derivative;

        if irr < dec!(-0.99) || irr > dec!(10) {
            break;
        }
    }

    // The loop may exit on the iteration budget with a usable candidate.
    if npv_at(&all_flows, irr).abs() < IRR_SOLUTION_TOLERANCE {
        Some(irr)
    } else {
        None
    }
}

fn npv_at(flows: &[Decimal], rate: Decimal) -> Decimal {
    let base = Decimal::ONE + rate;
    flows
        .iter()
        .enumerate()
        .map(|(period, cf)| cf / base.powi(period as i64))
        .sum()
}

fn npv_derivative_at(flows: &[Decimal], rate: Decimal) -> Decimal {
    let base = Decimal::ONE + rate;
    flows
        .iter()
        .enumerate()
        .map(|(period, cf)| -Decimal::from(period as i64) * cf / base.powi((period + 1) as i64))
        .sum()
}

/// Summary statistics over a set of valuations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub count: usize,
    pub mean: Decimal,
    pub median: Decimal,
    pub std_dev: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub range: Decimal,
}

impl Default for SummaryStats {
    fn default() -> Self {
        SummaryStats {
            count: 0,
            mean: Decimal::ZERO,
            median: Decimal::ZERO,
            std_dev: Decimal::ZERO,
            min: Decimal::ZERO,
            max: Decimal::ZERO,
            range: Decimal::ZERO,
        }
    }
}

/// Computes count/mean/median/std/min/max/range over `valuations`.
/// An empty slice yields all-zero statistics.
pub fn summary_stats(valuations: &[Decimal]) -> SummaryStats {
    if valuations.is_empty() {
        return SummaryStats::default();
    }

    let count = valuations.len();
    let count_dec = Decimal::from(count as i64);
    let sum: Decimal = valuations.iter().copied().sum();
    let mean = sum / count_dec;

    let mut sorted = valuations.to_vec();
    sorted.sort();
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / dec!(2)
    };

    // Population standard deviation.
    let variance: Decimal = valuations
        .iter()
        .map(|v| (*v - mean) * (*v - mean))
        .sum::<Decimal>()
        / count_dec;
    let std_dev = variance.sqrt().unwrap_or(Decimal::ZERO);

    let min = sorted[0];
    let max = sorted[count - 1];

    SummaryStats {
        count,
        mean,
        median,
        std_dev,
        min,
        max,
        range: max - min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_divide_falls_back_on_zero_denominator() {
        assert_eq!(safe_divide(dec!(10), dec!(4), Decimal::ZERO), dec!(2.5));
        assert_eq!(safe_divide(dec!(10), Decimal::ZERO, dec!(-1)), dec!(-1));
    }

    #[test]
    fn growth_rate_recovers_known_cagr() {
        // 100 -> 200 over 1 period is 100% growth.
        let rate = calculate_growth_rate(dec!(100), dec!(200), 1);
        assert!((rate - dec!(1)).abs() < dec!(0.0001));

        // 100 -> 121 over 2 periods is 10% per period.
        let rate = calculate_growth_rate(dec!(100), dec!(121), 2);
        assert!((rate - dec!(0.10)).abs() < dec!(0.0001));
    }

    #[test]
    fn growth_rate_degenerate_inputs_yield_zero() {
        assert_eq!(calculate_growth_rate(Decimal::ZERO, dec!(100), 3), Decimal::ZERO);
        assert_eq!(calculate_growth_rate(dec!(100), Decimal::ZERO, 3), Decimal::ZERO);
        assert_eq!(calculate_growth_rate(dec!(100), dec!(200), 0), Decimal::ZERO);
    }

    #[test]
    fn npv_discounts_flows_from_year_one() {
        // 110 / 1.1 - 100 = 0
        let npv = calculate_npv(&[dec!(110)], dec!(0.10), dec!(100));
        assert_eq!(npv.round_dp(10), Decimal::ZERO);
    }

    #[test]
    fn npv_empty_or_negative_rate_is_zero() {
        assert_eq!(calculate_npv(&[], dec!(0.1), dec!(0)), Decimal::ZERO);
        assert_eq!(
            calculate_npv(&[dec!(100)], dec!(-0.1), dec!(0)),
            Decimal::ZERO
        );
    }

    #[test]
    fn irr_recovers_discount_rate_of_fairly_priced_annuity() {
        // Three flows of 100 priced at their 10% NPV: IRR must be ~10%.
        let flows = [dec!(100), dec!(100), dec!(100)];
        let price = calculate_npv(&flows, dec!(0.10), Decimal::ZERO);

        let irr = calculate_irr(&flows, price).expect("IRR should converge");
        assert!((irr - dec!(0.10)).abs() < dec!(0.001), "irr was {}", irr);
    }

    #[test]
    fn irr_rejects_degenerate_inputs() {
        assert_eq!(calculate_irr(&[], dec!(100)), None);
        assert_eq!(calculate_irr(&[dec!(100)], Decimal::ZERO), None);
    }

    #[test]
    fn summary_stats_on_known_set() {
        let stats = summary_stats(&[dec!(1), dec!(2), dec!(3), dec!(4)]);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, dec!(2.5));
        assert_eq!(stats.median, dec!(2.5));
        assert_eq!(stats.min, dec!(1));
        assert_eq!(stats.max, dec!(4));
        assert_eq!(stats.range, dec!(3));
        // Population std of 1..4 is sqrt(1.25) ~ 1.118.
        assert!((stats.std_dev - dec!(1.118034)).abs() < dec!(0.0001));
    }

    #[test]
    fn summary_stats_empty_slice_is_all_zero() {
        assert_eq!(summary_stats(&[]), SummaryStats::default());
    }
}
