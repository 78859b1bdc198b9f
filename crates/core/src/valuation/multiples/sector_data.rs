//! Reference sector multiples for market comparison.
//!
//! These are indicative industry benchmarks, not live market data; callers
//! may use them to pre-fill the multiple for a multiples valuation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::MetricType;

/// Indicative (Revenue, EBITDA) multiples per sector.
pub const SECTOR_MULTIPLES: [(&str, Decimal, Decimal); 15] = [
    ("Technology", dec!(6.5), dec!(15.2)),
    ("SaaS", dec!(8.2), dec!(18.5)),
    ("E-commerce", dec!(3.1), dec!(12.8)),
    ("Fintech", dec!(7.8), dec!(16.9)),
    ("Biotech", dec!(12.4), dec!(25.6)),
    ("Cleantech", dec!(4.7), dec!(13.1)),
    ("Marketplace", dec!(5.3), dec!(14.7)),
    ("Media", dec!(2.8), dec!(9.4)),
    ("Manufacturing", dec!(1.9), dec!(8.2)),
    ("Retail", dec!(1.4), dec!(6.8)),
    ("Healthcare", dec!(4.2), dec!(12.1)),
    ("Education", dec!(3.8), dec!(10.5)),
    ("Gaming", dec!(7.1), dec!(16.3)),
    ("Food & Beverage", dec!(2.1), dec!(7.8)),
    ("Real Estate", dec!(3.4), dec!(9.7)),
];

/// Returns the benchmark multiple for a sector and metric, if the sector
/// is known.
pub fn sector_benchmark(sector: &str, metric: MetricType) -> Option<Decimal> {
    SECTOR_MULTIPLES
        .iter()
        .find(|(name, _, _)| *name == sector)
        .map(|(_, revenue, ebitda)| match metric {
            MetricType::Revenue => *revenue,
            MetricType::Ebitda => *ebitda,
        })
}

/// Lists the sectors with benchmark data, in display order.
pub fn known_sectors() -> Vec<&'static str> {
    SECTOR_MULTIPLES.iter().map(|(name, _, _)| *name).collect()
}
