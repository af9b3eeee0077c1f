//! Exact ensemble recurrence time.
//!
//! A ring that completes a full rotation every `period` time units and is
//! divided into `n` congruent wedges returns to a *visually* congruent state
//! every `period / n` units. The recurrence time of the whole ensemble is
//! the least common multiple of those rational effective periods, computed
//! with integer lcm arithmetic so no floating-point error accumulates:
//!
//! 1. `common_denom = lcm(wedge counts)`
//! 2. `num_i = period_i * (common_denom / wedge_i)` rescales each effective
//!    period into a common integer unit
//! 3. result = `lcm(num_i) / common_denom`, as an automatically reduced
//!    rational.

use num_rational::Ratio;
use num_traits::{ToPrimitive, Zero};

use crate::rational::lcm_all;

/// Minimal positive time at which every ring's wedge pattern is
/// simultaneously congruent to its state at t = 0.
///
/// `periods` and `wedge_counts` are parallel, one entry per ring, every
/// entry >= 1. An empty ensemble has recurrence 0.
pub fn recurrence_time(periods: &[u64], wedge_counts: &[u64]) -> Ratio<u128> {
    debug_assert_eq!(periods.len(), wedge_counts.len());
    debug_assert!(periods.iter().all(|&p| p >= 1));
    debug_assert!(wedge_counts.iter().all(|&w| w >= 1));

    if periods.is_empty() {
        return Ratio::zero();
    }

    let common_denom = lcm_all(wedge_counts.iter().map(|&w| w as u128));
    let numerators = periods
        .iter()
        .zip(wedge_counts)
        .map(|(&p, &w)| p as u128 * (common_denom / w as u128));
    let common_num = lcm_all(numerators);

    Ratio::new(common_num, common_denom)
}

/// `recurrence_time` as a float, for clock arithmetic. 0.0 for the empty
/// ensemble.
pub fn recurrence_seconds(periods: &[u64], wedge_counts: &[u64]) -> f64 {
    recurrence_time(periods, wedge_counts)
        .to_f64()
        .unwrap_or(0.0)
}
