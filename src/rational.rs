//! Integer gcd/lcm primitives for exact recurrence arithmetic.
//!
//! All arithmetic runs in `u128`: the least common multiple of a full
//! catalog of ~50 integer periods overflows `u64` but sits comfortably
//! inside 128 bits.

use num_integer::Integer;

/// Greatest common divisor, `gcd(a, 0) = a`.
pub fn gcd(a: u128, b: u128) -> u128 {
    a.gcd(&b)
}

/// Least common multiple. Callers guarantee both inputs >= 1, so the
/// division by the gcd can never hit zero.
pub fn lcm(a: u128, b: u128) -> u128 {
    a.lcm(&b)
}

/// Fold `lcm` over a sequence. The empty fold yields the identity 1.
pub fn lcm_all<I>(values: I) -> u128
where
    I: IntoIterator<Item = u128>,
{
    values.into_iter().fold(1, lcm)
}
