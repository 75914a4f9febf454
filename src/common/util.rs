//! Auxiliary integer helpers.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Pow, Signed, Zero};

/// 10^n as a big integer.
pub(crate) fn ten_pow(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

/// Number of decimal digits of a nonnegative big integer; 0 for zero.
pub(crate) fn dec_len(u: &BigUint) -> u64 {
    if u.is_zero() {
        return 0;
    }

    // bits/log2(10) is exact to within one digit; correct with a compare.
    let approx = (u.bits() - 1) as f64 / crate::defs::LOG2_10;
    let mut d = approx as u64 + 1;
    if *u >= BigUint::from(10u32).pow(d as u32) {
        d += 1;
    }
    d
}

/// Signed division rounding half to even.
///
/// `d` must be nonzero. The quotient is rounded to the nearest integer;
/// ties go to the even neighbor.
pub(crate) fn div_round_half_even(n: &BigInt, d: &BigInt) -> BigInt {
    let (q, r) = n.div_rem(d);
    if r.is_zero() {
        return q;
    }

    let twice: BigInt = r.abs() * 2;
    let away = match twice.magnitude().cmp(d.magnitude()) {
        core::cmp::Ordering::Greater => true,
        core::cmp::Ordering::Equal => q.is_odd(),
        core::cmp::Ordering::Less => false,
    };

    if away {
        // the true quotient's sign decides the bump direction
        if n.is_negative() == d.is_negative() {
            q + BigInt::one()
        } else {
            q - BigInt::one()
        }
    } else {
        q
    }
}
