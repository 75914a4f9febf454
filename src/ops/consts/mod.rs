//! Cached mathematical constants.

mod e;
mod ln10;

use crate::dec::Dec;
use crate::defs::Scale;

/// Process-wide cache of the mathematical constants the kernels consume.
///
/// Values are computed lazily and only grow in scale. A request at or
/// below the cached scale is served by rounding the cached value; a
/// larger request computes a fresh value and swaps it in atomically, so
/// concurrent readers always observe a complete value. Recomputation is
/// idempotent and the last writer wins.
pub struct Consts;

impl Consts {
    /// Euler's number at exactly `scale` fraction digits, rounded half
    /// to even.
    pub fn e(scale: Scale) -> Dec {
        e::for_scale(scale)
    }

    /// The natural logarithm of 10 at exactly `scale` fraction digits,
    /// rounded half to even.
    pub fn ln_10(scale: Scale) -> Dec {
        ln10::for_scale(scale)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_e() {
        assert_eq!(Consts::e(16).to_string(), "2.7182818284590452");
        assert_eq!(
            Consts::e(32).to_string(),
            "2.71828182845904523536028747135266"
        );
        // growing then shrinking requests serve from the cache
        assert_eq!(Consts::e(16).to_string(), "2.7182818284590452");
        assert_eq!(Consts::e(0).to_string(), "3");
    }

    #[test]
    fn test_ln_10() {
        assert_eq!(Consts::ln_10(16).to_string(), "2.3025850929940457");
        assert_eq!(
            Consts::ln_10(32).to_string(),
            "2.30258509299404568401799145468436"
        );
    }
}
