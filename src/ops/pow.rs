//! Power function.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::common::consts::ONE;
use crate::dec::Dec;
use crate::defs::{Error, Scale, POW_DIGIT_LIMIT, POW_GUARD};

impl Dec {
    /// Computes `self` raised to `y` at `scale` fraction digits, rounded
    /// half to even.
    ///
    /// An integral `y` (zero fractional part, whatever its scale) takes
    /// the binary-exponentiation path, which is exact while the result
    /// fits the working scale; anything else goes through
    /// `exp(y · ln(self))`.
    ///
    /// Before either path runs, the estimated decimal width of the
    /// result gates the call. The estimate feeds the working scale, so
    /// the rejection depends on the requested scale as well as on the
    /// operands: a deeply negative width that a large scale could still
    /// resolve is accepted there and rejected at smaller scales.
    ///
    /// ## Errors
    ///
    ///  - ZeroToNegative: `self` is zero and `y` is negative.
    ///  - NegativeToNonInteger: `self` is negative and `y` has a
    ///    fractional part.
    ///  - ArgumentTooLarge: the result width passes the gate described
    ///    above.
    pub fn pow(&self, y: &Self, scale: Scale) -> Result<Self, Error> {
        match self.sign() {
            0 => {
                return match y.sign() {
                    0 => Ok(Dec::one().rescale(scale)), // 0^0 = 1 by convention
                    1 => Ok(Dec::zero().rescale(scale)),
                    _ => Err(Error::ZeroToNegative),
                };
            }
            -1 if !y.is_integer() => return Err(Error::NegativeToNonInteger),
            _ => {}
        }
        if y.is_zero() {
            return Ok(Dec::one().rescale(scale));
        }

        // estimated decimal width of the result, sign included
        let est = y.to_f64_lossy() * self.digits_est();
        if est > POW_DIGIT_LIMIT {
            return Err(Error::ArgumentTooLarge);
        }
        let ws = scale as i64 + POW_GUARD + est as i64;
        if ws < 0 {
            return Err(Error::ArgumentTooLarge);
        }
        let ws = ws as Scale;

        if y.is_integer() {
            let n = y.trunc();
            let r = self.int_pow(n.magnitude(), ws);
            if y.sign() < 0 {
                if r.is_zero() {
                    // the power underflowed the working scale; its
                    // inverse has nothing to divide by
                    return Err(Error::ArgumentTooLarge);
                }
                return Ok(ONE.div_to_scale(&r, ws).rescale(scale));
            }
            return Ok(r.rescale(scale));
        }

        // x^y = e^(y ln x); the log carries the integer digits of y on
        // top of the working scale so the multiplied-through error stays
        // below it
        let ln_scale = ws + y.int_digits() as Scale + 2;
        let ln_x = self.ln_positive(ln_scale);
        Ok(y.mul(&ln_x).exp(ws).rescale(scale))
    }

    // Binary exponentiation. Products round at the working scale only
    // when they exceed it, so moderate integer powers stay exact.
    fn int_pow(&self, n: &BigUint, ws: Scale) -> Self {
        let mut r = Dec::one();
        let mut base = self.clone();
        let mut bits = n.clone();
        loop {
            if bits.is_odd() {
                r = r.mul(&base);
                if r.scale() > ws {
                    r = r.rescale(ws);
                }
            }
            bits >>= 1;
            if bits.is_zero() {
                break;
            }
            base = base.mul(&base);
            if base.scale() > ws {
                base = base.rescale(ws);
            }
        }
        r
    }
}
