//! Natural logarithm.

use crate::common::consts::{ONE, TENTH, TWO};
use crate::dec::Dec;
use crate::defs::{Error, Scale, LN_GUARD, ROOT_GUARD};

impl Dec {
    /// Computes the natural logarithm to `scale` fraction digits, rounded
    /// half to even.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveLog: the argument is zero or negative.
    pub fn ln(&self, scale: Scale) -> Result<Self, Error> {
        if self.sign() <= 0 {
            return Err(Error::NonPositiveLog);
        }
        Ok(self.ln_positive(scale))
    }

    // reduction: ln(x) = 2^k * ln(x^(1/2^k)), square roots until x is
    //            within 0.1 of 1
    // replacement: ln(x) = 2 * atanh((x-1)/(x+1))
    //              atanh(u) = u + u^3/3 + u^5/5 + ...
    //
    // The factor below starts at the series' 2 and doubles once per
    // halving, so the sum is scaled exactly once at the end.
    pub(crate) fn ln_positive(&self, scale: Scale) -> Self {
        let ws = scale + LN_GUARD + reduction_allowance(self);

        let mut x = self.clone();
        let mut fact = TWO.clone();
        while x.sub(&ONE).abs() >= *TENTH {
            x = x.sqrt_positive(ws + ROOT_GUARD);
            fact = fact.mul(&TWO);
        }

        let u = x.sub(&ONE).div_to_scale(&x.add(&ONE), ws);
        let usq = u.mul(&u).rescale(ws);
        let eps = Dec::new(1, ws);

        let mut term = u.clone();
        let mut sum = u;
        let mut n = 3i64;
        loop {
            term = term.mul(&usq).rescale(ws);
            if term.abs() < eps {
                break;
            }
            sum = sum.add(&term.div_to_scale(&Dec::new(n, 0), ws));
            n += 2;
        }

        sum.mul(&fact).rescale(scale)
    }
}

// Extra working digits absorbing the error amplification of the halving
// reduction, from an upper estimate of the halvings the argument needs.
// Integer arithmetic throughout so the same argument always gets the
// same working scale.
fn reduction_allowance(x: &Dec) -> Scale {
    // |ln x| <= (|floor(log10 x)| + 1) * ln(10); in hundredths
    let bound = (x.magnitude10().unsigned_abs() + 1) * 231;

    // halvings until the bound drops below ln(1.1), about 0.09
    let mut k: u64 = 0;
    while (9u64 << k) < bound {
        k += 1;
    }

    // each halving doubles the series error on the way back out
    (((k + 2) * 301 + 999) / 1000 + 2) as Scale
}
