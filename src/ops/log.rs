//! Logarithms derived from the natural logarithm.

use crate::common::consts::ONE;
use crate::dec::Dec;
use crate::defs::{Error, Scale, LOG_DIV_GUARD};
use crate::ops::consts::Consts;

impl Dec {
    /// Computes the base-10 logarithm to `scale` fraction digits, rounded
    /// half to even.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveLog: the argument is zero or negative.
    pub fn log10(&self, scale: Scale) -> Result<Self, Error> {
        if self.sign() <= 0 {
            return Err(Error::NonPositiveLog);
        }

        let ws = scale + LOG_DIV_GUARD;
        let ln_x = self.ln_positive(ws);
        Ok(ln_x.div_to_scale(&Consts::ln_10(ws), ws).rescale(scale))
    }

    /// Computes the logarithm in base `base` to `scale` fraction digits,
    /// rounded half to even.
    ///
    /// A base equal to the cached value of e at the base's own scale is
    /// recognized and routed to the natural logarithm directly; pass
    /// [`Consts::e`] as the base to request it.
    ///
    /// ## Errors
    ///
    ///  - InvalidBase: the base is zero, negative, or equal to one at the
    ///    working precision.
    ///  - NonPositiveLog: the argument is zero or negative.
    pub fn log_n(&self, base: &Self, scale: Scale) -> Result<Self, Error> {
        if base.sign() <= 0 || *base == *ONE {
            return Err(Error::InvalidBase);
        }
        if self.sign() <= 0 {
            return Err(Error::NonPositiveLog);
        }

        if base.scale() > 0 && *base == Consts::e(base.scale()) {
            return Ok(self.ln_positive(scale));
        }

        let ws = scale + LOG_DIV_GUARD;
        let ln_b = base.ln_positive(ws);
        if ln_b.is_zero() {
            // base indistinguishable from 1 at the working scale
            return Err(Error::InvalidBase);
        }
        let ln_x = self.ln_positive(ws);
        Ok(ln_x.div_to_scale(&ln_b, ws).rescale(scale))
    }
}
