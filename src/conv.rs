//! Conversion between binary floats and decimals.

use crate::dec::Dec;
use crate::defs::Error;

impl Dec {
    /// Creates a decimal equal to the shortest decimal text that
    /// round-trips to `f`.
    ///
    /// For finite `f` the conversion is exact with respect to that text:
    /// `Dec::from_f64(123.2)` is 123.2, not the nearest binary fraction
    /// expanded. The result for NaN or infinity is unspecified; callers
    /// must screen non-finite input.
    pub fn from_f64(f: f64) -> Self {
        f.to_string().parse().unwrap_or_else(|_| Dec::zero())
    }

    /// Replaces `self` with the decimal form of `f`, as [`Dec::from_f64`].
    pub fn set_from_f64(&mut self, f: f64) {
        *self = Dec::from_f64(f);
    }

    /// Converts to the nearest binary double by scanning the scientific
    /// textual form of the value.
    ///
    /// ## Errors
    ///
    ///  - Parse: the textual form does not scan as a finite double.
    pub fn to_f64(&self) -> Result<f64, Error> {
        let f = self.to_f64_lossy();
        if f.is_finite() {
            Ok(f)
        } else {
            Err(Error::Parse)
        }
    }
}
