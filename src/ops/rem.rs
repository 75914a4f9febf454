//! Remainder.

use crate::dec::Dec;

impl Dec {
    /// Computes `self − trunc(self/rhs)·rhs`, the remainder of division
    /// truncated toward zero. The sign of a nonzero result follows
    /// `self`. No scale argument: the result carries the natural scale
    /// of the multiply-subtract.
    ///
    /// `rhs` must be nonzero; dividing by zero is not recovered here.
    pub fn modulo(&self, rhs: &Self) -> Self {
        let q = self.quot_trunc(rhs);
        self.sub(&q.mul(rhs))
    }
}
