//! Cube root.

use crate::common::consts::{THREE, TWO};
use crate::dec::Dec;
use crate::defs::{Scale, MAX_NEWTON_ITER, ROOT_GUARD};

impl Dec {
    /// Computes the cube root to `scale` fraction digits, rounded half
    /// to even. Defined for negative arguments: `cbrt(-x) = -cbrt(x)`.
    pub fn cbrt(&self, scale: Scale) -> Self {
        if self.is_zero() {
            return Dec::zero().rescale(scale);
        }

        let neg = self.sign() < 0;
        let x = self.abs();

        let ws = scale + ROOT_GUARD;
        let eps = Dec::new(1, ws);

        let mut z = Dec::pow10(x.magnitude10().div_euclid(3));

        for _ in 0..MAX_NEWTON_ITER {
            // z <- (2z + x/z^2) / 3
            let z2 = z.mul(&z);
            let t = x.div_to_scale(&z2, ws);
            let next = z.mul(&TWO).add(&t).div_to_scale(&THREE, ws);
            let done = next.sub(&z).abs() <= eps;
            z = next;
            if done {
                break;
            }
        }

        let r = z.rescale(scale);
        if neg {
            r.neg()
        } else {
            r
        }
    }
}
