//! Square root.

use crate::common::consts::TWO;
use crate::dec::Dec;
use crate::defs::{Error, Scale, MAX_NEWTON_ITER, ROOT_GUARD};

impl Dec {
    /// Computes the square root to `scale` fraction digits, rounded half
    /// to even.
    ///
    /// ## Errors
    ///
    ///  - NegativeArg: the argument is negative.
    pub fn sqrt(&self, scale: Scale) -> Result<Self, Error> {
        if self.sign() < 0 {
            return Err(Error::NegativeArg);
        }
        if self.is_zero() {
            return Ok(Dec::zero().rescale(scale));
        }
        Ok(self.sqrt_positive(scale))
    }

    // Newton iteration at an extended working scale. The argument must
    // be positive.
    pub(crate) fn sqrt_positive(&self, scale: Scale) -> Self {
        let ws = scale + ROOT_GUARD;
        let eps = Dec::new(1, ws);

        // start near 10^(m/2) and let the quadratic convergence close in
        let mut z = Dec::pow10(self.magnitude10().div_euclid(2));

        for _ in 0..MAX_NEWTON_ITER {
            // z <- (z + x/z) / 2
            let t = self.div_to_scale(&z, ws);
            let next = z.add(&t).div_to_scale(&TWO, ws);
            let done = next.sub(&z).abs() <= eps;
            z = next;
            if done {
                break;
            }
        }

        z.rescale(scale)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_sqrt() {
        let cases = [
            ("0.00000000001", "0.0000031622776602"),
            ("0", "0"),
            (".12345678987654321122763812", "0.3513641841117891"),
            ("4", "2"),
            ("9", "3"),
            ("100", "10"),
            ("2454495034", "49542.8605754653613946"),
            ("24544.95034", "156.6682812186308502"),
            ("1234567898765432112.2763812", "1111111110.0000000055243715"),
        ];
        for (input, expected) in cases {
            let r = dec(input).sqrt(16).unwrap();
            assert_eq!(r, dec(expected), "sqrt({}, 16)", input);
            assert_eq!(r.scale(), 16);
        }
    }

    #[test]
    fn test_sqrt_double_scale() {
        let cases = [
            (
                "234895738245234059870198705892968191574905861209834710948561902834710985610892374",
                "15326308696004855684990787370582512173391.71890205964489889707604945584880",
            ),
            (
                "0.0000000000000000000000000000000000000000000000000000001",
                "0.00000000000000000000000000031623",
            ),
            ("0.00000000001", "0.00000316227766016837933199889354"),
            ("0", "0"),
            (".12345678987654321122763812", "0.35136418411178907639479458498081"),
            ("4", "2"),
            ("9", "3"),
            ("100", "10"),
            ("2454495034", "49542.86057546536139455430949116585673"),
            ("24544.95034", "156.66828121863085021083671472749063"),
            (
                "1234567898765432112.2763812",
                "1111111110.00000000552437154552437153179097",
            ),
        ];
        // within one ulp of the reference values at scale 32
        let ulp = Dec::new(1, 32);
        for (input, expected) in cases {
            let r = dec(input).sqrt(32).unwrap();
            assert!(
                r.sub(&dec(expected)).abs() <= ulp,
                "sqrt({}, 32) = {}",
                input,
                r
            );
        }
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(dec("-1").sqrt(16), Err(Error::NegativeArg));
        assert_eq!(dec("-0.00001").sqrt(16), Err(Error::NegativeArg));
    }

    #[test]
    fn test_sqrt_random_residual() {
        for _ in 0..200 {
            let x = Dec::from_f64(rand::random::<f64>() * 1e6);
            let r = x.sqrt(16).unwrap();
            let residual = r.mul(&r).sub(&x).abs();
            let bound = Dec::new(1, 16).mul(&Dec::one().add(&x));
            assert!(residual <= bound, "sqrt residual too large for {}", x);
        }
    }

    #[ignore]
    #[test]
    fn sqrt_perf() {
        let mut n = vec![];
        for _ in 0..10000 {
            n.push(Dec::from_f64(rand::random::<f64>().abs()));
        }

        for _ in 0..5 {
            let start_time = std::time::Instant::now();
            for ni in n.iter() {
                let _ = ni.sqrt(16).unwrap();
            }
            println!("{}", start_time.elapsed().as_millis());
        }
    }
}
