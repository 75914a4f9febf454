//! Exponential.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::common::consts::ONE;
use crate::common::util::dec_len;
use crate::dec::Dec;
use crate::defs::{Scale, EXP_GUARD, LOG10_E};
use crate::ops::consts::Consts;

impl Dec {
    /// Computes e raised to `self` at `scale` fraction digits, rounded
    /// half to even.
    ///
    /// Defined for every finite argument. The working precision and the
    /// result width grow with the magnitude of the argument, so callers
    /// with untrusted input should screen extreme magnitudes first, the
    /// way [`Dec::pow`] does.
    pub fn exp(&self, scale: Scale) -> Self {
        // x = k + f with k integral and |f| < 1, both taking x's sign
        let k = self.trunc();
        let f = self.sub(&Dec::from_parts(k.clone(), 0));

        let ws = scale + EXP_GUARD + magnitude_allowance(&k);
        let eps = Dec::new(1, ws);

        // e^f = sum f^n / n!
        let mut term = ONE.clone();
        let mut sum = ONE.clone();
        let mut n = 1i64;
        loop {
            term = term.mul(&f).div_to_scale(&Dec::new(n, 0), ws);
            if term.abs() < eps {
                break;
            }
            sum = sum.add(&term);
            n += 1;
        }

        if k.is_zero() {
            return sum.rescale(scale);
        }

        // e^|k| by binary exponentiation of the cached e
        let e = Consts::e(ws);
        let mut pow = ONE.clone();
        let mut base = e;
        let mut bits = k.magnitude().clone();
        loop {
            if bits.is_odd() {
                pow = pow.mul(&base).rescale(ws);
            }
            bits >>= 1;
            if bits.is_zero() {
                break;
            }
            base = base.mul(&base).rescale(ws);
        }

        let r = if k.is_negative() {
            sum.div_to_scale(&pow, ws)
        } else {
            sum.mul(&pow)
        };
        r.rescale(scale)
    }
}

// Extra working digits covering the decimal width of e^k and the
// rounding steps of the exponentiation ladder.
fn magnitude_allowance(k: &BigInt) -> Scale {
    if k.is_zero() {
        return 0;
    }

    let kd = dec_len(k.magnitude()) as Scale;
    if k.is_negative() {
        kd
    } else {
        let kf = k.to_f64().unwrap_or(f64::INFINITY);
        kd + (kf * LOG10_E).ceil() as Scale
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Error;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_exp() {
        let cases = [
            ("2.1", "8.1661699125676501"),
            ("1", "2.7182818284590452"),
            ("2", "7.3890560989306502"),
            ("0.0001", "1.0001000050001667"),
            ("-7.1", "0.0008251049232659"),
            ("-0.7", "0.4965853037914095"),
            ("0.8", "2.2255409284924676"),
            ("-6.6970342501104617", "0.0012345678982173"),
            ("-0.6931471805599453", ".5"),
            ("0.6931471805599453", "2"),
            ("7.1184763011977896", "1234.5678899999999838"),
            ("41.6572527032084749", "1234567898765432082.9890763978113354"),
        ];
        for (input, expected) in cases {
            let r = dec(input).exp(16);
            assert_eq!(r, dec(expected), "exp({}, 16)", input);
            assert_eq!(r.scale(), 16);
        }
    }

    #[test]
    fn test_exp_double_scale() {
        let cases = [
            ("2.1", "8.16616991256765007344972741047863"),
            ("1", "2.71828182845904523536028747135266"),
            ("2", "7.38905609893065022723042746057501"),
            ("0.0001", "1.00010000500016667083341666805558"),
            ("-7.1", "0.00082510492326590427014622545675"),
            ("-0.7", "0.49658530379140951470480009339753"),
            ("0.8", "2.22554092849246760457953753139508"),
            ("-6.6970342501104617", "0.00123456789821731204022899358047"),
            ("-0.6931471805599453", "0.50000000000000000470861606072909"),
            ("0.6931471805599453", "1.99999999999999998116553575708365"),
            ("7.1184763011977896", "1234.56788999999998382225190704296197"),
            (
                "41.6572527032084749",
                "1234567898765432082.98907639781133543894457806069743",
            ),
        ];
        let ulp = Dec::new(1, 32);
        for (input, expected) in cases {
            let r = dec(input).exp(32);
            assert!(
                r.sub(&dec(expected)).abs() <= ulp,
                "exp({}, 32) = {}",
                input,
                r
            );
        }
    }

    // e^312.345 runs to ~136 integer digits; pin it through its inverse
    // rather than through digit strings.
    #[test]
    fn test_exp_large_argument() {
        let x = dec("312.345");
        let r = x.exp(16);
        assert_eq!(r.int_digits(), 136);
        assert_eq!(r.scale(), 16);
        assert_eq!(r.ln(16).unwrap(), dec("312.345"));

        let r32 = x.exp(32);
        assert_eq!(r32.rescale(16), r);
    }

    #[test]
    fn test_exp_ln_inverse() {
        // |exp(ln(x)) - x| <= 10^-(s-2) * |x|
        for _ in 0..100 {
            let x = Dec::from_f64(rand::random::<f64>() * 1e5 + 0.1);
            let r = x.ln(16).unwrap().exp(16);
            let bound = Dec::new(1, 14).mul(&x);
            assert!(r.sub(&x).abs() <= bound, "exp(ln({})) = {}", x, r);
        }
    }

    #[test]
    fn test_exp_errors_are_absent() {
        // exp reports no errors; the zero argument is exact
        assert_eq!(dec("0").exp(16), dec("1"));
        assert_eq!(dec("0").ln(16).unwrap_err(), Error::NonPositiveLog);
    }

    #[ignore]
    #[test]
    fn exp_perf() {
        let mut n = vec![];
        for _ in 0..100 {
            let f = rand::random::<f64>().abs() + (rand::random::<u32>() % 100) as f64;
            n.push(Dec::from_f64(f));
        }

        for _ in 0..5 {
            let start_time = std::time::Instant::now();
            for ni in n.iter() {
                let _ = ni.exp(16);
            }
            println!("{}", start_time.elapsed().as_millis());
        }
    }
}
