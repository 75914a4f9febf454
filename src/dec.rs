//! Signed decimal number with an arbitrary-width unscaled integer and an
//! explicit nonnegative scale.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::common::util::{dec_len, div_round_half_even, ten_pow};
use crate::defs::{Error, Scale, LOG2_10};

/// An arbitrary-precision signed decimal.
///
/// The represented value is `unscaled · 10^-scale`. Two decimals with
/// different `(unscaled, scale)` pairs can represent equal values;
/// comparison, equality, and ordering are by mathematical value.
#[derive(Debug, Clone)]
pub struct Dec {
    unscaled: BigInt,
    scale: Scale,
}

impl Dec {
    /// Creates a decimal from an unscaled integer and a scale.
    ///
    /// `Dec::new(125, 3)` is 0.125.
    pub fn new(unscaled: i64, scale: Scale) -> Self {
        Dec {
            unscaled: BigInt::from(unscaled),
            scale,
        }
    }

    /// Creates a decimal from an arbitrary-width unscaled integer and a scale.
    pub fn from_parts(unscaled: BigInt, scale: Scale) -> Self {
        Dec { unscaled, scale }
    }

    /// The decimal 0 with scale 0.
    pub fn zero() -> Self {
        Dec::new(0, 0)
    }

    /// The decimal 1 with scale 0.
    pub fn one() -> Self {
        Dec::new(1, 0)
    }

    /// Borrows the unscaled integer.
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The scale: the number of decimal fraction digits carried.
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// The sign of the value: -1, 0, or 1.
    pub fn sign(&self) -> i8 {
        match self.unscaled.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Dec {
            unscaled: self.unscaled.magnitude().clone().into(),
            scale: self.scale,
        }
    }

    /// Negated value.
    pub fn neg(&self) -> Self {
        Dec {
            unscaled: -&self.unscaled,
            scale: self.scale,
        }
    }

    /// Sum of `self` and `rhs` at the wider of the two scales.
    pub fn add(&self, rhs: &Self) -> Self {
        let (a, b, scale) = Self::aligned(self, rhs);
        Dec {
            unscaled: a + b,
            scale,
        }
    }

    /// Difference of `self` and `rhs` at the wider of the two scales.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (a, b, scale) = Self::aligned(self, rhs);
        Dec {
            unscaled: a - b,
            scale,
        }
    }

    /// Exact product of `self` and `rhs`. The scales add.
    pub fn mul(&self, rhs: &Self) -> Self {
        Dec {
            unscaled: &self.unscaled * &rhs.unscaled,
            scale: self.scale + rhs.scale,
        }
    }

    /// Integer quotient of `self / rhs`, truncated toward zero, at scale 0.
    ///
    /// `rhs` must be nonzero.
    pub fn quot_trunc(&self, rhs: &Self) -> Self {
        debug_assert!(!rhs.is_zero());
        let (a, b, _) = Self::aligned(self, rhs);
        Dec {
            unscaled: a / b,
            scale: 0,
        }
    }

    /// Quotient of `self / rhs` at exactly `scale` fraction digits,
    /// rounded half to even.
    ///
    /// `rhs` must be nonzero.
    pub fn div_to_scale(&self, rhs: &Self, scale: Scale) -> Self {
        debug_assert!(!rhs.is_zero());

        let shift = scale as i64 + rhs.scale as i64 - self.scale as i64;
        let q = if shift >= 0 {
            div_round_half_even(&(&self.unscaled * ten_pow(shift as u32)), &rhs.unscaled)
        } else {
            div_round_half_even(&self.unscaled, &(&rhs.unscaled * ten_pow(-shift as u32)))
        };

        Dec { unscaled: q, scale }
    }

    /// The same value re-expressed at exactly `scale` fraction digits.
    /// Widening appends zeros; narrowing rounds half to even.
    pub fn rescale(&self, scale: Scale) -> Self {
        match scale.cmp(&self.scale) {
            Ordering::Equal => self.clone(),
            Ordering::Greater => Dec {
                unscaled: &self.unscaled * ten_pow(scale - self.scale),
                scale,
            },
            Ordering::Less => Dec {
                unscaled: div_round_half_even(&self.unscaled, &ten_pow(self.scale - scale)),
                scale,
            },
        }
    }

    /// The integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        if self.scale == 0 {
            self.unscaled.clone()
        } else {
            &self.unscaled / ten_pow(self.scale)
        }
    }

    /// Returns true if the fractional part is zero.
    pub fn is_integer(&self) -> bool {
        self.scale == 0 || (&self.unscaled % ten_pow(self.scale)).is_zero()
    }

    // Decimal digit count of the integer part; 0 when |value| < 1.
    pub(crate) fn int_digits(&self) -> u64 {
        let d = dec_len(self.unscaled.magnitude()) as i64 - self.scale as i64;
        d.max(0) as u64
    }

    // floor(log10(|value|)); the value must be nonzero.
    pub(crate) fn magnitude10(&self) -> i64 {
        debug_assert!(!self.is_zero());
        dec_len(self.unscaled.magnitude()) as i64 - self.scale as i64 - 1
    }

    // Fractional estimate of the decimal digits left of the point,
    // negative when |value| < 1. Cheap: derived from the binary width.
    pub(crate) fn digits_est(&self) -> f64 {
        self.unscaled.bits() as f64 / LOG2_10 - self.scale as f64
    }

    // 10^e as a decimal, for initial root guesses.
    pub(crate) fn pow10(e: i64) -> Self {
        if e >= 0 {
            Dec::from_parts(ten_pow(e as u32), 0)
        } else {
            Dec::new(1, -e as u32)
        }
    }

    // Float image of the value; never fails. Values beyond the binary
    // range map to infinities, which callers screen for.
    pub(crate) fn to_f64_lossy(&self) -> f64 {
        format!("{}e-{}", self.unscaled, self.scale)
            .parse::<f64>()
            .unwrap_or(f64::NAN)
    }

    // Unscaled integers brought to the wider of the two scales.
    fn aligned(lhs: &Self, rhs: &Self) -> (BigInt, BigInt, Scale) {
        match lhs.scale.cmp(&rhs.scale) {
            Ordering::Equal => (lhs.unscaled.clone(), rhs.unscaled.clone(), lhs.scale),
            Ordering::Less => (
                &lhs.unscaled * ten_pow(rhs.scale - lhs.scale),
                rhs.unscaled.clone(),
                rhs.scale,
            ),
            Ordering::Greater => (
                lhs.unscaled.clone(),
                &rhs.unscaled * ten_pow(lhs.scale - rhs.scale),
                lhs.scale,
            ),
        }
    }
}

impl Ord for Dec {
    fn cmp(&self, other: &Self) -> Ordering {
        let ls = self.sign();
        let rs = other.sign();
        if ls != rs {
            return ls.cmp(&rs);
        }
        let (a, b, _) = Self::aligned(self, other);
        a.cmp(&b)
    }
}

impl PartialOrd for Dec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Dec {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Dec {}

impl FromStr for Dec {
    type Err = Error;

    /// Parses plain decimal notation and scientific notation.
    /// Positive exponents fold into the unscaled integer so that the
    /// scale stays nonnegative.
    fn from_str(input: &str) -> Result<Self, Error> {
        let (mant, exp) = match input.find(['e', 'E']) {
            Some(i) => (
                &input[..i],
                input[i + 1..].parse::<i64>().map_err(|_| Error::Parse)?,
            ),
            None => (input, 0),
        };

        let (neg, mant) = match mant.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mant.strip_prefix('+').unwrap_or(mant)),
        };

        let (int_part, frac_part) = match mant.find('.') {
            Some(i) => (&mant[..i], &mant[i + 1..]),
            None => (mant, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::Parse);
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::Parse);
        }

        let digits = [int_part, frac_part].concat();
        let mut unscaled = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Error::Parse)?;
        if neg {
            unscaled = -unscaled;
        }

        let mut scale = frac_part.len() as i64 - exp;
        if scale < 0 {
            unscaled *= ten_pow(-scale as u32);
            scale = 0;
        }
        if scale > Scale::MAX as i64 {
            return Err(Error::Parse);
        }

        Ok(Dec {
            unscaled,
            scale: scale as Scale,
        })
    }
}

impl fmt::Display for Dec {
    /// Plain decimal notation: all digits, no exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let sign = if self.sign() < 0 { "-" } else { "" };

        if self.scale == 0 {
            return write!(f, "{}{}", sign, digits);
        }

        let scale = self.scale as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}{}.{}", sign, int_part, frac_part)
        } else {
            write!(f, "{}0.{}{}", sign, "0".repeat(scale - digits.len()), digits)
        }
    }
}
