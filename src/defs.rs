//! Definitions.

use core::fmt::Display;

/// Number of decimal digits kept after the point in a result.
pub type Scale = u32;

/// Extra digits of working scale for the Newton root iterations.
pub(crate) const ROOT_GUARD: Scale = 2;

/// Base guard digits for the natural logarithm kernel. The kernel adds
/// further digits proportional to the number of argument halvings.
pub(crate) const LN_GUARD: Scale = 6;

/// Guard digits for the quotient in the derived logarithms.
pub(crate) const LOG_DIV_GUARD: Scale = 4;

/// Base guard digits for the exponential kernel. The kernel adds further
/// digits proportional to the magnitude of the result.
pub(crate) const EXP_GUARD: Scale = 6;

/// Guard digits added to the requested scale in `pow` before the
/// magnitude-derived adjustment.
pub(crate) const POW_GUARD: i64 = 2;

/// Upper bound on the estimated decimal width of a `pow` result.
/// Estimates above this are rejected with `Error::ArgumentTooLarge`.
pub(crate) const POW_DIGIT_LIMIT: f64 = 400.0;

/// Iteration bound for the Newton root kernels. Quadratic convergence
/// terminates far earlier; the bound only keeps the loop finite.
pub(crate) const MAX_NEWTON_ITER: usize = 256;

/// log2(10)
pub(crate) const LOG2_10: f64 = 3.321928094887362;

/// log10(e)
pub(crate) const LOG10_E: f64 = 0.4342944819032518;

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Square root of a negative number.
    NegativeArg,

    /// Logarithm of zero or a negative number.
    NonPositiveLog,

    /// Logarithm base is zero, negative, or one.
    InvalidBase,

    /// Zero raised to a negative power.
    ZeroToNegative,

    /// Negative number raised to a non-integer power.
    NegativeToNonInteger,

    /// The result would be too large or too small to materialize at the
    /// requested scale.
    ArgumentTooLarge,

    /// A textual form could not be scanned.
    Parse,
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::NegativeArg => "square root of a negative number",
            Error::NonPositiveLog => "logarithm of a non-positive number",
            Error::InvalidBase => "invalid logarithm base",
            Error::ZeroToNegative => "zero raised to a negative power is undefined",
            Error::NegativeToNonInteger => {
                "a negative number raised to a non-integer power yields a complex result"
            }
            Error::ArgumentTooLarge => "argument too large",
            Error::Parse => "failed to scan textual form",
        };
        f.write_str(repr)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
