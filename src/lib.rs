//! Arbitrary-precision decimal transcendental and power functions.
//!
//! The crate extends exact decimal arithmetic (a signed unscaled integer
//! with an explicit scale) with square and cube roots, natural and
//! derived logarithms, the exponential, and a general power function.
//! Every operation takes the number of fraction digits wanted in the
//! result and rounds half to even; internal iterations run at a larger,
//! adaptive working scale so the published digits are trustworthy.
//!
//! ```
//! use apdec::Dec;
//!
//! let x: Dec = "2454495034".parse().unwrap();
//! let r = x.sqrt(16).unwrap();
//! assert_eq!(r.to_string(), "49542.8605754653613946");
//! ```
//!
//! All functions are pure: the result depends only on the operands and
//! the requested scale. The only process-wide state is the cache of
//! mathematical constants behind [`Consts`], which is safe for
//! concurrent use.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
mod dec;
mod defs;
mod ops;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::dec::Dec;
pub use crate::defs::Error;
pub use crate::defs::Scale;
pub use crate::ops::consts::Consts;
