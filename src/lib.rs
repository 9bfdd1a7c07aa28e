//! gf2poly - arbitrary-precision arithmetic over GF(2)[x]
//!
//! Big binary polynomials: bit strings in which bit `i` is the coefficient
//! of `x^i`, so addition is XOR and multiplication is carry-less. Intended
//! for coding-theory, CRC, and error-correction tooling that treats large
//! integers as polynomials.
//!
//! ## Operations
//!
//! - [`mul`]: subquadratic carry-less product (Karatsuba over a table- or
//!   `PCLMULQDQ`-driven limb multiplier)
//! - [`sqr`]: linear-time squaring by bit spreading
//! - [`inv`] / [`rinv`]: fixed-precision reciprocals by Newton doubling,
//!   left- and right-aligned
//! - [`divmod`]: Euclidean division driven by the left-aligned reciprocal
//!
//! All operations are pure and allocate fresh results; the only shared state
//! is the process-wide bit-length limit in [`limits`], which every operation
//! checks before producing a result.
//!
//! ## Example
//!
//! ```
//! use gf2poly::{divmod, mul, Gf2Poly};
//!
//! let a = Gf2Poly::from(0x1Bu64);
//! let b = Gf2Poly::from(0x0Du64);
//! let p = mul(&a, &b)?;
//! let (q, r) = divmod(&p, &a)?;
//! assert_eq!(q, b);
//! assert!(r.is_zero());
//! # Ok::<(), gf2poly::Gf2Error>(())
//! ```

pub mod clmul;
pub mod divide;
pub mod error;
pub mod limits;
pub mod multiply;
pub mod poly;
pub mod reciprocal;
pub mod square;

pub use divide::divmod;
pub use error::{ErrorKind, Gf2Error, Result};
pub use limits::{get_max_bits, set_max_bits, DEFAULT_MAX_BITS, HARD_MAX_BITS};
pub use multiply::mul;
pub use poly::{Gf2Poly, Limb};
pub use reciprocal::{inv, rinv};
pub use square::sqr;
