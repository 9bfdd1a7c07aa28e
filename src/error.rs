//! Error types for GF(2)[x] arithmetic operations

use thiserror::Error;

/// Coarse classification of an arithmetic error.
///
/// Every [`Gf2Error`] variant maps to exactly one kind, so callers that only
/// care about the class of failure (bad argument, size overflow, division by
/// zero) can match on [`Gf2Error::kind`] instead of the full variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument was rejected before any computation started
    Value,
    /// A result or requested precision would exceed the bit-length limit
    Overflow,
    /// The divisor or reciprocal target was the zero polynomial
    ZeroDivision,
}

/// Errors that can occur during GF(2)[x] arithmetic
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Gf2Error {
    /// An operand is wider than the configured bit-length limit
    #[error("operand is {bits} bits wide but the limit is {max_bits}")]
    OperandTooLarge { bits: usize, max_bits: usize },

    /// The result would be wider than the configured bit-length limit
    #[error("result would be {bits} bits wide but the limit is {max_bits}")]
    ResultTooLarge { bits: usize, max_bits: usize },

    /// A reciprocal was requested with zero bits of precision
    #[error("reciprocal precision must be at least 1 bit")]
    ZeroPrecision,

    /// The requested reciprocal precision is wider than the limit
    #[error("requested precision of {bits} bits exceeds the limit of {max_bits}")]
    PrecisionTooLarge { bits: usize, max_bits: usize },

    /// Division or inversion by the zero polynomial
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// Right-aligned inversion of a divisor with no constant term
    #[error("divisor has no constant term, so it has no inverse modulo x^n")]
    EvenDivisor,

    /// A bit-length limit outside the supported range was requested
    #[error("bit-length limit {requested} is outside 1..={hard_max}")]
    InvalidLimit { requested: usize, hard_max: usize },
}

impl Gf2Error {
    /// The coarse kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Gf2Error::OperandTooLarge { .. }
            | Gf2Error::ZeroPrecision
            | Gf2Error::EvenDivisor
            | Gf2Error::InvalidLimit { .. } => ErrorKind::Value,
            Gf2Error::ResultTooLarge { .. } | Gf2Error::PrecisionTooLarge { .. } => {
                ErrorKind::Overflow
            }
            Gf2Error::DivisionByZero => ErrorKind::ZeroDivision,
        }
    }
}

/// Type alias for Result with Gf2Error
pub type Result<T> = std::result::Result<T, Gf2Error>;
