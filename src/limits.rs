//! Process-wide bit-length limit for polynomial operands and results
//!
//! Every result-producing operation checks its inputs and its would-be result
//! against the current limit before allocating. The limit starts at
//! [`DEFAULT_MAX_BITS`] and can be raised up to [`HARD_MAX_BITS`] or lowered
//! to 1 at runtime. Changing it never invalidates values that were already
//! returned; it only bounds subsequent calls.

use crate::error::{Gf2Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Limit applied until the first call to [`set_max_bits`]
pub const DEFAULT_MAX_BITS: usize = 1 << 20;

/// Upper bound that [`set_max_bits`] will accept
pub const HARD_MAX_BITS: usize = 1 << 26;

static MAX_BITS: AtomicUsize = AtomicUsize::new(DEFAULT_MAX_BITS);

/// The bit-length limit currently in effect
#[inline]
pub fn get_max_bits() -> usize {
    MAX_BITS.load(Ordering::Acquire)
}

/// Replace the bit-length limit, returning the previous one.
///
/// `n` must lie in `1..=HARD_MAX_BITS`. Concurrent writers are not ordered
/// with respect to each other; callers that need a deterministic sequence of
/// limit changes must serialise externally.
pub fn set_max_bits(n: usize) -> Result<usize> {
    if n == 0 || n > HARD_MAX_BITS {
        return Err(Gf2Error::InvalidLimit { requested: n, hard_max: HARD_MAX_BITS });
    }
    Ok(MAX_BITS.swap(n, Ordering::AcqRel))
}
