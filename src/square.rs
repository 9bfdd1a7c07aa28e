//! Squaring of big polynomials
//!
//! In characteristic 2 the cross terms of a square cancel, so
//! `(Σ aᵢ·x^i)² = Σ aᵢ·x^2i`: squaring is bit spreading, inserting a zero
//! between consecutive coefficients. Each input limb expands into exactly two
//! output limbs through a byte-to-16-bit spread table, making the whole
//! operation linear in the number of limbs.

use crate::error::{Gf2Error, Result};
use crate::limits;
use crate::poly::{Gf2Poly, LimbVec};
use smallvec::smallvec;
use std::sync::OnceLock;

/// Each byte mapped to the 16-bit value with its bits in the even positions
struct SpreadTable {
    spread: [u16; 256],
}

impl SpreadTable {
    fn new() -> Self {
        let mut table = SpreadTable { spread: [0; 256] };
        for b in 0..256 {
            let mut s = 0u16;
            for i in 0..8 {
                if (b >> i) & 1 == 1 {
                    s |= 1 << (2 * i);
                }
            }
            table.spread[b] = s;
        }
        table
    }
}

fn spread_table() -> &'static SpreadTable {
    static TABLE: OnceLock<SpreadTable> = OnceLock::new();
    TABLE.get_or_init(SpreadTable::new)
}

#[inline]
fn spread_word(x: u32) -> u64 {
    let t = &spread_table().spread;
    (t[(x & 0xFF) as usize] as u64)
        | ((t[((x >> 8) & 0xFF) as usize] as u64) << 16)
        | ((t[((x >> 16) & 0xFF) as usize] as u64) << 32)
        | ((t[((x >> 24) & 0xFF) as usize] as u64) << 48)
}

/// Carry-less square of `a`, equal to `mul(a, a)` but computed in one pass.
///
/// Fails if `a` or the result would exceed the configured bit-length limit.
pub fn sqr(a: &Gf2Poly) -> Result<Gf2Poly> {
    let max_bits = limits::get_max_bits();
    let n_a = a.bit_length();
    if n_a > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_a, max_bits });
    }
    if n_a == 0 {
        return Ok(Gf2Poly::zero());
    }
    let result_bits = 2 * n_a - 1;
    if result_bits > max_bits {
        return Err(Gf2Error::ResultTooLarge { bits: result_bits, max_bits });
    }
    Ok(sqr_raw(a))
}

/// Square without limit checks, for internal use
pub(crate) fn sqr_raw(a: &Gf2Poly) -> Gf2Poly {
    let limbs = a.limbs();
    let mut out: LimbVec = smallvec![0; 2 * limbs.len()];
    for (i, &w) in limbs.iter().enumerate() {
        out[2 * i] = spread_word(w as u32);
        out[2 * i + 1] = spread_word((w >> 32) as u32);
    }
    Gf2Poly::from_limb_vec(out)
}
