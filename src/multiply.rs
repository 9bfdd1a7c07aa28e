//! Carry-less multiplication of big polynomials
//!
//! ## Algorithm
//!
//! Small operands go through a schoolbook loop over limb pairs, each pair
//! handled by the limb multiplier in `clmul`. Larger operands are split in
//! half and recombined with the Karatsuba identity, which in characteristic 2
//! loses its sign corrections:
//!
//! ```text
//! (a1·x^m + a0)(b1·x^m + b0)
//!     = P2·x^2m + (P0 + P2 + (a0+a1)(b0+b1))·x^m + P0
//! ```
//!
//! where `P0 = a0·b0` and `P2 = a1·b1`. The split point is a limb count, so
//! all shifts in the recombination are whole-limb offsets. Once operands are
//! large enough the three sub-products are computed on the rayon pool;
//! the call still completes synchronously.

use crate::clmul::limb_mul;
use crate::error::{Gf2Error, Result};
use crate::limits;
use crate::poly::{Gf2Poly, Limb, LimbVec};
use log::trace;
use smallvec::smallvec;

/// Operand size in limbs at or below which the schoolbook loop is used.
/// Correctness does not depend on this value; it is a speed trade-off.
const KARATSUBA_THRESHOLD: usize = 16;

/// Operand size in limbs at which Karatsuba sub-products run in parallel
const PARALLEL_THRESHOLD: usize = 512;

/// Carry-less product of `a` and `b`.
///
/// The result has bit length `bit_length(a) + bit_length(b) − 1`, or 0 if
/// either operand is zero. Fails if an operand or the result would exceed the
/// configured bit-length limit.
pub fn mul(a: &Gf2Poly, b: &Gf2Poly) -> Result<Gf2Poly> {
    let max_bits = limits::get_max_bits();
    let n_a = a.bit_length();
    let n_b = b.bit_length();
    if n_a > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_a, max_bits });
    }
    if n_b > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_b, max_bits });
    }
    if n_a == 0 || n_b == 0 {
        return Ok(Gf2Poly::zero());
    }
    let result_bits = n_a + n_b - 1;
    if result_bits > max_bits {
        return Err(Gf2Error::ResultTooLarge { bits: result_bits, max_bits });
    }
    Ok(mul_raw(a, b))
}

/// Product without limit checks, for internal use where intermediates may
/// legitimately exceed the configured limit
pub(crate) fn mul_raw(a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
    if a.is_zero() || b.is_zero() {
        return Gf2Poly::zero();
    }
    trace!("multiplying {} x {} bit operands", a.bit_length(), b.bit_length());
    Gf2Poly::from_limb_vec(mul_limbs(a.limbs(), b.limbs()))
}

/// Product of two limb slices; the returned vector has `a.len() + b.len()`
/// limbs and may carry high zeros
fn mul_limbs(a: &[Limb], b: &[Limb]) -> LimbVec {
    if a.is_empty() || b.is_empty() {
        return LimbVec::new();
    }
    if a.len().max(b.len()) <= KARATSUBA_THRESHOLD {
        mul_schoolbook(a, b)
    } else {
        mul_karatsuba(a, b)
    }
}

fn mul_schoolbook(a: &[Limb], b: &[Limb]) -> LimbVec {
    let mut out: LimbVec = smallvec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            if y == 0 {
                continue;
            }
            let (lo, hi) = limb_mul(x, y);
            out[i + j] ^= lo;
            out[i + j + 1] ^= hi;
        }
    }
    out
}

fn mul_karatsuba(a: &[Limb], b: &[Limb]) -> LimbVec {
    let m = a.len().max(b.len()).div_ceil(2);
    let (a0, a1) = a.split_at(a.len().min(m));
    let (b0, b1) = b.split_at(b.len().min(m));
    let a_sum = xor_slices(a0, a1);
    let b_sum = xor_slices(b0, b1);

    let parallel = a.len().max(b.len()) >= PARALLEL_THRESHOLD;
    let ((p0, p2), mut mid) = if parallel {
        rayon::join(
            || rayon::join(|| mul_limbs(a0, b0), || mul_limbs(a1, b1)),
            || mul_limbs(&a_sum, &b_sum),
        )
    } else {
        (
            (mul_limbs(a0, b0), mul_limbs(a1, b1)),
            mul_limbs(&a_sum, &b_sum),
        )
    };

    // mid ← P0 + P2 + (a0+a1)(b0+b1); its true length after cancellation is
    // what fits at offset m, even though the raw buffers can poke past it
    debug_assert!(mid.len() >= p0.len() && mid.len() >= p2.len());
    xor_into(&mut mid, &p0, 0);
    xor_into(&mut mid, &p2, 0);
    while mid.last() == Some(&0) {
        mid.pop();
    }

    let mut out: LimbVec = smallvec![0; a.len() + b.len()];
    xor_into(&mut out, &p0, 0);
    debug_assert!(m + mid.len() <= out.len());
    xor_into(&mut out, &mid, m);
    xor_into(&mut out, &p2, 2 * m);
    out
}

/// XOR of two slices, padded to the longer one
fn xor_slices(x: &[Limb], y: &[Limb]) -> LimbVec {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
    let mut out = LimbVec::from_slice(long);
    for (o, &s) in out.iter_mut().zip(short.iter()) {
        *o ^= s;
    }
    out
}

/// `dst[offset ..] ^= src`; `dst` must already be long enough
fn xor_into(dst: &mut [Limb], src: &[Limb], offset: usize) {
    debug_assert!(offset + src.len() <= dst.len());
    for (d, &s) in dst[offset..].iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
