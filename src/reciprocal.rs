//! Fixed-precision reciprocals by Newton doubling
//!
//! ## Left-aligned form
//!
//! [`inv`] approximates `x^(n_d + n_e − 2) / d` to `n_e` bits: the product
//! `e·d`, viewed from the top, is a single 1 followed by `n_e − 1` zeros.
//! The iteration exploits that in characteristic 2 the Newton step for a
//! reciprocal collapses to `e ← e²·d`; the cross term of `(1+ε)²` vanishes,
//! so each pass doubles the number of correct leading bits. The seed is the
//! divisor itself aligned to `n_e` bits, whose top two bits already agree
//! with the reciprocal's power series.
//!
//! The bookkeeping invariant, mirrored from the long-division driver's
//! needs: after the pass that reached `i_k` correct bits, `e` holds exactly
//! `n_e` bits and the top `i_k` bits of `e·d` equal the single bit at
//! position `n_d + i_k − 2`. The realigning shift `n_e − (2·i_k + n_d − 2)`
//! can point either way; getting it wrong shows up far away, as remainders
//! of the wrong length out of `divmod`.
//!
//! ## Right-aligned form
//!
//! [`rinv`] inverts an odd `d` modulo `x^n_e`, working on the low bits
//! throughout: the same `e ← e²·d` step doubles precision from the seed
//! `d mod x^n_e`, which is already correct to two bits because `d` is odd.

use crate::error::{Gf2Error, Result};
use crate::limits;
use crate::multiply::mul_raw;
use crate::poly::Gf2Poly;
use crate::square::sqr_raw;
use log::trace;

/// Left-aligned reciprocal of `d` with `n_e` bits of precision.
///
/// The result `e` has bit length exactly `n_e` and satisfies
/// `(e·d) >> (bit_length(d) − 1) == 1 << (n_e − 1)`.
pub fn inv(d: &Gf2Poly, n_e: usize) -> Result<Gf2Poly> {
    let max_bits = limits::get_max_bits();
    if d.is_zero() {
        return Err(Gf2Error::DivisionByZero);
    }
    if n_e == 0 {
        return Err(Gf2Error::ZeroPrecision);
    }
    let n_d = d.bit_length();
    if n_d > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_d, max_bits });
    }
    if n_e > max_bits {
        return Err(Gf2Error::PrecisionTooLarge { bits: n_e, max_bits });
    }
    Ok(inv_raw(d, n_e))
}

/// Left-aligned reciprocal without argument validation; `d` must be nonzero
/// and `n_e` at least 1
pub(crate) fn inv_raw(d: &Gf2Poly, n_e: usize) -> Gf2Poly {
    let n_d = d.bit_length();
    let mut e = if n_e > n_d { d.shl(n_e - n_d) } else { d.shr(n_d - n_e) };
    let mut i_k = 1usize;
    while i_k < n_e - 1 {
        i_k = (2 * i_k).min(n_e - 1);
        let e_i = e.shr(n_e - i_k);
        let p = mul_raw(&sqr_raw(&e_i), d);
        // p has exactly 2·i_k + n_d − 2 bits; realign to n_e
        let target = 2 * i_k + n_d - 2;
        e = if n_e >= target { p.shl(n_e - target) } else { p.shr(target - n_e) };
        trace!("reciprocal pass: {i_k} of {n_e} bits");
    }
    debug_assert_eq!(e.bit_length(), n_e);
    e
}

/// Right-aligned reciprocal: the inverse of an odd `d` modulo `x^n_e`.
///
/// The result `e` has bit length at most `n_e` and satisfies
/// `(e·d) mod x^n_e == 1`.
pub fn rinv(d: &Gf2Poly, n_e: usize) -> Result<Gf2Poly> {
    let max_bits = limits::get_max_bits();
    if d.is_zero() {
        return Err(Gf2Error::DivisionByZero);
    }
    if !d.bit(0) {
        return Err(Gf2Error::EvenDivisor);
    }
    if n_e == 0 {
        return Err(Gf2Error::ZeroPrecision);
    }
    let n_d = d.bit_length();
    if n_d > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_d, max_bits });
    }
    if n_e > max_bits {
        return Err(Gf2Error::PrecisionTooLarge { bits: n_e, max_bits });
    }

    let mut e = d.low_bits(n_e);
    // d odd makes the seed correct to two bits; each pass doubles that
    let mut prec = 2usize;
    while prec < n_e {
        let e_i = e.low_bits(prec);
        e = mul_raw(&sqr_raw(&e_i), d).low_bits(n_e);
        prec = (2 * prec).min(n_e);
    }
    Ok(e)
}
