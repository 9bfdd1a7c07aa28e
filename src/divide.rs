//! Euclidean division of big polynomials
//!
//! ## Algorithm
//!
//! After dispatching the degenerate shapes directly, the driver computes a
//! left-aligned reciprocal `e` of the divisor and peels the quotient off
//! `n_e` bits per pass: the top window of the running remainder times `e`
//! yields the next quotient chunk, whose multiple of `d` is XORed back into
//! the remainder. A final partial pass of `m ≤ n_e` bits lands the remainder
//! strictly below the divisor. The identity `u = q·d XOR r` is bit-exact
//! throughout; `n_r` tracks the claimed remainder width, which can exceed
//! `bit_length(r)` when leading bits cancel early.
//!
//! The reciprocal width `n_e = min(n_q + 1, n_d)` trades passes against
//! reciprocal work; at `n_e = n_q + 1` the division completes in the final
//! partial pass alone.

use crate::error::{Gf2Error, Result};
use crate::limits;
use crate::multiply::mul_raw;
use crate::poly::Gf2Poly;
use crate::reciprocal::inv_raw;
use log::debug;

/// Euclidean division: returns `(q, r)` with `u = q·d XOR r` and
/// `bit_length(r) < bit_length(d)`.
///
/// Fails with a zero-division error when `d` is zero and with a value error
/// when either operand exceeds the configured bit-length limit.
pub fn divmod(u: &Gf2Poly, d: &Gf2Poly) -> Result<(Gf2Poly, Gf2Poly)> {
    let max_bits = limits::get_max_bits();
    let n_u = u.bit_length();
    let n_d = d.bit_length();
    if n_u > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_u, max_bits });
    }
    if n_d > max_bits {
        return Err(Gf2Error::OperandTooLarge { bits: n_d, max_bits });
    }
    if d.is_zero() {
        return Err(Gf2Error::DivisionByZero);
    }
    if u.is_zero() {
        return Ok((Gf2Poly::zero(), Gf2Poly::zero()));
    }
    if n_d == 1 {
        return Ok((u.clone(), Gf2Poly::zero()));
    }
    if n_u < n_d {
        return Ok((Gf2Poly::zero(), u.clone()));
    }
    if n_u == n_d {
        return Ok((Gf2Poly::one(), u ^ d));
    }

    let n_q = n_u - n_d + 1;
    let n_e = (n_q + 1).min(n_d);
    debug!("dividing {n_u}-bit by {n_d}-bit operand with a {n_e}-bit reciprocal");
    let e = inv_raw(d, n_e);

    let mut q = Gf2Poly::zero();
    let mut r = u.clone();
    let mut n_r = n_u;

    while n_r >= n_d + n_e {
        // next n_e quotient bits from the top window of the remainder
        let top = r.shr(n_r - n_e);
        let dq = mul_raw(&top, &e).shr(n_e - 1);
        let shift = n_r - n_d - (n_e - 1);
        q.xor_shifted(&dq, shift);
        r.xor_shifted(&mul_raw(&dq, d), shift);
        n_r -= n_e;
        debug_assert!(r.bit_length() <= n_r);
    }

    // last pass, m bits where 1 ≤ m ≤ n_e
    let m = n_r - n_d + 1;
    let top = r.shr(n_r - m);
    let dq = mul_raw(&top, &e.shr(n_e - m)).shr(m - 1);
    q ^= &dq;
    r ^= &mul_raw(&dq, d);
    debug_assert!(r.bit_length() < n_d);

    Ok((q, r))
}
