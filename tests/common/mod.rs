//! Shared oracles and generators for the integration tests

// Not every test binary uses every helper
#![allow(dead_code)]

use gf2poly::Gf2Poly;
use rand::rngs::StdRng;
use rand::Rng;

/// Shift-and-XOR multiplication, straight from the carry-less definition:
/// for each set bit `i` of `a`, XOR `b << i` into the accumulator.
pub fn model_mul(a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
    let mut acc = Gf2Poly::zero();
    for i in 0..a.bit_length() {
        if a.bit(i) {
            acc ^= &b.shl(i);
        }
    }
    acc
}

/// Squaring oracle: multiplication by itself
pub fn model_sqr(a: &Gf2Poly) -> Gf2Poly {
    model_mul(a, a)
}

/// A polynomial with bit length exactly `bits` (top bit set, rest random)
pub fn random_poly_exact(rng: &mut StdRng, bits: usize) -> Gf2Poly {
    if bits == 0 {
        return Gf2Poly::zero();
    }
    let limbs = bits.div_ceil(64);
    let mut v: Vec<u64> = (0..limbs).map(|_| rng.random()).collect();
    let top_bits = bits - 64 * (limbs - 1);
    let last = limbs - 1;
    if top_bits < 64 {
        v[last] &= (1u64 << top_bits) - 1;
    }
    v[last] |= 1u64 << (top_bits - 1);
    Gf2Poly::from_limbs(&v)
}

/// A polynomial with bit length drawn uniformly from `min_bits..=max_bits`
pub fn random_poly(rng: &mut StdRng, min_bits: usize, max_bits: usize) -> Gf2Poly {
    let bits = rng.random_range(min_bits..=max_bits);
    random_poly_exact(rng, bits)
}

/// Hook the `log` output of the crate into the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
