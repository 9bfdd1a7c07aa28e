//! Carry-less multiplication of limb-sized operands
//!
//! ## Overview
//!
//! The base case of the big-polynomial multiplier: multiply two 64-bit
//! polynomials into a 128-bit product with XOR in place of addition.
//!
//! The portable path combines 8×8-bit partial products out of a table of all
//! byte-by-byte carry-less products, built once on first use. On `x86_64`
//! hosts with the `PCLMULQDQ` instruction the whole product is computed in a
//! single instruction instead; both paths are bit-identical, so the choice is
//! made once at runtime from CPU feature detection.

use std::sync::OnceLock;

const TABLE_BITS: usize = 8;

/// Carry-less products of all byte pairs, indexed by `(a << 8) | b`
struct ByteMulTable {
    products: Vec<u16>,
}

impl ByteMulTable {
    fn new() -> Self {
        let mut table = ByteMulTable { products: vec![0; 1 << (2 * TABLE_BITS)] };
        table.build();
        table
    }

    fn build(&mut self) {
        for a in 0u16..256 {
            for b in 0u16..256 {
                let mut p = 0u16;
                for i in 0..TABLE_BITS {
                    if (b >> i) & 1 == 1 {
                        p ^= a << i;
                    }
                }
                self.products[((a as usize) << TABLE_BITS) | b as usize] = p;
            }
        }
    }
}

fn byte_table() -> &'static ByteMulTable {
    static TABLE: OnceLock<ByteMulTable> = OnceLock::new();
    TABLE.get_or_init(ByteMulTable::new)
}

/// Carry-less product of two limbs as `(low, high)`
#[inline]
pub fn limb_mul(a: u64, b: u64) -> (u64, u64) {
    #[cfg(target_arch = "x86_64")]
    if clmul_available() {
        // SAFETY: the pclmulqdq feature was detected at runtime
        return unsafe { limb_mul_clmul(a, b) };
    }
    limb_mul_portable(a, b)
}

fn limb_mul_portable(a: u64, b: u64) -> (u64, u64) {
    if a == 0 || b == 0 {
        return (0, 0);
    }
    let products = &byte_table().products;
    let mut acc = 0u128;
    for i in 0..8 {
        let ab = (a >> (8 * i)) & 0xFF;
        if ab == 0 {
            continue;
        }
        for j in 0..8 {
            let bb = (b >> (8 * j)) & 0xFF;
            if bb == 0 {
                continue;
            }
            let p = products[((ab as usize) << TABLE_BITS) | bb as usize];
            acc ^= (p as u128) << (8 * (i + j));
        }
    }
    (acc as u64, (acc >> 64) as u64)
}

#[cfg(target_arch = "x86_64")]
fn clmul_available() -> bool {
    use log::debug;

    static DETECTED: OnceLock<bool> = OnceLock::new();
    *DETECTED.get_or_init(|| {
        let available = is_x86_feature_detected!("pclmulqdq");
        if available {
            debug!("using the PCLMULQDQ limb multiplier");
        } else {
            debug!("PCLMULQDQ unavailable, using the table-driven limb multiplier");
        }
        available
    })
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "pclmulqdq")]
unsafe fn limb_mul_clmul(a: u64, b: u64) -> (u64, u64) {
    use std::arch::x86_64::*;

    let va = _mm_set_epi64x(0, a as i64);
    let vb = _mm_set_epi64x(0, b as i64);
    let p = _mm_clmulepi64_si128(va, vb, 0x00);

    let mut out = [0u64; 2];
    _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, p);
    (out[0], out[1])
}
