//! Packed representation of a big polynomial over GF(2)
//!
//! A [`Gf2Poly`] is a finite bit string in which bit `i` is the coefficient
//! of `x^i`. Bits are packed into 64-bit limbs, least-significant limb first,
//! and the representation is kept canonical: the top limb of a nonzero
//! polynomial is nonzero, and the zero polynomial has no limbs at all.
//!
//! This module carries the bit-level plumbing that the arithmetic engines are
//! built on: bit length, shifts by arbitrary bit counts, shifted-XOR
//! accumulation, and window extraction. Addition in GF(2)[x] is XOR, exposed
//! through the `^` and `^=` operators.

use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::ops::{BitXor, BitXorAssign};

/// Storage unit for packed coefficients
pub type Limb = u64;

/// Bits per limb
pub(crate) const LIMB_BITS: usize = Limb::BITS as usize;

/// Limb storage; polynomials up to 256 bits stay inline
pub(crate) type LimbVec = SmallVec<[Limb; 4]>;

/// A polynomial over GF(2) of arbitrary degree
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Gf2Poly {
    limbs: LimbVec,
}

impl Gf2Poly {
    /// The zero polynomial
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The constant polynomial 1
    #[inline]
    pub fn one() -> Self {
        Gf2Poly { limbs: smallvec![1] }
    }

    /// Build a polynomial from little-endian limbs, trimming high zero limbs
    pub fn from_limbs(limbs: &[Limb]) -> Self {
        Self::from_limb_vec(LimbVec::from_slice(limbs))
    }

    pub(crate) fn from_limb_vec(mut limbs: LimbVec) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Gf2Poly { limbs }
    }

    /// The packed little-endian limbs; empty for the zero polynomial
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// One-based index of the highest set bit; 0 for the zero polynomial.
    ///
    /// Equivalently `degree + 1` for nonzero polynomials.
    #[inline]
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                LIMB_BITS * (self.limbs.len() - 1) + (LIMB_BITS - top.leading_zeros() as usize)
            }
        }
    }

    /// The coefficient of `x^i`
    #[inline]
    pub fn bit(&self, i: usize) -> bool {
        let limb = i / LIMB_BITS;
        limb < self.limbs.len() && (self.limbs[limb] >> (i % LIMB_BITS)) & 1 == 1
    }

    /// Multiply by `x^k`
    pub fn shl(&self, k: usize) -> Self {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let limb_off = k / LIMB_BITS;
        let bit_off = k % LIMB_BITS;
        let mut out: LimbVec = smallvec![0; self.limbs.len() + limb_off + 1];
        for (i, &w) in self.limbs.iter().enumerate() {
            out[i + limb_off] |= w << bit_off;
            if bit_off != 0 {
                out[i + limb_off + 1] |= w >> (LIMB_BITS - bit_off);
            }
        }
        Self::from_limb_vec(out)
    }

    /// Divide by `x^k`, discarding the low coefficients
    pub fn shr(&self, k: usize) -> Self {
        if k >= self.bit_length() {
            return Self::zero();
        }
        if k == 0 {
            return self.clone();
        }
        let limb_off = k / LIMB_BITS;
        let bit_off = k % LIMB_BITS;
        let n = self.limbs.len();
        let mut out: LimbVec = smallvec![0; n - limb_off];
        for i in limb_off..n {
            let mut w = self.limbs[i] >> bit_off;
            if bit_off != 0 && i + 1 < n {
                w |= self.limbs[i + 1] << (LIMB_BITS - bit_off);
            }
            out[i - limb_off] = w;
        }
        Self::from_limb_vec(out)
    }

    /// `self ← self XOR (src << k)`, the accumulate step of long division
    pub(crate) fn xor_shifted(&mut self, src: &Gf2Poly, k: usize) {
        if src.is_zero() {
            return;
        }
        let limb_off = k / LIMB_BITS;
        let bit_off = k % LIMB_BITS;
        let needed = limb_off + src.limbs.len() + (bit_off != 0) as usize;
        if self.limbs.len() < needed {
            self.limbs.resize(needed, 0);
        }
        for (i, &w) in src.limbs.iter().enumerate() {
            self.limbs[i + limb_off] ^= w << bit_off;
            if bit_off != 0 {
                self.limbs[i + limb_off + 1] ^= w >> (LIMB_BITS - bit_off);
            }
        }
        self.trim();
    }

    /// The polynomial formed by bits `lo .. lo + width` of `self`
    pub fn extract_window(&self, lo: usize, width: usize) -> Self {
        self.shr(lo).low_bits(width)
    }

    /// `self mod x^width`: keep the low `width` coefficients
    pub fn low_bits(&self, width: usize) -> Self {
        if self.bit_length() <= width {
            return self.clone();
        }
        let full = width / LIMB_BITS;
        let part = width % LIMB_BITS;
        let mut out = LimbVec::from_slice(&self.limbs[..full + (part != 0) as usize]);
        if part != 0 {
            let last = out.len() - 1;
            out[last] &= (1 << part) - 1;
        }
        Self::from_limb_vec(out)
    }

    /// Decode coefficients from little-endian bytes
    pub fn from_bytes_le(bytes: &[u8]) -> Self {
        let mut limbs: LimbVec = smallvec![0; bytes.len().div_ceil(8)];
        for (i, chunk) in bytes.chunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            limbs[i] = Limb::from_le_bytes(buf);
        }
        Self::from_limb_vec(limbs)
    }

    /// Encode coefficients as little-endian bytes, without trailing zeros
    pub fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.limbs.len() * 8);
        for w in &self.limbs {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        bytes.truncate(self.bit_length().div_ceil(8));
        bytes
    }

    /// Parse a big-endian hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let mut bytes = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))?
        } else {
            hex::decode(digits)?
        };
        bytes.reverse();
        Ok(Self::from_bytes_le(&bytes))
    }

    /// Big-endian lowercase hex, without a prefix; `"0"` for zero
    pub fn to_hex(&self) -> String {
        match self.limbs.split_last() {
            None => "0".to_string(),
            Some((top, rest)) => {
                let mut s = format!("{top:x}");
                for w in rest.iter().rev() {
                    s.push_str(&format!("{w:016x}"));
                }
                s
            }
        }
    }

    pub(crate) fn trim(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }
}

impl From<u64> for Gf2Poly {
    fn from(value: u64) -> Self {
        Self::from_limb_vec(smallvec![value])
    }
}

// GF(2) addition and subtraction are both XOR
impl BitXorAssign<&Gf2Poly> for Gf2Poly {
    fn bitxor_assign(&mut self, rhs: &Gf2Poly) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (a, &b) in self.limbs.iter_mut().zip(rhs.limbs.iter()) {
            *a ^= b;
        }
        self.trim();
    }
}

impl BitXorAssign for Gf2Poly {
    fn bitxor_assign(&mut self, rhs: Gf2Poly) {
        *self ^= &rhs;
    }
}

impl BitXor for &Gf2Poly {
    type Output = Gf2Poly;

    fn bitxor(self, rhs: &Gf2Poly) -> Gf2Poly {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl BitXor for Gf2Poly {
    type Output = Gf2Poly;

    fn bitxor(self, rhs: Gf2Poly) -> Gf2Poly {
        let mut out = self;
        out ^= &rhs;
        out
    }
}

impl fmt::Display for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Gf2Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf2Poly(0x{})", self.to_hex())
    }
}
