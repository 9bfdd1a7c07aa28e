//! Reciprocal contract tests: the left-aligned form must put a lone 1 in
//! the top bits of e·d, the right-aligned form must invert modulo x^n

mod common;

use common::{random_poly, random_poly_exact};
use gf2poly::{inv, mul, rinv, Gf2Poly};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `(inv(d, n_e) · d) >> (n_d − 1) == 1 << (n_e − 1)`
fn assert_left_contract(d: &Gf2Poly, n_e: usize) {
    let e = inv(d, n_e).unwrap();
    assert_eq!(e.bit_length(), n_e, "d={d} n_e={n_e}");
    let prod = mul(&e, d).unwrap();
    assert_eq!(
        prod.shr(d.bit_length() - 1),
        Gf2Poly::one().shl(n_e - 1),
        "d={d} n_e={n_e} e={e}"
    );
}

/// `(rinv(d, n_e) · d) mod x^n_e == 1`
fn assert_right_contract(d: &Gf2Poly, n_e: usize) {
    let e = rinv(d, n_e).unwrap();
    assert!(e.bit_length() <= n_e, "d={d} n_e={n_e}");
    let prod = mul(&e, d).unwrap();
    assert_eq!(prod.low_bits(n_e), Gf2Poly::one(), "d={d} n_e={n_e} e={e}");
}

#[test]
fn inv_unit() {
    assert_eq!(inv(&Gf2Poly::one(), 1).unwrap(), Gf2Poly::one());
}

#[test]
fn inv_small_native_precision() {
    for v in 1u64..1024 {
        let d = Gf2Poly::from(v);
        assert_left_contract(&d, d.bit_length());
    }
}

#[test]
fn inv_small_coarse() {
    for v in 1u64..1024 {
        let d = Gf2Poly::from(v);
        let n_d = d.bit_length();
        assert_left_contract(&d, n_d.saturating_sub(1).max(1));
        assert_left_contract(&d, (n_d / 2).max(1));
        assert_left_contract(&d, 1);
    }
}

#[test]
fn inv_small_fine() {
    for v in 1u64..1024 {
        let d = Gf2Poly::from(v);
        let n_d = d.bit_length();
        assert_left_contract(&d, n_d + 1);
        assert_left_contract(&d, 2 * n_d);
        assert_left_contract(&d, 5 * n_d + 3);
    }
}

#[test]
fn inv_big() {
    let mut rng = StdRng::seed_from_u64(0x111);
    for bits in 1..=512 {
        let d = random_poly_exact(&mut rng, bits);
        assert_left_contract(&d, bits);
        assert_left_contract(&d, bits.saturating_sub(1).max(1));
        assert_left_contract(&d, bits + 1);
    }
}

#[test]
fn inv_random_precision() {
    let mut rng = StdRng::seed_from_u64(0x222);
    for _ in 0..200 {
        let d = random_poly(&mut rng, 1, 300);
        let n_e = rng.random_range(1..=128);
        assert_left_contract(&d, n_e);
        assert_left_contract(&d, 7);
        assert_left_contract(&d, 97);
    }
}

#[test]
fn rinv_unit() {
    assert_eq!(rinv(&Gf2Poly::one(), 1).unwrap(), Gf2Poly::one());
    assert_eq!(rinv(&Gf2Poly::one(), 64).unwrap(), Gf2Poly::one());
}

#[test]
fn rinv_small_odd_divisors() {
    for v in (1u64..1024).step_by(2) {
        let d = Gf2Poly::from(v);
        for n_e in [1, 2, 3, 7, 16, 33, 64, 129] {
            assert_right_contract(&d, n_e);
        }
    }
}

#[test]
fn rinv_big_odd_divisors() {
    let mut rng = StdRng::seed_from_u64(0x333);
    for _ in 0..100 {
        let mut d = random_poly(&mut rng, 1, 400);
        if !d.bit(0) {
            d = &d ^ &Gf2Poly::one();
        }
        if d.is_zero() {
            d = Gf2Poly::one();
        }
        for n_e in [1, 2, 63, 64, 65, 200] {
            assert_right_contract(&d, n_e);
        }
    }
}

#[test]
fn rinv_self_inverse_within_window() {
    // rinv(rinv(d)) recovers d modulo x^n_e
    let d = Gf2Poly::from(0xB5u64);
    let n_e = 32;
    let e = rinv(&d, n_e).unwrap();
    let back = rinv(&e, n_e).unwrap();
    assert_eq!(back, d.low_bits(n_e));
}
