//! Arithmetic over the two prime fields of Ed25519: the base field `Fq` with modulus `p = 2^255 - 19` where
//! point coordinates live, and the scalar field `Fr` with modulus `l = 2^252 + 27742317777372353535851937790883648493`,
//! the order of the prime order subgroup.
//!
//! Elements are always reduced. Parsing from bytes comes in two flavours, a strict one that rejects
//! values at or above the modulus and a reducing one. Scalars are reduced directly modulo `l`, there
//! is no truncation to a smaller width anywhere in this crate.

use crate::error::DleqError;
use ark_ff::{BigInteger, Field, MontFp, PrimeField, Zero};
use ark_std::vec::Vec;

pub type FieldElement = ark_ed25519::Fq;
pub type Scalar = ark_ed25519::Fr;

/// `2^((p - 1) / 4)`, a square root of `-1` in `Fq`
pub const SQRT_MINUS_ONE: FieldElement =
    MontFp!("19681161376707505956807079304988542015446066515923890162744021073123829784752");

/// Inverse by Fermat's little theorem, `x^(m - 2)` where `m` is the prime modulus
pub fn fermat_inverse<F: PrimeField>(x: &F) -> Result<F, DleqError> {
    if x.is_zero() {
        return Err(DleqError::DivisionByZero);
    }
    let mut exp = F::MODULUS;
    exp.sub_with_borrow(&F::BigInt::from(2u64));
    Ok(pow_const(x, exp))
}

/// `numerator / denominator`
pub fn divide<F: PrimeField>(numerator: &F, denominator: &F) -> Result<F, DleqError> {
    Ok(*numerator * fermat_inverse(denominator)?)
}

/// `x^exp` where `exp` is given as little-endian 64-bit words
pub fn pow_const<F: Field, S: AsRef<[u64]>>(x: &F, exp: S) -> F {
    x.pow(exp)
}

/// Square root in `Fq`. As `p = 5 mod 8`, `c = x^((p + 3) / 8)` is either a root of `x` or of `-x`
/// and in the latter case `c * sqrt(-1)` is a root of `x`. Returns `None` for non-squares. Which of
/// the 2 roots is returned is unspecified.
pub fn sqrt_fq(x: &FieldElement) -> Option<FieldElement> {
    let mut exp = FieldElement::MODULUS;
    exp.add_with_carry(&<FieldElement as PrimeField>::BigInt::from(3u64));
    exp.divn(3);
    let c = pow_const(x, exp);
    let c_sqr = c.square();
    if c_sqr == *x {
        Some(c)
    } else if c_sqr == -*x {
        Some(c * SQRT_MINUS_ONE)
    } else {
        None
    }
}

pub fn is_odd<F: PrimeField>(x: &F) -> bool {
    x.into_bigint().is_odd()
}

/// 32-byte little-endian encoding of an element of either field
pub fn to_le_bytes<F: PrimeField>(x: &F) -> [u8; 32] {
    let v = x.into_bigint().to_bytes_le();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&v[..32]);
    bytes
}

fn from_canonical_le_bytes<F: PrimeField>(bytes: &[u8; 32]) -> Result<F, DleqError> {
    let f = F::from_le_bytes_mod_order(bytes);
    if f.into_bigint().to_bytes_le().as_slice() != bytes.as_slice() {
        return Err(DleqError::OutOfRange);
    }
    Ok(f)
}

/// Strict parsing, fails with `OutOfRange` if the value is not below `p`
pub fn field_element_from_canonical_le_bytes(bytes: &[u8; 32]) -> Result<FieldElement, DleqError> {
    from_canonical_le_bytes(bytes)
}

/// Strict parsing, fails with `OutOfRange` if the value is not below `l`
pub fn scalar_from_canonical_le_bytes(bytes: &[u8; 32]) -> Result<Scalar, DleqError> {
    from_canonical_le_bytes(bytes)
}

/// Interprets any number of bytes as a little-endian integer and reduces it modulo `l`
pub fn scalar_from_le_bytes_mod_order(bytes: &[u8]) -> Scalar {
    Scalar::from_le_bytes_mod_order(bytes)
}

/// Little-endian bytes of the modulus of `F`, handy for range checks on raw encodings
pub fn modulus_le_bytes<F: PrimeField>() -> Vec<u8> {
    F::MODULUS.to_bytes_le()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::One;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };

    #[test]
    fn inverse() {
        let mut rng = StdRng::seed_from_u64(0u64);
        for _ in 0..20 {
            let x = FieldElement::rand(&mut rng);
            assert_eq!(fermat_inverse(&x).unwrap(), x.inverse().unwrap());
            let k = Scalar::rand(&mut rng);
            assert_eq!(fermat_inverse(&k).unwrap() * k, Scalar::one());
        }
        assert!(matches!(
            fermat_inverse(&FieldElement::zero()),
            Err(DleqError::DivisionByZero)
        ));
        assert!(matches!(
            divide(&Scalar::one(), &Scalar::zero()),
            Err(DleqError::DivisionByZero)
        ));
    }

    #[test]
    fn square_roots() {
        let mut rng = StdRng::seed_from_u64(0u64);
        assert_eq!(SQRT_MINUS_ONE.square(), -FieldElement::one());
        for _ in 0..50 {
            let r = FieldElement::rand(&mut rng);
            let x = r.square();
            let root = sqrt_fq(&x).unwrap();
            assert!(root == r || root == -r);
        }
        assert_eq!(sqrt_fq(&FieldElement::zero()), Some(FieldElement::zero()));
        // 2 is not a square when p = 5 mod 8
        assert_eq!(sqrt_fq(&FieldElement::from(2u64)), None);
    }

    #[test]
    fn canonical_parsing() {
        let p = modulus_le_bytes::<FieldElement>();
        let mut p_bytes = [0u8; 32];
        p_bytes.copy_from_slice(&p);
        assert!(matches!(
            field_element_from_canonical_le_bytes(&p_bytes),
            Err(DleqError::OutOfRange)
        ));
        let mut p_minus_1 = p_bytes;
        p_minus_1[0] -= 1;
        assert_eq!(
            field_element_from_canonical_le_bytes(&p_minus_1).unwrap(),
            -FieldElement::one()
        );

        let l = modulus_le_bytes::<Scalar>();
        let mut l_bytes = [0u8; 32];
        l_bytes.copy_from_slice(&l);
        assert!(matches!(
            scalar_from_canonical_le_bytes(&l_bytes),
            Err(DleqError::OutOfRange)
        ));
        assert!(scalar_from_le_bytes_mod_order(&l_bytes).is_zero());
        assert_eq!(
            scalar_from_le_bytes_mod_order(&[0xffu8; 32]),
            scalar_from_le_bytes_mod_order(&[0xffu8; 32])
        );

        let mut rng = StdRng::seed_from_u64(1u64);
        let k = Scalar::rand(&mut rng);
        assert_eq!(scalar_from_canonical_le_bytes(&to_le_bytes(&k)).unwrap(), k);
        assert!(is_odd(&Scalar::one()));
        assert!(!is_odd(&Scalar::from(2u64)));
    }
}
