//! "Fake GLV" decomposition. Ed25519 has no efficient endomorphism, but for any `k` there are `s1`, `s2`
//! of about half the bit size of `l` with `s1 + k * s2 = 0 mod l`. They come out of the extended
//! Euclidean algorithm on `(l, k)` stopped halfway: every remainder satisfies `r_i = t_i * k mod l`
//! and at the first `r_i < 2^126` the cofactor `|t_i|` is at most `l / r_{i-1} <= 2^126`.
//!
//! Given such a pair, `Q = k * P` iff `s1 * P + s2 * Q = O` for `P`, `Q` in the prime order subgroup.

use crate::{
    curve::{params::CurveParameters, point::CurvePoint},
    error::DleqError,
    field::{modulus_le_bytes, to_le_bytes, Scalar},
    hint::{ScalarMulHint, SignedHalfScalar},
};
use ark_ff::Zero;
use ark_std::{end_timer, start_timer};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

/// The Euclidean algorithm stops at the first remainder below `2^HALF_GCD_BOUND_BITS`
pub const HALF_GCD_BOUND_BITS: usize = 126;

/// Decompose `k` into `(s1, s2)` with `s1 + k * s2 = 0 mod l`, `0 < s1 < 2^126` and `0 < |s2| <= 2^126`.
/// Fails with `InvalidDecomposition` for `k = 0` which has no such decomposition.
pub fn decompose(k: &Scalar) -> Result<(u128, SignedHalfScalar), DleqError> {
    if k.is_zero() {
        return Err(DleqError::InvalidDecomposition);
    }
    let l = BigInt::from(BigUint::from_bytes_le(&modulus_le_bytes::<Scalar>()));
    let bound = BigInt::one() << HALF_GCD_BOUND_BITS;

    let mut r0 = l;
    let mut r1 = BigInt::from(BigUint::from_bytes_le(&to_le_bytes(k)));
    let mut t0 = BigInt::zero();
    let mut t1 = BigInt::one();
    while r1 >= bound {
        let (q, r2) = r0.div_rem(&r1);
        let t2 = &t0 - &q * &t1;
        r0 = r1;
        r1 = r2;
        t0 = t1;
        t1 = t2;
    }
    // r1 = t1 * k so s1 = r1, s2 = -t1
    let s1 = r1.to_u128().ok_or(DleqError::InvalidDecomposition)?;
    let magnitude = t1
        .magnitude()
        .to_u128()
        .ok_or(DleqError::InvalidDecomposition)?;
    let s2 = SignedHalfScalar::new(t1.sign() == Sign::Plus, magnitude);
    Ok((s1, s2))
}

impl ScalarMulHint {
    /// Compute `Q = scalar * base` and decompose `scalar`. Fails with `PointAtInfinity` when `Q` would
    /// be the identity, which is always the case for a zero scalar or an identity base.
    pub fn new(
        base: &CurvePoint,
        scalar: &Scalar,
        params: &CurveParameters,
    ) -> Result<Self, DleqError> {
        if scalar.is_zero() || base.is_identity() {
            return Err(DleqError::PointAtInfinity);
        }
        let hint_time = start_timer!(|| "Generate scalar multiplication hint");
        let q = base.mul(scalar).to_weierstrass(params)?;
        let (s1, s2) = decompose(scalar)?;
        end_timer!(hint_time);
        Ok(Self { q, s1, s2 })
    }

    /// Check the hint against `(base, scalar)` without computing `scalar * base`: both halves are
    /// non-zero, `s1 + scalar * s2 = 0 mod l` and `Q` is on the Weierstrass curve. That `Q` is
    /// actually `scalar * base` is established by [`Self::bind`].
    pub fn verify(
        &self,
        base: &CurvePoint,
        scalar: &Scalar,
        params: &CurveParameters,
    ) -> Result<(), DleqError> {
        if base.is_identity() {
            return Err(DleqError::PointAtInfinity);
        }
        if self.s1 == 0 || self.s2.is_zero() {
            return Err(DleqError::InvalidDecomposition);
        }
        if !(Scalar::from(self.s1) + *scalar * self.s2.to_scalar()).is_zero() {
            return Err(DleqError::InvalidDecomposition);
        }
        if !self.q.is_on_curve(params) {
            return Err(DleqError::NotOnCurve);
        }
        Ok(())
    }

    /// Check `s1 * base + s2 * Q = O` using only the 128-bit halves and return `Q` as an Edwards
    /// point. Fails with `HintPointMismatch` if the equation does not hold or `Q` has a small order
    /// component. Meaningful only after [`Self::verify`] succeeded for the same base.
    ///
    /// The base must be in the prime order subgroup (`NotInPrimeOrderSubgroup` otherwise). With a
    /// torsion component in the base, any `s1` that is a multiple of its order would let the
    /// equation hold for a `Q` that is not `k * base`.
    pub fn bind(&self, base: &CurvePoint, params: &CurveParameters) -> Result<CurvePoint, DleqError> {
        if !base.is_in_prime_order_subgroup() {
            return Err(DleqError::NotInPrimeOrderSubgroup);
        }
        let q = self.q.to_edwards(params)?;
        if !q.is_in_prime_order_subgroup() {
            return Err(DleqError::HintPointMismatch);
        }
        let mut s2_q = q.mul_u128(self.s2.magnitude);
        if self.s2.negative {
            s2_q = s2_q.neg();
        }
        if !base.mul_u128(self.s1).add(&s2_q).is_identity() {
            return Err(DleqError::HintPointMismatch);
        }
        Ok(q)
    }
}
