use crate::{
    curve::params::CurveParameters,
    error::DleqError,
    field::{FieldElement, Scalar},
};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ed25519::EdwardsAffine;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use dleq_crypto_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// A point `(x, y)` on the twisted Edwards curve. [`CurvePoint::new`] is the only constructor that
/// accepts arbitrary coordinates and it rejects anything not on the curve, the group operations
/// then stay on the curve.
#[serde_as]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct CurvePoint(#[serde_as(as = "ArkObjectBytes")] EdwardsAffine);

impl CurvePoint {
    pub fn new(
        x: FieldElement,
        y: FieldElement,
        params: &CurveParameters,
    ) -> Result<Self, DleqError> {
        if !params.is_on_edwards_curve(&x, &y) {
            return Err(DleqError::NotOnCurve);
        }
        Ok(Self(EdwardsAffine::new_unchecked(x, y)))
    }

    /// The standard base point of Ed25519, the one whose `y` is `4/5`
    pub fn generator() -> Self {
        Self(EdwardsAffine::generator())
    }

    /// The neutral element `(0, 1)`
    pub fn identity() -> Self {
        Self(EdwardsAffine::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn x(&self) -> &FieldElement {
        &self.0.x
    }

    pub fn y(&self) -> &FieldElement {
        &self.0.y
    }

    pub fn add(&self, other: &Self) -> Self {
        Self((self.0 + other.0).into_affine())
    }

    pub fn neg(&self) -> Self {
        Self(-self.0)
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    pub fn mul(&self, scalar: &Scalar) -> Self {
        Self(self.0.mul_bigint(scalar.into_bigint()).into_affine())
    }

    /// Multiply by a small integer like the half-width scalars of a hint
    pub fn mul_u128(&self, scalar: u128) -> Self {
        let words = [scalar as u64, (scalar >> 64) as u64];
        Self(self.0.mul_bigint(words).into_affine())
    }

    /// Multiply by the cofactor 8, maps any curve point into the prime order subgroup
    pub fn clear_cofactor(&self) -> Self {
        Self(self.0.mul_by_cofactor())
    }

    pub fn is_in_prime_order_subgroup(&self) -> bool {
        self.0.is_in_correct_subgroup_assuming_on_curve()
    }

    pub fn as_affine(&self) -> &EdwardsAffine {
        &self.0
    }
}

impl From<EdwardsAffine> for CurvePoint {
    fn from(p: EdwardsAffine) -> Self {
        Self(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{One, Zero};
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };
    use test_utils::test_serialization;

    #[test]
    fn construction_checks_curve_equation() {
        let params = CurveParameters::ed25519();
        let g = CurvePoint::generator();
        assert_eq!(CurvePoint::new(*g.x(), *g.y(), &params).unwrap(), g);
        assert!(matches!(
            CurvePoint::new(*g.x(), *g.y() + FieldElement::one(), &params),
            Err(DleqError::NotOnCurve)
        ));
        assert!(matches!(
            CurvePoint::new(FieldElement::zero(), FieldElement::zero(), &params),
            Err(DleqError::NotOnCurve)
        ));
        let id = CurvePoint::new(FieldElement::zero(), FieldElement::one(), &params).unwrap();
        assert!(id.is_identity());
        assert_eq!(id, CurvePoint::identity());
    }

    #[test]
    fn group_operations() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let g = CurvePoint::generator();
        let a = Scalar::rand(&mut rng);
        let b = Scalar::rand(&mut rng);
        assert_eq!(g.mul(&a).add(&g.mul(&b)), g.mul(&(a + b)));
        assert_eq!(g.mul(&a).neg(), g.mul(&-a));
        assert!(g.add(&g.neg()).is_identity());
        assert_eq!(g.double(), g.mul(&Scalar::from(2u64)));
        assert_eq!(g.mul_u128(u128::MAX), g.mul(&Scalar::from(u128::MAX)));
        assert!(g.mul(&Scalar::zero()).is_identity());
        assert!(g.is_in_prime_order_subgroup());

        // (0, -1) has order 2
        let params = CurveParameters::ed25519();
        let t2 = CurvePoint::new(FieldElement::zero(), -FieldElement::one(), &params).unwrap();
        assert!(!t2.is_in_prime_order_subgroup());
        assert!(t2.double().is_identity());
        assert!(t2.clear_cofactor().is_identity());
        assert_eq!(g.add(&t2).clear_cofactor(), g.mul(&Scalar::from(8u64)));
    }

    #[test]
    fn serialization() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let p = CurvePoint::generator().mul(&Scalar::rand(&mut rng));
        test_serialization!(CurvePoint, p);
    }
}
