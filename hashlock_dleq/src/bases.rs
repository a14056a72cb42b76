//! The two public bases `G` and `Y` of a DLEQ statement.
//!
//! The deployed verifier uses `Y = 2 * G`. A second base with unknown discrete log relative to `G`
//! can be derived from a label by hashing to a `y` coordinate until it decompresses and clearing the cofactor.

use crate::{
    curve::{compression::CompressedPoint, params::CurveParameters, point::CurvePoint},
    error::DleqError,
};
use dleq_crypto_utils::{concat_slices, hashing_utils::try_and_incr};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DleqBases {
    pub g: CurvePoint,
    pub y: CurvePoint,
}

impl DleqBases {
    /// Fails with `InvalidBases` if either base is outside the prime order subgroup or is the
    /// identity, or the bases are equal.
    pub fn new(g: CurvePoint, y: CurvePoint) -> Result<Self, DleqError> {
        let valid = |p: &CurvePoint| !p.is_identity() && p.is_in_prime_order_subgroup();
        if !valid(&g) || !valid(&y) || g == y {
            return Err(DleqError::InvalidBases);
        }
        Ok(Self { g, y })
    }

    /// `G` the standard base point and `Y = 2 * G`
    pub fn standard() -> Self {
        let g = CurvePoint::generator();
        Self { g, y: g.double() }
    }

    /// `G` the standard base point and `Y` hashed from `label`
    pub fn with_hashed_second_base(
        label: &[u8],
        params: &CurveParameters,
    ) -> Result<Self, DleqError> {
        let g = CurvePoint::generator();
        let y = try_and_incr::<Sha256, _>(&concat_slices!(b"DLEQ-SECOND-BASE-", label), |h| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(h);
            let p = CompressedPoint(bytes)
                .decompress_recovering(params)
                .ok()?
                .clear_cofactor();
            (!p.is_identity() && p != g).then_some(p)
        });
        Self::new(g, y)
    }

    pub fn compressed(&self) -> (CompressedPoint, CompressedPoint) {
        (self.g.compress(), self.y.compress())
    }
}

impl Default for DleqBases {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldElement, Scalar};
    use ark_ff::{One, Zero};

    #[test]
    fn standard_bases() {
        let bases = DleqBases::standard();
        assert_eq!(bases.y, CurvePoint::generator().mul(&Scalar::from(2u64)));
        assert_eq!(DleqBases::new(bases.g, bases.y).unwrap(), bases);
        assert_eq!(DleqBases::default(), bases);
    }

    #[test]
    fn hashed_second_base() {
        let params = CurveParameters::ed25519();
        let a = DleqBases::with_hashed_second_base(b"test", &params).unwrap();
        let b = DleqBases::with_hashed_second_base(b"test", &params).unwrap();
        let c = DleqBases::with_hashed_second_base(b"other", &params).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.y, c.y);
        assert_eq!(a.g, CurvePoint::generator());
        assert!(a.y.is_in_prime_order_subgroup());
    }

    #[test]
    fn invalid_bases() {
        let params = CurveParameters::ed25519();
        let g = CurvePoint::generator();
        assert!(matches!(
            DleqBases::new(g, g),
            Err(DleqError::InvalidBases)
        ));
        assert!(matches!(
            DleqBases::new(g, CurvePoint::identity()),
            Err(DleqError::InvalidBases)
        ));
        let t2 = CurvePoint::new(FieldElement::zero(), -FieldElement::one(), &params).unwrap();
        assert!(matches!(
            DleqBases::new(g, g.add(&t2)),
            Err(DleqError::InvalidBases)
        ));
    }
}
