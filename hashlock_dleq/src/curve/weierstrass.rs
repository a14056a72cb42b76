//! The short Weierstrass form `v^2 = u^3 + a_w * u + b_w` of the curve, which is what the verifier's
//! elliptic curve library works with. Edwards points are moved there through the Montgomery form:
//!
//! `u = (5a - d + (a - 5d) * y) / (12 * (1 - y))` and `v = (a - d) * (1 + y) / (4 * x * (1 - y))`
//!
//! The identity `(0, 1)` has no affine image. The point `(0, -1)` of order 2 maps to `(A / 3B, 0)`.

use crate::{
    curve::{params::CurveParameters, point::CurvePoint},
    error::DleqError,
    field::{divide, field_element_from_canonical_le_bytes, to_le_bytes, FieldElement},
};
use ark_ff::{One, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use dleq_crypto_utils::{
    serde_utils::ArkObjectBytes,
    words::{le_bytes_from_limbs, limbs_from_le_bytes, NUM_LIMBS},
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Coordinates as 4 little-endian limbs of 96 bits each
pub type Limbs = [u128; NUM_LIMBS];

/// Affine point in short Weierstrass coordinates. Not checked to be on the curve on construction,
/// use [`WeierstrassPoint::is_on_curve`].
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
pub struct WeierstrassPoint {
    #[serde_as(as = "ArkObjectBytes")]
    pub x: FieldElement,
    #[serde_as(as = "ArkObjectBytes")]
    pub y: FieldElement,
}

impl WeierstrassPoint {
    pub fn is_on_curve(&self, params: &CurveParameters) -> bool {
        params.is_on_weierstrass_curve(&self.x, &self.y)
    }

    pub fn to_limbs(&self) -> (Limbs, Limbs) {
        (
            limbs_from_le_bytes(&to_le_bytes(&self.x)),
            limbs_from_le_bytes(&to_le_bytes(&self.y)),
        )
    }

    /// Fails with `OutOfRange` if a limb has more than 96 bits or a coordinate is not below `p`
    pub fn from_limbs(x: &Limbs, y: &Limbs) -> Result<Self, DleqError> {
        let coordinate = |limbs: &Limbs| {
            let bytes = le_bytes_from_limbs(limbs).ok_or(DleqError::OutOfRange)?;
            field_element_from_canonical_le_bytes(&bytes)
        };
        Ok(Self {
            x: coordinate(x)?,
            y: coordinate(y)?,
        })
    }

    /// The inverse map: `m = B * u - A / 3`, `n = B * v`, then `x = m / n` and `y = (m - 1) / (m + 1)`
    pub fn to_edwards(&self, params: &CurveParameters) -> Result<CurvePoint, DleqError> {
        let three = FieldElement::from(3u64);
        let m = *params.montgomery_b() * self.x - divide(params.montgomery_a(), &three)?;
        let n = *params.montgomery_b() * self.y;
        if n.is_zero() {
            // Only the Montgomery point (0, 0) has an Edwards image when v = 0
            if !m.is_zero() {
                return Err(DleqError::NotOnCurve);
            }
            return CurvePoint::new(FieldElement::zero(), -FieldElement::one(), params);
        }
        let x = divide(&m, &n)?;
        let y = divide(&(m - FieldElement::one()), &(m + FieldElement::one()))?;
        CurvePoint::new(x, y, params)
    }
}

impl CurvePoint {
    /// Image under the birational map. Fails with `PointAtInfinity` for the identity.
    pub fn to_weierstrass(&self, params: &CurveParameters) -> Result<WeierstrassPoint, DleqError> {
        if self.is_identity() {
            return Err(DleqError::PointAtInfinity);
        }
        let (a, d) = (*params.a(), *params.d());
        let (x, y) = (*self.x(), *self.y());
        let one_minus_y = FieldElement::one() - y;
        let five = FieldElement::from(5u64);
        let u = divide(
            &(five * a - d + (a - five * d) * y),
            &(FieldElement::from(12u64) * one_minus_y),
        )?;
        let v = if x.is_zero() {
            // (0, -1)
            FieldElement::zero()
        } else {
            divide(
                &((a - d) * (FieldElement::one() + y)),
                &(FieldElement::from(4u64) * x * one_minus_y),
            )?
        };
        Ok(WeierstrassPoint { x: u, y: v })
    }
}
