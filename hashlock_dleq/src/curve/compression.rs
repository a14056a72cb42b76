//! RFC 8032 point encoding: 32 bytes holding `y` little-endian in bits 0 to 254 and the parity of
//! `x` in bit 255.
//!
//! A verifier without a square root routine can't recover `x` from `y` so decompression takes `x`
//! as an untrusted witness. The witness is accepted if it squares to the right value, and if its
//! parity disagrees with the sign bit it is negated. [`CompressedPoint::recover_x`] computes the
//! witness.

use crate::{
    curve::{params::CurveParameters, point::CurvePoint},
    error::DleqError,
    field::{
        divide, field_element_from_canonical_le_bytes, is_odd, sqrt_fq, to_le_bytes, FieldElement,
    },
};
use ark_ff::{Field, One};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::io::{Read, Write};
use dleq_crypto_utils::words::u256_words_from_le_bytes;
use serde::{Deserialize, Serialize};

pub const COMPRESSED_POINT_SIZE: usize = 32;

const SIGN_BIT_MASK: u8 = 0x80;

/// Raw encoding, not necessarily of a valid point. Validity is only established by decompression.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CompressedPoint(pub [u8; COMPRESSED_POINT_SIZE]);

impl CompressedPoint {
    pub fn from_point(point: &CurvePoint) -> Self {
        let mut bytes = to_le_bytes(point.y());
        if is_odd(point.x()) {
            bytes[31] |= SIGN_BIT_MASK;
        }
        Self(bytes)
    }

    /// Bit 255, `true` when `x` is odd
    pub fn sign_bit(&self) -> bool {
        self.0[31] & SIGN_BIT_MASK != 0
    }

    /// The `y` coordinate. Fails with `OutOfRange` for a non-canonical encoding, i.e. `y >= p`.
    pub fn y(&self) -> Result<FieldElement, DleqError> {
        let mut bytes = self.0;
        bytes[31] &= !SIGN_BIT_MASK;
        field_element_from_canonical_le_bytes(&bytes)
    }

    /// `x^2 = (y^2 - 1) / (d * y^2 - a)`
    fn x_squared(y: &FieldElement, params: &CurveParameters) -> Result<FieldElement, DleqError> {
        let y2 = y.square();
        divide(&(y2 - FieldElement::one()), &(*params.d() * y2 - params.a()))
    }

    /// Decompress using `candidate_x` as the square root witness. The witness must square to
    /// `x^2` or decompression fails with `SqrtHintInvalid`. Its parity is then fixed up to match the
    /// sign bit by negation, which only fails (with `SignBitMismatch`) when `x = 0` and the sign bit is set.
    pub fn decompress(
        &self,
        candidate_x: &FieldElement,
        params: &CurveParameters,
    ) -> Result<CurvePoint, DleqError> {
        let y = self.y()?;
        let x2 = Self::x_squared(&y, params)?;
        if candidate_x.square() != x2 {
            return Err(DleqError::SqrtHintInvalid);
        }
        let sign = self.sign_bit();
        let mut x = *candidate_x;
        if is_odd(&x) != sign {
            x = -x;
            if is_odd(&x) != sign {
                return Err(DleqError::SignBitMismatch);
            }
        }
        CurvePoint::new(x, y, params)
    }

    /// Compute the square root witness for [`Self::decompress`], already matching the sign bit.
    /// Fails with `NotOnCurve` if no point has this `y`.
    pub fn recover_x(&self, params: &CurveParameters) -> Result<FieldElement, DleqError> {
        let y = self.y()?;
        let x2 = Self::x_squared(&y, params)?;
        let x = sqrt_fq(&x2).ok_or(DleqError::NotOnCurve)?;
        if is_odd(&x) != self.sign_bit() {
            Ok(-x)
        } else {
            Ok(x)
        }
    }

    /// Decompress by computing the witness first, for callers that can take square roots
    pub fn decompress_recovering(&self, params: &CurveParameters) -> Result<CurvePoint, DleqError> {
        let x = self.recover_x(params)?;
        self.decompress(&x, params)
    }

    /// The encoding as a Cairo `u256`, `(low, high)` 128-bit words
    pub fn to_u256_words(&self) -> (u128, u128) {
        u256_words_from_le_bytes(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8; COMPRESSED_POINT_SIZE] {
        &self.0
    }
}

impl CurvePoint {
    pub fn compress(&self) -> CompressedPoint {
        CompressedPoint::from_point(self)
    }
}

impl From<[u8; COMPRESSED_POINT_SIZE]> for CompressedPoint {
    fn from(bytes: [u8; COMPRESSED_POINT_SIZE]) -> Self {
        Self(bytes)
    }
}

impl CanonicalSerialize for CompressedPoint {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        _compress: Compress,
    ) -> Result<(), SerializationError> {
        writer.write_all(&self.0)?;
        Ok(())
    }

    fn serialized_size(&self, _compress: Compress) -> usize {
        COMPRESSED_POINT_SIZE
    }
}

impl Valid for CompressedPoint {
    fn check(&self) -> Result<(), SerializationError> {
        Ok(())
    }
}

impl CanonicalDeserialize for CompressedPoint {
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        _compress: Compress,
        _validate: Validate,
    ) -> Result<Self, SerializationError> {
        let mut bytes = [0u8; COMPRESSED_POINT_SIZE];
        reader.read_exact(&mut bytes)?;
        Ok(Self(bytes))
    }
}
