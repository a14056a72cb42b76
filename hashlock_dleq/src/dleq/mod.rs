//! Proof that `T = t * G` and `U = t * Y` for the same secret `t`, bound to a 32-byte hashlock.
//!
//! This is the Chaum-Pedersen protocol made non-interactive:
//! 1. Prover derives a nonce `k` deterministically from `t` and the hashlock and commits to `R1 = k * G`, `R2 = k * Y`
//! 2. The challenge `c` hashes `G, Y, T, U, R1, R2` and the hashlock, see [`DleqTranscript`](crate::transcript::DleqTranscript).
//! 3. Prover responds with `s = k + c * t`.
//! 4. Verifier checks `s * G - c * T = R1` and `s * Y - c * U = R2` and that `c` is the hash of the transcript.
//!
//! The verifier is meant to be implementable with field arithmetic only, so the 4 scalar multiplications
//! of step 4 are supplied as [`ScalarMulHint`]s along with square root witnesses to decompress `R1` and `R2`.
//! These are produced by [`DleqProof::verification_hints`] and are untrusted by [`DleqProof::verify`].

mod prover;
mod verifier;

pub use prover::DleqProtocol;
pub use verifier::verify_batch;

use crate::{
    bases::DleqBases,
    curve::{compression::CompressedPoint, params::CurveParameters, point::CurvePoint},
    error::DleqError,
    field::{scalar_from_canonical_le_bytes, to_le_bytes, FieldElement, Scalar},
    hint::{ScalarMulHint, HINT_FELTS},
    transcript::{DleqTranscript, CONTEXT_SIZE},
};
use alloc::vec::Vec;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use dleq_crypto_utils::serde_utils::ArkObjectBytes;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Salt of the HKDF deriving the nonce from the secret and the hashlock
pub const NONCE_SALT: &[u8] = b"DLEQ-NONCE-V1";

/// Size of [`DleqProof::to_bytes`], 2 compressed points and 2 scalars
pub const PROOF_SIZE: usize = 128;

/// SHA-256 of the 32-byte little-endian encoding of the secret
pub fn hashlock_for_secret(secret: &Scalar) -> [u8; CONTEXT_SIZE] {
    let mut secret_bytes = to_le_bytes(secret);
    let hashlock: [u8; CONTEXT_SIZE] = Sha256::digest(&secret_bytes).into();
    secret_bytes.zeroize();
    hashlock
}

/// The public part: bases, `T`, `U` and the hashlock
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DleqStatement {
    pub g: CurvePoint,
    pub y: CurvePoint,
    pub t: CurvePoint,
    pub u: CurvePoint,
    pub context: [u8; CONTEXT_SIZE],
}

impl DleqStatement {
    pub fn new(
        bases: &DleqBases,
        t: CurvePoint,
        u: CurvePoint,
        context: [u8; CONTEXT_SIZE],
    ) -> Self {
        Self {
            g: bases.g,
            y: bases.y,
            t,
            u,
            context,
        }
    }

    /// Decode `T` and `U` from their encodings and square root witnesses. Decompression errors are
    /// returned as they are. Fails with `NotInPrimeOrderSubgroup` if `T` or `U` has a small order component.
    pub fn from_compressed(
        bases: &DleqBases,
        t: &CompressedPoint,
        t_x: &FieldElement,
        u: &CompressedPoint,
        u_x: &FieldElement,
        context: [u8; CONTEXT_SIZE],
        params: &CurveParameters,
    ) -> Result<Self, DleqError> {
        let statement = Self::new(
            bases,
            t.decompress(t_x, params)?,
            u.decompress(u_x, params)?,
            context,
        );
        statement.check_subgroup()?;
        Ok(statement)
    }

    /// All of `G`, `Y`, `T` and `U` must be in the prime order subgroup. Adding a point of small
    /// order to `T` or `U` gives a statement with no common discrete log that the hint equations
    /// can still be made to accept.
    pub fn check_subgroup(&self) -> Result<(), DleqError> {
        for p in [&self.g, &self.y, &self.t, &self.u] {
            if !p.is_in_prime_order_subgroup() {
                return Err(DleqError::NotInPrimeOrderSubgroup);
            }
        }
        Ok(())
    }

    pub fn transcript(&self, r1: &CompressedPoint, r2: &CompressedPoint) -> DleqTranscript {
        DleqTranscript::new(
            &self.g.compress(),
            &self.y.compress(),
            &self.t.compress(),
            &self.u.compress(),
            r1,
            r2,
            &self.context,
        )
    }
}

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
pub struct DleqProof {
    pub r1: CompressedPoint,
    pub r2: CompressedPoint,
    #[serde_as(as = "ArkObjectBytes")]
    pub challenge: Scalar,
    #[serde_as(as = "ArkObjectBytes")]
    pub response: Scalar,
}

impl DleqProof {
    /// `R1 || R2 || c || s` with the scalars as 32 bytes little-endian
    pub fn to_bytes(&self) -> [u8; PROOF_SIZE] {
        let mut bytes = [0u8; PROOF_SIZE];
        bytes[..32].copy_from_slice(self.r1.as_bytes());
        bytes[32..64].copy_from_slice(self.r2.as_bytes());
        bytes[64..96].copy_from_slice(&to_le_bytes(&self.challenge));
        bytes[96..].copy_from_slice(&to_le_bytes(&self.response));
        bytes
    }

    /// Inverse of [`Self::to_bytes`]. Scalars must be canonical, otherwise fails with `OutOfRange`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DleqError> {
        if bytes.len() != PROOF_SIZE {
            return Err(SerializationError::InvalidData.into());
        }
        let chunk = |i: usize| {
            let mut c = [0u8; 32];
            c.copy_from_slice(&bytes[32 * i..32 * (i + 1)]);
            c
        };
        Ok(Self {
            r1: CompressedPoint(chunk(0)),
            r2: CompressedPoint(chunk(1)),
            challenge: scalar_from_canonical_le_bytes(&chunk(2))?,
            response: scalar_from_canonical_le_bytes(&chunk(3))?,
        })
    }
}

/// Everything the verifier needs besides the statement and the proof: square root witnesses for
/// `R1` and `R2` and hints for `s * G`, `s * Y`, `-c * T` and `-c * U`
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DleqVerificationHints {
    #[serde_as(as = "ArkObjectBytes")]
    pub r1_x: FieldElement,
    #[serde_as(as = "ArkObjectBytes")]
    pub r2_x: FieldElement,
    pub s_g: ScalarMulHint,
    pub s_y: ScalarMulHint,
    pub c_t: ScalarMulHint,
    pub c_u: ScalarMulHint,
}

impl DleqVerificationHints {
    /// The 4 scalar multiplication hints in wire format, in the order `s * G`, `s * Y`, `-c * T`, `-c * U`
    pub fn to_felts(&self) -> Vec<BigUint> {
        let mut felts = Vec::with_capacity(4 * HINT_FELTS);
        for h in [&self.s_g, &self.s_y, &self.c_t, &self.c_u] {
            felts.extend(h.to_felts());
        }
        felts
    }
}
