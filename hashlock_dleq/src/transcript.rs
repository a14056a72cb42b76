//! Fiat-Shamir challenge of the DLEQ proof. The hashed message has a fixed layout of 228 bytes:
//!
//! `"DLEQ" || G || Y || T || U || R1 || R2 || context`
//!
//! with every point in its 32-byte compressed form and `context` being the hashlock. The BLAKE2s-256
//! digest is read as a little-endian integer and reduced modulo `l`.

use crate::{curve::compression::CompressedPoint, field::Scalar};
use ark_ff::PrimeField;
use ark_std::io::Write;
use blake2::Blake2s256;
use digest::Digest;

pub const DLEQ_TAG: [u8; 4] = *b"DLEQ";

/// Size of the external context, the SHA-256 hashlock
pub const CONTEXT_SIZE: usize = 32;

pub const TRANSCRIPT_SIZE: usize = DLEQ_TAG.len() + 6 * 32 + CONTEXT_SIZE;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DleqTranscript {
    bytes: [u8; TRANSCRIPT_SIZE],
}

impl DleqTranscript {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        g: &CompressedPoint,
        y: &CompressedPoint,
        t: &CompressedPoint,
        u: &CompressedPoint,
        r1: &CompressedPoint,
        r2: &CompressedPoint,
        context: &[u8; CONTEXT_SIZE],
    ) -> Self {
        let mut bytes = [0u8; TRANSCRIPT_SIZE];
        bytes[..DLEQ_TAG.len()].copy_from_slice(&DLEQ_TAG);
        for (i, p) in [g, y, t, u, r1, r2].into_iter().enumerate() {
            let start = DLEQ_TAG.len() + 32 * i;
            bytes[start..start + 32].copy_from_slice(p.as_bytes());
        }
        bytes[TRANSCRIPT_SIZE - CONTEXT_SIZE..].copy_from_slice(context);
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Write the transcript to `writer`, for callers hashing it alongside other data
    pub fn write<W: Write>(&self, mut writer: W) -> ark_std::io::Result<()> {
        writer.write_all(&self.bytes)
    }

    /// The challenge with BLAKE2s-256
    pub fn challenge(&self) -> Scalar {
        self.challenge_with::<Blake2s256>()
    }

    /// The challenge with any hash function, the digest is reduced modulo `l` as a little-endian integer
    pub fn challenge_with<D: Digest>(&self) -> Scalar {
        Scalar::from_le_bytes_mod_order(&D::digest(&self.bytes))
    }
}
