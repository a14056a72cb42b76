#![cfg_attr(not(feature = "std"), no_std)]

//! Hashlock-bound proofs of discrete log equality on Ed25519.
//!
//! - A DLEQ proof shows that `T = t * G` and `U = t * Y` share the secret scalar `t` without revealing it. The
//!   Fiat-Shamir challenge binds the proof to an external 32-byte commitment, the hashlock. Check the [module](./src/dleq/mod.rs)
//! - The on-chain verifier only has prime field arithmetic, so every scalar multiplication it needs comes with a
//!   [`ScalarMulHint`](hint::ScalarMulHint): the claimed product in short Weierstrass coordinates and a "fake GLV"
//!   decomposition `s1 + k * s2 = 0 mod l` with 128-bit `s1` and `s2`. Check the [module](./src/hint/fake_glv.rs)
//! - Points travel as RFC 8032 compressed encodings. Decompression takes the `x` coordinate as an untrusted square root
//!   witness. Check the [module](./src/curve/compression.rs)
//!
//! Scalars are never truncated. Every scalar given to a hint is the full canonical value modulo the group order.

extern crate alloc;

pub mod bases;
pub mod curve;
pub mod dleq;
pub mod error;
pub mod field;
pub mod hint;
pub mod transcript;

pub mod prelude {
    pub use crate::{
        bases::DleqBases,
        curve::{
            compression::CompressedPoint, params::CurveParameters, point::CurvePoint,
            weierstrass::WeierstrassPoint,
        },
        dleq::{
            hashlock_for_secret, verify_batch, DleqProof, DleqProtocol, DleqStatement,
            DleqVerificationHints,
        },
        error::DleqError,
        field::{FieldElement, Scalar},
        hint::{ScalarMulHint, SignedHalfScalar},
        transcript::DleqTranscript,
    };
}
