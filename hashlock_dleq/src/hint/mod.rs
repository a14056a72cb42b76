//! Hints that let a verifier restricted to prime field arithmetic accept `Q = k * P` without
//! computing the product. A hint carries the claimed `Q` in Weierstrass form and a decomposition
//! `s1 + k * s2 = 0 mod l` of the scalar into two halves of at most 128 bits. Check `s1 * P + s2 * Q = O`
//! and `Q` can't be anything but `k * P`, and that check needs only two half-width multiplications.
//!
//! On the wire a hint is 10 field elements: 4 limbs of `Q.x`, 4 limbs of `Q.y`, `s1` and `s2` with
//! `s2` sign-magnitude encoded, `|s2| + 2^128` when negative.

pub mod fake_glv;

use crate::{curve::weierstrass::WeierstrassPoint, error::DleqError, field::Scalar};
use alloc::{string::String, vec::Vec};
use dleq_crypto_utils::{serde_utils::FeltHex, words::NUM_LIMBS};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Bit width `W` of both halves of the decomposition, also the position of the sign bit of `s2`
pub const HINT_SCALAR_BITS: usize = 128;

/// Number of field elements in the wire format of a hint
pub const HINT_FELTS: usize = 2 * NUM_LIMBS + 2;

/// A signed integer with magnitude below `2^128`
#[serde_as]
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignedHalfScalar {
    pub negative: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub magnitude: u128,
}

impl SignedHalfScalar {
    pub fn new(negative: bool, magnitude: u128) -> Self {
        Self {
            negative,
            magnitude,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    /// `|s| + 2^128` for negative `s`, `s` otherwise
    pub fn encode(&self) -> BigUint {
        let mut e = BigUint::from(self.magnitude);
        if self.negative {
            e += BigUint::one() << HINT_SCALAR_BITS;
        }
        e
    }

    /// Fails with `OutOfRange` for values of `2^129` and above
    pub fn decode(felt: &BigUint) -> Result<Self, DleqError> {
        if felt.bits() > (HINT_SCALAR_BITS + 1) as u64 {
            return Err(DleqError::OutOfRange);
        }
        let negative = felt.bit(HINT_SCALAR_BITS as u64);
        let mask = (BigUint::one() << HINT_SCALAR_BITS) - 1u8;
        let magnitude = (felt & mask).to_u128().ok_or(DleqError::OutOfRange)?;
        Ok(Self {
            negative,
            magnitude,
        })
    }

    pub fn to_scalar(&self) -> Scalar {
        let s = Scalar::from(self.magnitude);
        if self.negative {
            -s
        } else {
            s
        }
    }
}

/// Claimed `Q = k * P` with a decomposition of `k`. See the module docs.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ScalarMulHint {
    pub q: WeierstrassPoint,
    #[serde_as(as = "DisplayFromStr")]
    pub s1: u128,
    pub s2: SignedHalfScalar,
}

impl ScalarMulHint {
    pub fn to_felts(&self) -> [BigUint; HINT_FELTS] {
        let (x, y) = self.q.to_limbs();
        [
            BigUint::from(x[0]),
            BigUint::from(x[1]),
            BigUint::from(x[2]),
            BigUint::from(x[3]),
            BigUint::from(y[0]),
            BigUint::from(y[1]),
            BigUint::from(y[2]),
            BigUint::from(y[3]),
            BigUint::from(self.s1),
            self.s2.encode(),
        ]
    }

    /// Parse the 10 felt wire format. Only ranges are checked here, [`Self::verify`] checks the rest.
    pub fn from_felts(felts: &[BigUint]) -> Result<Self, DleqError> {
        if felts.len() != HINT_FELTS {
            return Err(DleqError::InvalidHintLength(felts.len()));
        }
        let mut limbs = [0u128; 2 * NUM_LIMBS];
        for (l, f) in limbs.iter_mut().zip(felts.iter()) {
            *l = f.to_u128().ok_or(DleqError::OutOfRange)?;
        }
        let mut x = [0u128; NUM_LIMBS];
        let mut y = [0u128; NUM_LIMBS];
        x.copy_from_slice(&limbs[..NUM_LIMBS]);
        y.copy_from_slice(&limbs[NUM_LIMBS..]);
        let q = WeierstrassPoint::from_limbs(&x, &y)?;
        let s1 = felts[2 * NUM_LIMBS]
            .to_u128()
            .ok_or(DleqError::OutOfRange)?;
        let s2 = SignedHalfScalar::decode(&felts[2 * NUM_LIMBS + 1])?;
        Ok(Self { q, s1, s2 })
    }

    /// The wire format as `0x` prefixed hex strings, ready to be used as calldata
    pub fn to_hex_felts(&self) -> Vec<String> {
        self.to_felts().iter().map(FeltHex::encode).collect()
    }
}
