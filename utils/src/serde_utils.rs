//! Serde serialization for `arkworks-rs` objects and big integers that don't implement serde themselves

use alloc::{format, string::String, vec::Vec};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;
use num_traits::Num;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

pub type ArkObjectBytes = AsCanonical;

// This is taken from the expanded [`serde_with::serde_conv!`] macro but generalized for any `T: CanonicalSerialize + CanonicalDeserialize`

pub struct AsCanonical;
impl AsCanonical {
    pub fn serialize<S, T>(x: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: CanonicalSerialize,
        S: Serializer,
    {
        let size = x.compressed_size();
        let mut bytes = Vec::with_capacity(size);
        x.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        Serialize::serialize(&bytes, serializer)
    }
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        T: CanonicalDeserialize,
        D: Deserializer<'de>,
    {
        let y: Vec<u8> = Deserialize::deserialize(deserializer)?;
        T::deserialize_compressed(y.as_slice()).map_err(serde::de::Error::custom)
    }
}

impl<T> SerializeAs<T> for AsCanonical
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(x: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Self::serialize(x, serializer)
    }
}
impl<'de, T> DeserializeAs<'de, T> for AsCanonical
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::deserialize(deserializer)
    }
}

/// Serializes a [`BigUint`] as a `0x` prefixed lowercase hex string, the way field elements are
/// written in Cairo calldata.
pub struct FeltHex;

impl FeltHex {
    pub fn encode(x: &BigUint) -> String {
        format!("0x{:x}", x)
    }

    pub fn decode(s: &str) -> Option<BigUint> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return None;
        }
        BigUint::from_str_radix(digits, 16).ok()
    }
}

impl SerializeAs<BigUint> for FeltHex {
    fn serialize_as<S>(x: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&Self::encode(x))
    }
}

impl<'de> DeserializeAs<'de, BigUint> for FeltHex {
    fn deserialize_as<D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).ok_or_else(|| serde::de::Error::custom("invalid hex felt"))
    }
}
