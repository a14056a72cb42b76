#![allow(non_snake_case)]

use crate::concat_slices;
use alloc::vec;
use ark_ff::PrimeField;
use digest::Digest;
use hkdf::Hkdf;
use sha2::Sha256;

const ZERO_AS_OCTET: [u8; 1] = [0u8];

/// Number of bytes squeezed from HKDF on top of the field size so that reducing modulo the field
/// order is statistically close to uniform.
const EXTRA_OKM_BYTES: usize = 16;

/// Deterministically generate a non-zero field element from given seed similar to the procedure defined
/// here <https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-bls-signature-04#section-2.3>
/// `ikm` is the seed, `salt` is for domain separation. The same `(ikm, salt)` always gives the same
/// element and different seeds give independent looking elements, which is what a nonce derivation needs.
pub fn field_elem_from_seed<F: PrimeField>(ikm: &[u8], salt: &[u8]) -> F {
    // IKM || I2OSP(0, 1), append 1 byte as 0 to `ikm`
    let mut ikm_appended = concat_slices!(ikm, ZERO_AS_OCTET);

    let L = (F::MODULUS_BIT_SIZE as usize + 7) / 8 + EXTRA_OKM_BYTES;
    // I2OSP(L, 2)
    let L_as_bytes = (L as u16).to_be_bytes();
    let salt_hash = Sha256::digest(salt);

    loop {
        let hkdf = Hkdf::<Sha256>::new(Some(&salt_hash), &ikm_appended);
        let mut okm = vec![0u8; L];
        // This cannot fail, `L` is far below 255 * 32 bytes
        hkdf.expand(&L_as_bytes, &mut okm).unwrap();
        let f = F::from_be_bytes_mod_order(&okm);
        if !f.is_zero() {
            return f;
        }
        // Bump the trailing octet so the next round uses a fresh input
        let last = ikm_appended.len() - 1;
        ikm_appended[last] = ikm_appended[last].wrapping_add(1);
    }
}

/// Hash `bytes` and feed the digest to `map` until it accepts. Attempt `j > 0` hashes
/// `bytes || "-attempt-" || j`. This is vulnerable to timing attack and is only meant for public
/// inputs like when generating setup parameters.
pub fn try_and_incr<D: Digest, T>(bytes: &[u8], mut map: impl FnMut(&[u8]) -> Option<T>) -> T {
    let mut hash = D::digest(bytes);
    let mut j = 1u64;
    loop {
        if let Some(t) = map(&hash) {
            return t;
        }
        hash = D::digest(&concat_slices![bytes, b"-attempt-", j.to_le_bytes()]);
        j += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ed25519::Fr;
    use ark_ff::Zero;
    use blake2::Blake2s256;

    #[test]
    fn seeded_elements() {
        let a = field_elem_from_seed::<Fr>(b"seed", b"salt");
        let b = field_elem_from_seed::<Fr>(b"seed", b"salt");
        assert_eq!(a, b);
        assert!(!a.is_zero());

        let c = field_elem_from_seed::<Fr>(b"seed", b"other salt");
        let d = field_elem_from_seed::<Fr>(b"other seed", b"salt");
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_ne!(c, d);
    }

    #[test]
    fn try_and_incr_counts_attempts() {
        let mut attempts = 0;
        let out = try_and_incr::<Blake2s256, _>(b"label", |h| {
            attempts += 1;
            (attempts == 3).then(|| h.to_vec())
        });
        assert_eq!(attempts, 3);
        let expected = Blake2s256::digest(&concat_slices![b"label", b"-attempt-", 2u64.to_le_bytes()]);
        assert_eq!(out, expected.to_vec());
    }
}
