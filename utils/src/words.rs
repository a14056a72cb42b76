//! Conversions between 32-byte little-endian integers and the word layouts used by Cairo: `u256` as
//! two 128-bit words and `u384` as four 96-bit limbs.

/// Number of bits in a limb of a `u384`
pub const LIMB_BITS: u32 = 96;
/// Number of limbs of a `u384`
pub const NUM_LIMBS: usize = 4;
const LIMB_BYTES: usize = (LIMB_BITS / 8) as usize;

/// Split 32 little-endian bytes into `(low, high)` 128-bit words.
pub fn u256_words_from_le_bytes(bytes: &[u8; 32]) -> (u128, u128) {
    let mut low = [0u8; 16];
    let mut high = [0u8; 16];
    low.copy_from_slice(&bytes[..16]);
    high.copy_from_slice(&bytes[16..]);
    (u128::from_le_bytes(low), u128::from_le_bytes(high))
}

pub fn le_bytes_from_u256_words(low: u128, high: u128) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(&low.to_le_bytes());
    bytes[16..].copy_from_slice(&high.to_le_bytes());
    bytes
}

/// Split 32 little-endian bytes into 96-bit limbs, least significant first. The last limb is
/// always zero as 256 bits fit in 3 limbs.
pub fn limbs_from_le_bytes(bytes: &[u8; 32]) -> [u128; NUM_LIMBS] {
    let mut limbs = [0u128; NUM_LIMBS];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks(LIMB_BYTES)) {
        let mut b_16 = [0u8; 16];
        b_16[..chunk.len()].copy_from_slice(chunk);
        *limb = u128::from_le_bytes(b_16);
    }
    limbs
}

/// Inverse of [`limbs_from_le_bytes`]. Returns `None` if any limb does not fit in 96 bits or the
/// value does not fit in 256 bits.
pub fn le_bytes_from_limbs(limbs: &[u128; NUM_LIMBS]) -> Option<[u8; 32]> {
    if limbs.iter().any(|l| (l >> LIMB_BITS) != 0) {
        return None;
    }
    // 3 limbs carry 288 bits, so the top 32 bits of the third limb and the whole fourth limb must be zero
    if limbs[3] != 0 || (limbs[2] >> 64) != 0 {
        return None;
    }
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().take(3).enumerate() {
        let start = i * LIMB_BYTES;
        let end = (start + LIMB_BYTES).min(32);
        bytes[start..end].copy_from_slice(&limb.to_le_bytes()[..end - start]);
    }
    Some(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u256_words() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        bytes[16] = 2;
        bytes[31] = 0x80;
        let (low, high) = u256_words_from_le_bytes(&bytes);
        assert_eq!(low, 1);
        assert_eq!(high, 2 | (0x80 << 120));
        assert_eq!(le_bytes_from_u256_words(low, high), bytes);
    }

    #[test]
    fn limbs() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8 + 1;
        }
        let limbs = limbs_from_le_bytes(&bytes);
        assert_eq!(limbs[3], 0);
        assert!(limbs.iter().all(|l| l >> LIMB_BITS == 0));
        assert_eq!(limbs[0] & 0xff, 1);
        assert_eq!(limbs[1] & 0xff, 13);
        assert_eq!(limbs[2] & 0xff, 25);
        assert_eq!(le_bytes_from_limbs(&limbs), Some(bytes));

        assert_eq!(le_bytes_from_limbs(&[1 << 96, 0, 0, 0]), None);
        assert_eq!(le_bytes_from_limbs(&[0, 0, 1 << 64, 0]), None);
        assert_eq!(le_bytes_from_limbs(&[0, 0, 0, 1]), None);
    }
}
