/// Decode a hex string of exactly `2 * N` digits, for writing test vectors. Panics on bad input.
pub fn hex_to_array<const N: usize>(s: &str) -> [u8; N] {
    let mut out = [0u8; N];
    ::hex::decode_to_slice(s, &mut out).unwrap();
    out
}

pub fn array_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
