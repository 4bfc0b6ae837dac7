/// blake3 digest of the input, used as RNG seed material.
pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

pub fn u64s_from_str(input: &str) -> [u64; 4] {
    let u8s = u8s_from_str(input);

    let mut output = [0u64; 4];
    for (i, chunk) in u8s.chunks_exact(8).enumerate() {
        output[i] = u64::from_le_bytes(chunk.try_into().expect("chunk is 8 bytes"));
    }
    output
}
