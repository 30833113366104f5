//! Memcomparable key codec
//!
//! Region boundaries are stored in a block-padded form: every 9-byte group
//! holds 8 payload bytes and a marker byte `0xFF - pad`, where `pad` (0..=8)
//! counts the trailing filler bytes of that group. Decoding strips the
//! markers and filler so boundaries can be shown as the logical key.

const GROUP_SIZE: usize = 8;
const MARKER: u8 = 0xFF;
const PAD: u8 = 0x00;

/// Decode a hex encoded region boundary for display.
///
/// Returns the logical key as uppercase hex, or `key` unchanged when it is
/// not valid hex or not in the block-padded form.
pub fn decode_key(key: &str) -> String {
    let Ok(raw) = hex::decode(key) else {
        return key.to_string();
    };
    match decode_bytes(&raw) {
        Some(decoded) => hex::encode_upper(decoded),
        None => key.to_string(),
    }
}

/// Strip group markers and padding. `None` unless the input is consumed
/// exactly and every marker is in range.
pub fn decode_bytes(mut raw: &[u8]) -> Option<Vec<u8>> {
    let mut buf = Vec::with_capacity(raw.len() / (GROUP_SIZE + 1) * GROUP_SIZE);
    while raw.len() > GROUP_SIZE {
        let pad = (MARKER - raw[GROUP_SIZE]) as usize;
        if pad > GROUP_SIZE {
            return None;
        }
        buf.extend_from_slice(&raw[..GROUP_SIZE - pad]);
        raw = &raw[GROUP_SIZE + 1..];
    }
    raw.is_empty().then_some(buf)
}

/// Block-pad `key`. A key whose length is a multiple of 8 (including the
/// empty key) ends with an all-padding group.
pub fn encode_bytes(key: &[u8]) -> Vec<u8> {
    let groups = key.len() / GROUP_SIZE + 1;
    let mut out = Vec::with_capacity(groups * (GROUP_SIZE + 1));
    for chunk_start in (0..groups).map(|g| g * GROUP_SIZE) {
        let chunk_end = (chunk_start + GROUP_SIZE).min(key.len());
        let chunk = &key[chunk_start..chunk_end];
        let pad = GROUP_SIZE - chunk.len();
        out.extend_from_slice(chunk);
        out.extend(std::iter::repeat(PAD).take(pad));
        out.push(MARKER - pad as u8);
    }
    out
}

/// Block-pad `key` and hex encode it the way PD serves boundaries
pub fn encode_key(key: &[u8]) -> String {
    hex::encode(encode_bytes(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let keys: [&[u8]; 5] = [
            b"",
            b"t",
            b"12345678",
            b"t\x80\x00\x00\x00\x00\x00\x00\x05_r",
            &[0xff; 17],
        ];
        for key in keys {
            let encoded = encode_key(key);
            assert_eq!(decode_key(&encoded), hex::encode_upper(key), "key {:?}", key);
        }
    }

    #[test]
    fn test_encoded_length() {
        assert_eq!(encode_bytes(b"").len(), 9);
        assert_eq!(encode_bytes(b"1234567").len(), 9);
        assert_eq!(encode_bytes(b"12345678").len(), 18);
    }

    #[test]
    fn test_full_padding_group() {
        // 0xF7 = 0xFF - 8: the group carries no payload
        assert_eq!(decode_key("0000000000000000f7"), "");
        assert_eq!(decode_key("0000000000000000ff"), "0000000000000000");
        assert_eq!(decode_key("7400000000000000f8"), "74");
    }

    #[test]
    fn test_table_prefix() {
        // t{table_id=5} as written by the SQL layer
        let key = "7480000000000000ff0500000000000000f8";
        assert_eq!(decode_key(key), "748000000000000005");
    }

    #[test]
    fn test_fallback_to_input() {
        assert_eq!(decode_key("ab"), "ab");
        assert_eq!(decode_key("not hex"), "not hex");
        assert_eq!(decode_key("abc"), "abc");
        // marker 0xF6 would mean 9 bytes of padding
        assert_eq!(decode_key("0000000000000000f6"), "0000000000000000f6");
        // trailing partial group
        assert_eq!(decode_key("0000000000000000ff00"), "0000000000000000ff00");
    }

    #[test]
    fn test_empty() {
        assert_eq!(decode_key(""), "");
        assert_eq!(decode_bytes(&[]), Some(vec![]));
    }
}
