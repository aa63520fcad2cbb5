//! Lenient decoding of `eth_call` return data.
//!
//! Token contracts in the wild do not all follow the ERC-20 return layout:
//! some return `bytes32` instead of `string`, others pad `uint8` to more than
//! one word. Every decoder here returns `None` for data it cannot make sense
//! of and never panics on malformed input.

use alloy::primitives::{hex, U256};

const WORD: usize = 32;

/// Decodes a JSON-RPC hex result, with or without the `0x` prefix.
pub fn decode_hex(data: &str) -> Option<Vec<u8>> {
    let data = data.strip_prefix("0x").unwrap_or(data);
    hex::decode(data).ok()
}

/// Decodes a `string` return value, falling back to a NUL-padded `bytes32`.
pub fn decode_string(data: &[u8]) -> Option<String> {
    let text = match decode_dynamic_string(data) {
        Some(text) => text,
        None => {
            let head = &data[..data.len().min(WORD)];
            let end = head.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
            utf8_dropping_invalid(&head[..end])
        }
    };

    (!text.is_empty()).then_some(text)
}

/// Decodes a `uint256` from the last word of `data`.
pub fn decode_uint(data: &[u8]) -> Option<U256> {
    let start = data.len().checked_sub(WORD)?;
    Some(U256::from_be_slice(&data[start..]))
}

/// `[offset][..][length][bytes]`. `None` when the layout does not fit `data`.
fn decode_dynamic_string(data: &[u8]) -> Option<String> {
    if data.len() < 2 * WORD {
        return None;
    }

    let offset = read_usize(&data[..WORD])?;
    let start = offset.checked_add(WORD)?;
    let len = read_usize(data.get(offset..start)?)?;
    let end = start.checked_add(len)?;
    let bytes = data.get(start..end)?;

    Some(utf8_dropping_invalid(bytes).trim_end_matches('\0').to_owned())
}

fn read_usize(word: &[u8]) -> Option<usize> {
    usize::try_from(U256::from_be_slice(word)).ok()
}

fn utf8_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: u64) -> Vec<u8> {
        U256::from(value).to_be_bytes::<32>().to_vec()
    }

    fn padded(bytes: &[u8]) -> Vec<u8> {
        let mut out = bytes.to_vec();
        out.resize(bytes.len().div_ceil(WORD).max(1) * WORD, 0);
        out
    }

    fn dynamic_string(text: &str) -> Vec<u8> {
        [word(32), word(text.len() as u64), padded(text.as_bytes())].concat()
    }

    #[test]
    fn decodes_dynamic_string() {
        assert_eq!(decode_string(&dynamic_string("USDT")), Some("USDT".to_owned()));
    }

    #[test]
    fn decodes_dynamic_string_at_non_standard_offset() {
        let data = [word(64), word(0), word(5), padded(b"Token")].concat();

        assert_eq!(decode_string(&data), Some("Token".to_owned()));
    }

    #[test]
    fn decodes_bytes32_string() {
        let data = padded(b"MKR");

        assert_eq!(decode_string(&data), Some("MKR".to_owned()));
    }

    #[test]
    fn falls_back_to_first_word_when_offset_is_out_of_range() {
        let mut data = padded(b"WETH");
        data.extend(word(u64::MAX));

        assert_eq!(decode_string(&data), Some("WETH".to_owned()));
    }

    #[test]
    fn empty_dynamic_string_is_absent() {
        let data = [word(32), word(0)].concat();

        assert_eq!(decode_string(&data), None);
    }

    #[test]
    fn drops_invalid_utf8_and_trailing_nul() {
        let data = [word(32), word(6), padded(&[b'A', 0xff, b'B', b'C', 0, 0])].concat();

        assert_eq!(decode_string(&data), Some("ABC".to_owned()));
    }

    #[test]
    fn missing_or_zeroed_data_is_absent() {
        assert_eq!(decode_string(&[]), None);
        assert_eq!(decode_string(&[0u8; 32]), None);
        assert_eq!(decode_string(&[0xff; 4]), None);
    }

    #[test]
    fn decodes_uint_from_last_word() {
        assert_eq!(decode_uint(&word(6)), Some(U256::from(6)));

        let padded_twice = [word(0), word(18)].concat();
        assert_eq!(decode_uint(&padded_twice), Some(U256::from(18)));
    }

    #[test]
    fn short_uint_is_absent() {
        assert_eq!(decode_uint(&[]), None);
        assert_eq!(decode_uint(&[0u8; 31]), None);
    }

    #[test]
    fn decodes_hex_with_and_without_prefix() {
        assert_eq!(decode_hex("0x0102"), Some(vec![1, 2]));
        assert_eq!(decode_hex("0102"), Some(vec![1, 2]));
        assert_eq!(decode_hex("0x"), Some(vec![]));
        assert_eq!(decode_hex("0x123"), None);
        assert_eq!(decode_hex("0xzz"), None);
    }
}
