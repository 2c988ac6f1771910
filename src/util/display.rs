// Display Helpers
// Hexadecimal rendering of big integers for terminal output

use crate::rsa::bigint::RsaBigInt;

/// Hex digits per line when printing a number as a block
pub const HEX_LINE_WIDTH: usize = 60;

/// Lowercase hexadecimal digits of `n` without leading zeros
pub fn to_hex(n: &RsaBigInt) -> String {
    let encoded = hex::encode(n.to_bytes_be());
    let digits = encoded.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits.to_string()
    }
}

/// Hex digits of `n` wrapped into lines of at most `width` digits
pub fn hex_block(n: &RsaBigInt, width: usize) -> String {
    let digits = to_hex(n);
    let width = width.max(1);

    (0..digits.len())
        .step_by(width)
        .map(|start| &digits[start..(start + width).min(digits.len())])
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&from_u64(0)), "0");
        assert_eq!(to_hex(&from_u64(10)), "a");
        assert_eq!(to_hex(&from_u64(255)), "ff");
        assert_eq!(to_hex(&from_u64(256)), "100");
        assert_eq!(to_hex(&from_u64(0xdead_beef)), "deadbeef");
    }

    #[test]
    fn test_hex_block_short() {
        assert_eq!(hex_block(&from_u64(0x2a), HEX_LINE_WIDTH), "2a");
    }

    #[test]
    fn test_hex_block_wraps() {
        // 2^300 - 1 is 75 hex digits of 'f'
        let n = (from_u64(1) << 300u16) - 1u8;
        let block = hex_block(&n, HEX_LINE_WIDTH);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 60);
        assert_eq!(lines[1].len(), 15);
        assert!(block.chars().all(|c| c == 'f' || c == '\n'));
    }

    #[test]
    fn test_hex_block_exact_width() {
        let block = hex_block(&from_u64(0x1234_5678), 4);
        assert_eq!(block, "1234\n5678");
    }
}
