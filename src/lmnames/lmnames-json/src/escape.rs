/// Escapes a byte string for use inside a JSON string literal
/// Bytes are treated as single-byte codes: only 0x00-0x1F, `"` and `\` change
pub fn escape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    escape_into(&mut out, input);
    out
}

pub fn escape_into(out: &mut Vec<u8>, input: &[u8]) {
    for &byte in input {
        match byte {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            0x00..=0x1F => out.extend_from_slice(format!("\\u{:04x}", byte).as_bytes()),
            _ => out.push(byte),
        }
    }
}

#[cfg(test)]
mod escape_tests {
    use super::*;

    #[test]
    fn test_safe_strings_unchanged() {
        let texts: [&[u8]; 4] = [b"YOSHI'S ISLAND 1", b"#2 MORTON'S PLAINS", b"-", b""];
        for &text in texts.iter() {
            assert_eq!(escape(text), text.to_vec());
        }
    }

    #[test]
    fn test_named_escapes() {
        assert_eq!(escape(b"say \"hi\""), b"say \\\"hi\\\"".to_vec());
        assert_eq!(escape(b"a\\b"), b"a\\\\b".to_vec());
        assert_eq!(escape(b"\x08\x0C\n\r\t"), b"\\b\\f\\n\\r\\t".to_vec());
    }

    #[test]
    fn test_other_control_bytes_use_unicode_form() {
        let named = [0x08u8, 0x09, 0x0A, 0x0C, 0x0D];
        for byte in 0x00..=0x1Fu8 {
            if named.contains(&byte) {
                continue;
            }
            let expected = format!("\\u{:04x}", byte);
            assert_eq!(escape(&[byte]), expected.into_bytes());
        }
        assert_eq!(escape(&[0x1B]), b"\\u001b".to_vec());
    }

    #[test]
    fn test_high_bytes_pass_through() {
        assert_eq!(escape(&[0x7F, 0x80, 0xFF]), vec![0x7F, 0x80, 0xFF]);
    }
}
