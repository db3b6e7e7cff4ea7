//! Allocation-light primitives for rendering log lines
//!
//! Log lines are assembled directly into a reusable byte buffer. Nothing here
//! goes through a general serializer: integers are written digit by digit and
//! strings are escaped just enough to sit inside a JSON string literal.

use std::borrow::Cow;

/// Append the decimal form of `value`, zero-padded to at least `min_width` digits.
pub fn write_uint(buf: &mut Vec<u8>, value: u64, min_width: usize) {
    // 20 digits covers u64::MAX
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    let mut remaining = value;

    loop {
        pos -= 1;
        digits[pos] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
        if remaining == 0 {
            break;
        }
    }

    let len = digits.len() - pos;
    if min_width > len {
        buf.resize(buf.len() + (min_width - len), b'0');
    }
    buf.extend_from_slice(&digits[pos..]);
}

fn needs_escape(b: u8) -> bool {
    b == b'"' || b == b'\\' || b < 0x20
}

/// Make `s` safe to embed inside a JSON string literal.
///
/// Newlines are dropped rather than escaped so that a rendered record stays on
/// one line; quotes, backslashes and the remaining control characters are
/// escaped. Returns the input untouched when nothing needs to change.
pub fn escape_json_string(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(needs_escape) {
        return Cow::Borrowed(s);
    }
    let mut out = Vec::with_capacity(s.len() + 8);
    push_escaped(&mut out, s);
    // Only ASCII bytes were inserted or removed, so the result is still UTF-8.
    match String::from_utf8(out) {
        Ok(escaped) => Cow::Owned(escaped),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

/// Append `s` to `buf` with the same escaping as [`escape_json_string`].
pub fn write_json_escaped(buf: &mut Vec<u8>, s: &str) {
    if !s.bytes().any(needs_escape) {
        buf.extend_from_slice(s.as_bytes());
        return;
    }
    push_escaped(buf, s);
}

fn push_escaped(buf: &mut Vec<u8>, s: &str) {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    for &b in s.as_bytes() {
        match b {
            b'\n' => {}
            b'"' => buf.extend_from_slice(b"\\\""),
            b'\\' => buf.extend_from_slice(b"\\\\"),
            b'\r' => buf.extend_from_slice(b"\\r"),
            b'\t' => buf.extend_from_slice(b"\\t"),
            c if c < 0x20 => {
                buf.extend_from_slice(b"\\u00");
                buf.push(HEX[(c >> 4) as usize]);
                buf.push(HEX[(c & 0x0f) as usize]);
            }
            c => buf.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint(value: u64, width: usize) -> String {
        let mut buf = Vec::new();
        write_uint(&mut buf, value, width);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_uint_padding() {
        assert_eq!(uint(7, 2), "07");
        assert_eq!(uint(2025, 4), "2025");
        assert_eq!(uint(42, 6), "000042");
        assert_eq!(uint(0, 1), "0");
        assert_eq!(uint(0, 0), "0");
        assert_eq!(uint(123, 1), "123");
    }

    #[test]
    fn test_write_uint_extremes() {
        assert_eq!(uint(u64::MAX, 0), u64::MAX.to_string());
        assert_eq!(uint(5, 22), format!("{:022}", 5));
    }

    #[test]
    fn test_write_uint_appends() {
        let mut buf = b"ts=".to_vec();
        write_uint(&mut buf, 1_700_000_000, 10);
        buf.push(b'.');
        write_uint(&mut buf, 512, 6);
        assert_eq!(buf, b"ts=1700000000.000512");
    }

    #[test]
    fn test_escape_borrowed_when_clean() {
        assert!(matches!(escape_json_string("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_quotes_and_newlines() {
        assert_eq!(escape_json_string("say \"hi\"\nnow"), "say \\\"hi\\\"now");
        assert_eq!(escape_json_string("C:\\temp\tx"), "C:\\\\temp\\tx");
        assert_eq!(escape_json_string("bell\u{7}"), "bell\\u0007");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape_json_string("caf\u{e9} \"\u{1F600}\""), "caf\u{e9} \\\"\u{1F600}\\\"");
    }

    #[test]
    fn test_escaped_output_parses_as_json_string() {
        let raw = "line one\nquote \" backslash \\ tab \t end";
        let literal = format!("\"{}\"", escape_json_string(raw));
        let parsed: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(parsed, "line onequote \" backslash \\ tab \t end");
    }
}
