//! Byte-level helpers shared by the scanners of this crate.
//!
//! All delimiters are ASCII, hence every offset returned here is a valid `char` boundary.

/// Returns the offset just past a quoted literal or an IRI that starts at `start`.
///
/// Braces, parentheses and separators inside such spans must not be interpreted by the caller.
/// Unterminated literals and `<` characters that do not open an IRI (e.g. a comparison in a
/// filter) return [`None`], and so do quotes and `<` in the middle of a name (`res:O'Neill`).
pub(crate) fn skip_opaque(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if start > 0 && is_name_byte(bytes[start - 1]) {
        return None;
    }
    match bytes.get(start)? {
        quote @ (b'"' | b'\'') => {
            let mut idx = start + 1;
            while idx < bytes.len() {
                match bytes[idx] {
                    b'\\' => idx += 2,
                    byte if byte == *quote => return Some(idx + 1),
                    _ => idx += 1,
                }
            }
            None
        }
        b'<' => {
            let mut idx = start + 1;
            while idx < bytes.len() {
                match bytes[idx] {
                    b'>' => return Some(idx + 1),
                    b'<' | b'"' | b'{' | b'}' => return None,
                    byte if byte.is_ascii_whitespace() => return None,
                    _ => idx += 1,
                }
            }
            None
        }
        _ => None,
    }
}

/// Whether `byte` may be part of a name, variable or prefixed name.
pub(crate) fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-' | b':' | b'?' | b'$') || byte >= 0x80
}

/// Matches `keyword` case-insensitively at `start`, requiring a name boundary on both sides.
pub(crate) fn keyword_at(text: &str, start: usize, keyword: &str) -> bool {
    let bytes = text.as_bytes();
    let end = start + keyword.len();
    if end > bytes.len() || !bytes[start..end].eq_ignore_ascii_case(keyword.as_bytes()) {
        return false;
    }
    let before = start == 0 || !is_name_byte(bytes[start - 1]);
    let after = bytes.get(end).map_or(true, |byte| !is_name_byte(*byte));
    before && after
}

/// Returns the first offset at or after `start` that is not ASCII whitespace.
pub(crate) fn skip_whitespace(text: &str, start: usize) -> usize {
    text.as_bytes()[start..]
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .map_or(text.len(), |offset| start + offset)
}

/// Returns the offset just past the group opened at `start` by `open`, honouring nesting and
/// opaque spans.
pub(crate) fn skip_group(text: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&open) {
        return None;
    }
    let mut depth = 0_usize;
    let mut idx = start;
    while idx < bytes.len() {
        if let Some(end) = skip_opaque(text, idx) {
            idx = end;
            continue;
        }
        if bytes[idx] == open {
            depth += 1;
        } else if bytes[idx] == close {
            depth -= 1;
            if depth == 0 {
                return Some(idx + 1);
            }
        }
        idx += 1;
    }
    None
}
