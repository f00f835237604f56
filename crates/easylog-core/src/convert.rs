//! Wide-to-narrow string conversion for messages coming from wide-character APIs

/// Convert a UTF-16 buffer to a `String`.
///
/// Stops at the first NUL, like a C wide string. Unpaired surrogates become U+FFFD.
pub fn wide_to_string(wide: &[u16]) -> String {
    let end = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..end])
}

/// Convert a UTF-32 buffer (4-byte `wchar_t`) to a `String`.
///
/// Stops at the first NUL. Values that are not Unicode scalars become U+FFFD.
pub fn wide_chars_to_string(wide: &[u32]) -> String {
    wide.iter()
        .take_while(|&&c| c != 0)
        .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
