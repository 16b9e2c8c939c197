/// Convert a byte slice into a string.
/// Includes printable ASCII characters as-is.
/// Converts non-printable or non-ASCII characters to strings like "\n" and "\x19".
///
/// Uses
/// [`core::ascii::escape_default`](https://doc.rust-lang.org/core/ascii/fn.escape_default.html)
/// internally to escape each byte.
///
/// Example:
/// ```
/// use request_cookies::internal::escape_ascii;
/// assert_eq!("abc", escape_ascii(b"abc"));
/// assert_eq!("abc\\n", escape_ascii(b"abc\n"));
/// assert_eq!(
///     "Euro sign: \\xe2\\x82\\xac",
///     escape_ascii("Euro sign: \u{20AC}".as_bytes())
/// );
/// ```
#[must_use]
pub fn escape_ascii(input: &[u8]) -> String {
    let mut result = String::new();
    for byte in input {
        for ascii_byte in core::ascii::escape_default(*byte) {
            result.push(char::from(ascii_byte));
        }
    }
    result
}

/// Like [`escape_ascii`], but keeps only the first `max_len` bytes of `input`
/// and appends `"..."` when it dropped any.
///
/// Cookie headers come from clients, so log them only through this.
#[must_use]
pub fn escape_and_elide(input: &[u8], max_len: usize) -> String {
    if input.len() > max_len {
        escape_ascii(&input[..max_len]) + "..."
    } else {
        escape_ascii(input)
    }
}

/// Returns `s` without leading and trailing spaces and tabs.
#[must_use]
pub fn trim_ows(s: &str) -> &str {
    // https://datatracker.ietf.org/doc/html/rfc7230#section-3.2.3
    //     OWS = *( SP / HTAB )
    s.trim_matches([' ', '\t'])
}
