use percent_encoding::percent_decode_str;

#[must_use]
pub fn from_hex_byte(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + b - b'a'),
        b'A'..=b'F' => Some(10 + b - b'A'),
        _ => None,
    }
}

/// Something [`percent_decode_value`] tolerated while decoding.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DecodeIssue {
    /// A `%` not followed by two hex digits.  It was copied through as-is.
    MalformedEscape,
    /// The decoded bytes are not UTF-8.  Bad sequences became U+FFFD.
    InvalidUtf8,
}
impl DecodeIssue {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DecodeIssue::MalformedEscape => "malformed percent-escape",
            DecodeIssue::InvalidUtf8 => "percent-decoded value is not UTF-8",
        }
    }
}

/// Returns true when `raw` contains a `%` that does not start a `%XX` escape.
#[must_use]
pub fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut n = 0;
    while n < bytes.len() {
        if bytes[n] == b'%' {
            match (
                bytes.get(n + 1).copied().and_then(from_hex_byte),
                bytes.get(n + 2).copied().and_then(from_hex_byte),
            ) {
                (Some(_), Some(_)) => n += 2,
                _ => return true,
            }
        }
        n += 1;
    }
    false
}

/// Decodes `%XX` escapes in a cookie value.
///
/// This is URI-component unescaping
/// ([RFC 3986 section 2.1](https://datatracker.ietf.org/doc/html/rfc3986#section-2.1)),
/// not `application/x-www-form-urlencoded`: `+` stays `+`.
///
/// Never fails.  Returns the decoded string and the first problem it noticed, if any:
/// - Malformed escapes like `%2` and `%ZZ` are copied through unchanged.
/// - Decoded bytes that are not UTF-8 become U+FFFD.
#[must_use]
pub fn percent_decode_value(raw: &str) -> (String, Option<DecodeIssue>) {
    let decoder = percent_decode_str(raw);
    let malformed = has_malformed_escape(raw);
    match decoder.clone().decode_utf8() {
        Ok(value) => (
            value.into_owned(),
            malformed.then_some(DecodeIssue::MalformedEscape),
        ),
        Err(_) => (
            decoder.decode_utf8_lossy().into_owned(),
            Some(if malformed {
                DecodeIssue::MalformedEscape
            } else {
                DecodeIssue::InvalidUtf8
            }),
        ),
    }
}

/// Like [`percent_decode_value`], but discards the issue.
///
/// ```
/// use request_cookies::internal::percent_decode;
/// assert_eq!(percent_decode("QUI%2BREU%2FRw%3D%3D"), "QUI+REU/Rw==");
/// assert_eq!(percent_decode("QUI+REU/Rw=="), "QUI+REU/Rw==");
/// assert_eq!(percent_decode("100%"), "100%");
/// ```
#[must_use]
pub fn percent_decode(raw: &str) -> String {
    percent_decode_value(raw).0
}
