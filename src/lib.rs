//! request-cookies
//! ===============
//! Parses the `Cookie` headers of HTTP requests.
//!
//! # Features
//! - `forbid(unsafe_code)`
//! - Never fails.  Drops malformed pairs and keeps the rest.
//! - Accepts `;` and `,` between pairs.
//! - Percent-decodes values and leaves `+` alone,
//!   so base64 values come through intact whether or not the client escaped them.
//! - Keeps names exactly as sent
//! - Keeps duplicate cookies, in order
//! - Case-insensitive name lookups by default, configurable
//! - Linear time, no allocation per discarded fragment
//! - Structured debug logging of discarded fragments
//! - `json` feature: serialize the parsed cookies
//!
//! # Limitations
//! - Does not un-quote `"quoted"` values.
//! - Does not check names and values against the RFC 6265 grammar.
//! - Does not make `Set-Cookie` headers.
//!
//! # Example
//! ```rust
//! use request_cookies::{RequestCookieCollection, RequestCookiesSettings, RequestOptions};
//!
//! // The values of every `Cookie` header in the request, in order.
//! let lines = ["session=abc; theme=dark", "token=QUI%2BREU%2FRw%3D%3D"];
//! let cookies = RequestCookieCollection::parse(lines, true);
//! assert_eq!(cookies.len(), 3);
//! assert_eq!(cookies.get("SESSION"), Some("abc"));
//! assert_eq!(cookies.get("token"), Some("QUI+REU/Rw=="));
//!
//! let options = RequestOptions::new();
//! let cookies = options.cookies_settings().parse(lines);
//! assert_eq!(cookies.get("Theme"), Some("dark"));
//!
//! let strict = RequestCookiesSettings::new().with_name_case_insensitive(false);
//! let cookies = strict.parse(["a=1", "A=2"]);
//! assert_eq!(cookies.get("A"), Some("2"));
//! ```
//!
//! # Logging
//! The parser sends `debug` events for every fragment it drops.
//! They are off by default.  Turn them on with
//! [`log::set_max_level(Level::Debug)`](log::set_max_level).
//! Install your own [`log::Logger`] with [`log::set_global_logger`].
#![forbid(unsafe_code)]
mod cookie;
mod cookie_collection;
pub mod log;
mod percent;
mod settings;
mod time;
mod util;

pub use crate::cookie::CookieEntry;
pub use crate::cookie_collection::RequestCookieCollection;
pub use crate::settings::{NameComparison, RequestCookiesSettings, RequestOptions};

/// This part of the library is not covered by the semver guarantees.
/// If you use these in your program, a minor version upgrade could break your build.
pub mod internal {
    pub use crate::cookie_collection::*;
    pub use crate::percent::*;
    pub use crate::time::*;
    pub use crate::util::*;
}
