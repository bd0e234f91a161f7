//! Input sanitizing and argument resolution.
//!
//! Everything here runs at the API boundary. The engine itself only ever sees
//! a single sanitized `&str` and a [`ParserConfig`].

use crate::config::ParserConfig;
use crate::extension::Extension;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Default maximum length, in characters, of a classified user-agent string.
pub const UA_MAX_LENGTH: usize = 500;

/// Header consulted by [`user_agent_from_headers`].
pub const USER_AGENT_HEADER: &str = "user-agent";

/// Clamp `ua` to its first `max_len` characters. Absent input becomes `""`.
///
/// A `max_len` of 0 applies [`UA_MAX_LENGTH`].
pub fn sanitize(ua: Option<&str>, max_len: usize) -> String {
    let ua = ua.unwrap_or_default();
    let max_len = if max_len == 0 { UA_MAX_LENGTH } else { max_len };

    match ua.char_indices().nth(max_len) {
        Some((cut, _)) => {
            tracing::debug!(
                "Truncating user-agent of {} bytes to {} characters",
                ua.len(),
                max_len
            );
            ua[..cut].to_string()
        }
        None => ua.to_string(),
    }
}

/// Anything that can answer a header lookup.
///
/// Map-like implementations compare header names ASCII case-insensitively.
/// When several keys differ only in case, the exact spelling asked for wins,
/// then the lowest key in byte order. Closures are accepted through [`HeaderFn`] and receive the lower-case name.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<String>;
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<String> {
        (**self).header(name)
    }
}

impl<K, V, S> HeaderSource for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn header(&self, name: &str) -> Option<String> {
        find_header(self.iter(), name)
    }
}

impl<K, V> HeaderSource for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<String> {
        find_header(self.iter(), name)
    }
}

impl<K, V> HeaderSource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<String> {
        find_header(self.iter().map(|(k, v)| (k, v)), name)
    }
}

impl<K, V> HeaderSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn header(&self, name: &str) -> Option<String> {
        self.as_slice().header(name)
    }
}

/// Case-insensitive lookup that does not depend on iteration order.
///
/// A key spelled exactly like `name` wins; otherwise the lowest
/// case-insensitive match by byte order wins (the first one on ties).
fn find_header<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>, name: &str) -> Option<String>
where
    K: AsRef<str> + 'a,
    V: AsRef<str> + 'a,
{
    let mut best: Option<(&str, &str)> = None;
    for (key, value) in entries {
        let key = key.as_ref();
        if key == name {
            return Some(value.as_ref().to_string());
        }
        if key.eq_ignore_ascii_case(name) && best.map_or(true, |(seen, _)| key < seen) {
            best = Some((key, value.as_ref()));
        }
    }
    best.map(|(_, value)| value.to_string())
}

/// Adapts a single-argument getter into a [`HeaderSource`].
///
/// ```rust
/// use ua_engine::{HeaderFn, HeaderSource};
///
/// let headers = HeaderFn(|name: &str| (name == "user-agent").then(|| "Midori/0.2.2".to_string()));
/// assert_eq!(headers.header("user-agent").as_deref(), Some("Midori/0.2.2"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HeaderFn<F>(pub F);

impl<F> HeaderSource for HeaderFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn header(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

/// The `User-Agent` value of a header container, if present.
pub fn user_agent_from_headers<H: HeaderSource + ?Sized>(headers: &H) -> Option<String> {
    headers.header(USER_AGENT_HEADER)
}

/// One argument of the flexible construction form.
///
/// Arguments may come in any order. The first present user-agent string wins;
/// header values are only used when no string was given. Extensions
/// concatenate in argument order.
#[derive(Debug, Clone)]
pub enum ParseArg {
    Ua(Option<String>),
    Extensions(Vec<Extension>),
    /// The `User-Agent` value already pulled out of a header container.
    Headers(Option<String>),
}

impl ParseArg {
    pub fn headers<H: HeaderSource + ?Sized>(headers: &H) -> Self {
        ParseArg::Headers(user_agent_from_headers(headers))
    }
}

impl From<&str> for ParseArg {
    fn from(ua: &str) -> Self {
        ParseArg::Ua(Some(ua.to_string()))
    }
}

impl From<String> for ParseArg {
    fn from(ua: String) -> Self {
        ParseArg::Ua(Some(ua))
    }
}

impl From<Option<&str>> for ParseArg {
    fn from(ua: Option<&str>) -> Self {
        ParseArg::Ua(ua.map(str::to_string))
    }
}

impl From<Extension> for ParseArg {
    fn from(extension: Extension) -> Self {
        ParseArg::Extensions(vec![extension])
    }
}

impl From<Vec<Extension>> for ParseArg {
    fn from(extensions: Vec<Extension>) -> Self {
        ParseArg::Extensions(extensions)
    }
}

/// Resolve boundary arguments into the raw (unsanitized) input and a config.
pub fn resolve(args: impl IntoIterator<Item = ParseArg>) -> (Option<String>, ParserConfig) {
    let mut ua = None;
    let mut header_ua = None;
    let mut config = ParserConfig::default();

    for arg in args {
        match arg {
            ParseArg::Ua(value) => {
                if ua.is_none() {
                    ua = value;
                }
            }
            ParseArg::Headers(value) => {
                if header_ua.is_none() {
                    header_ua = value;
                }
            }
            ParseArg::Extensions(extensions) => {
                config = config.with_extensions(extensions);
            }
        }
    }

    (ua.or(header_ua), config)
}
