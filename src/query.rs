//! Query-string assembly and the two escaping rules used by the formulas.
use itertools::Itertools;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode_byte, utf8_percent_encode};
use std::fmt::{self, Display};

/// Characters `encodeURI` leaves untouched besides ASCII alphanumerics.
const URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Percent-encodes a complete URL while keeping its structure intact.
pub fn encode_uri(url: &str) -> String {
    utf8_percent_encode(url, URI_SET).to_string()
}

/// Escapes double quotes and whitespace, leaving every other character as is.
pub fn escape_quotes_and_whitespace(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if c == '"' {
            escaped.push_str("%22");
        } else if c.is_whitespace() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                escaped.push_str(percent_encode_byte(byte));
            }
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// An ordered list of `key=value` pairs appended to an endpoint.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Adds the pair only when a value is present.
    pub fn push_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    /// Adds the pair only when the value is present and not empty.
    pub fn push_non_empty(&mut self, key: &'static str, value: Option<&str>) -> &mut Self {
        self.push_opt(key, value.filter(|v| !v.is_empty()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `endpoint` followed by the `&`-joined pairs.
    pub fn to_url(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint, self)
    }
}

impl Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.pairs
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .join("&")
        )
    }
}
