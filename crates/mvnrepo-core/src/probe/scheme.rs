//! URL scheme classification.

use std::fmt;

/// Scheme of a resource location, as used to pick the access path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    File,
    /// No scheme: a bare filesystem path.
    Local,
    /// Any other scheme token (lowercase).
    Other(String),
}

impl Scheme {
    /// The raw scheme token; empty for `Local`.
    pub fn as_str(&self) -> &str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
            Scheme::File => "file",
            Scheme::Local => "",
            Scheme::Other(s) => s,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Scheme::Http | Scheme::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify `url` by its scheme.
///
/// Anything that does not parse as an absolute URL (e.g. `/srv/repo/a.jar`
/// or `repo/a.jar`) is `Local`.
pub fn classify_scheme(url: &str) -> Scheme {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return Scheme::Local,
    };
    match parsed.scheme() {
        "http" => Scheme::Http,
        "https" => Scheme::Https,
        "file" => Scheme::File,
        other => Scheme::Other(other.to_string()),
    }
}

/// Drop a leading `file://` (or bare `file:`) so the rest can be used as a path.
///
/// The remainder is used verbatim: no percent-decoding, so `file:///tmp/a%20b.jar`
/// names a file literally called `a%20b.jar`.
pub(crate) fn strip_file_scheme(url: &str) -> &str {
    if let Some(prefix) = url.get(..7) {
        if prefix.eq_ignore_ascii_case("file://") {
            return &url[7..];
        }
    }
    match url.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("file:") => &url[5..],
        _ => url,
    }
}
