//! API Path Resolver
//!
//! Joins request paths onto the configured API base.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a single path segment (RFC 3986 unreserved are kept)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Collapse runs of `/` in the path part, leaving any query/fragment alone
fn collapse_slashes(path: &str) -> String {
    let split = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let (head, tail) = path.split_at(split);
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in head.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out.push_str(tail);
    out
}

/// Normalize a configured base: no trailing slash, relative bases rooted at `/`
fn normalize_base(base: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        return String::new();
    }
    let normalized = match base.find("://") {
        Some(idx) if is_absolute(base) => {
            let (scheme, rest) = base.split_at(idx + 3);
            format!("{}{}", scheme, collapse_slashes(rest))
        }
        _ => format!("/{}", collapse_slashes(base.trim_start_matches('/'))),
    };
    normalized.trim_end_matches('/').to_string()
}

/// Resolve `path` against `base`.
///
/// Absolute `http(s)://` inputs come back unchanged, and resolving an
/// already-resolved path is a no-op.
pub fn resolve(base: &str, path: &str) -> String {
    let path = path.trim();
    if is_absolute(path) {
        return path.to_string();
    }

    let base = normalize_base(base);
    let rooted = format!("/{}", collapse_slashes(path).trim_start_matches('/'));
    if base.is_empty() {
        return rooted;
    }
    if !is_absolute(&base) && (rooted == base || rooted.starts_with(&format!("{}/", base))) {
        return rooted;
    }
    format!("{}{}", base, rooted)
}

/// Percent-encode one path segment (e.g. an item id)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Endpoint builder bound to one API base
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiPaths {
    base: String,
}

impl ApiPaths {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn resolve(&self, path: &str) -> String {
        resolve(&self.base, path)
    }

    pub fn items(&self) -> String {
        self.resolve("/api/items")
    }

    pub fn item(&self, id: &str) -> String {
        self.resolve(&format!("/api/items/{}", encode_segment(id)))
    }

    pub fn item_status(&self, id: &str) -> String {
        self.resolve(&format!("/api/items/{}/status", encode_segment(id)))
    }

    pub fn signup(&self) -> String {
        self.resolve("/api/users/signup")
    }

    pub fn login(&self) -> String {
        self.resolve("/api/users/login")
    }

    pub fn rotate_key(&self, user_id: &str) -> String {
        self.resolve(&format!("/api/users/{}/rotate-key", encode_segment(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_is_root_relative() {
        assert_eq!(resolve("", "api/items"), "/api/items");
        assert_eq!(resolve("  ", "//api//items"), "/api/items");
        assert_eq!(resolve("", ""), "/");
    }

    #[test]
    fn test_absolute_base() {
        assert_eq!(
            resolve("https://api.example.com/", "/api/items"),
            "https://api.example.com/api/items"
        );
        assert_eq!(
            resolve("https://api.example.com//v1//", "api/items"),
            "https://api.example.com/v1/api/items"
        );
    }

    #[test]
    fn test_absolute_path_passes_through() {
        let url = "https://cdn.example.com//img/a.png";
        assert_eq!(resolve("https://api.example.com", url), url);
        assert_eq!(resolve("", "HTTP://x.y/z"), "HTTP://x.y/z");
    }

    #[test]
    fn test_idempotent() {
        for base in ["", "https://api.example.com/v1", "/backend", "backend/"] {
            let once = resolve(base, "/api/items/7/status");
            assert_eq!(resolve(base, &once), once, "base {:?}", base);
        }
        assert_eq!(resolve("/backend", "/api/items"), "/backend/api/items");
    }

    #[test]
    fn test_query_is_untouched() {
        assert_eq!(
            resolve("", "/api//items?next=http://x//y"),
            "/api/items?next=http://x//y"
        );
    }

    #[test]
    fn test_endpoints_encode_ids() {
        let paths = ApiPaths::new("https://api.example.com");
        assert_eq!(paths.item("a b/c"), "https://api.example.com/api/items/a%20b%2Fc");
        assert_eq!(
            paths.item_status("65f0c2"),
            "https://api.example.com/api/items/65f0c2/status"
        );
        assert_eq!(
            ApiPaths::default().rotate_key("u-1"),
            "/api/users/u-1/rotate-key"
        );
    }
}
