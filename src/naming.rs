//! Output filename patterns and content fingerprints.
//!
//! Build plans carry output names as *patterns* with bracketed tokens,
//! expanded per emitted file:
//!
//! - `[name]` — the file's base name
//! - `[ext]` — the file's extension (no leading dot)
//! - `[hash]` / `[contenthash]` — a content fingerprint
//!
//! Development plans use fixed names (`js/[name].js`); production plans use
//! fingerprinted names (`js/[name].[hash].js`, `[contenthash].[ext]`) so
//! unchanged files keep their URL and changed files bust caches.
//!
//! Fingerprints are SHA-256 digests truncated to 20 hex characters.
//! Content-based rather than mtime-based, so they survive checkouts that
//! reset modification times.

use sha2::{Digest, Sha256};
use std::path::Path;

/// Hex length of a fingerprint. 80 bits is plenty for cache busting.
const DIGEST_LEN: usize = 20;

/// Variables available to [`expand_pattern`].
#[derive(Debug, Clone, Default)]
pub struct PatternVars<'a> {
    pub name: &'a str,
    pub ext: &'a str,
    pub hash: &'a str,
}

/// Expand the bracketed tokens of an output filename pattern.
///
/// Unknown tokens are left untouched. `[contenthash]` and `[hash]` expand
/// to the same fingerprint: the plan draws no distinction between build
/// hash and content hash, both are per-file content digests here.
pub fn expand_pattern(pattern: &str, vars: &PatternVars) -> String {
    pattern
        .replace("[name]", vars.name)
        .replace("[ext]", vars.ext)
        .replace("[contenthash]", vars.hash)
        .replace("[hash]", vars.hash)
}

/// SHA-256 content fingerprint, truncated to 20 hex characters.
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hex = format!("{:x}", Sha256::digest(bytes));
    hex.truncate(DIGEST_LEN);
    hex
}

/// Fingerprint a file's contents.
pub fn file_digest(path: &Path) -> std::io::Result<String> {
    Ok(content_digest(&std::fs::read(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_name_and_ext() {
        let vars = PatternVars {
            name: "index",
            ext: "js",
            hash: "",
        };
        assert_eq!(expand_pattern("js/[name].[ext]", &vars), "js/index.js");
    }

    #[test]
    fn expand_hash_tokens() {
        let vars = PatternVars {
            name: "index",
            ext: "css",
            hash: "abc123",
        };
        assert_eq!(expand_pattern("[hash].css", &vars), "abc123.css");
        assert_eq!(expand_pattern("[contenthash].[ext]", &vars), "abc123.css");
    }

    #[test]
    fn unknown_tokens_left_alone() {
        let vars = PatternVars::default();
        assert_eq!(
            expand_pattern("js/[chunkhash].js", &vars),
            "js/[chunkhash].js"
        );
    }

    #[test]
    fn digest_is_stable_and_short() {
        let a = content_digest(b"body { color: red }");
        let b = content_digest(b"body { color: red }");
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn digest_changes_with_content() {
        assert_ne!(content_digest(b"v1"), content_digest(b"v2"));
    }

    #[test]
    fn file_digest_matches_content_digest() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        std::fs::write(&path, b"not really a png").unwrap();
        assert_eq!(
            file_digest(&path).unwrap(),
            content_digest(b"not really a png")
        );
    }
}
