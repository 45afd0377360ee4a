//! Canonical model-key normalization and identifier parsing.
//!
//! The three source tables share no primary key; the only join predicate is
//! equality of normalized keys. Normalization is total: any input yields a
//! key, and an unusable input yields the empty key, which matches nothing.

use std::fmt;

/// Fixed prefix carried by real drive identifiers, e.g. `FR-D720S-0.4K`.
pub const KEY_PREFIX: &str = "FR-";

/// Separator found in compound cells (`old-id / replacement-id`); only the
/// segment after the last occurrence is the live identifier.
pub const COMPOUND_SEPARATOR: char = '/';

/// Marker substring of the hazard/enclosure product line.
pub const HAZARD_MARKER: &str = "HEL";

/// Non-semantic revision suffix stripped during normalization.
const REVISION_SUFFIX: &str = "-1";

/// Canonical, whitespace-free, uppercase, suffix-stripped identifier used as
/// the sole cross-source join key.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ModelKey(String);

impl ModelKey {
    /// Normalizes a raw identifier cell into a canonical key.
    ///
    /// Applied in order: keep the segment after the last compound separator,
    /// uppercase, remove all whitespace, strip trailing revision suffixes.
    /// Idempotent: normalizing a key again yields the same key.
    pub fn normalize(raw: &str) -> Self {
        let segment = match raw.rfind(COMPOUND_SEPARATOR) {
            Some(pos) => &raw[pos + COMPOUND_SEPARATOR.len_utf8()..],
            None => raw,
        };
        let mut key: String = segment
            .to_uppercase()
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect();
        while key.ends_with(REVISION_SUFFIX) {
            key.truncate(key.len() - REVISION_SUFFIX.len());
        }
        Self(key)
    }

    /// Wraps an already-canonical string. Used when reconstructing fallback
    /// candidate keys from canonical parts.
    pub fn from_canonical(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extracts the capacity token: the first `-[H]?<number>K` run in the
    /// key, e.g. `0.4` in `FR-D720S-0.4K`.
    pub fn capacity_token(&self) -> Option<CapacityToken> {
        let bytes = self.0.as_bytes();
        for (pos, &byte) in bytes.iter().enumerate() {
            if byte != b'-' {
                continue;
            }
            let mut idx = pos + 1;
            if bytes.get(idx) == Some(&b'H') {
                idx += 1;
            }
            let start = idx;
            while idx < bytes.len() && (bytes[idx].is_ascii_digit() || bytes[idx] == b'.') {
                idx += 1;
            }
            if idx == start || bytes.get(idx) != Some(&b'K') {
                continue;
            }
            let raw = &self.0[start..idx];
            if let Ok(value) = raw.parse::<f64>() {
                return Some(CapacityToken {
                    raw: raw.to_string(),
                    value,
                });
            }
        }
        None
    }

    /// Derives the single-letter product-family tag.
    ///
    /// Hazard-line keys (containing `HEL`) map to `H`; otherwise the letter
    /// immediately following the `FR-` prefix; otherwise none.
    pub fn family_tag(&self) -> Option<char> {
        if self.0.contains(HAZARD_MARKER) {
            return Some('H');
        }
        self.0
            .strip_prefix(KEY_PREFIX)
            .and_then(|rest| rest.chars().next())
            .filter(char::is_ascii_uppercase)
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A capacity rating embedded in an identifier, e.g. `0.4` (kW-class).
///
/// `raw` preserves the exact token text so fallback candidate keys can be
/// reconstructed byte-for-byte; `value` is the numeric rating used for sort
/// ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityToken {
    pub raw: String,
    pub value: f64,
}
