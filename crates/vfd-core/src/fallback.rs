//! Fallback candidate-key generators.
//!
//! When an inventory key has no direct entry in a price table, known
//! cross-family price equivalences supply alternative lookup keys. Each
//! generator returns its candidates in precedence order; the resolver takes
//! the first one the index knows. No capacity token means no fallback is
//! possible and the price stays absent.

use vfd_model::{KEY_PREFIX, ModelKey};

/// Alternate family letters tried for list-price substitution, in fixed
/// order, skipping the item's own family.
pub const ALTERNATE_FAMILIES: [char; 4] = ['D', 'E', 'F', 'A'];

/// Generation marker class embedded in an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerClass {
    /// 200 V class: `720` source or `820` family markers.
    Gen720,
    /// 400 V class: `740` source or `840` family markers.
    Gen740,
}

fn marker_class(key: &ModelKey) -> Option<MarkerClass> {
    let text = key.as_str();
    if text.contains("720") || text.contains("820") {
        Some(MarkerClass::Gen720)
    } else if text.contains("740") || text.contains("840") {
        Some(MarkerClass::Gen740)
    } else {
        None
    }
}

fn root_key(root: &str, capacity: &str) -> ModelKey {
    ModelKey::from_canonical(format!("{KEY_PREFIX}{root}-{capacity}K"))
}

/// Candidates for the secondary (1.27) price: the voltage-matched `E`-family
/// root at the same capacity.
pub fn secondary_candidates(key: &ModelKey) -> Vec<ModelKey> {
    let Some(cap) = key.capacity_token() else {
        return Vec::new();
    };
    match marker_class(key) {
        Some(MarkerClass::Gen720) => vec![root_key("E820", &cap.raw)],
        Some(MarkerClass::Gen740) => vec![root_key("E840", &cap.raw)],
        None => Vec::new(),
    }
}

/// Candidates for the list price, in precedence order: the voltage-matched
/// `A` then `E` roots at the same capacity, then the original key with its
/// family letter substituted through the fixed alternate set.
pub fn list_candidates(key: &ModelKey) -> Vec<ModelKey> {
    let Some(cap) = key.capacity_token() else {
        return Vec::new();
    };
    let mut candidates = Vec::new();
    match marker_class(key) {
        Some(MarkerClass::Gen720) => {
            candidates.push(root_key("A820", &cap.raw));
            candidates.push(root_key("E820", &cap.raw));
        }
        Some(MarkerClass::Gen740) => {
            candidates.push(root_key("A840", &cap.raw));
            candidates.push(root_key("E840", &cap.raw));
        }
        None => {}
    }
    candidates.extend(family_substitutions(key));
    candidates
}

/// Rewrites the single family letter after the `FR-` prefix through the
/// alternate set, keeping the rest of the key (capacity included) fixed.
fn family_substitutions(key: &ModelKey) -> Vec<ModelKey> {
    let text = key.as_str();
    let Some(rest) = text.strip_prefix(KEY_PREFIX) else {
        return Vec::new();
    };
    let Some(current) = rest.chars().next().filter(char::is_ascii_uppercase) else {
        return Vec::new();
    };
    ALTERNATE_FAMILIES
        .iter()
        .filter(|family| **family != current)
        .map(|family| {
            let mut substituted = String::with_capacity(text.len());
            substituted.push_str(KEY_PREFIX);
            substituted.push(*family);
            substituted.push_str(&rest[current.len_utf8()..]);
            ModelKey::from_canonical(substituted)
        })
        .collect()
}
