//! Immutable per-source price indexes.

use std::collections::BTreeMap;

use vfd_model::{ModelKey, PricePair};

/// Key → price map for one source table.
///
/// Built once before any resolution starts; resolution only reads it. When a
/// source table carries the same key more than once, the last occurrence
/// wins (deterministic overwrite, no merge).
#[derive(Debug, Clone, Default)]
pub struct PriceIndex(BTreeMap<ModelKey, f64>);

impl PriceIndex {
    pub fn build(pairs: &[PricePair]) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in pairs {
            map.insert(key.clone(), *value);
        }
        Self(map)
    }

    pub fn get(&self, key: &ModelKey) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
