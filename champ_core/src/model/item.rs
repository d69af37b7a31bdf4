//! Item records - equipment stat deltas plus shop metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stat-key to signed-delta mapping carried by one item
///
/// Keys arrive in whatever shape the data source uses ("ap", "hpflat",
/// "FlatMagicDamageMod"); the stat calculator normalizes them before
/// matching, so this type stores them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemModifier {
    deltas: BTreeMap<String, f64>,
}

impl ItemModifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delta for a source stat key
    pub fn set(&mut self, key: impl Into<String>, delta: f64) -> &mut Self {
        self.deltas.insert(key.into(), delta);
        self
    }

    /// Iterate over (source key, delta) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.deltas.iter().map(|(key, delta)| (key.as_str(), *delta))
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ItemModifier {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        ItemModifier {
            deltas: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Shop gold data attached to an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemGold {
    #[serde(default)]
    pub base: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub sell: u32,
}

/// One purchasable item: identity, stat deltas, shop metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stats: ItemModifier,
    #[serde(default)]
    pub gold: Option<ItemGold>,
    /// Ids of the items this one is built from
    #[serde(rename = "from", default)]
    pub builds_from: Vec<String>,
    /// Ids of the items this one builds into
    #[serde(rename = "into", default)]
    pub builds_into: Vec<String>,
}
