//! ChampionRecord - one champion's data as shipped by the feed

use crate::model::{Ability, StatModel};
use crate::types::AbilityKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A champion: identity, stat baselines and the ability list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Resource name shown beside costs ("Mana", "Energy", ...)
    #[serde(default)]
    pub partype: Option<String>,
    pub stats: StatModel,
    #[serde(default)]
    pub abilities: Vec<Ability>,
}

impl ChampionRecord {
    /// Build the slot lookup for this record
    pub fn index(&self) -> AbilityIndex {
        AbilityIndex::build(self)
    }
}

/// Slot-to-ability lookup, built once per champion record
///
/// The abilities list is flat in the feed; this avoids re-scanning it on
/// every render. The first ability seen for a slot wins.
#[derive(Debug, Clone, Default)]
pub struct AbilityIndex {
    slots: HashMap<AbilityKey, usize>,
}

impl AbilityIndex {
    pub fn build(champion: &ChampionRecord) -> Self {
        let mut slots = HashMap::new();
        for (position, ability) in champion.abilities.iter().enumerate() {
            slots.entry(ability.key).or_insert(position);
        }
        AbilityIndex { slots }
    }

    /// Look up the ability in a slot
    pub fn get<'a>(&self, champion: &'a ChampionRecord, key: AbilityKey) -> Option<&'a Ability> {
        self.slots
            .get(&key)
            .and_then(|&position| champion.abilities.get(position))
    }

    /// Look up the champion-wide passive
    pub fn passive<'a>(&self, champion: &'a ChampionRecord) -> Option<&'a Ability> {
        self.get(champion, AbilityKey::P)
    }
}
