//! ResolvedStats - the fully computed stat snapshot for one build state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical key of one stat in the snapshot
///
/// The string forms are the snapshot keys the upstream data uses after
/// normalization ("hp", "spellblock", "ap", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    Hp,
    HpRegen,
    Mp,
    MpRegen,
    Armor,
    SpellBlock,
    AttackDamage,
    AttackSpeed,
    MoveSpeed,
    AttackRange,
    Crit,
    Ap,
}

impl StatKey {
    /// Get all stat keys in snapshot order
    pub fn all() -> &'static [StatKey] {
        &[
            StatKey::Hp,
            StatKey::HpRegen,
            StatKey::Mp,
            StatKey::MpRegen,
            StatKey::Armor,
            StatKey::SpellBlock,
            StatKey::AttackDamage,
            StatKey::AttackSpeed,
            StatKey::MoveSpeed,
            StatKey::AttackRange,
            StatKey::Crit,
            StatKey::Ap,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKey::Hp => "hp",
            StatKey::HpRegen => "hpregen",
            StatKey::Mp => "mp",
            StatKey::MpRegen => "mpregen",
            StatKey::Armor => "armor",
            StatKey::SpellBlock => "spellblock",
            StatKey::AttackDamage => "attackdamage",
            StatKey::AttackSpeed => "attackspeed",
            StatKey::MoveSpeed => "movespeed",
            StatKey::AttackRange => "attackrange",
            StatKey::Crit => "crit",
            StatKey::Ap => "ap",
        }
    }

    /// Match an already-normalized item stat key against the snapshot keys
    pub fn from_normalized(key: &str) -> Option<StatKey> {
        StatKey::all().iter().copied().find(|k| k.as_str() == key)
    }

    /// Human-readable label for table output
    pub fn label(&self) -> &'static str {
        match self {
            StatKey::Hp => "Health",
            StatKey::HpRegen => "Health Regen",
            StatKey::Mp => "Resource",
            StatKey::MpRegen => "Resource Regen",
            StatKey::Armor => "Armor",
            StatKey::SpellBlock => "Magic Resist",
            StatKey::AttackDamage => "Attack Damage",
            StatKey::AttackSpeed => "Attack Speed",
            StatKey::MoveSpeed => "Move Speed",
            StatKey::AttackRange => "Attack Range",
            StatKey::Crit => "Critical Strike",
            StatKey::Ap => "Ability Power",
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The computed stat snapshot - one concrete number per stat key
///
/// Every field is always present; a stat a champion "doesn't have" is
/// simply zero. `bonus_ad` is derived once during resolution and never
/// synthesized downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedStats {
    pub hp: f64,
    pub hpregen: f64,
    pub mp: f64,
    pub mpregen: f64,
    pub armor: f64,
    pub spellblock: f64,
    pub attackdamage: f64,
    pub attackspeed: f64,
    pub movespeed: f64,
    pub attackrange: f64,
    pub crit: f64,
    pub ap: f64,
    /// Attack damage above the nominal baseline, clamped to zero
    pub bonus_ad: f64,
}

impl ResolvedStats {
    /// Read the value for a stat key
    pub fn get(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Hp => self.hp,
            StatKey::HpRegen => self.hpregen,
            StatKey::Mp => self.mp,
            StatKey::MpRegen => self.mpregen,
            StatKey::Armor => self.armor,
            StatKey::SpellBlock => self.spellblock,
            StatKey::AttackDamage => self.attackdamage,
            StatKey::AttackSpeed => self.attackspeed,
            StatKey::MoveSpeed => self.movespeed,
            StatKey::AttackRange => self.attackrange,
            StatKey::Crit => self.crit,
            StatKey::Ap => self.ap,
        }
    }

    /// Add a delta to the value for a stat key
    pub fn add(&mut self, key: StatKey, delta: f64) {
        match key {
            StatKey::Hp => self.hp += delta,
            StatKey::HpRegen => self.hpregen += delta,
            StatKey::Mp => self.mp += delta,
            StatKey::MpRegen => self.mpregen += delta,
            StatKey::Armor => self.armor += delta,
            StatKey::SpellBlock => self.spellblock += delta,
            StatKey::AttackDamage => self.attackdamage += delta,
            StatKey::AttackSpeed => self.attackspeed += delta,
            StatKey::MoveSpeed => self.movespeed += delta,
            StatKey::AttackRange => self.attackrange += delta,
            StatKey::Crit => self.crit += delta,
            StatKey::Ap => self.ap += delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_normalized_matches_canonical_names() {
        assert_eq!(StatKey::from_normalized("hp"), Some(StatKey::Hp));
        assert_eq!(StatKey::from_normalized("spellblock"), Some(StatKey::SpellBlock));
        assert_eq!(StatKey::from_normalized("ap"), Some(StatKey::Ap));
        assert_eq!(StatKey::from_normalized("magicdamage"), None);
        assert_eq!(StatKey::from_normalized("HP"), None);
    }

    #[test]
    fn test_get_and_add_cover_every_key() {
        let mut stats = ResolvedStats::default();
        for &key in StatKey::all() {
            stats.add(key, 7.0);
            assert!((stats.get(key) - 7.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_snapshot_is_copy_and_comparable() {
        let a = ResolvedStats {
            hp: 560.0,
            ap: 100.0,
            ..Default::default()
        };
        let b = a;
        assert_eq!(a, b);
    }
}
