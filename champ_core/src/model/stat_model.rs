//! StatModel - Base stats and per-level growth for one champion

use crate::stats::StatKey;
use serde::{Deserialize, Serialize};

/// Base values and per-level growth rates, in the upstream data feed's shape
///
/// Field names match the feed. Growth fields the feed omits for some stats
/// (movement speed, attack range) default to zero. Attack speed growth is a
/// percentage per level, not a flat delta. Ability power has no base or
/// growth in champion data; it only enters a build through items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatModel {
    #[serde(default)]
    pub hp: f64,
    #[serde(rename = "hpperlevel", default)]
    pub hp_per_level: f64,
    #[serde(default)]
    pub mp: f64,
    #[serde(rename = "mpperlevel", default)]
    pub mp_per_level: f64,
    #[serde(default)]
    pub hpregen: f64,
    #[serde(rename = "hpregenperlevel", default)]
    pub hpregen_per_level: f64,
    #[serde(default)]
    pub mpregen: f64,
    #[serde(rename = "mpregenperlevel", default)]
    pub mpregen_per_level: f64,
    #[serde(default)]
    pub armor: f64,
    #[serde(rename = "armorperlevel", default)]
    pub armor_per_level: f64,
    #[serde(default)]
    pub spellblock: f64,
    #[serde(rename = "spellblockperlevel", default)]
    pub spellblock_per_level: f64,
    #[serde(default)]
    pub attackdamage: f64,
    #[serde(rename = "attackdamageperlevel", default)]
    pub attackdamage_per_level: f64,
    /// Attacks per second at level 1
    #[serde(default)]
    pub attackspeed: f64,
    /// Percent growth per level (e.g. 1.36 for +1.36%)
    #[serde(rename = "attackspeedperlevel", default)]
    pub attackspeed_per_level: f64,
    #[serde(default)]
    pub movespeed: f64,
    #[serde(rename = "movespeedperlevel", default)]
    pub movespeed_per_level: f64,
    #[serde(default)]
    pub attackrange: f64,
    #[serde(rename = "attackrangeperlevel", default)]
    pub attackrange_per_level: f64,
    #[serde(default)]
    pub crit: f64,
    #[serde(rename = "critperlevel", default)]
    pub crit_per_level: f64,
}

impl StatModel {
    /// Base value at level 1 for a stat key
    pub fn base(&self, key: StatKey) -> f64 {
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
            StatKey::Ap => 0.0,
        }
    }

    /// Per-level growth for a stat key
    pub fn growth(&self, key: StatKey) -> f64 {
        match key {
            StatKey::Hp => self.hp_per_level,
            StatKey::HpRegen => self.hpregen_per_level,
            StatKey::Mp => self.mp_per_level,
            StatKey::MpRegen => self.mpregen_per_level,
            StatKey::Armor => self.armor_per_level,
            StatKey::SpellBlock => self.spellblock_per_level,
            StatKey::AttackDamage => self.attackdamage_per_level,
            StatKey::AttackSpeed => self.attackspeed_per_level,
            StatKey::MoveSpeed => self.movespeed_per_level,
            StatKey::AttackRange => self.attackrange_per_level,
            StatKey::Crit => self.crit_per_level,
            StatKey::Ap => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_shape() {
        let json = r#"{
            "hp": 560,
            "hpperlevel": 96,
            "mp": 418,
            "mpperlevel": 25,
            "movespeed": 335,
            "armor": 23,
            "armorperlevel": 4,
            "spellblock": 30,
            "spellblockperlevel": 1.3,
            "attackrange": 625,
            "hpregen": 5.5,
            "hpregenperlevel": 0.55,
            "mpregen": 8,
            "mpregenperlevel": 0.8,
            "crit": 0,
            "critperlevel": 0,
            "attackdamage": 50,
            "attackdamageperlevel": 2.65,
            "attackspeed": 0.579,
            "attackspeedperlevel": 1.36
        }"#;

        let model: StatModel = serde_json::from_str(json).unwrap();
        assert!((model.hp - 560.0).abs() < f64::EPSILON);
        assert!((model.hp_per_level - 96.0).abs() < f64::EPSILON);
        assert!((model.attackspeed - 0.579).abs() < f64::EPSILON);
        // Growth fields the feed omits default to zero
        assert!((model.movespeed_per_level - 0.0).abs() < f64::EPSILON);
        assert!((model.attackrange_per_level - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_accessors_cover_every_key() {
        let model = StatModel {
            hp: 560.0,
            movespeed: 335.0,
            ..Default::default()
        };
        assert!((model.base(StatKey::Hp) - 560.0).abs() < f64::EPSILON);
        assert!((model.base(StatKey::MoveSpeed) - 335.0).abs() < f64::EPSILON);
        // Ability power never comes from champion data
        assert!((model.base(StatKey::Ap) - 0.0).abs() < f64::EPSILON);
        assert!((model.growth(StatKey::Ap) - 0.0).abs() < f64::EPSILON);
    }
}
