//! BuildSession - the owning facade over one build in progress

use crate::build::{ActionError, SkillAllocationState};
use crate::model::{AbilityIndex, ChampionRecord, ItemRecord};
use crate::stats::{self, ResolvedStats};
use crate::tooltip::{render, RenderedTooltip};
use crate::types::AbilityKey;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How many items a build can hold
pub const MAX_ITEMS: usize = 6;

/// Cooldown, cost and range of an ability at its current rank
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankDetail {
    pub cooldown: f64,
    pub cost: f64,
    pub range: f64,
}

/// One build in progress: champion, level, ranks, items and the snapshot
///
/// The stat snapshot is recomputed after every mutating call, so reads are
/// always current. A session belongs to exactly one caller; it holds no
/// shared state.
#[derive(Debug, Clone)]
pub struct BuildSession {
    champion: ChampionRecord,
    index: AbilityIndex,
    allocation: SkillAllocationState,
    items: Vec<ItemRecord>,
    stats: ResolvedStats,
}

impl BuildSession {
    /// Start a fresh build: level 1, no points, no items
    pub fn new(champion: ChampionRecord) -> Self {
        let index = champion.index();
        let allocation = SkillAllocationState::new();
        let stats = stats::resolve(&champion.stats, allocation.level(), &[]);
        BuildSession {
            champion,
            index,
            allocation,
            items: Vec::new(),
            stats,
        }
    }

    pub fn champion(&self) -> &ChampionRecord {
        &self.champion
    }

    pub fn level(&self) -> u8 {
        self.allocation.level()
    }

    pub fn rank(&self, key: AbilityKey) -> u8 {
        self.allocation.rank(key)
    }

    pub fn available_points(&self) -> u8 {
        self.allocation.available_points()
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// The current stat snapshot
    pub fn stats(&self) -> &ResolvedStats {
        &self.stats
    }

    pub fn level_up(&mut self) -> u8 {
        let level = self.allocation.level_up();
        self.recompute();
        level
    }

    pub fn level_down(&mut self) -> Result<u8, ActionError> {
        let level = self.allocation.level_down()?;
        self.recompute();
        Ok(level)
    }

    pub fn can_rank_up(&self, key: AbilityKey) -> bool {
        self.allocation.can_rank_up(key)
    }

    pub fn check_rank_up(&self, key: AbilityKey) -> Result<(), ActionError> {
        self.allocation.check_rank_up(key)
    }

    pub fn rank_up(&mut self, key: AbilityKey) -> Result<u8, ActionError> {
        let rank = self.allocation.rank_up(key)?;
        self.recompute();
        Ok(rank)
    }

    pub fn reset_ranks(&mut self) {
        self.allocation.reset_ranks();
        self.recompute();
    }

    /// Equip an item; a build holds at most six
    pub fn equip(&mut self, item: ItemRecord) -> Result<(), ActionError> {
        if self.items.len() >= MAX_ITEMS {
            return Err(ActionError::BuildFull);
        }
        self.items.push(item);
        self.recompute();
        Ok(())
    }

    /// Remove the item at a slot index, returning it
    pub fn unequip(&mut self, slot: usize) -> Option<ItemRecord> {
        if slot >= self.items.len() {
            return None;
        }
        let item = self.items.remove(slot);
        self.recompute();
        Some(item)
    }

    /// Render an ability's tooltip at its current rank
    ///
    /// The passive renders at rank 0; the resolver evaluates it with its
    /// first-rank numbers.
    pub fn tooltip(&self, key: AbilityKey) -> Option<RenderedTooltip> {
        let ability = self.index.get(&self.champion, key)?;
        Some(render(
            &ability.tooltip_template,
            &ability.damage_components,
            &ability.vars,
            self.rank(key),
            &self.stats,
        ))
    }

    /// Cooldown/cost/range at the current rank; None while unranked
    ///
    /// Ranks past an array's end clamp to its last entry.
    pub fn rank_detail(&self, key: AbilityKey) -> Option<RankDetail> {
        let ability = self.index.get(&self.champion, key)?;
        let rank = self.rank(key);
        if rank == 0 {
            return None;
        }
        let idx = (rank - 1) as usize;
        Some(RankDetail {
            cooldown: clamped_entry(&ability.cooldowns, idx),
            cost: clamped_entry(&ability.costs, idx),
            range: clamped_entry(&ability.ranges, idx),
        })
    }

    fn recompute(&mut self) {
        let modifiers: Vec<_> = self.items.iter().map(|item| &item.stats).collect();
        self.stats = stats::resolve(&self.champion.stats, self.allocation.level(), &modifiers);
        debug!(
            champion = %self.champion.id,
            level = self.allocation.level(),
            items = self.items.len(),
            "recomputed stat snapshot"
        );
    }
}

/// Array entry at idx, clamped to the last element; 0 for an empty array
fn clamped_entry(values: &[f64], idx: usize) -> f64 {
    match values.last() {
        Some(&last) => values.get(idx).copied().unwrap_or(last),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ability, ItemModifier, StatModel};

    fn test_champion() -> ChampionRecord {
        ChampionRecord {
            id: "Annie".to_string(),
            name: "Annie".to_string(),
            title: "the Dark Child".to_string(),
            tags: vec!["Mage".to_string()],
            partype: Some("Mana".to_string()),
            stats: StatModel {
                hp: 560.0,
                hp_per_level: 96.0,
                mp: 418.0,
                mp_per_level: 25.0,
                armor: 23.0,
                armor_per_level: 4.0,
                attackdamage: 50.0,
                attackdamage_per_level: 2.65,
                attackspeed: 0.579,
                attackspeed_per_level: 1.36,
                movespeed: 335.0,
                attackrange: 625.0,
                ..Default::default()
            },
            abilities: vec![Ability {
                id: "AnnieQ".to_string(),
                key: AbilityKey::Q,
                name: "Disintegrate".to_string(),
                tooltip_template: "Deals {{ e1 }} magic damage.".to_string(),
                cooldowns: vec![4.0, 4.0, 4.0, 4.0, 4.0],
                costs: vec![60.0, 65.0, 70.0, 75.0, 80.0],
                ranges: vec![625.0],
                damage_components: vec![crate::model::DamageComponent {
                    component_key: "e1".to_string(),
                    base_values: vec![80.0, 115.0, 150.0, 185.0, 220.0],
                    ap_scaling: vec![0.8; 5],
                    ad_scaling: vec![0.0; 5],
                    bonus_ad_scaling: vec![0.0; 5],
                    health_scaling: vec![0.0; 5],
                    value_type: crate::model::ValueType::Damage,
                    damage_type: Some(crate::model::DamageType::Magic),
                }],
                vars: vec![],
            }],
        }
    }

    fn ap_item(id: &str, ap: f64) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            name: format!("Item {id}"),
            stats: [("ap", ap)].into_iter().collect::<ItemModifier>(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_starts_at_level_one() {
        let session = BuildSession::new(test_champion());
        assert_eq!(session.level(), 1);
        assert_eq!(session.available_points(), 1);
        assert!((session.stats().hp - 560.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mutations_recompute_the_snapshot() {
        let mut session = BuildSession::new(test_champion());
        session.level_up();
        assert!((session.stats().hp - 656.0).abs() < f64::EPSILON);

        session.equip(ap_item("1058", 65.0)).unwrap();
        assert!((session.stats().ap - 65.0).abs() < f64::EPSILON);

        session.unequip(0).unwrap();
        assert!((session.stats().ap - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_holds_at_most_six_items() {
        let mut session = BuildSession::new(test_champion());
        for i in 0..MAX_ITEMS {
            session.equip(ap_item(&i.to_string(), 10.0)).unwrap();
        }
        assert_eq!(
            session.equip(ap_item("extra", 10.0)),
            Err(ActionError::BuildFull)
        );
        assert_eq!(session.items().len(), MAX_ITEMS);
    }

    #[test]
    fn test_tooltip_uses_current_rank_and_items() {
        let mut session = BuildSession::new(test_champion());
        session.equip(ap_item("1058", 100.0)).unwrap();

        // Unranked still shows rank-1 numbers: 80 + 0.8 * 100
        let unranked = session.tooltip(AbilityKey::Q).unwrap();
        assert_eq!(unranked.plain_text(), "Deals 160 magic damage.");

        session.rank_up(AbilityKey::Q).unwrap();
        session.level_up();
        session.level_up();
        session.rank_up(AbilityKey::Q).unwrap();
        let ranked = session.tooltip(AbilityKey::Q).unwrap();
        // 115 + 0.8 * 100
        assert_eq!(ranked.plain_text(), "Deals 195 magic damage.");
    }

    #[test]
    fn test_tooltip_for_missing_slot_is_none() {
        let session = BuildSession::new(test_champion());
        assert!(session.tooltip(AbilityKey::R).is_none());
    }

    #[test]
    fn test_rank_detail_gating_and_clamping() {
        let mut session = BuildSession::new(test_champion());
        assert!(session.rank_detail(AbilityKey::Q).is_none());

        session.rank_up(AbilityKey::Q).unwrap();
        let detail = session.rank_detail(AbilityKey::Q).unwrap();
        assert!((detail.cooldown - 4.0).abs() < f64::EPSILON);
        assert!((detail.cost - 60.0).abs() < f64::EPSILON);
        // The single-entry ranges array serves every rank
        assert!((detail.range - 625.0).abs() < f64::EPSILON);

        for _ in 0..6 {
            session.level_up();
        }
        session.rank_up(AbilityKey::Q).unwrap();
        session.rank_up(AbilityKey::Q).unwrap();
        let detail = session.rank_detail(AbilityKey::Q).unwrap();
        assert!((detail.cost - 70.0).abs() < f64::EPSILON);
        assert!((detail.range - 625.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset_ranks_clears_points() {
        let mut session = BuildSession::new(test_champion());
        session.rank_up(AbilityKey::Q).unwrap();
        session.reset_ranks();
        assert_eq!(session.rank(AbilityKey::Q), 0);
        assert_eq!(session.available_points(), 1);
    }
}
