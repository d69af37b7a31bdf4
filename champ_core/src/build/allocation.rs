//! SkillAllocationState - which ability ranks are legal at a given level

use crate::types::{AbilityKey, MAX_LEVEL, MIN_LEVEL};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Highest rank of a basic (Q/W/E) skill
pub const BASIC_RANK_CAP: u8 = 5;
/// Highest rank of the ultimate
pub const ULTIMATE_RANK_CAP: u8 = 3;

/// A rejected rank-up or level-down, with the user-facing reason
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("You have no skill points to spend.")]
    NoPointsAvailable,
    #[error("This skill is already at its maximum rank.")]
    AtMaxRank,
    #[error("You must be level {required} to rank up your ultimate.")]
    UltimateLevelRequired { required: u8 },
    #[error("This skill cannot hold more than {cap} points at your level.")]
    BasicRankCapped { cap: u8 },
    #[error("The passive cannot be ranked.")]
    NotRankable,
    #[error("Already at level 1.")]
    AtMinLevel,
    #[error("Cannot level down as it would invalidate your ultimate's rank.")]
    UltimateWouldInvalidate,
    #[error("Reset skill points before leveling down further.")]
    PointsExceedLevel,
    #[error("A build cannot hold more than six items.")]
    BuildFull,
}

/// Per-ability ranks plus the owning build's level
///
/// Every mutation is checked against the allocation rules first; a rejected
/// action leaves the state untouched and reports why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillAllocationState {
    level: u8,
    ranks: HashMap<AbilityKey, u8>,
}

impl SkillAllocationState {
    /// Fresh state: level 1, no points spent
    pub fn new() -> Self {
        let ranks = AbilityKey::spells().iter().map(|&key| (key, 0)).collect();
        SkillAllocationState {
            level: MIN_LEVEL,
            ranks,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Current rank of a skill (0 for the passive)
    pub fn rank(&self, key: AbilityKey) -> u8 {
        self.ranks.get(&key).copied().unwrap_or(0)
    }

    /// Total points spent across all skills
    pub fn spent_points(&self) -> u8 {
        self.ranks.values().sum()
    }

    /// Points available to spend at the current level
    pub fn available_points(&self) -> u8 {
        self.level.saturating_sub(self.spent_points())
    }

    /// Champion level required for the next ultimate rank after `rank`
    fn ultimate_required_level(rank: u8) -> u8 {
        6 + rank * 5
    }

    /// Check whether a rank-up would be legal, reporting the blocking rule
    pub fn check_rank_up(&self, key: AbilityKey) -> Result<(), ActionError> {
        if key.is_passive() {
            return Err(ActionError::NotRankable);
        }
        if self.available_points() == 0 {
            return Err(ActionError::NoPointsAvailable);
        }
        let rank = self.rank(key);
        let cap = if key.is_ultimate() {
            ULTIMATE_RANK_CAP
        } else {
            BASIC_RANK_CAP
        };
        if rank >= cap {
            return Err(ActionError::AtMaxRank);
        }
        if key.is_ultimate() {
            let required = Self::ultimate_required_level(rank);
            if self.level < required {
                return Err(ActionError::UltimateLevelRequired { required });
            }
        } else {
            // ceil(level / 2) points at most in one basic skill, gated off
            // at level 1 so the very first point can go anywhere
            let per_level_cap = self.level.div_ceil(2);
            if rank >= per_level_cap && self.level > 1 {
                return Err(ActionError::BasicRankCapped { cap: per_level_cap });
            }
        }
        Ok(())
    }

    pub fn can_rank_up(&self, key: AbilityKey) -> bool {
        self.check_rank_up(key).is_ok()
    }

    /// Spend a point on a skill
    pub fn rank_up(&mut self, key: AbilityKey) -> Result<u8, ActionError> {
        self.check_rank_up(key)?;
        let rank = self.ranks.entry(key).or_insert(0);
        *rank += 1;
        Ok(*rank)
    }

    /// Raise the level, saturating at the cap
    pub fn level_up(&mut self) -> u8 {
        self.level = (self.level + 1).min(MAX_LEVEL);
        self.level
    }

    /// Check whether a level-down would be legal
    pub fn check_level_down(&self) -> Result<(), ActionError> {
        if self.level <= MIN_LEVEL {
            return Err(ActionError::AtMinLevel);
        }
        let ultimate = self.rank(AbilityKey::R);
        let invalidates = (self.level == 16 && ultimate == 3)
            || (self.level == 11 && ultimate == 2)
            || (self.level == 6 && ultimate == 1);
        if invalidates {
            return Err(ActionError::UltimateWouldInvalidate);
        }
        if self.level - 1 < self.spent_points() {
            return Err(ActionError::PointsExceedLevel);
        }
        Ok(())
    }

    /// Lower the level; ranks are never auto-adjusted, so a level-down that
    /// would strand spent points is rejected instead
    pub fn level_down(&mut self) -> Result<u8, ActionError> {
        self.check_level_down()?;
        self.level -= 1;
        Ok(self.level)
    }

    /// Refund every spent point
    pub fn reset_ranks(&mut self) {
        for rank in self.ranks.values_mut() {
            *rank = 0;
        }
    }
}

impl Default for SkillAllocationState {
    fn default() -> Self {
        Self::new()
    }
}
