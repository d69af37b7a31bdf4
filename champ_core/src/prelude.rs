//! Prelude module for convenient imports
//!
//! ```rust
//! use champ_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AbilityKey, HighlightKind, MAX_LEVEL, MIN_LEVEL};

// Data records
pub use crate::model::{
    Ability, AbilityIndex, AbilityVar, ChampionRecord, DamageComponent, ItemGold, ItemModifier,
    ItemRecord, StatModel, VarCoeff,
};

// Stat resolution
pub use crate::stats::{resolve as resolve_stats, ResolvedStats, StatKey, BASE_ATTACK_DAMAGE};

// Build state
pub use crate::build::{
    apply_plan, ActionError, BuildPlan, BuildSession, PlanError, RankDetail, SkillAllocationState,
};

// Tooltips
pub use crate::tooltip::{render, RenderedTooltip, Segment};

// Config
pub use crate::config::{sample_champion, sample_items, ConfigError};
