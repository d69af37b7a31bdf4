//! champ_core - Champion build engine
//!
//! This library provides:
//! - Stat resolution: per-level growth plus item aggregation into a snapshot
//! - Skill allocation: which ability ranks are legal at a given level
//! - Tooltip rendering: annotated templates to styled, substituted text
//! - Build sessions and replayable build plans tying the three together

pub mod build;
pub mod config;
pub mod model;
pub mod prelude;
pub mod stats;
pub mod tooltip;
pub mod types;

// Re-export core types for convenience
pub use build::{apply_plan, ActionError, BuildPlan, BuildSession, PlanError, RankDetail, SkillAllocationState};
pub use config::{sample_champion, sample_items, ConfigError};
pub use model::{Ability, AbilityVar, ChampionRecord, DamageComponent, ItemModifier, ItemRecord, StatModel};
pub use stats::{ResolvedStats, StatKey};
pub use tooltip::{render, RenderedTooltip, Segment};
pub use types::{AbilityKey, HighlightKind, MAX_LEVEL, MIN_LEVEL};
