//! Data records consumed by the engine - champions, abilities, items

mod ability;
mod champion;
mod item;
mod stat_model;

pub use ability::{Ability, AbilityVar, DamageComponent, DamageType, ValueType, VarCoeff};
pub use champion::{AbilityIndex, ChampionRecord};
pub use item::{ItemGold, ItemModifier, ItemRecord};
pub use stat_model::StatModel;
