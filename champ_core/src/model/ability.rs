//! Ability data - templates, per-rank arrays, damage components, vars

use crate::types::AbilityKey;
use serde::{Deserialize, Serialize};

/// One ability on a champion, in the upstream feed's camelCase shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub key: AbilityKey,
    pub name: String,
    /// Annotated template with `{{ ... }}` placeholders and tag markers
    #[serde(default)]
    pub tooltip_template: String,
    /// Seconds, indexed by rank-1
    #[serde(default)]
    pub cooldowns: Vec<f64>,
    /// Resource cost, indexed by rank-1
    #[serde(default)]
    pub costs: Vec<f64>,
    /// Cast range in game units, indexed by rank-1
    #[serde(default)]
    pub ranges: Vec<f64>,
    #[serde(default)]
    pub damage_components: Vec<DamageComponent>,
    #[serde(default)]
    pub vars: Vec<AbilityVar>,
}

impl Ability {
    /// Highest rank the ability's data tables describe
    pub fn max_rank(&self) -> u8 {
        self.cooldowns
            .len()
            .max(self.costs.len())
            .max(self.ranges.len())
            .min(u8::MAX as usize) as u8
    }
}

/// What a damage component's value represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    #[default]
    Damage,
    Shield,
    Heal,
    #[serde(other)]
    Other,
}

/// Damage school of a component, when it has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageType {
    Magic,
    Physical,
    True,
    #[serde(other)]
    Other,
}

/// One scaling effect of an ability
///
/// The parallel arrays are indexed by rank-1; each array's length
/// independently bounds the highest rank it can describe, and missing
/// entries count as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageComponent {
    /// Effect slot identifier, e.g. "e1" for the primary effect
    pub component_key: String,
    #[serde(default)]
    pub base_values: Vec<f64>,
    #[serde(default)]
    pub ap_scaling: Vec<f64>,
    #[serde(default)]
    pub ad_scaling: Vec<f64>,
    #[serde(default)]
    pub bonus_ad_scaling: Vec<f64>,
    #[serde(default)]
    pub health_scaling: Vec<f64>,
    #[serde(default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub damage_type: Option<DamageType>,
}

/// Named per-rank coefficient supplied by ability data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityVar {
    pub key: String,
    pub coeff: VarCoeff,
}

/// A var coefficient is either one number or a per-rank table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarCoeff {
    Scalar(f64),
    PerRank(Vec<f64>),
}

impl VarCoeff {
    /// Value at a rank
    ///
    /// Tables index by rank-1; rank 0 and 1 both read the first entry, and
    /// ranks past the end reuse the last entry. An empty table yields zero.
    pub fn at_rank(&self, rank: u8) -> f64 {
        match self {
            VarCoeff::Scalar(value) => *value,
            VarCoeff::PerRank(values) => {
                if values.is_empty() {
                    return 0.0;
                }
                let idx = (rank.saturating_sub(1) as usize).min(values.len() - 1);
                values[idx]
            }
        }
    }
}
