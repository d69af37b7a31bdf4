//! Placeholder resolution - a fixed-order cascade of rules

use crate::model::{AbilityVar, DamageComponent, ValueType};
use crate::stats::ResolvedStats;
use crate::tooltip::Placeholder;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Keys the source data uses as formatting hints, never rendered
const SYSTEM_NOOP_KEYS: &[&str] = &["spellmodifierdescriptionappend"];

/// Semantic names that compute from the primary effect slot
const AGGREGATE_DAMAGE_KEYS: &[&str] = &[
    "totaldamage",
    "initialburstdamage",
    "tibbersdamage",
    "damage1",
    "damage2",
    "damage3",
];

/// Semantic names that compute from the shield component
const SHIELD_KEYS: &[&str] = &["shieldblocktotal", "shieldvalue"];

/// Semantic names that compute from the second effect slot
const SECONDARY_DAMAGE_KEYS: &[&str] = &["damagereturn", "secondarydamage"];

/// `componentKey` of an ability's primary effect
const PRIMARY_SLOT: &str = "e1";
/// `componentKey` of an ability's second effect
const SECONDARY_SLOT: &str = "e2";

/// One rule of the resolution cascade, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionRule {
    /// Fixed system keys resolve to nothing
    SystemNoOp,
    /// Pre-tabulated coefficients from the ability's vars
    NamedVar,
    /// Aggregate damage names computed from the primary slot
    AggregateDamage,
    /// Shield names computed from the shield-typed component
    ShieldTotal,
    /// Secondary-damage names computed from the second slot
    SecondaryDamage,
    /// `letter + digits` keys addressing one component directly
    Positional,
}

impl ResolutionRule {
    /// The cascade, first match wins
    pub fn cascade() -> &'static [ResolutionRule] {
        &[
            ResolutionRule::SystemNoOp,
            ResolutionRule::NamedVar,
            ResolutionRule::AggregateDamage,
            ResolutionRule::ShieldTotal,
            ResolutionRule::SecondaryDamage,
            ResolutionRule::Positional,
        ]
    }
}

/// What a matched rule produced
enum RuleOutcome {
    /// A numeric value; the placeholder's arithmetic and key-based
    /// formatting both apply
    Numeric(f64),
    /// A scaling-only contribution shown as "(+N)"; arithmetic is ignored
    Bonus(f64),
    /// Matched, but nothing should be printed
    Suppressed,
}

/// Outcome of resolving one placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// The substitution text (possibly empty)
    pub text: String,
    /// The rule that matched, or None when the placeholder fell through
    pub rule: Option<ResolutionRule>,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        self.rule.is_some()
    }
}

/// Resolve one placeholder against an ability's data and the stat snapshot
///
/// Rules are tried in cascade order and the first match wins. A placeholder
/// no rule claims echoes its source text verbatim; rendering never fails.
pub fn resolve(
    placeholder: &Placeholder,
    rank: u8,
    vars: &[AbilityVar],
    components: &[DamageComponent],
    stats: &ResolvedStats,
) -> Resolution {
    for &rule in ResolutionRule::cascade() {
        let outcome = match rule {
            ResolutionRule::SystemNoOp => apply_system_noop(&placeholder.key),
            ResolutionRule::NamedVar => apply_named_var(&placeholder.key, rank, vars),
            ResolutionRule::AggregateDamage => {
                apply_aggregate(&placeholder.key, rank, components, stats)
            }
            ResolutionRule::ShieldTotal => apply_shield(&placeholder.key, rank, components, stats),
            ResolutionRule::SecondaryDamage => {
                apply_secondary(&placeholder.key, rank, components, stats)
            }
            ResolutionRule::Positional => {
                apply_positional(&placeholder.key, rank, components, stats)
            }
        };
        if let Some(outcome) = outcome {
            let text = match outcome {
                RuleOutcome::Numeric(mut value) => {
                    if let Some(op) = placeholder.op {
                        value = op.apply(value);
                    }
                    format_value(&placeholder.key, value)
                }
                RuleOutcome::Bonus(value) => format!("(+{})", value.round() as i64),
                RuleOutcome::Suppressed => String::new(),
            };
            return Resolution {
                text,
                rule: Some(rule),
            };
        }
    }

    warn!(key = %placeholder.key, raw = %placeholder.raw, "unresolved placeholder");
    Resolution {
        text: placeholder.raw.clone(),
        rule: None,
    }
}

fn apply_system_noop(key: &str) -> Option<RuleOutcome> {
    SYSTEM_NOOP_KEYS
        .contains(&key)
        .then_some(RuleOutcome::Suppressed)
}

fn apply_named_var(key: &str, rank: u8, vars: &[AbilityVar]) -> Option<RuleOutcome> {
    let var = vars.iter().find(|v| v.key == key)?;
    Some(RuleOutcome::Numeric(var.coeff.at_rank(rank)))
}

fn apply_aggregate(
    key: &str,
    rank: u8,
    components: &[DamageComponent],
    stats: &ResolvedStats,
) -> Option<RuleOutcome> {
    if !AGGREGATE_DAMAGE_KEYS.contains(&key) {
        return None;
    }
    let component = components.iter().find(|c| c.component_key == PRIMARY_SLOT)?;
    Some(RuleOutcome::Numeric(component_total(component, rank, stats)))
}

fn apply_shield(
    key: &str,
    rank: u8,
    components: &[DamageComponent],
    stats: &ResolvedStats,
) -> Option<RuleOutcome> {
    if !SHIELD_KEYS.contains(&key) {
        return None;
    }
    let component = components.iter().find(|c| c.value_type == ValueType::Shield)?;
    Some(RuleOutcome::Numeric(component_total(component, rank, stats)))
}

fn apply_secondary(
    key: &str,
    rank: u8,
    components: &[DamageComponent],
    stats: &ResolvedStats,
) -> Option<RuleOutcome> {
    if !SECONDARY_DAMAGE_KEYS.contains(&key) {
        return None;
    }
    let component = components
        .iter()
        .find(|c| c.component_key == SECONDARY_SLOT)?;
    Some(RuleOutcome::Numeric(component_total(component, rank, stats)))
}

fn apply_positional(
    key: &str,
    rank: u8,
    components: &[DamageComponent],
    stats: &ResolvedStats,
) -> Option<RuleOutcome> {
    let mut chars = key.chars();
    let letter = chars.next()?;
    let digits = chars.as_str();
    if !letter.is_ascii_lowercase() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let slot = format!("e{digits}");
    let component = components.iter().find(|c| c.component_key == slot)?;
    let idx = rank_index(component, rank);

    match letter {
        'e' => Some(RuleOutcome::Numeric(component_total(component, rank, stats))),
        'a' | 'f' => Some(bonus(entry(&component.ap_scaling, idx) * stats.ap)),
        'b' => Some(bonus(entry(&component.bonus_ad_scaling, idx) * stats.bonus_ad)),
        'd' => Some(bonus(entry(&component.ad_scaling, idx) * stats.attackdamage)),
        'h' => Some(bonus(entry(&component.health_scaling, idx) * stats.hp)),
        // Unrecognized letters fall through to the verbatim echo
        _ => None,
    }
}

/// A zero or negative scaling contribution prints nothing, not "(+0)"
fn bonus(scaled: f64) -> RuleOutcome {
    if scaled > 0.0 {
        RuleOutcome::Bonus(scaled)
    } else {
        RuleOutcome::Suppressed
    }
}

/// Array index for a rank against a component's base table
///
/// Rank below 1 is evaluated as rank 1 so an unranked ability still shows
/// its first-rank numbers; ranks past the table clamp to the last entry.
fn rank_index(component: &DamageComponent, rank: u8) -> usize {
    let len = component.base_values.len().max(1);
    (rank as usize).clamp(1, len) - 1
}

/// Entry of a scaling array, with missing entries counting as zero
fn entry(values: &[f64], idx: usize) -> f64 {
    values.get(idx).copied().unwrap_or(0.0)
}

/// The full scaling formula for one component at one rank
fn component_total(component: &DamageComponent, rank: u8, stats: &ResolvedStats) -> f64 {
    let idx = rank_index(component, rank);
    entry(&component.base_values, idx)
        + entry(&component.ap_scaling, idx) * stats.ap
        + entry(&component.ad_scaling, idx) * stats.attackdamage
        + entry(&component.bonus_ad_scaling, idx) * stats.bonus_ad
        + entry(&component.health_scaling, idx) * stats.hp
}

/// Round and suffix a numeric result based on the key's name
fn format_value(key: &str, value: f64) -> String {
    let rounded = value.round() as i64;
    let lower = key.to_lowercase();
    if lower.contains("percent") {
        format!("{rounded}%")
    } else if lower.contains("duration") || lower.contains("lifetime") || lower.contains("time") {
        format!("{rounded}s")
    } else {
        rounded.to_string()
    }
}
