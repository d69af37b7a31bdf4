//! Core types shared across the build engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest champion level
pub const MIN_LEVEL: u8 = 1;
/// Highest champion level
pub const MAX_LEVEL: u8 = 18;

/// Slot of an ability on a champion (passive plus four actives)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKey {
    P,
    Q,
    W,
    E,
    R,
}

impl AbilityKey {
    /// Get all ability slots, passive first
    pub fn all() -> &'static [AbilityKey] {
        &[
            AbilityKey::P,
            AbilityKey::Q,
            AbilityKey::W,
            AbilityKey::E,
            AbilityKey::R,
        ]
    }

    /// Get the rankable slots in cast-bar order
    pub fn spells() -> &'static [AbilityKey] {
        &[AbilityKey::Q, AbilityKey::W, AbilityKey::E, AbilityKey::R]
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, AbilityKey::P)
    }

    pub fn is_ultimate(&self) -> bool {
        matches!(self, AbilityKey::R)
    }

    /// Q/W/E: rankable but not the ultimate
    pub fn is_basic(&self) -> bool {
        matches!(self, AbilityKey::Q | AbilityKey::W | AbilityKey::E)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityKey::P => "P",
            AbilityKey::Q => "Q",
            AbilityKey::W => "W",
            AbilityKey::E => "E",
            AbilityKey::R => "R",
        }
    }
}

impl fmt::Display for AbilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic styling category attached to a run of tooltip text
///
/// The engine only tags runs; colors and icons are the consumer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighlightKind {
    Magic,
    Shield,
    Speed,
    AttackSpeed,
    Ap,
}

impl HighlightKind {
    /// Get all highlight kinds
    pub fn all() -> &'static [HighlightKind] {
        &[
            HighlightKind::Magic,
            HighlightKind::Shield,
            HighlightKind::Speed,
            HighlightKind::AttackSpeed,
            HighlightKind::Ap,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightKind::Magic => "MAGIC",
            HighlightKind::Shield => "SHIELD",
            HighlightKind::Speed => "SPEED",
            HighlightKind::AttackSpeed => "ATTACK_SPEED",
            HighlightKind::Ap => "AP",
        }
    }
}

impl fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_key_predicates() {
        assert!(AbilityKey::P.is_passive());
        assert!(AbilityKey::R.is_ultimate());
        assert!(AbilityKey::Q.is_basic());
        assert!(!AbilityKey::R.is_basic());
        assert!(!AbilityKey::P.is_basic());
    }

    #[test]
    fn test_spells_excludes_passive() {
        assert_eq!(AbilityKey::spells().len(), 4);
        assert!(!AbilityKey::spells().contains(&AbilityKey::P));
    }

    #[test]
    fn test_ability_key_serde_uses_letter() {
        let json = serde_json::to_string(&AbilityKey::Q).unwrap();
        assert_eq!(json, "\"Q\"");
        let key: AbilityKey = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(key, AbilityKey::R);
    }

    #[test]
    fn test_highlight_kind_serde_is_screaming() {
        let json = serde_json::to_string(&HighlightKind::AttackSpeed).unwrap();
        assert_eq!(json, "\"ATTACK_SPEED\"");
    }
}
