//! Stat resolution - growth per level, then item deltas, then derived values

use crate::model::{ItemModifier, StatModel};
use crate::stats::{ResolvedStats, StatKey};
use crate::types::{MAX_LEVEL, MIN_LEVEL};
use tracing::debug;

/// Nominal attack damage baseline used for the bonus-AD derivation
///
/// This is a fixed constant consumed by AD-scaling placeholders, independent
/// of a champion's actual base attack damage.
pub const BASE_ATTACK_DAMAGE: f64 = 50.0;

/// Resolve the stat snapshot for (champion base stats, level, equipped items)
///
/// Growth is linear per level and rounded to whole numbers, except attack
/// speed, which compounds from a percent-per-level rate and keeps three
/// decimals because it is consumed as a multiplier. Item deltas are applied
/// after growth; a delta whose normalized key matches no snapshot stat is
/// dropped (see `normalize_item_key`). Nothing is clamped upward.
///
/// `level` must be within 1..=18; passing anything else is a caller bug.
pub fn resolve(base: &StatModel, level: u8, items: &[&ItemModifier]) -> ResolvedStats {
    assert!(
        (MIN_LEVEL..=MAX_LEVEL).contains(&level),
        "level {level} outside {MIN_LEVEL}..={MAX_LEVEL}"
    );
    let levels_gained = f64::from(level - 1);

    let mut snapshot = ResolvedStats::default();
    for &key in StatKey::all() {
        let value = match key {
            StatKey::AttackSpeed => {
                let grown =
                    base.attackspeed * (1.0 + base.attackspeed_per_level / 100.0 * levels_gained);
                (grown * 1000.0).round() / 1000.0
            }
            _ => (base.base(key) + base.growth(key) * levels_gained).round(),
        };
        snapshot.add(key, value);
    }

    for modifier in items {
        for (raw_key, delta) in modifier.iter() {
            match StatKey::from_normalized(&normalize_item_key(raw_key)) {
                Some(key) => snapshot.add(key, delta),
                None => {
                    // Known quirk carried over from the upstream data flow:
                    // deltas for stats the snapshot does not model vanish.
                    debug!(key = raw_key, delta, "ignoring unmapped item stat key");
                }
            }
        }
    }

    snapshot.bonus_ad = (snapshot.attackdamage - BASE_ATTACK_DAMAGE).max(0.0);
    snapshot
}

/// Normalize a source item stat key for snapshot matching
///
/// Lowercase, then drop the first "mod", then the first "flat". The result
/// either names a snapshot stat or the delta is ignored.
fn normalize_item_key(key: &str) -> String {
    key.to_lowercase().replacen("mod", "", 1).replacen("flat", "", 1)
}
