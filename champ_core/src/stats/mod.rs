//! Stat resolution - per-level growth plus item aggregation

mod calculator;
mod resolved;

pub use calculator::{resolve, BASE_ATTACK_DAMAGE};
pub use resolved::{ResolvedStats, StatKey};
