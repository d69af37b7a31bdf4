//! Build state - skill allocation, the owning session, and saved plans

mod allocation;
mod plan;
mod session;

pub use allocation::{ActionError, SkillAllocationState, BASIC_RANK_CAP, ULTIMATE_RANK_CAP};
pub use plan::{apply_plan, BuildPlan, PlanError};
pub use session::{BuildSession, RankDetail, MAX_ITEMS};
