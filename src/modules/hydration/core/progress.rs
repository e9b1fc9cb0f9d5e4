// Goal-progress metrics derived from a day's total and the current goal.
//
// Every screen computes these from the same two numbers, so they live in one pure function.

use crate::shared::core::primitives::UNIT_SIZE_ML;

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Progress {
    pub total: u64,
    pub goal: u32,
    /// `total / goal` clamped to `[0, 1]`.
    pub progress_ratio: f64,
    pub percentage_complete: u32,
    pub remaining: u64,
    pub units_consumed: u64,
    pub units_remaining: u64,
    pub goal_reached: bool,
}

impl Progress {
    pub fn compute(total: u64, goal: u32) -> Self {
        let unit = u64::from(UNIT_SIZE_ML);
        // A zero goal is rejected on write; a stored one must not divide by zero.
        let (progress_ratio, goal_reached) = if goal == 0 {
            (if total > 0 { 1.0 } else { 0.0 }, total > 0)
        } else {
            (
                (total as f64 / f64::from(goal)).min(1.0),
                total >= u64::from(goal),
            )
        };
        let remaining = u64::from(goal).saturating_sub(total);

        Self {
            total,
            goal,
            progress_ratio,
            percentage_complete: (progress_ratio * 100.0).round() as u32,
            remaining,
            units_consumed: total / unit,
            units_remaining: remaining.div_ceil(unit),
            goal_reached,
        }
    }
}
