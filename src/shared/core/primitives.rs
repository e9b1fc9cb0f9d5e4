// Fixed reference values shared by every use case.
//
// Notes
// - All volumes are integer milliliters.
// - All instants are i64 epoch milliseconds (UTC); local-day math lives in core::day.

/// Reference serving size. Only used for display counts, never stored.
pub const UNIT_SIZE_ML: u32 = 250;

/// Goal assigned to every profile at registration.
pub const DEFAULT_DAILY_GOAL_ML: u32 = 2000;

pub const DEFAULT_REMINDER_START_HOUR: u32 = 8;
pub const DEFAULT_REMINDER_END_HOUR: u32 = 20;

pub const MIN_PASSWORD_LENGTH: usize = 6;
