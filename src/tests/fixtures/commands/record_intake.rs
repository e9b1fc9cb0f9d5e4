// Shared test fixture for the RecordIntake command.

use crate::modules::hydration::use_cases::record_intake::command::RecordIntake;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordIntakeDto {
    pub user_id: String,
    pub amount: String,
}

pub struct RecordIntakeBuilder {
    inner: RecordIntake,
}

impl Default for RecordIntakeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordIntakeBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/record_intake.json").unwrap();
        let dto: RecordIntakeDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RecordIntake {
                user_id: dto.user_id,
                amount: dto.amount,
                consumed_at: 1_700_000_000_000,
            },
        }
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn amount(mut self, v: impl Into<String>) -> Self {
        self.inner.amount = v.into();
        self
    }

    pub fn consumed_at(mut self, v: i64) -> Self {
        self.inner.consumed_at = v;
        self
    }

    pub fn build(self) -> RecordIntake {
        self.inner
    }
}

#[cfg(test)]
mod record_intake_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordIntakeBuilder::default().build();
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.amount, "250");
        assert_eq!(built.consumed_at, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_all_fields() {
        let custom = RecordIntakeBuilder::new()
            .user_id("uid-456")
            .amount(" 750 ")
            .consumed_at(3333)
            .build();
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.amount, " 750 ");
        assert_eq!(custom.consumed_at, 3333);
    }
}
