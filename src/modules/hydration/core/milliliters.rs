// Free-text volume input, as typed into an amount or goal field.

use crate::modules::hydration::core::errors::ValidationError;

/// Accepts either a JSON integer or a string such as `" 250 "`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum MlInput {
    Number(i64),
    Text(String),
}

impl MlInput {
    pub fn into_text(self) -> String {
        match self {
            MlInput::Number(n) => n.to_string(),
            MlInput::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlField {
    Amount,
    Goal,
}

/// Parses a strictly positive, base-10 milliliter count that fits in 32 bits.
pub fn parse_positive_ml(raw: &str, field: MlField) -> Result<u32, ValidationError> {
    let parsed: i64 = raw.trim().parse().map_err(|_| match field {
        MlField::Amount => ValidationError::AmountNotANumber(raw.to_string()),
        MlField::Goal => ValidationError::GoalNotANumber(raw.to_string()),
    })?;
    if parsed <= 0 {
        return Err(match field {
            MlField::Amount => ValidationError::AmountNotPositive(parsed),
            MlField::Goal => ValidationError::GoalNotPositive(parsed),
        });
    }
    u32::try_from(parsed).map_err(|_| ValidationError::OutOfRange {
        field: match field {
            MlField::Amount => "amount",
            MlField::Goal => "daily_goal",
        },
        value: parsed,
    })
}
