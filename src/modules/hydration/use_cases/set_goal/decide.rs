use crate::modules::hydration::core::errors::ValidationError;
use crate::modules::hydration::core::milliliters::{MlField, parse_positive_ml};
use crate::modules::hydration::use_cases::set_goal::command::SetGoal;

pub fn decide_set_goal(command: &SetGoal) -> Result<u32, ValidationError> {
    parse_positive_ml(&command.daily_goal, MlField::Goal)
}
