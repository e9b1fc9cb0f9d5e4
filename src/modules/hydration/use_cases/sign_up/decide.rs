use crate::modules::hydration::core::errors::ValidationError;
use crate::modules::hydration::use_cases::sign_up::command::SignUp;
use crate::shared::core::primitives::MIN_PASSWORD_LENGTH;

/// Checked in order: every field filled, passwords equal, password long enough.
pub fn decide_sign_up(command: &SignUp) -> Result<(), ValidationError> {
    let fields = [
        &command.full_name,
        &command.email,
        &command.password,
        &command.confirm_password,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if command.password != command.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if command.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
