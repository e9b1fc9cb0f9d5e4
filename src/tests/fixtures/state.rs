// AppState wired over fresh in-memory collaborators, with optional offline toggles.

use crate::modules::hydration::use_cases::session::command::SignIn;
use crate::modules::hydration::use_cases::sign_up::command::SignUp;
use crate::shared::infrastructure::auth::Session;
use crate::shared::infrastructure::auth::in_memory::InMemoryAuth;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::records::in_memory::InMemoryRecords;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use chrono::FixedOffset;
use std::sync::Arc;

pub const TEDDY_EMAIL: &str = "teddy@example.com";
pub const TEDDY_PASSWORD: &str = "secret1";

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".into(),
        port: 0,
        default_offset: FixedOffset::east_opt(0).unwrap(),
        reminder_start_hour: 8,
        reminder_end_hour: 20,
    }
}

fn build(records: InMemoryRecords, notifier: InMemoryNotifier) -> AppState {
    AppState::new(
        Arc::new(records),
        Arc::new(notifier),
        Arc::new(InMemoryAuth::new()),
        &test_config(),
    )
}

pub fn make_test_state() -> AppState {
    build(InMemoryRecords::new(), InMemoryNotifier::new())
}

pub fn make_offline_records_state() -> AppState {
    let mut records = InMemoryRecords::new();
    records.toggle_offline();
    build(records, InMemoryNotifier::new())
}

pub fn make_offline_notifier_state() -> AppState {
    let mut notifier = InMemoryNotifier::new();
    notifier.toggle_offline();
    build(InMemoryRecords::new(), notifier)
}

/// Registers Teddy and returns the session. With the records store offline the
/// account still exists without a profile, so this falls back to a plain sign-in.
pub async fn sign_up_teddy(state: &AppState) -> Session {
    let form = SignUp {
        full_name: "Teddy Test".into(),
        email: TEDDY_EMAIL.into(),
        password: TEDDY_PASSWORD.into(),
        confirm_password: TEDDY_PASSWORD.into(),
    };
    match state.sign_up.handle(form).await {
        Ok(session) => session,
        Err(_) => state
            .session
            .sign_in(SignIn {
                email: TEDDY_EMAIL.into(),
                password: TEDDY_PASSWORD.into(),
            })
            .await
            .unwrap(),
    }
}
