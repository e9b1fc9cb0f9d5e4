pub mod commands {
    pub mod record_intake;
}
pub mod events;
pub mod records;
pub mod state;
