pub mod actions;
pub mod casket;
pub mod jobs;

pub use actions::process_actions;
pub use casket::{release_casket_claims, tick_caskets};
pub use jobs::run_jobs;
