pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod tracker;
pub mod view;

pub use client::TrackerClient;
pub use config::TrackerConfig;
pub use error::ValidationError;
pub use state::AppState;
pub use tracker::{Command, Outcome, Tracker};
