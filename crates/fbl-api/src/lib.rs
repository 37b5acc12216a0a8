pub mod config;
pub mod deletion;
pub mod error;
pub mod facebook;
pub mod pages;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
