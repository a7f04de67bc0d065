//! NFT marketplace analytics dashboard.
//!
//! Binary wiring around the core pipeline: configuration, logging, and a
//! plain-text rendering of store events standing in for the chart/table
//! widgets.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use logging::init_logging;
