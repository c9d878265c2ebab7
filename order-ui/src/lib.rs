pub mod app;
pub mod config;
pub mod content;
pub mod logging;
pub mod session;
pub mod views;
pub mod widgets;

pub use app::run_guide;
pub use config::{ConfigError, GuideConfig};
pub use session::GuideSession;
