pub mod charts;
pub mod composition;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod logging;
pub mod units;
pub mod validate;

pub use composition::Customization;
pub use config::AppConfig;
pub use content::StaticContent;
pub use dashboard::Dashboard;
pub use units::UnitRegistry;
