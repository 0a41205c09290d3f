pub mod alerts;
pub mod data;
pub mod display;
pub mod manager;
pub mod traits;

pub use alerts::AlertConfig;
pub use data::DataConfig;
pub use display::DisplayConfig;
pub use manager::{AppConfig, ConfigManager, ENV_PREFIX};
pub use traits::{ConfigManifest, ConfigSection, FieldManifest};
