pub mod decoder;
pub mod generator;
pub mod manager;
pub mod preview;
pub mod traits;

pub use decoder::DecoderConfig;
pub use generator::GeneratorConfig;
pub use manager::{AppConfig, ConfigManager};
pub use preview::PreviewConfig;
pub use traits::ConfigSection;
