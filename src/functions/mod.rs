pub mod color;
pub mod expressors;
pub mod registry;
pub mod traits;

pub use registry::ExpressorRegistry;
pub use traits::Expressor;
