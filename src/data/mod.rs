pub mod generator;
pub mod ids;

pub use generator::GenomeGenerator;
pub use ids::parse_pepe_id;
