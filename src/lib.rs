//! Pepe genome decoding.
//!
//! A pepe's look is packed in a 512-bit genome: two parental sets of two
//! 128-bit chromosomes each. Decoding reads every configured locus from both
//! parental sets, feeds the values through expressors into a [`Look`], then
//! repairs part combinations that cannot be drawn together.
//!
//! ```
//! use pepe_dna::data::GenomeGenerator;
//! use pepe_dna::engines::decoding::{GenomeDecoder, LocusTable};
//! use pepe_dna::functions::registry::ExpressorRegistry;
//! use std::sync::Arc;
//!
//! let registry = ExpressorRegistry::new();
//! let table = Arc::new(LocusTable::canonical(&registry).unwrap());
//! let decoder = GenomeDecoder::new(table);
//!
//! let genome = GenomeGenerator::default().generate(42);
//! let look = decoder.decode(&genome);
//! assert!(look.skin.color.starts_with('#'));
//! ```

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod functions;
pub mod types;

pub use engines::decoding::{Genome, GenomeDecoder, Locus, LocusTable};
pub use engines::resolution::{resolve_look_conflicts, ConflictResolver};
pub use error::{PepeError, Result};
pub use types::{Look, LookField};
