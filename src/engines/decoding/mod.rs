pub mod bitfield;
pub mod decoder;
pub mod genome;
pub mod locus;
pub mod table;

pub use bitfield::extract;
pub use decoder::{Expression, GenomeDecoder, SkippedLocus};
pub use genome::{Chromosome, Genome};
pub use locus::Locus;
pub use table::{canonical_entries, Gene, LocusEntry, LocusTable};
