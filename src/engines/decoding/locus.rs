use super::genome::CHROMOSOME_BITS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit region of a chromosome holding one gene.
///
/// `start` counts from the most significant bit of word 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locus {
    pub start: u16,
    pub length: u16,
}

impl Locus {
    pub const fn new(start: u16, length: u16) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start as usize + self.length as usize
    }

    /// Whether the locus fits the 128-bit chromosome and a 32-bit value
    pub fn is_valid(&self) -> bool {
        self.length >= 1 && self.length <= 32 && self.end() <= CHROMOSOME_BITS
    }
}

impl fmt::Display for Locus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, +{})", self.start, self.length)
    }
}
