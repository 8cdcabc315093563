use super::locus::Locus;
use crate::error::{PepeError, Result};

/// Reads the bit run described by `locus` out of a chromosome.
///
/// The result is right-aligned and exactly `locus.length` bits wide. A locus
/// may straddle two consecutive words; it may never be wider than 32 bits or
/// run past the last word.
pub fn extract(chromosome: &[u32], locus: Locus) -> Result<u32> {
    let length = locus.length as usize;
    if length == 0 {
        return Err(PepeError::InvalidLocus {
            locus,
            reason: "locus is empty".to_string(),
        });
    }
    if length > 32 {
        return Err(PepeError::InvalidLocus {
            locus,
            reason: "locus is too long".to_string(),
        });
    }

    let word_index = locus.start as usize / 32;
    let bit_offset = locus.start as usize % 32;

    let first = *chromosome.get(word_index).ok_or_else(|| PepeError::InvalidLocus {
        locus,
        reason: "locus exceeds chromosome length".to_string(),
    })?;

    // Two-word window, first word in the high half
    let mut window = (first as u64) << 32;
    if bit_offset + length > 32 {
        let next = *chromosome
            .get(word_index + 1)
            .ok_or_else(|| PepeError::InvalidLocus {
                locus,
                reason: "locus exceeds chromosome length".to_string(),
            })?;
        window |= next as u64;
    }

    Ok(((window << bit_offset) >> (64 - length)) as u32)
}
