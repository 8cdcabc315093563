use crate::error::PepeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const WORDS_PER_CHROMOSOME: usize = 4;
pub const CHROMOSOMES_PER_SET: usize = 2;
pub const PARENTAL_SETS: usize = 2;
pub const CHROMOSOME_BITS: usize = WORDS_PER_CHROMOSOME * 32;
pub const GENOME_WORDS: usize = PARENTAL_SETS * CHROMOSOMES_PER_SET * WORDS_PER_CHROMOSOME;
pub const GENOME_BYTES: usize = GENOME_WORDS * 4;

pub type Chromosome = [u32; WORDS_PER_CHROMOSOME];

/// Genome representation for pepe trait decoding
///
/// A genome holds 2 parental sets (one from the mother, one from the father).
/// Each set has 2 chromosomes, and each chromosome is made of 4 words of 32 bits:
///
/// - 128 bits per chromosome
/// - 256 bits per parental set
/// - 512 bits in total, of which each locus reads the same region twice
///   (once per parental set)
///
/// Word 0 of a chromosome is its most significant word.
///
/// # Example
///
/// ```
/// use pepe_dna::engines::decoding::Genome;
///
/// let genome: Genome = format!("0x{}", "ab".repeat(64)).parse().unwrap();
/// assert_eq!(genome.chromosome(1, 0).unwrap()[0], 0xabababab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Genome {
    sets: [[Chromosome; CHROMOSOMES_PER_SET]; PARENTAL_SETS],
}

impl Genome {
    pub fn new(sets: [[Chromosome; CHROMOSOMES_PER_SET]; PARENTAL_SETS]) -> Self {
        Self { sets }
    }

    /// Words ordered set-major, then chromosome, then word
    pub fn from_words(words: [u32; GENOME_WORDS]) -> Self {
        let mut sets = [[[0u32; WORDS_PER_CHROMOSOME]; CHROMOSOMES_PER_SET]; PARENTAL_SETS];
        for (i, word) in words.iter().enumerate() {
            let set = i / (CHROMOSOMES_PER_SET * WORDS_PER_CHROMOSOME);
            let chrom = (i / WORDS_PER_CHROMOSOME) % CHROMOSOMES_PER_SET;
            sets[set][chrom][i % WORDS_PER_CHROMOSOME] = *word;
        }
        Self { sets }
    }

    /// Big-endian words, same ordering as `from_words`
    pub fn from_bytes(bytes: &[u8; GENOME_BYTES]) -> Self {
        let mut words = [0u32; GENOME_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_words(words)
    }

    pub fn words(&self) -> [u32; GENOME_WORDS] {
        let mut words = [0u32; GENOME_WORDS];
        for (slot, word) in words.iter_mut().zip(self.sets.iter().flatten().flatten()) {
            *slot = *word;
        }
        words
    }

    pub fn chromosome(&self, set: usize, index: usize) -> Option<&Chromosome> {
        self.sets.get(set).and_then(|s| s.get(index))
    }

    pub fn parental_set(&self, set: usize) -> Option<&[Chromosome; CHROMOSOMES_PER_SET]> {
        self.sets.get(set)
    }
}

impl FromStr for Genome {
    type Err = PepeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        if hex.len() != GENOME_WORDS * 8 {
            return Err(PepeError::InvalidGenome(format!(
                "expected {} hex digits, got {}",
                GENOME_WORDS * 8,
                hex.len()
            )));
        }

        // from_str_radix accepts a leading `+`
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(PepeError::InvalidGenome(format!(
                "unexpected character {:?}, genome must be hex digits only",
                bad
            )));
        }

        let mut words = [0u32; GENOME_WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            let digits = &hex[i * 8..(i + 1) * 8];
            *word = u32::from_str_radix(digits, 16).map_err(|e| {
                PepeError::InvalidGenome(format!("bad hex word {:?}: {}", digits, e))
            })?;
        }
        Ok(Self::from_words(words))
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for word in self.words() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_layout() {
        let mut words = [0u32; GENOME_WORDS];
        for (i, w) in words.iter_mut().enumerate() {
            *w = i as u32;
        }
        let genome = Genome::from_words(words);
        assert_eq!(genome.chromosome(0, 0), Some(&[0, 1, 2, 3]));
        assert_eq!(genome.chromosome(0, 1), Some(&[4, 5, 6, 7]));
        assert_eq!(genome.chromosome(1, 0), Some(&[8, 9, 10, 11]));
        assert_eq!(genome.chromosome(1, 1), Some(&[12, 13, 14, 15]));
        assert_eq!(genome.chromosome(2, 0), None);
        assert_eq!(genome.words(), words);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        let mut bytes = [0u8; GENOME_BYTES];
        bytes[0..4].copy_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        let genome = Genome::from_bytes(&bytes);
        assert_eq!(genome.chromosome(0, 0).unwrap()[0], 0xdeadbeef);
    }

    #[test]
    fn test_hex_display_parses_back() {
        let genome = Genome::from_words([0x0123_4567; GENOME_WORDS]);
        let text = genome.to_string();
        assert_eq!(text.len(), 2 + GENOME_WORDS * 8);
        assert_eq!(text.parse::<Genome>().unwrap(), genome);
    }

    #[test]
    fn test_bad_hex_rejected() {
        assert!("0x1234".parse::<Genome>().is_err());
        assert!("zz".repeat(64).parse::<Genome>().is_err());
    }

    #[test]
    fn test_signed_word_rejected() {
        let signed = format!("0x+1234567{}", "0".repeat(120));
        assert!(matches!(
            signed.parse::<Genome>(),
            Err(PepeError::InvalidGenome(_))
        ));

        let unsigned = format!("0x01234567{}", "0".repeat(120));
        assert_eq!(unsigned.parse::<Genome>().unwrap().words()[0], 0x0123_4567);
    }
}
