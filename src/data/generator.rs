use crate::engines::decoding::genome::{
    Genome, CHROMOSOMES_PER_SET, GENOME_WORDS, PARENTAL_SETS, WORDS_PER_CHROMOSOME,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SET_WORDS: usize = CHROMOSOMES_PER_SET * WORDS_PER_CHROMOSOME;
pub const SET_BITS: u32 = (SET_WORDS * 32) as u32;

/// Derives a genome from a numeric id.
///
/// The id seeds the generator, which draws one value per parental set,
/// uniform in `[0, 2^bits_per_set)`. The same id always gives the same genome.
#[derive(Debug, Clone, Copy)]
pub struct GenomeGenerator {
    bits_per_set: u32,
}

impl GenomeGenerator {
    /// `bits_per_set` is clamped to `1..=256`
    pub fn new(bits_per_set: u32) -> Self {
        Self {
            bits_per_set: bits_per_set.clamp(1, SET_BITS),
        }
    }

    pub fn bits_per_set(&self) -> u32 {
        self.bits_per_set
    }

    pub fn generate(&self, id: u64) -> Genome {
        let mut rng = StdRng::seed_from_u64(id);
        let mut words = [0u32; GENOME_WORDS];
        for set in words.chunks_exact_mut(SET_WORDS).take(PARENTAL_SETS) {
            self.fill_set(&mut rng, set);
        }
        Genome::from_words(words)
    }

    fn fill_set<R: Rng + ?Sized>(&self, rng: &mut R, set: &mut [u32]) {
        // Leading bits that must stay zero; word 0 is most significant
        let zero_bits = SET_BITS - self.bits_per_set;
        for (i, word) in set.iter_mut().enumerate() {
            let drawn: u32 = rng.gen();
            let clear = zero_bits.saturating_sub(i as u32 * 32);
            *word = match clear {
                0 => drawn,
                c if c >= 32 => 0,
                c => drawn & (u32::MAX >> c),
            };
        }
    }
}

impl Default for GenomeGenerator {
    fn default() -> Self {
        Self::new(SET_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_id_same_genome() {
        let generator = GenomeGenerator::default();
        assert_eq!(generator.generate(7), generator.generate(7));
        assert_ne!(generator.generate(7), generator.generate(8));
    }

    #[test]
    fn test_parental_sets_differ() {
        let genome = GenomeGenerator::default().generate(1234);
        assert_ne!(genome.parental_set(0), genome.parental_set(1));
    }

    #[test]
    fn test_bit_bound_respected() {
        let generator = GenomeGenerator::new(40);
        for id in 0..50 {
            let words = generator.generate(id).words();
            for set in words.chunks_exact(SET_WORDS) {
                assert!(set[..6].iter().all(|w| *w == 0));
                assert!(set[6] <= 0xff);
            }
        }
    }

    #[test]
    fn test_bits_clamped() {
        assert_eq!(GenomeGenerator::new(0).bits_per_set(), 1);
        assert_eq!(GenomeGenerator::new(1000).bits_per_set(), 256);
    }
}
