use super::bitfield::extract;
use super::genome::{Genome, PARENTAL_SETS};
use super::locus::Locus;
use super::table::LocusTable;
use crate::engines::resolution::ConflictResolver;
use crate::error::PepeError;
use crate::types::Look;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// A locus the decoder could not read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLocus {
    pub chromosome: usize,
    pub locus: Locus,
    pub reason: String,
}

/// Raw look read from a genome, before conflict resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub look: Look,
    pub skipped: Vec<SkippedLocus>,
}

pub struct GenomeDecoder {
    table: Arc<LocusTable>,
    resolver: ConflictResolver,
    resolve_conflicts: bool,
}

impl GenomeDecoder {
    pub fn new(table: Arc<LocusTable>) -> Self {
        Self {
            table,
            resolver: ConflictResolver::canonical(),
            resolve_conflicts: true,
        }
    }

    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Disable the conflict pass, `decode` then returns the raw look
    pub fn with_conflict_resolution(mut self, enabled: bool) -> Self {
        self.resolve_conflicts = enabled;
        self
    }

    pub fn table(&self) -> &Arc<LocusTable> {
        &self.table
    }

    /// Main entry point: genome to final, consistent look
    pub fn decode(&self, genome: &Genome) -> Look {
        let mut look = self.express(genome).look;
        if self.resolve_conflicts {
            self.resolver.resolve(&mut look);
        }
        look
    }

    /// Decode independent genomes in parallel, output order matches input
    pub fn decode_batch(&self, genomes: &[Genome]) -> Vec<Look> {
        genomes.par_iter().map(|genome| self.decode(genome)).collect()
    }

    /// Read every locus of both parental sets into a fresh look.
    ///
    /// Both alleles of a locus go through the same expressor, first set
    /// first; the second set's value always overwrites the first's.
    pub fn express(&self, genome: &Genome) -> Expression {
        let mut look = Look::default();
        let mut skipped = Vec::new();

        for chromosome in self.table.chromosome_indices() {
            for gene in self.table.genes(chromosome) {
                match self.read_alleles(genome, chromosome, gene.locus) {
                    Ok(alleles) => {
                        for value in alleles {
                            gene.expressor.express(value, &mut look);
                        }
                    }
                    Err(e) => {
                        log::warn!("Invalid gene on chromosome {}, skipping: {}", chromosome, e);
                        skipped.push(SkippedLocus {
                            chromosome,
                            locus: gene.locus,
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        log::debug!(
            "Expressed {} loci ({} skipped)",
            self.table.len() - skipped.len(),
            skipped.len()
        );

        Expression { look, skipped }
    }

    fn read_alleles(
        &self,
        genome: &Genome,
        chromosome: usize,
        locus: Locus,
    ) -> Result<[u32; PARENTAL_SETS], PepeError> {
        let mut alleles = [0u32; PARENTAL_SETS];
        for (set, allele) in alleles.iter_mut().enumerate() {
            let words = genome.chromosome(set, chromosome).ok_or_else(|| {
                PepeError::InvalidLocus {
                    locus,
                    reason: format!("genome has no chromosome {}", chromosome),
                }
            })?;
            *allele = extract(words, locus)?;
        }
        Ok(alleles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::decoding::table::LocusEntry;
    use crate::functions::registry::ExpressorRegistry;
    use crate::types::NONE;

    fn decoder_for(entries: &[LocusEntry]) -> GenomeDecoder {
        let table = LocusTable::from_entries(entries, &ExpressorRegistry::new()).unwrap();
        GenomeDecoder::new(Arc::new(table))
    }

    #[test]
    fn test_second_set_overwrites_first() {
        // mouth catalog index 1 in set 0, index 2 in set 1
        let decoder = decoder_for(&[LocusEntry::new(0, 0, 8, "head_mouth")]);
        let genome = Genome::new([
            [[0x0100_0000, 0, 0, 0], [0; 4]],
            [[0x0200_0000, 0, 0, 0], [0; 4]],
        ]);
        let expression = decoder.express(&genome);
        assert_eq!(expression.look.head.mouth, "mouth>smug_lips");
        assert!(expression.skipped.is_empty());
    }

    #[test]
    fn test_invalid_locus_is_skipped() {
        let decoder = decoder_for(&[
            LocusEntry::new(1, 120, 20, "glasses_type"),
            LocusEntry::new(1, 0, 8, "body_neck"),
        ]);
        let genome = Genome::from_words([0x0101_0101; 16]);
        let expression = decoder.express(&genome);

        assert_eq!(expression.look.extra.glasses.glasses_type, NONE);
        assert_eq!(expression.look.body.neck, "neck>bow_tie");
        assert_eq!(expression.skipped.len(), 1);
        assert_eq!(expression.skipped[0].locus, Locus::new(120, 20));
    }

    #[test]
    fn test_later_locus_wins_on_shared_target() {
        let decoder = decoder_for(&[
            LocusEntry::new(1, 54, 8, "body_neck"),
            LocusEntry::new(1, 0, 8, "body_neck"),
        ]);
        // bits 0..8 select neck 3, bits 54..62 are zero and select none
        let genome = Genome::from_words([
            0, 0, 0, 0, 0x0300_0000, 0, 0, 0, //
            0, 0, 0, 0, 0x0300_0000, 0, 0, 0,
        ]);
        let look = decoder.express(&genome).look;
        assert_eq!(look.body.neck, NONE);
    }

    #[test]
    fn test_decode_batch_matches_sequential() {
        let decoder = GenomeDecoder::new(Arc::new(
            LocusTable::canonical(&ExpressorRegistry::new()).unwrap(),
        ));
        let genomes: Vec<Genome> = (0..32u32)
            .map(|i| Genome::from_words([i.wrapping_mul(0x9e37_79b9); 16]))
            .collect();
        let sequential: Vec<Look> = genomes.iter().map(|g| decoder.decode(g)).collect();
        assert_eq!(decoder.decode_batch(&genomes), sequential);
    }
}
