use super::genome::CHROMOSOMES_PER_SET;
use super::locus::Locus;
use crate::error::{PepeError, Result};
use crate::functions::registry::ExpressorRegistry;
use crate::functions::traits::Expressor;
use crate::types::LookField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Configuration record binding a locus to an expressor by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocusEntry {
    pub chromosome: u8,
    pub start: u16,
    pub length: u16,
    pub expressor: String,
}

impl LocusEntry {
    pub fn new(chromosome: u8, start: u16, length: u16, expressor: &str) -> Self {
        Self {
            chromosome,
            start,
            length,
            expressor: expressor.to_string(),
        }
    }
}

/// Canonical gene layout. Chromosome 0 leaves 56 bits unused, chromosome 1
/// leaves 54 bits unused.
pub fn canonical_entries() -> Vec<LocusEntry> {
    vec![
        LocusEntry::new(0, 0, 10, "skin_color"),
        LocusEntry::new(0, 10, 10, "eyes_color"),
        LocusEntry::new(0, 20, 12, "eyes_type"),
        LocusEntry::new(0, 32, 12, "head_hair_type"),
        LocusEntry::new(0, 44, 5, "head_hat_color"),
        LocusEntry::new(0, 49, 5, "head_hat_color2"),
        LocusEntry::new(0, 54, 6, "head_hair_color"),
        LocusEntry::new(0, 60, 12, "head_mouth"),
        LocusEntry::new(1, 0, 8, "body_neck"),
        LocusEntry::new(1, 8, 8, "body_shirt_type"),
        LocusEntry::new(1, 16, 10, "body_shirt_color"),
        LocusEntry::new(1, 26, 8, "glasses_type"),
        LocusEntry::new(1, 34, 10, "glasses_primary_color"),
        LocusEntry::new(1, 44, 10, "glasses_secondary_color"),
        // Same expressor twice; the later locus always wins
        LocusEntry::new(1, 54, 10, "glasses_secondary_color"),
        LocusEntry::new(1, 64, 10, "background_color"),
    ]
}

#[derive(Clone)]
pub struct Gene {
    pub locus: Locus,
    pub expressor: Arc<dyn Expressor>,
}

/// Loci per chromosome index, each list ordered by `(start, length)`.
///
/// Read-only once built; share it behind an `Arc` across decoders.
pub struct LocusTable {
    chromosomes: BTreeMap<usize, Vec<Gene>>,
}

impl LocusTable {
    pub fn canonical(registry: &ExpressorRegistry) -> Result<Self> {
        Self::from_entries(&canonical_entries(), registry)
    }

    pub fn from_entries(entries: &[LocusEntry], registry: &ExpressorRegistry) -> Result<Self> {
        let mut chromosomes: BTreeMap<usize, Vec<Gene>> = BTreeMap::new();

        for entry in entries {
            let index = entry.chromosome as usize;
            if index >= CHROMOSOMES_PER_SET {
                return Err(PepeError::Configuration(format!(
                    "Chromosome index {} out of range (0..{})",
                    index, CHROMOSOMES_PER_SET
                )));
            }
            let expressor = registry.get(&entry.expressor).ok_or_else(|| {
                PepeError::Configuration(format!("Unknown expressor: {}", entry.expressor))
            })?;
            chromosomes.entry(index).or_default().push(Gene {
                locus: Locus::new(entry.start, entry.length),
                expressor,
            });
        }

        // Stable: equal loci keep their configuration order
        for genes in chromosomes.values_mut() {
            genes.sort_by_key(|g| (g.locus.start, g.locus.length));
        }

        let table = Self { chromosomes };
        for (index, locus, field) in table.duplicate_targets() {
            log::warn!(
                "Chromosome {} locus {} writes {} already written by an earlier locus",
                index,
                locus,
                field
            );
        }
        for (index, locus) in table.invalid_loci() {
            log::warn!(
                "Chromosome {} locus {} is invalid and will be skipped on every decode",
                index,
                locus
            );
        }
        Ok(table)
    }

    /// Chromosome indices present in the table, ascending
    pub fn chromosome_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.chromosomes.keys().copied()
    }

    pub fn genes(&self, chromosome: usize) -> &[Gene] {
        self.chromosomes
            .get(&chromosome)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.chromosomes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loci that write a field some earlier locus on the same chromosome
    /// already writes
    pub fn duplicate_targets(&self) -> Vec<(usize, Locus, LookField)> {
        let mut duplicates = Vec::new();
        for (&index, genes) in &self.chromosomes {
            for (i, gene) in genes.iter().enumerate() {
                let target = gene.expressor.target();
                if genes[..i].iter().any(|g| g.expressor.target() == target) {
                    duplicates.push((index, gene.locus, target));
                }
            }
        }
        duplicates
    }

    /// Loci the decoder will skip
    pub fn invalid_loci(&self) -> Vec<(usize, Locus)> {
        self.chromosomes
            .iter()
            .flat_map(|(&index, genes)| {
                genes
                    .iter()
                    .filter(|g| !g.locus.is_valid())
                    .map(move |g| (index, g.locus))
            })
            .collect()
    }

    pub fn to_entries(&self) -> Vec<LocusEntry> {
        self.chromosomes
            .iter()
            .flat_map(|(&index, genes)| {
                genes.iter().map(move |g| {
                    LocusEntry::new(index as u8, g.locus.start, g.locus.length, g.expressor.alias())
                })
            })
            .collect()
    }
}
