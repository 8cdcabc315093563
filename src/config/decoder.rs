use super::traits::ConfigSection;
use crate::engines::decoding::genome::CHROMOSOMES_PER_SET;
use crate::engines::decoding::{GenomeDecoder, LocusEntry, LocusTable};
use crate::error::PepeError;
use crate::functions::registry::ExpressorRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub resolve_conflicts: bool,
    /// Replaces the canonical locus table when set
    pub loci: Option<Vec<LocusEntry>>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            resolve_conflicts: true,
            loci: None,
        }
    }
}

impl DecoderConfig {
    pub fn locus_table(&self, registry: &ExpressorRegistry) -> Result<LocusTable, PepeError> {
        match &self.loci {
            Some(entries) => LocusTable::from_entries(entries, registry),
            None => LocusTable::canonical(registry),
        }
    }

    pub fn build(&self, registry: &ExpressorRegistry) -> Result<GenomeDecoder, PepeError> {
        let table = self.locus_table(registry)?;
        Ok(GenomeDecoder::new(Arc::new(table)).with_conflict_resolution(self.resolve_conflicts))
    }
}

impl ConfigSection for DecoderConfig {
    fn section_name() -> &'static str {
        "decoder"
    }

    // Loci out of chromosome bounds are allowed; the decoder skips them
    fn validate(&self) -> Result<(), PepeError> {
        let Some(entries) = &self.loci else {
            return Ok(());
        };
        if entries.is_empty() {
            return Err(PepeError::Configuration(
                "Locus table override must not be empty".to_string(),
            ));
        }
        let registry = ExpressorRegistry::new();
        for entry in entries {
            if entry.chromosome as usize >= CHROMOSOMES_PER_SET {
                return Err(PepeError::Configuration(format!(
                    "Chromosome index {} out of range",
                    entry.chromosome
                )));
            }
            if registry.get(&entry.expressor).is_none() {
                return Err(PepeError::Configuration(format!(
                    "Unknown expressor: {}",
                    entry.expressor
                )));
            }
        }
        Ok(())
    }
}
