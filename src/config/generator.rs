use super::traits::ConfigSection;
use crate::data::generator::{GenomeGenerator, SET_BITS};
use crate::error::PepeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Exclusive upper bound of each parental set value, as a power of two
    pub bits_per_set: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bits_per_set: SET_BITS,
        }
    }
}

impl GeneratorConfig {
    pub fn build(&self) -> GenomeGenerator {
        GenomeGenerator::new(self.bits_per_set)
    }
}

impl ConfigSection for GeneratorConfig {
    fn section_name() -> &'static str {
        "generator"
    }

    fn validate(&self) -> Result<(), PepeError> {
        if self.bits_per_set == 0 || self.bits_per_set > SET_BITS {
            return Err(PepeError::Configuration(format!(
                "bits_per_set must be between 1 and {}",
                SET_BITS
            )));
        }
        Ok(())
    }
}
