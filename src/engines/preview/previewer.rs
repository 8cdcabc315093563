use crate::engines::resolution::ConflictResolver;
use crate::error::{PepeError, Result};
use crate::types::{Look, LookField};

/// Shows a single part on top of a fixed base look.
///
/// Ids index the sorted part catalog modulo its length, so walking ids
/// `0..parts().len()` visits every part once.
pub struct PartPreviewer {
    base: Look,
    parts: Vec<String>,
    resolver: ConflictResolver,
}

impl PartPreviewer {
    pub fn new(base: Look, mut parts: Vec<String>) -> Self {
        parts.sort();
        parts.dedup();
        Self {
            base,
            parts,
            resolver: ConflictResolver::canonical(),
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn part_for(&self, id: u64) -> Option<&str> {
        if self.parts.is_empty() {
            return None;
        }
        let index = (id % self.parts.len() as u64) as usize;
        Some(self.parts[index].as_str())
    }

    pub fn preview(&self, id: u64) -> Result<Look> {
        let part = self
            .part_for(id)
            .ok_or_else(|| PepeError::Configuration("Part catalog is empty".to_string()))?;

        let mut look = self.base.clone();
        let prefix = part.split('>').next().unwrap_or_default();
        match LookField::from_part_prefix(prefix) {
            Some(field) => look.set(field, part),
            None => log::warn!("Part {} has no known namespace, showing base look", part),
        }

        self.resolver.resolve(&mut look);
        Ok(look)
    }
}

/// Palette used when no preview base is configured
pub fn default_preview_look() -> Look {
    let mut look = Look::default();
    look.skin.color = "#389945".to_string();
    look.head.hair.hair_color = "#ab7e2b".to_string();
    look.head.hair.hat_color = "#c97225".to_string();
    look.head.hair.hat_color2 = "#cf1d32".to_string();
    look.head.eyes.eye_color = "#477b64".to_string();
    look.head.eyes.eye_type = "eyes>colored_eyes".to_string();
    look.head.mouth = "mouth>basic_lips".to_string();
    look.body.shirt.shirt_color = "#1ca479".to_string();
    look.body.shirt.shirt_type = "shirt>basic_shirt".to_string();
    look.extra.glasses.primary_color = "#0d0606".to_string();
    look.extra.glasses.secondary_color = "#00c3c2".to_string();
    look.background_color = "#dbdefb".to_string();
    look
}
