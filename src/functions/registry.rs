use super::expressors::{
    ColorExpressor, VariantExpressor, EYE_TYPES, GLASSES_TYPES, HAIR_TYPES, MOUTHS, NECKS,
    SHIRT_TYPES,
};
use super::traits::Expressor;
use crate::types::LookField;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

pub struct ExpressorRegistry {
    expressors: BTreeMap<&'static str, Arc<dyn Expressor>>,
}

impl ExpressorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            expressors: BTreeMap::new(),
        };
        registry.register_variants();
        registry.register_colors();
        registry
    }

    pub fn get(&self, alias: &str) -> Option<Arc<dyn Expressor>> {
        self.expressors.get(alias).cloned()
    }

    pub fn aliases(&self) -> Vec<&'static str> {
        self.expressors.keys().copied().collect()
    }

    pub fn by_target(&self, target: LookField) -> Vec<Arc<dyn Expressor>> {
        self.expressors
            .values()
            .filter(|e| e.target() == target)
            .cloned()
            .collect()
    }

    /// Every decodable variant id, sorted, without the `none` sentinel
    pub fn parts(&self) -> Vec<String> {
        let parts: BTreeSet<&str> = self
            .expressors
            .values()
            .flat_map(|e| e.variants().iter().copied())
            .filter(|id| id.contains('>'))
            .collect();
        parts.into_iter().map(str::to_string).collect()
    }

    pub fn register(&mut self, expressor: Arc<dyn Expressor>) {
        self.expressors.insert(expressor.alias(), expressor);
    }

    fn register_variants(&mut self) {
        let variants: Vec<Arc<dyn Expressor>> = vec![
            Arc::new(VariantExpressor::new("eyes_type", LookField::EyeType, EYE_TYPES)),
            Arc::new(VariantExpressor::new("head_hair_type", LookField::HairType, HAIR_TYPES)),
            Arc::new(VariantExpressor::new("head_mouth", LookField::Mouth, MOUTHS)),
            Arc::new(VariantExpressor::new("body_neck", LookField::Neck, NECKS)),
            Arc::new(VariantExpressor::new("body_shirt_type", LookField::ShirtType, SHIRT_TYPES)),
            Arc::new(VariantExpressor::new("glasses_type", LookField::GlassesType, GLASSES_TYPES)),
        ];
        for expressor in variants {
            self.register(expressor);
        }
    }

    fn register_colors(&mut self) {
        let colors: Vec<Arc<dyn Expressor>> = vec![
            Arc::new(ColorExpressor::new("skin_color", LookField::SkinColor, 10, 0.45, 0.42)),
            Arc::new(ColorExpressor::new("eyes_color", LookField::EyeColor, 10, 0.35, 0.38)),
            Arc::new(ColorExpressor::new("head_hat_color", LookField::HatColor, 5, 0.7, 0.47)),
            Arc::new(ColorExpressor::new("head_hat_color2", LookField::HatColor2, 5, 0.75, 0.46)),
            Arc::new(ColorExpressor::new("head_hair_color", LookField::HairColor, 6, 0.6, 0.42)),
            Arc::new(ColorExpressor::new("body_shirt_color", LookField::ShirtColor, 10, 0.7, 0.38)),
            Arc::new(ColorExpressor::new(
                "glasses_primary_color",
                LookField::GlassesPrimaryColor,
                10,
                0.4,
                0.05,
            )),
            Arc::new(ColorExpressor::new(
                "glasses_secondary_color",
                LookField::GlassesSecondaryColor,
                10,
                1.0,
                0.38,
            )),
            Arc::new(ColorExpressor::new(
                "background_color",
                LookField::BackgroundColor,
                10,
                0.8,
                0.92,
            )),
        ];
        for expressor in colors {
            self.register(expressor);
        }
    }
}

impl Default for ExpressorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_expressor_retrieval() {
        let registry = ExpressorRegistry::new();
        let skin = registry.get("skin_color");
        assert!(skin.is_some());
        assert_eq!(skin.unwrap().target(), LookField::SkinColor);
    }

    #[test]
    fn test_expressor_not_found() {
        let registry = ExpressorRegistry::new();
        assert!(registry.get("NonExistent").is_none());
    }

    #[test]
    fn test_every_field_has_an_expressor() {
        let registry = ExpressorRegistry::new();
        for field in LookField::ALL {
            assert_eq!(registry.by_target(field).len(), 1, "no expressor for {}", field);
        }
    }

    #[test]
    fn test_parts_sorted_and_namespaced() {
        let parts = ExpressorRegistry::new().parts();
        assert!(parts.windows(2).all(|w| w[0] < w[1]));
        assert!(parts.iter().all(|p| p.contains('>')));
        assert!(parts.contains(&"shirt>darth_pepe".to_string()));
        assert!(!parts.contains(&"none".to_string()));
    }
}
