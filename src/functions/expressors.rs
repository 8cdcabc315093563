use super::color::hsl_to_hex;
use super::traits::Expressor;
use crate::types::{Look, LookField, NONE};

pub const EYE_TYPES: &[&str] = &[
    "eyes>colored_eyes",
    "eyes>closed_eyes",
    "eyes>crying_eyes",
    "eyes>half_closed_eyes",
    "eyes>illuminati_eye",
    "eyes>red_eyes",
    "eyes>small_eyes",
    "eyes>smug_eyes",
    "eyes>future_robot_eyes",
    "eyes>woke_eyes",
    "eyes>monkas_eye",
    "eyes>ghandi",
];

pub const HAIR_TYPES: &[&str] = &[
    NONE,
    "hair>bun_beard",
    "hair>chaplin",
    "hair>egyptian_hat",
    "hair>frankenstein",
    "hair>knife_through_head",
    "hair>mcaffee",
    "hair>nun",
    "hair>pharaoh",
    "hair>rollers",
    "hair>samurai",
    "hair>terrorist",
];

pub const MOUTHS: &[&str] = &[
    "mouth>basic_lips",
    "mouth>happy_lips",
    "mouth>smug_lips",
    "mouth>young_lips",
    "mouth>feels_birthday",
    "mouth>pacman",
];

pub const NECKS: &[&str] = &[NONE, "neck>bow_tie", "neck>gold_chain", "neck>scarf"];

pub const SHIRT_TYPES: &[&str] = &[
    NONE,
    "shirt>basic_shirt",
    "shirt>hoodie",
    "shirt>darth_pepe",
    "shirt>pepemon",
];

pub const GLASSES_TYPES: &[&str] = &[
    NONE,
    "glasses>basic_glasses",
    "glasses>sunglasses",
    "glasses>pirate_hat",
    "glasses>explosion_goggles",
    "glasses>vr_set",
];

/// Picks `variants[value mod len]`
pub struct VariantExpressor {
    alias: &'static str,
    target: LookField,
    variants: &'static [&'static str],
}

impl VariantExpressor {
    pub fn new(alias: &'static str, target: LookField, variants: &'static [&'static str]) -> Self {
        Self {
            alias,
            target,
            variants,
        }
    }
}

impl Expressor for VariantExpressor {
    fn alias(&self) -> &'static str {
        self.alias
    }

    fn target(&self) -> LookField {
        self.target
    }

    fn variants(&self) -> &[&'static str] {
        self.variants
    }

    fn express(&self, value: u32, look: &mut Look) {
        let variant = match self.variants.len() {
            0 => NONE,
            len => self.variants[value as usize % len],
        };
        look.set(self.target, variant);
    }
}

/// Scales a `bits`-wide value linearly around the hue wheel
pub struct ColorExpressor {
    alias: &'static str,
    target: LookField,
    bits: u32,
    saturation: f64,
    lightness: f64,
}

impl ColorExpressor {
    pub fn new(
        alias: &'static str,
        target: LookField,
        bits: u32,
        saturation: f64,
        lightness: f64,
    ) -> Self {
        Self {
            alias,
            target,
            bits: bits.clamp(1, 32),
            saturation,
            lightness,
        }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn color_for(&self, value: u32) -> String {
        let span = (1u64 << self.bits) as f64;
        // Bits above the declared width wrap around
        let scaled = (value as u64 % (1u64 << self.bits)) as f64;
        hsl_to_hex(scaled / span * 360.0, self.saturation, self.lightness)
    }
}

impl Expressor for ColorExpressor {
    fn alias(&self) -> &'static str {
        self.alias
    }

    fn target(&self) -> LookField {
        self.target
    }

    fn express(&self, value: u32, look: &mut Look) {
        look.set(self.target, self.color_for(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_wraps_modulo() {
        let expressor = VariantExpressor::new("mouth", LookField::Mouth, MOUTHS);
        let mut look = Look::default();

        expressor.express(1, &mut look);
        assert_eq!(look.head.mouth, "mouth>happy_lips");

        expressor.express(MOUTHS.len() as u32 + 5, &mut look);
        assert_eq!(look.head.mouth, "mouth>pacman");

        expressor.express(u32::MAX, &mut look);
        assert!(MOUTHS.contains(&look.head.mouth.as_str()));
    }

    #[test]
    fn test_variant_overwrites_only_target() {
        let expressor = VariantExpressor::new("neck", LookField::Neck, NECKS);
        let mut look = Look::default();
        look.head.mouth = "mouth>smug_lips".to_string();
        expressor.express(2, &mut look);
        assert_eq!(look.body.neck, "neck>gold_chain");
        assert_eq!(look.head.mouth, "mouth>smug_lips");
    }

    #[test]
    fn test_color_is_hex_for_whole_range() {
        let expressor = ColorExpressor::new("skin", LookField::SkinColor, 10, 0.6, 0.45);
        let mut look = Look::default();
        for value in 0..1024u32 {
            expressor.express(value, &mut look);
            let color = &look.skin.color;
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_color_zero_is_red_hue() {
        let expressor = ColorExpressor::new("bg", LookField::BackgroundColor, 8, 1.0, 0.5);
        assert_eq!(expressor.color_for(0), "#ff0000");
        // half way round the wheel
        assert_eq!(expressor.color_for(128), "#00ffff");
    }

    #[test]
    fn test_catalogs_name_every_conflict_variant() {
        for id in ["eyes>ghandi", "eyes>monkas_eye", "eyes>woke_eyes"] {
            assert!(EYE_TYPES.contains(&id));
        }
        for id in ["hair>pharaoh", "hair>samurai", "hair>mcaffee"] {
            assert!(HAIR_TYPES.contains(&id));
        }
        assert!(SHIRT_TYPES.contains(&"shirt>pepemon"));
        assert!(GLASSES_TYPES.contains(&"glasses>vr_set"));
    }
}
