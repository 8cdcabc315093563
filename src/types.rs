use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel for an absent feature. Every field of a `Look` holds either a
/// hex color, a namespaced variant id, or this value.
pub const NONE: &str = "none";

/// Complete trait descriptor of a pepe
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Look {
    pub skin: Skin,
    pub head: Head,
    pub body: Body,
    pub extra: Extra,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Skin {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Head {
    pub hair: Hair,
    pub eyes: Eyes,
    pub mouth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Hair {
    pub hair_color: String,
    pub hat_color: String,
    pub hat_color2: String,
    pub hair_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Eyes {
    pub eye_color: String,
    pub eye_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub neck: String,
    pub shirt: Shirt,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Shirt {
    pub shirt_color: String,
    pub shirt_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Extra {
    pub glasses: Glasses,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Glasses {
    pub primary_color: String,
    pub secondary_color: String,
    pub glasses_type: String,
}

impl Default for Skin {
    fn default() -> Self {
        Self { color: NONE.to_string() }
    }
}

impl Default for Head {
    fn default() -> Self {
        Self {
            hair: Hair::default(),
            eyes: Eyes::default(),
            mouth: NONE.to_string(),
        }
    }
}

impl Default for Hair {
    fn default() -> Self {
        Self {
            hair_color: NONE.to_string(),
            hat_color: NONE.to_string(),
            hat_color2: NONE.to_string(),
            hair_type: NONE.to_string(),
        }
    }
}

impl Default for Eyes {
    fn default() -> Self {
        Self {
            eye_color: NONE.to_string(),
            eye_type: NONE.to_string(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self {
            neck: NONE.to_string(),
            shirt: Shirt::default(),
        }
    }
}

impl Default for Shirt {
    fn default() -> Self {
        Self {
            shirt_color: NONE.to_string(),
            shirt_type: NONE.to_string(),
        }
    }
}

impl Default for Extra {
    fn default() -> Self {
        Self { glasses: Glasses::default() }
    }
}

impl Default for Glasses {
    fn default() -> Self {
        Self {
            primary_color: NONE.to_string(),
            secondary_color: NONE.to_string(),
            glasses_type: NONE.to_string(),
        }
    }
}

impl Default for Look {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            head: Head::default(),
            body: Body::default(),
            extra: Extra::default(),
            background_color: NONE.to_string(),
        }
    }
}

impl Look {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, field: LookField) -> &str {
        match field {
            LookField::SkinColor => &self.skin.color,
            LookField::HairColor => &self.head.hair.hair_color,
            LookField::HatColor => &self.head.hair.hat_color,
            LookField::HatColor2 => &self.head.hair.hat_color2,
            LookField::HairType => &self.head.hair.hair_type,
            LookField::EyeColor => &self.head.eyes.eye_color,
            LookField::EyeType => &self.head.eyes.eye_type,
            LookField::Mouth => &self.head.mouth,
            LookField::Neck => &self.body.neck,
            LookField::ShirtColor => &self.body.shirt.shirt_color,
            LookField::ShirtType => &self.body.shirt.shirt_type,
            LookField::GlassesPrimaryColor => &self.extra.glasses.primary_color,
            LookField::GlassesSecondaryColor => &self.extra.glasses.secondary_color,
            LookField::GlassesType => &self.extra.glasses.glasses_type,
            LookField::BackgroundColor => &self.background_color,
        }
    }

    pub fn set(&mut self, field: LookField, value: impl Into<String>) {
        let slot = match field {
            LookField::SkinColor => &mut self.skin.color,
            LookField::HairColor => &mut self.head.hair.hair_color,
            LookField::HatColor => &mut self.head.hair.hat_color,
            LookField::HatColor2 => &mut self.head.hair.hat_color2,
            LookField::HairType => &mut self.head.hair.hair_type,
            LookField::EyeColor => &mut self.head.eyes.eye_color,
            LookField::EyeType => &mut self.head.eyes.eye_type,
            LookField::Mouth => &mut self.head.mouth,
            LookField::Neck => &mut self.body.neck,
            LookField::ShirtColor => &mut self.body.shirt.shirt_color,
            LookField::ShirtType => &mut self.body.shirt.shirt_type,
            LookField::GlassesPrimaryColor => &mut self.extra.glasses.primary_color,
            LookField::GlassesSecondaryColor => &mut self.extra.glasses.secondary_color,
            LookField::GlassesType => &mut self.extra.glasses.glasses_type,
            LookField::BackgroundColor => &mut self.background_color,
        };
        *slot = value.into();
    }
}

/// Addresses one leaf field of a `Look`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LookField {
    SkinColor,
    HairColor,
    HatColor,
    HatColor2,
    HairType,
    EyeColor,
    EyeType,
    Mouth,
    Neck,
    ShirtColor,
    ShirtType,
    GlassesPrimaryColor,
    GlassesSecondaryColor,
    GlassesType,
    BackgroundColor,
}

impl LookField {
    pub const ALL: [LookField; 15] = [
        LookField::SkinColor,
        LookField::HairColor,
        LookField::HatColor,
        LookField::HatColor2,
        LookField::HairType,
        LookField::EyeColor,
        LookField::EyeType,
        LookField::Mouth,
        LookField::Neck,
        LookField::ShirtColor,
        LookField::ShirtType,
        LookField::GlassesPrimaryColor,
        LookField::GlassesSecondaryColor,
        LookField::GlassesType,
        LookField::BackgroundColor,
    ];

    /// Variant namespace used by the part catalog, `None` for color fields
    pub fn part_prefix(&self) -> Option<&'static str> {
        match self {
            LookField::HairType => Some("hair"),
            LookField::EyeType => Some("eyes"),
            LookField::Mouth => Some("mouth"),
            LookField::Neck => Some("neck"),
            LookField::ShirtType => Some("shirt"),
            LookField::GlassesType => Some("glasses"),
            _ => None,
        }
    }

    pub fn from_part_prefix(prefix: &str) -> Option<LookField> {
        LookField::ALL
            .iter()
            .copied()
            .find(|f| f.part_prefix() == Some(prefix))
    }
}

impl fmt::Display for LookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_look_has_no_unset_fields() {
        let look = Look::default();
        for field in LookField::ALL {
            assert_eq!(look.get(field), NONE, "{} should default to none", field);
        }
    }

    #[test]
    fn test_set_and_get_address_same_slot() {
        let mut look = Look::default();
        look.set(LookField::GlassesSecondaryColor, "#00c3c2");
        assert_eq!(look.extra.glasses.secondary_color, "#00c3c2");
        assert_eq!(look.get(LookField::GlassesSecondaryColor), "#00c3c2");
        assert_eq!(look.get(LookField::GlassesPrimaryColor), NONE);
    }

    #[test]
    fn test_part_prefix_lookup() {
        assert_eq!(LookField::from_part_prefix("shirt"), Some(LookField::ShirtType));
        assert_eq!(LookField::from_part_prefix("eyes"), Some(LookField::EyeType));
        assert_eq!(LookField::from_part_prefix("skin"), None);
    }

    #[test]
    fn test_json_nesting() {
        let json = serde_json::to_value(Look::default()).unwrap();
        assert_eq!(json["head"]["hair"]["hair_type"], "none");
        assert_eq!(json["extra"]["glasses"]["secondary_color"], "none");
        assert_eq!(json["background_color"], "none");
    }
}
