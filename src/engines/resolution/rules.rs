use crate::types::{Look, NONE};

pub const SIMPLE_EYES: &[&str] = &[
    "eyes>colored_eyes",
    "eyes>closed_eyes",
    "eyes>crying_eyes",
    "eyes>half_closed_eyes",
    "eyes>illuminati_eye",
    "eyes>red_eyes",
    "eyes>small_eyes",
    "eyes>smug_eyes",
];

pub const SIMPLE_MOUTHS: &[&str] = &[
    "mouth>basic_lips",
    "mouth>happy_lips",
    "mouth>smug_lips",
    "mouth>young_lips",
];

pub const DEFAULT_EYES: &str = "eyes>colored_eyes";
pub const DEFAULT_MOUTH: &str = "mouth>basic_lips";
pub const DARTH_SKIN: &str = "#000000";
pub const PEPEMON_SKIN: &str = "#fef135";

pub fn is_simple_eyes(id: &str) -> bool {
    SIMPLE_EYES.contains(&id)
}

pub fn is_simple_mouth(id: &str) -> bool {
    SIMPLE_MOUTHS.contains(&id)
}

/// "If the look matches `condition`, force the fields `apply` writes."
#[derive(Clone, Copy)]
pub struct LookRule {
    pub name: &'static str,
    pub condition: fn(&Look) -> bool,
    pub apply: fn(&mut Look),
}

impl LookRule {
    /// Apply the rule if it matches, returns whether it fired
    pub fn fire(&self, look: &mut Look) -> bool {
        if (self.condition)(look) {
            (self.apply)(look);
            true
        } else {
            false
        }
    }
}

impl std::fmt::Debug for LookRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookRule").field("name", &self.name).finish()
    }
}

fn hair_is(look: &Look, ids: &[&str]) -> bool {
    ids.contains(&look.head.hair.hair_type.as_str())
}

fn eyes_are(look: &Look, ids: &[&str]) -> bool {
    ids.contains(&look.head.eyes.eye_type.as_str())
}

fn glasses_are(look: &Look, ids: &[&str]) -> bool {
    ids.contains(&look.extra.glasses.glasses_type.as_str())
}

fn simplify_eyes(look: &mut Look) {
    if !is_simple_eyes(&look.head.eyes.eye_type) {
        look.head.eyes.eye_type = DEFAULT_EYES.to_string();
    }
}

fn simplify_mouth(look: &mut Look) {
    if !is_simple_mouth(&look.head.mouth) {
        look.head.mouth = DEFAULT_MOUTH.to_string();
    }
}

fn clear(slot: &mut String) {
    *slot = NONE.to_string();
}

/// Rules in the order they must run
pub fn canonical_rules() -> Vec<LookRule> {
    vec![
        LookRule {
            name: "ghandi",
            condition: |l| eyes_are(l, &["eyes>ghandi"]),
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                clear(&mut l.head.hair.hair_type);
                clear(&mut l.body.shirt.shirt_type);
                clear(&mut l.head.mouth);
            },
        },
        LookRule {
            name: "darth_pepe",
            condition: |l| l.body.shirt.shirt_type == "shirt>darth_pepe",
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                clear(&mut l.head.hair.hair_type);
                clear(&mut l.body.neck);
                l.skin.color = DARTH_SKIN.to_string();
            },
        },
        LookRule {
            name: "pirate_hat",
            condition: |l| glasses_are(l, &["glasses>pirate_hat"]),
            apply: |l| clear(&mut l.head.hair.hair_type),
        },
        LookRule {
            name: "terrorist",
            condition: |l| hair_is(l, &["hair>terrorist"]),
            apply: |l| {
                clear(&mut l.head.mouth);
                clear(&mut l.extra.glasses.glasses_type);
            },
        },
        LookRule {
            name: "pharaoh",
            condition: |l| hair_is(l, &["hair>pharaoh"]),
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                clear(&mut l.body.neck);
                simplify_eyes(l);
            },
        },
        LookRule {
            name: "egyptian_hat",
            condition: |l| hair_is(l, &["hair>egyptian_hat"]),
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                simplify_eyes(l);
            },
        },
        LookRule {
            name: "eyes_over_glasses",
            condition: |l| eyes_are(l, &["eyes>future_robot_eyes", "eyes>woke_eyes"]),
            apply: |l| clear(&mut l.extra.glasses.glasses_type),
        },
        LookRule {
            name: "glasses_over_eyes",
            condition: |l| glasses_are(l, &["glasses>explosion_goggles", "glasses>vr_set"]),
            apply: |l| clear(&mut l.head.eyes.eye_type),
        },
        LookRule {
            name: "hair_over_glasses",
            condition: |l| {
                hair_is(l, &["hair>frankenstein", "hair>knife_through_head", "hair>rollers"])
            },
            apply: |l| clear(&mut l.extra.glasses.glasses_type),
        },
        LookRule {
            // sweat drops take the hair slot
            name: "monkas",
            condition: |l| eyes_are(l, &["eyes>monkas_eye"]),
            apply: |l| clear(&mut l.head.hair.hair_type),
        },
        LookRule {
            name: "beard_needs_simple_mouth",
            condition: |l| hair_is(l, &["hair>chaplin", "hair>bun_beard", "hair>mcaffee"]),
            apply: simplify_mouth,
        },
        LookRule {
            name: "pepemon",
            condition: |l| l.body.shirt.shirt_type == "shirt>pepemon",
            apply: |l| {
                clear(&mut l.head.hair.hair_type);
                clear(&mut l.body.neck);
                l.skin.color = PEPEMON_SKIN.to_string();
                // red cheek dot only lines up with simple lips
                simplify_mouth(l);
            },
        },
        LookRule {
            name: "feels_birthday",
            condition: |l| l.head.mouth == "mouth>feels_birthday",
            apply: |l| clear(&mut l.head.hair.hair_type),
        },
        LookRule {
            name: "pacman",
            condition: |l| l.head.mouth == "mouth>pacman",
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                clear(&mut l.head.eyes.eye_type);
                clear(&mut l.head.hair.hair_type);
            },
        },
        LookRule {
            name: "full_head_cover",
            condition: |l| hair_is(l, &["hair>nun", "hair>samurai"]),
            apply: |l| {
                clear(&mut l.extra.glasses.glasses_type);
                clear(&mut l.body.shirt.shirt_type);
            },
        },
    ]
}
