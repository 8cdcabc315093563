use super::traits::ConfigSection;
use crate::engines::preview::default_preview_look;
use crate::error::PepeError;
use crate::types::{Look, LookField};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub base: Look,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base: default_preview_look(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl ConfigSection for PreviewConfig {
    fn section_name() -> &'static str {
        "preview"
    }

    fn validate(&self) -> Result<(), PepeError> {
        for field in LookField::ALL {
            let value = self.base.get(field);
            let ok = match field.part_prefix() {
                Some(prefix) => {
                    value == crate::types::NONE
                        || value
                            .split_once('>')
                            .is_some_and(|(ns, name)| ns == prefix && !name.is_empty())
                }
                None => value == crate::types::NONE || is_hex_color(value),
            };
            if !ok {
                return Err(PepeError::Configuration(format!(
                    "Preview base {} has invalid value {:?}",
                    field, value
                )));
            }
        }
        Ok(())
    }
}
