use super::rules::{canonical_rules, LookRule};
use crate::types::Look;

/// Runs an ordered rule chain once over a look.
///
/// Each rule sees the look as left by the rules before it. There is no
/// fixpoint loop: one pass is the whole resolution.
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    rules: Vec<LookRule>,
}

impl ConflictResolver {
    pub fn new(rules: Vec<LookRule>) -> Self {
        Self { rules }
    }

    pub fn canonical() -> Self {
        Self::new(canonical_rules())
    }

    pub fn rules(&self) -> &[LookRule] {
        &self.rules
    }

    /// Resolve in place, returns the names of the rules that fired
    pub fn resolve(&self, look: &mut Look) -> Vec<&'static str> {
        let mut fired = Vec::new();
        for rule in &self.rules {
            if rule.fire(look) {
                log::debug!("Conflict rule fired: {}", rule.name);
                fired.push(rule.name);
            }
        }
        fired
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Resolves conflicts between parts with the canonical rule chain
pub fn resolve_look_conflicts(look: &mut Look) {
    ConflictResolver::canonical().resolve(look);
}
