pub mod resolver;
pub mod rules;

pub use resolver::{resolve_look_conflicts, ConflictResolver};
pub use rules::{canonical_rules, is_simple_eyes, is_simple_mouth, LookRule};
