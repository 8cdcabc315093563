use crate::types::{Look, LookField};

/// Base trait for all gene expressors
///
/// An expressor turns the value read from one locus into a trait of the
/// `Look`. It must be total over every value the locus can hold and it only
/// ever overwrites its own target field.
pub trait Expressor: Send + Sync {
    /// Name used by locus table configuration
    fn alias(&self) -> &'static str;

    /// Field written by `express`
    fn target(&self) -> LookField;

    /// Variant ids this expressor can produce, empty for color expressors
    fn variants(&self) -> &[&'static str] {
        &[]
    }

    fn express(&self, value: u32, look: &mut Look);
}
