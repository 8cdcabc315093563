pub mod previewer;

pub use previewer::{default_preview_look, PartPreviewer};
