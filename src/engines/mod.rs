pub mod decoding;
pub mod preview;
pub mod resolution;
