//! Filesystem-backed assets and table configuration.

pub mod assets;
pub mod load;

pub use assets::*;
pub use load::*;
