//! Card table model. Keep this crate free of IO and platform concerns: assets
//! come in through [`AssetSource`] and pixels go out through [`Surface`].

pub mod card;
pub mod cards;
pub mod config;
pub mod events;
pub mod geometry;
pub mod group;
pub mod holder;
pub mod interaction;
pub mod pile;
pub mod rng;
pub mod table;
pub mod visual;

pub use card::*;
pub use cards::*;
pub use config::*;
pub use events::*;
pub use geometry::*;
pub use group::*;
pub use holder::*;
pub use interaction::*;
pub use pile::*;
pub use rng::*;
pub use table::*;
pub use visual::*;
