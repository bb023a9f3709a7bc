//! Data models for the catalog.
//!
//! - [`Character`]: a person appearing on screen
//! - [`Picture`]: either a [`Movie`] or a [`TvShow`]
//! - [`Season`] / [`Episode`]: the structure of a TV show
//! - [`CharacterId`] / [`PictureId`]: stable identifiers used as table keys

mod character;
mod picture;
mod types;

pub use character::Character;
pub use picture::{Episode, Movie, Picture, Season, TvShow};
pub use types::{CharacterId, PictureId, PictureKind};
