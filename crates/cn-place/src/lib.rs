//! `cn-place`: the generic place abstraction that contact networks build on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`kind`]      | `PlaceKind` subtype tag                                  |
//! | [`place`]     | `Place` (label, kind, anchor, roster), `ClosureWindow`   |
//! | [`container`] | `Container` trait: the read-only view transmission uses |
//! | [`error`]     | `PlaceError`, `PlaceResult<T>`                           |
//!
//! Networks hold a `Place` rather than extending one: the transmission kernel
//! depends only on the [`Container`] view, never on household, school or
//! workplace specifics.

pub mod container;
pub mod error;
pub mod kind;
pub mod place;

#[cfg(test)]
mod tests;

pub use container::Container;
pub use error::{PlaceError, PlaceResult};
pub use kind::PlaceKind;
pub use place::{ClosureWindow, Place};
