//! Deterministic pixel-art avatars.
//!
//! A name is hashed into a [`Palette`], then a fixed face layout is painted on a
//! 32x32 grid and serialized as SVG.

pub mod color;
pub mod composer;

pub use color::{derive_color, Color, Palette};
pub use composer::{compose_avatar, Avatar, DrawCommand, Part};
