//! egui host for the portfolio slideshows
//!
//! This crate renders slideshows from `folio-core` with egui and translates
//! egui pointer, hover and key input into slideshow input events.

pub mod slideshow_view;
pub mod surface;
pub mod theme;

/// Re-export commonly used types
pub use slideshow_view::SlideshowView;
pub use surface::{EguiSurface, SlideCard};
pub use theme::{Theme, apply_theme};
