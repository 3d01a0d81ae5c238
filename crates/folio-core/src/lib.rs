//! Core functionality for the portfolio slideshows
//!
//! This crate provides the slide navigator state machine, its drag/inertia
//! integration and autoplay timers, independent of any rendering host.

pub mod config;
pub mod easing;
pub mod fade;
pub mod navigator;
pub mod registry;
pub mod schedule;

mod autoplay;

use thiserror::Error;

// Re-export commonly used types
pub use config::{FadeConfig, NavigatorConfig};
pub use easing::Easing;
pub use fade::FadeSlideshow;
pub use navigator::{
    Control, Direction, InputEvent, MemorySurface, NavigatorContext, NavigatorState,
    SlideChange, SlideChangeCause, SlideNavigator, SlideSubscriber, SlideSurface, Transition,
};
pub use registry::{Slideshow, SlideshowId, SlideshowRegistry};
pub use schedule::{Fired, Scheduler, TimerId, TimerKind, TimerQueue};

/// Errors raised while loading or validating slideshow configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must lie between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}
