//! Tunable constants for the slideshows

use std::time::Duration;
use serde::{Serialize, Deserialize};

use crate::ConfigError;
use crate::easing::Easing;

/// Configuration for a physics-drag slide navigator
///
/// The damping and decay factors are tuned by feel rather than derived from
/// a physical model, so they are exposed here instead of being hard-coded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Period of the recurring autoplay timer
    pub autoplay_interval_ms: u64,

    /// Quiet period after the last interaction before autoplay restarts
    pub resume_delay_ms: u64,

    /// Duration of the animated slide transition
    pub transition_ms: u64,

    /// Easing curve of the animated slide transition
    pub easing: Easing,

    /// Offset (percent of width) past which a released drag commits
    pub commit_threshold: f32,

    /// Velocity (percent per frame) below which inertia stops
    pub velocity_floor: f32,

    /// Per-frame velocity multiplier during inertia
    pub inertia_decay: f32,

    /// Offset multiplier when dragging past the first or last slide
    pub edge_resistance: f32,

    /// Sample interval velocity is normalised against
    pub frame_ms: f32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 4000,
            resume_delay_ms: 3000,
            transition_ms: 600,
            easing: Easing::STANDARD,
            commit_threshold: 30.0,
            velocity_floor: 0.1,
            inertia_decay: 0.92,
            edge_resistance: 0.3,
            frame_ms: 16.0,
        }
    }
}

impl NavigatorConfig {
    /// Parse a configuration from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Check that every constant is usable by the inertia loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_ms("autoplay_interval_ms", self.autoplay_interval_ms)?;
        positive_ms("resume_delay_ms", self.resume_delay_ms)?;
        positive("commit_threshold", self.commit_threshold)?;
        positive("velocity_floor", self.velocity_floor)?;
        positive("frame_ms", self.frame_ms)?;

        // A decay of 1.0 or more never lets velocity reach the floor
        if !(self.inertia_decay > 0.0 && self.inertia_decay < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "inertia_decay",
                value: self.inertia_decay,
                min: 0.0,
                max: 1.0,
            });
        }

        if !(0.0..=1.0).contains(&self.edge_resistance) {
            return Err(ConfigError::OutOfRange {
                field: "edge_resistance",
                value: self.edge_resistance,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }
}

/// Configuration for a fade slideshow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FadeConfig {
    pub autoplay_interval_ms: u64,
    pub resume_delay_ms: u64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 6000,
            resume_delay_ms: 3000,
        }
    }
}

impl FadeConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn resume_delay(&self) -> Duration {
        Duration::from_millis(self.resume_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive_ms("autoplay_interval_ms", self.autoplay_interval_ms)?;
        positive_ms("resume_delay_ms", self.resume_delay_ms)
    }
}

fn positive_ms(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NotPositive { field });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Written this way so NaN is rejected too
    if !(value > 0.0) {
        return Err(ConfigError::NotPositive { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NavigatorConfig::default().validate().is_ok());
        assert!(FadeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = NavigatorConfig::from_json(r#"{ "inertia_decay": 0.9 }"#).unwrap();
        assert_eq!(config.inertia_decay, 0.9);
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert_eq!(config.commit_threshold, 30.0);
    }

    #[test]
    fn test_rejects_runaway_decay() {
        let err = NavigatorConfig::from_json(r#"{ "inertia_decay": 1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "inertia_decay", .. }));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = FadeConfig {
            autoplay_interval_ms: 0,
            ..FadeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "autoplay_interval_ms" })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            NavigatorConfig::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
