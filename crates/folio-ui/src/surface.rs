//! Slide surface backed by egui painting state

use std::time::{Duration, Instant};
use serde::{Serialize, Deserialize};
use folio_core::navigator::{Control, SlideSurface, Transition};
use folio_core::Easing;
use tracing::debug;

/// Content of one slide
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideCard {
    pub title: String,
    #[serde(default)]
    pub caption: String,
    /// Background colour as RGB
    pub color: [u8; 3],
}

/// Time-based tween of a slide offset
#[derive(Debug, Clone)]
struct OffsetTween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl OffsetTween {
    fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Instant::now(),
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.easing.lerp(self.from, self.to, t)
    }

    fn is_running(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) < self.duration
    }

    /// Head for `target` from wherever the slide currently is
    fn retarget(&mut self, target: f32, transition: Transition, now: Instant) {
        match transition {
            Transition::Immediate => *self = Self::settled(target),
            Transition::Eased { duration, easing } => {
                *self = Self {
                    from: self.value_at(now),
                    to: target,
                    started_at: now,
                    duration,
                    easing,
                };
            }
        }
    }
}

#[derive(Debug, Clone)]
struct SlideVisual {
    card: SlideCard,
    active: bool,
    offset: OffsetTween,
}

/// Surface that records slideshow output for painting
#[derive(Debug, Clone)]
pub struct EguiSurface {
    slides: Vec<SlideVisual>,
    width: f32,
    prev_disabled: Option<bool>,
    next_disabled: Option<bool>,
    grabbing: bool,
}

impl EguiSurface {
    pub fn new(cards: Vec<SlideCard>, with_controls: bool) -> Self {
        let controls = with_controls.then_some(false);
        Self {
            slides: cards
                .into_iter()
                .map(|card| SlideVisual {
                    card,
                    active: false,
                    offset: OffsetTween::settled(0.0),
                })
                .collect(),
            width: 0.0,
            prev_disabled: controls,
            next_disabled: controls,
            grabbing: false,
        }
    }

    /// Refresh the container width from the current layout
    ///
    /// Returns whether the width changed.
    pub fn set_width(&mut self, width: f32) -> bool {
        if self.width == width {
            return false;
        }
        debug!(from = self.width, to = width, "slideshow width changed");
        self.width = width;
        true
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&SlideCard> {
        self.slides.get(index).map(|slide| &slide.card)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slides.get(index).map_or(false, |slide| slide.active)
    }

    /// Displayed offset in percent of width, with any tween applied
    pub fn offset_at(&self, index: usize, now: Instant) -> f32 {
        self.slides
            .get(index)
            .map_or(0.0, |slide| slide.offset.value_at(now))
    }

    /// Whether any slide is still tweening
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slides.iter().any(|slide| slide.offset.is_running(now))
    }

    /// Disabled flag of a control, `None` when it is absent
    pub fn control_disabled(&self, control: Control) -> Option<bool> {
        match control {
            Control::Prev => self.prev_disabled,
            Control::Next => self.next_disabled,
        }
    }

    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }
}

impl SlideSurface for EguiSurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn container_width(&self) -> f32 {
        self.width
    }

    fn has_control(&self, control: Control) -> bool {
        self.control_disabled(control).is_some()
    }

    fn set_slide_offset(&mut self, index: usize, percent: f32, transition: Transition) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.offset.retarget(percent, transition, Instant::now());
        }
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.active = active;
        }
    }

    fn set_control_disabled(&mut self, control: Control, disabled: bool) {
        let slot = match control {
            Control::Prev => &mut self.prev_disabled,
            Control::Next => &mut self.next_disabled,
        };
        if let Some(flag) = slot {
            *flag = disabled;
        }
    }

    fn set_grabbing(&mut self, grabbing: bool) {
        self.grabbing = grabbing;
    }
}
