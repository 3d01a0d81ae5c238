//! Host document abstraction

use super::{Control, Transition};

/// The container, slides and controls a slideshow is mounted on
///
/// Slides are discovered once at mount time; the count must not change
/// afterwards.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;

    /// Slide already marked active by the host markup, if any
    fn marked_active(&self) -> Option<usize> {
        None
    }

    /// Container width in the same units as input positions
    fn container_width(&self) -> f32;

    /// Whether the optional control exists
    fn has_control(&self, control: Control) -> bool;

    /// Translate a slide horizontally by `percent` of the container width
    fn set_slide_offset(&mut self, index: usize, percent: f32, transition: Transition);

    fn set_slide_active(&mut self, index: usize, active: bool);

    /// Only called for controls that exist
    fn set_control_disabled(&mut self, control: Control, disabled: bool);

    /// Cursor hint: grabbing while a pointer drag is in progress
    fn set_grabbing(&mut self, _grabbing: bool) {}
}

/// In-memory surface for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub width: f32,
    pub offsets: Vec<f32>,
    pub transitions: Vec<Transition>,
    pub active: Vec<bool>,
    /// Disabled flag per control; `None` when the control is absent
    pub prev_disabled: Option<bool>,
    pub next_disabled: Option<bool>,
    pub grabbing: bool,
}

impl MemorySurface {
    /// Surface with `count` slides and both controls present
    pub fn new(count: usize, width: f32) -> Self {
        Self {
            width,
            offsets: vec![0.0; count],
            transitions: vec![Transition::Immediate; count],
            active: vec![false; count],
            prev_disabled: Some(false),
            next_disabled: Some(false),
            grabbing: false,
        }
    }

    pub fn without_controls(mut self) -> Self {
        self.prev_disabled = None;
        self.next_disabled = None;
        self
    }

    /// Pre-mark a slide active, as host markup may do
    pub fn with_active(mut self, index: usize) -> Self {
        if let Some(flag) = self.active.get_mut(index) {
            *flag = true;
        }
        self
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl SlideSurface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.active.len()
    }

    fn marked_active(&self) -> Option<usize> {
        self.active.iter().position(|active| *active)
    }

    fn container_width(&self) -> f32 {
        self.width
    }

    fn has_control(&self, control: Control) -> bool {
        match control {
            Control::Prev => self.prev_disabled.is_some(),
            Control::Next => self.next_disabled.is_some(),
        }
    }

    fn set_slide_offset(&mut self, index: usize, percent: f32, transition: Transition) {
        if let Some(offset) = self.offsets.get_mut(index) {
            *offset = percent;
            self.transitions[index] = transition;
        }
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active.get_mut(index) {
            *flag = active;
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
