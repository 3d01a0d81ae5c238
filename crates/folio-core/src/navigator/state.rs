use serde::{Serialize, Deserialize};

/// Autoplay bounce direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Index delta of one step in this direction
    pub fn step(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Mutable state of one mounted navigator
///
/// `current_index` only changes through a slide transition, which also
/// zeroes `drag_offset` and `velocity`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigatorState {
    /// Index of the active slide
    pub current_index: usize,

    /// Displacement applied to every slide, in percent of container width
    pub drag_offset: f32,

    /// Percent of container width per ~frame
    pub velocity: f32,

    pub is_dragging: bool,

    pub direction: Direction,
}

impl NavigatorState {
    pub fn at_rest(current_index: usize) -> Self {
        Self {
            current_index,
            ..Self::default()
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.drag_offset == 0.0 && self.velocity == 0.0
    }

    pub(crate) fn reset_motion(&mut self) {
        self.drag_offset = 0.0;
        self.velocity = 0.0;
    }
}
