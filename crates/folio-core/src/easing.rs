//! Easing curves for animated slide transitions

use serde::{Serialize, Deserialize};

/// Animation easing function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic slow start and slow end
    EaseInOut,
    /// Custom cubic bezier curve through (0,0), (x1,y1), (x2,y2), (1,1)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The standard slide curve, `cubic-bezier(0.4, 0, 0.2, 1)`
    pub const STANDARD: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

    /// Apply the easing function to normalized time (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_sample(t, x1, y1, x2, y2),
        }
    }

    /// Interpolate between two values at normalized time `t`
    pub fn lerp(&self, from: f32, to: f32, t: f32) -> f32 {
        from + (to - from) * self.apply(t)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::STANDARD
    }
}

/// Sample a cubic bezier curve at time t
fn cubic_bezier_sample(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson to find the curve parameter whose x equals t
    let mut guess = t;
    for _ in 0..8 {
        let x = cubic_bezier_value(guess, x1, x2) - t;
        if x.abs() < 1e-4 {
            break;
        }
        let dx = cubic_bezier_derivative(guess, x1, x2);
        if dx.abs() < 1e-4 {
            break;
        }
        guess -= x / dx;
    }
    cubic_bezier_value(guess.clamp(0.0, 1.0), y1, y2)
}

fn cubic_bezier_value(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn cubic_bezier_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}
