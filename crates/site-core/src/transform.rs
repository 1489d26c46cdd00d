//! The fly-away exit curve shared by every card-style element.

use crate::constants::{FLY_ROTATE_DEG, FLY_SCALE_LOSS, FLY_TRANSLATE_X_VW, FLY_TRANSLATE_Y_PX};
use crate::easing::clamp01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    /// Even indices exit left, odd indices exit right.
    #[inline]
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_x_vw: f64,
    pub translate_y_px: f64,
    pub rotate_deg: f64,
    pub scale: f64,
}

impl CardTransform {
    pub const IDENTITY: CardTransform = CardTransform {
        translate_x_vw: 0.0,
        translate_y_px: 0.0,
        rotate_deg: 0.0,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.3}vw, {:.3}px) rotate({:.3}deg) scale({:.4})",
            self.translate_x_vw, self.translate_y_px, self.rotate_deg, self.scale
        )
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Map progress to the card's exit transform. `progress` is clamped to `[0, 1]`.
pub fn fly_away(direction: Direction, progress: f64) -> CardTransform {
    let p = clamp01(progress);
    let sign = direction.sign();
    CardTransform {
        translate_x_vw: sign * p * FLY_TRANSLATE_X_VW,
        translate_y_px: FLY_TRANSLATE_Y_PX * p,
        rotate_deg: sign * FLY_ROTATE_DEG * p,
        scale: 1.0 - FLY_SCALE_LOSS * p,
    }
}

/// `clip-path` revealing an element from the top as progress grows.
pub fn clip_reveal(progress: f64) -> String {
    let hidden = (1.0 - clamp01(progress)) * 100.0;
    format!("inset(0 0 {:.2}% 0)", hidden)
}

/// Cards fade over the last half of their exit.
pub fn opacity_for(progress: f64) -> f64 {
    let p = clamp01(progress);
    if p <= 0.5 {
        1.0
    } else {
        1.0 - (p - 0.5) * 2.0
    }
}
