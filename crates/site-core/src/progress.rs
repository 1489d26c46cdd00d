//! Scroll position to `[0, 1]` progress mapping.
//!
//! A section's progress runs from 0 when its top reaches the scroll origin to
//! 1 once `window * height` further pixels have been scrolled. The
//! [`ScrollProgressTracker`] drives every fly-away card on a page from one
//! list of measured sections.

use crate::config::{ProgressWindow, SmoothingConfig};
use crate::easing::{clamp01, Easing};
use crate::transform::{fly_away, CardTransform, Direction};

const MIN_WINDOW: f64 = 1e-6;

/// Layout box of a tracked element, in document pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSection {
    pub top: f64,
    pub height: f64,
}

impl ScrollSection {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Section from an element's `offsetTop` chain (element first, then each
    /// offset parent) and its `offsetHeight`. Offsets describe the layout box,
    /// so transforms applied to the element do not move the section.
    pub fn from_offsets(offset_tops: impl IntoIterator<Item = f64>, height: f64) -> Self {
        let top: f64 = offset_tops.into_iter().filter(|t| t.is_finite()).sum();
        Self::new(top, height)
    }
}

/// Map `scroll_y` to the section's progress. Never NaN, always in `[0, 1]`.
pub fn section_progress(scroll_y: f64, section: ScrollSection, window: ProgressWindow) -> f64 {
    let height = if section.height.is_finite() {
        section.height.max(1.0)
    } else {
        1.0
    };
    let span = height * window.window.max(MIN_WINDOW);
    let start = section.top + window.start_offset * height;
    clamp01((scroll_y - start) / span)
}

/// Same as [`section_progress`] with an easing curve applied on top.
pub fn eased_progress(
    scroll_y: f64,
    section: ScrollSection,
    window: ProgressWindow,
    easing: Easing,
) -> f64 {
    easing.apply(section_progress(scroll_y, section, window))
}

/// Per-frame approach toward a target progress, faster on the way back so
/// cards re-settle quickly when the user scrolls up.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressSmoother {
    value: f64,
    config: SmoothingConfig,
}

impl ProgressSmoother {
    pub fn new(config: SmoothingConfig) -> Self {
        Self { value: 0.0, config }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Jump straight to `target` (used on first measurement so cards do not
    /// animate in from 0 when the page loads mid-scroll).
    pub fn reset(&mut self, target: f64) {
        self.value = clamp01(target);
    }

    /// Advance one frame; returns true while still moving.
    pub fn step(&mut self, target: f64) -> bool {
        let target = clamp01(target);
        let k = if target > self.value {
            self.config.rise
        } else {
            self.config.fall
        };
        self.value = clamp01(self.value + (target - self.value) * k);
        if (target - self.value).abs() < self.config.snap_epsilon {
            self.value = target;
            return false;
        }
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Idle,
    Down,
    Up,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    section: ScrollSection,
    direction: Direction,
    target: f64,
    smoother: ProgressSmoother,
}

/// Progress for a list of sections, each with its own exit direction.
#[derive(Clone, Debug)]
pub struct ScrollProgressTracker {
    tracked: Vec<Tracked>,
    window: ProgressWindow,
    easing: Easing,
    last_scroll_y: Option<f64>,
    scroll_direction: ScrollDirection,
}

impl ScrollProgressTracker {
    pub fn new(directions: Vec<Direction>, window: ProgressWindow, smoothing: SmoothingConfig) -> Self {
        let tracked = directions
            .into_iter()
            .map(|direction| Tracked {
                section: ScrollSection::default(),
                direction,
                target: 0.0,
                smoother: ProgressSmoother::new(smoothing),
            })
            .collect();
        Self {
            tracked,
            window,
            easing: Easing::Linear,
            last_scroll_y: None,
            scroll_direction: ScrollDirection::Idle,
        }
    }

    /// `count` sections alternating left, right, left, ...
    pub fn alternating(count: usize, window: ProgressWindow, smoothing: SmoothingConfig) -> Self {
        Self::new(
            (0..count).map(Direction::alternating).collect(),
            window,
            smoothing,
        )
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Store a fresh layout measurement. Out-of-range indices are ignored.
    pub fn measure(&mut self, index: usize, section: ScrollSection) {
        if let Some(t) = self.tracked.get_mut(index) {
            t.section = section;
        }
    }

    /// Recompute target progress for every section and return it.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<f64> {
        let first = self.last_scroll_y.is_none();
        self.scroll_direction = match self.last_scroll_y {
            Some(prev) if scroll_y > prev => ScrollDirection::Down,
            Some(prev) if scroll_y < prev => ScrollDirection::Up,
            _ => ScrollDirection::Idle,
        };
        self.last_scroll_y = Some(scroll_y);
        let (window, easing) = (self.window, self.easing);
        self.tracked
            .iter_mut()
            .map(|t| {
                t.target = eased_progress(scroll_y, t.section, window, easing);
                if first {
                    t.smoother.reset(t.target);
                }
                t.target
            })
            .collect()
    }

    /// Advance every smoother one frame; true while any is still moving.
    pub fn tick(&mut self) -> bool {
        let mut moving = false;
        for t in &mut self.tracked {
            moving |= t.smoother.step(t.target);
        }
        moving
    }

    pub fn targets(&self) -> Vec<f64> {
        self.tracked.iter().map(|t| t.target).collect()
    }

    pub fn smoothed(&self) -> Vec<f64> {
        self.tracked.iter().map(|t| t.smoother.value()).collect()
    }

    /// Transforms for the current smoothed progress values.
    pub fn transforms(&self) -> Vec<CardTransform> {
        self.tracked
            .iter()
            .map(|t| fly_away(t.direction, t.smoother.value()))
            .collect()
    }

    pub fn last_scroll_y(&self) -> Option<f64> {
        self.last_scroll_y
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }
}
