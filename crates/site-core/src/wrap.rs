//! Wrapping for a track that holds two copies of its items side by side.
//!
//! Shifting the track by exactly one copy width is invisible, so the offset
//! can always be folded back into `(-w/2, w/2]` where `w` is one copy width.

/// Wrap `offset` into `(-loop_width/2, loop_width/2]`.
///
/// Non-positive or non-finite widths, and non-finite offsets, yield 0.
pub fn wrap_offset(offset: f64, loop_width: f64) -> f64 {
    if loop_width <= 0.0 || !loop_width.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    let half = loop_width / 2.0;
    let k = ((offset - half) / loop_width).ceil();
    let mut wrapped = offset - k * loop_width;
    if wrapped <= -half {
        wrapped += loop_width;
    } else if wrapped > half {
        wrapped -= loop_width;
    }
    wrapped
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoopTrack {
    offset: f64,
    loop_width: f64,
}

impl LoopTrack {
    pub fn new(loop_width: f64) -> Self {
        Self {
            offset: 0.0,
            loop_width: loop_width.max(0.0),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn loop_width(&self) -> f64 {
        self.loop_width
    }

    /// Update from the measured width of the whole (duplicated) track.
    /// Returns true if the loop width changed.
    pub fn set_track_width(&mut self, track_width: f64) -> bool {
        let w = (track_width / 2.0).max(0.0);
        if (w - self.loop_width).abs() < 0.5 {
            return false;
        }
        self.loop_width = w;
        self.offset = wrap_offset(self.offset, w);
        true
    }

    pub fn set_offset(&mut self, offset: f64) {
        self.offset = wrap_offset(offset, self.loop_width);
    }

    pub fn advance(&mut self, delta: f64) {
        self.set_offset(self.offset + delta);
    }

    /// Wrapped view of `offset + extra` without mutating the track.
    pub fn preview(&self, extra: f64) -> f64 {
        wrap_offset(self.offset + extra, self.loop_width)
    }
}
