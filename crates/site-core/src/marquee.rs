use crate::config::MarqueeConfig;
use crate::constants::MARQUEE_COAST_STOP_PX_PER_SEC;
use crate::drag::DragController;
use crate::wrap::LoopTrack;
use glam::DVec2;

/// Auto-scrolling, draggable, seamlessly looping testimonial track.
///
/// A release hands the drag velocity over as a coast that decays
/// exponentially; auto-scroll picks up again once the resume delay ends.
#[derive(Clone, Debug, Default)]
pub struct MarqueeController {
    config: MarqueeConfig,
    track: LoopTrack,
    drag: DragController,
    coast_px_per_sec: f64,
}

impl MarqueeController {
    pub fn new(config: MarqueeConfig) -> Self {
        Self {
            config,
            track: LoopTrack::default(),
            drag: DragController::new(config.drag),
            coast_px_per_sec: 0.0,
        }
    }

    /// Feed the measured width of the duplicated track.
    pub fn set_track_width(&mut self, track_width: f64) -> bool {
        self.track.set_track_width(track_width)
    }

    pub fn loop_width(&self) -> f64 {
        self.track.loop_width()
    }

    /// Persistent (released) offset, always wrapped.
    pub fn base_offset(&self) -> f64 {
        self.track.offset()
    }

    /// Offset to render this frame, including any live drag.
    pub fn offset(&self) -> f64 {
        self.track.preview(self.drag.delta().x)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_auto_scrolling(&self, now_ms: f64) -> bool {
        !self.drag.is_suspended(now_ms)
    }

    /// Horizontal smoothed drag velocity, px/ms.
    pub fn velocity(&self) -> f64 {
        self.drag.velocity().x
    }

    /// Remaining release momentum, px/s.
    pub fn coast(&self) -> f64 {
        self.coast_px_per_sec
    }

    pub fn tick(&mut self, dt_sec: f64, now_ms: f64) {
        if self.drag.is_dragging() || !dt_sec.is_finite() || dt_sec <= 0.0 {
            return;
        }
        if self.coast_px_per_sec != 0.0 {
            self.track.advance(self.coast_px_per_sec * dt_sec);
            let tau = self.config.coast_tau_sec.max(1e-3);
            self.coast_px_per_sec *= (-dt_sec / tau).exp();
            if self.coast_px_per_sec.abs() < MARQUEE_COAST_STOP_PX_PER_SEC {
                self.coast_px_per_sec = 0.0;
            }
        }
        if self.is_auto_scrolling(now_ms) {
            self.track.advance(self.config.speed_px_per_sec * dt_sec);
        }
    }

    /// Grab the track; any coast from a previous release stops.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f64, now_ms: f64) -> bool {
        if !self.drag.pointer_down(pointer_id, DVec2::new(x, 0.0), now_ms) {
            return false;
        }
        self.coast_px_per_sec = 0.0;
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f64, now_ms: f64) -> Option<f64> {
        self.drag
            .pointer_move(pointer_id, DVec2::new(x, 0.0), now_ms)
            .map(|_| self.offset())
    }

    /// End the drag; the wrapped drag delta becomes part of the base offset
    /// and the release velocity starts a coast. Returns false for a pointer
    /// that does not own the drag.
    pub fn pointer_up(&mut self, pointer_id: i32, now_ms: f64) -> bool {
        let Some(release) = self.drag.pointer_up(pointer_id, now_ms) else {
            return false;
        };
        self.track.advance(release.delta.x);
        let max = self.config.coast_max_px_per_sec.abs();
        self.coast_px_per_sec = (release.velocity.x * 1000.0).clamp(-max, max);
        log::debug!(
            "[marquee] released after {:.1}px, base={:.1}, coast={:.0}px/s",
            release.delta.x,
            self.track.offset(),
            self.coast_px_per_sec
        );
        true
    }

    pub fn cancel(&mut self, pointer_id: i32, now_ms: f64) -> bool {
        self.pointer_up(pointer_id, now_ms)
    }
}
