//! Pointer drag tracking with smoothed velocity, shared by the globe and
//! the marquee.
//!
//! A session lives from pointer-down to pointer-up/cancel of the same
//! pointer. While it is live the owner's passive animation is suspended;
//! after release it stays suspended for `resume_delay_ms` so the hand-off
//! does not snap.
//!
//! Velocity is sampled over segments of at least `dead_zone_px` of travel,
//! so the estimate does not depend on how often the browser reports moves.
//! A pointer that stays inside the dead zone for `rest_ms` is resting: its
//! velocity decays toward zero instead.

use crate::config::DragConfig;
use glam::DVec2;

const MIN_DT_MS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub start: DVec2,
    pub start_offset: DVec2,
    pub last: DVec2,
    /// Position and time of the last velocity sample.
    pub sample: DVec2,
    pub sample_ms: f64,
    /// Smoothed velocity in px/ms.
    pub velocity: DVec2,
}

/// What a finished session hands back to its owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub delta: DVec2,
    /// px/ms; zero when the pointer rested before letting go.
    pub velocity: DVec2,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    config: DragConfig,
    base: DVec2,
    session: Option<DragSession>,
    resume_at_ms: Option<f64>,
}

impl DragController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn base(&self) -> DVec2 {
        self.base
    }

    pub fn set_base(&mut self, base: DVec2) {
        self.base = base;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    fn owned_session(&mut self, pointer_id: i32) -> Option<&mut DragSession> {
        self.session.as_mut().filter(|s| s.pointer_id == pointer_id)
    }

    /// Start a session. Returns false (and changes nothing) if one is live.
    pub fn pointer_down(&mut self, pointer_id: i32, pos: DVec2, now_ms: f64) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer_id,
            start: pos,
            start_offset: self.base,
            last: pos,
            sample: pos,
            sample_ms: now_ms,
            velocity: DVec2::ZERO,
        });
        self.resume_at_ms = None;
        true
    }

    /// Track a move of the session's pointer; returns the delta since
    /// pointer-down. Moves of any other pointer are ignored.
    pub fn pointer_move(&mut self, pointer_id: i32, pos: DVec2, now_ms: f64) -> Option<DVec2> {
        let config = self.config;
        let s = self.owned_session(pointer_id)?;
        s.last = pos;
        let travel = pos - s.sample;
        let elapsed = now_ms - s.sample_ms;
        if travel.length() >= config.dead_zone_px {
            let alpha = config.smoothing_alpha.clamp(0.0, 1.0);
            let instant = travel / elapsed.max(MIN_DT_MS);
            s.velocity = s.velocity * (1.0 - alpha) + instant * alpha;
            s.sample = pos;
            s.sample_ms = now_ms;
        } else if elapsed >= config.rest_ms {
            settle(s, &config, now_ms);
        }
        Some(pos - s.start)
    }

    /// End the session of `pointer_id`, folding its delta into the base
    /// offset. Returns `None` if that pointer does not own the session.
    pub fn pointer_up(&mut self, pointer_id: i32, now_ms: f64) -> Option<DragRelease> {
        let rest_ms = self.config.rest_ms;
        let s = *self.owned_session(pointer_id)?;
        self.session = None;
        let delta = s.last - s.start;
        let velocity = if now_ms - s.sample_ms >= rest_ms {
            DVec2::ZERO
        } else {
            s.velocity
        };
        self.base = s.start_offset + delta;
        self.resume_at_ms = Some(now_ms + self.config.resume_delay_ms);
        Some(DragRelease { delta, velocity })
    }

    /// Pointer cancel ends the session the same way as pointer-up.
    pub fn cancel(&mut self, pointer_id: i32, now_ms: f64) -> Option<DragRelease> {
        self.pointer_up(pointer_id, now_ms)
    }

    /// Delta of the live session, zero when idle.
    pub fn delta(&self) -> DVec2 {
        self.session.map(|s| s.last - s.start).unwrap_or(DVec2::ZERO)
    }

    pub fn offset(&self) -> DVec2 {
        self.base + self.delta()
    }

    pub fn velocity(&self) -> DVec2 {
        self.session.map(|s| s.velocity).unwrap_or(DVec2::ZERO)
    }

    /// True while dragging or inside the post-release grace period.
    pub fn is_suspended(&self, now_ms: f64) -> bool {
        self.session.is_some() || self.resume_at_ms.is_some_and(|t| now_ms < t)
    }
}

/// One decay step per rest period spent inside the dead zone.
fn settle(s: &mut DragSession, config: &DragConfig, now_ms: f64) {
    let alpha = config.smoothing_alpha.clamp(0.0, 1.0);
    let periods = ((now_ms - s.sample_ms) / config.rest_ms.max(MIN_DT_MS)).floor();
    s.velocity *= (1.0 - alpha).powf(periods);
    s.sample = s.last;
    s.sample_ms = now_ms;
}
