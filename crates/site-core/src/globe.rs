//! Globe rotation state machine and per-frame scene assembly.
//!
//! [`GlobeController`] owns the rotation and moves it by auto-rotation,
//! pointer drags, or a tween that centres a selected pin. [`GlobeScene`]
//! turns the rotation plus land geometry and pins into projected shapes;
//! painting them is left to the frontend.

use crate::config::{DragConfig, GlobeConfig};
use crate::constants::{GRATICULE_PRECISION_DEG, GRATICULE_STEP_DEG, LAND_ERROR_MESSAGE};
use crate::data::{project_pins, Pin, ProjectedPin};
use crate::drag::DragController;
use crate::easing::{lerp, shortest_angle_delta, Easing};
use crate::geojson::LandGeometry;
use crate::projection::{graticule, GeoPoint, Orthographic, Rotation};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobeMode {
    AutoRotate,
    Dragging,
    Tweening,
    /// Tween finished on a pin; stays put until deselect or drag.
    Focused,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GlobeEvent {
    PinFocused(String),
}

#[derive(Clone, Debug)]
struct Tween {
    from: [f64; 2],
    to: [f64; 2],
    start_ms: f64,
    duration_ms: f64,
    pin_id: String,
}

#[derive(Clone, Debug)]
pub struct GlobeController {
    config: GlobeConfig,
    rotation: Rotation,
    mode: GlobeMode,
    drag: DragController,
    drag_start: Rotation,
    tween: Option<Tween>,
    selected: Option<String>,
}

impl Default for GlobeController {
    fn default() -> Self {
        Self::new(GlobeConfig::default())
    }
}

impl GlobeController {
    pub fn new(config: GlobeConfig) -> Self {
        let [lambda, phi] = config.initial_rotation;
        let rotation = Rotation::new(lambda, phi);
        Self {
            drag: DragController::new(DragConfig {
                resume_delay_ms: config.resume_delay_ms,
                ..DragConfig::default()
            }),
            config,
            rotation,
            mode: GlobeMode::AutoRotate,
            drag_start: rotation,
            tween: None,
            selected: None,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn mode(&self) -> GlobeMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// True when auto-rotation would move the globe at `now_ms`.
    pub fn is_auto_rotating(&self, now_ms: f64) -> bool {
        self.mode == GlobeMode::AutoRotate && !self.drag.is_suspended(now_ms)
    }

    /// Advance one animation frame.
    pub fn tick(&mut self, dt_sec: f64, now_ms: f64) -> Option<GlobeEvent> {
        match self.mode {
            GlobeMode::AutoRotate => {
                if self.is_auto_rotating(now_ms) && dt_sec.is_finite() && dt_sec > 0.0 {
                    self.rotation
                        .rotate_by(self.config.auto_rotate_deg_per_sec * dt_sec, 0.0);
                }
                None
            }
            GlobeMode::Tweening => self.step_tween(now_ms),
            GlobeMode::Dragging | GlobeMode::Focused => None,
        }
    }

    fn step_tween(&mut self, now_ms: f64) -> Option<GlobeEvent> {
        let tw = self.tween.as_ref()?;
        let t = if tw.duration_ms > 0.0 {
            (now_ms - tw.start_ms) / tw.duration_ms
        } else {
            1.0
        };
        let e = Easing::EaseInOutCubic.apply(t);
        self.rotation
            .set(lerp(tw.from[0], tw.to[0], e), lerp(tw.from[1], tw.to[1], e));
        if t < 1.0 {
            return None;
        }
        let id = self.tween.take().map(|tw| tw.pin_id)?;
        self.mode = GlobeMode::Focused;
        self.selected = Some(id.clone());
        log::info!("[globe] focused pin {}", id);
        Some(GlobeEvent::PinFocused(id))
    }

    /// Start rotating the globe toward `pin`. Ignored while dragging.
    pub fn select_pin(&mut self, pin: &Pin, now_ms: f64) -> bool {
        if self.mode == GlobeMode::Dragging {
            return false;
        }
        let target = Rotation::centering(pin.location());
        let from = self.rotation.as_array();
        let to = [
            from[0] + shortest_angle_delta(from[0], target.lambda()),
            target.phi(),
        ];
        self.selected = None;
        self.tween = Some(Tween {
            from,
            to,
            start_ms: now_ms,
            duration_ms: self.config.tween_ms,
            pin_id: pin.id.clone(),
        });
        self.mode = GlobeMode::Tweening;
        true
    }

    /// Clear the selection and resume auto-rotation.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.tween = None;
        if self.mode != GlobeMode::Dragging {
            self.mode = GlobeMode::AutoRotate;
        }
    }

    /// Pointer pressed on the globe (not on a pin). Starts a drag and drops
    /// any selection or tween in progress.
    pub fn pointer_down(&mut self, pointer_id: i32, pos: DVec2, now_ms: f64) -> bool {
        if !self.drag.pointer_down(pointer_id, pos, now_ms) {
            return false;
        }
        self.tween = None;
        self.selected = None;
        self.drag_start = self.rotation;
        self.mode = GlobeMode::Dragging;
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, pos: DVec2, now_ms: f64) -> Option<Rotation> {
        let delta = self.drag.pointer_move(pointer_id, pos, now_ms)?;
        let k = self.config.drag_sensitivity;
        self.rotation.set(
            self.drag_start.lambda() + delta.x * k,
            self.drag_start.phi() - delta.y * k,
        );
        Some(self.rotation)
    }

    /// Release; auto-rotation resumes after the grace delay. Returns false
    /// for a pointer that does not own the drag.
    pub fn pointer_up(&mut self, pointer_id: i32, now_ms: f64) -> bool {
        if self.drag.pointer_up(pointer_id, now_ms).is_none() {
            return false;
        }
        self.mode = GlobeMode::AutoRotate;
        true
    }

    pub fn cancel(&mut self, pointer_id: i32, now_ms: f64) -> bool {
        self.pointer_up(pointer_id, now_ms)
    }
}

/// Projected shapes for one frame, in paint order.
#[derive(Clone, Debug, Default)]
pub struct SceneFrame {
    pub center: DVec2,
    pub radius: f64,
    pub graticule: Vec<SmallVec<[DVec2; 32]>>,
    /// One entry per visible polygon, each a list of closed rings.
    pub land: Vec<Vec<Vec<DVec2>>>,
    pub pins: Vec<ProjectedPin>,
    pub error: Option<&'static str>,
}

/// Everything the globe draws: projection, land, graticule and pins.
#[derive(Clone, Debug)]
pub struct GlobeScene {
    pub projection: Orthographic,
    land: Option<LandGeometry>,
    land_failed: bool,
    graticule: Vec<Vec<GeoPoint>>,
    pins: Vec<Pin>,
}

impl GlobeScene {
    pub fn new(pins: Vec<Pin>) -> Self {
        Self {
            projection: Orthographic::default(),
            land: None,
            land_failed: false,
            graticule: graticule(GRATICULE_STEP_DEG, GRATICULE_PRECISION_DEG),
            pins,
        }
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn pin(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    pub fn land(&self) -> Option<&LandGeometry> {
        self.land.as_ref()
    }

    /// Store the outcome of the single land geometry load.
    pub fn set_land<E: std::fmt::Display>(&mut self, result: Result<LandGeometry, E>) {
        match result {
            Ok(land) => {
                self.land = Some(land);
                self.land_failed = false;
            }
            Err(e) => {
                log::error!("[globe] land geometry unavailable: {}", e);
                self.land = None;
                self.land_failed = true;
            }
        }
    }

    pub fn error(&self) -> Option<&'static str> {
        self.land_failed.then_some(LAND_ERROR_MESSAGE)
    }

    pub fn resize(&mut self, css_width: f64, css_height: f64) {
        self.projection.fit(css_width, css_height);
    }

    pub fn frame(&mut self, rotation: Rotation) -> SceneFrame {
        self.projection.rotation = rotation;
        let proj = &self.projection;
        let graticule = self
            .graticule
            .iter()
            .flat_map(|line| proj.visible_runs(line))
            .collect();
        let land = self
            .land
            .iter()
            .flat_map(|l| l.polygons.iter())
            .filter_map(|poly| {
                let rings: Vec<Vec<DVec2>> =
                    poly.iter().filter_map(|r| proj.project_ring(r)).collect();
                (!rings.is_empty()).then_some(rings)
            })
            .collect();
        SceneFrame {
            center: proj.translate,
            radius: proj.radius(),
            graticule,
            land,
            pins: project_pins(&self.pins, proj),
            error: self.error(),
        }
    }
}
