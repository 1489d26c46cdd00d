// Host-side tests for the globe controller and scene assembly.

use glam::DVec2;
use site_core::constants::LAND_ERROR_MESSAGE;
use site_core::*;

const EPS: f64 = 1e-6;
const MOUSE: i32 = 1;

fn pin(id: &str, lon: f64, lat: f64) -> Pin {
    Pin {
        id: id.to_string(),
        name: id.to_string(),
        lat,
        lon,
        image: None,
        description: None,
    }
}

fn globe_at(lambda: f64, phi: f64) -> GlobeController {
    GlobeController::new(GlobeConfig {
        initial_rotation: [lambda, phi],
        ..GlobeConfig::default()
    })
}

fn assert_lat_ok(g: &GlobeController) {
    let phi = g.rotation().phi();
    assert!((-90.0..=90.0).contains(&phi), "latitude out of range: {phi}");
}

#[test]
fn auto_rotation_turns_longitude_only() {
    let cfg = GlobeConfig::default();
    let mut g = globe_at(0.0, -20.0);
    assert_eq!(g.mode(), GlobeMode::AutoRotate);
    assert_eq!(g.tick(1.0, 0.0), None);
    assert!((g.rotation().lambda() - cfg.auto_rotate_deg_per_sec).abs() < EPS);
    assert_eq!(g.rotation().phi(), -20.0);
}

#[test]
fn auto_rotation_keeps_longitude_bounded() {
    let mut g = globe_at(0.0, 0.0);
    for i in 0..10_000 {
        g.tick(0.1, i as f64);
        let l = g.rotation().lambda();
        assert!((-180.0..180.0).contains(&l));
    }
}

#[test]
fn drag_rotates_and_clamps_latitude() {
    let cfg = GlobeConfig::default();
    let mut g = globe_at(-10.0, -20.0);
    assert!(g.pointer_down(MOUSE, DVec2::new(100.0, 100.0), 0.0));
    assert_eq!(g.mode(), GlobeMode::Dragging);

    let r = g.pointer_move(MOUSE, DVec2::new(140.0, 100.0), 10.0).unwrap();
    assert!((r.lambda() - (-10.0 + 40.0 * cfg.drag_sensitivity)).abs() < EPS);
    assert!((r.phi() + 20.0).abs() < EPS);

    g.pointer_move(MOUSE, DVec2::new(100.0, -10_000.0), 20.0);
    assert_eq!(g.rotation().phi(), 90.0);
    g.pointer_move(MOUSE, DVec2::new(100.0, 10_000.0), 30.0);
    assert_eq!(g.rotation().phi(), -90.0);

    // frames during a drag leave the rotation alone
    let before = g.rotation();
    g.tick(1.0, 40.0);
    assert_eq!(g.rotation(), before);
}

#[test]
fn only_the_dragging_pointer_can_release() {
    let mut g = globe_at(0.0, 0.0);
    assert!(g.pointer_down(MOUSE, DVec2::ZERO, 0.0));
    assert!(!g.pointer_down(2, DVec2::new(300.0, 0.0), 5.0));
    assert_eq!(g.pointer_move(2, DVec2::new(400.0, 0.0), 10.0), None);
    assert_eq!(g.rotation().lambda(), 0.0);
    assert!(!g.pointer_up(2, 20.0));
    assert!(!g.cancel(2, 21.0));
    assert_eq!(g.mode(), GlobeMode::Dragging);
    assert!(g.cancel(MOUSE, 30.0));
    assert_eq!(g.mode(), GlobeMode::AutoRotate);
}

#[test]
fn release_resumes_auto_rotation_after_grace_delay() {
    let cfg = GlobeConfig::default();
    let mut g = globe_at(0.0, 0.0);
    g.pointer_down(MOUSE, DVec2::ZERO, 0.0);
    g.pointer_move(MOUSE, DVec2::new(20.0, 0.0), 16.0);
    assert!(g.pointer_up(MOUSE, 100.0));
    assert_eq!(g.mode(), GlobeMode::AutoRotate);

    let held = g.rotation();
    g.tick(1.0, 100.0 + cfg.resume_delay_ms - 1.0);
    assert_eq!(g.rotation(), held);
    assert!(g.is_auto_rotating(100.0 + cfg.resume_delay_ms));
    g.tick(1.0, 100.0 + cfg.resume_delay_ms);
    assert!(g.rotation().lambda() > held.lambda());
}

#[test]
fn selecting_a_pin_tweens_it_to_the_centre() {
    let cfg = GlobeConfig::default();
    let target = pin("dubai", 55.27, 25.2);
    let mut g = globe_at(0.0, 0.0);
    assert!(g.select_pin(&target, 1000.0));
    assert_eq!(g.mode(), GlobeMode::Tweening);

    assert_eq!(g.tick(0.016, 1000.0 + cfg.tween_ms / 2.0), None);
    let mid = g.rotation();
    assert!(mid.lambda() < 0.0 && mid.lambda() > -55.27);
    assert_lat_ok(&g);

    let ev = g.tick(0.016, 1000.0 + cfg.tween_ms);
    assert_eq!(ev, Some(GlobeEvent::PinFocused("dubai".to_string())));
    assert_eq!(g.mode(), GlobeMode::Focused);
    assert_eq!(g.selected(), Some("dubai"));
    assert!((g.rotation().lambda() + 55.27).abs() < EPS);
    assert!((g.rotation().phi() + 25.2).abs() < EPS);

    // focused globe holds still
    let held = g.rotation();
    assert_eq!(g.tick(1.0, 5000.0), None);
    assert_eq!(g.rotation(), held);

    let proj = Orthographic::new(100.0, DVec2::new(50.0, 50.0), g.rotation());
    let (pos, visible) = proj.project_visible(target.location());
    assert!(visible);
    assert!((pos - DVec2::new(50.0, 50.0)).length() < 1e-4);
}

#[test]
fn tween_takes_the_short_way_round() {
    let cfg = GlobeConfig::default();
    let mut g = globe_at(170.0, 0.0);
    g.select_pin(&pin("p", 170.0, 0.0), 0.0); // target lambda -170
    g.tick(0.016, cfg.tween_ms / 2.0);
    let l = g.rotation().lambda();
    assert!(shortest_angle_delta(l, 180.0).abs() < EPS, "went the long way: {l}");
}

#[test]
fn deselect_and_drag_end_focus() {
    let cfg = GlobeConfig::default();
    let mut g = globe_at(0.0, 0.0);
    g.select_pin(&pin("a", 10.0, 10.0), 0.0);
    g.tick(0.016, cfg.tween_ms);
    assert_eq!(g.mode(), GlobeMode::Focused);
    g.deselect();
    assert_eq!(g.mode(), GlobeMode::AutoRotate);
    assert_eq!(g.selected(), None);

    g.select_pin(&pin("a", 10.0, 10.0), 0.0);
    g.tick(0.016, cfg.tween_ms);
    assert!(g.pointer_down(MOUSE, DVec2::ZERO, 2000.0));
    assert_eq!(g.mode(), GlobeMode::Dragging);
    assert_eq!(g.selected(), None);
    // no selection while dragging
    assert!(!g.select_pin(&pin("b", 0.0, 0.0), 2001.0));
}

#[test]
fn latitude_stays_bounded_on_every_write_path() {
    let mut g = globe_at(0.0, 95.0);
    assert_lat_ok(&g);
    let mut t = 0.0;
    for i in 0..200 {
        t += 16.0;
        match i % 5 {
            0 => {
                g.pointer_down(MOUSE, DVec2::new(0.0, 0.0), t);
            }
            1 => {
                let pos = DVec2::new(i as f64 * 7.0, (i as f64 - 100.0) * 50.0);
                g.pointer_move(MOUSE, pos, t);
            }
            2 => {
                g.pointer_up(MOUSE, t);
            }
            3 => {
                g.select_pin(&pin("p", i as f64, (i as f64 * 3.0) % 180.0 - 90.0), t);
            }
            _ => {
                g.tick(0.5, t + 2000.0);
            }
        }
        assert_lat_ok(&g);
    }
}

fn square_land(lon: f64, lat: f64) -> LandGeometry {
    LandGeometry {
        polygons: vec![vec![vec![
            GeoPoint::new(lon - 10.0, lat - 10.0),
            GeoPoint::new(lon + 10.0, lat - 10.0),
            GeoPoint::new(lon + 10.0, lat + 10.0),
            GeoPoint::new(lon - 10.0, lat + 10.0),
            GeoPoint::new(lon - 10.0, lat - 10.0),
        ]]],
    }
}

#[test]
fn failed_land_load_renders_sphere_only_with_message() {
    let mut scene = GlobeScene::new(default_pins());
    scene.resize(800.0, 600.0);
    scene.set_land::<String>(Err("network error".to_string()));
    let frame = scene.frame(Rotation::default());
    assert!(frame.land.is_empty());
    assert!(scene.land().is_none());
    assert_eq!(frame.error, Some(LAND_ERROR_MESSAGE));
    assert!(frame.radius > 0.0);
    assert_eq!(frame.center, DVec2::new(400.0, 300.0));
    assert!(!frame.graticule.is_empty());
    assert_eq!(frame.pins.len(), default_pins().len());
}

#[test]
fn loaded_land_is_culled_by_rotation() {
    let mut scene = GlobeScene::new(Vec::new());
    scene.resize(400.0, 400.0);
    assert_eq!(scene.frame(Rotation::default()).error, None);
    scene.set_land::<String>(Ok(square_land(0.0, 0.0)));
    let front = scene.frame(Rotation::centering(GeoPoint::new(0.0, 0.0)));
    assert_eq!(front.land.len(), 1);
    assert_eq!(front.error, None);
    let back = scene.frame(Rotation::centering(GeoPoint::new(180.0, 0.0)));
    assert!(back.land.is_empty());
}

#[test]
fn scene_pins_follow_visibility() {
    let pins = vec![pin("front", 0.0, 0.0), pin("back", 180.0, 0.0)];
    let mut scene = GlobeScene::new(pins);
    scene.resize(400.0, 400.0);
    let frame = scene.frame(Rotation::centering(GeoPoint::new(0.0, 0.0)));
    let front = frame.pins.iter().find(|p| p.id == "front").unwrap();
    let back = frame.pins.iter().find(|p| p.id == "back").unwrap();
    assert!(front.visible);
    assert!(!back.visible);
    assert!((front.x - 200.0).abs() < EPS && (front.y - 200.0).abs() < EPS);
    assert!(scene.pin("front").is_some());
    assert!(scene.pin("missing").is_none());
}
