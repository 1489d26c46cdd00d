// Host-side tests for the fly-away transform curve.

use site_core::*;

const EPS: f64 = 1e-9;

#[test]
fn zero_progress_is_identity() {
    for d in [Direction::Left, Direction::Right] {
        assert_eq!(fly_away(d, 0.0), CardTransform::IDENTITY);
    }
    assert_eq!(CardTransform::default(), CardTransform::IDENTITY);
}

#[test]
fn full_progress_reaches_the_exit_pose() {
    for d in [Direction::Left, Direction::Right] {
        let t = fly_away(d, 1.0);
        assert!((t.scale - 0.6).abs() < EPS);
        assert!((t.translate_x_vw.abs() - 120.0).abs() < EPS);
        assert!((t.rotate_deg.abs() - 20.0).abs() < EPS);
        assert!((t.translate_y_px + 80.0).abs() < EPS);
        assert_eq!(t.translate_x_vw.signum(), d.sign());
        assert_eq!(t.rotate_deg.signum(), d.sign());
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(fly_away(Direction::Left, -2.0), CardTransform::IDENTITY);
    assert_eq!(fly_away(Direction::Left, f64::NAN), CardTransform::IDENTITY);
    assert_eq!(fly_away(Direction::Right, 7.0), fly_away(Direction::Right, 1.0));
}

#[test]
fn curve_is_monotonic_and_continuous() {
    for d in [Direction::Left, Direction::Right] {
        let mut prev = fly_away(d, 0.0);
        for i in 1..=1000 {
            let t = fly_away(d, i as f64 / 1000.0);
            // monotonic per field in the direction's sign
            assert!(d.sign() * (t.translate_x_vw - prev.translate_x_vw) >= 0.0);
            assert!(d.sign() * (t.rotate_deg - prev.rotate_deg) >= 0.0);
            assert!(t.translate_y_px <= prev.translate_y_px);
            assert!(t.scale <= prev.scale);
            // small input step gives a small output step
            assert!((t.translate_x_vw - prev.translate_x_vw).abs() <= 0.121);
            assert!((t.scale - prev.scale).abs() <= 0.0005);
            prev = t;
        }
    }
}

#[test]
fn same_input_same_output() {
    let a = fly_away(Direction::Right, 0.37);
    let b = fly_away(Direction::Right, 0.37);
    assert_eq!(a, b);
    assert_eq!(a.to_css(), b.to_css());
}

#[test]
fn css_output_uses_expected_units() {
    let css = fly_away(Direction::Right, 0.5).to_css();
    assert_eq!(css, "translate(60.000vw, -40.000px) rotate(10.000deg) scale(0.8000)");
    assert_eq!(
        CardTransform::IDENTITY.to_css(),
        "translate(0.000vw, 0.000px) rotate(0.000deg) scale(1.0000)"
    );
}

#[test]
fn direction_helpers() {
    assert_eq!(Direction::alternating(0), Direction::Left);
    assert_eq!(Direction::alternating(1), Direction::Right);
    assert_eq!(Direction::alternating(4), Direction::Left);
    assert_eq!(Direction::parse(" right "), Some(Direction::Right));
    assert_eq!(Direction::parse("l"), Some(Direction::Left));
    assert_eq!(Direction::parse("up"), None);
}

#[test]
fn clip_reveal_and_opacity() {
    assert_eq!(clip_reveal(0.0), "inset(0 0 100.00% 0)");
    assert_eq!(clip_reveal(1.0), "inset(0 0 0.00% 0)");
    assert_eq!(clip_reveal(0.25), "inset(0 0 75.00% 0)");
    assert_eq!(opacity_for(0.0), 1.0);
    assert_eq!(opacity_for(0.5), 1.0);
    assert!((opacity_for(0.75) - 0.5).abs() < EPS);
    assert_eq!(opacity_for(1.0), 0.0);
}
