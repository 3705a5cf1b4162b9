use desk_pet::entities::Point;
use desk_pet::geometry::{line_angle, point_distance};

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// ── point_distance ────────────────────────────────────────────────────────────

#[test]
fn distance_three_four_five() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(close(point_distance(a, b), 5.0));
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.5, -7.0);
    assert_eq!(point_distance(p, p), 0.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-3.0, 9.0);
    let b = Point::new(14.0, 2.0);
    assert_eq!(point_distance(a, b), point_distance(b, a));
}

// ── line_angle ────────────────────────────────────────────────────────────────

#[test]
fn angle_right_is_zero() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert!(close(line_angle(a, b), 0.0));
}

#[test]
fn angle_down_is_positive_half_pi() {
    // y grows downward on screen, so "down" is +PI/2
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 10.0);
    assert!(close(line_angle(a, b), FRAC_PI_2));
}

#[test]
fn angle_up_is_negative_half_pi() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, -10.0);
    assert!(close(line_angle(a, b), -FRAC_PI_2));
}

#[test]
fn angle_left_is_pi() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(-10.0, 0.0);
    assert!(close(line_angle(a, b), PI));
}

#[test]
fn angle_down_right_diagonal() {
    let a = Point::new(5.0, 5.0);
    let b = Point::new(15.0, 15.0);
    assert!(close(line_angle(a, b), FRAC_PI_4));
}

#[test]
fn angle_stays_in_principal_range() {
    let origin = Point::new(0.0, 0.0);
    for i in 0..360 {
        let theta = (i as f32).to_radians();
        let target = Point::new(theta.cos() * 100.0, theta.sin() * 100.0);
        let angle = line_angle(origin, target);
        assert!(angle > -PI - 1e-6 && angle <= PI + 1e-6, "angle {angle}");
    }
}
