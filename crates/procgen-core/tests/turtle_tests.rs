use glam::Vec3;
use procgen_core::error::ProcgenError;
use procgen_core::math::approx_eq;
use procgen_core::turtle::{interpret, Turtle, TurtleConfig};

#[test]
fn test_two_forward_steps() {
    let config = TurtleConfig::default().with_step(Vec3::new(0.0, 15.0, 0.0));
    let lines = interpret("ad", Vec3::ZERO, &config).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].start, Vec3::ZERO);
    assert_eq!(lines[0].end, Vec3::new(0.0, 15.0, 0.0));
    assert_eq!(lines[1].start, Vec3::new(0.0, 15.0, 0.0));
    assert_eq!(lines[1].end, Vec3::new(0.0, 30.0, 0.0));
}

#[test]
fn test_restore_returns_to_branch_point() {
    let p = Vec3::new(3.0, -20.0, 7.0);
    let mut turtle = Turtle::new(p, TurtleConfig::default());
    let mut drawn = Vec::new();
    for (i, c) in "bafa".chars().enumerate() {
        if let Some(seg) = turtle.step(c, i).unwrap() {
            drawn.push(seg);
        }
        if i == 2 {
            assert_eq!(turtle.state.position, p, "restore should return to P");
            assert_eq!(turtle.depth(), 0);
        }
    }
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].start, p);
    assert_eq!(drawn[1].start, p);
}

#[test]
fn test_restore_brings_back_heading() {
    let lines = interpret("bcfa", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(approx_eq(lines[0].end, Vec3::new(0.0, 15.0, 0.0), 1e-5));
}

#[test]
fn test_turns_about_z() {
    let angle = std::f32::consts::PI / 7.0;
    let left = interpret("ca", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    let expected = Vec3::new(-15.0 * angle.sin(), 15.0 * angle.cos(), 0.0);
    assert!(approx_eq(left[0].end, expected, 1e-4), "got {:?}", left[0].end);

    let right = interpret("ea", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    let expected = Vec3::new(15.0 * angle.sin(), 15.0 * angle.cos(), 0.0);
    assert!(approx_eq(right[0].end, expected, 1e-4), "got {:?}", right[0].end);

    let back = interpret("cea", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    assert!(approx_eq(back[0].end, Vec3::new(0.0, 15.0, 0.0), 1e-4));
}

#[test]
fn test_step_length_preserved_by_turns() {
    let lines = interpret("cccaeeeeea", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    for seg in &lines {
        assert!((seg.length() - 15.0).abs() < 1e-4, "segment length {}", seg.length());
    }
}

#[test]
fn test_unbalanced_restore_fails() {
    let err = interpret("abaff", Vec3::ZERO, &TurtleConfig::default()).unwrap_err();
    assert!(
        matches!(err, ProcgenError::UnbalancedRestore { position: 4 }),
        "unexpected error {:?}",
        err
    );
}

#[test]
fn test_unknown_symbols_ignored() {
    let lines = interpret("gxa h", Vec3::ZERO, &TurtleConfig::default()).unwrap();
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_custom_angle() {
    let config = TurtleConfig::default().with_angle(std::f32::consts::FRAC_PI_2);
    let lines = interpret("ca", Vec3::ZERO, &config).unwrap();
    assert!(approx_eq(lines[0].end, Vec3::new(-15.0, 0.0, 0.0), 1e-4));
}
