use procgen_core::config::{GeometryParams, ShapeKind, SLIDERS};
use procgen_core::error::ProcgenError;
use procgen_core::math::Axis;

#[test]
fn test_presets() {
    let cyl = GeometryParams::default();
    assert_eq!(cyl.shape, ShapeKind::Cylinder);
    assert_eq!((cyl.count_x, cyl.count_y), (2, 2));
    assert_eq!(cyl.rotation_x, 45.0);
    assert_eq!(cyl.primitive_count(), 6);

    let cap = GeometryParams::preset(ShapeKind::Capsule);
    assert_eq!(cap.radius, 10.0);
    assert_eq!(cap.cap_subdivisions, 10);
    assert_eq!(cap.primitive_count(), 2);
    assert!(cap.validate().is_ok());
}

#[test]
fn test_shape_from_name() {
    assert_eq!(ShapeKind::from_name("capsule"), Some(ShapeKind::Capsule));
    assert_eq!(ShapeKind::from_name("cylinder"), Some(ShapeKind::Cylinder));
    assert_eq!(ShapeKind::from_name("cone"), None);
}

#[test]
fn test_slider_clamps_and_snaps() {
    let mut p = GeometryParams::default();
    p.set_slider("x", 0.0).unwrap();
    assert_eq!(p.count_x, 1);
    p.set_slider("y", 12.4).unwrap();
    assert_eq!(p.count_y, 10);
    p.set_slider("radius", 7.6).unwrap();
    assert_eq!(p.radius, 8.0);
    p.set_slider("rotation_x", 123.4).unwrap();
    assert_eq!(p.rotation_x, 123.4);
    p.set_slider("rotation_y", 400.0).unwrap();
    assert_eq!(p.rotation_y, 270.0);
    p.set_slider("radial_segments", 2.0).unwrap();
    assert_eq!(p.radial_segments, 4);
}

#[test]
fn test_slider_rejects_unknown_and_nan() {
    let mut p = GeometryParams::default();
    let before = p.clone();
    assert!(matches!(
        p.set_slider("height", 3.0),
        Err(ProcgenError::UnknownParameter(ref n)) if n == "height"
    ));
    assert!(matches!(
        p.set_slider("radius", f32::NAN),
        Err(ProcgenError::InvalidParameter { name: "radius", .. })
    ));
    assert_eq!(p, before);
}

#[test]
fn test_every_slider_accepts_its_range() {
    for slider in SLIDERS {
        let mut p = GeometryParams::default();
        p.set_slider(slider.name, slider.min).unwrap();
        p.set_slider(slider.name, slider.max).unwrap();
    }
}

#[test]
fn test_json_round_trip_and_validation() {
    let json = r#"{
        "shape": "capsule",
        "radius": 4.0,
        "extent": 6.0,
        "radial_segments": 12,
        "cap_subdivisions": 3,
        "rotation_x": 30.0,
        "rotation_y": 15.0,
        "count_x": 3,
        "count_y": 2
    }"#;
    let p = GeometryParams::from_json(json).unwrap();
    assert_eq!(p.shape, ShapeKind::Capsule);
    assert_eq!(p.count_x, 3);

    let zero = json.replace("\"count_y\": 2", "\"count_y\": 0");
    assert!(matches!(
        GeometryParams::from_json(&zero),
        Err(ProcgenError::ZeroAxisCount { axis: Axis::Y })
    ));
    assert!(matches!(
        GeometryParams::from_json("{"),
        Err(ProcgenError::Config(_))
    ));
}

#[test]
fn test_validation_rules() {
    let bad_radius = GeometryParams { radius: 0.0, ..GeometryParams::default() };
    assert!(matches!(
        bad_radius.validate(),
        Err(ProcgenError::InvalidParameter { name: "radius", .. })
    ));
    let bad_segments = GeometryParams { radial_segments: 2, ..GeometryParams::default() };
    assert!(bad_segments.validate().is_err());
    let bad_caps = GeometryParams { cap_subdivisions: 0, ..GeometryParams::capsule() };
    assert!(bad_caps.validate().is_err());
    // cylinders ignore cap subdivisions
    let cyl = GeometryParams { cap_subdivisions: 0, ..GeometryParams::cylinder() };
    assert!(cyl.validate().is_ok());
}

#[test]
fn test_json_upper_bounds() {
    let base = GeometryParams::capsule();
    let over_segments = GeometryParams { radial_segments: u32::MAX, ..base.clone() };
    let json = serde_json::to_string(&over_segments).unwrap();
    assert!(matches!(
        GeometryParams::from_json(&json),
        Err(ProcgenError::InvalidParameter { name: "radial_segments", .. })
    ));

    let over_caps = GeometryParams { cap_subdivisions: u32::MAX, ..base.clone() };
    let json = serde_json::to_string(&over_caps).unwrap();
    assert!(matches!(
        GeometryParams::from_json(&json),
        Err(ProcgenError::InvalidParameter { name: "cap_subdivisions", .. })
    ));

    let over_count = GeometryParams { count_x: 100_000, ..base };
    let json = serde_json::to_string(&over_count).unwrap();
    assert!(matches!(
        GeometryParams::from_json(&json),
        Err(ProcgenError::InvalidParameter { name: "count_x", .. })
    ));
}

#[test]
fn test_upper_bounds_are_inclusive() {
    use procgen_core::config::{MAX_AXIS_COUNT, MAX_CAP_SUBDIVISIONS, MAX_RADIAL_SEGMENTS};
    let p = GeometryParams {
        radial_segments: MAX_RADIAL_SEGMENTS,
        cap_subdivisions: MAX_CAP_SUBDIVISIONS,
        count_x: MAX_AXIS_COUNT,
        count_y: MAX_AXIS_COUNT,
        ..GeometryParams::capsule()
    };
    assert!(p.validate().is_ok());
}
