use procgen_core::app::{AppContext, FrameTick, ForestApp, FxaaPass, LatticeApp, Viewport};
use procgen_core::config::{ForestConfig, GeometryParams};
use procgen_core::error::ProcgenError;
use procgen_core::lattice::SyncOutcome;

#[test]
fn test_viewport_validation() {
    assert!(matches!(
        Viewport::new(0, 600, 1.0),
        Err(ProcgenError::InvalidViewport { width: 0, height: 600 })
    ));
    assert!(Viewport::new(800, 600, 0.0).is_err());
    assert!(Viewport::new(800, 600, 2.0).is_ok());
}

#[test]
fn test_fxaa_resolution() {
    let vp = Viewport::new(800, 600, 2.0).unwrap();
    let fxaa = FxaaPass::new(&vp);
    assert!((fxaa.resolution.x - 1.0 / 1600.0).abs() < 1e-9);
    assert!((fxaa.resolution.y - 1.0 / 1200.0).abs() < 1e-9);
}

#[test]
fn test_resize_updates_camera_and_pass() {
    let mut ctx = AppContext::new(Viewport::new(800, 600, 1.0).unwrap());
    assert!((ctx.camera.aspect - 800.0 / 600.0).abs() < 1e-6);
    ctx.resize(Viewport::new(500, 1000, 1.0).unwrap());
    assert!((ctx.camera.aspect - 0.5).abs() < 1e-6);
    assert!((ctx.fxaa.resolution.x - 1.0 / 500.0).abs() < 1e-9);
    assert!(ctx.camera.projection().is_finite());
    assert!(ctx.camera.view().is_finite());
}

#[test]
fn test_lattice_app_follows_params() {
    let ctx = AppContext::new(Viewport::new(800, 600, 1.0).unwrap());
    let mut app = LatticeApp::new(GeometryParams::default()).unwrap();

    app.tick(&ctx).unwrap();
    assert_eq!(app.last_sync, SyncOutcome::UpdatedInPlace);

    app.params.set_slider("rotation_y", 90.0).unwrap();
    app.tick(&ctx).unwrap();
    assert_eq!(app.last_sync, SyncOutcome::UpdatedInPlace);

    app.params.set_slider("x", 5.0).unwrap();
    app.tick(&ctx).unwrap();
    assert_eq!(app.last_sync, SyncOutcome::Rebuilt);
    assert_eq!(app.lattice.len(), 5 + 10);
}

#[test]
fn test_forest_app_ticks() {
    let mut ctx = AppContext::new(Viewport::new(800, 600, 1.0).unwrap());
    let config = ForestConfig { number_trees: 2, ..ForestConfig::default() };
    let mut app = ForestApp::new(config).unwrap();
    let before = app.forest.segment_count();
    for _ in 0..3 {
        ctx.advance();
        app.tick(&ctx).unwrap();
    }
    assert_eq!(ctx.frame, 3);
    assert_eq!(app.forest.segment_count(), before);
    assert_eq!(app.style.ground_y, -20.0);
}
