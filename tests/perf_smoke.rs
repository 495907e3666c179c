use pixel_scatter_engine::SceneCore;

#[test]
fn perf_smoke_step() {
    let mut scene = SceneCore::new(1280.0, 720.0);
    scene
        .load_image_rgba(64, 36, vec![128; 64 * 36 * 4])
        .expect("valid rgba");
    scene.enable_perf_metrics(true);
    scene.set_pointer(Some(pixel_scatter_engine::Vec2::new(300.0, 200.0)));
    scene.step();
    scene.render();
    let stats = scene.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.render_ms() >= 0.0);
    assert!(stats.disturbed_count() > 0);
}
