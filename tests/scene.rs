//! Scene tests: bodies entering the water through the splash coupling

use std::f32::consts::PI;

use water_engine::render::{BODY_STRIDE, KIND_FLOAT, KIND_ROCK};
use water_engine::sim::splash::{self, Entry};
use water_engine::{Encoder, NullRenderer, Scene, WaterConfig, WaterWorld, Wave};

fn scene() -> Scene {
    let mut c = WaterConfig::default();
    c.smooth = false;
    Scene::new(c)
}

#[test]
fn test_body_below_surface_splashes_once() {
    let mut c = WaterConfig::for_screen(200.0, 400.0);
    c.rest_height = 300.0;
    c.smooth = false;
    let mut wave = Wave::new(&c);

    let mut splashed = false;
    let entry = Entry { impulse: 5.0, volume: Some(200.0) };
    let mut hits = 0;
    for _ in 0..100 {
        if splash::try_enter(&mut wave, &mut splashed, 70.0, 350.0, entry, true).is_some() {
            hits += 1;
        }
    }
    assert_eq!(hits, 1);
    assert_eq!(wave.rest_level(), 299.0);
    assert_eq!(wave.springs()[3].velocity, 5.0);
}

#[test]
fn test_sinking_rock_raises_level_once() {
    let mut scene = scene();
    assert!(scene.drop_rock(600.0, 0.0));
    let r = scene.rocks().r[0];
    let rest = scene.wave().rest_level();

    for _ in 0..600 {
        scene.tick();
    }

    assert!(scene.rocks().splashed[0]);
    let expected = rest - PI * r * r / 1200.0;
    assert_eq!(scene.wave().rest_level(), expected);
    // Rock ends on the floor
    assert!((scene.rocks().y[0] - (720.0 - r)).abs() < 1.0);
}

#[test]
fn test_volume_rise_can_be_disabled() {
    let mut scene = scene();
    scene.set_volume_rise(false);
    scene.drop_rock(300.0, 0.0);
    let rest = scene.wave().rest_level();
    for _ in 0..300 {
        scene.tick();
    }
    assert!(scene.rocks().splashed[0]);
    assert_eq!(scene.wave().rest_level(), rest);
}

#[test]
fn test_rocks_refused_without_physics() {
    let mut scene = scene();
    scene.set_physics(false);
    assert!(!scene.drop_rock(100.0, 100.0));
    assert_eq!(scene.rocks().len(), 0);

    scene.set_physics(true);
    assert!(scene.drop_rock(100.0, 100.0));
    assert_eq!(scene.rocks().len(), 1);
}

#[test]
fn test_float_latches_and_rides_surface() {
    let mut scene = scene();
    scene.drop_float(50.0, 0.0);

    for _ in 0..400 {
        scene.tick();
    }

    let floats = scene.floats();
    assert_eq!(floats.len(), 1);
    assert!(floats.splashed[0]);
    assert_eq!(floats.spring[0], Some(2));
    assert!(floats.on_surface[0]);

    let h = scene.wave().height_at(2).unwrap();
    assert!((floats.y[0] - (h - floats.ride[0])).abs() < 5.0);
    // Floats never displace volume
    assert_eq!(scene.wave().rest_level(), 510.0);
}

#[test]
fn test_float_off_the_left_edge_falls_away() {
    let mut scene = scene();
    scene.drop_float(-30.0, 0.0);
    for _ in 0..400 {
        scene.tick();
    }
    assert_eq!(scene.floats().len(), 0);
    assert!(scene.wave().is_settled());
}

#[test]
fn test_reset_discards_everything() {
    let mut scene = scene();
    scene.drop_rock(600.0, 0.0);
    scene.drop_float(200.0, 0.0);
    for _ in 0..200 {
        scene.tick();
    }
    assert!(scene.wave().rest_level() < 510.0);

    scene.reset();
    assert_eq!(scene.rocks().len(), 0);
    assert_eq!(scene.floats().len(), 0);
    assert_eq!(scene.wave().rest_level(), 510.0);
    assert!(scene.wave().is_settled());
    assert_eq!(scene.frame(), 0);
}

#[test]
fn test_resize_rebuilds_wave() {
    let mut scene = scene();
    scene.resize(600.0, 360.0);
    assert_eq!(scene.wave().len(), 32);
    assert_eq!(scene.wave().rest_level(), 255.0);

    scene.resize(0.0, 100.0);
    assert_eq!(scene.wave().len(), 32);
}

#[test]
fn test_draw_encodes_rock_record() {
    let mut scene = scene();
    scene.drop_rock(600.0, 0.0);
    scene.tick();

    let mut out = Encoder::new();
    scene.draw(&mut out);
    let rocks = scene.rocks();
    assert_eq!(out.body_count(), 1);
    assert_eq!(
        &out.bodies_buf()[..BODY_STRIDE],
        &[KIND_ROCK, rocks.x[0], rocks.y[0], rocks.r[0], rocks.angle[0]]
    );
    assert_eq!(out.surface_len(), 2 * scene.wave().points().len());
    assert_eq!(out.crest_len(), scene.wave().crest().len());

    // Renderers that discard everything are still driven
    scene.draw(&mut NullRenderer);
}

#[test]
fn test_zero_width_world_stays_finite() {
    let mut world = WaterWorld::new(0, 600);
    assert!(world.drop_rock(0.0, 0.0));
    for _ in 0..120 {
        world.tick();
    }
    let wave = world.scene().wave();
    assert!(wave.rest_level().is_finite());
    assert!(wave.springs().iter().all(|s| s.height.is_finite() && s.velocity.is_finite()));
    assert!(world.encoder().surface_buf().iter().all(|v| v.is_finite()));
}

#[test]
fn test_unvalidated_zero_width_scene_stays_finite() {
    let mut c = WaterConfig::for_screen(0.0, 600.0);
    c.smooth = false;
    let mut scene = Scene::new(c);
    scene.drop_rock(0.0, 0.0);
    for _ in 0..120 {
        scene.tick();
    }
    assert!(scene.wave().rest_level().is_finite());
    assert!(scene.wave().springs().iter().all(|s| s.height.is_finite()));
}

#[test]
fn test_oversized_configs_are_rejected() {
    for json in [
        r#"{ "screen_width": 1e39 }"#,
        r#"{ "screen_height": 1e39 }"#,
        r#"{ "spacing": 1e-30 }"#,
        r#"{ "curve_step": 1e-9 }"#,
    ] {
        assert!(WaterConfig::from_json(json).is_err(), "accepted {}", json);
    }
}

#[test]
fn test_nan_position_splash_is_noop() {
    let mut c = WaterConfig::for_screen(200.0, 400.0);
    c.rest_height = 300.0;
    c.smooth = false;
    let mut wave = Wave::new(&c);

    let mut splashed = false;
    let entry = Entry { impulse: 5.0, volume: None };
    let hit = splash::try_enter(&mut wave, &mut splashed, f32::NAN, 350.0, entry, true);
    assert_eq!(hit, Some(-1));
    assert!(wave.springs().iter().all(|s| s.velocity == 0.0));
}

#[test]
fn test_world_encodes_each_frame() {
    let mut world = WaterWorld::new(160, 600);
    world.toggle_smooth();
    assert!(world.drop_rock(80.0, 0.0));
    assert!(world.drop_float(40.0, 0.0));
    world.tick();

    let enc = world.encoder();
    assert_eq!(enc.crest_len(), 10);
    assert_eq!(enc.surface_len(), 2 * 12);
    assert_eq!(enc.body_count(), 2);
    assert_eq!(enc.bodies_buf()[0], KIND_ROCK);
    assert_eq!(enc.bodies_buf()[BODY_STRIDE], KIND_FLOAT);
}

#[test]
fn test_world_from_partial_config() {
    let world = WaterWorld::from_config(r#"{ "screen_width": 400.0 }"#).unwrap();
    assert_eq!(world.scene().wave().len(), 22);
}
