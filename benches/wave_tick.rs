//! # Wave Tick Benchmark
//!
//! Cost of one surface update at the default screen size, with and
//! without crest smoothing, and of a full scene frame with bodies.
//!
//! Run with: `cargo bench --bench wave_tick`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use water_engine::{Encoder, Scene, WaterConfig, Wave};

fn wave_update(c: &mut Criterion) {
    for smooth in [false, true] {
        let mut config = WaterConfig::default();
        config.smooth = smooth;
        let mut wave = Wave::new(&config);
        wave.splash(30, 40.0);

        let name = if smooth { "wave_update_smooth" } else { "wave_update_raw" };
        c.bench_function(name, |b| {
            b.iter(|| {
                wave.update();
                black_box(wave.points().len())
            })
        });
    }
}

fn scene_frame(c: &mut Criterion) {
    let mut scene = Scene::new(WaterConfig::default());
    for i in 0..20 {
        scene.drop_rock(50.0 + i as f32 * 55.0, 0.0);
        scene.drop_float(25.0 + i as f32 * 55.0, 0.0);
    }
    let mut out = Encoder::new();

    c.bench_function("scene_frame", |b| {
        b.iter(|| {
            scene.tick();
            out.clear();
            scene.draw(&mut out);
            black_box(out.surface_len())
        })
    });
}

criterion_group!(benches, wave_update, scene_frame);
criterion_main!(benches);
