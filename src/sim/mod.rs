// sim/ - Water surface simulation
//
// The surface is a row of springs; bodies are stored as Structure-of-Arrays
// and only touch the surface through the splash coupling.
//
// Frame order: body physics -> floats -> splash detection -> wave -> draw

mod curve;
mod float;
mod physics;
mod rock;
mod spring;
pub mod splash;
mod wave;

pub use curve::{Spline, smooth};
pub use float::Floats;
pub use physics::{Ballistic, BodyPhysics, NoPhysics, physics_for};
pub use rock::Rocks;
pub use spring::{SpringParams, WaterSpring};
pub use wave::Wave;

use glam::Vec2;
use log::{debug, info, warn};

use crate::config::WaterConfig;
use crate::render::{Renderer, sanitize_angle};

// Capacity limits
pub const MAX_ROCKS: usize = 128;
pub const MAX_FLOATS: usize = 128;

/// Water scene: one surface plus the bodies dropped into it.
pub struct Scene {
    config: WaterConfig,
    wave: Wave,

    // Bodies
    rocks: Rocks,
    floats: Floats,
    physics: Box<dyn BodyPhysics>,

    // RNG state
    rng: u32,
    frame: u64,
}

impl Scene {
    pub fn new(config: WaterConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!("building scene from invalid config: {}", e);
        }
        info!(
            "water scene {}x{}, {} springs every {}px",
            config.screen_width,
            config.screen_height,
            config.spring_count(),
            config.spacing
        );
        Self {
            wave: Wave::new(&config),
            rocks: Rocks::new(),
            floats: Floats::new(),
            physics: physics_for(&config),
            config,
            rng: 0xDEADBEEF,
            frame: 0,
        }
    }

    /// Advance one frame.
    pub fn tick(&mut self) {
        self.physics.step(&mut self.rocks, self.config.timestep);
        self.floats.update(&self.wave, &self.config);

        let volume_rise = self.config.volume_rise;
        for i in 0..self.rocks.n {
            let entry = self.rocks.entry(i, self.config.rock_impulse_scale);
            let bottom = self.rocks.bottom(i);
            splash::try_enter(
                &mut self.wave,
                &mut self.rocks.splashed[i],
                self.rocks.x[i],
                bottom,
                entry,
                volume_rise,
            );
        }

        let entry = Floats::entry(&self.config);
        for i in 0..self.floats.n {
            let bottom = self.floats.y[i] + self.config.float_radius;
            let entered = splash::try_enter(
                &mut self.wave,
                &mut self.floats.splashed[i],
                self.floats.x[i],
                bottom,
                entry,
                false,
            );
            if let Some(index) = entered {
                self.floats.latch(i, index, &self.wave);
            }
        }

        self.wave.update();
        self.frame += 1;
    }

    /// Draw the current state. Call after `tick`.
    pub fn draw(&self, out: &mut dyn Renderer) {
        out.surface(self.wave.points(), self.wave.crest());
        for i in 0..self.rocks.n {
            let center = Vec2::new(self.rocks.x[i], self.rocks.y[i]);
            out.rock(center, self.rocks.r[i], sanitize_angle(self.rocks.angle[i]));
        }
        for i in 0..self.floats.n {
            out.float(Vec2::new(self.floats.x[i], self.floats.y[i]), self.config.float_radius);
        }
    }

    /// Drop a rock. Refused while rock physics is off or the store is full.
    pub fn drop_rock(&mut self, x: f32, y: f32) -> bool {
        if !self.physics.accepts_spawns() {
            warn!("rock at ({:.0}, {:.0}) ignored: physics is off", x, y);
            return false;
        }
        match self.rocks.spawn(x, y, &mut self.rng) {
            Some(i) => {
                debug!("rock {} r={} at ({:.0}, {:.0})", i, self.rocks.r[i], x, y);
                true
            }
            None => {
                warn!("rock store full ({})", MAX_ROCKS);
                false
            }
        }
    }

    pub fn drop_float(&mut self, x: f32, y: f32) -> bool {
        match self.floats.spawn(x, y, &mut self.rng) {
            Some(i) => {
                debug!("float {} at ({:.0}, {:.0})", i, x, y);
                true
            }
            None => {
                warn!("float store full ({})", MAX_FLOATS);
                false
            }
        }
    }

    /// Throw away the surface and all bodies and start over.
    pub fn reset(&mut self) {
        self.wave = Wave::new(&self.config);
        self.rocks.clear();
        self.floats.clear();
        self.physics = physics_for(&self.config);
        self.frame = 0;
        info!("water scene reset, rest level {}", self.config.rest_height);
    }

    /// Rebuild for a new screen size, keeping the rest level proportional.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            warn!("ignoring resize to {}x{}", width, height);
            return;
        }
        let scale = height / self.config.screen_height;
        self.config.screen_width = width;
        self.config.screen_height = height;
        self.config.rest_height *= scale;
        self.reset();
    }

    pub fn set_smooth(&mut self, on: bool) {
        self.config.set_smooth(on);
        self.wave.set_smooth(on);
    }

    pub fn set_volume_rise(&mut self, on: bool) {
        self.config.set_volume_rise(on);
    }

    /// Swap the rock physics strategy.
    pub fn set_physics(&mut self, on: bool) {
        self.config.set_physics(on);
        self.physics = physics_for(&self.config);
    }

    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    pub fn wave(&self) -> &Wave {
        &self.wave
    }

    pub fn wave_mut(&mut self) -> &mut Wave {
        &mut self.wave
    }

    pub fn rocks(&self) -> &Rocks {
        &self.rocks
    }

    pub fn floats(&self) -> &Floats {
        &self.floats
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

// Random number generator (xorshift32), uniform in [0, 1)
#[inline(always)]
pub(crate) fn rand(rng: &mut u32) -> f32 {
    *rng ^= *rng << 13;
    *rng ^= *rng >> 17;
    *rng ^= *rng << 5;
    (*rng >> 8) as f32 * (1.0 / 16777216.0)
}
