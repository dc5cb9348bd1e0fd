// float.rs - Floating balls
//
// A float falls until it enters the water, then latches onto the spring
// under it by index. Buoyancy pushes it back up until it breaks the
// surface, after which it rides that spring's height.

use super::{MAX_FLOATS, Wave, rand};
use super::splash::Entry;
use crate::config::WaterConfig;

// Ride offset above the spring, px
const RIDE_MIN: u32 = 2;
const RIDE_MAX: u32 = 10;

// Floats this far below the screen are dropped
const CULL_MARGIN: f32 = 100.0;

pub struct Floats {
    // Position
    pub x: [f32; MAX_FLOATS],
    pub y: [f32; MAX_FLOATS],

    // Vertical speed, px/tick
    pub dy: [f32; MAX_FLOATS],

    pub ride: [f32; MAX_FLOATS],

    // Handle into the wave's springs; re-resolved every tick
    pub spring: [Option<usize>; MAX_FLOATS],
    pub on_surface: [bool; MAX_FLOATS],
    pub splashed: [bool; MAX_FLOATS],

    // Count
    pub n: usize,
}

impl Floats {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_FLOATS],
            y: [0.0; MAX_FLOATS],
            dy: [0.0; MAX_FLOATS],
            ride: [0.0; MAX_FLOATS],
            spring: [None; MAX_FLOATS],
            on_surface: [false; MAX_FLOATS],
            splashed: [false; MAX_FLOATS],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) -> Option<usize> {
        if self.n >= MAX_FLOATS { return None; }

        let span = (RIDE_MAX - RIDE_MIN + 1) as f32;
        let ride = (RIDE_MIN + (rand(rng) * span) as u32).min(RIDE_MAX);

        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.dy[i] = 0.0;
        self.ride[i] = ride as f32;
        self.spring[i] = None;
        self.on_surface[i] = false;
        self.splashed[i] = false;
        self.n += 1;
        Some(i)
    }

    /// Attach float `i` to the spring it entered at, if that spring exists.
    pub fn latch(&mut self, i: usize, index: isize, wave: &Wave) {
        if wave.spring(index).is_some() {
            self.spring[i] = usize::try_from(index).ok();
        }
    }

    pub fn entry(config: &WaterConfig) -> Entry {
        Entry { impulse: config.float_splash_impulse, volume: None }
    }

    /// Move every float one tick and drop the ones that fell off screen.
    pub fn update(&mut self, wave: &Wave, config: &WaterConfig) {
        let floor = config.screen_height + CULL_MARGIN;
        let mut write = 0;

        for read in 0..self.n {
            let mut y = self.y[read];
            let mut dy = self.dy[read];
            let mut spring = self.spring[read];
            let mut on_surface = self.on_surface[read];

            let surface = spring.and_then(|k| wave.height_at(k as isize));
            match surface {
                Some(h) if on_surface => {
                    y = h - self.ride[read];
                }
                Some(h) => {
                    dy -= config.float_buoyancy;
                    y += dy;
                    if dy < 0.0 && y < h {
                        on_surface = true;
                    }
                }
                None => {
                    // Lost or never had a spring
                    spring = None;
                    on_surface = false;
                    dy += config.float_gravity;
                    y += dy;
                }
            }

            if y > floor { continue; }

            self.x[write] = self.x[read];
            self.y[write] = y;
            self.dy[write] = dy;
            self.ride[write] = self.ride[read];
            self.spring[write] = spring;
            self.on_surface[write] = on_surface;
            self.splashed[write] = self.splashed[read];
            write += 1;
        }

        self.n = write;
    }
}

impl Default for Floats {
    fn default() -> Self {
        Self::new()
    }
}
