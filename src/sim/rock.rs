// rock.rs - Sinking rocks
//
// Structure-of-Arrays layout, like every body store in the scene.
// Rocks are moved by a BodyPhysics strategy; this module only owns
// their state and how they enter the water.

use super::{MAX_ROCKS, rand};
use super::splash::Entry;

// Radius = RADIUS_PER_MASS * mass, mass drawn from MASS_MIN..=MASS_MAX
const MASS_MIN: u32 = 2;
const MASS_MAX: u32 = 10;
const RADIUS_PER_MASS: f32 = 5.0;

pub struct Rocks {
    // Position
    pub x: [f32; MAX_ROCKS],
    pub y: [f32; MAX_ROCKS],

    // Velocity, px/s
    pub vx: [f32; MAX_ROCKS],
    pub vy: [f32; MAX_ROCKS],

    // Shape and rotation
    pub r: [f32; MAX_ROCKS],
    pub angle: [f32; MAX_ROCKS],
    pub spin: [f32; MAX_ROCKS],

    pub splashed: [bool; MAX_ROCKS],

    // Count
    pub n: usize,
}

impl Rocks {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_ROCKS],
            y: [0.0; MAX_ROCKS],
            vx: [0.0; MAX_ROCKS],
            vy: [0.0; MAX_ROCKS],
            r: [0.0; MAX_ROCKS],
            angle: [0.0; MAX_ROCKS],
            spin: [0.0; MAX_ROCKS],
            splashed: [false; MAX_ROCKS],
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

    /// Spawn a rock of random mass at rest. Returns its slot, or `None` if full.
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) -> Option<usize> {
        if self.n >= MAX_ROCKS { return None; }

        let span = (MASS_MAX - MASS_MIN + 1) as f32;
        let mass = (MASS_MIN + (rand(rng) * span) as u32).min(MASS_MAX);

        let i = self.n;
        self.x[i] = x + rand(rng);
        self.y[i] = y;
        self.vx[i] = 0.0;
        self.vy[i] = 0.0;
        self.r[i] = mass as f32 * RADIUS_PER_MASS;
        self.angle[i] = 0.0;
        self.spin[i] = 0.0;
        self.splashed[i] = false;
        self.n += 1;
        Some(i)
    }

    /// Splash parameters: impulse scales with radius, volume is the disc area.
    pub fn entry(&self, i: usize, impulse_scale: f32) -> Entry {
        let r = self.r[i];
        Entry {
            impulse: r * impulse_scale,
            volume: Some(std::f32::consts::PI * r * r),
        }
    }

    #[inline]
    pub fn bottom(&self, i: usize) -> f32 {
        self.y[i] + self.r[i]
    }
}

impl Default for Rocks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_radius_range() {
        let mut rocks = Rocks::new();
        let mut rng = 0xDEADBEEF;
        for _ in 0..MAX_ROCKS {
            let i = rocks.spawn(100.0, 0.0, &mut rng).unwrap();
            assert!(rocks.r[i] >= 10.0 && rocks.r[i] <= 50.0);
            assert!(rocks.x[i] >= 100.0 && rocks.x[i] < 101.0);
        }
        assert_eq!(rocks.spawn(0.0, 0.0, &mut rng), None);
    }

    #[test]
    fn test_entry_volume_is_disc_area() {
        let mut rocks = Rocks::new();
        rocks.r[0] = 10.0;
        rocks.n = 1;
        let e = rocks.entry(0, 1.0);
        assert_eq!(e.impulse, 10.0);
        assert!((e.volume.unwrap() - 314.159_27).abs() < 1e-3);
    }
}
