// physics.rs - Rigid-body collaborators for rocks
//
// The water never simulates bodies itself. A strategy is picked when the
// scene is built: a small ballistic integrator, or a stub that leaves
// rocks frozen in place.

use glam::Vec2;

use super::Rocks;
use crate::config::WaterConfig;

const RESTITUTION: f32 = 0.2;
const FLOOR_FRICTION: f32 = 0.05;

/// Advances rock positions by `dt` seconds.
pub trait BodyPhysics {
    fn step(&mut self, rocks: &mut Rocks, dt: f32);

    /// Whether new rocks can be added under this strategy.
    fn accepts_spawns(&self) -> bool {
        true
    }
}

/// Stub used when rock physics is switched off.
pub struct NoPhysics;

impl BodyPhysics for NoPhysics {
    fn step(&mut self, _rocks: &mut Rocks, _dt: f32) {}

    fn accepts_spawns(&self) -> bool {
        false
    }
}

/// Gravity, screen walls, floor, and rock-rock contacts.
pub struct Ballistic {
    gravity: Vec2,
    width: f32,
    floor: f32,
}

impl Ballistic {
    pub fn new(gravity: Vec2, width: f32, floor: f32) -> Self {
        Self { gravity, width, floor }
    }

    fn integrate(&self, rocks: &mut Rocks, dt: f32) {
        for i in 0..rocks.n {
            rocks.vx[i] += self.gravity.x * dt;
            rocks.vy[i] += self.gravity.y * dt;
            rocks.x[i] += rocks.vx[i] * dt;
            rocks.y[i] += rocks.vy[i] * dt;
        }
    }

    fn bounds(&self, rocks: &mut Rocks) {
        for i in 0..rocks.n {
            let r = rocks.r[i];

            if rocks.y[i] + r > self.floor {
                rocks.y[i] = self.floor - r;
                if rocks.vy[i] > 0.0 { rocks.vy[i] *= -RESTITUTION; }
                rocks.vx[i] *= 1.0 - FLOOR_FRICTION;
                // Rolling without slipping
                rocks.spin[i] = rocks.vx[i] / r;
            }

            if rocks.x[i] - r < 0.0 {
                rocks.x[i] = r;
                if rocks.vx[i] < 0.0 { rocks.vx[i] *= -RESTITUTION; }
            } else if rocks.x[i] + r > self.width {
                rocks.x[i] = self.width - r;
                if rocks.vx[i] > 0.0 { rocks.vx[i] *= -RESTITUTION; }
            }
        }
    }

    // Pairwise circle contacts; mass taken as r^2
    fn contacts(&self, rocks: &mut Rocks) {
        for i in 0..rocks.n {
            for j in (i + 1)..rocks.n {
                let pi = Vec2::new(rocks.x[i], rocks.y[i]);
                let pj = Vec2::new(rocks.x[j], rocks.y[j]);
                let d = pj - pi;
                let dist = d.length();
                let overlap = rocks.r[i] + rocks.r[j] - dist;
                if overlap <= 0.0 { continue; }

                let n = if dist > 1e-4 { d / dist } else { Vec2::X };
                let inv_i = 1.0 / (rocks.r[i] * rocks.r[i]);
                let inv_j = 1.0 / (rocks.r[j] * rocks.r[j]);
                let inv_sum = inv_i + inv_j;

                let push = n * overlap / inv_sum;
                rocks.x[i] -= push.x * inv_i;
                rocks.y[i] -= push.y * inv_i;
                rocks.x[j] += push.x * inv_j;
                rocks.y[j] += push.y * inv_j;

                let vi = Vec2::new(rocks.vx[i], rocks.vy[i]);
                let vj = Vec2::new(rocks.vx[j], rocks.vy[j]);
                let vn = (vj - vi).dot(n);
                if vn < 0.0 {
                    let impulse = n * (-(1.0 + RESTITUTION) * vn / inv_sum);
                    rocks.vx[i] -= impulse.x * inv_i;
                    rocks.vy[i] -= impulse.y * inv_i;
                    rocks.vx[j] += impulse.x * inv_j;
                    rocks.vy[j] += impulse.y * inv_j;
                }
            }
        }
    }
}

impl BodyPhysics for Ballistic {
    fn step(&mut self, rocks: &mut Rocks, dt: f32) {
        self.integrate(rocks, dt);
        self.contacts(rocks);
        self.bounds(rocks);
        for i in 0..rocks.n {
            rocks.angle[i] += rocks.spin[i] * dt;
        }
    }
}

/// Strategy for the current config.
pub fn physics_for(config: &WaterConfig) -> Box<dyn BodyPhysics> {
    if config.physics {
        let [gx, gy] = config.gravity;
        Box::new(Ballistic::new(Vec2::new(gx, gy), config.screen_width, config.screen_height))
    } else {
        Box::new(NoPhysics)
    }
}
