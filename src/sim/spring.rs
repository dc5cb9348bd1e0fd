// spring.rs - One sample of the water surface
//
// A damped spring pulling its height toward a rest level.

/// Spring constants shared by every sample of a wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub tension: f32,
    pub dampening: f32,
    pub epsilon: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self { tension: 0.01, dampening: 0.05, epsilon: 0.01 }
    }
}

#[derive(Debug, Clone)]
pub struct WaterSpring {
    x: f32,
    pub target_height: f32,
    pub height: f32,
    pub velocity: f32,
    pub tension: f32,
    pub dampening: f32,
    epsilon: f32,
}

impl WaterSpring {
    /// Spring at rest on `target_height`.
    pub fn new(x: f32, target_height: f32, params: SpringParams) -> Self {
        Self {
            x,
            target_height,
            height: target_height,
            velocity: 0.0,
            tension: params.tension,
            dampening: params.dampening,
            epsilon: params.epsilon,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Advance one tick.
    ///
    /// The snap runs before the velocity update: a spring within epsilon of
    /// its target lands on it exactly, and if it is also nearly still it
    /// stops there instead of drifting forever.
    pub fn update(&mut self) {
        let dh = self.target_height - self.height;
        if dh.abs() < self.epsilon {
            self.height = self.target_height;
            if self.velocity.abs() < self.epsilon {
                self.velocity = 0.0;
                return;
            }
        }
        self.velocity += self.tension * dh - self.velocity * self.dampening;
        self.height += self.velocity;
    }

    #[inline]
    pub fn receive_impulse(&mut self, amount: f32) {
        self.velocity += amount;
    }

    pub fn is_at_rest(&self) -> bool {
        self.height == self.target_height && self.velocity == 0.0
    }
}
