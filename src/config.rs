// config.rs - Simulation parameters
//
// One struct holds every tunable the scene reads: spring constants,
// layout, feature toggles and the body collaborators' physics.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound on springs in one wave, edge springs included.
pub const MAX_SPRINGS: usize = 16_384;

/// Upper bound on spline samples across the screen per frame.
pub const MAX_CURVE_SAMPLES: usize = 1 << 16;

/// Complete water scene configuration.
///
/// Loaded from JSON by the native tool, or built with [`WaterConfig::for_screen`].
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterConfig {
    /// Screen width in pixels (also the divisor for volume rise)
    pub screen_width: f32,
    /// Screen height in pixels; the polygon closes down to this line
    pub screen_height: f32,
    /// Horizontal distance between springs
    pub spacing: f32,
    /// Pull toward the rest height (higher = faster oscillation)
    pub tension: f32,
    /// Fraction of velocity removed each tick
    pub dampening: f32,
    /// Neighbour coupling strength
    pub spread: f32,
    /// Snap threshold for height and velocity
    pub epsilon: f32,
    /// Initial rest level (y grows downward)
    pub rest_height: f32,
    /// Resample the crest with a cubic spline
    pub smooth: bool,
    /// Spline sample step in pixels
    pub curve_step: f32,
    /// Sinking rocks raise the water level
    pub volume_rise: bool,
    /// Rocks are simulated by the ballistic integrator
    pub physics: bool,
    /// Gravity for rocks, px/s^2
    pub gravity: [f32; 2],
    /// Rock physics step, seconds
    pub timestep: f32,
    /// Splash impulse per pixel of rock radius
    pub rock_impulse_scale: f32,
    /// Splash impulse of a float entering the water
    pub float_splash_impulse: f32,
    /// Float fall acceleration, px/tick^2
    pub float_gravity: f32,
    /// Upward push on a submerged float, px/tick^2
    pub float_buoyancy: f32,
    /// Float collision/draw radius
    pub float_radius: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self::for_screen(1200.0, 720.0)
    }
}

impl WaterConfig {
    /// Defaults for a given screen, with the rest level 150px below center.
    pub fn for_screen(width: f32, height: f32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            spacing: 20.0,
            tension: 0.01,
            dampening: 0.05,
            spread: 0.1,
            epsilon: 0.01,
            rest_height: (height / 2.0).floor() + 150.0,
            smooth: true,
            curve_step: 1.0,
            volume_rise: true,
            physics: true,
            gravity: [0.0, 500.0],
            timestep: 1.0 / 60.0,
            rock_impulse_scale: 1.0,
            float_splash_impulse: 2.0,
            float_gravity: 0.5,
            float_buoyancy: 2.0,
            float_radius: 25.0,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WaterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.screen_width, self.screen_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::InvalidScreen { width: w, height: h });
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) || w / self.spacing > (MAX_SPRINGS - 2) as f32 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.timestep));
        }
        if !(self.curve_step.is_finite() && self.curve_step > 0.0)
            || w / self.curve_step > MAX_CURVE_SAMPLES as f32
        {
            return Err(ConfigError::InvalidCurveStep(self.curve_step));
        }
        Ok(())
    }

    /// Number of springs needed to span the screen, plus one past each edge.
    ///
    /// Capped at [`MAX_SPRINGS`]; a NaN ratio counts as zero.
    pub fn spring_count(&self) -> usize {
        ((self.screen_width / self.spacing) as usize).min(MAX_SPRINGS - 2) + 2
    }

    pub fn set_smooth(&mut self, on: bool) {
        self.smooth = on;
    }

    pub fn set_volume_rise(&mut self, on: bool) {
        self.volume_rise = on;
    }

    pub fn set_physics(&mut self, on: bool) {
        self.physics = on;
    }
}
