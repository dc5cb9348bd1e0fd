// wave.rs - Water surface as a row of coupled springs
//
// Springs sit at fixed x positions, left to right. Each tick they relax
// toward the rest level, then pass velocity to their neighbours so a
// disturbance travels along the surface.

use glam::Vec2;

use super::curve;
use super::spring::{SpringParams, WaterSpring};
use crate::config::{MAX_CURVE_SAMPLES, MAX_SPRINGS, WaterConfig};

pub struct Wave {
    springs: Vec<WaterSpring>,
    spacing: f32,
    spread: f32,
    smooth: bool,
    curve_step: f32,
    screen_w: f32,
    screen_h: f32,

    // Crest followed by the two closing floor points
    points: Vec<Vec2>,
}

impl Wave {
    pub fn new(config: &WaterConfig) -> Self {
        let params = SpringParams {
            tension: config.tension,
            dampening: config.dampening,
            epsilon: config.epsilon,
        };
        // Unvalidated configs still get a finite, bounded layout
        let screen_w = if config.screen_width > 1.0 { config.screen_width.min(f32::MAX) } else { 1.0 };
        let spacing = config.spacing.max(f32::EPSILON).min(f32::MAX);
        let count = ((screen_w / spacing) as usize).min(MAX_SPRINGS - 2).saturating_add(2);
        let curve_step = config.curve_step.max(screen_w / MAX_CURVE_SAMPLES as f32);

        let springs = (0..count)
            .map(|i| WaterSpring::new(i as f32 * spacing, config.rest_height, params))
            .collect();

        let mut wave = Self {
            springs,
            spacing,
            spread: config.spread,
            smooth: config.smooth,
            curve_step,
            screen_w,
            screen_h: config.screen_height,
            points: Vec::new(),
        };
        wave.rebuild_points();
        wave
    }

    /// One simulation tick: springs, then spread, then the drawable outline.
    pub fn update(&mut self) {
        for spring in &mut self.springs {
            spring.update();
        }
        self.spread();
        self.rebuild_points();
    }

    /// Nudge each adjacent pair toward each other by `spread * height gap`.
    ///
    /// Reads current heights only; velocities change, heights do not, so
    /// the pass order does not matter.
    pub fn spread(&mut self) {
        let s = self.spread;
        for i in 0..self.springs.len().saturating_sub(1) {
            let gap = self.springs[i + 1].height - self.springs[i].height;
            self.springs[i].velocity += s * gap;
            self.springs[i + 1].velocity -= s * gap;
        }
    }

    fn rebuild_points(&mut self) {
        self.points.clear();
        let crest = self.springs.iter().map(|s| Vec2::new(s.x(), s.height));
        if self.smooth {
            let raw: Vec<Vec2> = crest.collect();
            self.points.extend(curve::smooth(&raw, self.curve_step));
        } else {
            self.points.extend(crest);
        }
        self.points.push(Vec2::new(self.screen_w, self.screen_h));
        self.points.push(Vec2::new(0.0, self.screen_h));
    }

    /// Rest level of the whole surface (spring 0's target).
    pub fn rest_level(&self) -> f32 {
        self.springs.first().map_or(self.screen_h, |s| s.target_height)
    }

    pub fn set_rest_level(&mut self, height: f32) {
        for spring in &mut self.springs {
            spring.target_height = height;
        }
    }

    /// Spread an added cross-section area evenly across the screen width.
    /// Subtracting raises the water since y grows downward.
    pub fn add_volume(&mut self, volume: f32) {
        if !(self.screen_w > 0.0) {
            return;
        }
        let dh = volume / self.screen_w;
        self.set_rest_level(self.rest_level() - dh);
    }

    /// Kick the spring at `index`. Out-of-range indices are ignored.
    pub fn splash(&mut self, index: isize, velocity: f32) {
        if let Some(spring) = self.spring_mut(index) {
            spring.receive_impulse(velocity);
        }
    }

    /// Spring under pixel column `x`. May fall outside `0..len()`.
    ///
    /// Infinities saturate to the matching side; NaN maps to -1.
    pub fn sample_index_for_x(&self, x: f32) -> isize {
        let i = (x / self.spacing).floor();
        if i.is_nan() { -1 } else { i as isize }
    }

    pub fn height_at(&self, index: isize) -> Option<f32> {
        self.spring(index).map(|s| s.height)
    }

    pub fn target_at(&self, index: isize) -> Option<f32> {
        self.spring(index).map(|s| s.target_height)
    }

    pub fn spring(&self, index: isize) -> Option<&WaterSpring> {
        usize::try_from(index).ok().and_then(|i| self.springs.get(i))
    }

    pub fn spring_mut(&mut self, index: isize) -> Option<&mut WaterSpring> {
        usize::try_from(index).ok().and_then(|i| self.springs.get_mut(i))
    }

    pub fn springs(&self) -> &[WaterSpring] {
        &self.springs
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn screen_width(&self) -> f32 {
        self.screen_w
    }

    /// Closed polygon: crest plus (width, bottom) and (0, bottom).
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Open crest polyline without the closing floor points.
    pub fn crest(&self) -> &[Vec2] {
        &self.points[..self.points.len().saturating_sub(2)]
    }

    pub fn set_smooth(&mut self, on: bool) {
        self.smooth = on;
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// True once every spring sits exactly on its target with no velocity.
    pub fn is_settled(&self) -> bool {
        self.springs.iter().all(WaterSpring::is_at_rest)
    }
}
