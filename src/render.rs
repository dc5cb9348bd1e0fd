// render.rs - Hand scene geometry to a drawing backend
//
// Output encoding of the buffer backend (for canvas rendering):
//   surface  = x,y pairs of the closed water polygon; the first
//              `crest_len` pairs are the open crest line
//   bodies   = records of BODY_STRIDE floats: kind, x, y, radius, angle
//              (kind 0 = rock, 1 = float)

use glam::Vec2;

pub const BODY_STRIDE: usize = 5;
pub const KIND_ROCK: f32 = 0.0;
pub const KIND_FLOAT: f32 = 1.0;

/// Drawing backend for one frame of the scene.
pub trait Renderer {
    /// Closed polygon down to the floor, and the open crest line.
    fn surface(&mut self, polygon: &[Vec2], crest: &[Vec2]);
    fn rock(&mut self, center: Vec2, radius: f32, angle: f32);
    fn float(&mut self, center: Vec2, radius: f32);
}

/// Discards everything; for headless runs.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn surface(&mut self, _polygon: &[Vec2], _crest: &[Vec2]) {}
    fn rock(&mut self, _center: Vec2, _radius: f32, _angle: f32) {}
    fn float(&mut self, _center: Vec2, _radius: f32) {}
}

/// Undefined rotations draw as unrotated.
#[inline]
pub fn sanitize_angle(angle: f32) -> f32 {
    if angle.is_finite() { angle } else { 0.0 }
}

/// Flat f32 buffers read directly from JS memory.
#[derive(Default)]
pub struct Encoder {
    surface: Vec<f32>,
    crest_len: usize,
    bodies: Vec<f32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.surface.clear();
        self.crest_len = 0;
        self.bodies.clear();
    }

    pub fn surface_buf(&self) -> &[f32] {
        &self.surface
    }

    pub fn surface_ptr(&self) -> *const f32 {
        self.surface.as_ptr()
    }

    /// Number of floats in the surface buffer.
    pub fn surface_len(&self) -> usize {
        self.surface.len()
    }

    /// Number of crest points (pairs) at the front of the surface buffer.
    pub fn crest_len(&self) -> usize {
        self.crest_len
    }

    pub fn bodies_buf(&self) -> &[f32] {
        &self.bodies
    }

    pub fn bodies_ptr(&self) -> *const f32 {
        self.bodies.as_ptr()
    }

    pub fn bodies_len(&self) -> usize {
        self.bodies.len()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len() / BODY_STRIDE
    }
}

impl Renderer for Encoder {
    fn surface(&mut self, polygon: &[Vec2], crest: &[Vec2]) {
        self.surface.reserve(polygon.len() * 2);
        for p in polygon {
            self.surface.push(p.x);
            self.surface.push(p.y);
        }
        self.crest_len = crest.len();
    }

    fn rock(&mut self, center: Vec2, radius: f32, angle: f32) {
        self.bodies.extend_from_slice(&[KIND_ROCK, center.x, center.y, radius, angle]);
    }

    fn float(&mut self, center: Vec2, radius: f32) {
        self.bodies.extend_from_slice(&[KIND_FLOAT, center.x, center.y, radius, 0.0]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_layout() {
        let mut enc = Encoder::new();
        let poly = [Vec2::new(0.0, 1.0), Vec2::new(2.0, 3.0), Vec2::new(2.0, 9.0), Vec2::new(0.0, 9.0)];
        enc.surface(&poly, &poly[..2]);
        enc.rock(Vec2::new(5.0, 6.0), 7.0, 0.5);
        enc.float(Vec2::new(1.0, 2.0), 25.0);

        assert_eq!(enc.surface_buf(), &[0.0, 1.0, 2.0, 3.0, 2.0, 9.0, 0.0, 9.0]);
        assert_eq!(enc.crest_len(), 2);
        assert_eq!(enc.body_count(), 2);
        assert_eq!(&enc.bodies_buf()[..5], &[KIND_ROCK, 5.0, 6.0, 7.0, 0.5]);

        enc.clear();
        assert_eq!(enc.surface_len(), 0);
        assert_eq!(enc.bodies_len(), 0);
    }

    #[test]
    fn test_sanitize_angle() {
        assert_eq!(sanitize_angle(f32::NAN), 0.0);
        assert_eq!(sanitize_angle(f32::INFINITY), 0.0);
        assert_eq!(sanitize_angle(1.25), 1.25);
    }
}
