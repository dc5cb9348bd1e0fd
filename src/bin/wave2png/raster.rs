// raster.rs - Software renderer into an RGBA image
//
// Scanline polygon fill for the water body, stamped discs for the crest
// line, and plain or textured circles for bodies.

use std::path::Path;

use glam::Vec2;
use image::{Rgba, RgbaImage};
use water_engine::Renderer;
use water_engine::render::sanitize_angle;

use crate::error::OutputError;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WATER: Rgba<u8> = Rgba([0, 0, 255, 50]);
const CREST: Rgba<u8> = Rgba([255, 255, 255, 255]);
const ROCK: Rgba<u8> = Rgba([139, 69, 19, 255]);
const FLOAT: Rgba<u8> = Rgba([0, 128, 0, 255]);
const CREST_WIDTH: f32 = 5.0;

pub struct Raster {
    img: RgbaImage,
    rock_texture: Option<RgbaImage>,
}

impl Raster {
    pub fn new(w: u32, h: u32) -> Self {
        Self { img: RgbaImage::from_pixel(w, h, BACKGROUND), rock_texture: None }
    }

    pub fn load_rock_texture(&mut self, path: &Path) -> Result<(), OutputError> {
        self.rock_texture = Some(image::open(path)?.to_rgba8());
        Ok(())
    }

    pub fn clear(&mut self) {
        for p in self.img.pixels_mut() {
            *p = BACKGROUND;
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), OutputError> {
        self.img.save(path)?;
        Ok(())
    }

    #[inline]
    fn blend(&mut self, x: i32, y: i32, c: Rgba<u8>) {
        let (w, h) = self.img.dimensions();
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h { return; }

        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        let a = c[3] as u32;
        for k in 0..3 {
            dst[k] = ((c[k] as u32 * a + dst[k] as u32 * (255 - a)) / 255) as u8;
        }
    }

    fn fill_polygon(&mut self, poly: &[Vec2], c: Rgba<u8>) {
        if poly.len() < 3 { return; }
        let h = self.img.height() as i32;
        let mut xs: Vec<f32> = Vec::new();

        for y in 0..h {
            let sy = y as f32 + 0.5;
            xs.clear();
            for (i, a) in poly.iter().enumerate() {
                let b = poly[(i + 1) % poly.len()];
                if (a.y <= sy && b.y > sy) || (b.y <= sy && a.y > sy) {
                    xs.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            xs.sort_by(|p, q| p.total_cmp(q));
            for span in xs.chunks_exact(2) {
                let x0 = span[0].round() as i32;
                let x1 = span[1].round() as i32;
                for x in x0..x1 {
                    self.blend(x, y, c);
                }
            }
        }
    }

    fn disc(&mut self, center: Vec2, r: f32, c: Rgba<u8>) {
        let r2 = r * r;
        let (x0, x1) = ((center.x - r).floor() as i32, (center.x + r).ceil() as i32);
        let (y0, y1) = ((center.y - r).floor() as i32, (center.y + r).ceil() as i32);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y, c);
                }
            }
        }
    }

    fn polyline(&mut self, line: &[Vec2], width: f32, c: Rgba<u8>) {
        let r = width / 2.0;
        for seg in line.windows(2) {
            let (a, b) = (seg[0], seg[1]);
            let steps = ((b - a).length() / 0.5).ceil().max(1.0) as usize;
            for s in 0..=steps {
                self.disc(a.lerp(b, s as f32 / steps as f32), r, c);
            }
        }
    }

    // Texture stretched over the disc's bounding square, rotated by angle
    fn textured_disc(&mut self, center: Vec2, r: f32, angle: f32) {
        let Some(tex) = self.rock_texture.take() else { return; };
        let (tw, th) = tex.dimensions();
        let (sin, cos) = (-angle).sin_cos();
        let r2 = r * r;

        for y in (center.y - r).floor() as i32..=(center.y + r).ceil() as i32 {
            for x in (center.x - r).floor() as i32..=(center.x + r).ceil() as i32 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() > r2 { continue; }
                let local = Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos);
                let u = ((local.x / (2.0 * r) + 0.5) * tw as f32) as u32;
                let v = ((local.y / (2.0 * r) + 0.5) * th as f32) as u32;
                let texel = *tex.get_pixel(u.min(tw - 1), v.min(th - 1));
                self.blend(x, y, texel);
            }
        }
        self.rock_texture = Some(tex);
    }
}

impl Renderer for Raster {
    fn surface(&mut self, polygon: &[Vec2], crest: &[Vec2]) {
        self.fill_polygon(polygon, WATER);
        self.polyline(crest, CREST_WIDTH, CREST);
    }

    fn rock(&mut self, center: Vec2, radius: f32, angle: f32) {
        if self.rock_texture.is_some() {
            self.textured_disc(center, radius, sanitize_angle(angle));
        } else {
            self.disc(center, radius, ROCK);
        }
    }

    fn float(&mut self, center: Vec2, radius: f32) {
        self.disc(center, radius, FLOAT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_fill_is_translucent_blue() {
        let mut r = Raster::new(10, 10);
        let square = [
            Vec2::new(0.0, 5.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        r.fill_polygon(&square, WATER);
        assert_eq!(*r.img.get_pixel(5, 2), BACKGROUND);
        assert_eq!(*r.img.get_pixel(5, 7), Rgba([0, 0, 50, 255]));
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut r = Raster::new(4, 4);
        r.disc(Vec2::new(-20.0, -20.0), 5.0, ROCK);
        r.rock(Vec2::new(100.0, 2.0), 3.0, f32::NAN);
        assert!(r.img.pixels().all(|p| *p == BACKGROUND));
    }
}
