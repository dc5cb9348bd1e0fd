// curve.rs - Crest smoothing
//
// Natural cubic spline through the spring samples, resampled at a finer
// horizontal step. Knots are uniform because springs are evenly spaced.

use glam::Vec2;
use ndarray::Array1;

use crate::config::MAX_CURVE_SAMPLES;

/// Second derivatives at each knot (natural boundary: zero at both ends).
fn second_derivatives(y: &Array1<f32>, h: f32) -> Array1<f32> {
    let n = y.len();
    let mut m = Array1::<f32>::zeros(n);
    if n < 3 {
        return m;
    }

    // Thomas algorithm on the interior rows: m[i-1] + 4 m[i] + m[i+1] = rhs[i]
    let inner = n - 2;
    let mut c = Array1::<f32>::zeros(inner);
    let mut d = Array1::<f32>::zeros(inner);
    let k = 6.0 / (h * h);

    for j in 0..inner {
        let i = j + 1;
        let rhs = k * (y[i + 1] - 2.0 * y[i] + y[i - 1]);
        if j == 0 {
            c[j] = 1.0 / 4.0;
            d[j] = rhs / 4.0;
        } else {
            let denom = 4.0 - c[j - 1];
            c[j] = 1.0 / denom;
            d[j] = (rhs - d[j - 1]) / denom;
        }
    }

    m[inner] = d[inner - 1];
    for j in (0..inner - 1).rev() {
        m[j + 1] = d[j] - c[j] * m[j + 2];
    }
    m
}

/// Uniform natural cubic spline.
pub struct Spline {
    x0: f32,
    h: f32,
    y: Array1<f32>,
    m: Array1<f32>,
}

impl Spline {
    /// Build from evenly spaced samples. Needs at least two points.
    pub fn new(x0: f32, h: f32, y: Array1<f32>) -> Option<Self> {
        if y.len() < 2 || !(h > 0.0) {
            return None;
        }
        let m = second_derivatives(&y, h);
        Some(Self { x0, h, y, m })
    }

    /// Value at `x`. Outside the knot range the end polynomial extrapolates.
    pub fn eval(&self, x: f32) -> f32 {
        let last = self.y.len() - 2;
        let seg = ((x - self.x0) / self.h).floor();
        let i = if seg.is_finite() { (seg.max(0.0) as usize).min(last) } else { 0 };

        let h = self.h;
        let xi = self.x0 + i as f32 * h;
        let a = xi + h - x;
        let b = x - xi;
        let (mi, mj) = (self.m[i], self.m[i + 1]);
        let (yi, yj) = (self.y[i], self.y[i + 1]);

        mi * a * a * a / (6.0 * h)
            + mj * b * b * b / (6.0 * h)
            + (yi - mi * h * h / 6.0) * a / h
            + (yj - mj * h * h / 6.0) * b / h
    }
}

/// Resample evenly spaced points every `step` pixels.
///
/// Returns the input unchanged when it is too short to fit a cubic, when
/// the step would not add samples, or when it would exceed
/// [`MAX_CURVE_SAMPLES`].
pub fn smooth(points: &[Vec2], step: f32) -> Vec<Vec2> {
    if points.len() < 3 || !(step > 0.0) {
        return points.to_vec();
    }
    let x0 = points[0].x;
    let x1 = points[points.len() - 1].x;
    let h = points[1].x - points[0].x;
    if h <= step {
        return points.to_vec();
    }

    let y: Array1<f32> = points.iter().map(|p| p.y).collect();
    let Some(spline) = Spline::new(x0, h, y) else {
        return points.to_vec();
    };

    let span = ((x1 - x0) / step).floor();
    if !(span.is_finite() && span < MAX_CURVE_SAMPLES as f32) {
        return points.to_vec();
    }
    let count = span as usize + 1;
    let mut out = Vec::with_capacity(count + 1);
    for k in 0..count {
        let x = x0 + k as f32 * step;
        out.push(Vec2::new(x, spline.eval(x)));
    }
    if out.last().is_some_and(|p| p.x < x1) {
        out.push(Vec2::new(x1, spline.eval(x1)));
    }
    out
}
