// splash.rs - Body/surface coupling
//
// A body is either above the water or has splashed. The first tick its
// lower edge reaches the rest level it kicks the nearest spring, and
// optionally raises the whole surface by the volume it displaces. The
// caller owns the has-splashed flag; the wave never looks at bodies.

use log::debug;

use super::Wave;

/// What a body hands the surface when it enters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Velocity added to the spring under the body
    pub impulse: f32,
    /// Cross-section area pushed into the water, if any
    pub volume: Option<f32>,
}

/// Rest height under `x`, falling back to the global level off the ends.
pub fn rest_height_at(wave: &Wave, x: f32) -> f32 {
    wave.target_at(wave.sample_index_for_x(x))
        .unwrap_or_else(|| wave.rest_level())
}

/// True when a body with its lower edge at `bottom` has reached the water.
#[inline]
pub fn reaches_surface(wave: &Wave, x: f32, bottom: f32) -> bool {
    bottom >= rest_height_at(wave, x)
}

/// Run the above->splashed transition for one body.
///
/// Returns the spring index that was kicked, or `None` if the body was
/// already splashed or is still above the surface.
pub fn try_enter(
    wave: &mut Wave,
    splashed: &mut bool,
    x: f32,
    bottom: f32,
    entry: Entry,
    volume_rise: bool,
) -> Option<isize> {
    if *splashed || !reaches_surface(wave, x, bottom) {
        return None;
    }
    *splashed = true;

    let index = wave.sample_index_for_x(x);
    wave.splash(index, entry.impulse);
    if volume_rise {
        if let Some(volume) = entry.volume {
            wave.add_volume(volume);
        }
    }
    debug!("splash at x={:.1} spring={} impulse={:.1}", x, index, entry.impulse);
    Some(index)
}
