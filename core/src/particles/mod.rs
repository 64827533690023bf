//! Particle simulators for the seasonal overlay
//!
//! Three variants behind one closed enum:
//!
//! | Variant    | Pool                      | Physics                                  |
//! |------------|---------------------------|------------------------------------------|
//! | Snow       | fixed, recycled forever   | constant fall + sinusoidal wobble        |
//! | Crackers   | explosions spawned on a timer | radial launch, gravity, linear fade  |
//! | Confetti   | fixed, drained once       | diagonal launch, air drag, spin, fade    |
//!
//! Simulators never touch the browser. They draw through [`Surface`], and
//! the caller drives them one frame at a time (see [`EffectRun`]).

mod confetti;
mod crackers;
mod runner;
mod simulator;
mod snow;

#[cfg(test)]
mod simulator_tests;

pub use confetti::{ConfettiPiece, ConfettiShower};
pub use crackers::{CrackerShow, Explosion, Spark};
pub use runner::EffectRun;
pub use simulator::Simulator;
pub use snow::{SnowFlake, Snowfall};

/// Nominal frame rate used to convert "seconds to cross" into px/frame
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Canvas size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Drawing target for a simulator frame.
///
/// Implemented over `CanvasRenderingContext2d` in the web app and by
/// recording fakes in tests.
pub trait Surface {
    /// Erase the whole canvas to transparent
    fn clear(&mut self, viewport: Viewport);

    /// Gaussian blur applied to subsequent fills; `0.0` disables it
    fn set_blur(&mut self, px: f64);

    /// Filled circle centered on `(x, y)`
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, alpha: f64);

    /// Filled square of side `size` centered on `(x, y)`, rotated by
    /// `rotation` radians
    fn fill_rotated_square(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        rotation: f64,
        color: &str,
        alpha: f64,
    );
}

/// Uniform sample in `[min, max)`; degenerate or inverted ranges are fine
#[inline]
pub(crate) fn lerp_random<R: rand::Rng + ?Sized>(rng: &mut R, (min, max): (f64, f64)) -> f64 {
    min + rng.random::<f64>() * (max - min)
}

/// Convert "seconds to cross the viewport" into px/frame
#[inline]
pub(crate) fn crossing_speed(height: f64, seconds: f64) -> f64 {
    height / (seconds * FRAMES_PER_SECOND)
}
