use folio_types::{EffectKind, EffectSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Simulator, Surface, Viewport};

/// One live effect: a simulator, its RNG and a stop flag.
///
/// The browser binding calls [`EffectRun::frame`] from its animation-frame
/// callback and [`EffectRun::stop`] on teardown. Once stopped, frames are
/// no-ops and the surface is left untouched.
#[derive(Debug)]
pub struct EffectRun<R = StdRng> {
    simulator: Simulator,
    rng: R,
    stopped: bool,
    frames: u64,
}

impl EffectRun<StdRng> {
    /// Start a run seeded from the OS entropy source
    pub fn start(kind: EffectKind, settings: &EffectSettings, viewport: Viewport) -> Self {
        Self::with_rng(kind, settings, viewport, StdRng::from_os_rng())
    }
}

impl<R: rand::Rng> EffectRun<R> {
    pub fn with_rng(
        kind: EffectKind,
        settings: &EffectSettings,
        viewport: Viewport,
        mut rng: R,
    ) -> Self {
        let simulator = Simulator::new(kind, settings, viewport, &mut rng);
        tracing::debug!(
            kind = kind.label(),
            width = viewport.width,
            height = viewport.height,
            particles = simulator.particle_count(),
            "Effect run started"
        );
        Self {
            simulator,
            rng,
            stopped: false,
            frames: 0,
        }
    }

    /// Advance and draw one frame. Returns `false` once the run is stopped,
    /// telling the caller not to schedule another frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> bool {
        if self.stopped {
            return false;
        }
        self.simulator.step(now_ms, &mut self.rng, surface);
        self.frames += 1;
        true
    }

    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        tracing::debug!(
            kind = self.simulator.kind().label(),
            frames = self.frames,
            "Effect run stopped"
        );
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.simulator.resize(viewport);
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
