use folio_types::{EffectKind, EffectSettings};
use rand::Rng;

use super::{ConfettiShower, CrackerShow, Snowfall, Surface, Viewport};
use crate::seasonal::{ConfettiSettings, CrackerSettings, SnowSettings};

/// A running particle simulation of one of the three variants
#[derive(Debug, Clone)]
pub enum Simulator {
    Snow(Snowfall),
    Crackers(CrackerShow),
    Confetti(ConfettiShower),
}

impl Simulator {
    /// Resolve `settings` for `kind` and build the initial particle state
    pub fn new<R: Rng + ?Sized>(
        kind: EffectKind,
        settings: &EffectSettings,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        match kind {
            EffectKind::Fall => Self::Snow(Snowfall::new(SnowSettings::resolve(settings), viewport, rng)),
            EffectKind::Burst => {
                Self::Crackers(CrackerShow::new(CrackerSettings::resolve(settings), viewport))
            }
            EffectKind::Confetti => Self::Confetti(ConfettiShower::new(
                ConfettiSettings::resolve(settings),
                viewport,
                rng,
            )),
        }
    }

    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Snow(_) => EffectKind::Fall,
            Self::Crackers(_) => EffectKind::Burst,
            Self::Confetti(_) => EffectKind::Confetti,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        match self {
            Self::Snow(s) => s.resize(viewport),
            Self::Crackers(s) => s.resize(viewport),
            Self::Confetti(s) => s.resize(viewport),
        }
    }

    /// Advance one frame and draw it. `now_ms` is a monotonic timestamp,
    /// only the burst variant reads it.
    pub fn step<R: Rng + ?Sized, S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        rng: &mut R,
        surface: &mut S,
    ) {
        match self {
            Self::Snow(s) => s.step(rng, surface),
            Self::Crackers(s) => s.step(now_ms, rng, surface),
            Self::Confetti(s) => s.step(surface),
        }
    }

    /// Live particles right now
    pub fn particle_count(&self) -> usize {
        match self {
            Self::Snow(s) => s.flakes().len(),
            Self::Crackers(s) => s.spark_count(),
            Self::Confetti(s) => s.pieces().len(),
        }
    }
}
