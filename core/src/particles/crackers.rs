use std::f64::consts::TAU;

use rand::Rng;

use super::{FRAMES_PER_SECOND, Surface, Viewport, lerp_random};
use crate::seasonal::CrackerSettings;

/// Wall-clock gap between explosion volleys
pub const SPAWN_INTERVAL_MS: f64 = 300.0;
/// Downward acceleration in px/frame²
const GRAVITY: f64 = 0.2;
/// Launch speed range in px/frame
const LAUNCH_SPEED: (f64, f64) = (2.0, 10.0);
/// Explosions only start in the upper part of the viewport
const SPAWN_HEIGHT_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    /// Index into the palette
    pub color: usize,
    pub opacity: f64,
    /// Frames lived so far
    pub age: u32,
    pub max_age: u32,
}

impl Spark {
    pub fn is_spent(&self) -> bool {
        self.age >= self.max_age
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub x: f64,
    pub y: f64,
    pub sparks: Vec<Spark>,
}

/// Periodic firecracker bursts
#[derive(Debug, Clone)]
pub struct CrackerShow {
    settings: CrackerSettings,
    explosions: Vec<Explosion>,
    last_volley_ms: Option<f64>,
    viewport: Viewport,
}

impl CrackerShow {
    pub fn new(settings: CrackerSettings, viewport: Viewport) -> Self {
        Self {
            settings,
            explosions: Vec::new(),
            last_volley_ms: None,
            viewport,
        }
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn spark_count(&self) -> usize {
        self.explosions.iter().map(|e| e.sparks.len()).sum()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Spawn one explosion at `(x, y)`
    pub fn explode<R: Rng + ?Sized>(&mut self, x: f64, y: f64, rng: &mut R) {
        let duration_secs = lerp_random(rng, self.settings.duration_secs);
        let max_age = ((duration_secs * FRAMES_PER_SECOND).ceil() as u32).max(1);
        let palette_len = self.settings.colors.len().max(1);

        let sparks = (0..self.settings.particles_per_cracker)
            .map(|_| {
                let angle = rng.random::<f64>() * TAU;
                let speed = lerp_random(rng, LAUNCH_SPEED);
                Spark {
                    x,
                    y,
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    size: lerp_random(rng, self.settings.size),
                    color: rng.random_range(0..palette_len),
                    opacity: 1.0,
                    age: 0,
                    max_age,
                }
            })
            .collect();

        self.explosions.push(Explosion { x, y, sparks });
    }

    pub fn step<R: Rng + ?Sized, S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        rng: &mut R,
        surface: &mut S,
    ) {
        surface.clear(self.viewport);

        let due = self
            .last_volley_ms
            .is_none_or(|last| now_ms - last > SPAWN_INTERVAL_MS);
        if due {
            let volley = rng.random_range(1..=3usize);
            for _ in 0..volley {
                if self.explosions.len() >= self.settings.max_explosions {
                    break;
                }
                let x = rng.random::<f64>() * self.viewport.width;
                let y = rng.random::<f64>() * self.viewport.height * SPAWN_HEIGHT_FRACTION;
                self.explode(x, y, rng);
            }
            self.last_volley_ms = Some(now_ms);
        }

        let colors = &self.settings.colors;
        for explosion in &mut self.explosions {
            explosion.sparks.retain_mut(|spark| {
                spark.x += spark.vx;
                spark.y += spark.vy;
                spark.vy += GRAVITY;
                spark.age += 1;
                spark.opacity = (1.0 - spark.age as f64 / spark.max_age as f64).max(0.0);

                if let Some(color) = colors.get(spark.color) {
                    surface.fill_circle(spark.x, spark.y, spark.size / 2.0, color, spark.opacity);
                }

                !spark.is_spent()
            });
        }
        self.explosions.retain(|e| !e.sparks.is_empty());
    }
}
