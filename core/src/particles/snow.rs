use rand::Rng;

use super::{Surface, Viewport, crossing_speed, lerp_random};
use crate::seasonal::SnowSettings;

/// y position a recycled flake restarts from, just above the viewport
const RESPAWN_Y: f64 = -10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SnowFlake {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// px per frame
    pub speed: f64,
    pub opacity: f64,
}

/// Endless snowfall over a fixed, recycled pool of flakes
#[derive(Debug, Clone)]
pub struct Snowfall {
    settings: SnowSettings,
    flakes: Vec<SnowFlake>,
    viewport: Viewport,
}

impl Snowfall {
    pub fn new<R: Rng + ?Sized>(settings: SnowSettings, viewport: Viewport, rng: &mut R) -> Self {
        // Speeds are fixed at creation from the initial viewport height
        let speeds = (
            crossing_speed(viewport.height, settings.fall_seconds.0),
            crossing_speed(viewport.height, settings.fall_seconds.1),
        );

        let flakes = (0..settings.particle_count)
            .map(|_| SnowFlake {
                x: rng.random::<f64>() * viewport.width,
                // Start spread over one screen height above the top edge
                y: rng.random::<f64>() * viewport.height - viewport.height,
                size: lerp_random(rng, settings.size),
                speed: lerp_random(rng, speeds),
                opacity: settings.opacity,
            })
            .collect();

        Self {
            settings,
            flakes,
            viewport,
        }
    }

    pub fn flakes(&self) -> &[SnowFlake] {
        &self.flakes
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn step<R: Rng + ?Sized, S: Surface + ?Sized>(&mut self, rng: &mut R, surface: &mut S) {
        surface.clear(self.viewport);
        surface.set_blur(self.settings.blur_px);

        for flake in &mut self.flakes {
            flake.y += flake.speed;
            flake.x += (flake.y * 0.02).sin() * 0.3;

            if flake.y > self.viewport.height {
                flake.y = RESPAWN_Y;
                flake.x = rng.random::<f64>() * self.viewport.width;
            }

            surface.fill_circle(
                flake.x,
                flake.y,
                flake.size / 2.0,
                &self.settings.color,
                flake.opacity,
            );
        }

        surface.set_blur(0.0);
    }
}
