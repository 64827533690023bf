use std::f64::consts::TAU;

use rand::Rng;

use super::{Surface, Viewport, crossing_speed, lerp_random};
use crate::seasonal::ConfettiSettings;

const START_Y: f64 = -10.0;
const START_OPACITY: f64 = 0.8;
const FADE_PER_FRAME: f64 = 0.003;
/// Horizontal velocity multiplier applied every frame
const AIR_DRAG: f64 = 0.99;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub color: usize,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub opacity: f64,
}

/// One-shot confetti shower. Pieces are never respawned, so the shower
/// drains and then stays empty.
#[derive(Debug, Clone)]
pub struct ConfettiShower {
    colors: Vec<String>,
    pieces: Vec<ConfettiPiece>,
    viewport: Viewport,
}

impl ConfettiShower {
    pub fn new<R: Rng + ?Sized>(
        settings: ConfettiSettings,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let speeds = (
            crossing_speed(viewport.height, settings.fall_seconds.0),
            crossing_speed(viewport.height, settings.fall_seconds.1),
        );
        let palette_len = settings.colors.len().max(1);

        let pieces = (0..settings.particle_count)
            .map(|_| {
                let angle = rng.random::<f64>() * TAU;
                let speed = lerp_random(rng, speeds);
                ConfettiPiece {
                    x: rng.random::<f64>() * viewport.width,
                    y: START_Y,
                    vx: angle.cos() * speed * 2.0,
                    vy: speed,
                    size: lerp_random(rng, settings.size),
                    color: rng.random_range(0..palette_len),
                    rotation: rng.random::<f64>() * TAU,
                    rotation_speed: (rng.random::<f64>() - 0.5) * 0.1,
                    opacity: START_OPACITY,
                }
            })
            .collect();

        Self {
            colors: settings.colors,
            pieces,
            viewport,
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_finished(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.viewport);

        let height = self.viewport.height;
        let colors = &self.colors;
        self.pieces.retain_mut(|piece| {
            piece.x += piece.vx;
            piece.y += piece.vy;
            piece.vx *= AIR_DRAG;
            piece.rotation += piece.rotation_speed;
            piece.opacity -= FADE_PER_FRAME;

            let alive = piece.y < height && piece.opacity > 0.0;
            if alive && let Some(color) = colors.get(piece.color) {
                surface.fill_rotated_square(
                    piece.x,
                    piece.y,
                    piece.size,
                    piece.rotation,
                    color,
                    piece.opacity,
                );
            }
            alive
        });
    }
}
