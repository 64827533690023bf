use folio_types::{EffectKind, EffectSettings, SettingValue};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    Clear,
    Blur(f64),
    Circle { x: f64, y: f64, alpha: f64 },
    Square { alpha: f64 },
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    fn fills(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. } | DrawCall::Square { .. }))
            .count()
    }

    fn reset(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_blur(&mut self, px: f64) {
        self.calls.push(DrawCall::Blur(px));
    }

    fn fill_circle(&mut self, x: f64, y: f64, _radius: f64, _color: &str, alpha: f64) {
        self.calls.push(DrawCall::Circle { x, y, alpha });
    }

    fn fill_rotated_square(
        &mut self,
        _x: f64,
        _y: f64,
        _size: f64,
        _rotation: f64,
        _color: &str,
        alpha: f64,
    ) {
        self.calls.push(DrawCall::Square { alpha });
    }
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ─────────────────────────────────────────────────────────────────────────────
// Snow
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_snow_pool_size_is_constant() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let mut sim = Simulator::new(EffectKind::Fall, &EffectSettings::default(), viewport(), &mut rng);
    assert_eq!(sim.particle_count(), 100);

    for frame in 0..2000 {
        sim.step(frame as f64 * 16.0, &mut rng, &mut surface);
        assert_eq!(sim.particle_count(), 100);
    }
}

#[test]
fn test_snow_initial_state_above_viewport() {
    let mut rng = rng();
    let snow = Snowfall::new(
        crate::seasonal::SnowSettings::resolve(&EffectSettings::default()),
        viewport(),
        &mut rng,
    );
    for flake in snow.flakes() {
        assert!(flake.y >= -600.0 && flake.y < 0.0);
        assert!(flake.x >= 0.0 && flake.x < 800.0);
        assert!(flake.size >= 2.0 && flake.size <= 8.0);
        // 600 px over 2s..8s at 60 fps
        assert!(flake.speed >= 1.25 && flake.speed <= 5.0);
        assert_eq!(flake.opacity, 0.8);
    }
}

#[test]
fn test_snow_recycles_flakes_past_bottom() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let mut snow = Snowfall::new(
        crate::seasonal::SnowSettings::resolve(&EffectSettings::default()),
        viewport(),
        &mut rng,
    );

    for _ in 0..1500 {
        snow.step(&mut rng, &mut surface);
        for flake in snow.flakes() {
            assert!(flake.y <= 600.0);
            assert_eq!(flake.opacity, 0.8);
        }
    }
}

#[test]
fn test_snow_frame_draws_every_flake_with_blur() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let settings = EffectSettings {
        particle_count: Some(SettingValue::Number(12.0)),
        blur: Some(SettingValue::Text("2px".to_string())),
        ..Default::default()
    };
    let mut sim = Simulator::new(EffectKind::Fall, &settings, viewport(), &mut rng);
    sim.step(0.0, &mut rng, &mut surface);

    assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
    assert_eq!(surface.calls.get(1), Some(&DrawCall::Blur(2.0)));
    assert_eq!(surface.fills(), 12);
    assert_eq!(surface.calls.last(), Some(&DrawCall::Blur(0.0)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Crackers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_crackers_spawn_on_interval() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let mut show = CrackerShow::new(
        crate::seasonal::CrackerSettings::resolve(&EffectSettings::default()),
        viewport(),
    );

    show.step(0.0, &mut rng, &mut surface);
    let first = show.explosions().len();
    assert!((1..=3).contains(&first));

    // Inside the interval: no new volley
    show.step(100.0, &mut rng, &mut surface);
    assert_eq!(show.explosions().len(), first);

    show.step(301.0, &mut rng, &mut surface);
    assert!(show.explosions().len() > first);

    for explosion in show.explosions() {
        assert!(explosion.y <= 600.0 * 0.6);
        assert!(!explosion.sparks.is_empty());
    }
}

#[test]
fn test_crackers_opacity_non_increasing_and_removed_at_max_age() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let settings = EffectSettings {
        duration: Some(SettingValue::Text("1s-1s".to_string())),
        ..Default::default()
    };
    let mut show = CrackerShow::new(crate::seasonal::CrackerSettings::resolve(&settings), viewport());
    show.explode(400.0, 200.0, &mut rng);
    assert_eq!(show.spark_count(), 20);

    let mut previous = vec![1.0; 20];
    // Timestamps never advance, so only the first step would spawn; keep
    // the clock pinned after it so no extra volley shows up.
    show.step(0.0, &mut rng, &mut surface);
    let mut frames = 1;
    let tracked = &show.explosions()[0];
    assert_eq!(tracked.sparks[0].max_age, 60);

    while frames < 60 {
        let sparks: Vec<_> = show
            .explosions()
            .iter()
            .find(|e| e.x == 400.0 && e.y == 200.0)
            .map(|e| e.sparks.iter().map(|s| s.opacity).collect())
            .unwrap_or_default();
        for (now, before) in sparks.iter().zip(previous.iter()) {
            assert!(now <= before);
        }
        previous = sparks;
        show.step(100.0, &mut rng, &mut surface);
        frames += 1;
    }

    // Every spark of the tracked explosion reached age 60
    assert!(
        show.explosions()
            .iter()
            .all(|e| !(e.x == 400.0 && e.y == 200.0))
    );
}

#[test]
fn test_crackers_respect_max_explosions() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let settings = EffectSettings {
        cracker_count: Some(SettingValue::Number(2.0)),
        duration: Some(SettingValue::Text("10s-10s".to_string())),
        ..Default::default()
    };
    let mut sim = Simulator::new(EffectKind::Burst, &settings, viewport(), &mut rng);

    for i in 0..50 {
        sim.step(i as f64 * 400.0, &mut rng, &mut surface);
        if let Simulator::Crackers(show) = &sim {
            assert!(show.explosions().len() <= 2);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Confetti
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_confetti_is_finite() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let mut sim = Simulator::new(
        EffectKind::Confetti,
        &EffectSettings::default(),
        viewport(),
        &mut rng,
    );
    assert_eq!(sim.particle_count(), 150);

    let mut last = sim.particle_count();
    // 0.8 / 0.003 ≈ 267 frames until every piece has faded
    for frame in 0..300 {
        sim.step(frame as f64 * 16.0, &mut rng, &mut surface);
        assert!(sim.particle_count() <= last);
        last = sim.particle_count();
    }
    assert_eq!(sim.particle_count(), 0);

    match &sim {
        Simulator::Confetti(shower) => assert!(shower.is_finished()),
        other => panic!("unexpected variant {:?}", other.kind()),
    }

    surface.reset();
    sim.step(10_000.0, &mut rng, &mut surface);
    assert_eq!(surface.fills(), 0);
}

#[test]
fn test_confetti_opacity_decays_linearly() {
    let mut rng = rng();
    let mut surface = RecordingSurface::default();
    let mut shower = ConfettiShower::new(
        crate::seasonal::ConfettiSettings::resolve(&EffectSettings::default()),
        Viewport::new(800.0, 100_000.0),
        &mut rng,
    );
    for _ in 0..10 {
        shower.step(&mut surface);
    }
    for piece in shower.pieces() {
        assert!((piece.opacity - (0.8 - 10.0 * 0.003)).abs() < 1e-9);
        assert!(piece.rotation_speed.abs() <= 0.05);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_no_draws_after_stop() {
    for kind in [EffectKind::Fall, EffectKind::Burst, EffectKind::Confetti] {
        let mut surface = RecordingSurface::default();
        let mut run = EffectRun::with_rng(kind, &EffectSettings::default(), viewport(), rng());

        assert!(run.frame(0.0, &mut surface), "{:?} should run", kind);
        assert!(surface.fills() > 0, "{:?} should draw on its first frame", kind);

        run.stop();
        run.stop();
        assert!(run.is_stopped());

        surface.reset();
        for i in 1..=5 {
            assert!(!run.frame(i as f64 * 400.0, &mut surface));
        }
        assert!(surface.calls.is_empty(), "{:?} drew after stop", kind);
        assert_eq!(run.frames(), 1);
    }
}

#[test]
fn test_resize_reaches_simulator() {
    let mut surface = RecordingSurface::default();
    let mut run = EffectRun::with_rng(
        EffectKind::Fall,
        &EffectSettings::default(),
        viewport(),
        rng(),
    );
    run.resize(Viewport::new(200.0, 100.0));

    for i in 0..500 {
        run.frame(i as f64, &mut surface);
    }
    if let Simulator::Snow(snow) = run.simulator() {
        assert!(snow.flakes().iter().all(|f| f.y <= 100.0));
    }
}
