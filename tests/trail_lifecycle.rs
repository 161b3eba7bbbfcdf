use glam::Vec2;
use particle_trail::{
    CircleBatch, DrawingSurface, FrameScheduler, ParticleTrail, RngSource, TrailConfig,
};

/// Answers every frame request with exactly one step, like a display would.
#[derive(Default)]
struct Frames {
    pending: u32,
    total: u32,
}

impl FrameScheduler for Frames {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.total += 1;
    }
}

fn run_until_idle(
    trail: &mut ParticleTrail<RngSource<rand::rngs::StdRng>>,
    surface: &mut CircleBatch,
    frames: &mut Frames,
) -> u32 {
    let mut steps = 0;
    while frames.pending > 0 {
        assert_eq!(frames.pending, 1, "only one frame may be in flight");
        frames.pending -= 1;
        trail.step(surface, frames);
        steps += 1;
    }
    steps
}

#[test]
fn test_trail_goes_idle_after_last_particle() {
    let mut trail = ParticleTrail::new(TrailConfig::default(), RngSource::seeded(1));
    let mut surface = CircleBatch::new(640, 480);
    let mut frames = Frames::default();

    for i in 0..20 {
        trail.spawn(Vec2::new(i as f32, i as f32), &mut frames);
    }
    assert_eq!(frames.total, 1);

    let steps = run_until_idle(&mut trail, &mut surface, &mut frames);
    assert_eq!(steps, 50);
    assert!(trail.is_empty());
    assert!(!trail.is_active());
    assert!(surface.circles().is_empty());
}

#[test]
fn test_pointer_moves_spawn_about_thirty_percent() {
    let mut trail = ParticleTrail::new(TrailConfig::default(), RngSource::seeded(2024));
    let mut frames = Frames::default();

    let spawned = (0..10_000)
        .filter(|i| trail.pointer_moved(Vec2::new(*i as f32, 0.0), &mut frames))
        .count();

    assert_eq!(spawned, trail.len());
    assert!((2_700..3_300).contains(&spawned), "spawned {spawned}");
    assert_eq!(frames.total, 1);
}

#[test]
fn test_zero_probability_never_spawns() {
    let config = TrailConfig {
        spawn_probability: 0.0,
        ..Default::default()
    };
    let mut trail = ParticleTrail::new(config, RngSource::seeded(5));
    let mut frames = Frames::default();

    for _ in 0..1_000 {
        assert!(!trail.pointer_moved(Vec2::ZERO, &mut frames));
    }
    assert!(!trail.is_active());
    assert_eq!(frames.total, 0);
}

#[test]
fn test_staggered_spawns_keep_one_loop() {
    let mut trail = ParticleTrail::new(TrailConfig::default(), RngSource::seeded(9));
    let mut surface = CircleBatch::new(640, 480);
    let mut frames = Frames::default();

    trail.spawn(Vec2::ZERO, &mut frames);
    for _ in 0..30 {
        frames.pending -= 1;
        trail.step(&mut surface, &mut frames);
        trail.spawn(Vec2::new(100.0, 100.0), &mut frames);
        assert_eq!(frames.pending, 1);
    }

    // The last spawn happened on frame 30 and lives another 50 frames
    let steps = run_until_idle(&mut trail, &mut surface, &mut frames);
    assert_eq!(steps, 50);
    assert!(!trail.is_active());
}

#[test]
fn test_resize_keeps_particles() {
    let mut trail = ParticleTrail::new(TrailConfig::default(), RngSource::seeded(11));
    let mut surface = CircleBatch::new(640, 480);
    let mut frames = Frames::default();

    for i in 0..8 {
        trail.spawn(Vec2::new(600.0, 60.0 * i as f32), &mut frames);
    }
    let before = trail.particles().to_vec();

    trail.resize(&mut surface, 320, 240);
    assert_eq!(surface.size(), (320, 240));
    assert_eq!(trail.particles(), &before[..]);

    frames.pending -= 1;
    trail.step(&mut surface, &mut frames);
    assert_eq!(surface.circles().len(), 8);
    assert!(surface.visible().count() < 8);
}
