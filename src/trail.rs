use glam::Vec2;
use log::{debug, info};

use crate::{
    config::TrailConfig, particle::Particle, random::RandomSource, scheduler::FrameScheduler,
    surface::DrawingSurface,
};

/// Live particles plus the state of the render loop.
///
/// The loop is active while exactly one frame request is outstanding. Spawning into an
/// idle trail requests a frame; [`step`](Self::step) requests the next one until the
/// last particle has expired.
pub struct ParticleTrail<R: RandomSource> {
    config: TrailConfig,
    random: R,

    particles: Vec<Particle>,
    loop_active: bool,
    pointer: Vec2,
}

impl<R: RandomSource> ParticleTrail<R> {
    pub fn new(config: TrailConfig, random: R) -> Self {
        Self {
            config,
            random,

            particles: Vec::new(),
            loop_active: false,
            pointer: Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TrailConfig {
        &mut self.config
    }

    /// Live particles in spawn order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.loop_active
    }

    /// Last pointer position the host reported.
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Records the pointer without a chance to spawn, e.g. while it is over host UI.
    pub fn track_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Spawns a particle at `position` with probability `spawn_probability`.
    pub fn pointer_moved(&mut self, position: Vec2, scheduler: &mut impl FrameScheduler) -> bool {
        self.track_pointer(position);

        if self.random.next_f32() >= self.config.spawn_probability {
            return false;
        }

        self.spawn(position, scheduler);
        true
    }

    pub fn spawn(&mut self, position: Vec2, scheduler: &mut impl FrameScheduler) {
        let particle = Particle::spawn(position, &self.config, &mut self.random);
        self.particles.push(particle);

        if !self.loop_active {
            debug!("Particle loop started");
            self.loop_active = true;
            scheduler.request_frame();
        }
    }

    /// Advances, draws and culls every particle, then schedules the next frame if
    /// anything is left alive.
    pub fn step(&mut self, surface: &mut impl DrawingSurface, scheduler: &mut impl FrameScheduler) {
        if self.particles.is_empty() {
            self.loop_active = false;
            return;
        }

        for particle in &mut self.particles {
            particle.advance();
        }

        surface.clear();
        for particle in self.particles.iter().filter(|p| !p.is_expired()) {
            let color = self.config.color.with_alpha(particle.alpha(&self.config));
            surface.fill_circle(particle.position, particle.radius, color);
        }

        self.particles.retain(|p| !p.is_expired());

        if self.particles.is_empty() {
            debug!("Particle loop stopped");
            self.loop_active = false;
        } else {
            scheduler.request_frame();
        }
    }

    /// Resynchronizes the surface with the viewport. Particles are left untouched.
    pub fn resize(&self, surface: &mut impl DrawingSurface, width: u32, height: u32) {
        info!(
            "Drawing surface resized: {{ width: {}, height: {}, particles: {} }}",
            width,
            height,
            self.particles.len()
        );
        surface.resize(width, height);
    }
}
