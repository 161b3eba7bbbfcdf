use glam::Vec2;

use crate::{
    config::{frames_until_expired, TrailConfig},
    random::RandomSource,
};

/// A short-lived dot of the trail.
///
/// Life starts at `1.0` and loses `life_decay` per update. Updates are counted as
/// whole frames so expiry happens on exactly the frame where the subtraction would
/// first reach zero, free of accumulated rounding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,

    life_decay: f32,
    elapsed: u32,
    lifetime: u32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, life_decay: f32) -> Self {
        Self {
            position,
            velocity,
            radius,

            life_decay,
            elapsed: 0,
            lifetime: frames_until_expired(life_decay),
        }
    }

    /// Random radius and velocity, drawn in that order (radius, x, y).
    pub fn spawn(position: Vec2, config: &TrailConfig, random: &mut impl RandomSource) -> Self {
        let radius = config.radius_min + random.next_f32() * (config.radius_max - config.radius_min);
        let velocity = Vec2::new(
            (random.next_f32() * 2.0 - 1.0) * config.max_speed,
            (random.next_f32() * 2.0 - 1.0) * config.max_speed,
        );

        Self::new(position, velocity, radius, config.life_decay)
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.elapsed = self.elapsed.saturating_add(1);
    }

    /// `1.0` at spawn, zero or below once expired.
    pub fn remaining_life(&self) -> f32 {
        1.0 - self.elapsed as f32 * self.life_decay
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.lifetime
    }

    pub fn alpha(&self, config: &TrailConfig) -> f32 {
        self.remaining_life().max(0.0) * config.alpha_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Scripted;

    #[test]
    fn test_spawn_maps_random_values() {
        let config = TrailConfig::default();
        let mut random = Scripted::new(&[0.5, 0.0, 0.75]);

        let particle = Particle::spawn(Vec2::new(10.0, 20.0), &config, &mut random);
        assert_eq!(particle.position, Vec2::new(10.0, 20.0));
        assert_eq!(particle.radius, 2.5);
        assert_eq!(particle.velocity, Vec2::new(-2.0, 1.0));
        assert_eq!(particle.remaining_life(), 1.0);
    }

    #[test]
    fn test_spawn_ranges() {
        let config = TrailConfig::default();
        let mut random = crate::random::RngSource::seeded(3);

        for _ in 0..1_000 {
            let particle = Particle::spawn(Vec2::ZERO, &config, &mut random);
            assert!((1.0..4.0).contains(&particle.radius));
            assert!((-2.0..2.0).contains(&particle.velocity.x));
            assert!((-2.0..2.0).contains(&particle.velocity.y));
        }
    }

    #[test]
    fn test_life_decreases_by_fixed_step() {
        let mut particle = Particle::new(Vec2::ZERO, Vec2::new(1.0, -0.5), 1.0, 0.02);

        let mut previous = particle.remaining_life();
        for frame in 1..=50 {
            particle.advance();
            let life = particle.remaining_life();
            assert!(life < previous);
            assert!((previous - life - 0.02).abs() < 1e-6);
            assert_eq!(particle.is_expired(), frame == 50);
            previous = life;
        }

        assert_eq!(particle.position, Vec2::new(50.0, -25.0));
        assert!(particle.remaining_life().abs() < 1e-6);
    }

    #[test]
    fn test_uneven_decay_expires_when_life_crosses_zero() {
        let mut particle = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, 0.3);

        let mut lives = vec![particle.remaining_life()];
        while !particle.is_expired() {
            particle.advance();
            lives.push(particle.remaining_life());
        }

        let expected = [1.0, 0.7, 0.4, 0.1, -0.2];
        assert_eq!(lives.len(), expected.len(), "lives: {lives:?}");
        for (life, expected) in lives.iter().zip(expected) {
            assert!((life - expected).abs() < 1e-6, "lives: {lives:?}");
        }
    }

    #[test]
    fn test_alpha_fades_with_life() {
        let config = TrailConfig::default();
        let mut particle = Particle::new(Vec2::ZERO, Vec2::ZERO, 1.0, 0.5);
        assert_eq!(particle.alpha(&config), 0.5);

        particle.advance();
        assert_eq!(particle.alpha(&config), 0.25);
    }
}
