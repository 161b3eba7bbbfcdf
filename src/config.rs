use crate::surface::Rgba;

/// Tunables of the particle trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    /// Chance that a single pointer move spawns a particle
    pub spawn_probability: f32,

    pub radius_min: f32,
    pub radius_max: f32,

    /// Velocity components are drawn from `[-max_speed, max_speed)`
    pub max_speed: f32,

    /// Life lost per frame, life starts at `1.0`
    pub life_decay: f32,

    pub color: Rgba,
    /// Alpha at full life, fades linearly to zero
    pub alpha_scale: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            spawn_probability: 0.3,

            radius_min: 1.0,
            radius_max: 4.0,

            max_speed: 2.0,

            life_decay: 0.02,

            color: Rgba::from_rgb8(99, 102, 241),
            alpha_scale: 0.5,
        }
    }
}

impl TrailConfig {
    /// Number of updates a particle survives before it expires.
    pub fn lifetime_frames(&self) -> u32 {
        frames_until_expired(self.life_decay)
    }
}

/// Subtractions of `life_decay` from `1.0` until life is at or below zero.
pub(crate) fn frames_until_expired(life_decay: f32) -> u32 {
    // 1 / 0.02f32 lands just above 50
    const SLACK: f64 = 1e-4;

    if life_decay.is_nan() || life_decay <= 0.0 {
        return u32::MAX;
    }

    (1.0 / life_decay as f64 - SLACK).ceil().clamp(1.0, u32::MAX as f64) as u32
}
