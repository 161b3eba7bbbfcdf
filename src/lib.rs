//! A pointer-driven particle trail.
//!
//! Particles are spawned under the pointer, drift and fade for a fixed number of
//! frames, and are then culled. The render loop only runs while particles are alive.
//! Hosts plug in a [`FrameScheduler`], a [`DrawingSurface`] and a [`RandomSource`].

pub mod config;
pub mod particle;
pub mod random;
pub mod scheduler;
pub mod surface;
pub mod trail;

pub use config::TrailConfig;
pub use particle::Particle;
pub use random::{RandomSource, RngSource};
pub use scheduler::FrameScheduler;
pub use surface::{Circle, CircleBatch, DrawingSurface, Rgba};
pub use trail::ParticleTrail;
