use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform source of `f32` values in `[0, 1)`.
pub trait RandomSource {
    fn next_f32(&mut self) -> f32;
}

/// Adapts a `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f32(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
pub(crate) struct Scripted {
    values: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub fn new(values: &[f32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f32(&mut self) -> f32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
