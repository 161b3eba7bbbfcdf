use std::time::{Duration, Instant};

/// Measures frame times and optionally sleeps to hold a target framerate.
pub struct Framepacer {
    frame_start: Instant,
    last_frametime: f32,
    limit: Option<Duration>,
}

impl Framepacer {
    pub fn new(framerate: Option<u32>) -> Self {
        Self {
            frame_start: Instant::now(),
            last_frametime: 0.0,
            limit: framerate
                .filter(|fps| *fps > 0)
                .map(|fps| Duration::from_secs_f32(1.0 / fps as f32)),
        }
    }

    /// Duration of the previous frame in seconds
    pub fn frametime(&self) -> f32 {
        self.last_frametime
    }

    pub fn framerate(&self) -> f32 {
        if self.last_frametime > f32::EPSILON {
            1.0 / self.last_frametime
        } else {
            0.0
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end_frame(&mut self) {
        if let Some(limit) = self.limit {
            const ACCURACY: Duration = Duration::from_micros(100);
            let elapsed = self.frame_start.elapsed();

            if let Some(sleep_time) = limit.checked_sub(elapsed + ACCURACY) {
                std::thread::sleep(sleep_time);

                while self.frame_start.elapsed() < limit {
                    std::thread::yield_now();
                }
            }
        }

        self.last_frametime = self.frame_start.elapsed().as_secs_f32();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_holds_frame_duration() {
        let mut pacer = Framepacer::new(Some(100));
        pacer.begin_frame();
        pacer.end_frame();

        assert!(pacer.frametime() >= 0.0099);
        assert!(pacer.framerate() <= 101.0);
    }

    #[test]
    fn test_zero_framerate_means_unlimited() {
        let pacer = Framepacer::new(Some(0));
        assert!(pacer.limit.is_none());
        assert_eq!(pacer.framerate(), 0.0);
    }
}
