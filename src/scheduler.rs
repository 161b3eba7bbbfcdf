/// Host hook for animation frames.
///
/// Every call to [`request_frame`](FrameScheduler::request_frame) must be answered by
/// exactly one later call to [`ParticleTrail::step`](crate::ParticleTrail::step).
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Counts requests, hosts drain them one step at a time.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct Counting {
    pub requested: u32,
}

#[cfg(test)]
impl Counting {
    pub fn take(&mut self) -> bool {
        if self.requested == 0 {
            return false;
        }

        self.requested -= 1;
        true
    }
}

#[cfg(test)]
impl FrameScheduler for Counting {
    fn request_frame(&mut self) {
        self.requested += 1;
    }
}
