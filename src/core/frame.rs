/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Seconds between FPS samples
pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Numbers frame ticks and keeps a once-per-second FPS sample
#[derive(Debug, Default)]
pub struct FrameCounter {
    next_number: u64,
    time: f32,
    fps: f32,
    sample_frames: u32,
    sample_time: f32,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tick of `delta` seconds and describe it
    pub fn advance(&mut self, delta: f32) -> FrameInfo {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.time += delta;

        let info = FrameInfo::new(self.next_number, self.time, delta);
        self.next_number += 1;

        self.sample_frames += 1;
        self.sample_time += delta;
        if self.sample_time >= FPS_UPDATE_INTERVAL {
            self.fps = self.sample_frames as f32 / self.sample_time;
            log::debug!("FPS: {:.1}", self.fps);
            self.sample_frames = 0;
            self.sample_time = 0.0;
        }

        info
    }

    /// Number of frames recorded so far
    pub fn frame_count(&self) -> u64 {
        self.next_number
    }

    /// Most recent FPS sample, zero until the first full second
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_numbered_from_zero() {
        let mut counter = FrameCounter::new();

        let first = counter.advance(0.016);
        let second = counter.advance(0.016);

        assert_eq!(first.number, 0);
        assert_eq!(second.number, 1);
        assert!((second.time - 0.032).abs() < 1e-6);
        assert_eq!(counter.frame_count(), 2);
    }

    #[test]
    fn invalid_deltas_count_as_zero() {
        let mut counter = FrameCounter::new();

        assert_eq!(counter.advance(-1.0).delta, 0.0);
        assert_eq!(counter.advance(f32::NAN).delta, 0.0);
        assert_eq!(counter.advance(f32::INFINITY).time, 0.0);
    }

    #[test]
    fn fps_sampled_after_one_second() {
        let mut counter = FrameCounter::new();

        for _ in 0..59 {
            counter.advance(1.0 / 60.0);
        }
        assert_eq!(counter.fps(), 0.0);

        counter.advance(1.0 / 60.0 + 1e-4);
        assert!((counter.fps() - 60.0).abs() < 0.5);
    }
}
