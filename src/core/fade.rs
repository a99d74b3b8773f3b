use crate::math::ease_in_out;

/// Default fade-in length in seconds
pub const DEFAULT_FADE_DURATION: f32 = 1.0;

/// Opacity transition from 0 to 1 with ease-in-out timing.
/// Inactive until started; holds at full opacity once complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    duration: f32,
    elapsed: f32,
    started: bool,
    reported: bool,
}

impl Fade {
    /// Create an unstarted fade. Negative or non-finite durations become zero.
    pub fn new(duration: f32) -> Self {
        let duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
        Self {
            duration,
            elapsed: 0.0,
            started: false,
            reported: false,
        }
    }

    /// Begin the transition. Starting twice does not rewind it.
    pub fn start(&mut self) {
        self.started = true;
    }

    /// Advance with delta. Returns true exactly once, on the first tick
    /// that finds the fade complete (the first tick after `start` for a
    /// zero duration).
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.started || self.reported {
            return false;
        }
        if delta.is_finite() && delta > 0.0 {
            self.elapsed = (self.elapsed + delta).min(self.duration);
        }
        self.reported = self.is_complete();
        self.reported
    }

    pub fn is_complete(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    /// Linear progress [0, 1]
    pub fn progress(&self) -> f32 {
        if !self.started {
            0.0
        } else if self.duration == 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Eased opacity [0, 1]
    pub fn opacity(&self) -> f32 {
        ease_in_out(self.progress())
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new(DEFAULT_FADE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invisible_until_started() {
        let mut fade = Fade::new(1.0);

        assert!(!fade.tick(0.5));
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_complete());
    }

    #[test]
    fn completes_once() {
        let mut fade = Fade::new(1.0);
        fade.start();

        assert!(!fade.tick(0.5));
        assert_eq!(fade.progress(), 0.5);
        assert!((fade.opacity() - 0.5).abs() < 1e-4);

        assert!(fade.tick(0.6));
        assert_eq!(fade.opacity(), 1.0);
        assert!(!fade.tick(0.1));
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn zero_duration_reports_completion_on_first_tick() {
        let mut fade = Fade::new(0.0);
        fade.start();
        assert!(fade.is_complete());

        assert!(fade.tick(0.016));
        assert!(!fade.tick(0.016));
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn restart_does_not_rewind() {
        let mut fade = Fade::new(1.0);
        fade.start();
        fade.tick(0.25);
        fade.start();
        assert_eq!(fade.progress(), 0.25);
    }

    #[test]
    fn zero_duration_is_immediately_opaque() {
        let mut fade = Fade::new(0.0);
        assert_eq!(fade.opacity(), 0.0);
        fade.start();
        assert!(fade.is_complete());
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn bad_duration_is_clamped() {
        assert_eq!(Fade::new(-2.0).duration(), 0.0);
        assert_eq!(Fade::new(f32::NAN).duration(), 0.0);
    }
}
