use std::time::Instant;

/// Frame clock - measures elapsed seconds between frame ticks
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create clock whose first tick is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self { last_tick: start }
    }

    /// Seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Tick against an explicit instant. Instants earlier than the last
    /// tick yield zero and leave the clock where it was.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        if now <= self.last_tick {
            return 0.0;
        }
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Restart measurement from now, discarding pending time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
