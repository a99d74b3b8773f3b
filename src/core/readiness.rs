/// One-way readiness flag: starts false, becomes true once, stays true
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadinessLatch {
    ready: bool,
}

impl ReadinessLatch {
    pub const fn new() -> Self {
        Self { ready: false }
    }

    /// Flip to ready. Returns true only for the call that performed the
    /// transition; later calls leave the latch untouched.
    pub fn fire(&mut self) -> bool {
        if self.ready {
            return false;
        }
        self.ready = true;
        true
    }

    pub const fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_ready() {
        assert!(!ReadinessLatch::new().is_ready());
        assert!(!ReadinessLatch::default().is_ready());
    }

    #[test]
    fn fires_exactly_once() {
        let mut latch = ReadinessLatch::new();

        assert!(latch.fire());
        assert!(latch.is_ready());

        for _ in 0..3 {
            assert!(!latch.fire());
            assert!(latch.is_ready());
        }
    }
}
