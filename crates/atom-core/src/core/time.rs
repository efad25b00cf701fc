/// Elapsed-time accumulator driving electron orbits.
/// Orbits are a pure function of elapsed seconds, so no fixed stepping is needed.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    /// Seconds accumulated since creation or the last reset.
    elapsed: f32,
    /// Number of accepted frame deltas.
    frames: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame delta. Negative or non-finite deltas are dropped.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.elapsed += frame_dt;
            self.frames += 1;
        }
        self.elapsed
    }

    /// Seconds elapsed.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = AnimationClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-6);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn ignores_bad_deltas() {
        let mut clock = AnimationClock::new();
        clock.advance(-1.0);
        clock.advance(f32::NAN);
        clock.advance(f32::INFINITY);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn reset_zeroes() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
    }
}
