use crate::constants::MS_PER_TICK;

/// Scaled ticks for an elapsed wall-clock span. Gravity, friction and the
/// jump impulse are tuned against this scale.
pub fn dt_from_elapsed_ms(elapsed_ms: f64) -> f64 {
    elapsed_ms / MS_PER_TICK
}

/// Turns animation-frame timestamps into `dt` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    /// `start_ms` is the timestamp the first `tick` is measured from.
    pub fn new(start_ms: f64) -> Self {
        FrameClock { last_ms: start_ms }
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }

    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let dt = dt_from_elapsed_ms(timestamp_ms - self.last_ms);
        self.last_ms = timestamp_ms;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}
