/// Number of recent CPU readings averaged together
pub const WINDOW_CAPACITY: usize = 3;

/// Fixed-size circular buffer producing a moving average
///
/// The average only covers occupied slots, so the first reading comes back
/// unchanged and the window reaches full size on the third push.
#[derive(Debug, Clone, Default)]
pub struct RollingWindow {
    samples: [f64; WINDOW_CAPACITY],
    filled: usize,
    next: usize,
}

impl RollingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading, overwriting the oldest once full, and return the new average
    pub fn push(&mut self, value: f64) -> f64 {
        self.samples[self.next] = value;
        self.next = (self.next + 1) % WINDOW_CAPACITY;
        if self.filled < WINDOW_CAPACITY {
            self.filled += 1;
        }

        self.samples[..self.filled].iter().sum::<f64>() / self.filled as f64
    }

    /// Current average, `None` before the first push
    pub fn average(&self) -> Option<f64> {
        if self.filled == 0 {
            return None;
        }
        Some(self.samples[..self.filled].iter().sum::<f64>() / self.filled as f64)
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn capacity(&self) -> usize {
        WINDOW_CAPACITY
    }
}
