/// Virtual millisecond clock that only advances while running.
///
/// Callers feed it wall-clock readings; time spent paused is skipped, so
/// anything timestamped against this clock resumes exactly where it stopped.
#[derive(Clone, Debug, Default)]
pub struct PausableClock {
    virtual_ms: f64,
    last_real_ms: Option<f64>,
    paused: bool,
}

impl PausableClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by the wall-clock time elapsed since the previous reading and
    /// return the virtual now. Readings that go backwards count as zero.
    pub fn sync(&mut self, real_ms: f64) -> f64 {
        if let Some(last) = self.last_real_ms {
            if !self.paused {
                self.virtual_ms += (real_ms - last).max(0.0);
            }
        }
        self.last_real_ms = Some(real_ms);
        self.virtual_ms
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.virtual_ms
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self, real_ms: f64) {
        self.sync(real_ms);
        self.paused = true;
    }

    pub fn resume(&mut self, real_ms: f64) {
        self.sync(real_ms);
        self.paused = false;
    }
}
