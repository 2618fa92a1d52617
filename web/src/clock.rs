/// Seconds elapsed between animation frames.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct DeltaTime {
    last_ms: Option<f64>,
    dt: f64,
}

impl DeltaTime {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Takes the frame timestamp in milliseconds and returns the elapsed seconds.
    pub(crate) fn update(&mut self, now_ms: f64) -> f64 {
        self.dt = match self.last_ms {
            Some(last_ms) => ((now_ms - last_ms) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.dt
    }

    /// Forgets the previous frame, e.g. after the page was hidden.
    pub(crate) fn reset(&mut self) {
        self.last_ms = None;
        self.dt = 0.0;
    }

    pub(crate) fn dt(&self) -> f64 {
        self.dt
    }
}
