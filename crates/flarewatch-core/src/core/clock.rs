// ---- Simulation Clock ----
//
// All orbital state is a pure function of one scalar: the offset in
// simulated minutes from the session epoch (the instant the dashboard
// loaded). The UI scrubs this offset directly; Playing mode advances it
// from the host's frame callbacks. Nothing else mutates time.

/// Earliest reachable offset, in minutes (12 hours into the past).
pub const TIMELINE_MIN_MINUTES: f64 = -720.0;
/// Latest reachable offset, in minutes (12 hours into the future).
pub const TIMELINE_MAX_MINUTES: f64 = 720.0;
/// Granularity of the UI scrubber, in minutes.
pub const SCRUB_STEP_MINUTES: f64 = 1.0;
/// Jump applied by the fast-forward control, in minutes.
pub const FAST_FORWARD_MINUTES: f64 = 60.0;
/// Playback rate: one simulated minute per real second.
pub const PLAY_RATE_MINUTES_PER_SEC: f64 = 1.0;

/// The owned simulation clock. Offset is clamped to the timeline window
/// on every write, so downstream code never sees an out-of-range time.
#[derive(Debug, Clone)]
pub struct SimClock {
    offset_minutes: f64,
    playing: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            offset_minutes: 0.0,
            playing: false,
        }
    }

    /// Current offset from the session epoch, in simulated minutes.
    pub fn offset_minutes(&self) -> f64 {
        self.offset_minutes
    }

    /// Current offset in simulated hours.
    pub fn offset_hours(&self) -> f64 {
        self.offset_minutes / 60.0
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Jump to an absolute offset (scrubber). Clamped to the timeline window.
    pub fn set(&mut self, offset_minutes: f64) {
        self.offset_minutes = offset_minutes.clamp(TIMELINE_MIN_MINUTES, TIMELINE_MAX_MINUTES);
    }

    /// Advance by a (non-negative) number of simulated minutes.
    pub fn advance(&mut self, delta_minutes: f64) {
        self.set(self.offset_minutes + delta_minutes.max(0.0));
    }

    /// Per-frame driver: advances only while playing.
    pub fn tick(&mut self, real_dt_secs: f64) {
        if self.playing {
            self.advance(real_dt_secs * PLAY_RATE_MINUTES_PER_SEC);
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Jump one hour forward. Playback state is untouched.
    pub fn fast_forward(&mut self) {
        self.set(self.offset_minutes + FAST_FORWARD_MINUTES);
    }

    /// Return to the session epoch.
    pub fn reset(&mut self) {
        self.offset_minutes = 0.0;
    }

    /// Human-readable offset for the timeline readout, e.g. "T+2h 30m".
    pub fn offset_label(&self) -> String {
        let rounded = self.offset_minutes.round() as i64;
        if rounded == 0 {
            return "Now".to_string();
        }
        let sign = if rounded < 0 { '-' } else { '+' };
        let total = rounded.abs();
        format!("T{}{}h {:02}m", sign, total / 60, total % 60)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
