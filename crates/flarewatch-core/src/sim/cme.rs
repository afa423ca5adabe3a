// ---- Coronal Mass Ejection ----
//
// One CME at a time. The physical claim is minimal: a launch instant on
// the simulation timeline plus a fixed sun-to-Earth travel time. The
// expanding cone is decoration driven by the animation clock, not by
// simulated time, so it keeps breathing while the user scrubs.

/// Sun-to-Earth travel time of the simulated CME, in simulated minutes.
pub const CME_TRAVEL_MINUTES: f64 = 150.0;

/// Cone geometry in scene units: base radius and height, apex at the Sun.
pub const CONE_BASE_RADIUS: f32 = 3.0;
pub const CONE_HEIGHT: f32 = 8.0;

/// Decorative expansion: starting scale, per-step growth, and the cap it
/// holds at once fully dispersed.
pub const EXPANSION_START: f32 = 1.0;
pub const EXPANSION_STEP: f32 = 0.05;
pub const EXPANSION_MAX: f32 = 10.0;

/// Opacity floor so the dispersed cone never quite vanishes.
pub const MIN_OPACITY: f32 = 0.1;

/// State of the simulated CME.
#[derive(Debug, Clone)]
pub struct CmeState {
    active: bool,
    /// Launch instant as a timeline offset in simulated minutes.
    started_at_minutes: f64,
    expansion: f32,
}

impl CmeState {
    /// A CME is already in flight when the session opens, launched at the
    /// session epoch.
    pub fn new() -> Self {
        Self {
            active: true,
            started_at_minutes: 0.0,
            expansion: EXPANSION_START,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn started_at_minutes(&self) -> f64 {
        self.started_at_minutes
    }

    /// Timeline offset at which the CME front reaches Earth.
    pub fn arrival_offset_minutes(&self) -> f64 {
        self.started_at_minutes + CME_TRAVEL_MINUTES
    }

    pub fn expansion(&self) -> f32 {
        self.expansion
    }

    /// Flip the CME on or off. Switching on launches a fresh CME at
    /// `now_minutes` and restarts the expansion animation.
    /// Returns the new active state.
    pub fn toggle(&mut self, now_minutes: f64) -> bool {
        if self.active {
            self.active = false;
        } else {
            self.active = true;
            self.started_at_minutes = now_minutes;
            self.expansion = EXPANSION_START;
        }
        self.active
    }

    /// One animation step. Expansion grows only while the simulation is
    /// playing and holds at the cap.
    pub fn step_animation(&mut self, playing: bool) {
        if self.active && playing {
            self.expansion = (self.expansion + EXPANSION_STEP).min(EXPANSION_MAX);
        }
    }

    /// Cone opacity for the current expansion: fades as it disperses but
    /// never below the floor.
    pub fn opacity(&self) -> f32 {
        (1.0 - self.expansion / EXPANSION_MAX).max(MIN_OPACITY)
    }
}

impl Default for CmeState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active_at_epoch() {
        let cme = CmeState::new();
        assert!(cme.is_active());
        assert_eq!(cme.started_at_minutes(), 0.0);
        assert_eq!(cme.arrival_offset_minutes(), CME_TRAVEL_MINUTES);
    }

    #[test]
    fn toggle_off_then_on_relaunches_at_now() {
        let mut cme = CmeState::new();
        assert!(!cme.toggle(10.0));
        assert!(cme.toggle(300.0));
        assert_eq!(cme.started_at_minutes(), 300.0);
        assert_eq!(cme.arrival_offset_minutes(), 300.0 + CME_TRAVEL_MINUTES);
        assert_eq!(cme.expansion(), EXPANSION_START);
    }

    #[test]
    fn expansion_grows_only_while_playing_and_caps() {
        let mut cme = CmeState::new();
        cme.step_animation(false);
        assert_eq!(cme.expansion(), EXPANSION_START);

        for _ in 0..10_000 {
            cme.step_animation(true);
        }
        assert_eq!(cme.expansion(), EXPANSION_MAX);
    }

    #[test]
    fn opacity_fades_to_floor() {
        let mut cme = CmeState::new();
        let fresh = cme.opacity();
        assert!(fresh > MIN_OPACITY);

        for _ in 0..10_000 {
            cme.step_animation(true);
        }
        assert_eq!(cme.opacity(), MIN_OPACITY);
    }
}
