/// Configuration for the dashboard simulation, provided by the host at init.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Number of tracked satellites to generate (default: 8).
    pub satellite_count: usize,
    /// Seed for the deterministic RNG. The host usually passes wall-clock
    /// millis; tests pass a fixed value to reproduce a whole session.
    pub seed: u64,
    /// Maximum number of scene entities (default: 32).
    pub max_entities: usize,
    /// Maximum number of effects vertices (default: 4096).
    pub max_effects_vertices: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            satellite_count: 8,
            seed: 0,
            max_entities: 32,
            max_effects_vertices: 4096,
            max_events: 32,
        }
    }
}
