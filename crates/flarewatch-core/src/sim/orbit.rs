// ---- Orbit Evaluation ----
//
// Positions are pure functions of the simulated-time offset: no
// integration, no per-frame state. Scrubbing the timeline anywhere and
// back lands every body exactly where it started.

use crate::sim::fleet::OrbitalBody;
use glam::DVec3;

/// Display conversion from scene units to kilometers.
pub const KM_PER_SCENE_UNIT: f64 = 1000.0;

/// Earth's orbit radius in scene units.
pub const EARTH_ORBIT_RADIUS: f64 = 15.0;
/// Earth's angular speed in radians per simulated minute.
pub const EARTH_ANGULAR_SPEED: f64 = 0.002;
/// Earth starts on the +X axis at the session epoch.
pub const EARTH_PHASE: f64 = 0.0;

/// Point on a circular orbit in the ecliptic (y = 0) plane.
pub fn circular_position(radius: f64, phase: f64, angular_speed: f64, t_minutes: f64) -> DVec3 {
    let angle = phase + angular_speed * t_minutes;
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Scene-space position of a tracked satellite at the given offset.
pub fn position(body: &OrbitalBody, t_minutes: f64) -> DVec3 {
    circular_position(body.orbit_radius, body.phase, body.angular_speed, t_minutes)
}

/// Satellite position expressed in kilometers, as shown in the details panel.
pub fn position_km(body: &OrbitalBody, t_minutes: f64) -> DVec3 {
    position(body, t_minutes) * KM_PER_SCENE_UNIT
}

/// Earth's position at the given offset.
pub fn earth_position(t_minutes: f64) -> DVec3 {
    circular_position(EARTH_ORBIT_RADIUS, EARTH_PHASE, EARTH_ANGULAR_SPEED, t_minutes)
}
