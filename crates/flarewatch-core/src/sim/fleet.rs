// ---- Tracked Fleet ----
//
// Generates the catalog of tracked satellites for a session. Orbits are
// randomized within fixed bands, identity fields (operator, orbit class,
// status) come from per-slot vocabulary tables, and phases are spaced
// evenly so the fleet never bunches up on load.

use crate::core::rng::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

/// Canonical fleet size; vocabulary tables are indexed modulo this.
pub const FLEET_SIZE: usize = 8;

pub const OPERATORS: [&str; FLEET_SIZE] = [
    "NASA",
    "ESA",
    "SpaceX",
    "CNSA",
    "ISRO",
    "JAXA",
    "Roscosmos",
    "Commercial",
];

/// Orbit radius band in scene units.
pub const ORBIT_RADIUS_MIN: f64 = 12.0;
pub const ORBIT_RADIUS_SPAN: f64 = 6.0;

/// Angular speed band in radians per simulated minute.
pub const ANGULAR_SPEED_MIN: f64 = 0.01;
pub const ANGULAR_SPEED_SPAN: f64 = 0.02;

/// Altitude band in kilometers.
pub const ALTITUDE_MIN_KM: f64 = 400.0;
pub const ALTITUDE_SPAN_KM: f64 = 35_000.0;

/// Ground velocity band in km/s.
pub const VELOCITY_MIN_KMS: f64 = 7.8;
pub const VELOCITY_SPAN_KMS: f64 = 3.2;

/// Orbit regime a satellite belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrbitClass {
    Leo,
    Meo,
    Geo,
}

impl OrbitClass {
    pub fn label(self) -> &'static str {
        match self {
            OrbitClass::Leo => "LEO",
            OrbitClass::Meo => "MEO",
            OrbitClass::Geo => "GEO",
        }
    }
}

/// Operational status of a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyStatus {
    Operational,
    Degraded,
    Inactive,
}

impl BodyStatus {
    pub fn label(self) -> &'static str {
        match self {
            BodyStatus::Operational => "operational",
            BodyStatus::Degraded => "degraded",
            BodyStatus::Inactive => "inactive",
        }
    }
}

const STATUS_BY_SLOT: [BodyStatus; FLEET_SIZE] = [
    BodyStatus::Operational,
    BodyStatus::Operational,
    BodyStatus::Operational,
    BodyStatus::Degraded,
    BodyStatus::Operational,
    BodyStatus::Operational,
    BodyStatus::Operational,
    BodyStatus::Inactive,
];

/// One tracked satellite. Orbit parameters are fixed for the whole
/// session; position at any instant is derived from them.
#[derive(Debug, Clone)]
pub struct OrbitalBody {
    pub id: u32,
    pub name: String,
    /// Circular orbit radius in scene units.
    pub orbit_radius: f64,
    /// Initial angle along the orbit, in radians.
    pub phase: f64,
    /// Radians per simulated minute.
    pub angular_speed: f64,
    pub operator: &'static str,
    pub orbit_class: OrbitClass,
    pub status: BodyStatus,
    pub altitude_km: u32,
    pub velocity_kms: f64,
    /// ISO date string, e.g. "2022-07-14".
    pub launch_date: String,
}

/// Generate a fleet of `count` satellites from the given RNG.
/// Same seed, same fleet.
pub fn generate(count: usize, rng: &mut Rng) -> Vec<OrbitalBody> {
    (0..count)
        .map(|i| {
            let slot = i % FLEET_SIZE;
            let orbit_radius = ORBIT_RADIUS_MIN + rng.next_fraction() * ORBIT_RADIUS_SPAN;
            let angular_speed = ANGULAR_SPEED_MIN + rng.next_fraction() * ANGULAR_SPEED_SPAN;
            let altitude_km = (ALTITUDE_MIN_KM + rng.next_fraction() * ALTITUDE_SPAN_KM).round() as u32;
            let launch_date = random_launch_date(rng);
            let velocity_kms = VELOCITY_MIN_KMS + rng.next_fraction() * VELOCITY_SPAN_KMS;

            OrbitalBody {
                id: i as u32,
                name: format!("SAT-{}", i + 1),
                orbit_radius,
                phase: i as f64 / count as f64 * TAU,
                angular_speed,
                operator: OPERATORS[slot],
                orbit_class: orbit_class_for_slot(slot),
                status: STATUS_BY_SLOT[slot],
                altitude_km,
                velocity_kms,
                launch_date,
            }
        })
        .collect()
}

fn orbit_class_for_slot(slot: usize) -> OrbitClass {
    if slot < 3 {
        OrbitClass::Leo
    } else if slot < 6 {
        OrbitClass::Meo
    } else {
        OrbitClass::Geo
    }
}

fn random_launch_date(rng: &mut Rng) -> String {
    let year = 2020 + rng.next_int(4);
    let month = 1 + rng.next_int(12);
    let day = 1 + rng.next_int(28);
    format!("{}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<OrbitalBody> {
        let mut rng = Rng::new(42);
        generate(FLEET_SIZE, &mut rng)
    }

    #[test]
    fn generates_count_bodies_with_distinct_ids() {
        let mut rng = Rng::new(7);
        for count in [1, 4, FLEET_SIZE, 12] {
            let bodies = generate(count, &mut rng);
            assert_eq!(bodies.len(), count);
            let mut ids: Vec<u32> = bodies.iter().map(|b| b.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), count, "duplicate ids for count {}", count);
        }
    }

    #[test]
    fn phases_are_evenly_spaced() {
        let bodies = fleet();
        for (i, body) in bodies.iter().enumerate() {
            let expected = i as f64 / FLEET_SIZE as f64 * TAU;
            assert!(
                (body.phase - expected).abs() < 1e-12,
                "body {} phase {} != {}",
                i,
                body.phase,
                expected
            );
        }
    }

    #[test]
    fn orbit_parameters_stay_in_bands() {
        for body in fleet() {
            assert!(body.orbit_radius >= ORBIT_RADIUS_MIN);
            assert!(body.orbit_radius < ORBIT_RADIUS_MIN + ORBIT_RADIUS_SPAN);
            assert!(body.angular_speed >= ANGULAR_SPEED_MIN);
            assert!(body.angular_speed < ANGULAR_SPEED_MIN + ANGULAR_SPEED_SPAN);
            assert!(body.altitude_km >= ALTITUDE_MIN_KM as u32);
            assert!(body.altitude_km <= (ALTITUDE_MIN_KM + ALTITUDE_SPAN_KM) as u32);
            assert!(body.velocity_kms >= VELOCITY_MIN_KMS);
            assert!(body.velocity_kms < VELOCITY_MIN_KMS + VELOCITY_SPAN_KMS);
        }
    }

    #[test]
    fn identity_fields_come_from_slot_tables() {
        let bodies = fleet();
        assert_eq!(bodies[0].name, "SAT-1");
        assert_eq!(bodies[7].name, "SAT-8");
        assert_eq!(bodies[2].operator, "SpaceX");
        assert_eq!(bodies[4].operator, "ISRO");
        assert_eq!(bodies[3].status, BodyStatus::Degraded);
        assert_eq!(bodies[7].status, BodyStatus::Inactive);
    }

    #[test]
    fn orbit_classes_split_by_slot() {
        let bodies = fleet();
        let leo = bodies.iter().filter(|b| b.orbit_class == OrbitClass::Leo).count();
        let meo = bodies.iter().filter(|b| b.orbit_class == OrbitClass::Meo).count();
        let geo = bodies.iter().filter(|b| b.orbit_class == OrbitClass::Geo).count();
        assert_eq!((leo, meo, geo), (3, 3, 2));
    }

    #[test]
    fn launch_dates_are_plausible_iso() {
        for body in fleet() {
            let parts: Vec<&str> = body.launch_date.split('-').collect();
            assert_eq!(parts.len(), 3, "bad date {}", body.launch_date);
            let year: u32 = parts[0].parse().unwrap();
            let month: u32 = parts[1].parse().unwrap();
            let day: u32 = parts[2].parse().unwrap();
            assert!((2020..=2023).contains(&year));
            assert!((1..=12).contains(&month));
            assert!((1..=28).contains(&day));
        }
    }

    #[test]
    fn same_seed_reproduces_fleet() {
        let mut a = Rng::new(123);
        let mut b = Rng::new(123);
        let fa = generate(FLEET_SIZE, &mut a);
        let fb = generate(FLEET_SIZE, &mut b);
        for (x, y) in fa.iter().zip(fb.iter()) {
            assert_eq!(x.orbit_radius, y.orbit_radius);
            assert_eq!(x.angular_speed, y.angular_speed);
            assert_eq!(x.altitude_km, y.altitude_km);
            assert_eq!(x.launch_date, y.launch_date);
        }
    }
}
