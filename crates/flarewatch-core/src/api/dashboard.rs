// ---- Dashboard ----
//
// The whole application state behind the render bridge: the clock, the
// tracked fleet, the CME, the scene, the effects, and the assistant
// transcript. The host drains UI controls into `handle_controls`, runs
// `step` at the fixed rate, then calls `sync_scene` once per frame to
// re-derive every entity from the current simulated time.

use crate::api::config::DashboardConfig;
use crate::api::types::{EntityId, UiEvent};
use crate::chat::fallback::{self, ReplyTone};
use crate::chat::{plan_send, ChatLog, ChatPlan, SimSnapshot};
use crate::components::entity::{Color, Entity, EntityKind};
use crate::core::clock::SimClock;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::ControlEvent;
use crate::sim::cme::{CmeState, CONE_BASE_RADIUS, CONE_HEIGHT};
use crate::sim::fleet::{self, OrbitalBody};
use crate::sim::impacts::{
    classify, time_to_impact_label, ImpactEvent, ImpactProvider, ScriptedImpactProvider,
};
use crate::sim::orbit;
use crate::systems::effects::EffectsState;
use glam::Vec3;
use serde::Serialize;
use std::f32::consts::TAU;

// ── Control op codes from the UI ─────────────────────────────────────

/// Scrub to an absolute offset; `a` = minutes from the session epoch.
pub const OP_SET_OFFSET: u32 = 1;
pub const OP_TOGGLE_PLAY: u32 = 2;
pub const OP_FAST_FORWARD: u32 = 3;
pub const OP_RESET: u32 = 4;
pub const OP_TOGGLE_CME: u32 = 5;
/// Select a satellite; `a` = satellite id, negative clears.
pub const OP_SELECT: u32 = 6;

// ── UI event kinds to the presentation layer ─────────────────────────

/// a = offset minutes, b = playing flag.
pub const EVENT_TIME_INFO: f32 = 1.0;
/// a = selected satellite id, or -1.
pub const EVENT_SELECTION: f32 = 2.0;
/// a = number of satellites currently at risk.
pub const EVENT_IMPACT_COUNT: f32 = 3.0;
pub const EVENT_CME_STARTED: f32 = 4.0;
pub const EVENT_CME_ENDED: f32 = 5.0;

// ── Scene palette and geometry ───────────────────────────────────────

const SUN_RADIUS: f32 = 2.0;
const SUN_COLOR: Color = Color::new(1.0, 0.42, 0.208); // #FF6B35
const SUN_SPIN_PER_STEP: f32 = 0.01;

const CORONA_RADIUS: f32 = 2.5;
const CORONA_COLOR: Color = Color::new(1.0, 0.702, 0.278); // #FFB347
const CORONA_OPACITY: f32 = 0.3;

const EARTH_RADIUS: f32 = 0.8;
const EARTH_COLOR: Color = Color::new(0.29, 0.565, 0.886); // #4A90E2
const EARTH_SPIN_PER_STEP: f32 = 0.05;

const ATMOSPHERE_RADIUS: f32 = 1.0;
const ATMOSPHERE_OPACITY: f32 = 0.2;

const ORBIT_RING_OPACITY: f32 = 0.1;

const CME_COLOR: Color = Color::new(1.0, 0.42, 0.208);

const SATELLITE_RADIUS: f32 = 0.1;
const SATELLITE_RADIUS_SELECTED: f32 = 0.15;
const SATELLITE_COLOR: Color = Color::new(0.753, 0.753, 0.753); // #C0C0C0
const SATELLITE_COLOR_SELECTED: Color = Color::new(1.0, 0.843, 0.0); // #FFD700

// ── Solar effects tuning ─────────────────────────────────────────────

/// Seconds between flare arc spawns in quiet conditions.
const FLARE_INTERVAL: f32 = 0.3;
/// Arcs per spawn while the CME is active.
const FLARE_BURST_ACTIVE: usize = 2;
const FLARE_WIDTH: f32 = 0.08;
const FLARE_LIFETIME: f32 = 1.5;
const FLARE_SEGMENTS_POW2: u32 = 3;
const WIND_SPEED: (f32, f32) = (0.05, 0.12);
const WIND_WIDTH: f32 = 0.05;
const WIND_LIFETIME: f32 = 1.5;

const FLARE_COLORS: [[f32; 3]; 3] = [
    [1.0, 0.85, 0.3],  // yellow
    [1.0, 0.55, 0.15], // orange
    [1.0, 0.3, 0.15],  // red
];

// ── Status strip constants (fixed display copy) ──────────────────────

pub const ALERT_LEVEL: &str = "G2 Moderate";
pub const IMPACT_ETA_LABEL: &str = "T+2.5h";
pub const DISCLAIMER: &str = "This app is for educational purposes only. \
Refer to NOAA SWPC for official alerts.";
pub const RISK_BADGE_ACTIVE: &str = "CME ACTIVE";
pub const RISK_BADGE_QUIET: &str = "QUIET";
pub const IMPACTS_EMPTY_LABEL: &str = "No satellites currently in CME path";

/// Header and stats-strip snapshot, polled by the UI as JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    cme_active: bool,
    badge: &'static str,
    at_risk_count: usize,
    risk_label: String,
    impact_eta: &'static str,
    tracked_label: String,
    alert_level: &'static str,
    disclaimer: &'static str,
    offset_minutes: f64,
    offset_label: String,
    playing: bool,
}

/// One row of the impact detection table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImpactRow {
    satellite: String,
    operator: &'static str,
    altitude_km: u32,
    severity: &'static str,
    time_to_impact: String,
    impact_offset_minutes: f64,
}

/// Details panel payload for one satellite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SatelliteDetails {
    id: u32,
    name: String,
    operator: &'static str,
    orbit_class: &'static str,
    status: &'static str,
    altitude_km: u32,
    velocity_kms: f64,
    launch_date: String,
    position_km: [f64; 3],
    selected: bool,
}

/// The owned dashboard state. All mutation funnels through
/// `handle_controls` and `step`; everything rendered is re-derived in
/// `sync_scene` from the clock offset.
pub struct Dashboard {
    pub scene: Scene,
    pub effects: EffectsState,
    pub events: Vec<UiEvent>,

    clock: SimClock,
    bodies: Vec<OrbitalBody>,
    cme: CmeState,
    provider: Box<dyn ImpactProvider>,
    impacts: Vec<ImpactEvent>,
    chat: ChatLog,
    selected: Option<u32>,

    /// Animation clock in seconds. Decorative pulses run on this, not
    /// on simulated time, so the scene keeps breathing while paused at
    /// an offset.
    anim_secs: f32,
    flare_timer: f32,
    last_impact_count: usize,

    sun_id: EntityId,
    corona_id: EntityId,
    earth_id: EntityId,
    atmosphere_id: EntityId,
    ring_id: EntityId,
    cone_id: EntityId,
    satellite_ids: Vec<EntityId>,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_provider(config, Box::new(ScriptedImpactProvider))
    }

    /// Construct with a custom impact source (tests, future geometry model).
    pub fn with_provider(config: &DashboardConfig, provider: Box<dyn ImpactProvider>) -> Self {
        let mut rng = Rng::new(config.seed);
        let bodies = fleet::generate(config.satellite_count, &mut rng);
        let cme = CmeState::new();
        let impacts = classify(&bodies, &cme, provider.as_ref());

        let mut dashboard = Self {
            scene: Scene::with_capacity(config.max_entities),
            effects: EffectsState::with_capacity(config.seed, config.max_effects_vertices),
            events: Vec::with_capacity(config.max_events),
            clock: SimClock::new(),
            bodies,
            cme,
            provider,
            last_impact_count: impacts.len(),
            impacts,
            chat: ChatLog::new(),
            selected: None,
            anim_secs: 0.0,
            flare_timer: 0.0,
            sun_id: EntityId(0),
            corona_id: EntityId(0),
            earth_id: EntityId(0),
            atmosphere_id: EntityId(0),
            ring_id: EntityId(0),
            cone_id: EntityId(0),
            satellite_ids: Vec::new(),
        };
        dashboard.spawn_scene();
        dashboard.sync_scene();

        log::info!(
            "flarewatch: initialized with {} satellites, CME {}, {} at risk",
            dashboard.bodies.len(),
            if dashboard.cme.is_active() { "active" } else { "quiet" },
            dashboard.impacts.len()
        );
        dashboard
    }

    fn spawn_scene(&mut self) {
        let mut next_id = 0u32;
        let mut fresh = || {
            next_id += 1;
            EntityId(next_id)
        };

        self.sun_id = fresh();
        self.scene.spawn(
            Entity::new(self.sun_id, EntityKind::SunCore)
                .with_tag("sun")
                .with_radius(SUN_RADIUS)
                .with_color(SUN_COLOR)
                .with_emissive(1.0),
        );

        self.corona_id = fresh();
        self.scene.spawn(
            Entity::new(self.corona_id, EntityKind::Corona)
                .with_tag("corona")
                .with_radius(CORONA_RADIUS)
                .with_color(CORONA_COLOR)
                .with_emissive(1.0)
                .with_opacity(CORONA_OPACITY),
        );

        self.earth_id = fresh();
        self.scene.spawn(
            Entity::new(self.earth_id, EntityKind::Earth)
                .with_tag("earth")
                .with_radius(EARTH_RADIUS)
                .with_color(EARTH_COLOR),
        );

        self.atmosphere_id = fresh();
        self.scene.spawn(
            Entity::new(self.atmosphere_id, EntityKind::Atmosphere)
                .with_tag("atmosphere")
                .with_radius(ATMOSPHERE_RADIUS)
                .with_color(EARTH_COLOR)
                .with_opacity(ATMOSPHERE_OPACITY),
        );

        self.ring_id = fresh();
        self.scene.spawn(
            Entity::new(self.ring_id, EntityKind::OrbitRing)
                .with_tag("earth-orbit")
                .with_radius(orbit::EARTH_ORBIT_RADIUS as f32)
                .with_opacity(ORBIT_RING_OPACITY),
        );

        self.cone_id = fresh();
        self.scene.spawn(
            Entity::new(self.cone_id, EntityKind::CmeCone)
                .with_tag("cme-cone")
                .with_radius(CONE_BASE_RADIUS)
                .with_color(CME_COLOR)
                // Cone midpoint: apex at the Sun, axis along +X toward Earth.
                .with_pos(Vec3::new(CONE_HEIGHT / 2.0, 0.0, 0.0)),
        );

        self.satellite_ids.clear();
        for body in &self.bodies {
            let id = fresh();
            self.scene.spawn(
                Entity::new(id, EntityKind::Satellite)
                    .with_tag(&body.name)
                    .with_radius(SATELLITE_RADIUS)
                    .with_color(SATELLITE_COLOR),
            );
            self.satellite_ids.push(id);
        }
    }

    // ── Frame driver entry points ──────────────────────────────────

    /// Clear per-frame transient data. Call once at the top of a frame.
    pub fn begin_frame(&mut self) {
        self.events.clear();
    }

    /// Apply the UI controls drained for this frame, in arrival order.
    pub fn handle_controls(&mut self, controls: &[ControlEvent]) {
        for event in controls {
            match event.op {
                OP_SET_OFFSET => self.clock.set(event.a as f64),
                OP_TOGGLE_PLAY => self.clock.toggle_play(),
                OP_FAST_FORWARD => self.clock.fast_forward(),
                OP_RESET => self.clock.reset(),
                OP_TOGGLE_CME => {
                    let active = self.cme.toggle(self.clock.offset_minutes());
                    if active {
                        log::info!(
                            "flarewatch: CME launched at {}",
                            self.clock.offset_label()
                        );
                        self.events.push(UiEvent::new(EVENT_CME_STARTED, 0.0, 0.0, 0.0));
                    } else {
                        log::info!("flarewatch: CME cleared");
                        self.events.push(UiEvent::new(EVENT_CME_ENDED, 0.0, 0.0, 0.0));
                    }
                }
                OP_SELECT => {
                    let id = event.a as i32;
                    self.selected = if id >= 0 && (id as usize) < self.bodies.len() {
                        Some(id as u32)
                    } else {
                        None
                    };
                    let echo = self.selected.map(|s| s as f32).unwrap_or(-1.0);
                    self.events.push(UiEvent::new(EVENT_SELECTION, echo, 0.0, 0.0));
                }
                _ => {}
            }
        }
    }

    /// One fixed-rate update step: advance the clock while playing, run
    /// the decorative animations, and reclassify impacts.
    pub fn step(&mut self, dt: f32) {
        self.clock.tick(dt as f64);
        self.anim_secs += dt;
        self.cme.step_animation(self.clock.is_playing());

        self.step_solar_effects(dt);
        self.effects.tick(dt);

        self.impacts = classify(&self.bodies, &self.cme, self.provider.as_ref());
        if self.impacts.len() != self.last_impact_count {
            log::info!("flarewatch: {} satellites at risk", self.impacts.len());
            self.events.push(UiEvent::new(
                EVENT_IMPACT_COUNT,
                self.impacts.len() as f32,
                0.0,
                0.0,
            ));
            self.last_impact_count = self.impacts.len();
        }

        self.events.push(UiEvent::new(
            EVENT_TIME_INFO,
            self.clock.offset_minutes() as f32,
            if self.clock.is_playing() { 1.0 } else { 0.0 },
            0.0,
        ));
    }

    fn step_solar_effects(&mut self, dt: f32) {
        self.flare_timer += dt;
        if self.flare_timer >= FLARE_INTERVAL {
            self.flare_timer -= FLARE_INTERVAL;
            let burst = if self.cme.is_active() { FLARE_BURST_ACTIVE } else { 1 };
            for _ in 0..burst {
                let angle = self.effects.rng.next_fraction() as f32 * TAU;
                let lift = (self.effects.rng.next_fraction() as f32 - 0.5) * 1.2;
                let start = [
                    SUN_RADIUS * 0.9 * angle.cos(),
                    lift * 0.3,
                    SUN_RADIUS * 0.9 * angle.sin(),
                ];
                let reach = SUN_RADIUS * (1.3 + self.effects.rng.next_fraction() as f32 * 0.8);
                let end = [reach * angle.cos(), lift, reach * angle.sin()];
                let color = FLARE_COLORS[self.effects.rng.next_int(3) as usize];
                self.effects.add_arc(
                    start,
                    end,
                    FLARE_WIDTH,
                    color,
                    FLARE_LIFETIME,
                    FLARE_SEGMENTS_POW2,
                );
            }
        }
        self.effects
            .spawn_wind([0.0; 3], 1, WIND_SPEED, WIND_WIDTH, FLARE_COLORS[0], WIND_LIFETIME);
    }

    /// Re-derive every entity from the clock offset and animation clock.
    /// Call once per rendered frame, after controls and steps.
    pub fn sync_scene(&mut self) {
        let t = self.clock.offset_minutes();
        let playing = self.clock.is_playing();
        let anim = self.anim_secs;

        if let Some(sun) = self.scene.get_mut(self.sun_id) {
            if playing {
                sun.rotation += SUN_SPIN_PER_STEP;
            }
        }
        if let Some(corona) = self.scene.get_mut(self.corona_id) {
            if playing {
                corona.scale = (2.0 * anim).sin() * 0.3 + 0.7;
            }
        }

        let earth = orbit::earth_position(t).as_vec3();
        if let Some(e) = self.scene.get_mut(self.earth_id) {
            e.pos = earth;
            if playing {
                e.rotation += EARTH_SPIN_PER_STEP;
            }
        }
        if let Some(a) = self.scene.get_mut(self.atmosphere_id) {
            a.pos = earth;
        }

        let cme_active = self.cme.is_active();
        let expansion = self.cme.expansion();
        let cme_opacity = self.cme.opacity();
        if let Some(cone) = self.scene.get_mut(self.cone_id) {
            cone.active = cme_active;
            cone.scale = expansion;
            cone.opacity = cme_opacity;
        }

        let selected = self.selected;
        for (body, &id) in self.bodies.iter().zip(self.satellite_ids.iter()) {
            if let Some(sat) = self.scene.get_mut(id) {
                sat.pos = orbit::position(body, t).as_vec3();
                sat.selected = selected == Some(body.id);
                if sat.selected {
                    sat.radius = SATELLITE_RADIUS_SELECTED;
                    sat.color = SATELLITE_COLOR_SELECTED;
                } else {
                    sat.radius = SATELLITE_RADIUS;
                    sat.color = SATELLITE_COLOR;
                }
            }
        }
    }

    // ── Read accessors ─────────────────────────────────────────────

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn bodies(&self) -> &[OrbitalBody] {
        &self.bodies
    }

    pub fn cme(&self) -> &CmeState {
        &self.cme
    }

    pub fn impacts(&self) -> &[ImpactEvent] {
        &self.impacts
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    /// The live numbers the assistant grounds its answers in.
    pub fn snapshot(&self) -> SimSnapshot {
        let now = self.clock.offset_minutes();
        SimSnapshot {
            satellite_count: self.bodies.len(),
            cme_active: self.cme.is_active(),
            at_risk_count: self.impacts.len(),
            hours_to_first_impact: self
                .impacts
                .first()
                .map(|e| (e.impact_offset_minutes - now) / 60.0),
        }
    }

    // ── Chat flow ──────────────────────────────────────────────────

    /// Start a send. Records the user line only when a request will
    /// actually go out; a missing credential never touches the log.
    pub fn begin_chat_send(&mut self, api_key: Option<&str>, message: &str) -> ChatPlan {
        let plan = plan_send(api_key, &self.snapshot(), message);
        if let ChatPlan::Send(_) = plan {
            self.chat.push_user(message);
        }
        plan
    }

    /// A live completion arrived.
    pub fn finish_chat_reply(&mut self, text: &str) {
        self.chat.push_assistant(text, ReplyTone::Info);
    }

    /// The network path failed; answer from the local responder instead.
    /// Returns the fallback text for the caller to surface.
    pub fn finish_chat_fallback(&mut self, message: &str) -> (&'static str, ReplyTone) {
        log::warn!("flarewatch: chat API unavailable, using local responder");
        let (text, tone) = fallback::local_reply(message);
        self.chat.push_assistant(text, tone);
        (text, tone)
    }

    // ── JSON snapshots for the UI ──────────────────────────────────

    pub fn status_json(&self) -> Result<String, serde_json::Error> {
        let active = self.cme.is_active();
        let report = StatusReport {
            cme_active: active,
            badge: if active { RISK_BADGE_ACTIVE } else { RISK_BADGE_QUIET },
            at_risk_count: self.impacts.len(),
            risk_label: if self.impacts.is_empty() {
                IMPACTS_EMPTY_LABEL.to_string()
            } else {
                format!("{} Satellites at Risk", self.impacts.len())
            },
            impact_eta: IMPACT_ETA_LABEL,
            tracked_label: format!("{} tracked", self.bodies.len()),
            alert_level: ALERT_LEVEL,
            disclaimer: DISCLAIMER,
            offset_minutes: self.clock.offset_minutes(),
            offset_label: self.clock.offset_label(),
            playing: self.clock.is_playing(),
        };
        serde_json::to_string(&report)
    }

    pub fn impacts_json(&self) -> Result<String, serde_json::Error> {
        let now = self.clock.offset_minutes();
        let rows: Vec<ImpactRow> = self
            .impacts
            .iter()
            .map(|e| ImpactRow {
                satellite: e.name.clone(),
                operator: e.operator,
                altitude_km: e.altitude_km,
                severity: e.severity.label(),
                time_to_impact: time_to_impact_label(e.impact_offset_minutes, now),
                impact_offset_minutes: e.impact_offset_minutes,
            })
            .collect();
        serde_json::to_string(&rows)
    }

    pub fn fleet_json(&self) -> Result<String, serde_json::Error> {
        let details: Vec<SatelliteDetails> =
            self.bodies.iter().map(|b| self.body_details(b)).collect();
        serde_json::to_string(&details)
    }

    /// Details for one satellite, or JSON `null` for an unknown id.
    pub fn satellite_json(&self, id: u32) -> Result<String, serde_json::Error> {
        let details = self
            .bodies
            .iter()
            .find(|b| b.id == id)
            .map(|b| self.body_details(b));
        serde_json::to_string(&details)
    }

    pub fn transcript_json(&self) -> Result<String, serde_json::Error> {
        self.chat.to_json()
    }

    pub fn quick_questions_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&fallback::QUICK_QUESTIONS)
    }

    fn body_details(&self, body: &OrbitalBody) -> SatelliteDetails {
        let km = orbit::position_km(body, self.clock.offset_minutes());
        SatelliteDetails {
            id: body.id,
            name: body.name.clone(),
            operator: body.operator,
            orbit_class: body.orbit_class.label(),
            status: body.status.label(),
            altitude_km: body.altitude_km,
            velocity_kms: body.velocity_kms,
            launch_date: body.launch_date.clone(),
            position_km: [km.x, km.y, km.z],
            selected: self.selected == Some(body.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FAST_FORWARD_MINUTES;

    fn config() -> DashboardConfig {
        DashboardConfig {
            seed: 42,
            ..DashboardConfig::default()
        }
    }

    fn control(op: u32, a: f32) -> ControlEvent {
        ControlEvent { op, a, b: 0.0, c: 0.0 }
    }

    #[test]
    fn spawns_fixed_scene_plus_fleet() {
        let d = Dashboard::new(&config());
        // sun, corona, earth, atmosphere, ring, cone + 8 satellites
        assert_eq!(d.scene.len(), 6 + 8);
        assert!(d.scene.find_by_tag("sun").is_some());
        assert!(d.scene.find_by_tag("cme-cone").is_some());
        assert!(d.scene.find_by_tag("SAT-8").is_some());
    }

    #[test]
    fn session_opens_mid_event() {
        let d = Dashboard::new(&config());
        assert!(d.cme().is_active());
        assert_eq!(d.impacts().len(), 2);
        assert!(!d.clock().is_playing());
    }

    #[test]
    fn scrub_control_moves_the_clock() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_SET_OFFSET, -90.0)]);
        assert_eq!(d.clock().offset_minutes(), -90.0);
    }

    #[test]
    fn play_pause_round_trip_keeps_time() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_SET_OFFSET, 30.0)]);
        d.handle_controls(&[control(OP_TOGGLE_PLAY, 0.0)]);
        d.handle_controls(&[control(OP_TOGGLE_PLAY, 0.0)]);
        assert!(!d.clock().is_playing());
        assert_eq!(d.clock().offset_minutes(), 30.0);
    }

    #[test]
    fn fast_forward_and_reset_controls() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_FAST_FORWARD, 0.0)]);
        assert_eq!(d.clock().offset_minutes(), FAST_FORWARD_MINUTES);
        d.handle_controls(&[control(OP_RESET, 0.0)]);
        assert_eq!(d.clock().offset_minutes(), 0.0);
    }

    #[test]
    fn toggle_cme_empties_and_refills_impacts() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]);
        d.step(1.0 / 60.0);
        assert!(d.impacts().is_empty());
        assert!(d
            .events
            .iter()
            .any(|e| e.kind == EVENT_IMPACT_COUNT && e.a == 0.0));

        d.begin_frame();
        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]);
        d.step(1.0 / 60.0);
        assert_eq!(d.impacts().len(), 2);
    }

    #[test]
    fn relaunched_cme_anchors_to_current_offset() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]); // off
        d.handle_controls(&[control(OP_SET_OFFSET, 200.0)]);
        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]); // relaunch
        d.step(1.0 / 60.0);
        assert_eq!(d.impacts()[0].impact_offset_minutes, 350.0);
    }

    #[test]
    fn selection_echoes_and_highlights() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_SELECT, 2.0)]);
        d.sync_scene();
        assert_eq!(d.selected(), Some(2));
        assert!(d
            .events
            .iter()
            .any(|e| e.kind == EVENT_SELECTION && e.a == 2.0));

        let sat = d.scene.find_by_tag("SAT-3").unwrap();
        assert!(sat.selected);
        assert_eq!(sat.radius, SATELLITE_RADIUS_SELECTED);

        d.handle_controls(&[control(OP_SELECT, -1.0)]);
        d.sync_scene();
        assert_eq!(d.selected(), None);
        let sat = d.scene.find_by_tag("SAT-3").unwrap();
        assert!(!sat.selected);
        assert_eq!(sat.radius, SATELLITE_RADIUS);
    }

    #[test]
    fn playing_through_arrival_marks_impact_occurred() {
        let mut d = Dashboard::new(&config());
        d.handle_controls(&[control(OP_TOGGLE_PLAY, 0.0)]);
        // 150 real seconds at 1 simulated minute per second = 2.5 sim hours.
        for _ in 0..(150 * 60) {
            d.step(1.0 / 60.0);
        }
        assert!((d.clock().offset_minutes() - 150.0).abs() < 1e-2);
        let json = d.impacts_json().unwrap();
        assert!(json.contains("Impact occurred"), "impacts were {}", json);
    }

    #[test]
    fn scrubbing_does_not_advance_while_paused() {
        let mut d = Dashboard::new(&config());
        for _ in 0..120 {
            d.step(1.0 / 60.0);
        }
        assert_eq!(d.clock().offset_minutes(), 0.0);
    }

    #[test]
    fn satellites_track_the_scrubbed_offset() {
        let mut d = Dashboard::new(&config());
        d.sync_scene();
        let before = d.scene.find_by_tag("SAT-1").unwrap().pos;
        d.handle_controls(&[control(OP_SET_OFFSET, 300.0)]);
        d.sync_scene();
        let after = d.scene.find_by_tag("SAT-1").unwrap().pos;
        assert_ne!(before, after);

        d.handle_controls(&[control(OP_SET_OFFSET, 0.0)]);
        d.sync_scene();
        let back = d.scene.find_by_tag("SAT-1").unwrap().pos;
        assert_eq!(before, back);
    }

    #[test]
    fn cone_visibility_follows_cme_flag() {
        let mut d = Dashboard::new(&config());
        d.sync_scene();
        assert!(d.scene.find_by_tag("cme-cone").unwrap().active);
        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]);
        d.sync_scene();
        assert!(!d.scene.find_by_tag("cme-cone").unwrap().active);
    }

    #[test]
    fn time_info_event_emitted_every_step() {
        let mut d = Dashboard::new(&config());
        d.begin_frame();
        d.step(1.0 / 60.0);
        let time_events: Vec<_> = d
            .events
            .iter()
            .filter(|e| e.kind == EVENT_TIME_INFO)
            .collect();
        assert_eq!(time_events.len(), 1);
        assert_eq!(time_events[0].b, 0.0); // paused
    }

    #[test]
    fn status_json_reflects_cme_state() {
        let mut d = Dashboard::new(&config());
        let json = d.status_json().unwrap();
        assert!(json.contains("\"badge\":\"CME ACTIVE\""));
        assert!(json.contains("\"atRiskCount\":2"));
        assert!(json.contains("2 Satellites at Risk"));
        assert!(json.contains("G2 Moderate"));
        assert!(json.contains("8 tracked"));
        assert!(json.contains("educational purposes"));

        d.handle_controls(&[control(OP_TOGGLE_CME, 0.0)]);
        d.step(1.0 / 60.0);
        let json = d.status_json().unwrap();
        assert!(json.contains("\"badge\":\"QUIET\""));
        assert!(json.contains(IMPACTS_EMPTY_LABEL));
    }

    #[test]
    fn impacts_json_rows_are_ordered() {
        let d = Dashboard::new(&config());
        let json = d.impacts_json().unwrap();
        let sat3 = json.find("SAT-3").unwrap();
        let sat5 = json.find("SAT-5").unwrap();
        assert!(sat3 < sat5);
        assert!(json.contains("\"severity\":\"high\""));
        assert!(json.contains("\"timeToImpact\":\"2h\""));
    }

    #[test]
    fn satellite_json_for_unknown_id_is_null() {
        let d = Dashboard::new(&config());
        assert_eq!(d.satellite_json(999).unwrap(), "null");
        let json = d.satellite_json(0).unwrap();
        assert!(json.contains("\"name\":\"SAT-1\""));
        assert!(json.contains("\"operator\":\"NASA\""));
        assert!(json.contains("positionKm"));
    }

    #[test]
    fn chat_send_without_key_leaves_transcript_alone() {
        let mut d = Dashboard::new(&config());
        let plan = d.begin_chat_send(None, "When will the CME hit?");
        assert!(matches!(plan, ChatPlan::NeedsKey));
        assert_eq!(d.chat().entries().len(), 1); // welcome only
    }

    #[test]
    fn chat_fallback_routes_by_keyword() {
        let mut d = Dashboard::new(&config());
        let plan = d.begin_chat_send(Some("gsk_test"), "When will the CME hit?");
        assert!(matches!(plan, ChatPlan::Send(_)));
        assert!(d.chat().is_pending());

        let (text, tone) = d.finish_chat_fallback("When will the CME hit?");
        assert!(text.contains("magnetosphere"));
        assert_eq!(tone, ReplyTone::Warning);
        assert!(!d.chat().is_pending());
        assert_eq!(d.chat().entries().len(), 3);
    }

    #[test]
    fn snapshot_tracks_first_impact_countdown() {
        let mut d = Dashboard::new(&config());
        let snap = d.snapshot();
        assert_eq!(snap.satellite_count, 8);
        assert!(snap.cme_active);
        assert_eq!(snap.at_risk_count, 2);
        assert!((snap.hours_to_first_impact.unwrap() - 2.5).abs() < 1e-9);

        d.handle_controls(&[control(OP_SET_OFFSET, 300.0)]);
        let snap = d.snapshot();
        assert!(snap.hours_to_first_impact.unwrap() < 0.0);
    }

    #[test]
    fn effects_accumulate_while_stepping() {
        let mut d = Dashboard::new(&config());
        for _ in 0..60 {
            d.step(1.0 / 60.0);
        }
        assert!(!d.effects.particles.is_empty());
        assert!(!d.effects.arcs.is_empty());
    }
}
