// ---- Impact Classification ----
//
// Which satellites sit in the CME's path, and when it reaches them.
// Predictions come from an ImpactProvider; the shipped provider returns
// scripted data (this is an educational visualization, not a physics
// model). The classifier only joins forecasts with the fleet, anchors
// them to the CME launch time, and orders them.

use crate::sim::cme::CmeState;
use crate::sim::fleet::OrbitalBody;
use serde::Serialize;

/// Severity of a predicted encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// One raw prediction: which body, how long after CME launch, how bad.
#[derive(Debug, Clone, Copy)]
pub struct ImpactForecast {
    pub body_id: u32,
    /// Simulated minutes between CME launch and the encounter.
    pub minutes_after_launch: f64,
    pub severity: Severity,
    /// Predicted encounter altitude in km.
    pub altitude_km: u32,
}

/// Source of impact predictions. A seam, not a simulation: the shipped
/// provider is scripted, and a geometric cone-intersection model could
/// replace it without touching the classifier.
pub trait ImpactProvider {
    fn forecasts(&self) -> Vec<ImpactForecast>;
}

/// The scripted reference scenario: two satellites in the CME path,
/// 2.5 h and 4 h after launch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedImpactProvider;

impl ImpactProvider for ScriptedImpactProvider {
    fn forecasts(&self) -> Vec<ImpactForecast> {
        vec![
            ImpactForecast {
                body_id: 2,
                minutes_after_launch: 150.0,
                severity: Severity::High,
                altitude_km: 12_500,
            },
            ImpactForecast {
                body_id: 4,
                minutes_after_launch: 240.0,
                severity: Severity::Medium,
                altitude_km: 35_786,
            },
        ]
    }
}

/// A forecast joined with the satellite it references, anchored to the
/// timeline.
#[derive(Debug, Clone)]
pub struct ImpactEvent {
    pub body_id: u32,
    pub name: String,
    pub operator: &'static str,
    pub altitude_km: u32,
    /// Timeline offset of the predicted encounter, in simulated minutes.
    pub impact_offset_minutes: f64,
    pub severity: Severity,
}

/// Join provider forecasts with the fleet. An inactive CME threatens
/// nobody. Forecasts naming unknown bodies are dropped. Output is
/// sorted by non-decreasing impact time regardless of provider order.
pub fn classify(
    bodies: &[OrbitalBody],
    cme: &CmeState,
    provider: &dyn ImpactProvider,
) -> Vec<ImpactEvent> {
    if !cme.is_active() {
        return Vec::new();
    }
    let launch = cme.started_at_minutes();
    let mut events: Vec<ImpactEvent> = provider
        .forecasts()
        .into_iter()
        .filter_map(|f| {
            let body = bodies.iter().find(|b| b.id == f.body_id)?;
            Some(ImpactEvent {
                body_id: body.id,
                name: body.name.clone(),
                operator: body.operator,
                altitude_km: f.altitude_km,
                impact_offset_minutes: launch + f.minutes_after_launch,
                severity: f.severity,
            })
        })
        .collect();
    events.sort_by(|a, b| a.impact_offset_minutes.total_cmp(&b.impact_offset_minutes));
    events
}

/// The detection table's countdown column. Whole hours, floored; under
/// an hour rounds down to "< 1 hour"; zero or negative delta means the
/// front already arrived.
pub fn time_to_impact_label(impact_offset_minutes: f64, now_minutes: f64) -> String {
    let delta = impact_offset_minutes - now_minutes;
    if delta <= 0.0 {
        "Impact occurred".to_string()
    } else if delta < 60.0 {
        "< 1 hour".to_string()
    } else {
        format!("{}h", (delta / 60.0).floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::SimClock;
    use crate::core::rng::Rng;
    use crate::sim::fleet;

    fn bodies() -> Vec<OrbitalBody> {
        let mut rng = Rng::new(42);
        fleet::generate(8, &mut rng)
    }

    #[test]
    fn inactive_cme_threatens_nobody() {
        let bodies = bodies();
        let mut cme = CmeState::new();
        cme.toggle(0.0); // off
        let events = classify(&bodies, &cme, &ScriptedImpactProvider);
        assert!(events.is_empty());
    }

    #[test]
    fn scripted_scenario_pairs_and_orders() {
        let bodies = bodies();
        let cme = CmeState::new();
        let events = classify(&bodies, &cme, &ScriptedImpactProvider);

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "SAT-3");
        assert_eq!(events[0].operator, "SpaceX");
        assert_eq!(events[0].impact_offset_minutes, 150.0);
        assert_eq!(events[0].severity, Severity::High);
        assert_eq!(events[0].altitude_km, 12_500);

        assert_eq!(events[1].name, "SAT-5");
        assert_eq!(events[1].operator, "ISRO");
        assert_eq!(events[1].impact_offset_minutes, 240.0);
        assert_eq!(events[1].severity, Severity::Medium);
        assert_eq!(events[1].altitude_km, 35_786);
    }

    struct ShuffledProvider;

    impl ImpactProvider for ShuffledProvider {
        fn forecasts(&self) -> Vec<ImpactForecast> {
            vec![
                ImpactForecast {
                    body_id: 1,
                    minutes_after_launch: 500.0,
                    severity: Severity::Low,
                    altitude_km: 800,
                },
                ImpactForecast {
                    body_id: 6,
                    minutes_after_launch: 90.0,
                    severity: Severity::High,
                    altitude_km: 35_000,
                },
                ImpactForecast {
                    body_id: 0,
                    minutes_after_launch: 200.0,
                    severity: Severity::Medium,
                    altitude_km: 550,
                },
            ]
        }
    }

    #[test]
    fn provider_order_does_not_leak_through() {
        let bodies = bodies();
        let cme = CmeState::new();
        let events = classify(&bodies, &cme, &ShuffledProvider);
        let times: Vec<f64> = events.iter().map(|e| e.impact_offset_minutes).collect();
        assert_eq!(times, vec![90.0, 200.0, 500.0]);
    }

    struct GhostProvider;

    impl ImpactProvider for GhostProvider {
        fn forecasts(&self) -> Vec<ImpactForecast> {
            vec![ImpactForecast {
                body_id: 999,
                minutes_after_launch: 60.0,
                severity: Severity::High,
                altitude_km: 1_000,
            }]
        }
    }

    #[test]
    fn forecasts_for_unknown_bodies_are_dropped() {
        let bodies = bodies();
        let cme = CmeState::new();
        assert!(classify(&bodies, &cme, &GhostProvider).is_empty());
    }

    #[test]
    fn relaunched_cme_shifts_impact_times() {
        let bodies = bodies();
        let mut cme = CmeState::new();
        cme.toggle(0.0); // off
        cme.toggle(300.0); // relaunch later in the timeline
        let events = classify(&bodies, &cme, &ScriptedImpactProvider);
        assert_eq!(events[0].impact_offset_minutes, 450.0);
        assert_eq!(events[1].impact_offset_minutes, 540.0);
    }

    #[test]
    fn countdown_label_rules() {
        assert_eq!(time_to_impact_label(150.0, 150.0), "Impact occurred");
        assert_eq!(time_to_impact_label(100.0, 170.0), "Impact occurred");
        assert_eq!(time_to_impact_label(59.0, 0.0), "< 1 hour");
        assert_eq!(time_to_impact_label(60.0, 0.0), "1h");
        assert_eq!(time_to_impact_label(150.0, 0.0), "2h");
        assert_eq!(time_to_impact_label(240.0, 0.0), "4h");
        assert_eq!(time_to_impact_label(125.0, 0.0), "2h");
    }

    #[test]
    fn playing_through_arrival_reports_impact_occurred() {
        let bodies = bodies();
        let cme = CmeState::new();
        let events = classify(&bodies, &cme, &ScriptedImpactProvider);

        let mut clock = SimClock::new();
        clock.toggle_play();
        clock.advance(150.0); // 2.5 simulated hours

        let label = time_to_impact_label(events[0].impact_offset_minutes, clock.offset_minutes());
        assert_eq!(label, "Impact occurred");
    }
}
