//! Local responder used when no live completion is available: the fixed
//! welcome line, the quick-question prompts, and keyword-routed canned
//! answers. Routing is first-match, case-insensitive substring.

use serde::Serialize;

/// Styling hint for a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyTone {
    Info,
    Warning,
    Data,
}

pub const WELCOME_MESSAGE: &str = "Welcome to the Space Weather Monitor! I can help you \
understand solar flares, CME impacts, and satellite tracking. What would you like to know?";

pub const QUICK_QUESTIONS: [&str; 4] = [
    "When will the CME hit Earth?",
    "Which satellites are impacted?",
    "What happens to GPS during solar flares?",
    "How can satellites protect themselves?",
];

const CME_IMPACT_REPLY: &str = "Based on current solar wind data, the CME launched 18 hours \
ago is expected to reach Earth's magnetosphere in approximately 2.5 hours. Impact velocity: \
~450 km/s. Geomagnetic storm level G2 (Moderate) is forecast.";

const SATELLITES_REPLY: &str = "Currently tracking 8 satellites in various orbits. 3 are in \
polar orbits (most vulnerable to solar particle events), 2 in GEO (sensitive to charging \
effects), and 3 in LEO (protected by Earth's magnetic field).";

const GPS_REPLY: &str = "During solar flares and geomagnetic storms, GPS accuracy can degrade \
due to ionospheric disturbances. Position errors may increase from ~3m to 10-50m. Aviation \
and surveying applications are most affected.";

const SOLAR_FLARE_REPLY: &str = "The latest X2.1 solar flare occurred at 14:23 UTC from \
Active Region 3842. Associated CME launched at ~1200 km/s. Radio blackouts affecting HF \
communications on sunlit side of Earth.";

const PROTECTION_REPLY: &str = "Satellite operators can implement protective measures: \
orienting solar panels edge-on to particle flux, powering down non-essential systems, and \
switching to radiation-hardened backup components.";

const GENERIC_REPLY: &str = "I understand you're asking about space weather. Let me provide \
some current data based on our monitoring systems.";

/// Pick the canned reply for a user message. First matching rule wins.
pub fn local_reply(message: &str) -> (&'static str, ReplyTone) {
    let m = message.to_lowercase();
    if m.contains("cme") || m.contains("impact") || m.contains("hit") {
        (CME_IMPACT_REPLY, ReplyTone::Warning)
    } else if m.contains("satellite") || m.contains("orbit") {
        (SATELLITES_REPLY, ReplyTone::Data)
    } else if m.contains("gps") {
        (GPS_REPLY, ReplyTone::Warning)
    } else if m.contains("flare") || m.contains("solar") {
        (SOLAR_FLARE_REPLY, ReplyTone::Warning)
    } else if m.contains("protect") || m.contains("safe") {
        (PROTECTION_REPLY, ReplyTone::Info)
    } else {
        (GENERIC_REPLY, ReplyTone::Info)
    }
}
