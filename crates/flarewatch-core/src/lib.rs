pub mod api;
pub mod bridge;
pub mod chat;
pub mod components;
pub mod core;
pub mod extensions;
pub mod input;
pub mod sim;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::DashboardConfig;
pub use api::dashboard::Dashboard;
pub use api::types::{EntityId, UiEvent};
pub use bridge::buffer::{EntityBuffer, EntityRecord};
pub use bridge::protocol::ProtocolLayout;
pub use chat::fallback::ReplyTone;
pub use chat::{ChatEntry, ChatLog, ChatOutcome, ChatPlan, ChatRole, SimSnapshot};
pub use components::entity::{Color, Entity, EntityKind};
pub use core::clock::SimClock;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{ControlEvent, ControlQueue};
pub use sim::cme::CmeState;
pub use sim::fleet::{BodyStatus, OrbitClass, OrbitalBody};
pub use sim::impacts::{
    ImpactEvent, ImpactForecast, ImpactProvider, ScriptedImpactProvider, Severity,
};
pub use systems::effects::EffectsState;
