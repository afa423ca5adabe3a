/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Entities: max_entities × 16 floats]
/// [Effects: max_effects_vertices × 7 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::config::DashboardConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_ENTITIES: usize = 2;
pub const HEADER_ENTITY_COUNT: usize = 3;
pub const HEADER_MAX_EFFECTS_VERTICES: usize = 4;
pub const HEADER_EFFECTS_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_PROTOCOL_VERSION: usize = 8;
pub const HEADER_OFFSET_MINUTES: usize = 9;
pub const HEADER_PLAYING: usize = 10;
pub const HEADER_CME_ACTIVE: usize = 11;
// Indices 12..15 are reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per entity record (wire format — never changes):
/// id, kind, x, y, z, radius, scale, rotation, r, g, b, emissive,
/// opacity, selected, pad, pad.
pub const ENTITY_FLOATS: usize = 16;

/// Floats per effects vertex: x, y, z, r, g, b, a (wire format — never changes).
pub const EFFECTS_VERTEX_FLOATS: usize = 7;

/// Floats per UI event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum scene entities.
    pub max_entities: usize,
    /// Maximum effects vertices.
    pub max_effects_vertices: usize,
    /// Maximum UI events per frame.
    pub max_events: usize,

    /// Size of entity data section in floats.
    pub entity_data_floats: usize,
    /// Size of effects data section in floats.
    pub effects_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where entity data begins.
    pub entity_data_offset: usize,
    /// Offset (in floats) where effects data begins.
    pub effects_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_entities: usize, max_effects_vertices: usize, max_events: usize) -> Self {
        let entity_data_floats = max_entities * ENTITY_FLOATS;
        let effects_data_floats = max_effects_vertices * EFFECTS_VERTEX_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let entity_data_offset = HEADER_FLOATS;
        let effects_data_offset = entity_data_offset + entity_data_floats;
        let event_data_offset = effects_data_offset + effects_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_entities,
            max_effects_vertices,
            max_events,
            entity_data_floats,
            effects_data_floats,
            event_data_floats,
            entity_data_offset,
            effects_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a DashboardConfig.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            config.max_entities,
            config.max_effects_vertices,
            config.max_events,
        )
    }
}
