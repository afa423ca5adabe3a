use crate::api::types::EntityId;
use glam::Vec3;

/// What a scene entity represents on the renderer side.
/// The numeric code is part of the wire format and maps to a mesh in the
/// TypeScript scene builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    SunCore,
    Corona,
    Earth,
    Atmosphere,
    OrbitRing,
    CmeCone,
    Satellite,
}

impl EntityKind {
    /// Wire code written into the entity section of the shared buffer.
    pub fn wire_code(self) -> f32 {
        match self {
            EntityKind::SunCore => 0.0,
            EntityKind::Corona => 1.0,
            EntityKind::Earth => 2.0,
            EntityKind::Atmosphere => 3.0,
            EntityKind::OrbitRing => 4.0,
            EntityKind::CmeCone => 5.0,
            EntityKind::Satellite => 6.0,
        }
    }
}

/// RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
}

/// A scene entity. Fat struct — all renderable attributes inline, unused
/// ones left at their defaults. Designed for a scene of a few dozen
/// entities, not thousands.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Human-readable tag for lookups and debugging (e.g. "SAT-3").
    pub tag: String,
    pub kind: EntityKind,
    /// Inactive entities are skipped when building the render buffer.
    pub active: bool,
    /// Position in scene units.
    pub pos: Vec3,
    /// Spin angle around the local Y axis, in radians.
    pub rotation: f32,
    /// Uniform scale multiplier on top of `radius`.
    pub scale: f32,
    /// Base radius in scene units.
    pub radius: f32,
    pub color: Color,
    /// Self-illumination in [0, 1]; the sun glows, satellites do not.
    pub emissive: f32,
    pub opacity: f32,
    /// Highlight flag for the satellite the user clicked.
    pub selected: bool,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            tag: String::new(),
            kind,
            active: true,
            pos: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            radius: 1.0,
            color: Color::WHITE,
            emissive: 0.0,
            opacity: 1.0,
            selected: false,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
