use crate::components::entity::Entity;
use bytemuck::{Pod, Zeroable};

/// Per-entity render data written to the SharedArrayBuffer for the
/// TypeScript scene builder. Must match the TypeScript protocol:
/// 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct EntityRecord {
    pub id: f32,
    /// EntityKind wire code.
    pub kind: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub scale: f32,
    /// Spin angle in radians.
    pub rotation: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub opacity: f32,
    /// 1.0 when the entity is the selected satellite.
    pub selected: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl EntityRecord {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_entity(e: &Entity) -> Self {
        Self {
            id: e.id.0 as f32,
            kind: e.kind.wire_code(),
            x: e.pos.x,
            y: e.pos.y,
            z: e.pos.z,
            radius: e.radius,
            scale: e.scale,
            rotation: e.rotation,
            r: e.color.r,
            g: e.color.g,
            b: e.color.b,
            emissive: e.emissive,
            opacity: e.opacity,
            selected: if e.selected { 1.0 } else { 0.0 },
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }
}

/// One frame's worth of entity records.
pub struct EntityBuffer {
    pub records: Vec<EntityRecord>,
}

impl EntityBuffer {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Rebuild from the scene, skipping inactive entities.
    pub fn rebuild<'a>(&mut self, entities: impl Iterator<Item = &'a Entity>) {
        self.records.clear();
        for e in entities {
            if e.active {
                self.records.push(EntityRecord::from_entity(e));
            }
        }
    }

    pub fn entity_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Raw pointer to record data for SharedArrayBuffer reads.
    pub fn entities_ptr(&self) -> *const f32 {
        self.records.as_ptr() as *const f32
    }
}

impl Default for EntityBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::bridge::protocol::ENTITY_FLOATS;
    use crate::components::entity::{Color, EntityKind};
    use glam::Vec3;

    #[test]
    fn entity_record_is_16_floats() {
        assert_eq!(std::mem::size_of::<EntityRecord>(), 64);
        assert_eq!(EntityRecord::FLOATS, ENTITY_FLOATS);
    }

    #[test]
    fn record_mirrors_entity_fields() {
        let e = Entity::new(EntityId(7), EntityKind::Satellite)
            .with_pos(Vec3::new(1.0, 2.0, 3.0))
            .with_radius(0.1)
            .with_color(Color::new(0.75, 0.75, 0.75))
            .with_opacity(0.9);
        let rec = EntityRecord::from_entity(&e);
        assert_eq!(rec.id, 7.0);
        assert_eq!(rec.kind, EntityKind::Satellite.wire_code());
        assert_eq!((rec.x, rec.y, rec.z), (1.0, 2.0, 3.0));
        assert_eq!(rec.radius, 0.1);
        assert_eq!(rec.opacity, 0.9);
        assert_eq!(rec.selected, 0.0);
    }

    #[test]
    fn rebuild_skips_inactive_entities() {
        let visible = Entity::new(EntityId(1), EntityKind::Satellite);
        let hidden = Entity::new(EntityId(2), EntityKind::CmeCone).with_active(false);
        let entities = [visible, hidden];

        let mut buf = EntityBuffer::new();
        buf.rebuild(entities.iter());
        assert_eq!(buf.entity_count(), 1);
        assert_eq!(buf.records[0].id, 1.0);
    }
}
