//! Solar wind particles streaming outward from the sun.

use super::geometry::build_ribbon_vertices;

/// A single wind particle with drift physics and rendering state.
#[derive(Debug, Clone)]
pub struct WindParticle {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub width: f32,
    pub color: [f32; 3],
    pub lifetime: f32,
    initial_lifetime: f32,
    pub drag: f32,
    pub speed_factor: f32,
}

impl WindParticle {
    pub const DEFAULT_DRAG: f32 = 0.02;
    pub const DEFAULT_SPEED_FACTOR: f32 = 0.8;

    pub fn new(
        position: [f32; 3],
        velocity: [f32; 3],
        width: f32,
        color: [f32; 3],
        lifetime: f32,
    ) -> Self {
        WindParticle {
            position,
            velocity,
            width,
            color,
            lifetime,
            initial_lifetime: lifetime,
            drag: Self::DEFAULT_DRAG,
            speed_factor: Self::DEFAULT_SPEED_FACTOR,
        }
    }

    /// Advance the particle. Returns false when expired.
    /// Wind coasts outward on its own momentum; nothing pulls it back.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            return false;
        }

        self.velocity[0] *= 1.0 - self.drag;
        self.velocity[1] *= 1.0 - self.drag;
        self.velocity[2] *= 1.0 - self.drag;
        self.position[0] += self.velocity[0] * self.speed_factor;
        self.position[1] += self.velocity[1] * self.speed_factor;
        self.position[2] += self.velocity[2] * self.speed_factor;

        true
    }

    /// Fades linearly over the particle's remaining life.
    pub fn alpha(&self) -> f32 {
        (self.lifetime / self.initial_lifetime).clamp(0.0, 1.0)
    }

    /// Ribbon segment trailing along the velocity direction.
    pub fn to_vertices(&self) -> Vec<f32> {
        let end = [
            self.position[0] + self.velocity[0],
            self.position[1] + self.velocity[1],
            self.position[2] + self.velocity[2],
        ];
        build_ribbon_vertices(&[self.position, end], self.width, self.color, self.alpha())
    }
}
