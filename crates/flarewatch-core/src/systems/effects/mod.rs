//! Visual effects system: solar flare arcs and wind particles.
//!
//! `EffectsState` owns every live effect plus the vertex buffer the
//! renderer consumes. Geometry is rebuilt each frame from whatever
//! effects survived their lifetimes.

mod flare_arc;
mod geometry;
mod particle;

pub use flare_arc::FlareArc;
pub use geometry::{build_ribbon_vertices, strip_to_triangles};
pub use particle::WindParticle;

use crate::core::rng::Rng;
use std::f32::consts::TAU;

/// Container for all visual effects (arcs + particles).
pub struct EffectsState {
    pub arcs: Vec<FlareArc>,
    pub particles: Vec<WindParticle>,
    pub effects_buffer: Vec<f32>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            arcs: Vec::new(),
            particles: Vec::new(),
            effects_buffer: Vec::with_capacity(4096),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Create a new EffectsState with a pre-allocated buffer capacity.
    pub fn with_capacity(seed: u64, max_vertices: usize) -> Self {
        EffectsState {
            arcs: Vec::new(),
            particles: Vec::new(),
            effects_buffer: Vec::with_capacity(max_vertices * 7), // 7 floats per vertex
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Add a flare arc between two points.
    pub fn add_arc(
        &mut self,
        start: [f32; 3],
        end: [f32; 3],
        width: f32,
        color: [f32; 3],
        lifetime: f32,
        power_of_two: u32,
    ) {
        let arc = FlareArc::new(start, end, power_of_two, width, color, lifetime, &mut self.rng);
        self.arcs.push(arc);
    }

    /// Spawn wind particles streaming outward from `center`, spread
    /// around the ecliptic plane with a little vertical scatter.
    pub fn spawn_wind(
        &mut self,
        center: [f32; 3],
        count: usize,
        speed_range: (f32, f32),
        width: f32,
        color: [f32; 3],
        lifetime: f32,
    ) {
        for _ in 0..count {
            let angle = self.rng.next_fraction() as f32 * TAU;
            let t = self.rng.next_fraction() as f32;
            let speed = speed_range.0 + t * (speed_range.1 - speed_range.0);
            let vy = (self.rng.next_fraction() as f32 - 0.5) * 0.2 * speed;
            self.particles.push(WindParticle::new(
                center,
                [angle.cos() * speed, vy, angle.sin() * speed],
                width,
                color,
                lifetime,
            ));
        }
    }

    /// Advance effects: twitch arcs, age both populations out.
    pub fn tick(&mut self, dt: f32) {
        for arc in &mut self.arcs {
            arc.twitch(0.05, &mut self.rng);
        }
        self.arcs.retain_mut(|arc| arc.tick(dt));
        self.particles.retain_mut(|p| p.tick(dt));
    }

    /// Rebuild the effects vertex buffer (triangle list, 7 floats per vertex).
    pub fn rebuild_effects_buffer(&mut self) {
        self.effects_buffer.clear();

        for arc in &self.arcs {
            let strip = build_ribbon_vertices(&arc.points, arc.width, arc.color, arc.alpha());
            let tris = strip_to_triangles(&strip, 7);
            self.effects_buffer.extend_from_slice(&tris);
        }

        for p in &self.particles {
            let strip = p.to_vertices();
            let tris = strip_to_triangles(&strip, 7);
            self.effects_buffer.extend_from_slice(&tris);
        }
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        self.arcs.clear();
        self.particles.clear();
        self.effects_buffer.clear();
    }

    pub fn effects_vertex_count(&self) -> usize {
        self.effects_buffer.len() / 7
    }

    pub fn effects_buffer_ptr(&self) -> *const f32 {
        self.effects_buffer.as_ptr()
    }
}
