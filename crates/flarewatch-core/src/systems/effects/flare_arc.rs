//! Solar flare arcs: midpoint-displacement polylines anchored to the
//! sun's surface. Arcs twitch while they live and fade near the end.

use crate::core::rng::Rng;
use crate::extensions::easing::{ease, Easing};

/// A flare arc rendered using midpoint displacement.
#[derive(Debug, Clone)]
pub struct FlareArc {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub points: Vec<[f32; 3]>,
    displacements: Vec<f32>,
    num_segments: usize,
    max_displacement: f32,
    pub width: f32,
    pub color: [f32; 3],
    age: f32,
    lifetime: f32,
}

impl FlareArc {
    pub fn new(
        start: [f32; 3],
        end: [f32; 3],
        power_of_two: u32,
        width: f32,
        color: [f32; 3],
        lifetime: f32,
        rng: &mut Rng,
    ) -> Self {
        let num_segments = 1usize << power_of_two;
        let mut arc = FlareArc {
            start,
            end,
            points: vec![[0.0; 3]; num_segments + 1],
            displacements: vec![0.0; num_segments.saturating_sub(1)],
            num_segments,
            max_displacement: 0.2,
            width,
            color,
            age: 0.0,
            lifetime,
        };
        arc.points[0] = start;
        arc.points[num_segments] = end;
        arc.generate_displacements(rng);
        arc.generate_points(0, num_segments);
        arc
    }

    fn generate_displacements(&mut self, rng: &mut Rng) {
        for d in self.displacements.iter_mut() {
            let r = (rng.next_int(10000) as f32 / 5000.0) - 1.0;
            *d = r * self.max_displacement;
        }
    }

    fn generate_points(&mut self, start_idx: usize, end_idx: usize) {
        if end_idx - start_idx <= 1 {
            return;
        }
        let mid_idx = (start_idx + end_idx) / 2;
        let sp = self.points[start_idx];
        let ep = self.points[end_idx];
        let mid = [
            (sp[0] + ep[0]) * 0.5,
            (sp[1] + ep[1]) * 0.5,
            (sp[2] + ep[2]) * 0.5,
        ];

        let dx = ep[0] - sp[0];
        let dy = ep[1] - sp[1];
        let dz = ep[2] - sp[2];
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();

        // Displace sideways in the ecliptic plane (direction × up), with
        // the X axis as fallback for vertical segments.
        let hor = (dx * dx + dz * dz).sqrt();
        let perp = if hor < 0.001 {
            [1.0, 0.0, 0.0]
        } else {
            [-dz / hor, 0.0, dx / hor]
        };

        let disp_idx = mid_idx.saturating_sub(1);
        let disp = if disp_idx < self.displacements.len() {
            self.displacements[disp_idx]
        } else {
            0.0
        };
        self.points[mid_idx] = [
            mid[0] + perp[0] * disp * dist,
            mid[1] + perp[1] * disp * dist,
            mid[2] + perp[2] * disp * dist,
        ];

        self.generate_points(start_idx, mid_idx);
        self.generate_points(mid_idx, end_idx);
    }

    /// Jitter the arc displacements for a living-plasma effect.
    pub fn twitch(&mut self, factor: f32, rng: &mut Rng) {
        for d in self.displacements.iter_mut() {
            let r = (rng.next_int(10000) as f32 / 5000.0) - 1.0;
            *d += factor * r;
            *d = d.clamp(-self.max_displacement, self.max_displacement);
        }
        self.points[0] = self.start;
        self.points[self.num_segments] = self.end;
        self.generate_points(0, self.num_segments);
    }

    /// Advance the arc's age. Returns false when expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age < self.lifetime
    }

    /// Burns at full brightness for most of its life, then dies quickly.
    pub fn alpha(&self) -> f32 {
        let t = (self.age / self.lifetime).clamp(0.0, 1.0);
        ease(1.0, 0.0, t, Easing::QuadIn)
    }
}
