//! Ribbon mesh generation for flare arcs and wind particles.

/// Generate triangle strip vertices from a 3D polyline.
/// Output: Vec of [x, y, z, r, g, b, a] floats (7 per vertex).
///
/// The ribbon is widened in the ecliptic plane: each perpendicular is
/// the segment direction crossed with world up, so arcs and wind trails
/// stay face-on to the orbital camera.
pub fn build_ribbon_vertices(
    points: &[[f32; 3]],
    width: f32,
    color: [f32; 3],
    alpha: f32,
) -> Vec<f32> {
    if points.len() < 2 {
        return Vec::new();
    }

    let n = points.len();
    let mut verts = Vec::with_capacity((n + 2) * 2 * 7);

    let dir = |a: [f32; 3], b: [f32; 3]| -> ([f32; 3], [f32; 3]) {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let dz = b[2] - a[2];
        let len = (dx * dx + dy * dy + dz * dz).sqrt().max(0.001);
        let d = [dx / len, dy / len, dz / len];
        // direction × up(0,1,0); vertical segments fall back to the X axis
        let mut p = [-d[2], 0.0, d[0]];
        let plen = (p[0] * p[0] + p[2] * p[2]).sqrt();
        if plen < 0.001 {
            p = [1.0, 0.0, 0.0];
        } else {
            p = [p[0] / plen, 0.0, p[2] / plen];
        }
        (d, p)
    };

    let push_pair = |verts: &mut Vec<f32>, center: [f32; 3], perp: [f32; 3], w: f32| {
        verts.extend_from_slice(&[
            center[0] + perp[0] * w,
            center[1] + perp[1] * w,
            center[2] + perp[2] * w,
            color[0],
            color[1],
            color[2],
            alpha,
        ]);
        verts.extend_from_slice(&[
            center[0] - perp[0] * w,
            center[1] - perp[1] * w,
            center[2] - perp[2] * w,
            color[0],
            color[1],
            color[2],
            alpha,
        ]);
    };

    // Start cap
    let (d0, p0) = dir(points[0], points[1]);
    let start_cap = [
        points[0][0] - d0[0] * width,
        points[0][1] - d0[1] * width,
        points[0][2] - d0[2] * width,
    ];
    push_pair(&mut verts, start_cap, p0, width);

    // First point
    push_pair(&mut verts, points[0], p0, width);

    // Middle points use the averaged perpendicular of their two segments
    for i in 1..n - 1 {
        let (_, p_prev) = dir(points[i - 1], points[i]);
        let (_, p_next) = dir(points[i], points[i + 1]);
        let avg = [
            p_prev[0] + p_next[0],
            p_prev[1] + p_next[1],
            p_prev[2] + p_next[2],
        ];
        let avg_len = (avg[0] * avg[0] + avg[1] * avg[1] + avg[2] * avg[2])
            .sqrt()
            .max(0.001);
        let perp = [avg[0] / avg_len, avg[1] / avg_len, avg[2] / avg_len];
        push_pair(&mut verts, points[i], perp, width);
    }

    // Last point
    let (d_last, p_last) = dir(points[n - 2], points[n - 1]);
    push_pair(&mut verts, points[n - 1], p_last, width);

    // End cap
    let end_cap = [
        points[n - 1][0] + d_last[0] * width,
        points[n - 1][1] + d_last[1] * width,
        points[n - 1][2] + d_last[2] * width,
    ];
    push_pair(&mut verts, end_cap, p_last, width);

    verts
}

/// Convert triangle strip vertices to a triangle list (the renderer draws
/// plain triangle soups, no strip primitives).
pub fn strip_to_triangles(strip_verts: &[f32], floats_per_vert: usize) -> Vec<f32> {
    let num_verts = strip_verts.len() / floats_per_vert;
    if num_verts < 3 {
        return Vec::new();
    }
    let num_tris = num_verts - 2;
    let mut out = Vec::with_capacity(num_tris * 3 * floats_per_vert);
    for i in 0..num_tris {
        let (a, b, c) = if i % 2 == 0 {
            (i, i + 1, i + 2)
        } else {
            (i + 1, i, i + 2)
        };
        let base_a = a * floats_per_vert;
        let base_b = b * floats_per_vert;
        let base_c = c * floats_per_vert;
        out.extend_from_slice(&strip_verts[base_a..base_a + floats_per_vert]);
        out.extend_from_slice(&strip_verts[base_b..base_b + floats_per_vert]);
        out.extend_from_slice(&strip_verts[base_c..base_c + floats_per_vert]);
    }
    out
}
