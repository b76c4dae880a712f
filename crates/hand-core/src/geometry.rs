//! Triangle and line geometry for the shapes used by the scene.

use crate::scene::Shape;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn for_shape(shape: &Shape) -> Self {
        match *shape {
            Shape::Cuboid { size } => cuboid(size),
            Shape::Sphere { radius, segments } => uv_sphere(radius, segments, segments),
        }
    }
}

/// Box centered on the origin with one flat-shaded quad per face.
pub fn cuboid(size: Vec3) -> MeshData {
    let h = size * 0.5;
    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut data = MeshData::default();
    for (n, u, v) in faces {
        let base = data.vertices.len() as u32;
        let center = n * h;
        let du = u * h;
        let dv = v * h;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            data.vertices.push(Vertex {
                position: (center + du * su + dv * sv).to_array(),
                normal: n.to_array(),
            });
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    data
}

/// Latitude/longitude sphere with smooth normals.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut data = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let (sin_t, cos_t) = (v * PI).sin_cos();
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let (sin_p, cos_p) = (u * TAU).sin_cos();
            let n = Vec3::new(-cos_p * sin_t, cos_t, sin_p * sin_t);
            data.vertices.push(Vertex {
                position: (n * radius).to_array(),
                normal: n.to_array(),
            });
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                data.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                data.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    data
}

/// Square grid in the XZ plane, `divisions` cells across, centre lines
/// highlighted.
pub fn grid_lines(size: f32, divisions: u32, center: [f32; 3], line: [f32; 3]) -> Vec<LineVertex> {
    let divisions = divisions.max(1);
    let half = size / 2.0;
    let step = size / divisions as f32;
    let center_index = divisions / 2;
    let mut out = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i == center_index { center } else { line };
        out.push(LineVertex { position: [-half, 0.0, k], color });
        out.push(LineVertex { position: [half, 0.0, k], color });
        out.push(LineVertex { position: [k, 0.0, -half], color });
        out.push(LineVertex { position: [k, 0.0, half], color });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_has_six_quads_within_extents() {
        let m = cuboid(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.vertices.len(), 24);
        assert_eq!(m.indices.len(), 36);
        for v in &m.vertices {
            assert!(v.position[0].abs() <= 0.5 + 1e-6);
            assert!(v.position[1].abs() <= 1.0 + 1e-6);
            assert!(v.position[2].abs() <= 1.5 + 1e-6);
        }
    }

    #[test]
    fn cuboid_winding_faces_outward() {
        let m = cuboid(Vec3::ONE);
        for tri in m.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(m.vertices[i as usize].position));
            let n = Vec3::from(m.vertices[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0);
        }
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let m = uv_sphere(0.3, 8, 8);
        assert_eq!(m.vertices.len(), 81);
        for v in &m.vertices {
            assert!((Vec3::from(v.position).length() - 0.3).abs() < 1e-5);
        }
        assert!(m.indices.iter().all(|i| (*i as usize) < m.vertices.len()));
    }

    #[test]
    fn grid_spans_size_with_one_center_line_pair() {
        let lines = grid_lines(10.0, 10, [1.0; 3], [0.5; 3]);
        assert_eq!(lines.len(), 44);
        assert_eq!(lines.iter().filter(|v| v.color == [1.0; 3]).count(), 4);
        assert!(lines.iter().all(|v| v.position[0].abs() <= 5.0 && v.position[2].abs() <= 5.0));
    }
}
