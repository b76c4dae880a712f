use crate::scene::{NodeId, SceneGraph, Shape};
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    pub distance: f32,
}

/// Nearest non-negative hit of a ray against a sphere. `ray_dir` need not be
/// unit length; the returned `t` is in units of `ray_dir`.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 || a <= f32::EPSILON {
        return None;
    }
    let t = (-b - disc.sqrt()) / a;
    (t >= 0.0).then_some(t)
}

/// Entry distance of a ray into an origin-centred box with the given half
/// extents (slab test). Rays starting inside the box report no hit.
#[inline]
pub fn ray_box(ray_origin: Vec3, ray_dir: Vec3, half_extents: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_dir[axis];
        let h = half_extents[axis];
        if d.abs() < 1e-12 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let t1 = (-h - o) / d;
        let t2 = (h - o) / d;
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
        if t_near > t_far {
            return None;
        }
    }
    (t_near >= 0.0 && t_far >= 0.0).then_some(t_near)
}

/// Intersect `ray` with every mesh in the sub-trees rooted at `roots` and
/// return the hits sorted nearest first.
pub fn intersect_subtrees(scene: &SceneGraph, roots: &[NodeId], ray: &Ray) -> Vec<Intersection> {
    let mut hits = Vec::new();
    for root in roots {
        for id in scene.subtree(*root) {
            let Some(mesh) = scene.node(id).mesh else {
                continue;
            };
            let world = scene.world_matrix(id);
            let inv = world.inverse();
            // Unnormalized local direction keeps t comparable with world distance.
            let lo = inv.transform_point3(ray.origin);
            let ld = inv.transform_vector3(ray.direction);
            let t = match mesh.shape {
                Shape::Cuboid { size } => ray_box(lo, ld, size * 0.5),
                Shape::Sphere { radius, .. } => ray_sphere(lo, ld, Vec3::ZERO, radius),
            };
            if let Some(t) = t {
                let point = world.transform_point3(lo + ld * t);
                hits.push(Intersection {
                    node: id,
                    distance: (point - ray.origin).length(),
                });
            }
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_sphere_hits_front_surface() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(3.0));
    }

    #[test]
    fn ray_sphere_scaled_direction() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z * 2.0, Vec3::new(0.0, 0.0, 5.0), 2.0);
        assert_eq!(t, Some(1.5));
    }

    #[test]
    fn ray_sphere_miss_and_behind() {
        assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
        assert!(ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    }

    #[test]
    fn ray_box_entry_distance() {
        let t = ray_box(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(1.0));
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn ray_box_parallel_outside_slab_misses() {
        assert!(ray_box(Vec3::new(0.0, 2.0, 5.0), Vec3::NEG_Z, Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn ray_box_from_inside_misses() {
        assert!(ray_box(Vec3::ZERO, Vec3::X, Vec3::splat(1.0)).is_none());
    }
}
