//! Procedural hand model: palm, wrist and five three-segment fingers.

use crate::constants::*;
use crate::raycast::{intersect_subtrees, Ray};
use crate::scene::{Mesh, Node, NodeId, SceneGraph, Shape, StandardMaterial};
use crate::stage::hex_to_linear;
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// Capitalized name for status text.
    pub fn label(self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Pinky => "Pinky",
        }
    }

}

/// Placement and proportions of one finger relative to the hand root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FingerSpec {
    pub finger: Finger,
    pub position: Vec3,
    pub length: f32,
    pub thickness: f32,
    pub angle: f32,
}

pub const FINGER_SPECS: [FingerSpec; 5] = [
    FingerSpec {
        finger: Finger::Thumb,
        position: Vec3::new(-0.7, 0.0, 0.8),
        length: 1.3,
        thickness: 0.18,
        angle: -0.3,
    },
    FingerSpec {
        finger: Finger::Index,
        position: Vec3::new(-0.4, 0.0, 1.0),
        length: 1.5,
        thickness: 0.15,
        angle: 0.0,
    },
    FingerSpec {
        finger: Finger::Middle,
        position: Vec3::new(0.0, 0.0, 1.0),
        length: 1.6,
        thickness: 0.16,
        angle: 0.0,
    },
    FingerSpec {
        finger: Finger::Ring,
        position: Vec3::new(0.4, 0.0, 1.0),
        length: 1.5,
        thickness: 0.15,
        angle: 0.0,
    },
    FingerSpec {
        finger: Finger::Pinky,
        position: Vec3::new(0.7, 0.0, 0.9),
        length: 1.2,
        thickness: 0.12,
        angle: 0.0,
    },
];

pub fn hand_material() -> StandardMaterial {
    StandardMaterial {
        color: hex_to_linear(HAND_COLOR_HEX),
        metalness: HAND_METALNESS,
        roughness: HAND_ROUGHNESS,
    }
}

/// The hand root plus a fixed-size finger table and a reverse index from mesh
/// nodes to the finger that owns them.
#[derive(Debug)]
pub struct Hand {
    pub root: NodeId,
    pub palm: NodeId,
    pub wrist: NodeId,
    fingers: [Option<NodeId>; 5],
    owners: FnvHashMap<NodeId, Finger>,
    material: StandardMaterial,
}

impl Hand {
    /// An empty hand group with no palm geometry or fingers attached yet.
    fn bare(scene: &mut SceneGraph) -> Self {
        let root = scene.add(None, Node::group("hand"));
        Self {
            root,
            palm: root,
            wrist: root,
            fingers: [None; 5],
            owners: FnvHashMap::default(),
            material: hand_material(),
        }
    }

    /// Build the full hand under a new root node in `scene`.
    pub fn create(scene: &mut SceneGraph) -> Self {
        log::info!("[hand] Creating hand...");
        let mut hand = Self::bare(scene);
        let material = hand.material;
        hand.palm = scene.add(
            Some(hand.root),
            Node::mesh(
                "palm",
                Mesh {
                    shape: Shape::Cuboid {
                        size: Vec3::from(PALM_SIZE),
                    },
                    material,
                },
            )
            .at(Vec3::from(PALM_POSITION)),
        );
        hand.wrist = scene.add(
            Some(hand.root),
            Node::mesh(
                "wrist",
                Mesh {
                    shape: Shape::Cuboid {
                        size: Vec3::from(WRIST_SIZE),
                    },
                    material,
                },
            )
            .at(Vec3::from(WRIST_POSITION)),
        );

        for spec in FINGER_SPECS {
            hand.create_finger(
                scene,
                spec.finger,
                spec.position,
                spec.length,
                spec.thickness,
                spec.angle,
            );
        }

        if let Some(thumb) = hand.finger(Finger::Thumb) {
            let t = scene.transform_mut(thumb);
            t.rotation.y = THUMB_OPPOSITION[0];
            t.rotation.z = THUMB_OPPOSITION[1];
        }
        log::info!("[hand] Hand created successfully");
        hand
    }

    /// Build one finger group: three box segments along local +Z with a
    /// sphere joint between each adjacent pair.
    ///
    /// Rebuilding an existing finger detaches the old group first, so the
    /// hand never carries orphaned geometry. The detached nodes stay in the
    /// scene arena (unreachable from any root) since `NodeId`s are never
    /// reused; fine for a hand built once at startup.
    pub fn create_finger(
        &mut self,
        scene: &mut SceneGraph,
        finger: Finger,
        position: Vec3,
        length: f32,
        thickness: f32,
        angle: f32,
    ) -> NodeId {
        if let Some(old) = self.fingers[finger.index()].take() {
            log::warn!("[hand] rebuilding {} finger", finger.name());
            scene.detach(old);
            self.owners.retain(|_, f| *f != finger);
        }

        let mut group = Node::group(finger.name()).at(position);
        group.transform.rotation.x = angle;
        let group = scene.add(Some(self.root), group);

        let segment_length = length / SEGMENTS_PER_FINGER as f32;
        for i in 0..SEGMENTS_PER_FINGER {
            if i > 0 {
                let joint = scene.add(
                    Some(group),
                    Node::mesh(
                        format!("{}_joint_{i}", finger.name()),
                        Mesh {
                            shape: Shape::Sphere {
                                radius: thickness * JOINT_RADIUS_FACTOR,
                                segments: JOINT_SPHERE_SEGMENTS,
                            },
                            material: self.material,
                        },
                    )
                    .at(Vec3::new(0.0, 0.0, i as f32 * segment_length)),
                );
                self.owners.insert(joint, finger);
            }
            let segment = scene.add(
                Some(group),
                Node::mesh(
                    format!("{}_segment_{i}", finger.name()),
                    Mesh {
                        shape: Shape::Cuboid {
                            size: Vec3::new(thickness, thickness, segment_length),
                        },
                        material: self.material,
                    },
                )
                .at(Vec3::new(0.0, 0.0, (i as f32 + 0.5) * segment_length)),
            );
            self.owners.insert(segment, finger);
        }
        self.owners.insert(group, finger);
        self.fingers[finger.index()] = Some(group);
        group
    }

    #[inline]
    pub fn finger(&self, finger: Finger) -> Option<NodeId> {
        self.fingers[finger.index()]
    }

    /// Groups of the fingers currently present, in [`Finger::ALL`] order.
    pub fn present_fingers(&self) -> Vec<NodeId> {
        self.fingers.iter().flatten().copied().collect()
    }

    pub fn owner_of(&self, node: NodeId) -> Option<Finger> {
        self.owners.get(&node).copied()
    }

    /// Finger under `ray`, judged by the nearest mesh hit among all finger
    /// sub-trees.
    pub fn pick(&self, scene: &SceneGraph, ray: &Ray) -> Option<Finger> {
        let hits = intersect_subtrees(scene, &self.present_fingers(), ray);
        hits.first().and_then(|hit| self.owner_of(hit.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_capitalise_names() {
        for f in Finger::ALL {
            let name = f.name();
            let label = f.label();
            assert_eq!(label.to_lowercase(), name);
            assert!(label.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn bare_hand_skips_absent_fingers() {
        let mut scene = SceneGraph::new();
        let mut hand = Hand::bare(&mut scene);
        assert!(hand.present_fingers().is_empty());
        let ring = hand.create_finger(&mut scene, Finger::Ring, Vec3::ZERO, 1.5, 0.15, 0.0);
        assert_eq!(hand.present_fingers(), vec![ring]);
        assert_eq!(hand.finger(Finger::Index), None);
    }
}
