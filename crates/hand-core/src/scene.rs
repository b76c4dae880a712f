//! Minimal node-arena scene graph.
//!
//! Nodes are stored in a flat `Vec` and addressed by [`NodeId`]. Each node has
//! a local [`Transform`] and an optional [`Mesh`]; world transforms are derived
//! by walking parent links. Only nodes reachable from a root are rendered or
//! picked, so detaching a node removes its whole sub-tree from the scene.

use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Local transform with rotation stored as XYZ-order Euler angles (radians).
///
/// Keeping the angles instead of a quaternion lets drag input accumulate on a
/// single axis without drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn quat(&self) -> Quat {
        Quat::from_rotation_x(self.rotation.x)
            * Quat::from_rotation_y(self.rotation.y)
            * Quat::from_rotation_z(self.rotation.z)
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned box centered on the node origin.
    Cuboid { size: Vec3 },
    Sphere { radius: f32, segments: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StandardMaterial {
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    pub shape: Shape,
    pub material: StandardMaterial,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 8]>,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
}

impl Node {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: SmallVec::new(),
            transform: Transform::IDENTITY,
            mesh: None,
        }
    }

    pub fn mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }
}

#[derive(Default, Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` under `parent`, or as a new root when `parent` is `None`.
    pub fn add(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        match parent {
            Some(p) => self.nodes[p.index()].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Unlink `id` from its parent (or the root list). The node stays in the
    /// arena but is no longer reachable from the scene.
    pub fn detach(&mut self, id: NodeId) {
        match self.nodes[id.index()].parent.take() {
            Some(p) => self.nodes[p.index()].children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.index()].transform
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.transform.to_matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    /// `id` followed by all of its descendants, depth first.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.node(n).children.iter().rev().copied());
        }
        out
    }

    pub fn children_with_mesh(&self, id: NodeId, pred: impl Fn(&Shape) -> bool) -> usize {
        self.node(id)
            .children
            .iter()
            .filter(|c| self.node(**c).mesh.map_or(false, |m| pred(&m.shape)))
            .count()
    }

    /// Every mesh reachable from a root, paired with its world matrix.
    pub fn visible_meshes(&self) -> Vec<(NodeId, Mat4, Mesh)> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, Mat4)> = self
            .roots
            .iter()
            .rev()
            .map(|r| (*r, Mat4::IDENTITY))
            .collect();
        while let Some((id, parent_world)) = stack.pop() {
            let node = self.node(id);
            let world = parent_world * node.transform.to_matrix();
            if let Some(mesh) = node.mesh {
                out.push((id, world, mesh));
            }
            stack.extend(node.children.iter().rev().map(|c| (*c, world)));
        }
        out
    }
}
