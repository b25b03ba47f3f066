//! Scene graph produced by the composers.
//!
//! A tree of [`SceneNode`]s: groups carry a transform and ordered children,
//! meshes carry a transform, a primitive and a material. Trees are plain
//! values. They own everything they reference, are `Send + Sync`, and are
//! replaced wholesale on rebuild instead of being patched in place.

use std::borrow::Cow;

use curio_shared::{Mat4, Transform};

use crate::error::AssetResult;
use crate::material::MaterialHandle;
use crate::primitive::{PrimitiveKind, PrimitiveSpec};

/// Group node: transform + ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    /// Part name.
    pub name: Cow<'static, str>,
    /// Local transform.
    pub transform: Transform,
    /// Children, in emission order.
    pub children: Vec<SceneNode>,
}

/// Leaf node: one primitive with one material.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    /// Part name.
    pub name: Cow<'static, str>,
    /// Local transform.
    pub transform: Transform,
    /// Shape to tessellate.
    pub primitive: PrimitiveSpec,
    /// Surface appearance.
    pub material: MaterialHandle,
}

/// A node in the asset hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// Interior node.
    Group(GroupNode),
    /// Leaf node.
    Mesh(MeshNode),
}

/// One mesh resolved to world space, ready for a draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem<'a> {
    /// Part name of the mesh.
    pub name: &'a str,
    /// Product of every ancestor transform and the mesh's own.
    pub world: Mat4,
    /// Shape to tessellate.
    pub primitive: &'a PrimitiveSpec,
    /// Surface appearance.
    pub material: &'a MaterialHandle,
}

/// Shape and size summary of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Group nodes, root included.
    pub groups: usize,
    /// Mesh nodes.
    pub meshes: usize,
    /// Box meshes.
    pub boxes: usize,
    /// Cylinder meshes.
    pub cylinders: usize,
    /// Cone meshes.
    pub cones: usize,
    /// Sphere meshes.
    pub spheres: usize,
    /// Plane meshes.
    pub planes: usize,
    /// Materials distinct by value.
    pub distinct_materials: usize,
    /// Longest root-to-leaf path, in nodes.
    pub max_depth: usize,
}

impl SceneNode {
    /// Creates a group.
    #[must_use]
    pub fn group(
        name: impl Into<Cow<'static, str>>,
        transform: Transform,
        children: Vec<SceneNode>,
    ) -> Self {
        Self::Group(GroupNode { name: name.into(), transform, children })
    }

    /// Creates a mesh.
    #[must_use]
    pub fn mesh(
        name: impl Into<Cow<'static, str>>,
        transform: Transform,
        primitive: PrimitiveSpec,
        material: MaterialHandle,
    ) -> Self {
        Self::Mesh(MeshNode { name: name.into(), transform, primitive, material })
    }

    /// Replaces the local transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        match &mut self {
            Self::Group(g) => g.transform = transform,
            Self::Mesh(m) => m.transform = transform,
        }
        self
    }

    /// Appends a child. No-op on meshes, which are always leaves.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        if let Self::Group(g) = &mut self {
            g.children.push(child);
        }
        self
    }

    /// Part name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Group(g) => &g.name,
            Self::Mesh(m) => &m.name,
        }
    }

    /// Local transform.
    #[must_use]
    pub fn transform(&self) -> &Transform {
        match self {
            Self::Group(g) => &g.transform,
            Self::Mesh(m) => &m.transform,
        }
    }

    /// Children; always empty for meshes.
    #[must_use]
    pub fn children(&self) -> &[SceneNode] {
        match self {
            Self::Group(g) => &g.children,
            Self::Mesh(_) => &[],
        }
    }

    /// True for leaf nodes.
    #[must_use]
    pub fn is_mesh(&self) -> bool {
        matches!(self, Self::Mesh(_))
    }

    /// Mesh payload, if this is a mesh.
    #[must_use]
    pub fn as_mesh(&self) -> Option<&MeshNode> {
        match self {
            Self::Mesh(m) => Some(m),
            Self::Group(_) => None,
        }
    }

    /// Depth-first, pre-order traversal starting at `self`.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Every mesh in the tree, in traversal order.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshNode> {
        self.walk().filter_map(SceneNode::as_mesh)
    }

    /// First node named `name`, in traversal order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        self.walk().find(|n| n.name() == name)
    }

    /// Every node named `name`.
    #[must_use]
    pub fn find_all(&self, name: &str) -> Vec<&SceneNode> {
        self.walk().filter(|n| n.name() == name).collect()
    }

    /// Total nodes, `self` included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Mesh nodes only.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    /// Longest root-to-leaf path, in nodes. A lone mesh has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(SceneNode::depth).max().unwrap_or(0)
    }

    /// Materials distinct by value, in first-seen order.
    #[must_use]
    pub fn distinct_materials(&self) -> Vec<&MaterialHandle> {
        let mut seen: Vec<&MaterialHandle> = Vec::new();
        for mesh in self.meshes() {
            if !seen.iter().any(|m| *m == &mesh.material) {
                seen.push(&mesh.material);
            }
        }
        seen
    }

    /// Re-checks every mesh primitive.
    ///
    /// # Errors
    ///
    /// The first [`crate::AssetError::InvalidDimension`] found.
    pub fn validate(&self) -> AssetResult<()> {
        self.meshes().try_for_each(|m| m.primitive.validate())
    }

    /// Counts nodes by kind.
    #[must_use]
    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats {
            distinct_materials: self.distinct_materials().len(),
            max_depth: self.depth(),
            ..SceneStats::default()
        };

        for node in self.walk() {
            match node {
                Self::Group(_) => stats.groups += 1,
                Self::Mesh(m) => {
                    stats.meshes += 1;
                    match m.primitive.kind() {
                        PrimitiveKind::Box => stats.boxes += 1,
                        PrimitiveKind::Cylinder => stats.cylinders += 1,
                        PrimitiveKind::Cone => stats.cones += 1,
                        PrimitiveKind::Sphere => stats.spheres += 1,
                        PrimitiveKind::Plane => stats.planes += 1,
                    }
                }
            }
        }

        stats
    }

    /// Resolves every mesh to world space.
    ///
    /// Output order matches [`SceneNode::meshes`].
    #[must_use]
    pub fn flatten(&self) -> Vec<DrawItem<'_>> {
        let mut out = Vec::with_capacity(self.mesh_count());
        self.flatten_into(Mat4::IDENTITY, &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, parent: Mat4, out: &mut Vec<DrawItem<'a>>) {
        let world = parent * self.transform().to_matrix();
        match self {
            Self::Group(g) => {
                for child in &g.children {
                    child.flatten_into(world, out);
                }
            }
            Self::Mesh(m) => out.push(DrawItem {
                name: &m.name,
                world,
                primitive: &m.primitive,
                material: &m.material,
            }),
        }
    }
}

/// Pre-order iterator returned by [`SceneNode::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialSpec;
    use crate::primitive::{make_box, make_cone};
    use curio_shared::{Rgb, Vec3};

    fn sample() -> SceneNode {
        let red = MaterialHandle::new(MaterialSpec::solid(Rgb::from_hex(0xff0000), 0.5)).unwrap();
        let gray = MaterialHandle::new(MaterialSpec::solid(Rgb::from_hex(0x444444), 0.9)).unwrap();
        SceneNode::group(
            "root",
            Transform::at(10.0, 0.0, 0.0),
            vec![
                SceneNode::mesh("a", Transform::IDENTITY, make_box(1.0, 1.0, 1.0).unwrap(), red.clone()),
                SceneNode::group(
                    "inner",
                    Transform::at(0.0, 1.0, 0.0),
                    vec![
                        SceneNode::mesh("b", Transform::at(0.0, 1.0, 0.0), make_cone(1.0, 1.0, 4).unwrap(), gray),
                        SceneNode::mesh("c", Transform::IDENTITY, make_box(2.0, 1.0, 1.0).unwrap(), red),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = sample();
        let names: Vec<_> = tree.walk().map(SceneNode::name).collect();
        assert_eq!(names, ["root", "a", "inner", "b", "c"]);
    }

    #[test]
    fn test_counts_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.mesh_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.distinct_materials().len(), 2);

        let stats = tree.stats();
        assert_eq!(stats.groups, 2);
        assert_eq!(stats.boxes, 2);
        assert_eq!(stats.cones, 1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_find() {
        let tree = sample();
        assert!(tree.find("inner").is_some_and(|n| !n.is_mesh()));
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.find_all("b").len(), 1);
        assert!(tree.find("a").and_then(SceneNode::as_mesh).is_some());
        assert!(tree.find("a").unwrap().children().is_empty());
    }

    #[test]
    fn test_flatten_composes_transforms() {
        let tree = sample();
        let items = tree.flatten();
        assert_eq!(items.len(), 3);

        let b = items.iter().find(|i| i.name == "b").unwrap();
        let origin = b.world.transform_point(Vec3::ZERO);
        assert!(origin.distance(Vec3::new(10.0, 2.0, 0.0)) < 1e-5);
    }

    #[test]
    fn test_validate_catches_bad_primitive() {
        let mat = MaterialHandle::new(MaterialSpec::solid(Rgb::default(), 0.5)).unwrap();
        let bad = SceneNode::mesh(
            "flat",
            Transform::IDENTITY,
            PrimitiveSpec::Box { width: 1.0, height: 0.0, depth: 1.0 },
            mat,
        );
        assert!(sample().validate().is_ok());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_builder_methods() {
        let mat = MaterialHandle::new(MaterialSpec::solid(Rgb::default(), 0.5)).unwrap();
        let leaf = SceneNode::mesh("leaf", Transform::IDENTITY, make_box(1.0, 1.0, 1.0).unwrap(), mat);
        let tree = SceneNode::group("g", Transform::IDENTITY, Vec::new())
            .with_transform(Transform::at(1.0, 2.0, 3.0))
            .with_child(leaf.clone());

        assert_eq!(tree.transform().position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(tree.children().len(), 1);
        assert_eq!(leaf.clone().with_child(leaf).children().len(), 0);
    }

    #[test]
    fn test_scene_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<SceneNode>();
    }
}
