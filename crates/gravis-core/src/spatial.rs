use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::geometry::{BBox, Point};
use crate::graph::{Graph, VertexId};

/// An entry in the R-tree spatial index, referencing a positioned vertex.
#[derive(Debug, Clone)]
pub struct NodeEntry {
    /// The vertex this entry stands for.
    pub vertex: VertexId,
    /// Bounding box of the node footprint.
    pub bbox: BBox,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min.x, self.bbox.min.y],
            [self.bbox.max.x, self.bbox.max.y],
        )
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope().distance_2(point)
    }
}

/// Spatial index over positioned vertices for viewport culling and point lookup.
pub struct NodeIndex {
    tree: RTree<NodeEntry>,
}

impl NodeIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build the index from every vertex that has a position, inflating each
    /// position by `half_extent` on all sides to cover the node footprint.
    pub fn build(graph: &Graph, half_extent: f64) -> Self {
        let entries: Vec<NodeEntry> = graph
            .vertices()
            .iter()
            .filter_map(|v| {
                graph.position(v).map(|p| NodeEntry {
                    vertex: v.clone(),
                    bbox: BBox::new(*p, *p).inflate(half_extent),
                })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Insert a single entry into the index.
    pub fn insert(&mut self, entry: NodeEntry) {
        self.tree.insert(entry);
    }

    /// Find all entries whose footprint contains the given point.
    pub fn query_point(&self, point: &Point) -> Vec<&NodeEntry> {
        self.tree.locate_all_at_point(&[point.x, point.y]).collect()
    }

    /// Find all entries that intersect with the given viewport bounding box.
    pub fn query_viewport(&self, viewport: &BBox) -> Vec<&NodeEntry> {
        let envelope = AABB::from_corners(
            [viewport.min.x, viewport.min.y],
            [viewport.max.x, viewport.max.y],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::new()
    }
}
