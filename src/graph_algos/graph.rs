use crate::collections::FxIndexMap;
use crate::geometry::{Axis, Vector2d};
use super::Cost;

use std::fmt;


/// Movement plane of a node
/// Horizontal nodes leave along east/west, vertical nodes along north/south.
/// `Both` is reserved for the synthetic start and end nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Plane {
    Horizontal,
    Vertical,
    Both,
}

impl Plane {

    /// Axis the outgoing runs of this plane travel along
    pub fn axis(self) -> Option<Axis> {
        match self {
            Plane::Horizontal => Some(Axis::Horizontal),
            Plane::Vertical => Some(Axis::Vertical),
            Plane::Both => None,
        }
    }
}

impl From<Axis> for Plane {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Plane::Horizontal,
            Axis::Vertical => Plane::Vertical,
        }
    }
}


/// Identity of a node: a grid position on one plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub position: Vector2d,
    pub plane: Plane,
}

impl NodeKey {
    pub const fn new(position: Vector2d, plane: Plane) -> Self {
        Self { position, plane }
    }

    pub fn is_synthetic(&self) -> bool {
        self.plane == Plane::Both
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plane = match self.plane {
            Plane::Horizontal => 'H',
            Plane::Vertical => 'V',
            Plane::Both => 'B',
        };
        write!(f, "({}, {})/{}", self.position.x, self.position.y, plane)
    }
}


/// Handle to a node in a [`Graph`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}


/// Directed, weighted edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    pub weight: C,
    pub target: NodeId,
}


/// Graph node
/// Distance, predecessor and the finalized flag are written only by the relaxation engine
#[derive(Clone, Debug)]
pub struct Node<C> {
    pub(crate) cost: C,
    pub(crate) distance: C,
    pub(crate) previous: Option<NodeId>,
    pub(crate) finalized: bool,
    pub(crate) edges: Vec<Edge<C>>,
}

impl<C: Cost> Node<C> {
    fn new(cost: C) -> Self {
        Self {
            cost,
            distance: C::max_value(), // unreached
            previous: None,
            finalized: false,
            edges: Vec::new(),
        }
    }

    /// Entry cost of the node's cell
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Best known distance from the source, `C::max_value()` while unreached
    pub fn distance(&self) -> C {
        self.distance
    }

    pub fn is_reached(&self) -> bool {
        self.distance != C::max_value()
    }

    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn edges(&self) -> &[Edge<C>] {
        &self.edges
    }
}


/// Arena of nodes keyed by (position, plane)
/// A node's insertion index is its [`NodeId`]
#[derive(Clone, Debug)]
pub struct Graph<C> {
    nodes: FxIndexMap<NodeKey, Node<C>>,
}

impl<C: Cost> Default for Graph<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> Graph<C> {

    pub fn new() -> Self {
        Self { nodes: FxIndexMap::default() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: FxIndexMap::with_capacity_and_hasher(capacity, Default::default()) }
    }

    /// Add a node, or return the existing one for the same key
    pub fn add_node(&mut self, key: NodeKey, cost: C) -> NodeId {
        let entry = self.nodes.entry(key);
        let id = NodeId(entry.index());
        entry.or_insert_with(|| Node::new(cost));
        id
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: C) {
        self.nodes[from.0].edges.push(Edge { weight, target: to });
    }

    pub fn id_of(&self, key: &NodeKey) -> Option<NodeId> {
        self.nodes.get_index_of(key).map(NodeId)
    }

    /// Panics if `id` was not issued by this graph
    pub fn node(&self, id: NodeId) -> &Node<C> {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<C> {
        &mut self.nodes[id.0]
    }

    pub fn key(&self, id: NodeId) -> NodeKey {
        match self.nodes.get_index(id.0) {
            Some((key, _)) => *key,
            None => panic!("node {} does not belong to this graph", id.0),
        }
    }

    /// Weight of the edge from `from` to `to`, if one exists
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<C> {
        self.node(from)
            .edges
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + use<C> {
        (0..self.nodes.len()).map(NodeId)
    }
}
