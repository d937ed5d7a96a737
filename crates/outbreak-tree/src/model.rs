//! Transmission-tree data model.
//!
//! Nodes are exclusively owned by the tree and reference each other by id
//! only; ids are creation-order indices, so per-generation iteration order is
//! insertion order. The output is plain attributed nodes and (parent, child)
//! edge pairs, directly serializable with no opaque handles.

use serde::{Deserialize, Serialize};

pub type NodeId = u32;

/// One infected individual in the transmission tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransmissionNode {
    pub id: NodeId,
    pub generation: u32,
    /// The infecting node; `None` only for the root index case.
    pub parent: Option<NodeId>,
    /// Vaccinated nodes never transmit onward (they are always leaves).
    pub vaccinated: bool,
    /// Sampled when the node is expanded; amplifies its offspring count.
    pub superspreader: bool,
}

/// A rooted, acyclic infection tree with edges only from generation g to
/// generation g + 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransmissionTree {
    nodes: Vec<TransmissionNode>,
    budget_exhausted: bool,
}

impl TransmissionTree {
    pub(crate) fn from_parts(nodes: Vec<TransmissionNode>, budget_exhausted: bool) -> Self {
        Self {
            nodes,
            budget_exhausted,
        }
    }

    /// All nodes in creation (breadth-first) order.
    pub fn nodes(&self) -> &[TransmissionNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&TransmissionNode> {
        self.nodes.get(id as usize)
    }

    /// The generation-0 index case.
    pub fn root(&self) -> &TransmissionNode {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest generation present in the tree.
    pub fn max_generation(&self) -> u32 {
        self.nodes.iter().map(|n| n.generation).max().unwrap_or(0)
    }

    /// Nodes of generation `g`, in creation order.
    pub fn generation(&self, g: u32) -> impl Iterator<Item = &TransmissionNode> {
        self.nodes.iter().filter(move |n| n.generation == g)
    }

    /// Direct descendants of `id`, in creation order.
    pub fn children_of(&self, id: NodeId) -> impl Iterator<Item = &TransmissionNode> {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// All (parent, child) pairs, in child-creation order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (p, n.id)))
    }

    /// True when generation expansion stopped because the node budget was
    /// reached. A normal termination path, not an error.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TransmissionTree {
        let nodes = vec![
            TransmissionNode {
                id: 0,
                generation: 0,
                parent: None,
                vaccinated: false,
                superspreader: true,
            },
            TransmissionNode {
                id: 1,
                generation: 1,
                parent: Some(0),
                vaccinated: false,
                superspreader: false,
            },
            TransmissionNode {
                id: 2,
                generation: 1,
                parent: Some(0),
                vaccinated: true,
                superspreader: false,
            },
            TransmissionNode {
                id: 3,
                generation: 2,
                parent: Some(1),
                vaccinated: false,
                superspreader: false,
            },
        ];
        TransmissionTree::from_parts(nodes, false)
    }

    #[test]
    fn test_accessors() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root().id, 0);
        assert_eq!(tree.max_generation(), 2);
        assert_eq!(tree.generation(1).count(), 2);
        assert_eq!(tree.children_of(0).count(), 2);
        assert!(tree.node(99).is_none());
    }

    #[test]
    fn test_edges_run_between_adjacent_generations() {
        let tree = sample_tree();
        let edges: Vec<_> = tree.edges().collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (1, 3)]);
        for (parent, child) in edges {
            let pg = tree.node(parent).unwrap().generation;
            let cg = tree.node(child).unwrap().generation;
            assert_eq!(cg, pg + 1);
        }
    }
}
