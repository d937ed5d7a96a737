//! Pure geometric placement of transmission-tree nodes.
//!
//! Layouts are derived data: recomputed whenever the tree or mode changes and
//! never authoritative. Each generation is placed independently, in node
//! creation order, so output is deterministic for a given tree and
//! parameters.

use std::collections::HashMap;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::model::{NodeId, TransmissionTree};

/// A 2D coordinate assigned to a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Place each generation on a horizontal band.
///
/// Generation g sits at `y = -g * vertical_spacing`; its nodes are evenly
/// spaced across `[-horizontal_spacing, +horizontal_spacing]` in creation
/// order. A generation with a single node sits at x = 0.
pub fn layout_hierarchical(
    tree: &TransmissionTree,
    horizontal_spacing: f64,
    vertical_spacing: f64,
) -> HashMap<NodeId, Position> {
    let mut positions = HashMap::with_capacity(tree.len());
    for g in 0..=tree.max_generation() {
        let ids: Vec<NodeId> = tree.generation(g).map(|n| n.id).collect();
        let y = -(g as f64) * vertical_spacing;
        let count = ids.len();
        for (slot, id) in ids.into_iter().enumerate() {
            let x = if count <= 1 {
                0.0
            } else {
                -horizontal_spacing
                    + 2.0 * horizontal_spacing * slot as f64 / (count - 1) as f64
            };
            positions.insert(id, Position { x, y });
        }
    }
    positions
}

/// Place each generation on a ring around the root.
///
/// Generation g sits on a circle of radius `g * radial_scale`; its nodes are
/// evenly spaced in angle in creation order. The root sits at the origin.
pub fn layout_radial(tree: &TransmissionTree, radial_scale: f64) -> HashMap<NodeId, Position> {
    let mut positions = HashMap::with_capacity(tree.len());
    for g in 0..=tree.max_generation() {
        let ids: Vec<NodeId> = tree.generation(g).map(|n| n.id).collect();
        let radius = g as f64 * radial_scale;
        let count = ids.len();
        for (slot, id) in ids.into_iter().enumerate() {
            let angle = TAU * slot as f64 / count as f64;
            positions.insert(
                id,
                Position {
                    x: radius * angle.cos(),
                    y: radius * angle.sin(),
                },
            );
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate_seeded, TreeConfig};

    fn deterministic_tree(re: f64, generations: u32) -> TransmissionTree {
        let config = TreeConfig::new(re, generations, 0.0, 0.0, 10_000);
        generate_seeded(&config, 0).unwrap()
    }

    #[test]
    fn test_hierarchical_bands_share_y_and_span_x() {
        let tree = deterministic_tree(3.0, 3);
        let layout = layout_hierarchical(&tree, 50.0, 12.0);
        assert_eq!(layout.len(), tree.len());

        for g in 0..=tree.max_generation() {
            let ids: Vec<_> = tree.generation(g).map(|n| n.id).collect();
            let expected_y = -(g as f64) * 12.0;
            for id in &ids {
                assert_eq!(layout[id].y, expected_y);
            }
            if ids.len() > 1 {
                // Creation order runs left to right across the full band.
                assert_eq!(layout[ids.first().unwrap()].x, -50.0);
                assert_eq!(layout[ids.last().unwrap()].x, 50.0);
                let mut xs: Vec<f64> = ids.iter().map(|id| layout[id].x).collect();
                let len_before = xs.len();
                xs.dedup();
                assert_eq!(xs.len(), len_before, "duplicate x in generation {}", g);
            }
        }
    }

    #[test]
    fn test_hierarchical_single_node_generations_centered() {
        let tree = deterministic_tree(1.0, 4);
        let layout = layout_hierarchical(&tree, 40.0, 10.0);
        for node in tree.nodes() {
            assert_eq!(layout[&node.id].x, 0.0);
            assert_eq!(layout[&node.id].y, -(node.generation as f64) * 10.0);
        }
    }

    #[test]
    fn test_radial_rings_have_correct_radius() {
        let tree = deterministic_tree(2.0, 3);
        let layout = layout_radial(&tree, 25.0);

        let root = layout[&tree.root().id];
        assert_eq!((root.x, root.y), (0.0, 0.0));

        for node in tree.nodes() {
            let pos = layout[&node.id];
            let radius = (pos.x * pos.x + pos.y * pos.y).sqrt();
            let expected = node.generation as f64 * 25.0;
            assert!((radius - expected).abs() < 1e-9);
            assert!(pos.x.is_finite() && pos.y.is_finite());
        }
    }

    #[test]
    fn test_radial_nodes_on_a_ring_are_distinct() {
        let tree = deterministic_tree(4.0, 2);
        let layout = layout_radial(&tree, 30.0);
        let ids: Vec<_> = tree.generation(2).map(|n| n.id).collect();
        assert!(ids.len() > 2);
        for pair in ids.windows(2) {
            let a = layout[&pair[0]];
            let b = layout[&pair[1]];
            assert!((a.x - b.x).abs() > 1e-9 || (a.y - b.y).abs() > 1e-9);
        }
    }

    #[test]
    fn test_layouts_are_deterministic() {
        let tree = deterministic_tree(2.0, 4);
        assert_eq!(
            layout_hierarchical(&tree, 50.0, 12.0),
            layout_hierarchical(&tree, 50.0, 12.0)
        );
        assert_eq!(layout_radial(&tree, 20.0), layout_radial(&tree, 20.0));
    }
}
