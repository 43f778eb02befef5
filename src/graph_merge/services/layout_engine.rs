use crate::graph_merge::domain::{ComponentId, DependencyGraph, Viewport};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;

/// Placement of one node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub level: usize,
}

/// Computed positions for every node of a graph, in breadth-first order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphLayout {
    positions: IndexMap<ComponentId, NodePosition>,
    max_level: usize,
}

impl GraphLayout {
    pub fn position_of(&self, id: &str) -> Option<NodePosition> {
        self.positions.get(id).copied()
    }

    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.positions.get(id).map(|p| p.level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, &NodePosition)> {
        self.positions.iter()
    }

    /// Nodes on `level`, left to right
    pub fn nodes_at_level(&self, level: usize) -> Vec<&ComponentId> {
        self.positions
            .iter()
            .filter(|(_, p)| p.level == level)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// LayoutEngine service: level assignment plus a per-level grid
///
/// Levels come from a multi-source breadth-first search starting at every
/// root at once; the first arrival fixes a node's level. Nodes no root can
/// reach (only possible through cycles) are put on level 0. Same graph and
/// viewport always give the same coordinates.
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn compute(graph: &DependencyGraph, viewport: &Viewport) -> GraphLayout {
        let levels = Self::assign_levels(graph);
        Self::assign_coordinates(levels, viewport)
    }

    /// Depth of every node, in the order nodes were reached
    pub fn assign_levels(graph: &DependencyGraph) -> IndexMap<ComponentId, usize> {
        let mut levels: IndexMap<ComponentId, usize> = IndexMap::new();
        let mut queue: VecDeque<(&ComponentId, usize)> = VecDeque::new();

        for root in graph.roots() {
            levels.insert(root.clone(), 0);
            queue.push_back((root, 0));
        }

        while let Some((node, level)) = queue.pop_front() {
            for dependency in graph.dependencies_of(node.as_str()).unwrap_or_default() {
                if !levels.contains_key(dependency) {
                    levels.insert(dependency.clone(), level + 1);
                    queue.push_back((dependency, level + 1));
                }
            }
        }

        for node in graph.nodes() {
            if !levels.contains_key(node) {
                tracing::debug!(node = %node, "node unreachable from any root, placed on level 0");
                levels.insert(node.clone(), 0);
            }
        }

        levels
    }

    fn assign_coordinates(
        levels: IndexMap<ComponentId, usize>,
        viewport: &Viewport,
    ) -> GraphLayout {
        let max_level = levels.values().copied().max().unwrap_or(0);
        let row_height = viewport.usable_height() / (max_level + 1) as f64;

        let mut level_sizes = vec![0usize; max_level + 1];
        for level in levels.values() {
            level_sizes[*level] += 1;
        }

        let mut placed = vec![0usize; max_level + 1];
        let positions = levels
            .into_iter()
            .map(|(id, level)| {
                placed[level] += 1;
                let spacing = viewport.usable_width() / (level_sizes[level] + 1) as f64;
                let position = NodePosition {
                    x: viewport.margin() + placed[level] as f64 * spacing,
                    y: viewport.margin() + level as f64 * row_height,
                    level,
                };
                (id, position)
            })
            .collect();

        GraphLayout {
            positions,
            max_level,
        }
    }
}
