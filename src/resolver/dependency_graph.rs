//! Dependency graph over a project's dependency tree.
//!
//! Dependency trees share transitive dependencies, so in general they form a DAG (and
//! referenced leaves may even close cycles). The graph keeps exactly one node per dependency
//! id and answers ordered traversal questions with a visited-set, so no dependency is
//! reported twice.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::project::DependencyNode;

/// Deduplicated view of a dependency tree.
///
/// Nodes borrow from the tree they were built from. When an id occurs several times, the
/// first occurrence in depth-first declaration order provides the node data; that is the
/// occurrence providers expand fully.
pub struct DependencyGraph<'a> {
    /// The underlying directed graph; an edge `a -> b` means `a` depends on `b`.
    graph: DiGraph<&'a DependencyNode, ()>,
    /// Map from dependency ids to their graph indices.
    node_map: HashMap<&'a str, NodeIndex>,
    root: NodeIndex,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph from a tree rooted at the project.
    pub fn from_tree(tree: &'a DependencyNode) -> Self {
        let mut graph = DiGraph::new();
        let mut node_map = HashMap::new();
        let root = graph.add_node(tree);
        node_map.insert(tree.id.as_str(), root);

        let mut this = Self {
            graph,
            node_map,
            root,
        };

        // Depth-first in declaration order: children are pushed in reverse.
        let mut stack: Vec<(NodeIndex, &'a DependencyNode)> =
            tree.dependencies.iter().rev().map(|child| (root, child)).collect();

        while let Some((parent, node)) = stack.pop() {
            let (index, is_new) = this.ensure_node(node);
            this.add_edge(parent, index);

            if is_new {
                stack.extend(node.dependencies.iter().rev().map(|child| (index, child)));
            }
        }

        this
    }

    fn ensure_node(&mut self, node: &'a DependencyNode) -> (NodeIndex, bool) {
        if let Some(&index) = self.node_map.get(node.id.as_str()) {
            (index, false)
        } else {
            let index = self.graph.add_node(node);
            self.node_map.insert(node.id.as_str(), index);
            (index, true)
        }
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        // Check if edge already exists to avoid duplicates
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// Dependencies of `index` in declaration order.
    fn dependencies_of(&self, index: NodeIndex) -> Vec<NodeIndex> {
        // petgraph yields neighbors newest edge first
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        neighbors.reverse();
        neighbors
    }

    /// The project itself.
    #[must_use]
    pub fn root(&self) -> &'a DependencyNode {
        self.graph[self.root]
    }

    /// Immediate dependencies of the project, in declaration order, each id once.
    #[must_use]
    pub fn direct_dependencies(&self) -> Vec<&'a DependencyNode> {
        self.dependencies_of(self.root).into_iter().map(|index| self.graph[index]).collect()
    }

    /// Every dependency reachable from the project, breadth-first in declaration order.
    ///
    /// The project itself is not included.
    #[must_use]
    pub fn reachable_dependencies(&self) -> Vec<&'a DependencyNode> {
        let mut visited = HashSet::from([self.root]);
        let mut queue = VecDeque::from([self.root]);
        let mut reachable = Vec::new();

        while let Some(current) = queue.pop_front() {
            for neighbor in self.dependencies_of(current) {
                // Only process if we haven't seen this node before
                if visited.insert(neighbor) {
                    reachable.push(self.graph[neighbor]);
                    queue.push_back(neighbor);
                }
            }
        }

        reachable
    }

    /// Look up a dependency by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a DependencyNode> {
        self.node_map.get(id).map(|&index| self.graph[index])
    }

    /// Number of distinct projects, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
