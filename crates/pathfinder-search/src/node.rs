use std::ops::Index;

use pathfinder_core::{Action, Cost, Point};

use crate::solution::Step;

/// Index of a [`Node`] inside a [`SearchTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A search state reached through a particular action at a particular cost.
///
/// Nodes are immutable once pushed into a [`SearchTree`]. The parent link
/// always points at an earlier node, so the tree is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    state: Point,
    cost: Cost,
    parent: Option<NodeId>,
    action: Option<Action>,
    depth: u32,
}

impl Node {
    /// Grid cell of this node.
    #[inline]
    pub fn state(&self) -> Point {
        self.state
    }

    /// Accumulated cost from the start to this node.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Parent node, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Action taken from the parent, `None` for the root.
    #[inline]
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Number of steps from the root.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this is the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Short human-readable description, for debugging.
    pub fn label(&self) -> String {
        match self.action {
            Some(a) => format!("{} via {} @ {}", self.state, a, self.cost),
            None => format!("{} @ {}", self.state, self.cost),
        }
    }
}

/// Arena owning every node created during one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a root node for `state` with cost 0.
    pub fn push_root(&mut self, state: Point) -> NodeId {
        self.push(Node {
            state,
            cost: 0,
            parent: None,
            action: None,
            depth: 0,
        })
    }

    /// Push a child of `parent` reached through `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn push_child(&mut self, parent: NodeId, action: Action, state: Point, cost: Cost) -> NodeId {
        let depth = self[parent].depth + 1;
        self.push(Node {
            state,
            cost,
            parent: Some(parent),
            action: Some(action),
            depth,
        })
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// The node with the given id, if it exists.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes created.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Root-to-`id` path.
    pub fn path_to(&self, id: NodeId) -> Vec<Step> {
        let mut path: Vec<Step> = self
            .ancestors(id)
            .map(|n| Step {
                action: n.action,
                state: n.state,
                cost: n.cost,
            })
            .collect();
        path.reverse();
        path
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors. See [`SearchTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.tree.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
