use std::collections::HashMap;
use std::ops::Index;

use crate::error::MatError;
use crate::mat::mutation::Mutation;

/// Index of a node in the tree arena. Stable for the lifetime of a `Tree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(pub usize);

#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    parent: Option<NodeIdx>,
    children: Vec<NodeIdx>,
    mutations: Vec<Mutation>,
    branch_length: f32,
}

impl Node {
    fn new(id: String, parent: Option<NodeIdx>) -> Self {
        Self {
            id,
            parent,
            children: Vec::new(),
            mutations: Vec::new(),
            branch_length: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn branch_length(&self) -> f32 {
        self.branch_length
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Replaces the mutation list. This is the only way to edit mutations,
    /// so the branch length always matches the list.
    pub fn set_mutations(&mut self, mutations: Vec<Mutation>) {
        self.branch_length = mutations.len() as f32;
        self.mutations = mutations;
    }
}

/// Arena-backed rooted tree. Nodes are never removed, so a `NodeIdx` stays
/// valid for as long as the tree lives.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    by_id: HashMap<String, NodeIdx>,
}

impl Tree {
    pub fn new(root_id: impl Into<String>) -> Self {
        let root_id = root_id.into();
        let mut by_id = HashMap::new();
        by_id.insert(root_id.clone(), NodeIdx(0));
        Self {
            nodes: vec![Node::new(root_id, None)],
            by_id,
        }
    }

    pub fn root(&self) -> NodeIdx {
        NodeIdx(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_child(
        &mut self,
        parent: NodeIdx,
        id: impl Into<String>,
        mutations: Vec<Mutation>,
    ) -> Result<NodeIdx, MatError> {
        if parent.0 >= self.nodes.len() {
            return Err(MatError::UnknownNode(parent.0));
        }
        let id = id.into();
        if self.by_id.contains_key(&id) {
            return Err(MatError::DuplicateNode(id));
        }

        let idx = NodeIdx(self.nodes.len());
        let mut node = Node::new(id.clone(), Some(parent));
        node.set_mutations(mutations);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(idx);
        self.by_id.insert(id, idx);
        Ok(idx)
    }

    pub fn node(&self, idx: NodeIdx) -> Option<&Node> {
        self.nodes.get(idx.0)
    }

    pub fn node_mut(&mut self, idx: NodeIdx) -> Option<&mut Node> {
        self.nodes.get_mut(idx.0)
    }

    pub fn find(&self, id: &str) -> Option<NodeIdx> {
        self.by_id.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIdx, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeIdx(i), n))
    }

    /// Total number of mutation records over all nodes.
    pub fn total_mutations(&self) -> u64 {
        self.nodes.iter().map(|n| n.mutations.len() as u64).sum()
    }

    /// Pre-order from `start`, children visited in stored order.
    pub fn preorder_from(&self, start: NodeIdx) -> Vec<NodeIdx> {
        let mut order = Vec::new();
        if start.0 >= self.nodes.len() {
            return order;
        }
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            stack.extend(self[idx].children.iter().rev().copied());
        }
        order
    }

    pub fn preorder(&self) -> Vec<NodeIdx> {
        self.preorder_from(self.root())
    }

    /// Post-order over the whole tree: every child before its parent and
    /// siblings in stored order.
    pub fn postorder(&self) -> Vec<NodeIdx> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![(self.root(), false)];
        while let Some((idx, expanded)) = stack.pop() {
            if expanded {
                order.push(idx);
                continue;
            }
            stack.push((idx, true));
            stack.extend(self[idx].children.iter().rev().map(|&c| (c, false)));
        }
        order
    }

    /// Leaves under `start` (inclusive), left to right.
    pub fn leaves_under(&self, start: NodeIdx) -> Vec<NodeIdx> {
        self.preorder_from(start)
            .into_iter()
            .filter(|&idx| self[idx].is_leaf())
            .collect()
    }

    pub fn leaves(&self) -> Vec<NodeIdx> {
        self.leaves_under(self.root())
    }

    /// Builds a tree from parent links given in pre-order, so every parent
    /// appears before its children. Used by the Newick reader.
    pub(crate) fn from_preorder(
        entries: Vec<(String, Option<usize>)>,
    ) -> Result<Self, MatError> {
        let mut entries = entries.into_iter();
        let (root_id, root_parent) = entries
            .next()
            .ok_or_else(|| MatError::newick("empty tree"))?;
        if root_parent.is_some() {
            return Err(MatError::newick("first node must be the root"));
        }

        let mut tree = Tree::new(root_id);
        for (id, parent) in entries {
            let parent = parent.ok_or_else(|| MatError::newick("more than one root"))?;
            tree.add_child(NodeIdx(parent), id, Vec::new())?;
        }
        Ok(tree)
    }
}

impl Index<NodeIdx> for Tree {
    type Output = Node;

    fn index(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.0]
    }
}
