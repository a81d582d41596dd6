use serde::{Deserialize, Serialize};
use tas_route_core::{SimState, StickInput};

/// Handle into an [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub state: SimState,
    pub parent: Option<NodeId>,
    pub input: Option<StickInput>,
}

/// Append-only store of every retained search state. Children point at
/// their parent by handle; nothing points forward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn with_root(root: SimState) -> Self {
        Self {
            nodes: vec![Node {
                state: root,
                parent: None,
                input: None,
            }],
        }
    }

    pub fn push_child(&mut self, parent: NodeId, input: StickInput, state: SimState) -> NodeId {
        debug_assert_eq!(state.index(), self.nodes[parent.0].state.index() + 1);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            input: Some(input),
        });
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// State behind a handle issued by this arena.
    pub fn state(&self, id: NodeId) -> &SimState {
        &self.nodes[id.0].state
    }

    pub fn root(&self) -> &SimState {
        &self.nodes[0].state
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.nodes[id.0].state.index() as usize + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.nodes[current.0].parent;
        }
        path.reverse();
        path
    }

    /// Inputs that lead from the root to `id`, first frame first.
    pub fn lineage(&self, id: NodeId) -> Vec<StickInput> {
        self.path(id)
            .into_iter()
            .filter_map(|node| self.nodes[node.0].input)
            .collect()
    }

    /// States from the root to `id` inclusive.
    pub fn trajectory(&self, id: NodeId) -> Vec<SimState> {
        self.path(id)
            .into_iter()
            .map(|node| self.nodes[node.0].state)
            .collect()
    }
}
