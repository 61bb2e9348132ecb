//! Node partition and input ordering for solver integration.
//!
//! Splits the node set into state nodes (capacity > 0) and algebraic nodes
//! (capacity == 0), with bidirectional lookup between node indices and
//! positions inside each group, and fixes the deterministic ordering of
//! external inputs: branch temperature sources first in branch order, then
//! node flow sources in node order.

use nalgebra::DVector;

use crate::circuit::ThermalCircuit;

/// Which group a node landed in, and its position inside that group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// Dynamic node; position is the index into the state vector.
    State(usize),
    /// Zero-capacity node; position is the index into the eliminated block.
    Algebraic(usize),
}

/// Deterministic split of node indices by zero/nonzero capacity.
#[derive(Debug, Clone)]
pub struct NodePartition {
    state: Vec<usize>,
    algebraic: Vec<usize>,
    roles: Vec<NodeRole>,
}

impl NodePartition {
    /// Partition nodes by their capacities; exact zero marks algebraic.
    pub fn from_capacities(capacities: &DVector<f64>) -> Self {
        let mut state = Vec::new();
        let mut algebraic = Vec::new();
        let mut roles = Vec::with_capacity(capacities.len());
        for i in 0..capacities.len() {
            if capacities[i] != 0.0 {
                roles.push(NodeRole::State(state.len()));
                state.push(i);
            } else {
                roles.push(NodeRole::Algebraic(algebraic.len()));
                algebraic.push(i);
            }
        }
        Self {
            state,
            algebraic,
            roles,
        }
    }

    /// State-node indices in ascending node order.
    pub fn state_nodes(&self) -> &[usize] {
        &self.state
    }

    /// Algebraic-node indices in ascending node order.
    pub fn algebraic_nodes(&self) -> &[usize] {
        &self.algebraic
    }

    /// Number of state nodes.
    pub fn state_count(&self) -> usize {
        self.state.len()
    }

    /// Number of algebraic nodes.
    pub fn algebraic_count(&self) -> usize {
        self.algebraic.len()
    }

    /// Role of a node index.
    pub fn role(&self, node: usize) -> NodeRole {
        self.roles[node]
    }
}

/// Fixed ordering of the external inputs u.
///
/// Inputs are the active sources only: branches whose temperature-source
/// marker is nonzero, in branch order, followed by nodes whose flow-source
/// marker is nonzero, in node order.
#[derive(Debug, Clone)]
pub struct InputLayout {
    temperature_branches: Vec<usize>,
    flow_nodes: Vec<usize>,
}

impl InputLayout {
    /// Derive the layout from the marker vectors.
    pub fn from_markers(b: &DVector<f64>, f: &DVector<f64>) -> Self {
        Self {
            temperature_branches: (0..b.len()).filter(|&j| b[j] != 0.0).collect(),
            flow_nodes: (0..f.len()).filter(|&i| f[i] != 0.0).collect(),
        }
    }

    /// Branch indices of the temperature-source inputs.
    pub fn temperature_branches(&self) -> &[usize] {
        &self.temperature_branches
    }

    /// Node indices of the flow-source inputs.
    pub fn flow_nodes(&self) -> &[usize] {
        &self.flow_nodes
    }

    /// Total number of inputs.
    pub fn len(&self) -> usize {
        self.temperature_branches.len() + self.flow_nodes.len()
    }

    /// True when the circuit has no external inputs at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of a temperature-source branch inside u, if it is an input.
    pub fn temperature_input(&self, branch: usize) -> Option<usize> {
        self.temperature_branches.iter().position(|&j| j == branch)
    }

    /// Position of a flow-source node inside u, if it is an input.
    pub fn flow_input(&self, node: usize) -> Option<usize> {
        self.flow_nodes
            .iter()
            .position(|&i| i == node)
            .map(|p| p + self.temperature_branches.len())
    }
}

impl ThermalCircuit {
    /// Partition this circuit's nodes by zero/nonzero capacity.
    pub fn partition(&self) -> NodePartition {
        NodePartition::from_capacities(&self.capacities)
    }

    /// The fixed input ordering of this circuit's active sources.
    pub fn input_layout(&self) -> InputLayout {
        InputLayout::from_markers(&self.temp_sources, &self.flow_sources)
    }
}
