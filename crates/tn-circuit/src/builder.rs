//! Incremental circuit builder.

use nalgebra::{DMatrix, DVector};
use tn_core::{BranchId, NodeId};

use crate::circuit::{Branch, Node, ThermalCircuit};
use crate::error::CircuitResult;
use crate::validate;

/// Builder for constructing a thermal circuit incrementally.
///
/// Use `add_node` and the branch methods to lay out the network, mark
/// sources and outputs, then call `build()` to validate and freeze it into
/// an immutable `ThermalCircuit`.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    nodes: Vec<Node>,
    branches: Vec<Branch>,
    temp_source_branches: Vec<BranchId>,
    flow_source_nodes: Vec<NodeId>,
    output_nodes: Vec<NodeId>,
    next_node_id: u32,
    next_branch_id: u32,
}

impl CircuitBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given lumped capacity (J/K) and return its ID.
    ///
    /// Zero capacity makes the node algebraic.
    pub fn add_node(&mut self, name: impl Into<String>, capacity: f64) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            name: name.into(),
            capacity,
        });
        id
    }

    /// Add a branch with the given conductance (W/K) between two nodes.
    ///
    /// Positive heat flow runs from `from` to `to`.
    pub fn add_branch(
        &mut self,
        name: impl Into<String>,
        conductance: f64,
        from: NodeId,
        to: NodeId,
    ) -> BranchId {
        self.push_branch(name.into(), conductance, Some(from), to)
    }

    /// Add a branch from a fixed external potential into `to`.
    ///
    /// Used for outdoor-air, ground, and setpoint connections; the branch's
    /// incidence row carries a single +1.
    pub fn add_boundary_branch(
        &mut self,
        name: impl Into<String>,
        conductance: f64,
        to: NodeId,
    ) -> BranchId {
        self.push_branch(name.into(), conductance, None, to)
    }

    fn push_branch(
        &mut self,
        name: String,
        conductance: f64,
        from: Option<NodeId>,
        to: NodeId,
    ) -> BranchId {
        let id = BranchId::from_index(self.next_branch_id);
        self.next_branch_id += 1;
        self.branches.push(Branch {
            id,
            name,
            conductance,
            from,
            to,
        });
        id
    }

    /// Declare that an external temperature source drives this branch.
    pub fn temperature_source(&mut self, branch: BranchId) {
        if !self.temp_source_branches.contains(&branch) {
            self.temp_source_branches.push(branch);
        }
    }

    /// Declare that an external heat-flow source injects at this node.
    pub fn flow_source(&mut self, node: NodeId) {
        if !self.flow_source_nodes.contains(&node) {
            self.flow_source_nodes.push(node);
        }
    }

    /// Report this node's temperature as an output.
    pub fn select_output(&mut self, node: NodeId) {
        if !self.output_nodes.contains(&node) {
            self.output_nodes.push(node);
        }
    }

    /// Rename a node (useful for post-construction adjustments).
    pub fn rename_node(&mut self, node: NodeId, new_name: impl Into<String>) {
        if let Some(n) = self.nodes.get_mut(node.index() as usize) {
            n.name = new_name.into();
        }
    }

    /// Build and validate the circuit, returning an immutable `ThermalCircuit`.
    pub fn build(self) -> CircuitResult<ThermalCircuit> {
        validate::validate_structure(&self.nodes, &self.branches)?;
        validate::validate_refs(
            self.nodes.len(),
            &self.temp_source_branches,
            &self.flow_source_nodes,
            &self.output_nodes,
            self.branches.len(),
        )?;

        let nth = self.nodes.len();
        let nq = self.branches.len();

        let mut incidence = DMatrix::zeros(nq, nth);
        let mut conductances = DVector::zeros(nq);
        for (j, branch) in self.branches.iter().enumerate() {
            incidence[(j, branch.to.index() as usize)] = 1.0;
            if let Some(from) = branch.from {
                incidence[(j, from.index() as usize)] = -1.0;
            }
            conductances[j] = branch.conductance;
        }

        let capacities = DVector::from_iterator(nth, self.nodes.iter().map(|n| n.capacity));

        let mut temp_sources = DVector::zeros(nq);
        for id in &self.temp_source_branches {
            temp_sources[id.index() as usize] = 1.0;
        }
        let mut flow_sources = DVector::zeros(nth);
        for id in &self.flow_source_nodes {
            flow_sources[id.index() as usize] = 1.0;
        }
        let mut outputs = DVector::zeros(nth);
        for id in &self.output_nodes {
            outputs[id.index() as usize] = 1.0;
        }

        Ok(ThermalCircuit {
            nodes: self.nodes,
            branches: self.branches,
            incidence,
            conductances,
            capacities,
            temp_sources,
            flow_sources,
            outputs,
        })
    }
}
