//! Core circuit data structures.

use nalgebra::{DMatrix, DVector};
use tn_core::{BranchId, NodeId};

use crate::error::{CircuitError, CircuitResult};

/// A temperature node of the circuit.
///
/// `capacity` is the lumped thermal capacity in J/K. A zero capacity marks
/// an algebraic node whose temperature is instantaneously determined by its
/// neighbors; a positive capacity makes the node a dynamic state.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub capacity: f64,
}

/// A heat-flow branch between two nodes, or between a node and a fixed
/// external potential (`from == None`).
///
/// `conductance` is in W/K and must be positive for a well-posed circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub id: BranchId,
    pub name: String,
    pub conductance: f64,
    pub from: Option<NodeId>,
    pub to: NodeId,
}

/// A validated, immutable thermal circuit.
///
/// Stores the branch/node lists together with the dense matrices the solver
/// consumes: incidence matrix (branches x nodes), diagonal conductances,
/// diagonal capacities, and the source/output marker vectors. Nonzero
/// entries of the marker vectors declare which branches carry external
/// temperature sources, which nodes carry external flow sources, and which
/// node temperatures are reported; source magnitudes always arrive through
/// the input trajectory, never through the markers.
#[derive(Debug, Clone)]
pub struct ThermalCircuit {
    pub(crate) nodes: Vec<Node>,
    pub(crate) branches: Vec<Branch>,
    pub(crate) incidence: DMatrix<f64>,
    pub(crate) conductances: DVector<f64>,
    pub(crate) capacities: DVector<f64>,
    pub(crate) temp_sources: DVector<f64>,
    pub(crate) flow_sources: DVector<f64>,
    pub(crate) outputs: DVector<f64>,
}

impl ThermalCircuit {
    /// Assemble a circuit directly from matrices and marker vectors.
    ///
    /// `a` is the incidence matrix with one row per branch (+1 at the
    /// branch's "to" node, −1 at "from"), `g` the per-branch conductances,
    /// `c` the per-node capacities, `b`/`f` the branch/node source markers
    /// and `y` the output selector. Shapes are validated; conductance
    /// positivity is the caller's contract on this path.
    pub fn from_parts(
        a: DMatrix<f64>,
        g: DVector<f64>,
        b: DVector<f64>,
        c: DVector<f64>,
        f: DVector<f64>,
        y: DVector<f64>,
    ) -> CircuitResult<Self> {
        let nq = a.nrows();
        let nth = a.ncols();
        check_len("conductance vector", nq, g.len())?;
        check_len("branch source marker", nq, b.len())?;
        check_len("capacity vector", nth, c.len())?;
        check_len("node source marker", nth, f.len())?;
        check_len("output selector", nth, y.len())?;

        let nodes = (0..nth)
            .map(|i| Node {
                id: NodeId::from_index(i as u32),
                name: format!("node{i}"),
                capacity: c[i],
            })
            .collect();
        let branches = (0..nq)
            .map(|j| {
                let mut from = None;
                let mut to = NodeId::from_index(0);
                for i in 0..nth {
                    if a[(j, i)] > 0.0 {
                        to = NodeId::from_index(i as u32);
                    } else if a[(j, i)] < 0.0 {
                        from = Some(NodeId::from_index(i as u32));
                    }
                }
                Branch {
                    id: BranchId::from_index(j as u32),
                    name: format!("branch{j}"),
                    conductance: g[j],
                    from,
                    to,
                }
            })
            .collect();

        Ok(Self {
            nodes,
            branches,
            incidence: a,
            conductances: g,
            capacities: c,
            temp_sources: b,
            flow_sources: f,
            outputs: y,
        })
    }

    /// Number of temperature nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of heat-flow branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all branches.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get a branch by ID (returns None if ID out of bounds).
    pub fn branch(&self, id: BranchId) -> Option<&Branch> {
        self.branches.get(id.index() as usize)
    }

    /// Incidence matrix, branches x nodes.
    pub fn incidence(&self) -> &DMatrix<f64> {
        &self.incidence
    }

    /// Per-branch conductances (diagonal of G), W/K.
    pub fn conductances(&self) -> &DVector<f64> {
        &self.conductances
    }

    /// Per-node capacities (diagonal of C), J/K.
    pub fn capacities(&self) -> &DVector<f64> {
        &self.capacities
    }

    /// Branch temperature-source markers (b).
    pub fn temperature_sources(&self) -> &DVector<f64> {
        &self.temp_sources
    }

    /// Node flow-source markers (f).
    pub fn flow_sources(&self) -> &DVector<f64> {
        &self.flow_sources
    }

    /// Output selector (y); nonzero entries mark reported node temperatures.
    pub fn output_selector(&self) -> &DVector<f64> {
        &self.outputs
    }

    /// Node indices whose temperatures are reported, in node order.
    pub fn output_nodes(&self) -> Vec<usize> {
        (0..self.outputs.len())
            .filter(|&i| self.outputs[i] != 0.0)
            .collect()
    }
}

pub(crate) fn check_len(
    what: &'static str,
    expected: usize,
    actual: usize,
) -> CircuitResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(CircuitError::DimensionMismatch {
            what,
            expected,
            actual,
        })
    }
}
