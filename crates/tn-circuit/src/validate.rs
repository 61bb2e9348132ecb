//! Circuit validation logic.

use tn_core::{BranchId, NodeId};

use crate::circuit::{Branch, Node};
use crate::error::{CircuitError, CircuitResult};

/// Validate nodes and branches: endpoint references exist, conductances are
/// positive and finite, capacities non-negative and finite, no self-loops.
pub(crate) fn validate_structure(nodes: &[Node], branches: &[Branch]) -> CircuitResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        if !node.capacity.is_finite() || node.capacity < 0.0 {
            return Err(CircuitError::InvalidCapacity {
                node: i,
                value: node.capacity,
            });
        }
    }

    for (j, branch) in branches.iter().enumerate() {
        if !branch.conductance.is_finite() || branch.conductance <= 0.0 {
            return Err(CircuitError::InvalidConductance {
                branch: j,
                value: branch.conductance,
            });
        }
        if branch.to.index() as usize >= nodes.len() {
            return Err(CircuitError::UnknownId {
                what: "node",
                id: branch.to.index(),
            });
        }
        if let Some(from) = branch.from {
            if from.index() as usize >= nodes.len() {
                return Err(CircuitError::UnknownId {
                    what: "node",
                    id: from.index(),
                });
            }
            if from == branch.to {
                return Err(CircuitError::SelfLoop {
                    branch: j,
                    node: from.index() as usize,
                });
            }
        }
    }

    Ok(())
}

/// Validate that marker lists only reference issued ids.
pub(crate) fn validate_refs(
    node_count: usize,
    temp_source_branches: &[BranchId],
    flow_source_nodes: &[NodeId],
    output_nodes: &[NodeId],
    branch_count: usize,
) -> CircuitResult<()> {
    for id in temp_source_branches {
        if id.index() as usize >= branch_count {
            return Err(CircuitError::UnknownId {
                what: "branch",
                id: id.index(),
            });
        }
    }
    for id in flow_source_nodes.iter().chain(output_nodes) {
        if id.index() as usize >= node_count {
            return Err(CircuitError::UnknownId {
                what: "node",
                id: id.index(),
            });
        }
    }
    Ok(())
}
