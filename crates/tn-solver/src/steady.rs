//! Direct steady-state solution of the algebraic circuit equations.
//!
//! Independent of the state-space route: θ = (AᵀGA)⁻¹(AᵀGb + f) with the
//! branch heat flows recovered as q = G(−Aθ + b). Used on its own for
//! static load calculations and as the reference the reduced system is
//! checked against.

use nalgebra::{DMatrix, DVector};
use tn_circuit::ThermalCircuit;

use crate::error::{SolverError, SolverResult};

/// Steady-state temperatures and branch flows of a circuit.
#[derive(Debug, Clone)]
pub struct SteadyState {
    /// Node temperatures, °C (or K offsets), in node order.
    pub temperatures: DVector<f64>,
    /// Branch heat flows, W, in branch order; positive along the branch.
    pub branch_flows: DVector<f64>,
}

impl SteadyState {
    /// The temperatures of the circuit's selected output nodes.
    pub fn outputs(&self, circuit: &ThermalCircuit) -> DVector<f64> {
        let nodes = circuit.output_nodes();
        DVector::from_iterator(nodes.len(), nodes.iter().map(|&i| self.temperatures[i]))
    }
}

/// Solve the steady circuit under explicit source values.
///
/// `b` holds the temperature-source value on each branch (zero where the
/// branch carries none) and `f` the flow-source value at each node.
pub fn solve_steady(
    circuit: &ThermalCircuit,
    b: &DVector<f64>,
    f: &DVector<f64>,
) -> SolverResult<SteadyState> {
    if b.len() != circuit.branch_count() {
        return Err(SolverError::DimensionMismatch {
            what: "branch source values",
            expected: circuit.branch_count(),
            actual: b.len(),
        });
    }
    if f.len() != circuit.node_count() {
        return Err(SolverError::DimensionMismatch {
            what: "node source values",
            expected: circuit.node_count(),
            actual: f.len(),
        });
    }

    let a = circuit.incidence();
    let g = DMatrix::from_diagonal(circuit.conductances());

    let at_g = a.transpose() * g.clone();
    let k = &at_g * a;
    let k_inv = k.try_inverse().ok_or(SolverError::SingularReduction {
        what: "nodal conductance system",
    })?;

    let temperatures = k_inv * (&at_g * b + f);
    let branch_flows = g * (-(a * &temperatures) + b);

    Ok(SteadyState {
        temperatures,
        branch_flows,
    })
}

/// Solve the steady circuit under a constant input vector in the circuit's
/// fixed input order (temperature sources first, then flow sources).
pub fn solve_steady_inputs(
    circuit: &ThermalCircuit,
    u: &DVector<f64>,
) -> SolverResult<SteadyState> {
    let layout = circuit.input_layout();
    if u.len() != layout.len() {
        return Err(SolverError::DimensionMismatch {
            what: "constant input vector",
            expected: layout.len(),
            actual: u.len(),
        });
    }

    let mut b = DVector::zeros(circuit.branch_count());
    for (pos, &branch) in layout.temperature_branches().iter().enumerate() {
        b[branch] = u[pos];
    }
    let mut f = DVector::zeros(circuit.node_count());
    let offset = layout.temperature_branches().len();
    for (pos, &node) in layout.flow_nodes().iter().enumerate() {
        f[node] = u[offset + pos];
    }

    solve_steady(circuit, &b, &f)
}
