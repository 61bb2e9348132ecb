//! Elimination of algebraic nodes and state-space assembly.
//!
//! The nodal balance of the circuit reads C·dθ/dt = K·θ + Kb·b + f with
//! K = −AᵀGA and Kb = AᵀG. Partitioning θ by zero/nonzero capacity and
//! solving the zero-capacity rows for their temperatures turns the balance
//! into the state equation on the capacitive nodes alone.

use nalgebra::{DMatrix, DVector};
use tn_circuit::{NodePartition, NodeRole, ThermalCircuit};
use tracing::debug;

use crate::error::{SolverError, SolverResult};
use crate::statespace::StateSpace;

/// Blocks of the partitioned nodal balance, with the algebraic block
/// already inverted. Row/column order inside each block follows ascending
/// node order, matching `NodePartition`.
struct Reduction {
    k11_inv: DMatrix<f64>,
    k12: DMatrix<f64>,
    k21: DMatrix<f64>,
    k22: DMatrix<f64>,
    kb1: DMatrix<f64>,
    kb2: DMatrix<f64>,
}

impl Reduction {
    /// Partition K and Kb and invert the algebraic-algebraic block.
    fn eliminate(circuit: &ThermalCircuit, partition: &NodePartition) -> SolverResult<Self> {
        let a = circuit.incidence();
        let g = DMatrix::from_diagonal(circuit.conductances());

        let kb = a.transpose() * g;
        let k = -(&kb * a);

        let alg = partition.algebraic_nodes();
        let state = partition.state_nodes();

        let k11 = k.select_rows(alg).select_columns(alg);
        let k11_inv = if alg.is_empty() {
            DMatrix::zeros(0, 0)
        } else {
            k11.try_inverse().ok_or(SolverError::SingularReduction {
                what: "algebraic-node conductance block",
            })?
        };

        Ok(Self {
            k11_inv,
            k12: k.select_rows(alg).select_columns(state),
            k21: k.select_rows(state).select_columns(alg),
            k22: k.select_rows(state).select_columns(state),
            kb1: kb.select_rows(alg),
            kb2: kb.select_rows(state),
        })
    }
}

/// Convert a thermal circuit to its state-space representation.
///
/// Fails with `SingularReduction` when the steady balance at the
/// zero-capacity nodes cannot be solved (unconnected or redundant
/// algebraic nodes). A circuit without capacitive nodes is accepted and
/// produces a zero-dimensional state.
pub fn circuit_to_state_space(circuit: &ThermalCircuit) -> SolverResult<StateSpace> {
    let partition = circuit.partition();
    let layout = circuit.input_layout();
    let reduction = Reduction::eliminate(circuit, &partition)?;

    debug!(
        nodes = circuit.node_count(),
        branches = circuit.branch_count(),
        states = partition.state_count(),
        inputs = layout.len(),
        outputs = circuit.output_nodes().len(),
        "reduced circuit to state space"
    );

    let ns = partition.state_count();
    let nu = layout.len();
    let nb = layout.temperature_branches().len();
    let nq = circuit.branch_count();

    let cc_inv = DMatrix::from_diagonal(&DVector::from_iterator(
        ns,
        partition
            .state_nodes()
            .iter()
            .map(|&i| 1.0 / circuit.capacities()[i]),
    ));

    let k21_k11_inv = &reduction.k21 * &reduction.k11_inv;

    // State equation: CC·dθs/dt = (K22 − K21·K11⁻¹·K12)·θs + source terms
    let a_s = &cc_inv * (&reduction.k22 - &k21_k11_inv * &reduction.k12);

    // Source folding before the capacity scaling: branch sources act through
    // Kb2 − K21·K11⁻¹·Kb1, node sources directly (state nodes) or through the
    // eliminated balance (algebraic nodes).
    let mb = &reduction.kb2 - &k21_k11_inv * &reduction.kb1;
    let mut b_raw = DMatrix::zeros(ns, nu);
    for (col, &j) in layout.temperature_branches().iter().enumerate() {
        debug_assert!(j < nq);
        b_raw.set_column(col, &mb.column(j));
    }
    for (pos, &node) in layout.flow_nodes().iter().enumerate() {
        let col = nb + pos;
        match partition.role(node) {
            NodeRole::State(p) => b_raw[(p, col)] = 1.0,
            NodeRole::Algebraic(q) => b_raw.set_column(col, &(-k21_k11_inv.column(q))),
        }
    }
    let b_s = &cc_inv * b_raw;

    // Output rows: a state node reports its own state; an algebraic node
    // reports the eliminated expression θa = −K11⁻¹(K12·θs + Kb1·b + f_a).
    let output_nodes = circuit.output_nodes();
    let ny = output_nodes.len();
    let alg_states = -(&reduction.k11_inv) * &reduction.k12;
    let alg_branches = -(&reduction.k11_inv) * &reduction.kb1;

    let mut c_s = DMatrix::zeros(ny, ns);
    let mut d_s = DMatrix::zeros(ny, nu);
    for (row, &node) in output_nodes.iter().enumerate() {
        match partition.role(node) {
            NodeRole::State(p) => c_s[(row, p)] = 1.0,
            NodeRole::Algebraic(q) => {
                c_s.row_mut(row).copy_from(&alg_states.row(q));
                for (col, &j) in layout.temperature_branches().iter().enumerate() {
                    d_s[(row, col)] = alg_branches[(q, j)];
                }
                for (pos, &fnode) in layout.flow_nodes().iter().enumerate() {
                    if let NodeRole::Algebraic(r) = partition.role(fnode) {
                        d_s[(row, nb + pos)] = -reduction.k11_inv[(q, r)];
                    }
                }
            }
        }
    }

    Ok(StateSpace {
        a: a_s,
        b: b_s,
        c: c_s,
        d: d_s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;
    use tn_circuit::CircuitBuilder;

    /// Single capacitive node behind a single conductance to a fixed
    /// temperature source: As must be exactly −G/C.
    #[test]
    fn scalar_rc_state_matrix() {
        let g = 28.0;
        let c = 1.2e5;

        let mut builder = CircuitBuilder::new();
        let air = builder.add_node("Air", c);
        let wall = builder.add_boundary_branch("Wall", g, air);
        builder.temperature_source(wall);
        builder.select_output(air);
        let circuit = builder.build().unwrap();

        let ss = circuit_to_state_space(&circuit).unwrap();
        assert_eq!(ss.state_count(), 1);
        assert_eq!(ss.input_count(), 1);
        assert_relative_eq!(ss.a[(0, 0)], -g / c);
        assert_relative_eq!(ss.b[(0, 0)], g / c);
        assert_relative_eq!(ss.c[(0, 0)], 1.0);
        assert_relative_eq!(ss.d[(0, 0)], 0.0);

        // Steady gain from source temperature to node temperature is unity.
        let y = ss.steady_output(&dvector![1.0]).unwrap();
        assert_relative_eq!(y[0], 1.0, max_relative = 1e-12);
    }

    /// An algebraic node between the source and the capacitive node is
    /// eliminated: the two conductances combine in series.
    #[test]
    fn series_algebraic_node_is_eliminated() {
        let g1 = 10.0;
        let g2 = 40.0;
        let c = 5.0e4;
        let series = 1.0 / (1.0 / g1 + 1.0 / g2);

        let mut builder = CircuitBuilder::new();
        let surface = builder.add_node("Surface", 0.0);
        let air = builder.add_node("Air", c);
        let outdoor = builder.add_boundary_branch("Outdoor film", g1, surface);
        builder.add_branch("Indoor film", g2, surface, air);
        builder.temperature_source(outdoor);
        builder.select_output(air);
        builder.select_output(surface);
        let circuit = builder.build().unwrap();

        let ss = circuit_to_state_space(&circuit).unwrap();
        assert_eq!(ss.state_count(), 1);
        assert_eq!(ss.output_count(), 2);
        assert_relative_eq!(ss.a[(0, 0)], -series / c, max_relative = 1e-12);
        assert_relative_eq!(ss.b[(0, 0)], series / c, max_relative = 1e-12);

        // Output rows follow ascending node order, so the eliminated
        // surface node is row 0. Its temperature is a weighted mean of the
        // source and the air node: θ_surf = (g1·To + g2·θ_air)/(g1+g2).
        assert_eq!(circuit.output_nodes(), vec![0, 1]);
        assert_relative_eq!(ss.c[(0, 0)], g2 / (g1 + g2), max_relative = 1e-12);
        assert_relative_eq!(ss.d[(0, 0)], g1 / (g1 + g2), max_relative = 1e-12);
        assert_relative_eq!(ss.c[(1, 0)], 1.0);
    }

    /// A circuit with no capacitive node reduces to a purely algebraic
    /// system: empty state, outputs through the feedthrough alone.
    #[test]
    fn all_algebraic_circuit_has_empty_state() {
        let mut builder = CircuitBuilder::new();
        let node = builder.add_node("Wall", 0.0);
        let supply = builder.add_boundary_branch("Supply", 28.0, node);
        let control = builder.add_boundary_branch("Control", 1.0e4, node);
        builder.temperature_source(supply);
        builder.temperature_source(control);
        builder.select_output(node);
        let circuit = builder.build().unwrap();

        let ss = circuit_to_state_space(&circuit).unwrap();
        assert_eq!(ss.state_count(), 0);
        assert_eq!(ss.input_count(), 2);
        assert_eq!(ss.output_count(), 1);

        // Feedthrough is the conductance-weighted mean of the two sources.
        let y = ss.steady_output(&dvector![0.0, 1.0]).unwrap();
        assert_relative_eq!(y[0], 1.0e4 / (28.0 + 1.0e4), max_relative = 1e-12);
    }

    /// Two algebraic nodes joined only to each other cannot be eliminated.
    #[test]
    fn floating_algebraic_nodes_fail_reduction() {
        let mut builder = CircuitBuilder::new();
        let n0 = builder.add_node("Floating A", 0.0);
        let n1 = builder.add_node("Floating B", 0.0);
        let air = builder.add_node("Air", 1.0e4);
        builder.add_branch("Between", 3.0, n0, n1);
        let supply = builder.add_boundary_branch("Supply", 28.0, air);
        builder.temperature_source(supply);
        builder.select_output(air);
        let circuit = builder.build().unwrap();

        let err = circuit_to_state_space(&circuit).unwrap_err();
        assert!(matches!(err, SolverError::SingularReduction { .. }));
    }

    /// Flow sources at state and algebraic nodes both reach the state
    /// equation, the latter through the eliminated balance.
    #[test]
    fn flow_sources_fold_through_elimination() {
        let g1 = 10.0;
        let g2 = 40.0;
        let c = 2.0e4;

        let mut builder = CircuitBuilder::new();
        let surface = builder.add_node("Surface", 0.0);
        let air = builder.add_node("Air", c);
        let outdoor = builder.add_boundary_branch("Outdoor film", g1, surface);
        builder.add_branch("Indoor film", g2, surface, air);
        builder.temperature_source(outdoor);
        builder.flow_source(surface);
        builder.flow_source(air);
        builder.select_output(air);
        let circuit = builder.build().unwrap();

        let ss = circuit_to_state_space(&circuit).unwrap();
        assert_eq!(ss.input_count(), 3);

        // Direct injection at the air node: 1/C.
        assert_relative_eq!(ss.b[(0, 2)], 1.0 / c, max_relative = 1e-12);
        // Injection at the surface reaches the air node scaled by the
        // divider g2/(g1+g2).
        assert_relative_eq!(ss.b[(0, 1)], g2 / (g1 + g2) / c, max_relative = 1e-12);
    }
}
