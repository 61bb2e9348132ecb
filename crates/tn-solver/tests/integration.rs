//! Integration tests for tn-solver: the reduced state-space system must
//! reproduce the steady state of the full algebraic circuit.

use approx::assert_relative_eq;
use nalgebra::dvector;
use tn_circuit::{CircuitBuilder, ThermalCircuit};
use tn_solver::{circuit_to_state_space, solve_steady_inputs};

/// A wall section with two capacitive layers, two algebraic surface nodes,
/// ventilation, and flow sources at both an algebraic and a state node.
fn wall_section() -> ThermalCircuit {
    let mut builder = CircuitBuilder::new();
    let outer_surface = builder.add_node("Outer surface", 0.0);
    let mass = builder.add_node("Wall mass", 1.8e7);
    let inner_surface = builder.add_node("Inner surface", 0.0);
    let air = builder.add_node("Indoor air", 9.7e4);

    let outdoor_film = builder.add_boundary_branch("Outdoor film", 250.0, outer_surface);
    builder.add_branch("Outer conduction", 630.0, outer_surface, mass);
    builder.add_branch("Inner conduction", 630.0, mass, inner_surface);
    builder.add_branch("Indoor film", 180.0, inner_surface, air);
    let ventilation = builder.add_boundary_branch("Ventilation", 36.0, air);

    builder.temperature_source(outdoor_film);
    builder.temperature_source(ventilation);
    builder.flow_source(outer_surface);
    builder.flow_source(air);

    builder.select_output(inner_surface);
    builder.select_output(air);

    builder.build().unwrap()
}

#[test]
fn steady_state_matches_state_space() {
    let circuit = wall_section();
    let ss = circuit_to_state_space(&circuit).unwrap();

    assert_eq!(ss.state_count(), 2);
    assert_eq!(ss.input_count(), 4);
    assert_eq!(ss.output_count(), 2);

    // u = [To (outdoor film), To (ventilation), Φ outer surface, Q indoor]
    let u = dvector![2.5, -1.0, 150.0, 30.0];

    let direct = solve_steady_inputs(&circuit, &u).unwrap();
    let y_direct = direct.outputs(&circuit);
    let y_ss = ss.steady_output(&u).unwrap();

    assert_eq!(y_direct.len(), y_ss.len());
    for i in 0..y_direct.len() {
        assert_relative_eq!(y_ss[i], y_direct[i], max_relative = 1e-6);
    }
}

#[test]
fn state_matrix_has_decaying_spectrum() {
    let circuit = wall_section();
    let ss = circuit_to_state_space(&circuit).unwrap();

    for lambda in ss.a.complex_eigenvalues().iter() {
        assert!(lambda.re < 0.0, "eigenvalue {lambda} does not decay");
    }
}

#[test]
fn steady_output_rejects_wrong_input_length() {
    let circuit = wall_section();
    let ss = circuit_to_state_space(&circuit).unwrap();
    assert!(ss.steady_output(&dvector![1.0, 2.0]).is_err());
}

#[test]
fn conversion_is_deterministic() {
    let circuit = wall_section();
    let first = circuit_to_state_space(&circuit).unwrap();
    let second = circuit_to_state_space(&circuit).unwrap();
    assert_eq!(first.a, second.a);
    assert_eq!(first.b, second.b);
    assert_eq!(first.c, second.c);
    assert_eq!(first.d, second.d);
}
