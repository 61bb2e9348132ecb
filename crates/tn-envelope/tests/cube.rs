//! End-to-end tests on the cube-room model: steady-state equivalence of
//! the circuit and its reduced system, controller-gain regimes, and a
//! synthetic-weather simulation with feedback post-processing.

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, dvector};
use tn_circuit::ThermalCircuit;
use tn_controls::Proportional;
use tn_envelope::{assemble_inputs, distribute_shortwave, CubeConfig, CubeModel};
use tn_sim::{dt_max, simulate, Scheme};
use tn_solver::{circuit_to_state_space, solve_steady_inputs};

/// Clone of the cube circuit with every node temperature reported.
fn with_all_outputs(circuit: &ThermalCircuit) -> ThermalCircuit {
    ThermalCircuit::from_parts(
        circuit.incidence().clone(),
        circuit.conductances().clone(),
        circuit.temperature_sources().clone(),
        circuit.capacities().clone(),
        circuit.flow_sources().clone(),
        DVector::from_element(circuit.node_count(), 1.0),
    )
    .unwrap()
}

#[test]
fn steady_state_of_circuit_and_state_space_agree() {
    let model = CubeModel::new(CubeConfig::default()).unwrap();
    let circuit = with_all_outputs(model.circuit());
    let ss = circuit_to_state_space(&circuit).unwrap();

    // Distinct magnitudes on every source so nothing cancels by accident.
    let u = dvector![10.0, 90.0, 110.0, 120.0, 1000.0, 5000.0, 7000.0, 8000.0];

    let direct = solve_steady_inputs(&circuit, &u).unwrap();
    let y_direct = direct.outputs(&circuit);
    let y_ss = ss.steady_output(&u).unwrap();

    assert_eq!(y_direct.len(), 8);
    for i in 0..8 {
        assert_relative_eq!(y_ss[i], y_direct[i], max_relative = 1e-6);
    }
}

#[test]
fn high_gain_pins_the_indoor_temperature() {
    let setpoint = 20.0;
    let u = dvector![0.0, 0.0, 0.0, setpoint, 0.0, 0.0, 0.0, 0.0];

    let tight = CubeModel::new(CubeConfig::default().with_controller_gain(1.0e4)).unwrap();
    let free = CubeModel::new(CubeConfig::default().with_controller_gain(1.0e-3)).unwrap();

    let y_tight = circuit_to_state_space(tight.circuit())
        .unwrap()
        .steady_output(&u)
        .unwrap();
    let y_free = circuit_to_state_space(free.circuit())
        .unwrap()
        .steady_output(&u)
        .unwrap();

    // Near-perfect control holds the air at the setpoint; the free-running
    // building settles toward the (zero) outdoor temperature.
    assert!((setpoint - y_tight[0]).abs() < 0.5, "tight: {}", y_tight[0]);
    assert!(y_free[0] < 1.0, "free: {}", y_free[0]);
    assert!((setpoint - y_tight[0]).abs() < (setpoint - y_free[0]).abs());
}

#[test]
fn step_response_schemes_agree_below_the_bound() {
    // Free-running configuration, as in a controller-less survey run.
    let model = CubeModel::new(CubeConfig::default().with_controller_gain(1.0e-3)).unwrap();
    let ss = circuit_to_state_space(model.circuit()).unwrap();

    let bound = dt_max(&ss).unwrap();
    assert!(bound > 0.0 && bound.is_finite());
    let dt = (0.5 * bound).min(360.0);

    // Unit step on the outdoor temperature, one simulated day.
    let n = (86_400.0 / dt).floor() as usize;
    let mut inputs = DMatrix::zeros(8, n);
    for k in 0..n {
        inputs[(0, k)] = 1.0;
        inputs[(1, k)] = 1.0;
        inputs[(2, k)] = 1.0;
    }
    let initial = DVector::zeros(ss.state_count());

    let explicit = simulate(&ss, Scheme::ExplicitEuler, dt, &initial, &inputs).unwrap();
    let implicit = simulate(&ss, Scheme::ImplicitEuler, dt, &initial, &inputs).unwrap();

    let y_exp = explicit.outputs[(0, n - 1)];
    let y_imp = implicit.outputs[(0, n - 1)];

    // The response climbs from 0 toward the 1 °C step without overshoot,
    // and the two schemes land close together.
    assert!(y_exp > 0.0 && y_exp < 1.0, "explicit: {y_exp}");
    assert!(y_imp > 0.0 && y_imp < 1.0, "implicit: {y_imp}");
    assert!((y_exp - y_imp).abs() < 0.05, "gap: {}", y_exp - y_imp);
}

#[test]
fn synthetic_weather_run_with_feedback_postprocessing() {
    let gain = 1.0e-3;
    let model = CubeModel::new(CubeConfig::default().with_controller_gain(gain)).unwrap();
    let ss = circuit_to_state_space(model.circuit()).unwrap();

    let dt = 360.0;
    let n = 2 * 240; // two days
    let setpoint = 20.0;

    // Sinusoidal outdoor temperature and a daytime irradiance bump.
    let outdoor: Vec<f64> = (0..n)
        .map(|k| {
            let hours = k as f64 * dt / 3600.0;
            5.0 + 5.0 * (std::f64::consts::TAU * hours / 24.0).sin()
        })
        .collect();
    let irradiance: Vec<f64> = (0..n)
        .map(|k| {
            let hours = (k as f64 * dt / 3600.0) % 24.0;
            if (6.0..18.0).contains(&hours) {
                400.0 * (std::f64::consts::PI * (hours - 6.0) / 12.0).sin()
            } else {
                0.0
            }
        })
        .collect();
    let setpoints = vec![setpoint; n];
    let auxiliary = vec![0.0; n];

    let shortwave = distribute_shortwave(model.config(), &irradiance).unwrap();
    let inputs = assemble_inputs(&outdoor, &setpoints, &auxiliary, &shortwave).unwrap();

    let initial = DVector::from_element(ss.state_count(), 20.0);
    let result = simulate(&ss, Scheme::ImplicitEuler, dt, &initial, &inputs).unwrap();

    assert_eq!(result.len(), n);
    let indoor = result.output_series(0);
    assert!(indoor.iter().all(|t| t.is_finite() && (-20.0..60.0).contains(t)));

    // Feedback heat flow recovered after the fact from the trajectory.
    let controller = Proportional::new(1.0e4).unwrap();
    let q_hvac = controller.heat_flow_series(&setpoints, &indoor).unwrap();
    assert_eq!(q_hvac.len(), n);
    for (q, t) in q_hvac.iter().zip(&indoor) {
        assert_relative_eq!(*q, 1.0e4 * (setpoint - t), max_relative = 1e-12);
    }
}
