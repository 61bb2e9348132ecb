//! Assembly of the cube-room thermal circuit.
//!
//! Eight nodes, twelve branches. The opaque wall contributes a chain of
//! surface and mass nodes (concrete, insulation), the glazed face a mass
//! node coupled to the indoor air and, by longwave exchange, to the wall
//! interior. Outdoor temperature drives three boundary branches, the
//! setpoint drives the control branch, and shortwave/auxiliary heat enters
//! as flow sources.

use tn_circuit::{CircuitBuilder, ThermalCircuit};

use crate::conductance::{convection, longwave_exchange, series, ventilation};
use crate::config::CubeConfig;
use crate::error::{EnvelopeError, EnvelopeResult};

/// A built cube model: the frozen circuit plus the configuration it came
/// from.
///
/// The circuit's input order is fixed by construction:
/// `[To(wall), To(glass), To(ventilation), Tisp, Φo, Φi, Qa, Φa]` —
/// the three outdoor-temperature branches and the setpoint first, then the
/// flow sources at the outer wall surface, the inner wall surface, the
/// indoor air, and the glass.
#[derive(Debug, Clone)]
pub struct CubeModel {
    circuit: ThermalCircuit,
    config: CubeConfig,
}

impl CubeModel {
    /// Build the circuit for a configuration.
    pub fn new(config: CubeConfig) -> EnvelopeResult<Self> {
        if !config.controller_gain.is_finite() || config.controller_gain <= 0.0 {
            return Err(EnvelopeError::InvalidArg {
                what: "controller gain must be positive and finite",
            });
        }

        let geometry = &config.geometry;
        let films = &config.films;

        let g_wall_out = convection(films.outdoor, config.concrete.surface);
        let g_wall_in = convection(films.indoor, config.insulation.surface);
        let g_glass_in = convection(films.indoor, config.glass.surface);
        let g_glass_out = convection(films.outdoor, config.glass.surface);
        let g_longwave = longwave_exchange(
            &config.longwave,
            config.insulation.surface,
            config.glass.surface,
        )?;
        let g_ventilation = ventilation(&config.air, geometry.infiltration());
        // Outdoor film and the outer half of the pane collapse into one path.
        let g_glass_boundary = series(g_glass_out, config.glass.half_conduction());

        let air_capacity =
            (config.air.density * config.air.specific_heat * geometry.volume()).value;

        let mut builder = CircuitBuilder::new();
        let outer_surface = builder.add_node("Wall outer surface", 0.0);
        let concrete_mass = builder.add_node("Concrete mass", config.concrete.capacity().value);
        let interface = builder.add_node("Concrete-insulation interface", 0.0);
        let insulation_mass =
            builder.add_node("Insulation mass", config.insulation.capacity().value);
        let inner_surface = builder.add_node("Wall inner surface", 0.0);
        let glass_surface = builder.add_node("Glass inner surface", 0.0);
        let indoor_air = builder.add_node("Indoor air", air_capacity);
        let glass_mass = builder.add_node("Glass mass", config.glass.capacity().value);

        let outdoor_wall =
            builder.add_boundary_branch("Outdoor film, wall", g_wall_out.value, outer_surface);
        builder.add_branch(
            "Concrete, outer half",
            config.concrete.half_conduction().value,
            outer_surface,
            concrete_mass,
        );
        builder.add_branch(
            "Concrete, inner half",
            config.concrete.half_conduction().value,
            concrete_mass,
            interface,
        );
        builder.add_branch(
            "Insulation, outer half",
            config.insulation.half_conduction().value,
            interface,
            insulation_mass,
        );
        builder.add_branch(
            "Insulation, inner half",
            config.insulation.half_conduction().value,
            insulation_mass,
            inner_surface,
        );
        builder.add_branch(
            "Longwave wall-glass",
            g_longwave.value,
            inner_surface,
            glass_surface,
        );
        builder.add_branch(
            "Indoor film, wall",
            g_wall_in.value,
            inner_surface,
            indoor_air,
        );
        builder.add_branch(
            "Indoor film, glass",
            g_glass_in.value,
            glass_surface,
            indoor_air,
        );
        let outdoor_glass = builder.add_boundary_branch(
            "Outdoor film and pane, glass",
            g_glass_boundary.value,
            glass_mass,
        );
        builder.add_branch(
            "Glass, inner half",
            config.glass.half_conduction().value,
            glass_mass,
            glass_surface,
        );
        let infiltration =
            builder.add_boundary_branch("Ventilation", g_ventilation.value, indoor_air);
        let control =
            builder.add_boundary_branch("Control", config.controller_gain, indoor_air);

        builder.temperature_source(outdoor_wall);
        builder.temperature_source(outdoor_glass);
        builder.temperature_source(infiltration);
        builder.temperature_source(control);

        builder.flow_source(outer_surface);
        builder.flow_source(inner_surface);
        builder.flow_source(indoor_air);
        builder.flow_source(glass_mass);

        builder.select_output(indoor_air);

        let circuit = builder.build()?;
        Ok(Self { circuit, config })
    }

    /// The frozen circuit.
    pub fn circuit(&self) -> &ThermalCircuit {
        &self.circuit
    }

    /// The configuration the circuit was built from.
    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Number of external inputs of the cube circuit.
    pub const INPUT_COUNT: usize = 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_shape() {
        let model = CubeModel::new(CubeConfig::default()).unwrap();
        let circuit = model.circuit();

        assert_eq!(circuit.node_count(), 8);
        assert_eq!(circuit.branch_count(), 12);

        let partition = circuit.partition();
        // Concrete, insulation, air, and glass masses carry capacity.
        assert_eq!(partition.state_nodes(), &[1, 3, 6, 7]);
        assert_eq!(partition.algebraic_nodes(), &[0, 2, 4, 5]);

        let layout = circuit.input_layout();
        assert_eq!(layout.temperature_branches(), &[0, 8, 10, 11]);
        assert_eq!(layout.flow_nodes(), &[0, 4, 6, 7]);
        assert_eq!(layout.len(), CubeModel::INPUT_COUNT);

        // The indoor air temperature is the reported output.
        assert_eq!(circuit.output_nodes(), vec![6]);
    }

    #[test]
    fn rejects_non_positive_gain() {
        let config = CubeConfig::default().with_controller_gain(0.0);
        assert!(matches!(
            CubeModel::new(config),
            Err(EnvelopeError::InvalidArg { .. })
        ));
    }

    #[test]
    fn conductances_follow_the_materials() {
        let model = CubeModel::new(CubeConfig::default()).unwrap();
        let g = model.circuit().conductances();

        // Outdoor wall film: 10·45 = 450 W/K
        assert!((g[0] - 450.0).abs() < 1e-9);
        // Concrete half conduction: 2·1.4/0.2·45 = 630 W/K
        assert!((g[1] - 630.0).abs() < 1e-9);
        // Ventilation at 1 ACH: 9 W/K
        assert!((g[10] - 9.0).abs() < 1e-9);
        // Control branch carries the gain.
        assert!((g[11] - 1.0e4).abs() < 1e-9);
    }
}
