//! Immutable physical configuration of the cube room.
//!
//! Everything the circuit assembly needs is carried in one value, so
//! several differently-parameterized models (say, two controller gains)
//! can be built and compared in a single run. Quantities are SI-typed at
//! this boundary; the circuit itself works in raw W/K and J/K.

use tn_core::units::{
    Area, Conductance, Conductivity, Density, FilmCoefficient, HeatCapacity, Length,
    SpecificHeat, Temperature, Volume, VolumeRate,
};
use tn_core::units::constants::SECONDS_PER_HOUR;
use tn_core::units::{j_per_kg_k, k, kg_per_m3, m, m2, s, w_per_m2_k, w_per_m_k};

/// Cubic room geometry.
#[derive(Debug, Clone, Copy)]
pub struct RoomGeometry {
    /// Edge length of the cube.
    pub edge: Length,
    /// Air changes per hour through infiltration.
    pub air_changes_per_hour: f64,
}

impl RoomGeometry {
    /// Interior air volume.
    pub fn volume(&self) -> Volume {
        self.edge * self.edge * self.edge
    }

    /// Opaque wall surface: five faces of the cube.
    pub fn wall_surface(&self) -> Area {
        5.0 * self.edge * self.edge
    }

    /// Glazed surface: the remaining face.
    pub fn glass_surface(&self) -> Area {
        self.edge * self.edge
    }

    /// Infiltration volume flow from the air-change rate.
    pub fn infiltration(&self) -> VolumeRate {
        self.volume() * (self.air_changes_per_hour / SECONDS_PER_HOUR) / s(1.0)
    }
}

/// Indoor air properties.
#[derive(Debug, Clone, Copy)]
pub struct AirProperties {
    pub density: Density,
    pub specific_heat: SpecificHeat,
}

/// One homogeneous material layer of the envelope.
#[derive(Debug, Clone, Copy)]
pub struct WallLayer {
    pub conductivity: Conductivity,
    pub density: Density,
    pub specific_heat: SpecificHeat,
    pub width: Length,
    pub surface: Area,
}

impl WallLayer {
    /// Conduction conductance of the full layer thickness, λ/w·S.
    pub fn conduction(&self) -> Conductance {
        self.conductivity / self.width * self.surface
    }

    /// Conduction conductance of half the layer, for the two branches
    /// flanking the layer's lumped mass node.
    pub fn half_conduction(&self) -> Conductance {
        2.0 * self.conduction()
    }

    /// Lumped thermal capacity of the layer, ρ·cp·S·w.
    pub fn capacity(&self) -> HeatCapacity {
        self.density * self.specific_heat * self.surface * self.width
    }
}

/// Convective film coefficients on the two sides of the envelope.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFilms {
    pub indoor: FilmCoefficient,
    pub outdoor: FilmCoefficient,
}

/// Linearized longwave radiative exchange between the wall interior and
/// the glass.
#[derive(Debug, Clone, Copy)]
pub struct LongwaveExchange {
    pub wall_emissivity: f64,
    pub glass_emissivity: f64,
    /// View factor wall -> glass.
    pub view_factor: f64,
    /// Mean temperature the exchange is linearized around.
    pub mean_temperature: Temperature,
}

/// Shortwave optical properties of the interior surfaces and the glazing.
#[derive(Debug, Clone, Copy)]
pub struct ShortwaveOptics {
    pub wall_absorptivity: f64,
    pub glass_absorptivity: f64,
    pub glass_transmittance: f64,
}

/// Full configuration of the cube-room model.
#[derive(Debug, Clone)]
pub struct CubeConfig {
    pub geometry: RoomGeometry,
    pub air: AirProperties,
    pub concrete: WallLayer,
    pub insulation: WallLayer,
    pub glass: WallLayer,
    pub films: SurfaceFilms,
    pub longwave: LongwaveExchange,
    pub shortwave: ShortwaveOptics,
    /// Proportional controller gain, W/K; also the conductance of the
    /// control branch toward the setpoint.
    pub controller_gain: f64,
}

impl CubeConfig {
    /// Builder-style override of the controller gain.
    pub fn with_controller_gain(mut self, gain: f64) -> Self {
        self.controller_gain = gain;
        self
    }
}

impl Default for CubeConfig {
    /// A 3 m cube with a concrete/polystyrene wall and a single-glazed
    /// face; material data from Incropera et al. (2011), tables A3.
    fn default() -> Self {
        let edge = m(3.0);
        let wall_surface = m2(5.0 * 9.0);
        let glass_surface = m2(9.0);
        Self {
            geometry: RoomGeometry {
                edge,
                air_changes_per_hour: 1.0,
            },
            air: AirProperties {
                density: kg_per_m3(1.2),
                specific_heat: j_per_kg_k(1000.0),
            },
            concrete: WallLayer {
                conductivity: w_per_m_k(1.4),
                density: kg_per_m3(2300.0),
                specific_heat: j_per_kg_k(880.0),
                width: m(0.2),
                surface: wall_surface,
            },
            insulation: WallLayer {
                conductivity: w_per_m_k(0.027),
                density: kg_per_m3(55.0),
                specific_heat: j_per_kg_k(1210.0),
                width: m(0.08),
                surface: wall_surface,
            },
            glass: WallLayer {
                conductivity: w_per_m_k(1.4),
                density: kg_per_m3(2500.0),
                specific_heat: j_per_kg_k(750.0),
                width: m(0.004),
                surface: glass_surface,
            },
            films: SurfaceFilms {
                indoor: w_per_m2_k(4.0),
                outdoor: w_per_m2_k(10.0),
            },
            longwave: LongwaveExchange {
                wall_emissivity: 0.7,
                glass_emissivity: 0.7,
                view_factor: 1.0 / 5.0,
                mean_temperature: k(295.0),
            },
            shortwave: ShortwaveOptics {
                wall_absorptivity: 0.1,
                glass_absorptivity: 0.05,
                glass_transmittance: 0.30,
            },
            controller_gain: 1.0e4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_of_the_cube() {
        let geometry = CubeConfig::default().geometry;
        assert!((geometry.volume().value - 27.0).abs() < 1e-12);
        assert!((geometry.wall_surface().value - 45.0).abs() < 1e-12);
        assert!((geometry.glass_surface().value - 9.0).abs() < 1e-12);
        // 1 ACH over 27 m³: 7.5e-3 m³/s
        assert!((geometry.infiltration().value - 27.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn layer_derived_quantities() {
        let concrete = CubeConfig::default().concrete;
        // λ/w·S = 1.4/0.2·45 = 315 W/K
        assert!((concrete.conduction().value - 315.0).abs() < 1e-9);
        assert!((concrete.half_conduction().value - 630.0).abs() < 1e-9);
        // ρ·cp·S·w = 2300·880·45·0.2
        assert!((concrete.capacity().value - 2300.0 * 880.0 * 45.0 * 0.2).abs() < 1e-3);
    }
}
