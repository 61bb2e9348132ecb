//! Conductance builders for the envelope's heat-flow paths.

use tn_core::units::constants::SIGMA_W_PER_M2_K4;
use tn_core::units::{w_per_k, w_per_m2_k, Area, Conductance, FilmCoefficient, Temperature, VolumeRate};

use crate::config::{AirProperties, LongwaveExchange};
use crate::error::{EnvelopeError, EnvelopeResult};

/// Convective film conductance h·S.
pub fn convection(film: FilmCoefficient, surface: Area) -> Conductance {
    film * surface
}

/// Ventilation/advection conductance ρ·cp·V̇.
pub fn ventilation(air: &AirProperties, flow: VolumeRate) -> Conductance {
    air.density * air.specific_heat * flow
}

/// Series combination of two conductances, 1/(1/a + 1/b).
pub fn series(a: Conductance, b: Conductance) -> Conductance {
    w_per_k(1.0 / (1.0 / a.value + 1.0 / b.value))
}

/// Radiative exchange coefficient linearized around a mean temperature:
/// 4·σ·T³, W/(m²·K).
pub fn longwave_coefficient(mean_temperature: Temperature) -> FilmCoefficient {
    w_per_m2_k(4.0 * SIGMA_W_PER_M2_K4 * mean_temperature.value.powi(3))
}

/// Linearized longwave conductance between the wall interior and the
/// glass: surface-emissivity terms on both ends in series with the
/// view-factor term.
pub fn longwave_exchange(
    exchange: &LongwaveExchange,
    wall_surface: Area,
    glass_surface: Area,
) -> EnvelopeResult<Conductance> {
    for eps in [exchange.wall_emissivity, exchange.glass_emissivity] {
        if !(0.0..1.0).contains(&eps) || eps == 0.0 {
            return Err(EnvelopeError::InvalidArg {
                what: "emissivity must lie strictly between 0 and 1",
            });
        }
    }
    if !(0.0..=1.0).contains(&exchange.view_factor) || exchange.view_factor == 0.0 {
        return Err(EnvelopeError::InvalidArg {
            what: "view factor must lie in (0, 1]",
        });
    }

    let h_r = longwave_coefficient(exchange.mean_temperature);
    let wall_term: Conductance =
        exchange.wall_emissivity / (1.0 - exchange.wall_emissivity) * (h_r * wall_surface);
    let view_term: Conductance = exchange.view_factor * (h_r * wall_surface);
    let glass_term: Conductance =
        exchange.glass_emissivity / (1.0 - exchange.glass_emissivity) * (h_r * glass_surface);

    Ok(w_per_k(
        1.0 / (1.0 / wall_term.value + 1.0 / view_term.value + 1.0 / glass_term.value),
    ))
}
