//! Distribution of shortwave radiation among interior surfaces.
//!
//! The irradiance transmitted through the glazing bounces between the wall
//! interior and the glass until absorbed. With surface areas S, view
//! factors F, and reflectances ρ, the absorbed interior fluxes follow from
//! E = (I − ρF)⁻¹·Eo and Φ = S·E. Solar geometry stays outside: the input
//! is the total irradiance already resolved onto the facade, W/m².

use nalgebra::{DMatrix, DVector};

use crate::config::CubeConfig;
use crate::error::{EnvelopeError, EnvelopeResult};

/// Flow-source series feeding the circuit, one sample per input step, W.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortwaveSources {
    /// Absorbed at the wall outer surface (Φo).
    pub outer_wall: Vec<f64>,
    /// Absorbed at the wall inner surface after interior bounces (Φi).
    pub inner_wall: Vec<f64>,
    /// Absorbed in the glass (Φa).
    pub glass: Vec<f64>,
}

/// Turn a facade irradiance series into the circuit's three shortwave
/// flow-source series.
pub fn distribute_shortwave(
    config: &CubeConfig,
    irradiance: &[f64],
) -> EnvelopeResult<ShortwaveSources> {
    let optics = &config.shortwave;
    let wall_surface = config.insulation.surface.value;
    let outer_surface = config.concrete.surface.value;
    let glass_surface = config.glass.surface.value;

    let view_factor = config.longwave.view_factor;

    // Interior radiosity balance between the wall and the glass.
    let surfaces = DMatrix::from_diagonal(&DVector::from_vec(vec![wall_surface, glass_surface]));
    let view = DMatrix::from_row_slice(2, 2, &[1.0 - view_factor, view_factor, 1.0, 0.0]);
    let reflect = DMatrix::from_diagonal(&DVector::from_vec(vec![
        1.0 - optics.wall_absorptivity,
        1.0 - optics.glass_absorptivity - optics.glass_transmittance,
    ]));

    let bounce = (DMatrix::identity(2, 2) - reflect * view)
        .try_inverse()
        .ok_or(EnvelopeError::SingularReflection)?;

    let mut sources = ShortwaveSources {
        outer_wall: Vec::with_capacity(irradiance.len()),
        inner_wall: Vec::with_capacity(irradiance.len()),
        glass: Vec::with_capacity(irradiance.len()),
    };

    for &total in irradiance {
        // Transmitted irradiance lands on the wall interior first.
        let incident_wall = optics.glass_transmittance * glass_surface / outer_surface * total;
        let e = &bounce * DVector::from_vec(vec![incident_wall, 0.0]);
        let absorbed = &surfaces * e;

        sources
            .outer_wall
            .push(optics.wall_absorptivity * outer_surface * total);
        sources
            .inner_wall
            .push(optics.wall_absorptivity * absorbed[0]);
        sources.glass.push(optics.glass_absorptivity * absorbed[1]);
    }

    Ok(sources)
}
