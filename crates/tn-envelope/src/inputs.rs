//! Input-trajectory assembly in the cube circuit's fixed order.

use nalgebra::DMatrix;

use crate::error::{EnvelopeError, EnvelopeResult};
use crate::model::CubeModel;
use crate::shortwave::ShortwaveSources;

/// Stack weather, setpoint, auxiliary-heat, and shortwave series into the
/// input matrix the simulator consumes (one column per step).
///
/// Row order matches the circuit: the outdoor temperature feeds the wall,
/// glass, and ventilation branches, the setpoint the control branch, then
/// the shortwave and auxiliary flow sources follow in node order.
pub fn assemble_inputs(
    outdoor: &[f64],
    setpoint: &[f64],
    auxiliary: &[f64],
    shortwave: &ShortwaveSources,
) -> EnvelopeResult<DMatrix<f64>> {
    let n = outdoor.len();
    for (what, len) in [
        ("setpoint series", setpoint.len()),
        ("auxiliary heat series", auxiliary.len()),
        ("shortwave outer-wall series", shortwave.outer_wall.len()),
        ("shortwave inner-wall series", shortwave.inner_wall.len()),
        ("shortwave glass series", shortwave.glass.len()),
    ] {
        if len != n {
            return Err(EnvelopeError::DimensionMismatch {
                what,
                expected: n,
                actual: len,
            });
        }
    }

    let mut inputs = DMatrix::zeros(CubeModel::INPUT_COUNT, n);
    for k in 0..n {
        inputs[(0, k)] = outdoor[k];
        inputs[(1, k)] = outdoor[k];
        inputs[(2, k)] = outdoor[k];
        inputs[(3, k)] = setpoint[k];
        inputs[(4, k)] = shortwave.outer_wall[k];
        inputs[(5, k)] = shortwave.inner_wall[k];
        inputs[(6, k)] = auxiliary[k];
        inputs[(7, k)] = shortwave.glass[k];
    }
    Ok(inputs)
}
