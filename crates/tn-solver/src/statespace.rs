//! The state-space system produced by the reduction.

use nalgebra::{DMatrix, DVector};

use crate::error::{SolverError, SolverResult};

/// Linear time-invariant state-space system {As, Bs, Cs, Ds}:
///
/// ```text
/// dθs/dt = a·θs + b·u        y = c·θs + d·u
/// ```
///
/// `a` governs free decay of the state temperatures, `b` maps inputs to
/// state derivatives, `c`/`d` reconstruct the selected outputs. Computed
/// once per circuit topology and parameter set; immutable thereafter. The
/// state ordering follows the circuit's node partition and the input
/// ordering its input layout. A circuit whose nodes are all algebraic
/// yields a legal system with zero-dimensional state matrices and outputs
/// flowing through `d` alone.
#[derive(Debug, Clone)]
pub struct StateSpace {
    pub a: DMatrix<f64>,
    pub b: DMatrix<f64>,
    pub c: DMatrix<f64>,
    pub d: DMatrix<f64>,
}

impl StateSpace {
    /// Bundle four matrices after checking their shapes agree.
    pub fn new(
        a: DMatrix<f64>,
        b: DMatrix<f64>,
        c: DMatrix<f64>,
        d: DMatrix<f64>,
    ) -> SolverResult<Self> {
        if a.nrows() != a.ncols() {
            return Err(SolverError::DimensionMismatch {
                what: "state matrix (must be square)",
                expected: a.nrows(),
                actual: a.ncols(),
            });
        }
        if b.nrows() != a.nrows() {
            return Err(SolverError::DimensionMismatch {
                what: "input matrix rows",
                expected: a.nrows(),
                actual: b.nrows(),
            });
        }
        if c.ncols() != a.ncols() {
            return Err(SolverError::DimensionMismatch {
                what: "output matrix columns",
                expected: a.ncols(),
                actual: c.ncols(),
            });
        }
        if d.nrows() != c.nrows() {
            return Err(SolverError::DimensionMismatch {
                what: "feedthrough matrix rows",
                expected: c.nrows(),
                actual: d.nrows(),
            });
        }
        if d.ncols() != b.ncols() {
            return Err(SolverError::DimensionMismatch {
                what: "feedthrough matrix columns",
                expected: b.ncols(),
                actual: d.ncols(),
            });
        }
        Ok(Self { a, b, c, d })
    }

    /// Number of dynamic states.
    pub fn state_count(&self) -> usize {
        self.a.nrows()
    }

    /// Number of external inputs.
    pub fn input_count(&self) -> usize {
        self.b.ncols()
    }

    /// Number of reported outputs.
    pub fn output_count(&self) -> usize {
        self.c.nrows()
    }

    /// Steady-state output under a constant input: y∞ = (−c·a⁻¹·b + d)·u.
    pub fn steady_output(&self, u: &DVector<f64>) -> SolverResult<DVector<f64>> {
        if u.len() != self.input_count() {
            return Err(SolverError::DimensionMismatch {
                what: "constant input vector",
                expected: self.input_count(),
                actual: u.len(),
            });
        }
        if self.state_count() == 0 {
            return Ok(&self.d * u);
        }
        let a_inv = self
            .a
            .clone()
            .try_inverse()
            .ok_or(SolverError::SingularReduction {
                what: "state matrix",
            })?;
        Ok((-&self.c * a_inv * &self.b + &self.d) * u)
    }
}
