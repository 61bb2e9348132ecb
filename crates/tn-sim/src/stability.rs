//! Advisory stability bound for the explicit scheme.

use tn_solver::StateSpace;

/// Maximum stable time step for forward Euler on this system:
/// dt_max = min over eigenvalues λ of As with Re λ < 0 of −2/Re λ.
///
/// Advisory only. The simulator never refuses a larger dt; exceeding the
/// bound shows up as growing oscillation in the explicit trajectory while
/// the implicit scheme remains bounded. Returns `None` when the system has
/// no decaying mode (including the zero-state case).
pub fn dt_max(system: &StateSpace) -> Option<f64> {
    if system.state_count() == 0 {
        return None;
    }
    system
        .a
        .complex_eigenvalues()
        .iter()
        .filter(|lambda| lambda.re < 0.0)
        .map(|lambda| -2.0 / lambda.re)
        .fold(None, |acc, bound| {
            Some(acc.map_or(bound, |a: f64| a.min(bound)))
        })
}
