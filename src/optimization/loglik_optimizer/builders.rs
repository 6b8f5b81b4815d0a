//! loglik_optimizer::builders — L-BFGS solver construction helpers.
//!
//! Small, focused builders that hide Argmin's generic wiring and apply
//! crate-level options (tolerances, memory size) so higher-level code can
//! request a configured solver without touching Argmin-specific types.
//! The builders do **not** set the initial parameter vector or `max_iters`;
//! those are runtime concerns applied by the runner.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires the optional gradient / cost-change tolerances from `opts.tols`
/// into the solver.
///
/// # Errors
/// Returns an `OptError` (via `From<argmin::core::Error>`) when Argmin
/// rejects a tolerance setting.
pub fn build_optimizer_hager_zhang(opts: &MLEOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Same configuration rules as [`build_optimizer_hager_zhang`], with the
/// More–Thuente line-search strategy.
///
/// # Errors
/// Returns an `OptError` when Argmin rejects a tolerance setting.
pub fn build_optimizer_more_thuente(opts: &MLEOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// Generic over the line-search type so both builders share the wiring.
/// When a tolerance is `None`, the corresponding `with_tolerance_*` method
/// is not called and Argmin's defaults remain in effect.
///
/// # Errors
/// Returns an `OptError` when `with_tolerance_grad` / `with_tolerance_cost`
/// rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &MLEOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::loglik_optimizer::traits::{LineSearcher, MLEOptions, Tolerances};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic construction of L-BFGS solvers with both line searches.
    // - Tolerance application via `configure_lbfgs` for present and absent
    //   tolerances.
    //
    // They intentionally DO NOT cover:
    // - End-to-end executor behavior (`run_lbfgs`), tested in the runner
    //   layer and by fitter integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure both builders succeed with default options and with an
    // explicit L-BFGS memory.
    //
    // Given
    // -----
    // - Default MLEOptions and a variant with lbfgs_mem = Some(11).
    //
    // Expect
    // ------
    // - All four builder calls return Ok.
    fn builders_construct_solvers_for_both_line_searches() {
        // Arrange
        let defaults = MLEOptions::default();
        let with_mem = MLEOptions::new(
            Tolerances::new(Some(1e-6), None, Some(100)).unwrap(),
            LineSearcher::HagerZhang,
            false,
            Some(11),
        )
        .unwrap();

        // Act & Assert
        assert!(build_optimizer_hager_zhang(&defaults).is_ok());
        assert!(build_optimizer_more_thuente(&defaults).is_ok());
        assert!(build_optimizer_hager_zhang(&with_mem).is_ok());
        assert!(build_optimizer_more_thuente(&with_mem).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that tolerance wiring succeeds when both tolerances are set
    // and when both are absent.
    //
    // Given
    // -----
    // - Options with tol_grad and tol_cost set, and options with only
    //   max_iter.
    //
    // Expect
    // ------
    // - `configure_lbfgs` (via the builders) returns Ok in both cases.
    fn configure_lbfgs_applies_present_tolerances() {
        // Arrange
        let both = MLEOptions::new(
            Tolerances::new(Some(1e-8), Some(1e-10), Some(50)).unwrap(),
            LineSearcher::MoreThuente,
            false,
            None,
        )
        .unwrap();
        let neither = MLEOptions::new(
            Tolerances::new(None, None, Some(50)).unwrap(),
            LineSearcher::MoreThuente,
            false,
            None,
        )
        .unwrap();

        // Act & Assert
        assert!(build_optimizer_more_thuente(&both).is_ok());
        assert!(build_optimizer_more_thuente(&neither).is_ok());
    }
}
