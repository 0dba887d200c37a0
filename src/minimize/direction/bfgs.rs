//! Dense BFGS: quasi-Newton with an explicit inverse-Hessian estimate.
//!
//! The strategy maintains a dense `N×N` approximation `H ≈ ∇²f⁻¹`,
//! initialized to the identity and refined after every accepted step by
//! the rank-two BFGS update built from `s = x − x_prev` and
//! `y = g − g_prev`:
//!
//! `H ← (I − ρ·s·yᵀ)·H·(I − ρ·y·sᵀ) + ρ·s·sᵀ`, with `ρ = 1 / dot(s, y)`.
//!
//! Updates are applied only when `dot(s, y) > 0`, which keeps `H`
//! positive definite; immediately before the first applied update `H` is
//! rescaled to `(dot(s, y) / dot(y, y))·I` so the eigenvalue scale of
//! the estimate starts near that of the true inverse Hessian. The
//! returned direction is `p = -H·g`.
//!
//! Memory and per-iteration cost are `O(N²)`; for large `N` the
//! limited-memory variant in [`lbfgs`](super::lbfgs) is the better fit.
use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{Direction, Objective},
    types::{Grad, Hessian},
    wrapper::FunctionWrapper,
};

/// Dense BFGS direction strategy.
#[derive(Debug, Clone, Default)]
pub struct Bfgs {
    /// Inverse-Hessian estimate; allocated by `init`, freed by `clean`.
    h: Option<Hessian>,
    /// Whether a curvature update has been applied to `h` this run.
    updated: bool,
}

impl Bfgs {
    /// Create a dense BFGS strategy.
    pub fn new() -> Self {
        Self { h: None, updated: false }
    }
}

impl<O: Objective> Direction<O> for Bfgs {
    /// Allocate the estimate as the `n×n` identity.
    fn init(&mut self, n: usize) -> MinimizeResult<()> {
        self.h = Some(Hessian::eye(n));
        self.updated = false;
        Ok(())
    }

    /// Release the estimate.
    fn clean(&mut self) {
        self.h = None;
        self.updated = false;
    }

    /// Apply the curvature update for the last accepted step, then return
    /// `p = -H·g`.
    ///
    /// At iteration zero `s` is the zero vector, so the `dot(s, y) > 0`
    /// gate skips the update and the direction degenerates to `-g`.
    fn compute(&mut self, ctx: &Context, _fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad> {
        let n = ctx.dim();
        // A missing `init` is treated as a fresh start from the identity.
        let h = self.h.get_or_insert_with(|| Hessian::eye(n));

        let s = ctx.x() - ctx.x_prev();
        let y = ctx.g() - ctx.g_prev();
        let sy = s.dot(&y);
        if sy > 0.0 {
            // `sy > 0` implies `y ≠ 0`, so the rescale denominator is
            // nonzero.
            if !self.updated {
                *h *= sy / y.dot(&y);
            }
            let hy = h.dot(&y);
            let yhy = y.dot(&hy);
            let rho = 1.0 / sy;
            let coef = rho * rho * yhy + rho;
            for i in 0..n {
                for j in 0..n {
                    h[[i, j]] += coef * s[i] * s[j] - rho * (s[i] * hy[j] + hy[i] * s[j]);
                }
            }
            self.updated = true;
        }

        Ok(-h.dot(ctx.g()))
    }
}
