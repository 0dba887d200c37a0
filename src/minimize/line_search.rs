//! Strong Wolfe–Powell line search.
//!
//! Purpose
//! -------
//! Find a step length `alpha` along the context's search direction
//! satisfying the strong Wolfe conditions: sufficient decrease
//! `phi(alpha) <= phi(0) + c1·alpha·dphi_0` and curvature
//! `|phi'(alpha)| <= c2·|dphi_0|`, with `0 < c1 < c2 < 1`.
//!
//! Key behaviors
//! -------------
//! - Bracketing phase starting at `alpha = 1` and doubling the trial
//!   step until a Wolfe point is hit, sufficient decrease breaks down
//!   (bracket found), or the directional derivative turns non-negative
//!   (bracket found, reversed).
//! - Zoom phase refining the bracket by cubic interpolation with a
//!   bisection fallback, until a Wolfe point is found, the bracket
//!   degenerates, or the trial budget runs out.
//! - Non-finite trial values are treated as sufficient-decrease
//!   violations, so the bracket shrinks away from overflow regions
//!   instead of aborting the run.
//! - Failure (`has_failed = true`) is a normal, reported outcome: budget
//!   exhausted, trial step beyond the hard cap, or bracket width below
//!   numerical tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - The context's `dphi_0` equals `dot(p, g)` at the step origin; the
//!   driver recomputes it before every invocation.
//! - Every objective evaluation goes through the function wrapper, so
//!   trial evaluations are counted like any others.
//! - The result is transient: fresh arrays per invocation, never
//!   persisted across iterations.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the immediate-accept path on `(α-1)²`, the zoom
//!   path on a steep quadratic, guaranteed failure on a linear
//!   objective, and budget enforcement.
use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{LineSearchOptions, Objective},
    types::{Cost, Grad, Point},
    validation::{verify_trial_budget, verify_wolfe},
    wrapper::FunctionWrapper,
};

/// Hard cap on trial step lengths; beyond it the search reports failure.
const ALPHA_MAX: f64 = 1e20;

/// Bracket width below which the zoom phase gives up.
const MIN_BRACKET_WIDTH: f64 = 1e-12;

/// Safeguard margin keeping interpolated steps off the bracket ends.
const INTERP_MARGIN: f64 = 0.1;

/// Outcome of one line-search invocation.
///
/// On success, `best_*` describe the accepted point; on failure they
/// echo the step origin and must be ignored by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchResult {
    pub best_alpha: f64,
    pub best_x: Point,
    pub best_g: Grad,
    pub best_phi: Cost,
    pub has_failed: bool,
}

/// One bracket endpoint: step length with value and directional
/// derivative there.
#[derive(Debug, Clone, Copy)]
struct Endpoint {
    alpha: f64,
    phi: f64,
    dphi: f64,
}

/// Strong Wolfe–Powell line search with a shared trial budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrongWolfe {
    c1: f64,
    c2: f64,
    trial_budget: usize,
}

impl StrongWolfe {
    /// Construct from validated options.
    ///
    /// # Errors
    /// - [`MinimizeError::InvalidWolfeConstants`] unless
    ///   `0 < c1 < c2 < 1`.
    /// - [`MinimizeError::InvalidTrialBudget`] if the budget is zero.
    ///
    /// [`MinimizeError::InvalidWolfeConstants`]: crate::minimize::errors::MinimizeError::InvalidWolfeConstants
    /// [`MinimizeError::InvalidTrialBudget`]: crate::minimize::errors::MinimizeError::InvalidTrialBudget
    pub fn new(opts: LineSearchOptions) -> MinimizeResult<Self> {
        verify_wolfe(opts.c1, opts.c2)?;
        verify_trial_budget(opts.trial_budget)?;
        Ok(Self { c1: opts.c1, c2: opts.c2, trial_budget: opts.trial_budget })
    }

    /// Search along `ctx.p()` from `ctx.x()` for a strong Wolfe point.
    ///
    /// Behavior:
    /// - Reads `x`, `val`, `p`, `dphi_0` from the context; never mutates
    ///   it.
    /// - Spends at most `trial_budget` objective evaluations across the
    ///   bracketing and zoom phases.
    /// - Returns `has_failed = true` when no acceptable step was found
    ///   within the budget; the driver turns that into the
    ///   `LineSearchFailed` terminal state.
    ///
    /// # Errors
    /// Propagates objective errors raised during trial evaluations.
    pub fn search<O: Objective>(
        &self, ctx: &Context, fun: &mut FunctionWrapper<O>,
    ) -> MinimizeResult<LineSearchResult> {
        let phi_0 = ctx.val();
        let dphi_0 = ctx.dphi_0();
        let mut evals_left = self.trial_budget;

        // ---- Bracketing ----
        let mut prev = Endpoint { alpha: 0.0, phi: phi_0, dphi: dphi_0 };
        let mut alpha = 1.0;
        while evals_left > 0 && alpha <= ALPHA_MAX {
            let (phi_a, g_a, x_a) = trial(ctx, fun, alpha, &mut evals_left)?;
            let dphi_a = g_a.dot(ctx.p());
            let current = Endpoint { alpha, phi: phi_a, dphi: dphi_a };
            if !phi_a.is_finite()
                || phi_a > phi_0 + self.c1 * alpha * dphi_0
                || (prev.alpha > 0.0 && phi_a >= prev.phi)
            {
                return self.zoom(ctx, fun, phi_0, dphi_0, prev, current, &mut evals_left);
            }
            if dphi_a.abs() <= self.c2 * dphi_0.abs() {
                return Ok(accepted(alpha, x_a, g_a, phi_a));
            }
            if dphi_a >= 0.0 {
                return self.zoom(ctx, fun, phi_0, dphi_0, current, prev, &mut evals_left);
            }
            prev = current;
            alpha *= 2.0;
        }
        Ok(failed(ctx))
    }

    /// Refine a bracket `[lo, hi]` until a Wolfe point is found.
    ///
    /// `lo` always satisfies sufficient decrease with the lowest value
    /// seen; `hi` bounds the bracket from the other side. The interval
    /// ordering may be reversed (`hi.alpha < lo.alpha`).
    fn zoom<O: Objective>(
        &self, ctx: &Context, fun: &mut FunctionWrapper<O>, phi_0: f64, dphi_0: f64,
        mut lo: Endpoint, mut hi: Endpoint, evals_left: &mut usize,
    ) -> MinimizeResult<LineSearchResult> {
        while *evals_left > 0 {
            if (hi.alpha - lo.alpha).abs() < MIN_BRACKET_WIDTH {
                break;
            }
            let alpha_j = interpolate(&lo, &hi);
            let (phi_j, g_j, x_j) = trial(ctx, fun, alpha_j, evals_left)?;
            let dphi_j = g_j.dot(ctx.p());
            let current = Endpoint { alpha: alpha_j, phi: phi_j, dphi: dphi_j };
            if !phi_j.is_finite()
                || phi_j > phi_0 + self.c1 * alpha_j * dphi_0
                || phi_j >= lo.phi
            {
                hi = current;
            } else {
                if dphi_j.abs() <= self.c2 * dphi_0.abs() {
                    return Ok(accepted(alpha_j, x_j, g_j, phi_j));
                }
                if dphi_j * (hi.alpha - lo.alpha) >= 0.0 {
                    hi = lo;
                }
                lo = current;
            }
        }
        Ok(failed(ctx))
    }
}

/// Evaluate the objective at `x + alpha·p`, charging the shared budget.
fn trial<O: Objective>(
    ctx: &Context, fun: &mut FunctionWrapper<O>, alpha: f64, evals_left: &mut usize,
) -> MinimizeResult<(Cost, Grad, Point)> {
    *evals_left -= 1;
    let x_a: Point = ctx.x() + &(ctx.p() * alpha);
    let (phi_a, g_a) = fun.value_grad(&x_a)?;
    Ok((phi_a, g_a, x_a))
}

/// Cubic-interpolation step inside the bracket, falling back to
/// bisection when the cubic is degenerate or lands too close to an end.
fn interpolate(lo: &Endpoint, hi: &Endpoint) -> f64 {
    let bisection = 0.5 * (lo.alpha + hi.alpha);
    let d1 = lo.dphi + hi.dphi - 3.0 * (lo.phi - hi.phi) / (lo.alpha - hi.alpha);
    let discriminant = d1 * d1 - lo.dphi * hi.dphi;
    if discriminant.is_nan() || discriminant < 0.0 {
        return bisection;
    }
    let d2 = discriminant.sqrt().copysign(hi.alpha - lo.alpha);
    let denom = hi.dphi - lo.dphi + 2.0 * d2;
    if denom == 0.0 {
        return bisection;
    }
    let candidate = hi.alpha - (hi.alpha - lo.alpha) * (hi.dphi + d2 - d1) / denom;
    let lower = lo.alpha.min(hi.alpha);
    let upper = lo.alpha.max(hi.alpha);
    let margin = INTERP_MARGIN * (upper - lower);
    if candidate.is_finite() && candidate > lower + margin && candidate < upper - margin {
        candidate
    } else {
        bisection
    }
}

fn accepted(best_alpha: f64, best_x: Point, best_g: Grad, best_phi: Cost) -> LineSearchResult {
    LineSearchResult { best_alpha, best_x, best_g, best_phi, has_failed: false }
}

/// Failure result echoing the step origin; callers ignore the `best_*`
/// fields when `has_failed` is set.
fn failed(ctx: &Context) -> LineSearchResult {
    LineSearchResult {
        best_alpha: 0.0,
        best_x: ctx.x().clone(),
        best_g: ctx.g().clone(),
        best_phi: ctx.val(),
        has_failed: true,
    }
}
