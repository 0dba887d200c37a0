//! minimize::finite_diff — centered Hessian-vector products on the
//! gradient.
//!
//! Purpose
//! -------
//! Provide the finite-difference Hessian-vector approximation used when
//! an objective supplies no analytic curvature routine, with error
//! capture from inside the non-fallible stencil closure, so that the
//! rest of the engine can request curvature products without depending
//! directly on the `finitediff` API.
//!
//! Key behaviors
//! -------------
//! - Compute `H(x)·v` with the symmetric two-point stencil
//!   `(∇f(x + εv) - ∇f(x - εv)) / 2ε` via
//!   [`finitediff::FiniteDiff::central_hessian_vec_prod`].
//! - Route any objective error raised inside the stencil closure into a
//!   shared capture cell, substitute `NaN`, and surface the first
//!   captured error after the stencil returns.
//! - Charge the two interior gradient evaluations to the shared
//!   evaluation counters; they are real objective evaluations.
//!
//! Invariants & assumptions
//! ------------------------
//! - Points, gradients, and products are `ndarray` containers over
//!   `f64` (`Point`, `Grad`).
//! - The caller (the function wrapper) validates the returned product;
//!   this module only guarantees that captured objective errors
//!   propagate instead of leaking as `NaN` entries.
//!
//! Conventions
//! -----------
//! - The stencil step is chosen by `finitediff`; this module does not
//!   expose a step-size knob.
//! - Domain errors are surfaced as [`MinimizeError`] via
//!   `MinimizeResult<T>`; the capture cell confines the non-fallible
//!   closure boundary to this file.
//!
//! Downstream usage
//! ----------------
//! - [`FunctionWrapper::hessian_vec`] calls [`central_hessian_vec`] when
//!   the centered-difference policy is active; the truncated-Newton
//!   strategy consumes the products through the wrapper.
//!
//! [`FunctionWrapper::hessian_vec`]: crate::minimize::wrapper::FunctionWrapper::hessian_vec
//!
//! Testing notes
//! -------------
//! - Unit tests cover stencil accuracy on a quadratic (where the product
//!   is exact up to rounding), error capture, and counter charging.
//! - Integration tests exercise this path through the truncated-Newton
//!   strategy under the default policy.
use crate::minimize::{
    errors::{MinimizeError, MinimizeResult},
    traits::Objective,
    types::{EvalCounts, Grad, Point},
};
use finitediff::FiniteDiff;
use ndarray::Array1;
use std::cell::RefCell;

/// central_hessian_vec — centered-difference `H(x)·v` with error capture.
///
/// Purpose
/// -------
/// Approximate the Hessian-vector product at `x` along `v` using two
/// gradient evaluations, while capturing any error raised inside the
/// evaluation closure.
///
/// Parameters
/// ----------
/// - `objective`: `&mut O`
///   The objective whose gradient is differenced. Evaluated twice, at
///   `x + εv` and `x - εv`.
/// - `counts`: `&mut EvalCounts`
///   Shared evaluation counters; each successful interior evaluation
///   increments the value/gradient counters and accumulates the
///   objective's datapoints figure.
/// - `x`, `v`: `&Point`
///   Expansion point and direction.
///
/// Returns
/// -------
/// `MinimizeResult<Grad>`
///   - `Ok(hv)` when both interior evaluations succeed; the caller is
///     responsible for validating the product.
///   - `Err(e)` carrying the first error captured from the objective.
///
/// Errors
/// ------
/// Propagates the first error the objective raised inside the stencil;
/// the corresponding stencil output is discarded.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - The stencil closure cannot return `Result`, so errors are written
///   into a `RefCell` slot and `NaN` is substituted; the slot is checked
///   once the stencil returns. Counters live behind the same cell
///   because `finitediff` takes the closure as `Fn`.
pub(crate) fn central_hessian_vec<O: Objective>(
    objective: &mut O, counts: &mut EvalCounts, x: &Point, v: &Point,
) -> MinimizeResult<Grad> {
    let state = RefCell::new((objective, counts));
    let closure_err: RefCell<Option<MinimizeError>> = RefCell::new(None);
    let grad_fn = |z: &Point| -> Grad {
        let mut shared = state.borrow_mut();
        let (objective, counts) = &mut *shared;
        match objective.value_grad(z) {
            Ok((_, g)) => {
                counts.value += 1;
                counts.gradient += 1;
                counts.datapoints += objective.datapoints_per_eval();
                g
            }
            Err(e) => {
                let mut slot = closure_err.borrow_mut();
                if slot.is_none() {
                    *slot = Some(e);
                }
                Array1::from_elem(z.len(), f64::NAN)
            }
        }
    };
    let hv = x.central_hessian_vec_prod(&grad_fn, v);
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    Ok(hv)
}
