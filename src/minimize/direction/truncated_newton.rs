//! Hessian-free truncated Newton.
//!
//! The strategy approximately solves the Newton system `H(x)·p = -g`
//! with an inner linear conjugate-gradient loop that touches the Hessian
//! only through Hessian-vector products requested from the function
//! wrapper, so the full matrix is never formed. The inner solve is
//! truncated twice over:
//!
//! - the residual test stops once `‖r‖ < min(0.5, √‖g‖)·‖g‖`, tightening
//!   the solve as the gradient shrinks, and
//! - a hard cap bounds the number of inner iterations (and thus
//!   Hessian-vector products) per outer iteration.
//!
//! Negative curvature (`dot(d, H·d) ≤ 0`) ends the solve early: on the
//! very first inner iteration the strategy returns plain `-g`, afterwards
//! it returns the partial solution accumulated so far, which is a descent
//! direction by construction.
use std::ops::Neg;

use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{Direction, Objective},
    types::{Grad, Point},
    validation::verify_inner_cap,
    wrapper::FunctionWrapper,
};

/// Truncated-Newton direction strategy.
#[derive(Debug, Clone, Copy)]
pub struct TruncatedNewton {
    /// Cap on inner conjugate-gradient iterations per outer iteration.
    max_inner: usize,
}

impl TruncatedNewton {
    /// Create a truncated-Newton strategy with the given inner-iteration
    /// cap.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidInnerCap`] if `max_inner == 0`.
    ///
    /// [`MinimizeError::InvalidInnerCap`]: crate::minimize::errors::MinimizeError::InvalidInnerCap
    pub fn new(max_inner: usize) -> MinimizeResult<Self> {
        verify_inner_cap(max_inner)?;
        Ok(Self { max_inner })
    }

    /// Cap on inner conjugate-gradient iterations.
    pub fn max_inner(&self) -> usize {
        self.max_inner
    }
}

impl<O: Objective> Direction<O> for TruncatedNewton {
    /// No per-run state to allocate; the inner solve starts fresh every
    /// outer iteration.
    fn init(&mut self, _n: usize) -> MinimizeResult<()> {
        Ok(())
    }

    /// No per-run state to release.
    fn clean(&mut self) {}

    /// Run the inner conjugate-gradient solve for `H·p = -g`.
    ///
    /// Each inner iteration costs one Hessian-vector product. Errors from
    /// the product (analytic failures, non-finite finite-difference
    /// results) abort the outer run.
    fn compute(&mut self, ctx: &Context, fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad> {
        let g = ctx.g();
        let g_norm = g.dot(g).sqrt();
        let tol = f64::min(0.5, g_norm.sqrt()) * g_norm;

        let mut p = Point::zeros(g.len());
        let mut r = g.mapv(f64::neg);
        let mut d = r.clone();
        let mut rr = r.dot(&r);
        for inner in 0..self.max_inner {
            if rr.sqrt() < tol {
                break;
            }
            let hd = fun.hessian_vec(ctx.x(), &d)?;
            let dhd = d.dot(&hd);
            if dhd <= 0.0 {
                if inner == 0 {
                    return Ok(g.mapv(f64::neg));
                }
                break;
            }
            let step = rr / dhd;
            p.scaled_add(step, &d);
            r.scaled_add(-step, &hd);
            let rr_next = r.dot(&r);
            let beta = rr_next / rr;
            rr = rr_next;
            d *= beta;
            d += &r;
        }

        Ok(p)
    }

    /// The inner solve consumes Hessian-vector products.
    fn requires_hessian_vec(&self) -> bool {
        true
    }
}
