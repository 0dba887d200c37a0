//! Limited-memory BFGS via the two-loop recursion.
//!
//! Instead of a dense inverse-Hessian estimate the strategy keeps the
//! last `m` curvature pairs `(s, y, ρ)` with `s = x − x_prev`,
//! `y = g − g_prev`, and `ρ = 1 / dot(s, y)` in a FIFO deque, and
//! reconstructs `p = -H·g` implicitly with the standard two-loop
//! recursion. The implicit initial estimate is `γ·I` with
//! `γ = dot(s, y) / dot(y, y)` taken from the newest stored pair, so
//! the direction scale tracks the local curvature without any dense
//! algebra. Pairs with `dot(s, y) ≤ 0` are never stored; with an empty
//! history the direction is plain `-g`.
//!
//! Work and memory are `O(m·N)` per iteration, which is why this is the
//! default strategy.
use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{Direction, Objective},
    types::{Grad, Point},
    validation::verify_lbfgs_mem,
    wrapper::FunctionWrapper,
};
use std::collections::VecDeque;
use std::ops::Neg;

/// Limited-memory BFGS direction strategy.
#[derive(Debug, Clone)]
pub struct Lbfgs {
    /// Maximum number of stored curvature pairs.
    memory: usize,
    /// Stored `(s, y, ρ)` pairs, oldest at the front.
    pairs: VecDeque<(Point, Grad, f64)>,
}

impl Lbfgs {
    /// Create a limited-memory BFGS strategy holding up to `memory`
    /// curvature pairs.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidLbfgsMem`] if `memory == 0`.
    ///
    /// [`MinimizeError::InvalidLbfgsMem`]: crate::minimize::errors::MinimizeError::InvalidLbfgsMem
    pub fn new(memory: usize) -> MinimizeResult<Self> {
        verify_lbfgs_mem(memory)?;
        Ok(Self { memory, pairs: VecDeque::with_capacity(memory) })
    }

    /// Maximum number of stored curvature pairs.
    pub fn memory(&self) -> usize {
        self.memory
    }
}

impl<O: Objective> Direction<O> for Lbfgs {
    /// Start the run with an empty history.
    fn init(&mut self, _n: usize) -> MinimizeResult<()> {
        self.pairs.clear();
        Ok(())
    }

    /// Drop the stored curvature pairs.
    fn clean(&mut self) {
        self.pairs.clear();
    }

    /// Fold the last accepted step into the history, then return the
    /// two-loop direction.
    ///
    /// At iteration zero `s` is the zero vector, so nothing is stored
    /// and the direction degenerates to `-g`.
    fn compute(&mut self, ctx: &Context, _fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad> {
        let s = ctx.x() - ctx.x_prev();
        let y = ctx.g() - ctx.g_prev();
        let sy = s.dot(&y);
        if sy > 0.0 {
            self.pairs.push_back((s, y, 1.0 / sy));
            if self.pairs.len() > self.memory {
                self.pairs.pop_front();
            }
        }

        // `sy > 0` for every stored pair, so the γ denominator is
        // nonzero.
        let gamma = match self.pairs.back() {
            Some((s_new, y_new, _)) => s_new.dot(y_new) / y_new.dot(y_new),
            None => return Ok(ctx.g().mapv(f64::neg)),
        };

        let mut q = ctx.g().to_owned();
        let mut alphas = Vec::with_capacity(self.pairs.len());
        for (s, y, rho) in self.pairs.iter().rev() {
            let alpha = rho * s.dot(&q);
            q.scaled_add(-alpha, y);
            alphas.push(alpha);
        }
        q *= gamma;
        for ((s, y, rho), alpha) in self.pairs.iter().zip(alphas.iter().rev()) {
            let beta = rho * y.dot(&q);
            q.scaled_add(alpha - beta, s);
        }

        Ok(-q)
    }
}
