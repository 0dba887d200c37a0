//! Polak–Ribière nonlinear conjugate gradient with automatic restarts.
//!
//! The update is `p = -g + β·p_prev` with
//! `β = dot(g, g - g_prev) / dot(g_prev, g_prev)`. The strategy restarts
//! to plain steepest descent whenever conjugacy information is absent or
//! unusable: at iteration zero, when `β ≤ 0` (the PR⁺ rule), and when the
//! previous gradient is the zero vector. All state it needs lives in the
//! context, so the strategy itself is stateless.
use std::ops::Neg;

use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{Direction, Objective},
    types::Grad,
    wrapper::FunctionWrapper,
};

/// Polak–Ribière conjugate-gradient direction strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConjugateGradient;

impl ConjugateGradient {
    /// Create a conjugate-gradient strategy.
    pub fn new() -> Self {
        ConjugateGradient
    }
}

impl<O: Objective> Direction<O> for ConjugateGradient {
    /// No per-run state to allocate.
    fn init(&mut self, _n: usize) -> MinimizeResult<()> {
        Ok(())
    }

    /// No per-run state to release.
    fn clean(&mut self) {}

    /// Return the conjugate direction, restarting with `-g` when the
    /// Polak–Ribière coefficient is undefined or non-positive.
    fn compute(&mut self, ctx: &Context, _fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad> {
        let g = ctx.g();
        if ctx.iter() == 0 {
            return Ok(g.mapv(f64::neg));
        }

        let g_prev = ctx.g_prev();
        let denom = g_prev.dot(g_prev);
        if denom == 0.0 {
            return Ok(g.mapv(f64::neg));
        }

        let beta = g.dot(&(g - g_prev)) / denom;
        if beta <= 0.0 {
            return Ok(g.mapv(f64::neg));
        }

        Ok(ctx.p() * beta - g)
    }
}
