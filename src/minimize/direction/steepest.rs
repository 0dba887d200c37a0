//! Steepest descent: `p = -g`.
//!
//! The simplest strategy and the engine's universal fallback. The driver
//! keeps a separately owned instance of this type next to whatever
//! strategy the caller configured and substitutes it for single
//! iterations whenever the configured strategy proposes a non-descent
//! direction.
use std::ops::Neg;

use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::{Direction, Objective},
    types::Grad,
    wrapper::FunctionWrapper,
};

/// Steepest-descent direction strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Steepest;

impl Steepest {
    /// Create a steepest-descent strategy.
    pub fn new() -> Self {
        Steepest
    }
}

impl<O: Objective> Direction<O> for Steepest {
    /// No per-run state to allocate.
    fn init(&mut self, _n: usize) -> MinimizeResult<()> {
        Ok(())
    }

    /// No per-run state to release.
    fn clean(&mut self) {}

    /// Return the negated current gradient.
    fn compute(&mut self, ctx: &Context, _fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad> {
        Ok(ctx.g().mapv(f64::neg))
    }
}

#[cfg(test)]
mod tests {
    // ---- Scope ----
    // These tests cover:
    // - The defining formula `p = -g`.
    // - Independence from every other piece of context state.
    //
    // They intentionally DO NOT cover:
    // - The driver's fallback substitution (see `run` tests).
    use super::*;
    use crate::minimize::types::{HvComputation, Point};
    use ndarray::array;

    struct Quad;

    impl Objective for Quad {
        fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
            Ok((0.5 * x.dot(x), x.clone()))
        }
    }

    fn wrapper() -> FunctionWrapper<Quad> {
        FunctionWrapper::new(Quad, HvComputation::CenteredDifference)
    }

    // Purpose: the strategy must return exactly the negated gradient.
    // Given: a context whose gradient is [3, -4, 0].
    // Expect: p = [-3, 4, 0].
    #[test]
    fn compute_negates_gradient() {
        // Arrange
        let mut ctx = Context::new(array![0.0, 0.0, 0.0]);
        ctx.set_g(array![3.0, -4.0, 0.0]);
        let mut strategy = Steepest::new();
        let mut fun = wrapper();

        // Act
        let p = strategy.compute(&ctx, &mut fun).expect("steepest descent cannot fail");

        // Assert
        assert_eq!(p, array![-3.0, 4.0, 0.0]);
    }

    // Purpose: history fields must not influence the direction.
    // Given: a context deep into a run, with previous gradient, previous
    // direction, and a nonzero iteration counter all populated.
    // Expect: still p = -g.
    #[test]
    fn compute_ignores_history() {
        // Arrange
        let mut ctx = Context::new(array![1.0, 1.0]);
        ctx.set_g(array![2.0, -1.0]);
        ctx.set_g_prev(array![9.0, 9.0]);
        ctx.set_p(array![-7.0, -7.0]);
        ctx.set_iter(42);
        let mut strategy = Steepest::new();
        let mut fun = wrapper();

        // Act
        let p = strategy.compute(&ctx, &mut fun).expect("steepest descent cannot fail");

        // Assert
        assert_eq!(p, array![-2.0, 1.0]);
    }
}
