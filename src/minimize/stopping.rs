//! Stopping criteria — convergence predicates over the iteration state.
//!
//! Each criterion compares one piece of context state against a fixed
//! threshold with a strict `<`, so a zero threshold can never be
//! satisfied and forces termination through the iteration cap. All three
//! provided criteria are stateless between calls; their `init`/`clean`
//! hooks are the trait's default no-ops. Exactly one criterion is active
//! per run; compose by implementing [`StoppingCriterion`] on a
//! combinator type.
use crate::minimize::{
    context::Context,
    errors::MinimizeResult,
    traits::StoppingCriterion,
    types::Point,
    validation::verify_threshold,
};

fn norm_of_difference(a: &Point, b: &Point) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Terminate when the gradient norm falls below the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientNorm {
    threshold: f64,
}

impl GradientNorm {
    /// Construct with a finite, non-negative threshold.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidThreshold`] otherwise.
    ///
    /// [`MinimizeError::InvalidThreshold`]: crate::minimize::errors::MinimizeError::InvalidThreshold
    pub fn new(threshold: f64) -> MinimizeResult<Self> {
        verify_threshold(threshold)?;
        Ok(Self { threshold })
    }
}

impl StoppingCriterion for GradientNorm {
    fn is_met(&self, ctx: &Context) -> bool {
        ctx.g().dot(ctx.g()).sqrt() < self.threshold
    }
}

/// Terminate when the objective value stops changing between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    threshold: f64,
}

impl ValueChange {
    /// Construct with a finite, non-negative threshold.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidThreshold`] otherwise.
    ///
    /// [`MinimizeError::InvalidThreshold`]: crate::minimize::errors::MinimizeError::InvalidThreshold
    pub fn new(threshold: f64) -> MinimizeResult<Self> {
        verify_threshold(threshold)?;
        Ok(Self { threshold })
    }
}

impl StoppingCriterion for ValueChange {
    fn is_met(&self, ctx: &Context) -> bool {
        (ctx.val() - ctx.val_prev()).abs() < self.threshold
    }
}

/// Terminate when the iterate stops moving between steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterChange {
    threshold: f64,
}

impl ParameterChange {
    /// Construct with a finite, non-negative threshold.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidThreshold`] otherwise.
    ///
    /// [`MinimizeError::InvalidThreshold`]: crate::minimize::errors::MinimizeError::InvalidThreshold
    pub fn new(threshold: f64) -> MinimizeResult<Self> {
        verify_threshold(threshold)?;
        Ok(Self { threshold })
    }
}

impl StoppingCriterion for ParameterChange {
    fn is_met(&self, ctx: &Context) -> bool {
        norm_of_difference(ctx.x(), ctx.x_prev()) < self.threshold
    }
}
