//! Instrumented function wrapper — the engine's only path to the
//! objective.
//!
//! Every objective evaluation the engine performs goes through
//! [`FunctionWrapper`], which counts value, gradient, Hessian-vector, and
//! datapoint accesses and mediates the Hessian-vector-product policy
//! (analytic vs. centered finite difference). Plain value/gradient
//! results are *not* finiteness-checked here: the line search treats
//! non-finite trial values as bracket information, so only their
//! dimension is enforced. Hessian-vector products are always validated in
//! full; the driver applies finiteness checks at the initial evaluation
//! and at model-driven recomputations.
use crate::minimize::{
    errors::{MinimizeError, MinimizeResult},
    finite_diff::central_hessian_vec,
    traits::Objective,
    types::{Cost, EvalCounts, Grad, HvComputation, Point},
    validation::validate_hessian_vec,
};

/// Wraps a user objective with evaluation counters and the
/// Hessian-vector-product policy.
///
/// - Counters are cumulative for the run and monotone; they reset only
///   when a fresh wrapper is constructed.
/// - On the finite-difference Hessian-vector path, the two interior
///   gradient evaluations also count toward the value/gradient counters,
///   since they are real objective evaluations.
/// - Under the deterministic evaluation model, the wrapper is
///   referentially transparent in its return values for a fixed `x`.
#[derive(Debug)]
pub struct FunctionWrapper<O: Objective> {
    objective: O,
    counts: EvalCounts,
    hv_policy: HvComputation,
}

impl<O: Objective> FunctionWrapper<O> {
    /// Wrap an objective under the given Hessian-vector policy.
    pub fn new(objective: O, hv_policy: HvComputation) -> Self {
        Self { objective, counts: EvalCounts::default(), hv_policy }
    }

    /// Jointly evaluate objective value and gradient at `x`.
    ///
    /// Increments the value, gradient, and datapoints counters on every
    /// successful objective call and enforces the gradient dimension.
    ///
    /// # Errors
    /// - Propagates any error from the objective's `value_grad`.
    /// - [`MinimizeError::GradientDimMismatch`] if the returned gradient
    ///   length differs from `x.len()`.
    pub fn value_grad(&mut self, x: &Point) -> MinimizeResult<(Cost, Grad)> {
        let (val, g) = self.objective.value_grad(x)?;
        self.counts.value += 1;
        self.counts.gradient += 1;
        self.counts.datapoints += self.objective.datapoints_per_eval();
        if g.len() != x.len() {
            return Err(MinimizeError::GradientDimMismatch { expected: x.len(), found: g.len() });
        }
        Ok((val, g))
    }

    /// Compute the Hessian-vector product `H(x)·v` under the active
    /// policy.
    ///
    /// Behavior:
    /// - `Analytic`: calls the objective's `hessian_vec`.
    /// - `CenteredDifference`: applies the symmetric two-point stencil on
    ///   the gradient via [`central_hessian_vec`]; the interior gradient
    ///   evaluations feed the value/gradient counters.
    ///
    /// The product is validated (dimension and finiteness) on both
    /// paths.
    ///
    /// # Errors
    /// - Propagates objective errors from either path.
    /// - [`MinimizeError::HessianVecDimMismatch`] /
    ///   [`MinimizeError::InvalidHessianVec`] from validation.
    pub fn hessian_vec(&mut self, x: &Point, v: &Point) -> MinimizeResult<Grad> {
        self.counts.hessian_vec += 1;
        let hv = match self.hv_policy {
            HvComputation::Analytic => self.objective.hessian_vec(x, v)?,
            HvComputation::CenteredDifference => {
                central_hessian_vec(&mut self.objective, &mut self.counts, x, v)?
            }
        };
        validate_hessian_vec(&hv, x.len())?;
        Ok(hv)
    }

    /// Whether the wrapped objective provides analytic Hessian-vector
    /// products.
    pub fn supports_hessian_vec(&self) -> bool {
        self.objective.supports_hessian_vec()
    }

    /// The Hessian-vector-product policy this wrapper was built with.
    pub fn hv_policy(&self) -> HvComputation {
        self.hv_policy
    }

    /// Snapshot of the cumulative evaluation counters.
    pub fn counts(&self) -> EvalCounts {
        self.counts
    }

    /// Borrow the wrapped objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Mutably borrow the wrapped objective.
    pub fn objective_mut(&mut self) -> &mut O {
        &mut self.objective
    }

    /// Unwrap the objective, discarding the counters.
    pub fn into_objective(self) -> O {
        self.objective
    }
}
