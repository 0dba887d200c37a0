//! minimize::types — shared numeric aliases, counters, and termination types.
//!
//! Purpose
//! -------
//! Centralize the core numeric types, evaluation counters, and
//! termination vocabulary used by the minimization engine. By defining
//! these in one place, the rest of the engine stays agnostic to
//! `ndarray` specifics and the public surface shares one set of names.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for iterates, gradients, dense curvature
//!   matrices, and scalar costs (`Point`, `Grad`, `Hessian`, `Cost`).
//! - Provide the cumulative evaluation-counter record the function
//!   wrapper maintains ([`EvalCounts`]).
//! - Enumerate the terminal states of a run ([`TerminationCause`]) and
//!   the Hessian-vector-product policies ([`HvComputation`]).
//! - Expose the engine-wide default constants (iteration cap, L-BFGS
//!   history size, Wolfe constants, thresholds).
//!
//! Invariants & assumptions
//! ------------------------
//! - All engine vectors and matrices are `ndarray` containers over
//!   `f64`.
//! - `Cost` is always a scalar `f64`; maximum-likelihood callers hand
//!   the engine a negated log-likelihood and handle sign flips
//!   themselves.
//! - Counter fields in [`EvalCounts`] only ever increase during a run;
//!   they reset only when a fresh wrapper is constructed.
//!
//! Conventions
//! -----------
//! - `Point` and `Grad` are treated conceptually as column vectors with
//!   length equal to the problem dimension `N`.
//! - `Hessian` is a dense square matrix, `N × N`, used only by the
//!   dense quasi-Newton strategy for its inverse approximation.
//! - Default constants mirror the reference configuration of the ICA
//!   fitting pipeline this engine was built for; callers override them
//!   through per-run options.
//!
//! Downstream usage
//! ----------------
//! - Engine modules import these aliases instead of referring directly
//!   to `ndarray` generics.
//! - [`EvalCounts`] appears in every [`MinimizeOutcome`] and in every
//!   iteration-sink record.
//! - [`TerminationCause`] is the value callers must inspect before
//!   trusting a returned iterate as converged.
//!
//! [`MinimizeOutcome`]: crate::minimize::traits::MinimizeOutcome
//!
//! Testing notes
//! -------------
//! - This module defines aliases, plain data, and constants; dedicated
//!   tests cover only the `Display` wording. Everything else is
//!   exercised by the driver and strategy tests.
use ndarray::{Array1, Array2};

/// Iterate `x` in ℝᴺ.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the engine.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)`.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Point`.
pub type Grad = Array1<f64>;

/// Dense curvature matrix for second-order information.
///
/// Alias for `ndarray::Array2<f64>`; `n × n` for `n = Point.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value.
pub type Cost = f64;

// ---- Defaults ----

/// Default cap on outer iterations.
pub const DEFAULT_MAX_ITER: usize = 200;

/// Default history size (`m`) for the limited-memory quasi-Newton
/// strategy.
pub const DEFAULT_LBFGS_MEM: usize = 16;

/// Default gradient-norm stopping threshold.
pub const DEFAULT_GRAD_THRESHOLD: f64 = 1e-4;

/// Default cap on inner conjugate-gradient iterations for the truncated
/// Newton strategy.
pub const DEFAULT_TN_MAX_INNER: usize = 30;

/// Default sufficient-decrease constant `c1` for the strong Wolfe
/// conditions.
pub const DEFAULT_SUFFICIENT_DECREASE: f64 = 1e-4;

/// Default curvature constant `c2` for the strong Wolfe conditions.
pub const DEFAULT_CURVATURE: f64 = 0.9;

/// Default budget of objective evaluations per line-search invocation,
/// shared between the bracketing and zoom phases.
pub const DEFAULT_TRIAL_BUDGET: usize = 40;

// ---- Counters ----

/// Cumulative evaluation counters for one minimization run.
///
/// Maintained by the function wrapper; every field is monotone over the
/// run. On the finite-difference Hessian-vector path, the interior
/// gradient evaluations count toward `value`/`gradient` as well, since
/// they are real objective evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounts {
    /// Objective-value evaluations.
    pub value: u64,
    /// Gradient evaluations.
    pub gradient: u64,
    /// Hessian-vector products (analytic or finite-difference).
    pub hessian_vec: u64,
    /// Datapoints accessed, as reported by the objective per joint
    /// evaluation; 0 for objectives without a data notion.
    pub datapoints: u64,
}

// ---- Termination ----

/// Terminal state of a minimization run.
///
/// `StoppingCriterion` and `MaxIterationReached` are both successful
/// completions; `LineSearchFailed` returns the best point found so far
/// and must be inspected before trusting convergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationCause {
    /// The line search could not find a step satisfying both Wolfe
    /// conditions within its trial budget.
    LineSearchFailed,
    /// The active stopping criterion was satisfied after an accepted
    /// step.
    StoppingCriterion,
    /// The configured iteration cap was reached.
    MaxIterationReached,
}

impl std::fmt::Display for TerminationCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationCause::LineSearchFailed => write!(f, "line search failed"),
            TerminationCause::StoppingCriterion => write!(f, "stopping criterion satisfied"),
            TerminationCause::MaxIterationReached => write!(f, "maximum iterations reached"),
        }
    }
}

// ---- Hessian-vector policy ----

/// How the function wrapper computes Hessian-vector products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HvComputation {
    /// Use the objective's own `hessian_vec` implementation.
    Analytic,
    /// Approximate `H·v` with a centered finite-difference stencil on
    /// the gradient.
    #[default]
    CenteredDifference,
}
