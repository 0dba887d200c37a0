//! minimize — generic unconstrained nonlinear minimization engine.
//!
//! Purpose
//! -------
//! Minimize a smooth function `f: ℝᴺ → ℝ` given only a joint
//! value-and-gradient oracle, with every algorithmic ingredient behind a
//! swappable strategy seam. The engine was built for maximum-likelihood
//! fitting (hand it the negated log-likelihood), but nothing in it knows
//! about likelihoods: any objective implementing [`Objective`] works.
//!
//! Key behaviors
//! -------------
//! - Five direction strategies in [`direction`]: steepest descent,
//!   Polak–Ribière conjugate gradient, dense BFGS, limited-memory BFGS
//!   (the default), and Hessian-free truncated Newton.
//! - A strong Wolfe–Powell line search in [`line_search`] with a
//!   doubling bracket, cubic-interpolation zoom, and a shared trial
//!   budget; its failure is a terminal state, not an error.
//! - Stopping criteria in [`stopping`] (gradient norm, value change,
//!   parameter change) with strict thresholds, and evaluation models in
//!   [`model`] for deterministic versus resampling objectives.
//! - An instrumented function wrapper in [`wrapper`] counting value,
//!   gradient, Hessian-vector, and datapoint usage, with analytic or
//!   centered-difference Hessian-vector products.
//! - A driver in [`run`] sequencing one complete run, with an iterate
//!   trace callback and a pluggable per-iteration sink ([`logging`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - The engine minimizes; maximum-likelihood callers negate.
//! - Strategy state lives between `init` and `clean`; the driver pairs
//!   them exactly once per run on every exit path, so caller-owned
//!   strategies are reusable.
//! - Every direction handed to the line search is a descent direction:
//!   the driver substitutes steepest descent whenever a strategy's
//!   proposal fails the `dot(p, g) < 0` check.
//! - Starting points, configuration, and model-driven re-evaluations are
//!   validated; mid-search trial points are deliberately not, because a
//!   non-finite trial value is bracketing information for the zoom.
//! - One run owns its state exclusively; instances are not shared across
//!   threads mid-run.
//!
//! Conventions
//! -----------
//! - Vectors are `ndarray::Array1<f64>` under the [`types`] aliases
//!   ([`Point`], [`Grad`]); costs are `f64` ([`Cost`]).
//! - Fallible operations return [`MinimizeResult`]; panics indicate
//!   programming errors (dimension mismatches inside the engine), not
//!   bad user input.
//! - Termination is reported as data ([`TerminationCause`]), never as an
//!   error; inspect it before trusting a result.
//!
//! Downstream usage
//! ----------------
//! - Implement [`Objective`] for your function, then call [`minimize`]
//!   with a [`MinimizeOptions`] bundle; use [`minimize_traced`] for an
//!   iterate trace or [`minimize_with`] to supply a caller-owned
//!   direction strategy.
//! - Embedders needing full control (custom criteria, custom sinks,
//!   reusable wrappers) call [`drive`] directly with concrete strategy
//!   instances.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each component: strategy numerics in
//!   [`direction`], Wolfe acceptance and zoom behavior in
//!   [`line_search`], driver mechanics with probe strategies in [`run`].
//! - Integration tests run the shipped strategies end to end on convex
//!   and nonconvex benchmark problems.

pub mod api;
pub mod builders;
pub mod context;
pub mod direction;
pub mod errors;
pub(crate) mod finite_diff;
pub mod line_search;
pub mod logging;
pub mod model;
pub mod run;
pub mod stopping;
pub mod traits;
pub mod types;
pub mod validation;
pub mod wrapper;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::{minimize, minimize_traced, minimize_with};
pub use self::builders::{build_direction, build_model, build_stopping};
pub use self::context::Context;
pub use self::direction::{Bfgs, ConjugateGradient, Lbfgs, Steepest, TruncatedNewton};
pub use self::errors::{MinimizeError, MinimizeResult};
pub use self::line_search::{LineSearchResult, StrongWolfe};
pub use self::logging::{ConsoleSink, IterationRecord, IterationSink};
pub use self::model::{Deterministic, MiniBatchResampling};
pub use self::run::drive;
pub use self::stopping::{GradientNorm, ParameterChange, ValueChange};
pub use self::traits::{
    Direction, DirectionSpec, EvaluationModel, LineSearchOptions, MinimizeOptions,
    MinimizeOutcome, ModelSpec, Objective, StoppingCriterion, StoppingSpec,
};
pub use self::types::{
    Cost, DEFAULT_GRAD_THRESHOLD, DEFAULT_LBFGS_MEM, DEFAULT_MAX_ITER, DEFAULT_TN_MAX_INNER,
    EvalCounts, Grad, Hessian, HvComputation, Point, TerminationCause,
};
pub use self::wrapper::FunctionWrapper;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use uncmin::minimize::prelude::*;
//
// to import the main engine surface in a single line.

pub mod prelude {
    pub use super::api::{minimize, minimize_traced, minimize_with};
    pub use super::errors::{MinimizeError, MinimizeResult};
    pub use super::traits::{
        DirectionSpec, LineSearchOptions, MinimizeOptions, MinimizeOutcome, ModelSpec, Objective,
        StoppingSpec,
    };
    pub use super::types::{Cost, Grad, HvComputation, Point, TerminationCause};
}
