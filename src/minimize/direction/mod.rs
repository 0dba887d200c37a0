//! direction — descent-direction strategies for the minimization engine.
//!
//! Purpose
//! -------
//! Collect the built-in implementations of the [`Direction`] strategy
//! trait: steepest descent, Polak–Ribière conjugate gradient, dense BFGS,
//! limited-memory BFGS, and Hessian-free truncated Newton. The driver
//! treats all of them uniformly through the trait; nothing in this module
//! touches the iterate, the objective value, or the step length.
//!
//! Key behaviors
//! -------------
//! - Every strategy degenerates to steepest descent on the first
//!   iteration: the quasi-Newton methods start from an identity model
//!   with no history, conjugate gradient restarts at iteration zero, and
//!   truncated Newton solves its inner system from a zero initial point.
//!   No separate warm-up phase exists anywhere in the engine.
//! - Strategies with per-run state ([`Bfgs`], [`Lbfgs`]) allocate it in
//!   `init(n)` and release it in `clean()`; the stateless ones
//!   ([`Steepest`], [`ConjugateGradient`], [`TruncatedNewton`]) treat
//!   both as no-ops.
//! - Only [`TruncatedNewton`] reports `requires_hessian_vec() == true`
//!   and consumes Hessian-vector products through the function wrapper;
//!   the other strategies never call back into the objective.
//!
//! Invariants & assumptions
//! ------------------------
//! - `compute` reads the context through a shared reference and returns
//!   a freshly owned direction vector of dimension `ctx.dim()`.
//! - Proposed directions need not be descent directions: the driver
//!   checks `dot(p, g) < 0` itself and substitutes steepest descent for
//!   the iteration when the check fails. Strategies only promise their
//!   defining formulas.
//! - Quasi-Newton curvature updates are applied only when `dot(s, y) > 0`
//!   for the step `s = x − x_prev` and gradient change `y = g − g_prev`;
//!   non-positive curvature leaves the stored model untouched. At
//!   iteration zero `s` is the zero vector, so the skip rule also covers
//!   the fresh-start case without special-casing the counter.
//!
//! Conventions
//! -----------
//! - Directions are returned as owned [`Grad`] vectors; negation of a
//!   borrowed gradient is written `g.mapv(f64::neg)`.
//! - Constructors with a size parameter ([`Lbfgs::new`],
//!   [`TruncatedNewton::new`]) validate it and return
//!   [`MinimizeResult`]; the zero-parameter strategies implement
//!   [`Default`].
//!
//! Downstream usage
//! ----------------
//! - `builders::build_direction` maps a [`DirectionSpec`] to a boxed
//!   strategy from this module.
//! - Callers that tune or replace strategies between runs hold a concrete
//!   instance themselves and enter the engine through `minimize_with`.
//!
//! [`Direction`]: crate::minimize::traits::Direction
//! [`DirectionSpec`]: crate::minimize::traits::DirectionSpec
//! [`Grad`]: crate::minimize::types::Grad
//! [`MinimizeResult`]: crate::minimize::errors::MinimizeResult

pub mod bfgs;
pub mod conjugate_gradient;
pub mod lbfgs;
pub mod steepest;
pub mod truncated_newton;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::bfgs::Bfgs;
pub use self::conjugate_gradient::ConjugateGradient;
pub use self::lbfgs::Lbfgs;
pub use self::steepest::Steepest;
pub use self::truncated_newton::TruncatedNewton;
