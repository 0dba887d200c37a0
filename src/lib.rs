//! uncmin — generic unconstrained nonlinear minimization.
//!
//! Purpose
//! -------
//! Serve as the crate root for the minimization engine in [`minimize`].
//! The crate minimizes smooth functions `f: ℝᴺ → ℝ` from a joint
//! value-and-gradient oracle, with pluggable direction strategies, a
//! strong Wolfe line search, swappable stopping criteria, and an
//! evaluation model for resampling objectives. It was written to fit
//! ICA-style maximum-likelihood models (minimize the negated
//! log-likelihood), but carries no domain assumptions beyond smoothness.
//!
//! Key behaviors
//! -------------
//! - Expose the engine as the single public module [`minimize`], whose
//!   re-exported surface ([`minimize::minimize`],
//!   [`minimize::MinimizeOptions`], [`minimize::Objective`], ...) is the
//!   intended entry point.
//! - Keep all numerical work behind strategy traits so embedders can
//!   swap directions, stopping rules, and evaluation models without
//!   touching the driver.
//!
//! Conventions
//! -----------
//! - Parameter vectors are `ndarray::Array1<f64>`; derivatives follow
//!   the aliases in [`minimize::types`].
//! - Fallible operations return [`minimize::MinimizeResult`];
//!   termination reasons are data, not errors.
//!
//! Downstream usage
//! ----------------
//! - Implement [`minimize::Objective`] and call [`minimize::minimize`],
//!   or import `uncmin::minimize::prelude::*` for the one-line surface.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each component under [`minimize`];
//!   integration tests in `tests/` run the shipped strategies end to end
//!   on benchmark problems.

pub mod minimize;
