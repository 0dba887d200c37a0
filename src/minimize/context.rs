//! Optimization context — the mutable per-run iteration state.
//!
//! Purpose
//! -------
//! Hold every piece of state the engine carries between iterations: the
//! current and previous iterate, gradient, and objective value, the
//! search direction with its directional derivative, the accepted step
//! length, and the iteration counter. One `Context` is exclusively owned
//! by one minimization run.
//!
//! Key behaviors
//! -------------
//! - Construct from an initial guess; all vectors are length `N` for the
//!   run's lifetime.
//! - Expose read/write accessors for every state field, so direction
//!   strategies, the line search, stopping criteria, and tests all
//!   operate on the same named state.
//! - Perform the accept-time shift (`x → x_prev`, `g → g_prev`,
//!   `val → val_prev`, adopt the line-search best point) as one atomic
//!   method; no partially shifted state is ever observable.
//!
//! Invariants & assumptions
//! ------------------------
//! - After each accepted step, `x`/`g`/`val` describe the new iterate
//!   and `x_prev`/`g_prev`/`val_prev` the prior one, consistently.
//! - `dphi_0` is recomputed as `dot(p, g)` immediately after a direction
//!   strategy runs and before the line search reads it; it is never
//!   stale.
//! - The driver sets the initial `val`/`g` from the first evaluation
//!   before the first iteration; the zero-filled construction values are
//!   never read.
//!
//! Conventions
//! -----------
//! - Accessors are named after the state they expose (`x`, `g`,
//!   `x_prev`, …) with `set_*` writers; vector writers take ownership to
//!   avoid hidden copies.
//! - The iteration counter counts *accepted* outer iterations and is
//!   only advanced by the driver.
//!
//! Downstream usage
//! ----------------
//! - Direction strategies read gradients and the previous direction
//!   through `&Context`.
//! - The line search reads `x`, `val`, `p`, `dphi_0` and returns a
//!   result the driver feeds back via [`Context::accept`].
//! - Stopping criteria compare current and previous state.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the accept shift and counter advance; accessor
//!   behavior is exercised throughout the strategy and driver tests.
use crate::minimize::{
    line_search::LineSearchResult,
    types::{Cost, Grad, Point},
};
use ndarray::Array1;

/// Mutable iteration state for one minimization run.
#[derive(Debug, Clone)]
pub struct Context {
    x: Point,
    g: Grad,
    x_prev: Point,
    g_prev: Grad,
    p: Grad,
    val: Cost,
    val_prev: Cost,
    dphi_0: f64,
    alpha: f64,
    iter: usize,
}

impl Context {
    /// Create the state for a run starting at `x0`.
    ///
    /// Gradients, the direction, and the previous iterate start zeroed
    /// (previous iterate: copy of `x0`); the driver overwrites them from
    /// the first evaluation before any component reads them.
    pub fn new(x0: Point) -> Self {
        let n = x0.len();
        Self {
            x_prev: x0.clone(),
            g: Array1::zeros(n),
            g_prev: Array1::zeros(n),
            p: Array1::zeros(n),
            x: x0,
            val: 0.0,
            val_prev: 0.0,
            dphi_0: 0.0,
            alpha: 0.0,
            iter: 0,
        }
    }

    /// Problem dimension `N`.
    pub fn dim(&self) -> usize {
        self.x.len()
    }

    // ---- Current point ----

    /// Current iterate.
    pub fn x(&self) -> &Point {
        &self.x
    }

    /// Replace the current iterate.
    pub fn set_x(&mut self, x: Point) {
        self.x = x;
    }

    /// Gradient at the current iterate.
    pub fn g(&self) -> &Grad {
        &self.g
    }

    /// Replace the current gradient.
    pub fn set_g(&mut self, g: Grad) {
        self.g = g;
    }

    /// Objective value at the current iterate.
    pub fn val(&self) -> Cost {
        self.val
    }

    /// Replace the current objective value.
    pub fn set_val(&mut self, val: Cost) {
        self.val = val;
    }

    // ---- Previous point ----

    /// Iterate before the last accepted step.
    pub fn x_prev(&self) -> &Point {
        &self.x_prev
    }

    /// Replace the previous iterate.
    pub fn set_x_prev(&mut self, x_prev: Point) {
        self.x_prev = x_prev;
    }

    /// Gradient before the last accepted step.
    pub fn g_prev(&self) -> &Grad {
        &self.g_prev
    }

    /// Replace the previous gradient.
    pub fn set_g_prev(&mut self, g_prev: Grad) {
        self.g_prev = g_prev;
    }

    /// Objective value before the last accepted step.
    pub fn val_prev(&self) -> Cost {
        self.val_prev
    }

    /// Replace the previous objective value.
    pub fn set_val_prev(&mut self, val_prev: Cost) {
        self.val_prev = val_prev;
    }

    // ---- Search direction & step ----

    /// Current search direction.
    pub fn p(&self) -> &Grad {
        &self.p
    }

    /// Replace the search direction.
    pub fn set_p(&mut self, p: Grad) {
        self.p = p;
    }

    /// Directional derivative `dot(p, g)` at the step origin.
    pub fn dphi_0(&self) -> f64 {
        self.dphi_0
    }

    /// Replace the directional derivative.
    pub fn set_dphi_0(&mut self, dphi_0: f64) {
        self.dphi_0 = dphi_0;
    }

    /// Step length accepted by the last line search.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Replace the accepted step length.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    // ---- Iteration counter ----

    /// Accepted outer iterations so far.
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Replace the iteration counter.
    pub fn set_iter(&mut self, iter: usize) {
        self.iter = iter;
    }

    /// Advance the iteration counter by one.
    pub(crate) fn advance(&mut self) {
        self.iter += 1;
    }

    /// Consume the context, yielding the current iterate.
    pub(crate) fn into_x(self) -> Point {
        self.x
    }

    /// Adopt an accepted line-search point, shifting the current state
    /// into the `*_prev` slots in the same call.
    pub(crate) fn accept(&mut self, res: LineSearchResult) {
        self.alpha = res.best_alpha;
        self.x_prev = std::mem::replace(&mut self.x, res.best_x);
        self.g_prev = std::mem::replace(&mut self.g, res.best_g);
        self.val_prev = std::mem::replace(&mut self.val, res.best_phi);
    }
}
