//! Public API surface for unconstrained minimization.
//!
//! - [`Objective`]: trait users implement for their function.
//! - [`Direction`], [`StoppingCriterion`], [`EvaluationModel`]: the three
//!   strategy seams of the engine.
//! - [`DirectionSpec`], [`StoppingSpec`], [`ModelSpec`],
//!   [`LineSearchOptions`], [`MinimizeOptions`]: configuration.
//! - [`MinimizeOutcome`]: normalized result returned by the high-level
//!   `minimize` API.
//!
//! Convention: the engine *minimizes*. Maximum-likelihood callers hand it
//! the negated log-likelihood as the cost and flip signs themselves.
use crate::minimize::{
    context::Context,
    errors::{MinimizeError, MinimizeResult},
    types::{
        Cost, EvalCounts, Grad, HvComputation, Point, TerminationCause, DEFAULT_CURVATURE,
        DEFAULT_GRAD_THRESHOLD, DEFAULT_LBFGS_MEM, DEFAULT_MAX_ITER,
        DEFAULT_SUFFICIENT_DECREASE, DEFAULT_TN_MAX_INNER, DEFAULT_TRIAL_BUDGET,
    },
    validation::{verify_max_iter, verify_trial_budget, verify_wolfe},
    wrapper::FunctionWrapper,
};

/// User-implemented objective interface.
///
/// The engine calls the objective only through the instrumented function
/// wrapper; the objective holds no iteration state.
///
/// Required:
/// - `value_grad(&mut self, &Point) -> MinimizeResult<(Cost, Grad)>`:
///   jointly evaluate the objective value and its gradient at `x`. Under
///   the deterministic evaluation model this must be referentially
///   transparent for a fixed `x`; stochastic objectives may resample
///   internally and pair with the resampling model.
///
/// Optional:
/// - `hessian_vec(&mut self, &Point, &Point) -> MinimizeResult<Grad>`:
///   analytic Hessian-vector product `H(x)·v`. Implementations must also
///   override `supports_hessian_vec` to return `true`; the default
///   returns [`MinimizeError::HessianVecNotImplemented`], which the
///   centered-difference policy never triggers.
/// - `datapoints_per_eval() -> u64`: number of datapoints one joint
///   evaluation touches, feeding the cumulative datapoints counter.
///   Defaults to 0 for objectives without a data notion.
pub trait Objective {
    // Required methods
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(Cost, Grad)>;

    // Optional methods
    fn hessian_vec(&mut self, _x: &Point, _v: &Point) -> MinimizeResult<Grad> {
        Err(MinimizeError::HessianVecNotImplemented)
    }

    fn supports_hessian_vec(&self) -> bool {
        false
    }

    fn datapoints_per_eval(&self) -> u64 {
        0
    }
}

/// Forwarding impl so callers can keep ownership of an objective across
/// repeated runs (outer refinement loops re-entering the engine with the
/// same objective).
impl<O: Objective + ?Sized> Objective for &mut O {
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(Cost, Grad)> {
        (**self).value_grad(x)
    }

    fn hessian_vec(&mut self, x: &Point, v: &Point) -> MinimizeResult<Grad> {
        (**self).hessian_vec(x, v)
    }

    fn supports_hessian_vec(&self) -> bool {
        (**self).supports_hessian_vec()
    }

    fn datapoints_per_eval(&self) -> u64 {
        (**self).datapoints_per_eval()
    }
}

/// Descent-direction strategy.
///
/// Contract:
/// - `init(n)` allocates per-run state for dimension `n`; called exactly
///   once before the first `compute` of a run.
/// - `compute(&Context, &mut FunctionWrapper)` returns a candidate
///   direction using the context's current/previous gradients and
///   iterates, the previous direction still stored in the context, and
///   internal history. The shared `&Context` receiver makes mutating the
///   iterate or the objective value impossible by construction. The
///   wrapper is available for strategies that consume Hessian-vector
///   products.
/// - `clean()` releases and fully resets per-run state; called exactly
///   once on every exit path, so a caller-owned instance can be reused
///   for a later run.
/// - `requires_hessian_vec()` advertises whether `compute` calls
///   `FunctionWrapper::hessian_vec`; the driver and the console sink
///   consume this capability query instead of inspecting concrete types.
///
/// The driver checks `dot(p, g) < 0` on every proposed direction and
/// substitutes steepest descent for the iteration when the check fails;
/// implementations therefore do not need their own descent guarantees
/// beyond their defining formulas.
pub trait Direction<O: Objective> {
    fn init(&mut self, n: usize) -> MinimizeResult<()>;

    fn clean(&mut self);

    fn compute(&mut self, ctx: &Context, fun: &mut FunctionWrapper<O>) -> MinimizeResult<Grad>;

    fn requires_hessian_vec(&self) -> bool {
        false
    }
}

/// Convergence predicate, evaluated after each accepted step.
///
/// Exactly one criterion is active per run; compose by implementing this
/// trait on a combinator type. `init`/`clean` default to no-ops because
/// the provided criteria hold no per-run buffers.
pub trait StoppingCriterion {
    fn init(&mut self, _n: usize) -> MinimizeResult<()> {
        Ok(())
    }

    fn clean(&mut self) {}

    fn is_met(&self, ctx: &Context) -> bool;
}

/// Evaluation model deciding when value/gradient must be recomputed at an
/// accepted point.
///
/// Queried exactly once per accepted step. Deterministic objectives never
/// need recomputation (the line search already evaluated the accepted
/// point); resampling objectives always do, because the sample changes
/// between steps.
pub trait EvaluationModel {
    fn update(&mut self, ctx: &Context) -> bool;
}

/// Choice of descent-direction strategy.
///
/// Variants carry their strategy-specific sizes; validation happens when
/// the concrete strategy is constructed from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionSpec {
    /// `p = -g`.
    Steepest,
    /// Polak–Ribière conjugate gradient with automatic restarts.
    ConjugateGradient,
    /// Dense inverse-Hessian quasi-Newton.
    Bfgs,
    /// Limited-memory quasi-Newton with the given history size.
    Lbfgs { memory: usize },
    /// Hessian-free truncated Newton with the given inner-CG cap.
    TruncatedNewton { max_inner: usize },
}

impl DirectionSpec {
    /// Limited-memory quasi-Newton with the default history size.
    pub fn lbfgs_default() -> Self {
        DirectionSpec::Lbfgs { memory: DEFAULT_LBFGS_MEM }
    }

    /// Truncated Newton with the default inner-CG cap.
    pub fn truncated_newton_default() -> Self {
        DirectionSpec::TruncatedNewton { max_inner: DEFAULT_TN_MAX_INNER }
    }
}

impl Default for DirectionSpec {
    fn default() -> Self {
        DirectionSpec::lbfgs_default()
    }
}

/// Choice of stopping criterion and its threshold.
///
/// Thresholds must be finite and non-negative; zero is legal and never
/// satisfiable (the comparisons are strict), which forces termination
/// through the iteration cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoppingSpec {
    /// Terminate when `‖g‖ < threshold`.
    GradientNorm { threshold: f64 },
    /// Terminate when `|val - val_prev| < threshold`.
    ValueChange { threshold: f64 },
    /// Terminate when `‖x - x_prev‖ < threshold`.
    ParameterChange { threshold: f64 },
}

impl Default for StoppingSpec {
    fn default() -> Self {
        StoppingSpec::GradientNorm { threshold: DEFAULT_GRAD_THRESHOLD }
    }
}

/// Choice of evaluation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSpec {
    /// Never recompute after an accepted step.
    #[default]
    Deterministic,
    /// Recompute after every accepted step (the objective resamples).
    MiniBatchResampling,
}

/// Strong Wolfe line-search constants and evaluation budget.
///
/// Fields:
/// - `c1` — sufficient-decrease constant.
/// - `c2` — curvature constant; `0 < c1 < c2 < 1`.
/// - `trial_budget` — objective evaluations allowed per invocation,
///   shared between the bracketing and zoom phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearchOptions {
    pub c1: f64,
    pub c2: f64,
    pub trial_budget: usize,
}

impl LineSearchOptions {
    /// Construct validated line-search options.
    ///
    /// # Errors
    /// - [`MinimizeError::InvalidWolfeConstants`] unless `0 < c1 < c2 < 1`.
    /// - [`MinimizeError::InvalidTrialBudget`] if the budget is zero.
    pub fn new(c1: f64, c2: f64, trial_budget: usize) -> MinimizeResult<Self> {
        verify_wolfe(c1, c2)?;
        verify_trial_budget(trial_budget)?;
        Ok(Self { c1, c2, trial_budget })
    }
}

impl Default for LineSearchOptions {
    fn default() -> Self {
        Self {
            c1: DEFAULT_SUFFICIENT_DECREASE,
            c2: DEFAULT_CURVATURE,
            trial_budget: DEFAULT_TRIAL_BUDGET,
        }
    }
}

/// Engine-level configuration.
///
/// Fields:
/// - `direction: DirectionSpec` — descent-direction strategy.
/// - `stopping: StoppingSpec` — convergence predicate.
/// - `model: ModelSpec` — evaluation model.
/// - `max_iter: usize` — hard cap on outer iterations.
/// - `verbosity: u32` — 0 is silent; any level ≥ 1 attaches the console
///   iteration sink.
/// - `hessian_vec: HvComputation` — Hessian-vector-product policy.
/// - `line_search: LineSearchOptions` — Wolfe constants and budget.
///
/// Default:
/// - L-BFGS with history 16, gradient-norm threshold `1e-4`,
///   deterministic model, `max_iter = 200`, silent, centered-difference
///   Hessian-vector products, Wolfe constants `1e-4`/`0.9`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeOptions {
    pub direction: DirectionSpec,
    pub stopping: StoppingSpec,
    pub model: ModelSpec,
    pub max_iter: usize,
    pub verbosity: u32,
    pub hessian_vec: HvComputation,
    pub line_search: LineSearchOptions,
}

impl MinimizeOptions {
    /// Create a new set of engine options.
    ///
    /// Strategy-specific sizes inside `direction` and thresholds inside
    /// `stopping` are validated later, when the concrete instances are
    /// built; this constructor checks the fields it owns.
    ///
    /// # Errors
    /// Returns [`MinimizeError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        direction: DirectionSpec, stopping: StoppingSpec, model: ModelSpec, max_iter: usize,
        verbosity: u32, hessian_vec: HvComputation, line_search: LineSearchOptions,
    ) -> MinimizeResult<Self> {
        verify_max_iter(max_iter)?;
        Ok(Self { direction, stopping, model, max_iter, verbosity, hessian_vec, line_search })
    }
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            direction: DirectionSpec::default(),
            stopping: StoppingSpec::default(),
            model: ModelSpec::default(),
            max_iter: DEFAULT_MAX_ITER,
            verbosity: 0,
            hessian_vec: HvComputation::default(),
            line_search: LineSearchOptions::default(),
        }
    }
}

/// Canonical result returned by the run entry points.
///
/// - `x`: final iterate (the best point found so far when the line
///   search failed).
/// - `cost`: objective value at `x`.
/// - `iterations`: outer iterations performed; equals `max_iter` when the
///   cap was reached, and reports the pre-increment index when the
///   stopping criterion fired.
/// - `counts`: cumulative evaluation counters from the function wrapper.
/// - `cause`: terminal state; inspect before trusting convergence.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeOutcome {
    pub x: Point,
    pub cost: Cost,
    pub iterations: usize,
    pub counts: EvalCounts,
    pub cause: TerminationCause,
}

impl MinimizeOutcome {
    /// Whether the run terminated because the stopping criterion was
    /// satisfied.
    pub fn converged(&self) -> bool {
        matches!(self.cause, TerminationCause::StoppingCriterion)
    }
}
