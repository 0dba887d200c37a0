//! High-level entry points for minimizing a user-provided [`Objective`].
//!
//! These wrappers realize the strategy specs carried in
//! [`MinimizeOptions`], wrap the objective in the instrumented function
//! wrapper, attach the console sink when verbosity asks for it, and
//! delegate the run to [`drive`](crate::minimize::run::drive).
use crate::minimize::{
    builders::{build_direction, build_model, build_stopping},
    errors::MinimizeResult,
    logging::{ConsoleSink, IterationSink},
    run::drive,
    traits::{Direction, MinimizeOptions, MinimizeOutcome, Objective},
    types::Point,
    wrapper::FunctionWrapper,
};

/// Minimize `objective` starting from `x0`.
///
/// # Behavior
/// - Builds the direction strategy, stopping criterion, and evaluation
///   model from the specs in `opts`.
/// - Wraps the objective with the evaluation counters and the
///   Hessian-vector policy from `opts.hessian_vec`.
/// - With `opts.verbosity >= 1`, prints one progress line per iteration
///   to stderr.
/// - Runs the driver loop until a terminal state; inspect
///   [`MinimizeOutcome::cause`] (or [`MinimizeOutcome::converged`])
///   before trusting the result.
///
/// # Parameters
/// - `objective`: your function; pass `&mut obj` to keep ownership
///   across repeated runs.
/// - `x0`: initial guess, finite and non-empty.
/// - `opts`: engine configuration; `MinimizeOptions::default()` is a
///   reasonable starting point (L-BFGS, gradient-norm stopping).
///
/// # Errors
/// - Spec validation errors (strategy sizes, thresholds, Wolfe
///   constants, iteration cap).
/// - [`MinimizeError::AnalyticHessianUnavailable`] for an analytic-policy
///   run the objective cannot serve.
/// - Any error surfaced by the objective, and finiteness violations at
///   the starting point or model-driven re-evaluations.
///
/// # Returns
/// A [`MinimizeOutcome`] with the final iterate, its cost, the iteration
/// count, cumulative evaluation counters, and the termination cause.
///
/// # Example
/// ```
/// use ndarray::array;
/// use uncmin::minimize::{minimize, Grad, MinimizeOptions, MinimizeResult, Objective, Point};
///
/// struct Quadratic;
///
/// impl Objective for Quadratic {
///     fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
///         Ok((0.5 * x.dot(x), x.clone()))
///     }
/// }
///
/// let outcome = minimize(Quadratic, &array![3.0, -4.0], &MinimizeOptions::default())?;
/// assert!(outcome.converged());
/// # Ok::<(), uncmin::minimize::MinimizeError>(())
/// ```
///
/// [`MinimizeError::AnalyticHessianUnavailable`]: crate::minimize::errors::MinimizeError::AnalyticHessianUnavailable
pub fn minimize<O: Objective>(
    objective: O, x0: &Point, opts: &MinimizeOptions,
) -> MinimizeResult<MinimizeOutcome> {
    let mut direction = build_direction::<O>(&opts.direction)?;
    run_with(objective, x0, direction.as_mut(), opts, None)
}

/// Minimize with a per-iteration iterate callback.
///
/// Identical to [`minimize`], additionally invoking
/// `trace(iteration, &x)` at the top of every iteration with the
/// pre-step iterate. The starting point arrives as iteration zero; the
/// final iterate is reported through the outcome only.
///
/// # Errors
/// Same as [`minimize`].
pub fn minimize_traced<O: Objective>(
    objective: O, x0: &Point, opts: &MinimizeOptions, trace: &mut dyn FnMut(usize, &Point),
) -> MinimizeResult<MinimizeOutcome> {
    let mut direction = build_direction::<O>(&opts.direction)?;
    run_with(objective, x0, direction.as_mut(), opts, Some(trace))
}

/// Minimize with a caller-owned direction strategy.
///
/// The `direction` field of `opts` is ignored; `direction` is used as
/// given and handed back cleaned, so warm-started or custom strategies
/// can be carried across runs. Stopping criterion, evaluation model,
/// sink, and wrapper policy still come from `opts`.
///
/// # Errors
/// Same as [`minimize`], minus direction-spec validation.
pub fn minimize_with<O: Objective>(
    objective: O, x0: &Point, direction: &mut dyn Direction<O>, opts: &MinimizeOptions,
) -> MinimizeResult<MinimizeOutcome> {
    run_with(objective, x0, direction, opts, None)
}

/// Shared tail of the public entry points.
fn run_with<O: Objective>(
    objective: O, x0: &Point, direction: &mut dyn Direction<O>, opts: &MinimizeOptions,
    trace: Option<&mut dyn FnMut(usize, &Point)>,
) -> MinimizeResult<MinimizeOutcome> {
    let mut fun = FunctionWrapper::new(objective, opts.hessian_vec);
    let mut stopping = build_stopping(&opts.stopping)?;
    let mut model = build_model(&opts.model);
    let mut console = ConsoleSink::new();
    let sink: Option<&mut dyn IterationSink> =
        if opts.verbosity >= 1 { Some(&mut console) } else { None };
    drive(
        &mut fun,
        x0.clone(),
        direction,
        stopping.as_mut(),
        model.as_mut(),
        opts,
        trace,
        sink,
    )
}
