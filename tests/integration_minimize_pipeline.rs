//! Integration tests for the unconstrained minimization engine.
//!
//! Purpose
//! -------
//! - Validate the end-to-end pipeline: from an `Objective`
//!   implementation, through strategy construction and the driver loop,
//!   to outcomes with trustworthy iterates, counters, and causes.
//! - Exercise realistic strategy, stopping, and evaluation-model
//!   combinations on standard benchmark problems rather than toy edge
//!   cases only.
//!
//! Coverage
//! --------
//! - `minimize::api`:
//!   - `minimize`, `minimize_traced`, and `minimize_with` entry points.
//!   - Configuration and starting-point rejection through the public
//!     surface.
//! - `minimize::direction`:
//!   - All five shipped strategies on a convex quadratic.
//!   - Quasi-Newton strategies on the nonconvex Rosenbrock function.
//!   - Dense-vs-limited-memory BFGS agreement over the first two steps.
//! - `minimize::wrapper`:
//!   - Analytic vs centered-difference Hessian-vector policies and
//!     their counter footprints.
//! - `minimize::stopping` + `minimize::run`:
//!   - Gradient-norm, value-change, and parameter-change criteria.
//!   - Iteration-cap semantics and termination-cause reporting.
//! - `minimize::model`:
//!   - Deterministic vs resampling evaluation counts and datapoint
//!     accounting.
//!
//! Exclusions
//! ----------
//! - Fine-grained strategy numerics (update formulas, restarts,
//!   inner-CG paths) — these are covered by unit tests next to each
//!   strategy.
//! - Line-search acceptance logic and console-sink formatting — covered
//!   by unit tests in `minimize::line_search` and `minimize::logging`.
//! - Exhaustive stress testing over dimensions and conditioning grids —
//!   those belong in targeted performance and property tests.
use approx::assert_abs_diff_eq;
use ndarray::array;
use uncmin::minimize::{
    minimize, minimize_traced, minimize_with, DirectionSpec, Grad, Hessian, HvComputation, Lbfgs,
    MinimizeError, MinimizeOptions, MinimizeResult, ModelSpec, Objective, Point, StoppingSpec,
    TerminationCause,
};

/// Purpose
/// -------
/// Convex quadratic benchmark `f(x) = ½·xᵀAx` with gradient `Ax`, whose
/// unique minimizer is the origin.
///
/// Usage
/// -----
/// - Paired with `test_matrix()` for a non-axis-aligned, mildly
///   conditioned instance every strategy should solve quickly.
/// - No `hessian_vec` override, so truncated Newton runs on this
///   objective exercise the centered-difference policy.
struct Quadratic {
    a: Hessian,
}

impl Objective for Quadratic {
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
        let ax = self.a.dot(x);
        Ok((0.5 * x.dot(&ax), ax))
    }
}

/// Purpose
/// -------
/// The same convex quadratic as `Quadratic`, additionally advertising an
/// analytic Hessian-vector product `H·v = A·v`.
///
/// Usage
/// -----
/// - Lets truncated Newton run under `HvComputation::Analytic`, and
///   makes the two policies directly comparable on one problem.
struct QuadraticWithHv {
    a: Hessian,
}

impl Objective for QuadraticWithHv {
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
        let ax = self.a.dot(x);
        Ok((0.5 * x.dot(&ax), ax))
    }

    fn hessian_vec(&mut self, _x: &Point, v: &Point) -> MinimizeResult<Grad> {
        Ok(self.a.dot(v))
    }

    fn supports_hessian_vec(&self) -> bool {
        true
    }
}

/// Purpose
/// -------
/// The Rosenbrock function `f(x, y) = (1 − x)² + 100·(y − x²)²`, the
/// standard nonconvex benchmark with a curved valley and a unique
/// stationary point at `(1, 1)`.
///
/// Gradient
/// --------
/// - `∂f/∂x = −2(1 − x) − 400·x·(y − x²)`
/// - `∂f/∂y = 200·(y − x²)`
struct Rosenbrock;

impl Objective for Rosenbrock {
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
        let (u, v) = (x[0], x[1]);
        let val = (1.0 - u).powi(2) + 100.0 * (v - u * u).powi(2);
        let g = array![
            -2.0 * (1.0 - u) - 400.0 * u * (v - u * u),
            200.0 * (v - u * u),
        ];
        Ok((val, g))
    }
}

/// Purpose
/// -------
/// Sphere objective `f(x) = ½·‖x‖²` that reports a fixed per-evaluation
/// datapoint count, standing in for a batch log-likelihood.
///
/// Usage
/// -----
/// - Drives the evaluation-model and datapoint-accounting tests, where
///   the trajectory is trivial and only the counters are interesting.
struct BatchSphere;

impl Objective for BatchSphere {
    fn value_grad(&mut self, x: &Point) -> MinimizeResult<(f64, Grad)> {
        Ok((0.5 * x.dot(x), x.clone()))
    }

    fn datapoints_per_eval(&self) -> u64 {
        50_000
    }
}

/// Purpose
/// -------
/// Provide the shared quadratic instance used across tests: symmetric
/// positive definite, non-diagonal, condition number ≈ 2.6.
///
/// Returns
/// -------
/// - The matrix `[[2, 1], [1, 3]]` with eigenvalues `(5 ± √5)/2`.
///
/// Invariants
/// ----------
/// - The smallest eigenvalue exceeds 1, so a gradient norm below `1e-4`
///   pins the iterate within `1e-4` of the origin.
fn test_matrix() -> Hessian {
    array![[2.0, 1.0], [1.0, 3.0]]
}

/// Purpose
/// -------
/// Provide a baseline `MinimizeOptions` configuration for integration
/// tests, varying only the direction strategy.
///
/// Configuration
/// -------------
/// - Stopping: default gradient-norm criterion with threshold `1e-4`.
/// - Model: deterministic; Hessian-vector policy: centered difference.
/// - `max_iter = 1000`, generous enough that every shipped strategy
///   reaches the threshold on the benchmarks used here.
/// - Silent (`verbosity = 0`) so the test harness output stays clean.
fn strategy_options(direction: DirectionSpec) -> MinimizeOptions {
    MinimizeOptions { direction, max_iter: 1000, ..MinimizeOptions::default() }
}

#[test]
// Purpose
// -------
// Ensure every shipped direction strategy minimizes a smooth convex
// quadratic through the high-level API, and that evaluation counters
// reflect which strategies consume Hessian-vector products.
//
// Given
// -----
// - The quadratic `½·xᵀAx` with `A = test_matrix()`.
// - Starting point `[3, -4]`.
// - Baseline options from `strategy_options` for each of the five
//   direction specs (steepest, conjugate gradient, BFGS, L-BFGS,
//   truncated Newton).
//
// Expect
// ------
// - Every run terminates with `TerminationCause::StoppingCriterion`.
// - Final iterates land within `1e-3` of the origin with near-zero
//   cost.
// - `counts.hessian_vec` is positive for truncated Newton and exactly
//   zero for every first-order and quasi-Newton strategy.
fn all_direction_strategies_converge_on_a_convex_quadratic() {
    let strategies = [
        DirectionSpec::Steepest,
        DirectionSpec::ConjugateGradient,
        DirectionSpec::Bfgs,
        DirectionSpec::Lbfgs { memory: 16 },
        DirectionSpec::TruncatedNewton { max_inner: 30 },
    ];
    let x0 = array![3.0, -4.0];
    for spec in strategies {
        let opts = strategy_options(spec);
        let outcome = minimize(Quadratic { a: test_matrix() }, &x0, &opts)
            .expect("minimize should succeed on a smooth convex quadratic");
        assert!(outcome.converged(), "strategy {spec:?} should reach the gradient threshold");
        assert_eq!(outcome.cause, TerminationCause::StoppingCriterion);
        assert_abs_diff_eq!(outcome.x[0], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.x[1], 0.0, epsilon = 1e-3);
        assert!(outcome.cost >= 0.0 && outcome.cost < 1e-6);
        assert!(outcome.counts.value >= 1 && outcome.counts.gradient >= 1);
        if matches!(spec, DirectionSpec::TruncatedNewton { .. }) {
            assert!(outcome.counts.hessian_vec > 0, "truncated Newton should probe curvature");
        } else {
            assert_eq!(outcome.counts.hessian_vec, 0, "{spec:?} should not probe curvature");
        }
    }
}

#[test]
// Purpose
// -------
// Verify that the quasi-Newton strategies handle a curved, nonconvex
// valley, not just well-conditioned convex problems.
//
// Given
// -----
// - The Rosenbrock function from the classic starting point
//   `[-1.2, 1]`.
// - BFGS and default L-BFGS, gradient-norm threshold tightened to
//   `1e-5`, iteration cap 1000.
//
// Expect
// ------
// - Both runs converge to the unique stationary point `(1, 1)` within
//   `1e-3` per coordinate, with near-zero cost.
fn quasi_newton_strategies_minimize_rosenbrock() {
    let specs = [DirectionSpec::Bfgs, DirectionSpec::lbfgs_default()];
    let x0 = array![-1.2, 1.0];
    for spec in specs {
        let mut opts = strategy_options(spec);
        opts.stopping = StoppingSpec::GradientNorm { threshold: 1e-5 };
        let outcome = minimize(Rosenbrock, &x0, &opts)
            .expect("minimize should succeed on the Rosenbrock function");
        assert!(outcome.converged(), "strategy {spec:?} should escape the Rosenbrock valley");
        assert_abs_diff_eq!(outcome.x[0], 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.x[1], 1.0, epsilon = 1e-3);
        assert!(outcome.cost < 1e-8);
    }
}

#[test]
// Purpose
// -------
// Pin the quasi-Newton family relationship: with at most one stored
// pair, L-BFGS builds the same inverse-Hessian model as dense BFGS, so
// the first two steps of the two strategies agree.
//
// Given
// -----
// - The quadratic from `[3, -4]`, dense BFGS vs L-BFGS with history
//   size 1.
// - Two-iteration capped runs (zero threshold, never satisfiable)
//   traced through `minimize_traced`.
//
// Expect
// ------
// - The traced iterate after step one and the final iterate after step
//   two match across the strategies to floating-point tolerance.
fn lbfgs_first_two_steps_match_dense_bfgs() {
    let x0 = array![3.0, -4.0];
    let run = |spec: DirectionSpec| {
        let mut opts = strategy_options(spec);
        opts.stopping = StoppingSpec::GradientNorm { threshold: 0.0 };
        opts.max_iter = 2;
        let mut seen: Vec<Point> = Vec::new();
        let outcome = minimize_traced(Quadratic { a: test_matrix() }, &x0, &opts, &mut |_, x| {
            seen.push(x.clone())
        })
        .expect("two capped iterations should succeed");
        assert_eq!(outcome.cause, TerminationCause::MaxIterationReached);
        assert_eq!(outcome.iterations, 2);
        assert_eq!(seen.len(), 2);
        (seen, outcome.x)
    };
    let (bfgs_seen, bfgs_final) = run(DirectionSpec::Bfgs);
    let (lbfgs_seen, lbfgs_final) = run(DirectionSpec::Lbfgs { memory: 1 });
    // both strategies open with -g, so step one is identical
    assert_abs_diff_eq!(bfgs_seen[1][0], lbfgs_seen[1][0], epsilon = 1e-12);
    assert_abs_diff_eq!(bfgs_seen[1][1], lbfgs_seen[1][1], epsilon = 1e-12);
    // one stored pair reproduces the scaled dense update on step two
    assert_abs_diff_eq!(bfgs_final[0], lbfgs_final[0], epsilon = 1e-9);
    assert_abs_diff_eq!(bfgs_final[1], lbfgs_final[1], epsilon = 1e-9);
}

#[test]
// Purpose
// -------
// Confirm that the analytic and centered-difference Hessian-vector
// policies drive truncated Newton to the same minimizer, and that only
// the finite-difference policy pays extra gradient evaluations.
//
// Given
// -----
// - The quadratic with an analytic `H·v = A·v` override.
// - Two otherwise identical truncated-Newton runs, one under
//   `HvComputation::Analytic` and one under the default centered
//   difference.
//
// Expect
// ------
// - Both runs converge to the origin within the stopping tolerance.
// - Both consume Hessian-vector products.
// - The centered-difference run records strictly more gradient
//   evaluations, since each product costs two interior gradients.
fn truncated_newton_policies_agree_on_the_quadratic() {
    let x0 = array![3.0, -4.0];
    let mut analytic_opts = strategy_options(DirectionSpec::TruncatedNewton { max_inner: 30 });
    analytic_opts.hessian_vec = HvComputation::Analytic;
    let fd_opts = strategy_options(DirectionSpec::TruncatedNewton { max_inner: 30 });
    let analytic = minimize(QuadraticWithHv { a: test_matrix() }, &x0, &analytic_opts)
        .expect("analytic-policy run should succeed");
    let fd = minimize(QuadraticWithHv { a: test_matrix() }, &x0, &fd_opts)
        .expect("centered-difference run should succeed");
    assert!(analytic.converged() && fd.converged());
    for outcome in [&analytic, &fd] {
        assert_abs_diff_eq!(outcome.x[0], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.x[1], 0.0, epsilon = 1e-3);
        assert!(outcome.counts.hessian_vec > 0);
    }
    assert!(
        fd.counts.gradient > analytic.counts.gradient,
        "finite differencing should cost extra gradient evaluations"
    );
}

#[test]
// Purpose
// -------
// Confirm that requesting analytic Hessian-vector products from an
// objective that does not provide them fails fast through the public
// API, before any objective evaluation.
//
// Given
// -----
// - The plain quadratic (no `hessian_vec` override).
// - Truncated Newton under `HvComputation::Analytic`.
//
// Expect
// ------
// - `minimize` returns `Err(MinimizeError::AnalyticHessianUnavailable)`.
fn analytic_policy_requires_objective_support() {
    let mut opts = strategy_options(DirectionSpec::truncated_newton_default());
    opts.hessian_vec = HvComputation::Analytic;
    let err = minimize(Quadratic { a: test_matrix() }, &array![1.0, 1.0], &opts)
        .expect_err("an analytic-policy run needs hessian_vec support");
    assert_eq!(err, MinimizeError::AnalyticHessianUnavailable);
}

#[test]
// Purpose
// -------
// Verify iteration-cap semantics end to end: a legal but unsatisfiable
// zero threshold forces termination through the cap, with the cap value
// reported as the iteration count.
//
// Given
// -----
// - The quadratic from `[3, -4]` under steepest descent.
// - Gradient-norm threshold 0 (strict comparison, never satisfiable).
// - `max_iter = 3` and `verbosity = 1`, so the capped run also
//   exercises the console sink.
//
// Expect
// ------
// - `TerminationCause::MaxIterationReached` with `iterations == 3` and
//   `converged() == false`.
fn iteration_cap_reports_max_iteration_cause() {
    let mut opts = strategy_options(DirectionSpec::Steepest);
    opts.stopping = StoppingSpec::GradientNorm { threshold: 0.0 };
    opts.max_iter = 3;
    opts.verbosity = 1;
    let outcome = minimize(Quadratic { a: test_matrix() }, &array![3.0, -4.0], &opts)
        .expect("a capped run is a successful completion, not an error");
    assert!(!outcome.converged());
    assert_eq!(outcome.cause, TerminationCause::MaxIterationReached);
    assert_eq!(outcome.iterations, 3);
}

#[test]
// Purpose
// -------
// Verify the traced entry point: the callback sees consecutive
// pre-step iterates starting with the starting point, and the final
// iterate is reported through the outcome only.
//
// Given
// -----
// - The quadratic from `[3, -4]` under BFGS with baseline options.
// - A trace callback collecting `(iteration, x)` pairs.
//
// Expect
// ------
// - The run converges; the trace holds `iterations + 1` entries.
// - Entry zero is `(0, x0)` and indices are consecutive positions.
// - The last traced iterate differs from `outcome.x`.
fn traced_run_reports_consecutive_pre_step_iterates() {
    let opts = strategy_options(DirectionSpec::Bfgs);
    let x0 = array![3.0, -4.0];
    let mut seen: Vec<(usize, Point)> = Vec::new();
    let outcome = minimize_traced(Quadratic { a: test_matrix() }, &x0, &opts, &mut |iteration, x| {
        seen.push((iteration, x.clone()))
    })
    .expect("traced run should succeed on the quadratic");
    assert!(outcome.converged());
    assert_eq!(seen.len(), outcome.iterations + 1);
    assert_eq!(seen[0].0, 0);
    assert_eq!(seen[0].1, x0);
    for (position, (iteration, _)) in seen.iter().enumerate() {
        assert_eq!(*iteration, position);
    }
    let (_, last_traced) = seen.last().expect("at least the starting point is traced");
    assert_ne!(*last_traced, outcome.x, "the accepted final step happens after the last trace");
}

#[test]
// Purpose
// -------
// Verify that a caller-owned strategy handed to `minimize_with` comes
// back cleaned and is immediately reusable for a second run.
//
// Given
// -----
// - One `Lbfgs` instance with history size 8.
// - Two successive runs on the quadratic from different starting
//   points, with baseline options (whose `direction` field
//   `minimize_with` ignores).
//
// Expect
// ------
// - Both runs converge to the origin within `1e-3` per coordinate.
fn caller_owned_strategy_is_reusable_across_runs() {
    let mut strategy = Lbfgs::new(8).expect("a positive history size is valid");
    let opts = strategy_options(DirectionSpec::Steepest);
    let first = minimize_with(Quadratic { a: test_matrix() }, &array![3.0, -4.0], &mut strategy, &opts)
        .expect("first run should succeed");
    let second =
        minimize_with(Quadratic { a: test_matrix() }, &array![-2.0, 5.0], &mut strategy, &opts)
            .expect("second run should reuse the cleaned strategy");
    for outcome in [&first, &second] {
        assert!(outcome.converged());
        assert_abs_diff_eq!(outcome.x[0], 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(outcome.x[1], 0.0, epsilon = 1e-3);
    }
}

#[test]
// Purpose
// -------
// Pin the counter contract of the evaluation models through the public
// API: resampling re-evaluates once per accepted step, and datapoint
// accounting scales with joint evaluations.
//
// Given
// -----
// - `BatchSphere` (50 000 datapoints per evaluation) from `[3, -4]`.
// - Two steepest-descent runs capped at 4 iterations with an
//   unsatisfiable zero threshold: one deterministic, one resampling.
//
// Expect
// ------
// - Both runs hit the cap with identical final iterates.
// - The resampling run records exactly 4 extra value and gradient
//   evaluations (one per accepted step).
// - `counts.datapoints == counts.value * 50_000` in both runs.
fn resampling_model_adds_one_evaluation_per_accepted_step() {
    let x0 = array![3.0, -4.0];
    let mut det_opts = strategy_options(DirectionSpec::Steepest);
    det_opts.stopping = StoppingSpec::GradientNorm { threshold: 0.0 };
    det_opts.max_iter = 4;
    let mut res_opts = det_opts.clone();
    res_opts.model = ModelSpec::MiniBatchResampling;
    let det = minimize(BatchSphere, &x0, &det_opts).expect("deterministic run should succeed");
    let res = minimize(BatchSphere, &x0, &res_opts).expect("resampling run should succeed");
    assert_eq!(det.iterations, 4);
    assert_eq!(res.iterations, 4);
    assert_eq!(res.counts.value, det.counts.value + 4);
    assert_eq!(res.counts.gradient, det.counts.gradient + 4);
    // same deterministic function, so recomputation leaves the trajectory unchanged
    assert_eq!(res.x, det.x);
    assert_eq!(det.counts.datapoints, det.counts.value * 50_000);
    assert_eq!(res.counts.datapoints, res.counts.value * 50_000);
}

#[test]
// Purpose
// -------
// Ensure the value-change and parameter-change criteria are satisfiable
// end to end, not just the gradient-norm default.
//
// Given
// -----
// - The quadratic from `[3, -4]` under BFGS.
// - One run stopping on `|val - val_prev| < 1e-10`, one stopping on
//   `‖x - x_prev‖ < 1e-8`.
//
// Expect
// ------
// - Both runs terminate with `TerminationCause::StoppingCriterion` at a
//   near-optimal cost.
fn alternative_stopping_criteria_terminate_on_the_quadratic() {
    let x0 = array![3.0, -4.0];
    for stopping in [
        StoppingSpec::ValueChange { threshold: 1e-10 },
        StoppingSpec::ParameterChange { threshold: 1e-8 },
    ] {
        let mut opts = strategy_options(DirectionSpec::Bfgs);
        opts.stopping = stopping;
        let outcome = minimize(Quadratic { a: test_matrix() }, &x0, &opts)
            .expect("minimize should succeed under alternative criteria");
        assert!(outcome.converged(), "{stopping:?} should be satisfiable on a convex quadratic");
        assert!(outcome.cost < 1e-4);
    }
}

#[test]
// Purpose
// -------
// Confirm that configuration and starting-point errors surface through
// the public API as their specific error variants.
//
// Given
// -----
// - A zero L-BFGS history size, a negative stopping threshold, a NaN
//   starting coordinate, and an empty starting point.
//
// Expect
// ------
// - `InvalidLbfgsMem`, `InvalidThreshold`, `InvalidInitialGuess`, and
//   `EmptyInitialGuess` respectively, with no run performed.
fn invalid_configuration_and_guesses_are_rejected() {
    let opts = strategy_options(DirectionSpec::Lbfgs { memory: 0 });
    let err = minimize(BatchSphere, &array![1.0], &opts)
        .expect_err("a zero history size should be rejected");
    assert!(matches!(err, MinimizeError::InvalidLbfgsMem { mem: 0, .. }));

    let mut threshold_opts = strategy_options(DirectionSpec::Steepest);
    threshold_opts.stopping = StoppingSpec::GradientNorm { threshold: -1.0 };
    let err = minimize(BatchSphere, &array![1.0], &threshold_opts)
        .expect_err("a negative threshold should be rejected");
    assert!(matches!(err, MinimizeError::InvalidThreshold { .. }));

    let opts = strategy_options(DirectionSpec::Steepest);
    let err = minimize(BatchSphere, &array![f64::NAN], &opts)
        .expect_err("a NaN starting coordinate should be rejected");
    assert!(matches!(err, MinimizeError::InvalidInitialGuess { index: 0, .. }));

    let err = minimize(BatchSphere, &Point::zeros(0), &opts)
        .expect_err("an empty starting point should be rejected");
    assert_eq!(err, MinimizeError::EmptyInitialGuess);
}
