//! Driver loop — sequencing of one complete minimization run.
//!
//! Purpose
//! -------
//! Own the outer iteration: evaluate the starting point, repeatedly ask
//! the direction strategy for a step direction, line-search along it,
//! accept the result, test the stopping criterion, and consult the
//! evaluation model, until one of the three terminal states is reached.
//! [`drive`] is the single entry point every public API wrapper funnels
//! into.
//!
//! Key behaviors
//! -------------
//! - Terminal states: `LineSearchFailed` when no Wolfe point was found
//!   within the trial budget, `StoppingCriterion` when the active
//!   criterion is satisfied after an accepted step, and
//!   `MaxIterationReached` when the iteration cap is hit at the top of
//!   the loop.
//! - Every proposed direction is checked for descent (`dot(p, g) < 0`);
//!   a failing proposal is replaced by a separately owned steepest-descent
//!   fallback for that iteration only, leaving the configured strategy's
//!   internal history untouched.
//! - Trace and sink observers fire at the top of each iteration with the
//!   pre-step state, so the starting point appears as iteration zero and
//!   the final point is reported only through the outcome.
//! - The stopping criterion is tested before the iteration counter
//!   advances; an outcome that stopped during iteration `k` therefore
//!   reports `iterations = k`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `init` runs exactly once on the direction strategy, the fallback,
//!   and the stopping criterion before the loop, and `clean` exactly once
//!   on every exit path, error propagation included. A caller-owned
//!   strategy is always left ready for the next run.
//! - The starting cost and gradient are validated finite; later accepted
//!   points inherit finiteness from the line search's sufficient-decrease
//!   handling, and model-driven re-evaluations are validated again.
//! - The iterate only moves through [`Context::accept`], so `x`/`g`/`val`
//!   and their `*_prev` counterparts never drift apart.
//!
//! Conventions
//! -----------
//! - `drive` consults `opts.max_iter` and `opts.line_search` only; the
//!   strategy-choice fields are realized by the caller (see `builders` /
//!   `api`), which passes concrete instances.
//! - The Hessian-vector capability check runs before any `init`, so a
//!   misconfigured analytic run fails fast without touching strategy
//!   state.
//!
//! Testing notes
//! -------------
//! - Unit tests here exercise driver mechanics with probe strategies:
//!   lifecycle pairing on all exit paths, the ascent fallback, observer
//!   sequencing, counter semantics, and the capability precondition.
//! - End-to-end behavior of the shipped strategies lives in the
//!   integration tests.
use crate::minimize::{
    context::Context,
    direction::Steepest,
    errors::{MinimizeError, MinimizeResult},
    line_search::StrongWolfe,
    logging::{IterationRecord, IterationSink},
    traits::{
        Direction, EvaluationModel, MinimizeOptions, MinimizeOutcome, Objective, StoppingCriterion,
    },
    types::{HvComputation, Point, TerminationCause},
    validation::{validate_cost, validate_grad, validate_x0, verify_max_iter},
    wrapper::FunctionWrapper,
};

/// Run one complete minimization from `x0`.
///
/// Behavior:
/// - Validates the starting point, the line-search constants, and the
///   iteration cap, then refuses analytic Hessian-vector runs the
///   objective cannot serve.
/// - Initializes the strategy seams, loops until a terminal state, and
///   cleans the seams on every exit path, so `direction` and `stopping`
///   can be reused for a later run.
/// - `trace` (when given) receives `(iteration, &x)` at the top of each
///   iteration; `sink` (when given) receives the corresponding
///   [`IterationRecord`].
///
/// The strategy-choice fields of `opts` are intentionally not consulted:
/// this entry point exists for callers that construct and own their
/// strategy instances. Use `minimize` for spec-driven construction.
///
/// # Errors
/// - [`MinimizeError::EmptyInitialGuess`] / [`MinimizeError::InvalidInitialGuess`]
///   for an unusable `x0`.
/// - [`MinimizeError::InvalidWolfeConstants`] / [`MinimizeError::InvalidTrialBudget`] /
///   [`MinimizeError::InvalidMaxIter`] for unusable options.
/// - [`MinimizeError::AnalyticHessianUnavailable`] when the direction
///   strategy needs Hessian-vector products, the wrapper policy is
///   analytic, and the objective does not provide them.
/// - Any error surfaced by the objective or by finiteness validation of
///   the starting point and model-driven re-evaluations.
#[allow(clippy::too_many_arguments)]
pub fn drive<O: Objective>(
    fun: &mut FunctionWrapper<O>, x0: Point, direction: &mut dyn Direction<O>,
    stopping: &mut dyn StoppingCriterion, model: &mut dyn EvaluationModel,
    opts: &MinimizeOptions, trace: Option<&mut dyn FnMut(usize, &Point)>,
    sink: Option<&mut dyn IterationSink>,
) -> MinimizeResult<MinimizeOutcome> {
    validate_x0(&x0)?;
    let line_search = StrongWolfe::new(opts.line_search)?;
    verify_max_iter(opts.max_iter)?;

    let uses_hessian_vec = direction.requires_hessian_vec();
    if uses_hessian_vec
        && fun.hv_policy() == HvComputation::Analytic
        && !fun.supports_hessian_vec()
    {
        return Err(MinimizeError::AnalyticHessianUnavailable);
    }

    let mut ctx = Context::new(x0);
    let mut fallback = Steepest::new();
    let n = ctx.dim();

    direction.init(n)?;
    if let Err(err) = Direction::<O>::init(&mut fallback, n) {
        direction.clean();
        return Err(err);
    }
    if let Err(err) = stopping.init(n) {
        direction.clean();
        Direction::<O>::clean(&mut fallback);
        return Err(err);
    }

    let result = run_loop(
        fun,
        &mut ctx,
        direction,
        &mut fallback,
        stopping,
        model,
        &line_search,
        opts.max_iter,
        uses_hessian_vec,
        trace,
        sink,
    );

    direction.clean();
    Direction::<O>::clean(&mut fallback);
    stopping.clean();

    let cause = result?;
    let cost = ctx.val();
    let iterations = ctx.iter();
    Ok(MinimizeOutcome { x: ctx.into_x(), cost, iterations, counts: fun.counts(), cause })
}

/// The iteration loop proper, between `init` and `clean`.
///
/// Returns the terminal state, or the first error raised by the
/// objective, a strategy, or finiteness validation.
#[allow(clippy::too_many_arguments)]
fn run_loop<O: Objective>(
    fun: &mut FunctionWrapper<O>, ctx: &mut Context, direction: &mut dyn Direction<O>,
    fallback: &mut Steepest, stopping: &mut dyn StoppingCriterion,
    model: &mut dyn EvaluationModel, line_search: &StrongWolfe, max_iter: usize,
    uses_hessian_vec: bool, mut trace: Option<&mut dyn FnMut(usize, &Point)>,
    mut sink: Option<&mut dyn IterationSink>,
) -> MinimizeResult<TerminationCause> {
    let (val, g) = fun.value_grad(ctx.x())?;
    validate_cost(val)?;
    validate_grad(&g, ctx.dim())?;
    ctx.set_val(val);
    ctx.set_g(g);

    loop {
        if ctx.iter() >= max_iter {
            return Ok(TerminationCause::MaxIterationReached);
        }

        if let Some(trace) = trace.as_deref_mut() {
            trace(ctx.iter(), ctx.x());
        }
        if let Some(sink) = sink.as_deref_mut() {
            sink.record(&IterationRecord {
                iteration: ctx.iter(),
                cost: ctx.val(),
                counts: fun.counts(),
                uses_hessian_vec,
            });
        }

        let mut p = direction.compute(ctx, fun)?;
        let mut dphi_0 = p.dot(ctx.g());
        if dphi_0 >= 0.0 {
            p = fallback.compute(ctx, fun)?;
            dphi_0 = p.dot(ctx.g());
        }
        ctx.set_p(p);
        ctx.set_dphi_0(dphi_0);

        let res = line_search.search(ctx, fun)?;
        if res.has_failed {
            return Ok(TerminationCause::LineSearchFailed);
        }
        ctx.accept(res);

        if stopping.is_met(ctx) {
            return Ok(TerminationCause::StoppingCriterion);
        }

        ctx.advance();

        if model.update(ctx) {
            let (val, g) = fun.value_grad(ctx.x())?;
            validate_cost(val)?;
            validate_grad(&g, ctx.dim())?;
            ctx.set_val(val);
            ctx.set_g(g);
        }
    }
}
