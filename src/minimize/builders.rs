//! Construction of concrete strategy instances from their specs.
//!
//! The spec enums in `traits` stay plain data; this module is the single
//! place where they are realized as boxed trait objects, so strategy
//! parameter validation has one home. `api::minimize` funnels through
//! these builders; callers that own concrete strategies skip them
//! entirely.
use crate::minimize::{
    direction::{Bfgs, ConjugateGradient, Lbfgs, Steepest, TruncatedNewton},
    errors::MinimizeResult,
    model::{Deterministic, MiniBatchResampling},
    stopping::{GradientNorm, ParameterChange, ValueChange},
    traits::{
        Direction, DirectionSpec, EvaluationModel, ModelSpec, Objective, StoppingCriterion,
        StoppingSpec,
    },
};

/// Build the direction strategy described by `spec`.
///
/// # Errors
/// - [`MinimizeError::InvalidLbfgsMem`] for `Lbfgs { memory: 0 }`.
/// - [`MinimizeError::InvalidInnerCap`] for `TruncatedNewton { max_inner: 0 }`.
///
/// [`MinimizeError::InvalidLbfgsMem`]: crate::minimize::errors::MinimizeError::InvalidLbfgsMem
/// [`MinimizeError::InvalidInnerCap`]: crate::minimize::errors::MinimizeError::InvalidInnerCap
pub fn build_direction<O: Objective>(
    spec: &DirectionSpec,
) -> MinimizeResult<Box<dyn Direction<O>>> {
    Ok(match spec {
        DirectionSpec::Steepest => Box::new(Steepest::new()),
        DirectionSpec::ConjugateGradient => Box::new(ConjugateGradient::new()),
        DirectionSpec::Bfgs => Box::new(Bfgs::new()),
        DirectionSpec::Lbfgs { memory } => Box::new(Lbfgs::new(*memory)?),
        DirectionSpec::TruncatedNewton { max_inner } => Box::new(TruncatedNewton::new(*max_inner)?),
    })
}

/// Build the stopping criterion described by `spec`.
///
/// # Errors
/// Returns [`MinimizeError::InvalidThreshold`] when the threshold is
/// negative or not finite. Zero passes: it is legal, strict comparison
/// then makes the criterion unsatisfiable and termination falls to the
/// iteration cap.
///
/// [`MinimizeError::InvalidThreshold`]: crate::minimize::errors::MinimizeError::InvalidThreshold
pub fn build_stopping(spec: &StoppingSpec) -> MinimizeResult<Box<dyn StoppingCriterion>> {
    Ok(match spec {
        StoppingSpec::GradientNorm { threshold } => Box::new(GradientNorm::new(*threshold)?),
        StoppingSpec::ValueChange { threshold } => Box::new(ValueChange::new(*threshold)?),
        StoppingSpec::ParameterChange { threshold } => Box::new(ParameterChange::new(*threshold)?),
    })
}

/// Build the evaluation model described by `spec`.
pub fn build_model(spec: &ModelSpec) -> Box<dyn EvaluationModel> {
    match spec {
        ModelSpec::Deterministic => Box::new(Deterministic),
        ModelSpec::MiniBatchResampling => Box::new(MiniBatchResampling),
    }
}
