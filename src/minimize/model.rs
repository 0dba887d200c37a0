//! Evaluation models — when to recompute after an accepted step.
//!
//! The driver queries the active model once per accepted step. The
//! deterministic model never asks for recomputation because the line
//! search already evaluated the accepted point; the mini-batch model
//! always does, because the objective re-samples between steps and the
//! stored value/gradient no longer describe the new sample.
use crate::minimize::{context::Context, traits::EvaluationModel};

/// Model for objectives whose value/gradient depend only on `x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deterministic;

impl EvaluationModel for Deterministic {
    fn update(&mut self, _ctx: &Context) -> bool {
        false
    }
}

/// Model for objectives that draw a fresh mini-batch between steps.
///
/// Forces a value/gradient recomputation after every accepted step, so
/// the next iteration starts from derivatives of the current sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniBatchResampling;

impl EvaluationModel for MiniBatchResampling {
    fn update(&mut self, _ctx: &Context) -> bool {
        true
    }
}
