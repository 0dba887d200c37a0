//! Validation helpers for the minimization engine.
//!
//! This module centralizes the consistency checks used across the engine
//! interface:
//!
//! - **Initial guess**: [`validate_x0`] enforces a non-empty, finite
//!   starting point.
//! - **Configuration checks**: [`verify_threshold`], [`verify_max_iter`],
//!   [`verify_wolfe`], [`verify_trial_budget`], [`verify_lbfgs_mem`],
//!   [`verify_inner_cap`] reject malformed options at construction time,
//!   before any iteration runs.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Hessian-vector products**: [`validate_hessian_vec`] does the same
//!   for curvature products.
//! - **Objective values**: [`validate_cost`] checks scalar outputs for
//!   finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`MinimizeError`] variants, keeping higher-level code uniform.
use crate::minimize::{
    errors::{MinimizeError, MinimizeResult},
    types::{Grad, Point},
};

/// Validate an initial guess.
///
/// - The vector must contain at least one coordinate.
/// - Every coordinate must be **finite** (`NaN` or `±∞` are rejected).
///
/// # Errors
/// - [`MinimizeError::EmptyInitialGuess`] if the vector is empty.
/// - [`MinimizeError::InvalidInitialGuess`] with the index/value of the
///   first offending coordinate.
pub fn validate_x0(x0: &Point) -> MinimizeResult<()> {
    if x0.is_empty() {
        return Err(MinimizeError::EmptyInitialGuess);
    }
    for (index, &value) in x0.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinimizeError::InvalidInitialGuess {
                index,
                value,
                reason: "Initial-guess coordinates must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate a stopping threshold.
///
/// The value must be **finite** and **non-negative**. Zero is legal: a
/// zero threshold can never be satisfied by the strict `<` comparison,
/// which forces termination through the iteration cap.
///
/// # Errors
/// Returns [`MinimizeError::InvalidThreshold`] if the value is non-finite
/// or negative.
pub fn verify_threshold(value: f64) -> MinimizeResult<()> {
    if !value.is_finite() {
        return Err(MinimizeError::InvalidThreshold {
            value,
            reason: "Threshold must be finite.",
        });
    }
    if value < 0.0 {
        return Err(MinimizeError::InvalidThreshold {
            value,
            reason: "Threshold must be non-negative.",
        });
    }
    Ok(())
}

/// Validate the outer iteration cap.
///
/// # Errors
/// Returns [`MinimizeError::InvalidMaxIter`] if the cap is zero.
pub fn verify_max_iter(max_iter: usize) -> MinimizeResult<()> {
    if max_iter == 0 {
        return Err(MinimizeError::InvalidMaxIter {
            max_iter,
            reason: "Maximum iterations must be at least 1.",
        });
    }
    Ok(())
}

/// Validate the strong Wolfe constants.
///
/// Requires `0 < c1 < c2 < 1` and both values finite.
///
/// # Errors
/// Returns [`MinimizeError::InvalidWolfeConstants`] describing the first
/// violated bound.
pub fn verify_wolfe(c1: f64, c2: f64) -> MinimizeResult<()> {
    if !c1.is_finite() || !c2.is_finite() {
        return Err(MinimizeError::InvalidWolfeConstants {
            c1,
            c2,
            reason: "Wolfe constants must be finite.",
        });
    }
    if c1 <= 0.0 {
        return Err(MinimizeError::InvalidWolfeConstants {
            c1,
            c2,
            reason: "c1 must be strictly positive.",
        });
    }
    if c2 <= c1 {
        return Err(MinimizeError::InvalidWolfeConstants {
            c1,
            c2,
            reason: "c2 must be strictly greater than c1.",
        });
    }
    if c2 >= 1.0 {
        return Err(MinimizeError::InvalidWolfeConstants {
            c1,
            c2,
            reason: "c2 must be strictly less than 1.",
        });
    }
    Ok(())
}

/// Validate the line-search trial budget.
///
/// # Errors
/// Returns [`MinimizeError::InvalidTrialBudget`] if the budget is zero.
pub fn verify_trial_budget(budget: usize) -> MinimizeResult<()> {
    if budget == 0 {
        return Err(MinimizeError::InvalidTrialBudget {
            budget,
            reason: "Trial budget must be at least 1.",
        });
    }
    Ok(())
}

/// Validate the limited-memory history size.
///
/// # Errors
/// Returns [`MinimizeError::InvalidLbfgsMem`] if the size is zero.
pub fn verify_lbfgs_mem(mem: usize) -> MinimizeResult<()> {
    if mem == 0 {
        return Err(MinimizeError::InvalidLbfgsMem {
            mem,
            reason: "History size must be at least 1.",
        });
    }
    Ok(())
}

/// Validate the truncated-Newton inner iteration cap.
///
/// # Errors
/// Returns [`MinimizeError::InvalidInnerCap`] if the cap is zero.
pub fn verify_inner_cap(cap: usize) -> MinimizeResult<()> {
    if cap == 0 {
        return Err(MinimizeError::InvalidInnerCap {
            cap,
            reason: "Inner iteration cap must be at least 1.",
        });
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`MinimizeError::GradientDimMismatch`] if length does not match
///   `dim`.
/// - [`MinimizeError::InvalidGradient`] with the index/value/reason of
///   the first offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> MinimizeResult<()> {
    if grad.len() != dim {
        return Err(MinimizeError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinimizeError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate a Hessian-vector product against dimension and finiteness.
///
/// # Errors
/// - [`MinimizeError::HessianVecDimMismatch`] if length does not match
///   `dim`.
/// - [`MinimizeError::InvalidHessianVec`] with the index/value of the
///   first offending element.
pub fn validate_hessian_vec(hv: &Grad, dim: usize) -> MinimizeResult<()> {
    if hv.len() != dim {
        return Err(MinimizeError::HessianVecDimMismatch { expected: dim, found: hv.len() });
    }
    for (index, &value) in hv.iter().enumerate() {
        if !value.is_finite() {
            return Err(MinimizeError::InvalidHessianVec {
                index,
                value,
                reason: "Hessian-vector product elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that a scalar objective value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`MinimizeError::NonFiniteCost`] if the value is `NaN` or
/// infinite.
pub fn validate_cost(value: f64) -> MinimizeResult<()> {
    if !value.is_finite() {
        return Err(MinimizeError::NonFiniteCost { value });
    }
    Ok(())
}
