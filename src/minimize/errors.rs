/// Crate-wide result alias for minimization operations.
pub type MinimizeResult<T> = Result<T, MinimizeError>;

#[derive(Debug, Clone, PartialEq)]
pub enum MinimizeError {
    // ---- Initial guess ----
    /// The initial guess must contain at least one coordinate.
    EmptyInitialGuess,

    /// Initial-guess coordinates need to be finite.
    InvalidInitialGuess {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Configuration ----
    /// Stopping thresholds need to be non-negative and finite.
    InvalidThreshold {
        value: f64,
        reason: &'static str,
    },

    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },

    /// Wolfe constants need to satisfy `0 < c1 < c2 < 1`.
    InvalidWolfeConstants {
        c1: f64,
        c2: f64,
        reason: &'static str,
    },

    /// The line-search trial budget needs to be at least 1.
    InvalidTrialBudget {
        budget: usize,
        reason: &'static str,
    },

    /// The limited-memory history size needs to be at least 1.
    InvalidLbfgsMem {
        mem: usize,
        reason: &'static str,
    },

    /// The inner conjugate-gradient iteration cap needs to be at least 1.
    InvalidInnerCap {
        cap: usize,
        reason: &'static str,
    },

    /// Analytic Hessian-vector products were requested from an objective
    /// that does not provide them.
    AnalyticHessianUnavailable,

    // ---- Objective evaluation ----
    /// The objective returned a non-finite value where a finite one is
    /// required (initial evaluation or model-driven recomputation).
    NonFiniteCost {
        value: f64,
    },

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- Hessian-vector products ----
    /// Implies that the centered-difference policy should be used.
    HessianVecNotImplemented,

    /// Hessian-vector product dimensions do not match parameter
    /// dimensions.
    HessianVecDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Hessian-vector product elements need to be finite.
    InvalidHessianVec {
        index: usize,
        value: f64,
        reason: &'static str,
    },
}

impl std::error::Error for MinimizeError {}

impl std::fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Initial guess ----
            MinimizeError::EmptyInitialGuess => {
                write!(f, "Empty initial guess")
            }
            MinimizeError::InvalidInitialGuess { index, value, reason } => {
                write!(f, "Invalid initial guess at index {index}: {value}: {reason}")
            }

            // ---- Configuration ----
            MinimizeError::InvalidThreshold { value, reason } => {
                write!(f, "Invalid stopping threshold {value}: {reason}")
            }
            MinimizeError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            MinimizeError::InvalidWolfeConstants { c1, c2, reason } => {
                write!(f, "Invalid Wolfe constants c1={c1}, c2={c2}: {reason}")
            }
            MinimizeError::InvalidTrialBudget { budget, reason } => {
                write!(f, "Invalid line-search trial budget {budget}: {reason}")
            }
            MinimizeError::InvalidLbfgsMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }
            MinimizeError::InvalidInnerCap { cap, reason } => {
                write!(f, "Invalid inner iteration cap {cap}: {reason}")
            }
            MinimizeError::AnalyticHessianUnavailable => {
                write!(
                    f,
                    "Analytic Hessian-vector products requested but not provided by the objective"
                )
            }

            // ---- Objective evaluation ----
            MinimizeError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }
            MinimizeError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            MinimizeError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- Hessian-vector products ----
            MinimizeError::HessianVecNotImplemented => {
                write!(f, "Analytic Hessian-vector product not implemented")
            }
            MinimizeError::HessianVecDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian-vector product dimension mismatch: expected {expected}, found {found}"
                )
            }
            MinimizeError::InvalidHessianVec { index, value, reason } => {
                write!(f, "Invalid Hessian-vector product at index {index}: {value}: {reason}")
            }
        }
    }
}
