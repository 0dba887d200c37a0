//! Per-iteration progress reporting.
//!
//! Purpose
//! -------
//! Give the driver a structured record of each outer iteration and a
//! pluggable sink to deliver it to. The default console sink renders the
//! record as one line on stderr; embedders that want progress bars,
//! UI streaming, or log aggregation implement [`IterationSink`]
//! themselves and attach it through the driver entry point.
//!
//! Key behaviors
//! -------------
//! - Records carry the pre-step state: the iteration index and the cost
//!   at the point the upcoming step starts from, plus the cumulative
//!   evaluation counters.
//! - The console line shows Hessian-vector counts only when the active
//!   direction strategy consumes such products, and the datapoints
//!   counter only when the objective reports a data notion; silent
//!   columns would otherwise dominate the output.
//!
//! Conventions
//! -----------
//! - One line per iteration, fixed-width count columns:
//!   `Iteration    3: cost=0.1234; NV=  10; NG=  10`.
//! - Output goes to stderr so piped program output stays clean.
use crate::minimize::types::{Cost, EvalCounts};

/// Snapshot of one outer iteration, emitted before the step is taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Outer iteration index, starting at zero.
    pub iteration: usize,
    /// Objective value at the iterate the step starts from.
    pub cost: Cost,
    /// Cumulative evaluation counters up to this point.
    pub counts: EvalCounts,
    /// Whether the active direction strategy consumes Hessian-vector
    /// products.
    pub uses_hessian_vec: bool,
}

/// Consumer of per-iteration records.
pub trait IterationSink {
    fn record(&mut self, rec: &IterationRecord);
}

/// Sink that prints one line per iteration to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a console sink.
    pub fn new() -> Self {
        ConsoleSink
    }

    fn format_line(rec: &IterationRecord) -> String {
        let EvalCounts { value, gradient, hessian_vec, datapoints } = rec.counts;
        let iteration = rec.iteration;
        let cost = rec.cost;
        let mut line =
            format!("Iteration {iteration:>4}: cost={cost:.4}; NV={value:>4}; NG={gradient:>4}");
        if rec.uses_hessian_vec {
            line.push_str(&format!("; NH={hessian_vec:>4}"));
        }
        if datapoints > 0 {
            let datapoints = datapoints as f64;
            line.push_str(&format!("; NPoints={datapoints:.3e}"));
        }
        line
    }
}

impl IterationSink for ConsoleSink {
    fn record(&mut self, rec: &IterationRecord) {
        eprintln!("{}", Self::format_line(rec));
    }
}
