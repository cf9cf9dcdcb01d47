//! End-to-end compilation from objectives to PromQL.
//!
//! ```text
//! Objective → Resolve Indicator → Render Selectors → Assemble Queries
//! ```
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use burnrate::compile::{compile, CompileOptions};
//! use burnrate::model::{HttpIndicator, Objective};
//!
//! let objective = Objective::new(
//!     Duration::from_secs(28 * 24 * 60 * 60),
//!     99.9,
//!     HttpIndicator::default(),
//! )
//! .with_name("api-availability");
//!
//! let compiled = compile(&objective, CompileOptions::default())?;
//! assert_eq!(compiled.total, "sum(increase(http_requests_total{}[4w]))");
//! # Ok::<(), burnrate::compile::CompileError>(())
//! ```

use serde::Serialize;

use crate::model::{Objective, ObjectiveError};
use crate::promql::{self, format_duration, format_target};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during compilation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("Unsupported indicator: expected exactly one of http or grpc, found {populated}")]
    UnsupportedIndicator { populated: usize },

    #[error("Invalid objective: {0}")]
    InvalidObjective(#[from] ObjectiveError),
}

pub type CompileResult<T> = Result<T, CompileError>;

// ============================================================================
// Options
// ============================================================================

/// Options for compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Check objective preconditions before generating queries.
    pub validate: bool,
}

impl CompileOptions {
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// All queries generated for one objective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledObjective {
    pub name: String,

    /// Window as a range-vector literal.
    pub window: String,

    /// Target with three decimals.
    pub target: String,

    pub total: String,
    pub errors: String,
    pub error_budget: String,
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile one objective into its three queries.
pub fn compile(objective: &Objective, options: CompileOptions) -> CompileResult<CompiledObjective> {
    if options.validate {
        objective.validate()?;
    }

    let total = promql::query_total(objective)?;
    let errors = promql::query_errors(objective)?;
    let error_budget = promql::query_error_budget(objective)?;

    tracing::debug!(
        objective = %objective.name,
        window = ?objective.window,
        "compiled objective"
    );

    Ok(CompiledObjective {
        name: objective.name.clone(),
        window: format_duration(objective.window),
        target: format_target(objective.target),
        total,
        errors,
        error_budget,
    })
}

/// Compile a list of objectives, stopping at the first failure.
pub fn compile_all(
    objectives: &[Objective],
    options: CompileOptions,
) -> CompileResult<Vec<CompiledObjective>> {
    objectives
        .iter()
        .map(|objective| compile(objective, options.clone()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
