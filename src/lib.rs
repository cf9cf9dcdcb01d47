//! # burnrate
//!
//! Compiles service-level objectives into PromQL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │            Objective (window, target, indicator)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [resolve]
//! ┌─────────────────────────────────────────────────────────┐
//! │      Metric name + base selectors + error selectors      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [selector, duration]
//! ┌─────────────────────────────────────────────────────────┐
//! │         Selector clause + range-vector literal           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [query]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Total, errors and error-budget PromQL             │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Compilation is pure: objectives are borrowed, defaults are applied while
//! resolving, and the same objective always yields the same strings.

pub mod compile;
pub mod config;
pub mod loader;
pub mod model;
pub mod promql;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{
        compile, compile_all, CompileError, CompileOptions, CompileResult, CompiledObjective,
    };
    pub use crate::model::{
        GrpcIndicator, HttpIndicator, Indicator, IndicatorKind, Objective, ObjectiveError,
        Selectors,
    };
    pub use crate::promql::{format_duration, parse_duration, render_selectors};
}

// Also export at crate root for convenience
pub use compile::{compile, CompileError, CompileOptions, CompiledObjective};
pub use model::{GrpcIndicator, HttpIndicator, Indicator, Objective, Selectors};
