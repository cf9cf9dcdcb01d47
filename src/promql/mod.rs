//! PromQL generation.
//!
//! Layers, each consuming the previous one's output:
//!
//! - [`resolve`]: indicator → metric name, base and error selectors
//! - [`duration`]: window → range-vector literal
//! - [`selector`]: selectors → `{...}` clause
//! - [`query`]: the three objective queries

pub mod duration;
pub mod query;
pub mod resolve;
pub mod selector;

pub use duration::{format_duration, parse_duration, DurationError};
pub use query::{format_target, query_error_budget, query_errors, query_total};
pub use resolve::{resolve, ResolvedIndicator};
pub use selector::render_selectors;
