//! Objective and indicator types.

pub mod defaults;
pub mod indicator;
pub mod objective;

pub use indicator::{GrpcIndicator, HttpIndicator, Indicator, IndicatorKind, Selectors};
pub use objective::{Objective, ObjectiveError};
