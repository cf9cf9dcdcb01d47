//! Service-level objectives.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::indicator::Indicator;
use crate::promql::duration;

/// Precondition violations on an [`Objective`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObjectiveError {
    #[error("Objective window must be greater than zero")]
    NonPositiveWindow,

    #[error("Objective window must be a whole number of seconds, got {0:?}")]
    SubSecondWindow(Duration),

    #[error("Objective target must be in (0, 100], got {0}")]
    TargetOutOfRange(f64),

    #[error("GRPC indicator is missing its {0}")]
    MissingGrpcField(&'static str),
}

/// A single SLO definition.
///
/// Objectives are plain values: the compiler only ever borrows them and
/// never fills in defaults on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Identifier used in listings and JSON output.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Lookback range of every generated query.
    #[serde(with = "duration::serde_literal")]
    pub window: Duration,

    /// Percentage of events that must be good, e.g. `99.9`.
    #[serde(default)]
    pub target: f64,

    pub indicator: Indicator,
}

impl Objective {
    pub fn new(window: Duration, target: f64, indicator: impl Into<Indicator>) -> Self {
        Self {
            name: String::new(),
            description: None,
            window,
            target,
            indicator: indicator.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the window and target preconditions.
    ///
    /// Indicator shape (exactly one variant) is not checked here; the
    /// compiler reports that as an unsupported indicator.
    pub fn validate(&self) -> Result<(), ObjectiveError> {
        if self.window.is_zero() {
            return Err(ObjectiveError::NonPositiveWindow);
        }
        if self.window.subsec_nanos() != 0 {
            return Err(ObjectiveError::SubSecondWindow(self.window));
        }
        // Written this way round so NaN is rejected too.
        if !(self.target > 0.0 && self.target <= 100.0) {
            return Err(ObjectiveError::TargetOutOfRange(self.target));
        }
        if let Some(grpc) = &self.indicator.grpc {
            if grpc.service.is_empty() {
                return Err(ObjectiveError::MissingGrpcField("service"));
            }
            if grpc.method.is_empty() {
                return Err(ObjectiveError::MissingGrpcField("method"));
            }
        }
        Ok(())
    }
}
