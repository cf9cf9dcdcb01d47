//! Indicator resolution: metric name plus base and error selectors.
//!
//! Every default the generated queries rely on is applied here, from the
//! literals in [`crate::model::defaults`]. The indicator itself is only
//! borrowed.

use crate::compile::CompileResult;
use crate::model::defaults;
use crate::model::{GrpcIndicator, HttpIndicator, Indicator, IndicatorKind, Selectors};

/// An indicator with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIndicator {
    /// Counter the queries aggregate.
    pub metric: String,

    /// Selectors shared by the total and the error query.
    pub selectors: Vec<String>,

    /// Selectors appended to `selectors` for the error query.
    pub error_selectors: Vec<String>,
}

impl ResolvedIndicator {
    /// Base selectors followed by error selectors.
    pub fn all_error_selectors(&self) -> Vec<&str> {
        self.selectors
            .iter()
            .chain(&self.error_selectors)
            .map(String::as_str)
            .collect()
    }
}

/// Resolve the populated variant of `indicator`.
pub fn resolve(indicator: &Indicator) -> CompileResult<ResolvedIndicator> {
    Ok(match indicator.kind()? {
        IndicatorKind::Http(http) => resolve_http(http),
        IndicatorKind::Grpc(grpc) => resolve_grpc(grpc),
    })
}

fn resolve_http(http: &HttpIndicator) -> ResolvedIndicator {
    let metric = match http.metric.as_deref() {
        Some(metric) if !metric.is_empty() => metric,
        _ => defaults::HTTP_METRIC,
    };

    ResolvedIndicator {
        metric: metric.to_string(),
        selectors: http.selectors.as_slice().to_vec(),
        error_selectors: or_default(Some(&http.error_selectors), defaults::HTTP_ERROR_SELECTOR),
    }
}

fn resolve_grpc(grpc: &GrpcIndicator) -> ResolvedIndicator {
    let mut selectors = Vec::with_capacity(grpc.selectors.len() + 2);
    selectors.push(format!(
        "{}=\"{}\"",
        defaults::GRPC_SERVICE_LABEL,
        grpc.service
    ));
    selectors.push(format!("{}=\"{}\"", defaults::GRPC_METHOD_LABEL, grpc.method));
    selectors.extend(grpc.selectors.iter().cloned());

    ResolvedIndicator {
        metric: defaults::GRPC_METRIC.to_string(),
        selectors,
        error_selectors: or_default(grpc.error_selectors.as_ref(), defaults::GRPC_ERROR_SELECTOR),
    }
}

/// Explicit selectors when present and non-empty, otherwise `fallback` alone.
fn or_default(explicit: Option<&Selectors>, fallback: &str) -> Vec<String> {
    match explicit {
        Some(selectors) if !selectors.is_empty() => selectors.as_slice().to_vec(),
        _ => vec![fallback.to_string()],
    }
}
