//! Indicators: the signal an objective is measured against.
//!
//! An [`Indicator`] keeps the shape it has in objective files, one optional
//! table per signal kind:
//!
//! ```toml
//! [indicator.grpc]
//! service = "checkout.v1.Checkout"
//! method = "Pay"
//! ```
//!
//! Exactly one kind must be populated. [`Indicator::kind`] narrows the value
//! into [`IndicatorKind`], which is what the query compiler matches on.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::compile::{CompileError, CompileResult};

// ============================================================================
// Selectors
// ============================================================================

/// Ordered label-matcher fragments such as `job="api"` or `code=~"5.."`.
///
/// Fragments are opaque: they are neither parsed nor escaped, and are
/// rendered in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selectors(Vec<String>);

impl Selectors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.0.push(fragment.into());
    }
}

impl<S: Into<String>> FromIterator<S> for Selectors {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Selectors {
    fn from(fragments: [S; N]) -> Self {
        fragments.into_iter().collect()
    }
}

impl From<Vec<String>> for Selectors {
    fn from(fragments: Vec<String>) -> Self {
        Self(fragments)
    }
}

impl<'a> IntoIterator for &'a Selectors {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ============================================================================
// Indicator variants
// ============================================================================

/// Request-based indicator over an HTTP request counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpIndicator {
    /// Counter to query; `http_requests_total` when absent or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,

    /// Selectors applied to both the total and the error query.
    #[serde(skip_serializing_if = "Selectors::is_empty")]
    pub selectors: Selectors,

    /// Selectors marking a request as failed; `code=~"5.."` when empty.
    #[serde(skip_serializing_if = "Selectors::is_empty")]
    pub error_selectors: Selectors,
}

impl HttpIndicator {
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    pub fn with_selectors(mut self, selectors: impl Into<Selectors>) -> Self {
        self.selectors = selectors.into();
        self
    }

    pub fn with_error_selectors(mut self, selectors: impl Into<Selectors>) -> Self {
        self.error_selectors = selectors.into();
        self
    }
}

/// Request-based indicator over the go-grpc-prometheus server counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrpcIndicator {
    /// Fully-qualified service name, matched against `grpc_service`.
    pub service: String,

    /// Method name, matched against `grpc_method`.
    pub method: String,

    /// Extra selectors, appended after the service and method matchers.
    #[serde(default, skip_serializing_if = "Selectors::is_empty")]
    pub selectors: Selectors,

    /// Status codes counted as errors. Falls back to the server-side failure
    /// codes when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_selectors: Option<Selectors>,
}

impl GrpcIndicator {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    pub fn with_selectors(mut self, selectors: impl Into<Selectors>) -> Self {
        self.selectors = selectors.into();
        self
    }

    pub fn with_error_selectors(mut self, selectors: impl Into<Selectors>) -> Self {
        self.error_selectors = Some(selectors.into());
        self
    }
}

// ============================================================================
// Indicator
// ============================================================================

/// The signal source of an objective, in its file shape.
///
/// Keys naming an indicator kind this crate does not know are kept in
/// `unknown` and count as populated, so `{ http = {}, latency = {} }` is
/// reported as [`CompileError::UnsupportedIndicator`] rather than compiled
/// as HTTP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpIndicator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc: Option<GrpcIndicator>,

    /// Unrecognized kinds, by key.
    #[serde(flatten, skip_serializing)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

/// Borrowed view of the single populated indicator variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorKind<'a> {
    Http(&'a HttpIndicator),
    Grpc(&'a GrpcIndicator),
}

impl IndicatorKind<'_> {
    /// Short name used in listings and logs.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Http(_) => "http",
            IndicatorKind::Grpc(_) => "grpc",
        }
    }
}

impl Indicator {
    pub fn http(indicator: HttpIndicator) -> Self {
        Self {
            http: Some(indicator),
            ..Default::default()
        }
    }

    pub fn grpc(indicator: GrpcIndicator) -> Self {
        Self {
            grpc: Some(indicator),
            ..Default::default()
        }
    }

    /// Number of populated variants, unknown kinds included.
    pub fn populated(&self) -> usize {
        usize::from(self.http.is_some()) + usize::from(self.grpc.is_some()) + self.unknown.len()
    }

    /// Narrow to the populated variant.
    ///
    /// Fails with [`CompileError::UnsupportedIndicator`] unless exactly one
    /// known variant and no unknown kind is set.
    pub fn kind(&self) -> CompileResult<IndicatorKind<'_>> {
        match (&self.http, &self.grpc) {
            (Some(http), None) if self.unknown.is_empty() => Ok(IndicatorKind::Http(http)),
            (None, Some(grpc)) if self.unknown.is_empty() => Ok(IndicatorKind::Grpc(grpc)),
            _ => Err(CompileError::UnsupportedIndicator {
                populated: self.populated(),
            }),
        }
    }
}

impl From<HttpIndicator> for Indicator {
    fn from(indicator: HttpIndicator) -> Self {
        Self::http(indicator)
    }
}

impl From<GrpcIndicator> for Indicator {
    fn from(indicator: GrpcIndicator) -> Self {
        Self::grpc(indicator)
    }
}
