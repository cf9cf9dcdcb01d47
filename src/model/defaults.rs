//! Built-in metric names and error selectors.
//!
//! These literals are consumed verbatim by dashboards and alerts built on
//! top of the generated queries. Changing any of them is a breaking change.

/// Metric queried by HTTP indicators that do not name one.
pub const HTTP_METRIC: &str = "http_requests_total";

/// Error selector for HTTP indicators without explicit error selectors.
pub const HTTP_ERROR_SELECTOR: &str = r#"code=~"5..""#;

/// Metric queried by every GRPC indicator.
pub const GRPC_METRIC: &str = "grpc_server_handled_total";

/// Label carrying the fully-qualified GRPC service name.
pub const GRPC_SERVICE_LABEL: &str = "grpc_service";

/// Label carrying the GRPC method name.
pub const GRPC_METHOD_LABEL: &str = "grpc_method";

/// Error selector for GRPC indicators without explicit error selectors.
pub const GRPC_ERROR_SELECTOR: &str =
    r#"grpc_code=~"Aborted|Unavailable|Internal|Unknown|Unimplemented|DataLoss""#;
