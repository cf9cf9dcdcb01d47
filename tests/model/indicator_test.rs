//! Integration tests for indicator shapes.

use burnrate::model::{GrpcIndicator, HttpIndicator, Indicator, IndicatorKind, Selectors};
use burnrate::CompileError;

#[test]
fn test_from_variants() {
    let http: Indicator = HttpIndicator::default().into();
    assert!(matches!(http.kind(), Ok(IndicatorKind::Http(_))));

    let grpc: Indicator = GrpcIndicator::new("svc", "Get").into();
    assert!(matches!(grpc.kind(), Ok(IndicatorKind::Grpc(_))));
}

#[test]
fn test_populated_count() {
    assert_eq!(Indicator::default().populated(), 0);
    assert_eq!(Indicator::http(HttpIndicator::default()).populated(), 1);

    let both = Indicator {
        http: Some(HttpIndicator::default()),
        grpc: Some(GrpcIndicator::new("svc", "Get")),
        ..Default::default()
    };
    assert_eq!(both.populated(), 2);
    assert_eq!(
        both.kind().unwrap_err(),
        CompileError::UnsupportedIndicator { populated: 2 }
    );
}

#[test]
fn test_unknown_kind_counts_as_populated() {
    let indicator: Indicator =
        serde_json::from_str(r#"{"latency": {"metric": "http_request_duration_seconds"}}"#).unwrap();
    assert!(indicator.http.is_none());
    assert!(indicator.grpc.is_none());
    assert!(indicator.unknown.contains_key("latency"));
    assert_eq!(
        indicator.kind().unwrap_err(),
        CompileError::UnsupportedIndicator { populated: 1 }
    );
}

#[test]
fn test_known_kind_beside_unknown_kind_is_rejected() {
    let indicator: Indicator =
        serde_json::from_str(r#"{"http": {}, "latency": {"metric": "x"}}"#).unwrap();
    assert!(indicator.http.is_some());
    assert_eq!(
        indicator.kind().unwrap_err(),
        CompileError::UnsupportedIndicator { populated: 2 }
    );
}

#[test]
fn test_unknown_kind_is_not_serialized() {
    let indicator: Indicator = serde_json::from_str(r#"{"grpc": {"service": "s", "method": "m"}, "latency": {}}"#).unwrap();
    let json = serde_json::to_value(&indicator).unwrap();
    assert!(json.get("latency").is_none());
    assert_eq!(json["grpc"]["service"], "s");
}

#[test]
fn test_grpc_requires_service_and_method() {
    let result: Result<GrpcIndicator, _> = serde_json::from_str(r#"{"service": "svc"}"#);
    assert!(result.is_err());
}

#[test]
fn test_selectors_deserialize_as_list() {
    let http: HttpIndicator =
        serde_json::from_str(r#"{"selectors": ["job=\"a\"", "env=\"prod\""]}"#).unwrap();
    assert_eq!(http.selectors, Selectors::from([r#"job="a""#, r#"env="prod""#]));
    assert!(http.error_selectors.is_empty());
    assert_eq!(http.metric, None);
}
