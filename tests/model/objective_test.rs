//! Integration tests for objective validation and serialization.

use std::time::Duration;

use burnrate::model::{GrpcIndicator, HttpIndicator, Objective, ObjectiveError};

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

#[test]
fn test_builder_sets_metadata() {
    let objective = Objective::new(DAY * 28, 99.9, HttpIndicator::default())
        .with_name("checkout")
        .with_description("Checkout availability");

    assert_eq!(objective.name, "checkout");
    assert_eq!(objective.description.as_deref(), Some("Checkout availability"));
    assert_eq!(objective.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_preconditions() {
    let cases = [
        (
            Objective::new(Duration::ZERO, 99.0, HttpIndicator::default()),
            ObjectiveError::NonPositiveWindow,
        ),
        (
            Objective::new(DAY, 0.0, HttpIndicator::default()),
            ObjectiveError::TargetOutOfRange(0.0),
        ),
        (
            Objective::new(DAY, 101.0, HttpIndicator::default()),
            ObjectiveError::TargetOutOfRange(101.0),
        ),
        (
            Objective::new(DAY, 99.0, GrpcIndicator::new("", "Get")),
            ObjectiveError::MissingGrpcField("service"),
        ),
    ];

    for (objective, expected) in cases {
        assert_eq!(objective.validate(), Err(expected));
    }
}

#[test]
fn test_serialize_window_as_literal() {
    let objective = Objective::new(DAY * 14, 95.3, GrpcIndicator::new("awesome", "lightspeed"))
        .with_name("grpc");
    let json = serde_json::to_value(&objective).unwrap();

    assert_eq!(json["window"], "2w");
    assert_eq!(json["target"], 95.3);
    assert_eq!(json["indicator"]["grpc"]["service"], "awesome");
    assert!(json["indicator"].get("http").is_none());
}

#[test]
fn test_json_round_trip() {
    let objective = Objective::new(
        DAY,
        99.5,
        HttpIndicator::default().with_selectors([r#"job="api""#]),
    )
    .with_name("api");

    let json = serde_json::to_string(&objective).unwrap();
    let decoded: Objective = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, objective);
}
