// Unit tests for error mapping - pure domain logic without transport concerns
use crate::errors::domain::{
    ConflictKind, DomainError, ErrorCategory, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_with_category() {
    let de = DomainError::validation(ValidationKind::OutOfTurn, "seat 4 is not to act");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::OutOfTurn);
    assert_eq!(app.category(), Some(ErrorCategory::Turn));
    assert_eq!(app.detail(), "seat 4 is not to act");
}

#[test]
fn maps_rule_violations() {
    let cases = [
        (ValidationKind::HoldCardRequired, "HOLD_CARD_REQUIRED"),
        (ValidationKind::UnderCardBuried, "UNDER_CARD_BURIED"),
        (ValidationKind::IllegalCall, "ILLEGAL_CALL"),
        (ValidationKind::UnderCardRequired, "UNDER_CARD_REQUIRED"),
        (ValidationKind::IllegalPlay, "ILLEGAL_PLAY"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "rule").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.category(), Some(ErrorCategory::Rule));
    }
}

#[test]
fn maps_conflicts() {
    let busy = DomainError::conflict(ConflictKind::HandInProgress, "hand running");
    let app: AppError = busy.into();
    assert_eq!(app.code().as_str(), "HAND_IN_PROGRESS");
    assert!(matches!(app, AppError::Conflict { .. }));
    assert_eq!(app.category(), None);

    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Table, "no table");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "TABLE_NOT_FOUND");
    assert!(matches!(app, AppError::NotFound { .. }));
}

#[test]
fn rejection_payload_carries_code_and_title() {
    let app: AppError =
        DomainError::validation(ValidationKind::NotPicker, "only the picker").into();
    let rejection = app.rejection();
    assert_eq!(rejection.code, "NOT_PICKER");
    assert_eq!(rejection.title, "Not Picker");
    assert_eq!(rejection.category.as_deref(), Some("Authority"));

    let json = serde_json::to_value(&rejection).unwrap();
    assert_eq!(json["detail"], "only the picker");
}

#[test]
fn config_and_internal_have_fixed_codes() {
    assert_eq!(AppError::config("bad").code(), ErrorCode::ConfigError);
    assert_eq!(AppError::internal("boom").code(), ErrorCode::Internal);
    assert!(AppError::internal("boom").rejection().category.is_none());
}
