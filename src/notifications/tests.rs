//! Tests for notifications module
//!
//! These tests verify:
//! - Accumulator ordering and queries
//! - Envelope shape and status codes
//! - External error mapping

#[cfg(test)]
mod tests {
    use super::super::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::io;

    #[test]
    fn test_new_accumulator_is_empty() {
        let notifications = Notifications::new();

        assert!(!notifications.has_any());
        assert!(notifications.all().is_empty());
        assert!(notifications.messages().is_empty());
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut notifications = Notifications::new();
        notifications.add("A");
        notifications.add("B");
        notifications.add("A");

        assert!(notifications.has_any());
        assert_eq!(notifications.messages(), vec!["A", "B", "A"]);
        assert_eq!(notifications.all()[1].message(), "B");
    }

    #[test]
    fn test_queries_are_repeatable() {
        let mut notifications = Notifications::new();
        notifications.add("first");

        let first = notifications.messages();
        let second = notifications.messages();
        assert_eq!(first, second);
        assert_eq!(notifications.has_any(), notifications.has_any());
        assert_eq!(notifications.all(), notifications.all());
    }

    #[test]
    fn test_empty_message_is_stored() {
        let mut notifications = Notifications::new();
        notifications.add("");

        assert!(notifications.has_any());
        assert_eq!(notifications.messages(), vec![""]);
    }

    #[test]
    fn test_add_for_keeps_field() {
        let mut notifications = Notifications::new();
        notifications.add_for("email", "Email is required");

        let record = &notifications.all()[0];
        assert_eq!(record.field(), Some("email"));
        assert_eq!(record.message(), "Email is required");
    }

    #[test]
    fn test_merge_appends_after_existing() {
        let mut first = Notifications::new();
        first.add("one");
        let mut second = Notifications::new();
        second.add("two");
        second.add("three");

        first.merge(second);
        assert_eq!(first.messages(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_standardize_success_with_payload() {
        let notifications = Notifications::new();
        let response = standardize(&notifications, Some(json!({ "id": 1 })));

        assert!(response.is_success());
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "data": { "id": 1 } })
        );
    }

    #[test]
    fn test_standardize_success_without_payload() {
        let notifications = Notifications::new();
        let response: ApiResponse<serde_json::Value> = standardize(&notifications, None);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": true, "data": null })
        );
    }

    #[test]
    fn test_standardize_failure_ignores_payload() {
        let mut notifications = Notifications::new();
        notifications.add("email already registered");

        let response = standardize(&notifications, Some(json!({ "id": 1 })));

        assert!(!response.is_success());
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "success": false, "errors": ["email already registered"] })
        );
    }

    #[test]
    fn test_standardize_failure_keeps_order() {
        let mut notifications = Notifications::new();
        notifications.add("B");
        notifications.add("A");
        notifications.add("B");

        let response = standardize(&notifications, Some(()));
        assert_eq!(
            response,
            ApiResponse::Failure {
                errors: vec!["B".to_string(), "A".to_string(), "B".to_string()]
            }
        );
    }

    #[test]
    fn test_external_errors_prefer_cause() {
        let errors = vec![
            FieldError::new("address", "invalid value")
                .with_cause(io::Error::new(io::ErrorKind::TimedOut, "timeout")),
            FieldError::new("name", "required"),
        ];

        let mut notifications = Notifications::new();
        notifications.add_external(&errors);

        assert_eq!(notifications.messages(), vec!["timeout", "required"]);
        assert_eq!(notifications.all()[0].field(), Some("address"));
    }

    #[test]
    fn test_external_errors_to_notifications_empty_input() {
        let errors: Vec<FieldError> = Vec::new();
        assert!(external_errors_to_notifications(&errors).is_empty());
    }

    #[test]
    fn test_external_errors_appended_after_existing_records() {
        let mut notifications = Notifications::new();
        notifications.add("first");
        notifications.add_external(&[FieldError::new("age", "must be a number")]);

        assert_eq!(notifications.messages(), vec!["first", "must be a number"]);
    }
}
