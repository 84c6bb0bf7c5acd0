use serde::Serialize;

use crate::models::{ReportStatus, Severity, UserRole};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: UserRole,
}

/// Body of `POST /citizen/reports`.
///
/// Empty coordinate inputs must reach the wire as explicit `null`, never
/// `0` or an omitted key — so no `skip_serializing_if` here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub severity: Severity,
}

/// Body of `PATCH /admin/reports/:id/status`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusChange {
    pub status: ReportStatus,
}

/// Body of `POST /admin/reports/:id/assign`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignVolunteer {
    pub volunteer_id: i64,
    pub task_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_report_serializes_absent_coordinates_as_null() {
        let report = NewReport {
            title: "Bridge out".to_string(),
            description: "Span collapsed".to_string(),
            location: "River Rd".to_string(),
            latitude: None,
            longitude: None,
            severity: Severity::Critical,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""latitude":null"#), "got: {json}");
        assert!(json.contains(r#""longitude":null"#), "got: {json}");
        assert!(!json.contains(r#""latitude":0"#));
    }

    #[test]
    fn new_report_serializes_present_coordinates_as_numbers() {
        let report = NewReport {
            title: "t".to_string(),
            description: "d".to_string(),
            location: "l".to_string(),
            latitude: Some(40.7),
            longitude: Some(-74.0),
            severity: Severity::Low,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["latitude"], serde_json::json!(40.7));
        assert_eq!(value["longitude"], serde_json::json!(-74.0));
        assert_eq!(value["severity"], serde_json::json!("low"));
    }

    #[test]
    fn status_change_body_shape() {
        let body = StatusChange {
            status: ReportStatus::Resolved,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"resolved"}"#
        );
    }

    #[test]
    fn signup_request_carries_role_string() {
        let body = SignupRequest {
            name: "N".to_string(),
            email: "n@e.org".to_string(),
            password: "hunter22".to_string(),
            phone: "555-0102".to_string(),
            role: UserRole::Volunteer,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["role"], serde_json::json!("volunteer"));
    }

    #[test]
    fn assign_volunteer_body_shape() {
        let body = AssignVolunteer {
            volunteer_id: 9,
            task_description: "Deliver water".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"volunteer_id":9,"task_description":"Deliver water"}"#
        );
    }
}
