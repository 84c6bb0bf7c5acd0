use serde::{Deserialize, Serialize};

/// Role of an authenticated user, controlling which dashboard renders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Citizen,
    Volunteer,
    Admin,
}

impl UserRole {
    /// Parse a role string. Unknown values default to Citizen.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "volunteer" => UserRole::Volunteer,
            "admin" => UserRole::Admin,
            _ => UserRole::Citizen,
        }
    }

    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Citizen => "citizen",
            UserRole::Volunteer => "volunteer",
            UserRole::Admin => "admin",
        }
    }
}

/// The authenticated user — the client's session payload, also reused for
/// report reporters and the admin volunteer roster (the backend serializes
/// them all from the same user record).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

fn default_true() -> bool {
    true
}

/// Severity of a disaster report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Options offered by the report form, in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

/// Lifecycle status of a disaster report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Acknowledged,
    InProgress,
    Resolved,
    Cancelled,
}

impl ReportStatus {
    /// Fixed bucket order of the admin dashboard.
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Pending,
        ReportStatus::Acknowledged,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
        ReportStatus::Cancelled,
    ];

    /// Strict parse used by the status-change control; unknown values are
    /// a no-op there, not a default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReportStatus::Pending),
            "acknowledged" => Some(ReportStatus::Acknowledged),
            "in_progress" => Some(ReportStatus::InProgress),
            "resolved" => Some(ReportStatus::Resolved),
            "cancelled" => Some(ReportStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Acknowledged => "acknowledged",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Acknowledged => "Acknowledged",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Cancelled => "Cancelled",
        }
    }
}

/// A volunteer task attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolunteerTask {
    pub id: i64,
    pub task_description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub volunteer: Option<AuthUser>,
    #[serde(default)]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub assigned_at: Option<String>,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A disaster report. The client only ever holds transient read copies;
/// the backend owns the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub severity: Severity,
    pub status: ReportStatus,
    #[serde(default)]
    pub reporter: Option<AuthUser>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    #[serde(default)]
    pub volunteer_tasks: Vec<VolunteerTask>,
}

/// Level of a broadcast alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }
}

/// A broadcast alert — read-only display entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub alert_level: AlertLevel,
    #[serde(default)]
    pub report_id: Option<i64>,
    #[serde(default)]
    pub created_at: String,
}

/// Aggregate report counts from the public statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DisasterStats {
    #[serde(default)]
    pub total_reports: i64,
    #[serde(default)]
    pub active_reports: i64,
    #[serde(default)]
    pub resolved_reports: i64,
}

/// Aggregate resource counts from the public statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResourceStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub available: i64,
}

/// Payload of `GET /public/statistics`. Note: the endpoint carries no
/// volunteer count — that tile always renders a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PublicStatistics {
    #[serde(default)]
    pub disaster_stats: DisasterStats,
    #[serde(default)]
    pub resource_stats: ResourceStats,
}

/// Payload of `GET /admin/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminDashboardStats {
    #[serde(default)]
    pub total_reports: i64,
    #[serde(default)]
    pub pending_reports: i64,
    #[serde(default)]
    pub active_volunteers: i64,
    #[serde(default)]
    pub total_resources: i64,
}

/// Envelope of `GET /public/disasters`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisasterList {
    pub disasters: Vec<Report>,
}

/// Envelope of `GET /public/alerts`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlertList {
    pub alerts: Vec<Alert>,
}

/// Envelope of `GET /admin/reports`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReportPage {
    pub reports: Vec<Report>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub pages: i64,
    #[serde(default)]
    pub current_page: i64,
}

/// Envelope of `GET /admin/volunteers`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VolunteerList {
    pub volunteers: Vec<AuthUser>,
    #[serde(default)]
    pub total: i64,
}

/// Envelope of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_roundtrip_and_default() {
        for role in [UserRole::Citizen, UserRole::Volunteer, UserRole::Admin] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Citizen);
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Citizen);
    }

    #[test]
    fn report_status_wire_names() {
        for status in ReportStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ReportStatus::parse("archived"), None);
        assert_eq!(ReportStatus::parse(""), None);
    }

    #[test]
    fn bucket_order_is_fixed() {
        let names: Vec<&str> = ReportStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            ["pending", "acknowledged", "in_progress", "resolved", "cancelled"]
        );
    }

    #[test]
    fn severity_parse_defaults_to_medium() {
        assert_eq!(Severity::from_str_or_default("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::from_str_or_default("bogus"), Severity::Medium);
    }

    #[test]
    fn login_response_decodes_session_user() {
        let body = r#"{"user":{"id":1,"name":"A","email":"a@b.com","role":"citizen"}}"#;
        let parsed: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.user.name, "A");
        assert_eq!(parsed.user.role, UserRole::Citizen);
        assert!(parsed.user.is_active);
    }

    #[test]
    fn report_decodes_backend_shape() {
        let body = r#"{
            "id": 7,
            "title": "Flooded underpass",
            "description": "Water rising fast",
            "location": "5th & Main",
            "latitude": null,
            "longitude": null,
            "severity": "high",
            "status": "in_progress",
            "reporter": {"id":2,"name":"Dana","email":"d@e.org","phone":"555-0101","role":"citizen"},
            "image_url": null,
            "created_at": "2026-08-01T10:15:00",
            "updated_at": "2026-08-01T11:00:00",
            "resolved_at": null,
            "volunteer_tasks": [
                {"id":1,"task_description":"Sandbags","status":"assigned","volunteer":{"id":3,"name":"Vee","email":"v@e.org"}}
            ]
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(report.severity, Severity::High);
        assert_eq!(report.latitude, None);
        assert_eq!(report.reporter.as_ref().unwrap().phone.as_deref(), Some("555-0101"));
        assert_eq!(report.volunteer_tasks.len(), 1);
    }

    #[test]
    fn report_tolerates_missing_tasks() {
        let body = r#"{
            "id": 1, "title": "t", "description": "d", "location": "l",
            "severity": "low", "status": "pending"
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        assert!(report.volunteer_tasks.is_empty());
        assert!(report.reporter.is_none());
    }

    #[test]
    fn statistics_decode_nested_shape() {
        let body = r#"{
            "disaster_stats": {"total_reports": 12, "active_reports": 4, "resolved_reports": 8},
            "resource_stats": {"total": 20, "available": 15}
        }"#;
        let stats: PublicStatistics = serde_json::from_str(body).unwrap();
        assert_eq!(stats.disaster_stats.active_reports, 4);
        assert_eq!(stats.resource_stats.available, 15);
    }

    #[test]
    fn alert_level_defaults_to_info() {
        let body = r#"{"id":1,"title":"Heat advisory","message":"Stay hydrated"}"#;
        let alert: Alert = serde_json::from_str(body).unwrap();
        assert_eq!(alert.alert_level, AlertLevel::Info);
    }
}
