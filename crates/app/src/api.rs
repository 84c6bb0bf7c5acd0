//! REST client layer. Every function targets the backend under the current
//! page's origin and maps non-success responses to [`ApiError`] with the
//! backend's `{"error": ...}` message attached when present.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    AdminDashboardStats, Alert, AlertList, ApiError, AssignVolunteer, AuthUser, DisasterList,
    LoginRequest, LoginResponse, NewReport, PublicStatistics, Report, ReportPage, ReportStatus,
    SignupRequest, StatusChange, UserRole, VolunteerList,
};

/// Origin used when there is no browser `location` to derive one from
/// (native test builds). Matches the backend's dev-server address.
const FALLBACK_ORIGIN: &str = "http://localhost:8000";

fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_ORIGIN.to_string()
    }
}

fn url(path: &str) -> String {
    format!("{}/api{}", origin(), path)
}

fn client() -> Client {
    Client::new()
}

/// Opt into sending the session cookie. On the browser this switches fetch
/// to `credentials: include`; native builds carry cookies per-client and
/// need nothing here.
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        builder.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = with_credentials(builder)
        .send()
        .await
        .map_err(|err| ApiError::transport(err.to_string()))?;

    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::from_response_parts(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::transport(format!("invalid response body: {err}")))
}

// ── Session ──

pub async fn current_user() -> Result<AuthUser, ApiError> {
    let response = send(client().get(url("/auth/me"))).await?;
    decode(response).await
}

pub async fn login(request: LoginRequest) -> Result<AuthUser, ApiError> {
    let response = send(client().post(url("/auth/login")).json(&request)).await?;
    let body: LoginResponse = decode(response).await?;
    Ok(body.user)
}

pub async fn signup(request: SignupRequest) -> Result<(), ApiError> {
    send(client().post(url("/auth/signup")).json(&request)).await?;
    Ok(())
}

pub async fn logout() -> Result<(), ApiError> {
    send(client().post(url("/auth/logout"))).await?;
    Ok(())
}

// ── Public data ──

pub async fn public_statistics() -> Result<PublicStatistics, ApiError> {
    let response = send(client().get(url("/public/statistics"))).await?;
    decode(response).await
}

pub async fn public_disasters() -> Result<Vec<Report>, ApiError> {
    let response = send(client().get(url("/public/disasters"))).await?;
    let body: DisasterList = decode(response).await?;
    Ok(body.disasters)
}

pub async fn public_alerts() -> Result<Vec<Alert>, ApiError> {
    let response = send(client().get(url("/public/alerts"))).await?;
    let body: AlertList = decode(response).await?;
    Ok(body.alerts)
}

// ── Citizen / volunteer ──

pub async fn submit_report(report: NewReport) -> Result<(), ApiError> {
    send(client().post(url("/citizen/reports")).json(&report)).await?;
    Ok(())
}

/// Role dashboards return an opaque key-value summary; the client renders
/// whatever keys arrive.
pub async fn role_dashboard(role: UserRole) -> Result<serde_json::Value, ApiError> {
    let path = match role {
        UserRole::Volunteer => "/volunteer/dashboard",
        _ => "/citizen/dashboard",
    };
    let response = send(client().get(url(path))).await?;
    decode(response).await
}

// ── Admin ──

pub async fn admin_dashboard() -> Result<AdminDashboardStats, ApiError> {
    let response = send(client().get(url("/admin/dashboard"))).await?;
    decode(response).await
}

pub async fn admin_reports(per_page: u32) -> Result<ReportPage, ApiError> {
    let response = send(
        client()
            .get(url("/admin/reports"))
            .query(&[("per_page", per_page)]),
    )
    .await?;
    decode(response).await
}

pub async fn admin_report(id: i64) -> Result<Report, ApiError> {
    let response = send(client().get(url(&format!("/admin/reports/{id}")))).await?;
    decode(response).await
}

pub async fn update_report_status(id: i64, status: ReportStatus) -> Result<(), ApiError> {
    send(
        client()
            .patch(url(&format!("/admin/reports/{id}/status")))
            .json(&StatusChange { status }),
    )
    .await?;
    Ok(())
}

pub async fn assign_volunteer(id: i64, assignment: AssignVolunteer) -> Result<(), ApiError> {
    send(
        client()
            .post(url(&format!("/admin/reports/{id}/assign")))
            .json(&assignment),
    )
    .await?;
    Ok(())
}

pub async fn volunteers() -> Result<Vec<AuthUser>, ApiError> {
    let response = send(client().get(url("/admin/volunteers"))).await?;
    let body: VolunteerList = decode(response).await?;
    Ok(body.volunteers)
}

/// Binary CSV export. The payload is saved, never rendered.
pub async fn export_reports() -> Result<Vec<u8>, ApiError> {
    let response = send(client().get(url("/admin/reports/export"))).await?;
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|err| ApiError::transport(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn urls_are_rooted_under_api() {
        assert_eq!(url("/auth/me"), "http://localhost:8000/api/auth/me");
        assert_eq!(
            url("/admin/reports/7/status"),
            "http://localhost:8000/api/admin/reports/7/status"
        );
    }

    #[test]
    fn query_paths_keep_origin_prefix() {
        assert!(url("/public/statistics").starts_with(FALLBACK_ORIGIN));
    }
}
