use chrono::{DateTime, NaiveDate, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Reseller,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Reseller => "reseller",
        }
    }

    /// Landing page of the role's portal.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Reseller => "/reseller/dashboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(default, alias = "full_name")]
    pub name: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| "Unnamed Reseller".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGrant {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshGrant {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordUpdate {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitStatus {
    Active,
    Inactive,
    Leased,
    Maintenance,
}

impl KitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KitStatus::Active => "active",
            KitStatus::Inactive => "inactive",
            KitStatus::Leased => "leased",
            KitStatus::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub marketing_description: Option<String>,
    #[serde(default)]
    pub deal_code: Option<String>,
    #[serde(default)]
    pub rental_price: Option<f64>,
    #[serde(default)]
    pub rental_term: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    #[serde(default)]
    pub detail1_image_url: Option<String>,
    #[serde(default)]
    pub detail2_image_url: Option<String>,
    pub status: KitStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Kit {
    /// Older rows store an empty string when no image was uploaded.
    pub fn hero_image(&self) -> Option<&str> {
        self.hero_image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKit {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_description: Option<String>,
    pub deal_code: String,
    pub rental_price: f64,
    pub rental_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail1_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail2_image_url: Option<String>,
    pub status: KitStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    Contacted,
    Reviewing,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Kanban column order.
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::New,
        ApplicationStatus::Contacted,
        ApplicationStatus::Reviewing,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::Contacted => "contacted",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn column_label(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "New Inquiries",
            ApplicationStatus::Contacted => "Contacted",
            ApplicationStatus::Reviewing => "In Review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Approved | ApplicationStatus::Rejected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResellerApplication {
    pub id: String,
    pub company_name: String,
    pub applicant_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewApplication {
    pub company_name: String,
    pub applicant_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch<S> {
    pub status: S,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Qualified => "qualified",
            LeadStatus::Closed => "closed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    #[serde(default)]
    pub reseller_id: Option<String>,
    pub name: String,
    pub email: String,
    pub company: String,
    pub status: LeadStatus,
    pub value: f64,
    #[serde(default)]
    pub last_contact: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub reseller_id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub status: LeadStatus,
    pub value: f64,
    pub last_contact: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitAssignment {
    pub reseller_id: String,
    pub kit_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "PARSE_ERROR")
    }

    pub fn config_missing() -> Self {
        Self::with_code(
            "Backend client is not configured. Check your runtime config.",
            "CONFIG_MISSING",
        )
    }

    pub fn profile_missing() -> Self {
        Self::with_code(
            "User profile not found. Please contact support.",
            "PROFILE_NOT_FOUND",
        )
    }

    pub fn no_row_returned() -> Self {
        Self::with_code("No row returned from insert", "NO_ROW_RETURNED")
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self::with_code(msg, &format!("HTTP_{}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_reads_full_name_column_as_name() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": "p1",
            "email": "ops@technolease.com",
            "role": "admin",
            "full_name": "Ops Lead"
        }))
        .unwrap();
        assert_eq!(profile.role, Role::Admin);
        assert_eq!(profile.name.as_deref(), Some("Ops Lead"));
        assert_eq!(profile.display_name(), "Ops Lead");
    }

    #[test]
    fn profile_without_name_falls_back_to_placeholder() {
        let profile: UserProfile = serde_json::from_value(json!({
            "id": "p2",
            "role": "reseller",
            "full_name": "  "
        }))
        .unwrap();
        assert_eq!(profile.email, "");
        assert_eq!(profile.display_name(), "Unnamed Reseller");
    }

    #[test]
    fn role_home_paths_point_to_portal_dashboards() {
        assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
        assert_eq!(Role::Reseller.home_path(), "/reseller/dashboard");
    }

    #[test]
    fn unknown_application_status_is_rejected() {
        let parsed = serde_json::from_value::<ApplicationStatus>(json!("archived"));
        assert!(parsed.is_err());
    }

    #[test]
    fn only_approved_and_rejected_are_terminal() {
        let terminal: Vec<_> = ApplicationStatus::ALL
            .into_iter()
            .filter(ApplicationStatus::is_terminal)
            .collect();
        assert_eq!(
            terminal,
            vec![ApplicationStatus::Approved, ApplicationStatus::Rejected]
        );
    }

    #[test]
    fn kit_hero_image_ignores_blank_urls() {
        let kit: Kit = serde_json::from_value(json!({
            "id": "k1",
            "name": "Executive Suite",
            "hero_image_url": "",
            "status": "active"
        }))
        .unwrap();
        assert!(kit.hero_image().is_none());
        assert!(kit.description.is_none());
    }

    #[test]
    fn new_kit_omits_missing_images() {
        let kit = NewKit {
            name: "Dev Tower".into(),
            description: "Dual monitors".into(),
            marketing_description: None,
            deal_code: "DEAL-1".into(),
            rental_price: 189.0,
            rental_term: "24 Months".into(),
            hero_image_url: Some("https://cdn/hero.png".into()),
            detail1_image_url: None,
            detail2_image_url: None,
            status: KitStatus::Active,
        };
        let value = serde_json::to_value(&kit).unwrap();
        assert_eq!(value["status"], "active");
        assert_eq!(value["hero_image_url"], "https://cdn/hero.png");
        assert!(value.get("detail1_image_url").is_none());
        assert!(value.get("marketing_description").is_none());
    }

    #[test]
    fn lead_status_parse_matches_wire_names() {
        for status in LeadStatus::ALL {
            assert_eq!(LeadStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(LeadStatus::parse("won"), None);
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::validation("bad").code, "VALIDATION_ERROR");
        assert_eq!(ApiError::unknown("x").code, "UNKNOWN");
        assert_eq!(ApiError::request_failed("net").code, "REQUEST_FAILED");
        assert_eq!(ApiError::parse("json").code, "PARSE_ERROR");
        assert_eq!(ApiError::config_missing().code, "CONFIG_MISSING");
        assert_eq!(ApiError::profile_missing().code, "PROFILE_NOT_FOUND");
        assert_eq!(ApiError::http(409, "conflict").code, "HTTP_409");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }
}
