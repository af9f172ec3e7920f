//! Wire DTOs for the REST backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's serializer output so serde round-trips
//! stay lossless and screens can render records as fetched. The client never
//! derives its own identity record from a login response; it always refetches
//! the authoritative one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role assigned at registration. Immutable afterwards; profile
/// updates never carry it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Recruiter,
}

/// Profile half of the identity record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Public URL of the uploaded picture, if any. The upload itself goes
    /// out under the multipart field name `profile_picture`.
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    pub role: Role,
}

/// The authenticated account as returned by `GET /me/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub profile: Profile,
}

impl Identity {
    /// Display name preferring the profile's first name over the username.
    pub fn display_name(&self) -> &str {
        match self.profile.first_name.as_deref() {
            Some(first) if !first.is_empty() => first,
            _ => &self.username,
        }
    }
}

/// Lifecycle status of a posted internship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InternshipStatus {
    #[default]
    Open,
    Closed,
    Archived,
}

/// A posted internship as listed and viewed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub stipend: Option<i64>,
    #[serde(default)]
    pub internship_type: String,
    pub apply_link: Option<String>,
    /// ISO 8601 timestamp set by the backend on creation.
    #[serde(default)]
    pub posted_on: String,
    #[serde(default)]
    pub status: InternshipStatus,
    pub expiry_date: Option<String>,
    /// Posting recruiter's account id.
    pub recruiter: i64,
    /// Whether the requesting student bookmarked this internship; the
    /// backend computes it per request and sends `false` for everyone else.
    #[serde(default)]
    pub bookmarked: bool,
}

/// Review status of a submitted application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Wire value used by the status-update endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// An application as seen by the applying student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub internship: Internship,
    /// URL of the uploaded resume, when one was attached to the application.
    pub resume: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_on: String,
}

/// An application as seen by the reviewing recruiter, with the applicant
/// attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: i64,
    pub user: Identity,
    pub resume: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_on: String,
}

/// A saved bookmark row; the backend flattens the internship summary fields
/// onto it so the list screen renders without a second fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    /// Bookmarked internship's id.
    pub internship: i64,
    #[serde(default)]
    pub internship_title: String,
    #[serde(default)]
    pub internship_company: String,
    #[serde(default)]
    pub internship_location: String,
    #[serde(default)]
    pub bookmarked_on: String,
}

/// One row of the per-account activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i64,
    /// Machine action name, e.g. `"bookmark_added"` or `"login"`.
    pub action: String,
    pub related_object_id: Option<i64>,
    #[serde(default)]
    pub timestamp: String,
    pub details: Option<String>,
}

/// Pagination envelope used by the list endpoints. `total_pages` is absent
/// on endpoints that use the plain count/next/previous shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<i64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Registration request body. The backend expects the role nested under
/// `profile`, mirroring the identity record's shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: RegisterProfile,
}

/// Role wrapper for [`RegisterPayload`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterProfile {
    pub role: Role,
}

/// Partial update for the account half of the identity (`PATCH /me/user/`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial update for the profile half of the identity
/// (`PATCH /me/profile/`). The role is deliberately not representable here.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Create/edit request body for an internship posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InternshipDraft {
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stipend: Option<i64>,
    pub internship_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}
