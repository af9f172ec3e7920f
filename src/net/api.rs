//! REST API helpers for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, attaching the
//! bearer token from the credential store to authenticated endpoints.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics. Non-success
//! responses funnel through one shared mapper, so a rejected bearer token is
//! always classified the same way and always clears the stored credentials.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::{parse_error_body, parse_login_error};
use super::types::{
    AccountUpdate, ActivityLog, Applicant, Application, ApplicationStatus, Bookmark, Identity,
    Internship, InternshipDraft, Paginated, ProfileUpdate, RegisterPayload,
};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

/// Browser file handle for multipart uploads; a unit placeholder off-browser.
#[cfg(feature = "hydrate")]
pub type UploadFile = web_sys::File;
/// Browser file handle for multipart uploads; a unit placeholder off-browser.
#[cfg(not(feature = "hydrate"))]
pub type UploadFile = ();

#[cfg(feature = "hydrate")]
const TOKEN_ENDPOINT: &str = "/api/token/";
#[cfg(feature = "hydrate")]
const LOGOUT_ENDPOINT: &str = "/api/logout/";
#[cfg(feature = "hydrate")]
const ME_ENDPOINT: &str = "/me/";
#[cfg(feature = "hydrate")]
const ME_USER_ENDPOINT: &str = "/me/user/";
#[cfg(feature = "hydrate")]
const ME_PROFILE_ENDPOINT: &str = "/me/profile/";
#[cfg(feature = "hydrate")]
const CHANGE_PASSWORD_ENDPOINT: &str = "/me/change-password/";
#[cfg(feature = "hydrate")]
const REGISTER_ENDPOINT: &str = "/register/";
#[cfg(feature = "hydrate")]
const FORGOT_PASSWORD_ENDPOINT: &str = "/forgot-password/";
#[cfg(feature = "hydrate")]
const INTERNSHIPS_CREATE_ENDPOINT: &str = "/internships/create/";
#[cfg(feature = "hydrate")]
const INTERNSHIPS_MINE_ENDPOINT: &str = "/internships/mine/";
#[cfg(feature = "hydrate")]
const APPLICATIONS_MINE_ENDPOINT: &str = "/applications/mine/";
#[cfg(feature = "hydrate")]
const BOOKMARKS_LIST_ENDPOINT: &str = "/bookmarks/list/";
#[cfg(feature = "hydrate")]
const ACTIVITY_LOGS_ENDPOINT: &str = "/activity_logs/";

#[cfg(any(test, feature = "hydrate"))]
fn internships_page_endpoint(page: i64) -> String {
    format!("/internships/?page={page}")
}

#[cfg(any(test, feature = "hydrate"))]
fn internship_view_endpoint(id: i64) -> String {
    format!("/internships/{id}/view/")
}

#[cfg(any(test, feature = "hydrate"))]
fn internship_edit_endpoint(id: i64) -> String {
    format!("/internships/{id}/edit/")
}

#[cfg(any(test, feature = "hydrate"))]
fn applicants_endpoint(internship_id: i64) -> String {
    format!("/internships/{internship_id}/applicants/")
}

#[cfg(any(test, feature = "hydrate"))]
fn apply_endpoint(internship_id: i64) -> String {
    format!("/applications/apply/{internship_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_check_endpoint(internship_id: i64) -> String {
    format!("/applications/check/{internship_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn application_status_endpoint(application_id: i64) -> String {
    format!("/applications/{application_id}/status/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookmark_add_endpoint(internship_id: i64) -> String {
    format!("/bookmarks/{internship_id}/add/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookmark_remove_endpoint(internship_id: i64) -> String {
    format!("/bookmarks/{internship_id}/remove/")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookmark_check_endpoint(internship_id: i64) -> String {
    format!("/bookmarks/check/{internship_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_endpoint(uid: &str, token: &str) -> String {
    format!("/reset-password/{uid}/{token}/")
}

/// Extract the row list from either a pagination envelope or a bare array.
#[cfg(any(test, feature = "hydrate"))]
fn list_results<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).unwrap_or_default(),
        serde_json::Value::Object(_) => serde_json::from_value::<Paginated<T>>(value)
            .map(|page| page.results)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[cfg(feature = "hydrate")]
fn authed(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::credentials::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Shared non-success mapper. A rejected bearer token clears the stored
/// credentials here, in one place, before the error reaches any screen.
#[cfg(feature = "hydrate")]
async fn response_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = parse_error_body(status, &body);
    if err.is_unauthenticated() {
        log::warn!("authenticated call rejected with {status}; clearing stored credentials");
        crate::util::credentials::clear_session();
    }
    err
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

// =============================================================
// Identity service
// =============================================================

/// Exchange a username/password pair for a bearer token via
/// `POST /api/token/`.
///
/// # Errors
///
/// `ApiError::InvalidCredentials` when the backend rejects the pair. The
/// returned token is not persisted here; the session context persists it
/// before fetching the identity record.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(parse_login_error(status, &body));
        }
        #[derive(Deserialize)]
        struct TokenResponse {
            access: String,
        }
        let body: TokenResponse = resp.json().await.map_err(network_error)?;
        Ok(body.access)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(unavailable())
    }
}

/// Fetch the authoritative identity record via `GET /me/`.
///
/// # Errors
///
/// `ApiError::Unauthenticated` when no valid token is established.
pub async fn fetch_me() -> Result<Identity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(ME_ENDPOINT))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Identity>().await.map_err(network_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Tell the backend to record a logout activity row. Fire-and-forget: the
/// client-side logout never depends on this call succeeding.
pub async fn logout_server() {
    #[cfg(feature = "hydrate")]
    {
        let _ = authed(gloo_net::http::Request::post(LOGOUT_ENDPOINT)).send().await;
    }
}

/// Create an account via `POST /register/`.
///
/// # Errors
///
/// `ApiError::Validation` with per-field messages on rejection.
pub async fn register(payload: &RegisterPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(unavailable())
    }
}

/// Update username/email via `PATCH /me/user/`.
pub async fn patch_me_user(update: &AccountUpdate) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::patch(ME_USER_ENDPOINT))
            .json(update)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(unavailable())
    }
}

/// Update profile fields via `PATCH /me/profile/`. Submits multipart when a
/// picture file is attached, JSON otherwise.
pub async fn patch_me_profile(update: &ProfileUpdate, picture: Option<UploadFile>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = authed(gloo_net::http::Request::patch(ME_PROFILE_ENDPOINT));
        let request = match picture {
            Some(file) => {
                let form = web_sys::FormData::new()
                    .map_err(|_| ApiError::Network("form construction failed".to_owned()))?;
                if let Some(first_name) = &update.first_name {
                    let _ = form.append_with_str("first_name", first_name);
                }
                if let Some(last_name) = &update.last_name {
                    let _ = form.append_with_str("last_name", last_name);
                }
                if let Some(bio) = &update.bio {
                    let _ = form.append_with_str("bio", bio);
                }
                if let Some(location) = &update.location {
                    let _ = form.append_with_str("location", location);
                }
                let _ = form.append_with_blob_and_filename("profile_picture", &file, &file.name());
                builder.body(form).map_err(network_error)?
            }
            None => builder.json(update).map_err(network_error)?,
        };
        let resp = request.send().await.map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (update, picture);
        Err(unavailable())
    }
}

/// Change the account password via `PUT /me/change-password/`.
pub async fn change_password(old_password: &str, new_password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "old_password": old_password,
            "new_password": new_password,
        });
        let resp = authed(gloo_net::http::Request::put(CHANGE_PASSWORD_ENDPOINT))
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (old_password, new_password);
        Err(unavailable())
    }
}

/// Request a password-reset email via `POST /forgot-password/`. Returns the
/// backend's confirmation message.
pub async fn forgot_password(email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post(FORGOT_PASSWORD_ENDPOINT)
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        #[derive(Deserialize)]
        struct MessageResponse {
            message: String,
        }
        let body: MessageResponse = resp.json().await.map_err(network_error)?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(unavailable())
    }
}

/// Complete an out-of-band password reset via
/// `POST /reset-password/{uid}/{token}/`.
pub async fn reset_password(uid: &str, token: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "password": password });
        let resp = gloo_net::http::Request::post(&reset_password_endpoint(uid, token))
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        #[derive(Deserialize)]
        struct MessageResponse {
            message: String,
        }
        let body: MessageResponse = resp.json().await.map_err(network_error)?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (uid, token, password);
        Err(unavailable())
    }
}

// =============================================================
// Internships
// =============================================================

/// Fetch one page of the public internship list.
pub async fn fetch_internships(page: i64) -> Result<Paginated<Internship>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&internships_page_endpoint(page))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Paginated<Internship>>().await.map_err(network_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(unavailable())
    }
}

/// Fetch one internship via `GET /internships/{id}/view/`.
pub async fn fetch_internship(id: i64) -> Result<Internship, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&internship_view_endpoint(id))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        resp.json::<Internship>().await.map_err(network_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Post a new internship (recruiter only).
pub async fn create_internship(draft: &InternshipDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::post(INTERNSHIPS_CREATE_ENDPOINT))
            .json(draft)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(unavailable())
    }
}

/// Update an owned internship via `PATCH /internships/{id}/edit/`.
pub async fn update_internship(id: i64, draft: &InternshipDraft) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::patch(&internship_edit_endpoint(id)))
            .json(draft)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(unavailable())
    }
}

/// Delete an owned internship.
pub async fn delete_internship(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::delete(&internship_edit_endpoint(id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Fetch the internships posted by the signed-in recruiter.
pub async fn fetch_my_internships() -> Result<Vec<Internship>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(INTERNSHIPS_MINE_ENDPOINT))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(network_error)?;
        Ok(list_results(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

// =============================================================
// Applications
// =============================================================

/// Submit an application via `POST /applications/apply/{id}/`.
pub async fn apply_to_internship(internship_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::post(&apply_endpoint(internship_id)))
            .json(&serde_json::json!({}))
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

/// Fetch the signed-in student's applications.
pub async fn fetch_my_applications() -> Result<Vec<Application>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(APPLICATIONS_MINE_ENDPOINT))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(network_error)?;
        Ok(list_results(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Ask whether the signed-in student already applied to an internship.
pub async fn check_applied(internship_id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&application_check_endpoint(internship_id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        #[derive(Deserialize)]
        struct AppliedResponse {
            applied: bool,
        }
        let body: AppliedResponse = resp.json().await.map_err(network_error)?;
        Ok(body.applied)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

/// Fetch applicants for an owned internship (recruiter only).
pub async fn fetch_applicants(internship_id: i64) -> Result<Vec<Applicant>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&applicants_endpoint(internship_id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(network_error)?;
        Ok(list_results(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

/// Move an application to a new review status (recruiter only).
pub async fn update_application_status(application_id: i64, status: ApplicationStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status.as_str() });
        let resp = authed(gloo_net::http::Request::patch(&application_status_endpoint(application_id)))
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (application_id, status);
        Err(unavailable())
    }
}

// =============================================================
// Bookmarks
// =============================================================

/// Add a bookmark via `POST /bookmarks/{id}/add/`.
pub async fn add_bookmark(internship_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::post(&bookmark_add_endpoint(internship_id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

/// Remove a bookmark via `DELETE /bookmarks/{id}/remove/`.
pub async fn remove_bookmark(internship_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::delete(&bookmark_remove_endpoint(internship_id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

/// Fetch the signed-in account's bookmarks.
pub async fn fetch_bookmarks() -> Result<Vec<Bookmark>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(BOOKMARKS_LIST_ENDPOINT))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(network_error)?;
        Ok(list_results(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Ask whether the signed-in account bookmarked an internship.
pub async fn check_bookmarked(internship_id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&bookmark_check_endpoint(internship_id)))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        #[derive(Deserialize)]
        struct BookmarkedResponse {
            bookmarked: bool,
        }
        let body: BookmarkedResponse = resp.json().await.map_err(network_error)?;
        Ok(body.bookmarked)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = internship_id;
        Err(unavailable())
    }
}

// =============================================================
// Activity
// =============================================================

/// Fetch the signed-in account's activity feed.
pub async fn fetch_activity() -> Result<Vec<ActivityLog>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(ACTIVITY_LOGS_ENDPOINT))
            .send()
            .await
            .map_err(network_error)?;
        if !resp.ok() {
            return Err(response_error(resp).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(network_error)?;
        Ok(list_results(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}
