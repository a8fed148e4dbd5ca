use gloo_net::http::{Request, Response};
use urlencoding::encode;

use crate::error::ApiError;
use crate::models::{ActivityMap, ApiMessage};

const CONFIRMED_TEXT: &str = "Done";

/// Thin client for the activities backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitiesClient {
    base: String,
}

impl ActivitiesClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    pub fn participant_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    pub async fn fetch_activities(&self) -> Result<ActivityMap, ApiError> {
        let resp = Request::get(&self.activities_url()).send().await?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(resp.json::<ActivityMap>().await?)
    }

    /// Returns the server's confirmation text.
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        let resp = Request::post(&self.signup_url(activity, email)).send().await?;
        message_or_error(resp).await
    }

    /// `url` comes from [`ActivitiesClient::participant_url`].
    pub async fn unregister(&self, url: &str) -> Result<String, ApiError> {
        let resp = Request::delete(url).send().await?;
        message_or_error(resp).await
    }
}

async fn message_or_error(resp: Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    let body = resp.json::<ApiMessage>().await?;
    Ok(confirmation(body))
}

/// Success text for a write; a blank or missing `message` still gets one.
fn confirmation(body: ApiMessage) -> String {
    match body.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => CONFIRMED_TEXT.to_string(),
    }
}

async fn status_error(resp: Response) -> ApiError {
    let status = resp.status();
    // An unreadable error body is treated as "no detail".
    let detail = resp.json::<ApiMessage>().await.ok().and_then(|m| m.detail);
    ApiError::Status { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_origin_paths_by_default() {
        let c = ActivitiesClient::new("");
        assert_eq!(c.activities_url(), "/activities");
    }

    #[test]
    fn base_trailing_slash_is_trimmed() {
        let c = ActivitiesClient::new("https://school.example/api/");
        assert_eq!(c.activities_url(), "https://school.example/api/activities");
    }

    #[test]
    fn signup_url_encodes_name_and_email() {
        let c = ActivitiesClient::new("");
        assert_eq!(
            c.signup_url("Chess Club", "test_student+1@mergington.edu"),
            "/activities/Chess%20Club/signup?email=test_student%2B1%40mergington.edu"
        );
    }

    #[test]
    fn confirmation_uses_server_message() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"message":"Unregistered a@x.edu from Chess Club"}"#).unwrap();
        assert_eq!(confirmation(body), "Unregistered a@x.edu from Chess Club");
    }

    #[test]
    fn empty_success_body_still_confirms() {
        let body: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(confirmation(body), "Done");

        let blank: ApiMessage = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(confirmation(blank), "Done");
    }

    #[test]
    fn participant_url_encodes_reserved_characters() {
        let c = ActivitiesClient::new("http://localhost:8000");
        assert_eq!(
            c.participant_url("Drama/Theater & Arts", "michael@mergington.edu"),
            "http://localhost:8000/activities/Drama%2FTheater%20%26%20Arts/participants?email=michael%40mergington.edu"
        );
    }
}
