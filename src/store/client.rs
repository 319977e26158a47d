//! REST client for the remote datastore.
//!
//! This module provides the `StoreClient` struct for reading and writing
//! corps-member records, ratings, and reviewer comments, plus the
//! credential lookup behind staff login. The datastore exposes a
//! PostgREST-style interface: tables under `/rest/v1/`, `eq.` query
//! filters, and `Prefer: return=representation` on writes.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::auth::SessionData;
use crate::config::Config;
use crate::form::RegistrationRecord;
use crate::models::{CorpsMember, MemberStatus, Platoon, Role};
use crate::rating::RatingRecord;

use super::StoreError;

// ============================================================================
// Constants
// ============================================================================

/// Path prefix for table endpoints.
const REST_PATH: &str = "/rest/v1";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retries for rate-limited (429) requests.
const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Initial backoff delay in milliseconds for rate limiting.
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Credential row from the `users` table.
///
/// Passwords are compared by the datastore's `eq.` filter; hardening the
/// credential scheme is out of scope for this crate.
#[derive(Debug, Deserialize)]
struct UserRow {
    id: String,
    username: String,
    full_name: String,
    role: Role,
    platoon: Option<Platoon>,
    #[serde(default)]
    is_active: bool,
}

/// Client for the evaluation datastore.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    /// Create a client from configuration. Fails when the datastore URL
    /// or API key has not been configured yet.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = config
            .store_url
            .clone()
            .context("Datastore URL is not configured")?;
        let api_key = config
            .store_api_key
            .clone()
            .context("Datastore API key is not configured")?;

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, table)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", header::HeaderValue::from_str(&self.api_key)?);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    /// Returns Ok(Some(response)) for success, Ok(None) for rate limit
    /// (should retry), or Err for other errors.
    async fn check_response_for_retry(
        response: reqwest::Response,
    ) -> Result<Option<reqwest::Response>> {
        if response.status().is_success() {
            Ok(Some(response))
        } else if response.status() == StatusCode::TOO_MANY_REQUESTS {
            Ok(None)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::from_status(status, &body).into())
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let mut retries = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            let response = self
                .client
                .get(url)
                .headers(self.auth_headers()?)
                .query(query)
                .send()
                .await
                .with_context(|| format!("Failed to send GET request to {}", url))?;

            match Self::check_response_for_retry(response).await? {
                Some(response) => {
                    return response
                        .json()
                        .await
                        .with_context(|| format!("Failed to parse JSON response from {}", url));
                }
                None => {
                    retries += 1;
                    if retries > MAX_RATE_LIMIT_RETRIES {
                        return Err(StoreError::RateLimited.into());
                    }
                    warn!(url = url, retry = retries, backoff_ms = backoff_ms, "Rate limited, backing off");
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    backoff_ms *= 2; // Exponential backoff
                }
            }
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(url)
            .headers(self.auth_headers()?)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn patch<B: Serialize>(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<()> {
        let response = self
            .client
            .patch(url)
            .headers(self.auth_headers()?)
            .query(query)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PATCH request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Login =====

    /// Look up an active credential row and construct the session.
    ///
    /// The role is part of the lookup: a platoon instructor's credentials
    /// do not open the commandant dashboard.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<SessionData> {
        let url = self.table_url("users");
        let query = [
            ("select", "*".to_string()),
            ("username", format!("eq.{}", username)),
            ("password", format!("eq.{}", password)),
            ("role", format!("eq.{}", serde_plain_role(role))),
            ("is_active", "eq.true".to_string()),
        ];

        let rows: Vec<UserRow> = self.get(&url, &query).await?;
        let user = rows
            .into_iter()
            .find(|row| row.is_active)
            .ok_or(StoreError::InvalidCredentials)?;

        debug!(username = %user.username, role = %user.role, "Login succeeded");
        Ok(SessionData {
            user_id: user.id,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            platoon: user.platoon,
            created_at: Utc::now(),
        })
    }

    // ===== Corps member records =====

    /// Fetch all corps members, ordered by platoon.
    pub async fn fetch_members(&self) -> Result<Vec<CorpsMember>> {
        let url = self.table_url("corp_members");
        let query = [
            ("select", "*".to_string()),
            ("order", "platoon.asc".to_string()),
        ];
        let members: Vec<CorpsMember> = self.get(&url, &query).await?;
        debug!(count = members.len(), "Fetched corps members");
        Ok(members)
    }

    /// Fetch a single corps member by record id.
    pub async fn fetch_member(&self, member_id: &str) -> Result<CorpsMember> {
        let url = self.table_url("corp_members");
        let query = [
            ("select", "*".to_string()),
            ("id", format!("eq.{}", member_id)),
        ];
        let rows: Vec<CorpsMember> = self.get(&url, &query).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(member_id.to_string()).into())
    }

    /// Insert a finalized registration. The record is only considered
    /// saved once this call returns the stored row.
    pub async fn create_member(&self, record: &RegistrationRecord) -> Result<CorpsMember> {
        let url = self.table_url("corp_members");
        let rows: Vec<CorpsMember> = self.post(&url, record).await?;
        let member = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::InvalidResponse("insert returned no row".to_string()))?;
        debug!(id = %member.id, platoon = %member.platoon, "Registration saved");
        Ok(member)
    }

    /// Write a committed rating, overwriting the subject's existing
    /// rating from the same role, and mark the member rated.
    pub async fn save_rating(
        &self,
        member_id: &str,
        record: RatingRecord,
    ) -> Result<CorpsMember> {
        let mut member = self.fetch_member(member_id).await?;
        member.apply_rating(record);

        let url = self.table_url("corp_members");
        let query = [("id", format!("eq.{}", member_id))];
        let body = serde_json::json!({
            "ratings": member.ratings,
            "status": MemberStatus::Rated,
        });
        self.patch(&url, &query, &body).await?;
        debug!(id = %member_id, "Rating saved");
        Ok(member)
    }

    /// Save or replace a reviewer's free-text assessment. Each reviewer
    /// role keeps its own comment on the subject.
    pub async fn save_comment(
        &self,
        member_id: &str,
        role: Role,
        author: &str,
        text: &str,
    ) -> Result<CorpsMember> {
        let mut member = self.fetch_member(member_id).await?;
        member.set_comment(role, author, text);

        let url = self.table_url("corp_members");
        let query = [("id", format!("eq.{}", member_id))];
        let body = serde_json::json!({ "comments": member.comments });
        self.patch(&url, &query, &body).await?;
        debug!(id = %member_id, role = %role, "Comment saved");
        Ok(member)
    }
}

/// The `role` column stores the serde snake_case form without quotes.
fn serde_plain_role(role: Role) -> String {
    serde_json::to_value(role)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_row() {
        let json = r#"[{
            "id": "3e3c9f7a-1111-4222-8333-444455556666",
            "username": "bello",
            "password": "hunter2",
            "full_name": "Sgt. Bello",
            "role": "platoon_instructor",
            "platoon": 3,
            "is_active": true
        }]"#;

        let rows: Vec<UserRow> = serde_json::from_str(json).expect("Failed to parse users JSON");
        assert_eq!(rows.len(), 1);
        let user = &rows[0];
        assert_eq!(user.role, Role::PlatoonInstructor);
        assert_eq!(user.platoon.map(|p| p.number()), Some(3));
        assert!(user.is_active);
    }

    #[test]
    fn test_role_query_form() {
        assert_eq!(serde_plain_role(Role::ManOWar), "man_o_war");
        assert_eq!(serde_plain_role(Role::Commandant), "commandant");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = Config {
            store_url: Some("https://camp.example.supabase.co/".to_string()),
            store_api_key: Some("anon-key".to_string()),
            ..Config::default()
        };
        let client = StoreClient::new(&config).unwrap();
        assert_eq!(
            client.table_url("corp_members"),
            "https://camp.example.supabase.co/rest/v1/corp_members"
        );
    }

    #[test]
    fn test_unconfigured_store_is_an_error() {
        let client = StoreClient::new(&Config::default());
        assert!(client.is_err());
    }
}
