use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{AppError, AppResult};

use super::models::{Message, MessagePart, ThreadDetail, ThreadSummary};
use super::threads;

const GMAIL_API_BASE_URL: &str = "https://gmail.googleapis.com";

#[derive(Debug, Clone)]
pub struct GmailClient {
    http: Client,
    base_url: String,
}

impl GmailClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: GMAIL_API_BASE_URL.to_string(),
        }
    }

    pub async fn list_threads(
        &self,
        access_token: &str,
        limit: u32,
        query: Option<&str>,
    ) -> AppResult<Vec<ThreadSummary>> {
        let endpoint = threads::list_endpoint();
        let query_params = threads::list_query(limit, query);
        let resource: GmailThreadListResource = self
            .get_json(endpoint, access_token, Some(&query_params))
            .await?;

        Ok(resource
            .threads
            .unwrap_or_default()
            .into_iter()
            .map(|entry| ThreadSummary {
                id: entry.id,
                snippet: entry.snippet,
            })
            .collect())
    }

    pub async fn get_thread(&self, id: &str, access_token: &str) -> AppResult<ThreadDetail> {
        let endpoint = threads::thread_endpoint(id);
        let query = threads::get_query();
        let resource: GmailThreadResource =
            self.get_json(&endpoint, access_token, Some(&query)).await?;
        Ok(resource.into_detail())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        access_token: &str,
        query: Option<&[(String, String)]>,
    ) -> AppResult<T> {
        let url = self.endpoint_url(endpoint)?;
        let mut request = self.http.get(url).bearer_auth(access_token);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        self.parse_json_response(response).await
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path(endpoint.trim_start_matches('/'));
        Ok(url)
    }

    async fn parse_json_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> AppResult<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl Default for GmailClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct GmailThreadListResource {
    threads: Option<Vec<GmailThreadListEntry>>,
}

#[derive(Debug, Deserialize)]
struct GmailThreadListEntry {
    id: String,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GmailThreadResource {
    id: String,
    messages: Option<Vec<GmailMessageResource>>,
}

impl GmailThreadResource {
    fn into_detail(self) -> ThreadDetail {
        let messages = self
            .messages
            .unwrap_or_default()
            .into_iter()
            .map(GmailMessageResource::into_message)
            .collect();

        ThreadDetail {
            id: self.id,
            messages,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GmailMessageResource {
    id: String,
    // Milliseconds since epoch, serialized as a decimal string.
    #[serde(rename = "internalDate")]
    internal_date: Option<String>,
    payload: Option<MessagePart>,
}

impl GmailMessageResource {
    fn into_message(self) -> Message {
        Message {
            id: self.id,
            internal_date_ms: self
                .internal_date
                .as_deref()
                .and_then(|raw| raw.parse::<i64>().ok()),
            payload: self.payload.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GmailApiErrorEnvelope {
    error: GmailApiError,
}

#[derive(Debug, Deserialize)]
struct GmailApiError {
    code: Option<u16>,
    status: Option<String>,
    message: Option<String>,
    errors: Option<Vec<GmailApiErrorDetail>>,
}

#[derive(Debug, Deserialize)]
struct GmailApiErrorDetail {
    reason: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Auth(format!(
            "gmail api authorization failed ({status}): {message}. run `gmail-digest auth login`"
        ));
    }

    AppError::Api(format!("gmail api request failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let envelope = serde_json::from_str::<GmailApiErrorEnvelope>(body).ok()?;
    let mut parts = Vec::new();

    if let Some(message) = envelope.error.message {
        parts.push(message);
    }

    if let Some(status) = envelope.error.status {
        parts.push(format!("status={status}"));
    }

    if let Some(code) = envelope.error.code {
        parts.push(format!("code={code}"));
    }

    if let Some(reason) = envelope
        .error
        .errors
        .and_then(|errors| errors.into_iter().find_map(|detail| detail.reason))
    {
        parts.push(format!("reason={reason}"));
    }

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(", "))
}
