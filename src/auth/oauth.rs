use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::Settings;
use crate::error::{AppError, AppResult};

use super::callback;
use super::token::TokenSet;
use super::token_store::TokenStore;

const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_REVOKE_ENDPOINT: &str = "https://oauth2.googleapis.com/revoke";
const GOOGLE_USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const OAUTH_CALLBACK_TIMEOUT_SECS: u64 = 180;

// Digest only reads mail; the narrow scope keeps consent screens honest.
const OAUTH_SCOPES: &str = "https://www.googleapis.com/auth/gmail.readonly openid email";

#[derive(Debug, Serialize)]
pub struct AuthLoginResult {
    pub profile: String,
    pub opened_browser: bool,
    pub authorization_url: String,
    pub email: Option<String>,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub profile: String,
    pub logged_in: bool,
    pub email: Option<String>,
    pub expired: Option<bool>,
    pub expires_in_seconds: Option<i64>,
    pub has_refresh_token: Option<bool>,
    pub note: Option<String>,
}

#[derive(Debug, Default)]
pub struct AuthService;

impl AuthService {
    pub async fn login<S: TokenStore>(
        profile: &str,
        settings: &Settings,
        store: &S,
    ) -> AppResult<AuthLoginResult> {
        let oauth = OAuthConfig::from_settings(settings)?;
        let request = AuthorizationRequest::new(&oauth)?;
        let opened_browser = open_browser(&request.authorization_url);

        if !opened_browser {
            eprintln!(
                "open this URL in your browser to continue login:\n{}",
                request.authorization_url
            );
        }

        let code = callback::wait_for_code(
            &oauth.redirect_uri,
            &request.state,
            Duration::from_secs(OAUTH_CALLBACK_TIMEOUT_SECS),
        )
        .await?;

        let mut token = exchange_auth_code(&oauth, &code, &request.code_verifier).await?;
        if let Ok(email) = fetch_email(&token.access_token).await {
            token.email = email;
        }
        store.save(profile, &token)?;

        Ok(AuthLoginResult {
            profile: profile.to_string(),
            opened_browser,
            authorization_url: request.authorization_url,
            email: token.email,
            note: "oauth login completed and token stored".to_string(),
        })
    }

    pub async fn refresh<S: TokenStore>(
        profile: &str,
        settings: &Settings,
        store: &S,
    ) -> AppResult<TokenSet> {
        let oauth = OAuthConfig::from_settings(settings)?;

        let current = store.load(profile)?.ok_or_else(|| {
            AppError::InvalidInput("not logged in. run `gmail-digest auth login`".to_string())
        })?;

        if !current.is_expired(SystemTime::now()) {
            return Ok(current);
        }

        let refresh_token = current.refresh_token.clone().ok_or_else(|| {
            AppError::Auth("access token expired and no refresh token is stored".to_string())
        })?;

        let mut refreshed = exchange_refresh_token(&oauth, &refresh_token).await?;
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = Some(refresh_token);
        }

        if refreshed.email.is_none() {
            refreshed.email = current.email;
        }

        store.save(profile, &refreshed)?;
        Ok(refreshed)
    }

    pub async fn status<S: TokenStore>(profile: &str, store: &S) -> AppResult<AuthStatus> {
        let Some(token) = store.load(profile)? else {
            return Ok(AuthStatus {
                profile: profile.to_string(),
                logged_in: false,
                email: None,
                expired: None,
                expires_in_seconds: None,
                has_refresh_token: None,
                note: Some("no token found".to_string()),
            });
        };

        let now = SystemTime::now();
        Ok(AuthStatus {
            profile: profile.to_string(),
            logged_in: true,
            email: token.email.clone(),
            expired: Some(token.is_expired(now)),
            expires_in_seconds: token.expires_in_seconds(now),
            has_refresh_token: Some(token.has_refresh_token()),
            note: Some("token loaded from local store".to_string()),
        })
    }

    pub async fn logout<S: TokenStore>(profile: &str, store: &S) -> AppResult<AuthStatus> {
        let token = store.load(profile)?;
        let note = if let Some(token) = token {
            let token_to_revoke = token
                .refresh_token
                .as_deref()
                .unwrap_or(token.access_token.as_str());

            match revoke_token(token_to_revoke).await {
                Ok(()) => "remote token revoked and local credentials removed".to_string(),
                Err(err) => format!("local credentials removed (revoke failed: {err})"),
            }
        } else {
            "local credentials removed".to_string()
        };

        store.clear(profile)?;

        Ok(AuthStatus {
            profile: profile.to_string(),
            logged_in: false,
            email: None,
            expired: None,
            expires_in_seconds: None,
            has_refresh_token: None,
            note: Some(note),
        })
    }
}

#[derive(Debug)]
struct OAuthConfig {
    client_id: String,
    client_secret: Option<String>,
    redirect_uri: String,
}

impl OAuthConfig {
    fn from_settings(settings: &Settings) -> AppResult<Self> {
        Ok(Self {
            client_id: settings.client_id()?.to_string(),
            client_secret: settings.client_secret().map(ToOwned::to_owned),
            redirect_uri: settings.redirect_uri(),
        })
    }
}

#[derive(Debug)]
struct AuthorizationRequest {
    authorization_url: String,
    code_verifier: String,
    state: String,
}

impl AuthorizationRequest {
    fn new(config: &OAuthConfig) -> AppResult<Self> {
        let state = random_token(32);
        let code_verifier = random_token(96);
        let code_challenge = pkce_challenge(&code_verifier);

        let mut url = Url::parse(GOOGLE_AUTH_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &config.client_id)
            .append_pair("redirect_uri", &config.redirect_uri)
            .append_pair("scope", OAUTH_SCOPES)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent")
            .append_pair("state", &state)
            .append_pair("code_challenge", &code_challenge)
            .append_pair("code_challenge_method", "S256");

        Ok(Self {
            authorization_url: url.to_string(),
            code_verifier,
            state,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<u64>,
    token_type: Option<String>,
    scope: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OAuthErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: Option<String>,
}

async fn exchange_auth_code(
    config: &OAuthConfig,
    code: &str,
    code_verifier: &str,
) -> AppResult<TokenSet> {
    let mut form = HashMap::from([
        ("grant_type", "authorization_code".to_string()),
        ("code", code.to_string()),
        ("client_id", config.client_id.clone()),
        ("redirect_uri", config.redirect_uri.clone()),
        ("code_verifier", code_verifier.to_string()),
    ]);

    if let Some(client_secret) = &config.client_secret {
        form.insert("client_secret", client_secret.clone());
    }

    let response = reqwest::Client::new()
        .post(GOOGLE_TOKEN_ENDPOINT)
        .form(&form)
        .send()
        .await?;

    parse_token_response(response).await
}

async fn exchange_refresh_token(config: &OAuthConfig, refresh_token: &str) -> AppResult<TokenSet> {
    let mut form = HashMap::from([
        ("grant_type", "refresh_token".to_string()),
        ("refresh_token", refresh_token.to_string()),
        ("client_id", config.client_id.clone()),
    ]);

    if let Some(client_secret) = &config.client_secret {
        form.insert("client_secret", client_secret.clone());
    }

    let response = reqwest::Client::new()
        .post(GOOGLE_TOKEN_ENDPOINT)
        .form(&form)
        .send()
        .await?;

    let mut token = parse_token_response(response).await?;
    if token.refresh_token.is_none() {
        token.refresh_token = Some(refresh_token.to_string());
    }

    Ok(token)
}

async fn parse_token_response(response: reqwest::Response) -> AppResult<TokenSet> {
    if response.status().is_success() {
        let payload: OAuthTokenResponse = response.json().await?;
        return Ok(TokenSet {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
            expires_at_unix: expires_at_unix(payload.expires_in),
            token_type: payload.token_type,
            scope: payload.scope,
            email: None,
        });
    }

    let status = response.status();
    let body = response.text().await?;
    if let Ok(err_payload) = serde_json::from_str::<OAuthErrorResponse>(&body) {
        let error = err_payload
            .error
            .unwrap_or_else(|| "unknown_oauth_error".to_string());
        let description = err_payload
            .error_description
            .unwrap_or_else(|| "no description".to_string());
        return Err(AppError::Auth(format!(
            "oauth token exchange failed ({status}): {error} ({description})"
        )));
    }

    Err(AppError::Auth(format!(
        "oauth token exchange failed ({status}): {body}"
    )))
}

fn expires_at_unix(expires_in: Option<u64>) -> Option<u64> {
    let expires_in = expires_in?;
    let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs();
    Some(now.saturating_add(expires_in))
}

async fn fetch_email(access_token: &str) -> AppResult<Option<String>> {
    let response = reqwest::Client::new()
        .get(GOOGLE_USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    let payload: UserInfoResponse = response.json().await?;
    Ok(payload.email)
}

async fn revoke_token(token: &str) -> AppResult<()> {
    let response = reqwest::Client::new()
        .post(GOOGLE_REVOKE_ENDPOINT)
        .form(&HashMap::from([("token", token.to_string())]))
        .send()
        .await?;

    if response.status().is_success() {
        return Ok(());
    }

    Err(AppError::Auth(format!(
        "revoke endpoint returned {}",
        response.status()
    )))
}

fn random_token(len: usize) -> String {
    let mut bytes = vec![0_u8; len];
    rand::thread_rng().fill(bytes.as_mut_slice());
    URL_SAFE_NO_PAD.encode(bytes)
}

fn pkce_challenge(verifier: &str) -> String {
    let digest = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(digest)
}

fn open_browser(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    {
        return std::process::Command::new("open")
            .arg(url)
            .status()
            .is_ok_and(|status| status.success());
    }

    #[cfg(target_os = "linux")]
    {
        return std::process::Command::new("xdg-open")
            .arg(url)
            .status()
            .is_ok_and(|status| status.success());
    }

    #[cfg(target_os = "windows")]
    {
        return std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .status()
            .is_ok_and(|status| status.success());
    }

    #[allow(unreachable_code)]
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_url_requests_readonly_scope_with_pkce() {
        let config = OAuthConfig {
            client_id: "client-1".to_string(),
            client_secret: None,
            redirect_uri: "http://127.0.0.1:8787/callback".to_string(),
        };

        let request = AuthorizationRequest::new(&config).expect("authorization request");
        let url = Url::parse(&request.authorization_url).expect("valid url");
        let pairs: HashMap<_, _> = url.query_pairs().into_owned().collect();

        assert_eq!(
            pairs.get("scope").map(String::as_str),
            Some(OAUTH_SCOPES)
        );
        assert_eq!(pairs.get("code_challenge_method").map(String::as_str), Some("S256"));
        assert_eq!(pairs.get("state"), Some(&request.state));
    }

    #[test]
    fn builds_pkce_challenge() {
        let verifier = "test_verifier_value";
        let challenge = pkce_challenge(verifier);
        assert!(!challenge.is_empty());
        assert_ne!(challenge, pkce_challenge("another_verifier"));
    }

    #[test]
    fn random_token_is_non_empty() {
        let token = random_token(32);
        assert!(token.len() >= 43);
    }
}
