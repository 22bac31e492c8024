//! Loopback capture of the OAuth authorization redirect.
//!
//! Binds the redirect_uri's host/port, serves exactly one request, and hands
//! the authorization code back to the login flow.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time;
use url::Url;

use crate::error::{AppError, AppResult};

pub async fn wait_for_code(
    redirect_uri: &str,
    expected_state: &str,
    timeout: Duration,
) -> AppResult<String> {
    let redirect = Url::parse(redirect_uri)?;
    if redirect.scheme() != "http" {
        return Err(AppError::Config(
            "redirect_uri must use http for local callback capture".to_string(),
        ));
    }

    let host = redirect
        .host_str()
        .ok_or_else(|| AppError::Config("redirect_uri is missing host".to_string()))?;
    let port = redirect
        .port_or_known_default()
        .ok_or_else(|| AppError::Config("redirect_uri is missing port".to_string()))?;
    let path = redirect.path().to_string();

    let listener = TcpListener::bind((host, port)).await.map_err(|err| {
        AppError::Auth(format!(
            "failed to bind oauth callback listener on {host}:{port}: {err}"
        ))
    })?;

    let code = time::timeout(timeout, serve_one_request(&listener, &path, expected_state))
        .await
        .map_err(|_| AppError::Auth("timed out waiting for oauth callback".to_string()))??;

    Ok(code)
}

async fn serve_one_request(
    listener: &TcpListener,
    expected_path: &str,
    expected_state: &str,
) -> AppResult<String> {
    let (mut stream, _) = listener.accept().await?;

    let mut buf = vec![0_u8; 8192];
    let size = stream.read(&mut buf).await?;
    if size == 0 {
        return Err(AppError::Auth("empty oauth callback request".to_string()));
    }

    let request = String::from_utf8_lossy(&buf[..size]);
    let request_line = request
        .lines()
        .next()
        .ok_or_else(|| AppError::Auth("malformed oauth callback request".to_string()))?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let target = parts.next().unwrap_or_default();

    if method != "GET" {
        respond(
            &mut stream,
            "405 Method Not Allowed",
            "oauth callback only accepts GET requests",
        )
        .await?;
        return Err(AppError::Auth(
            "oauth callback received non-GET request".to_string(),
        ));
    }

    match extract_code(target, expected_path, expected_state) {
        Ok(code) => {
            respond(
                &mut stream,
                "200 OK",
                "gmail-digest auth complete. you can return to the terminal.",
            )
            .await?;
            Ok(code)
        }
        Err(err) => {
            let _ = respond(
                &mut stream,
                "400 Bad Request",
                &format!("oauth callback error: {err}"),
            )
            .await;
            Err(err)
        }
    }
}

fn extract_code(target: &str, expected_path: &str, expected_state: &str) -> AppResult<String> {
    let callback_url = Url::parse(&format!("http://localhost{target}"))?;
    if callback_url.path() != expected_path {
        return Err(AppError::Auth(format!(
            "oauth callback path mismatch: expected {expected_path}, got {}",
            callback_url.path()
        )));
    }

    let mut code = None;
    let mut state = None;
    let mut oauth_error = None;
    let mut oauth_error_description = None;

    for (key, value) in callback_url.query_pairs() {
        match key.as_ref() {
            "code" => code = Some(value.to_string()),
            "state" => state = Some(value.to_string()),
            "error" => oauth_error = Some(value.to_string()),
            "error_description" => oauth_error_description = Some(value.to_string()),
            _ => {}
        }
    }

    if let Some(error) = oauth_error {
        let description = oauth_error_description.unwrap_or_else(|| "no description".to_string());
        return Err(AppError::Auth(format!(
            "oauth authorization failed: {error} ({description})"
        )));
    }

    let received_state = state
        .ok_or_else(|| AppError::Auth("oauth callback missing state parameter".to_string()))?;
    if received_state != expected_state {
        return Err(AppError::Auth(
            "oauth state mismatch; aborting login".to_string(),
        ));
    }

    code.ok_or_else(|| AppError::Auth("oauth callback missing code parameter".to_string()))
}

async fn respond(stream: &mut TcpStream, status: &str, message: &str) -> AppResult<()> {
    let body = format!(
        "<!doctype html><html><body><p>{}</p></body></html>",
        escape_html(message)
    );

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
