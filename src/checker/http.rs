// src/checker/http.rs
// =============================================================================
// Reachability probes for external URLs.
//
// Key functionality:
// - HEAD requests (no body download) with a 15 second timeout
// - Redirects are followed automatically
// - A URL is reachable only if the final response is exactly 200 OK
// - Transport failures (DNS, refused connection, TLS, timeout) become an
//   unreachable verdict with a readable message; nothing is propagated
// - Many URLs are probed concurrently with a cap on requests in flight
//
// When reachability checking is switched off the prober answers "reachable"
// for every URL without touching the network.
// =============================================================================

use std::collections::BTreeSet;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;

const PROBE_TIMEOUT: Duration = Duration::from_secs(15);
const MAX_REDIRECTS: usize = 10;
const MAX_IN_FLIGHT: usize = 50;
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Outcome of probing a single URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "code", rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Final response was 200 OK
    Ok,
    /// Reachability checking is off, URL accepted unchecked
    Skipped,
    /// Final response had a status other than 200
    Http(u16),
    /// Request timed out
    Timeout,
    /// Redirect chain too long (or a loop)
    TooManyRedirects,
    /// Could not resolve hostname
    DnsError,
    /// SSL/TLS failure
    SslError,
    /// Connection refused or reset
    ConnectionFailed,
    /// Anything else reqwest reported
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub url: String,
    pub status: ProbeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProbeResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.status, ProbeStatus::Ok | ProbeStatus::Skipped)
    }

    /// Human readable reason, used in diagnostics of unreachable URLs
    pub fn describe(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("{:?}", self.status),
        }
    }
}

/// Checks external URLs, or accepts them all when disabled.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Option<Client>,
}

impl Prober {
    pub fn new(check_url_reachable: bool) -> Result<Self> {
        if !check_url_reachable {
            return Ok(Self::disabled());
        }
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self {
            client: Some(client),
        })
    }

    pub fn disabled() -> Self {
        Self { client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub async fn probe(&self, url: &str) -> ProbeResult {
        let Some(client) = &self.client else {
            return ProbeResult {
                url: url.to_string(),
                status: ProbeStatus::Skipped,
                message: None,
            };
        };

        debug!("probing {}", url);
        match client.head(url).send().await {
            Ok(response) => analyze_response(url.to_string(), response.status()),
            Err(e) => categorize_error(url.to_string(), e),
        }
    }

    /// Probes every URL once, at most `MAX_IN_FLIGHT` at a time.
    /// Results come back in completion order.
    pub async fn probe_all(&self, urls: BTreeSet<String>) -> Vec<ProbeResult> {
        stream::iter(urls)
            .map(|url| async move { self.probe(&url).await })
            .buffer_unordered(MAX_IN_FLIGHT)
            .collect()
            .await
    }
}

fn analyze_response(url: String, status_code: StatusCode) -> ProbeResult {
    if status_code == StatusCode::OK {
        return ProbeResult {
            url,
            status: ProbeStatus::Ok,
            message: None,
        };
    }
    ProbeResult {
        url,
        status: ProbeStatus::Http(status_code.as_u16()),
        message: Some(format!("HTTP {}", status_code.as_u16())),
    }
}

fn categorize_error(url: String, error: reqwest::Error) -> ProbeResult {
    let error_string = error.to_string();

    let (status, message) = if error.is_timeout() {
        (ProbeStatus::Timeout, "request timed out".to_string())
    } else if error.is_redirect() {
        (ProbeStatus::TooManyRedirects, "too many redirects".to_string())
    } else if error.is_connect() {
        if error_string.contains("dns") {
            (ProbeStatus::DnsError, "could not resolve hostname".to_string())
        } else {
            (ProbeStatus::ConnectionFailed, "connection failed".to_string())
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        (ProbeStatus::SslError, "SSL certificate error".to_string())
    } else {
        (ProbeStatus::Error, error_string)
    };

    ProbeResult {
        url,
        status,
        message: Some(message),
    }
}
