use async_trait::async_trait;
use futures::{StreamExt, stream};
use reqwest::redirect::Policy;
use rustc_hash::FxHashSet;
use serde::Serialize;
use tokio::time::Duration;

use crate::config::Config;
use crate::core::constants::{http_status, timeouts};
use crate::core::error::Result;
use crate::reporting::logging;

use std::fmt;

/// Verdict for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// Answered 200.
    Ok,
    /// Any other status, or no response at all.
    NotOk,
    /// A status the configuration tells us to tolerate.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkCheckResult {
    pub url: String,
    pub status: LinkStatus,
    pub status_code: Option<u16>,
    /// Short name of the transport failure, e.g. `Timeout`.
    pub error_kind: Option<String>,
    pub description: Option<String>,
}

impl LinkCheckResult {
    pub fn from_status(url: String, status_code: u16, ignored: &FxHashSet<u16>) -> Self {
        Self {
            url,
            status: classify(status_code, ignored),
            status_code: Some(status_code),
            error_kind: None,
            description: None,
        }
    }

    pub fn from_error(url: String, err: &reqwest::Error) -> Self {
        let description = std::error::Error::source(err)
            .map(|e| e.to_string())
            .unwrap_or_else(|| err.to_string());

        Self {
            url,
            status: LinkStatus::NotOk,
            status_code: None,
            error_kind: Some(error_kind(err).to_string()),
            description: Some(description),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == LinkStatus::Ok
    }

    pub fn is_not_ok(&self) -> bool {
        self.status == LinkStatus::NotOk
    }

    pub fn is_ignored(&self) -> bool {
        self.status == LinkStatus::Ignored
    }

    /// Status code, or the failure kind when there was no response.
    pub fn outcome(&self) -> String {
        match (&self.status_code, &self.error_kind) {
            (Some(code), _) => code.to_string(),
            (None, Some(kind)) => kind.clone(),
            (None, None) => "Unknown".to_string(),
        }
    }
}

impl fmt::Display for LinkCheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} - {} - {}", self.outcome(), self.url, desc),
            None => write!(f, "{} - {}", self.outcome(), self.url),
        }
    }
}

/// Only 200 is healthy; listed codes are ignored; everything else fails.
pub fn classify(status_code: u16, ignored: &FxHashSet<u16>) -> LinkStatus {
    if status_code == http_status::OK {
        LinkStatus::Ok
    } else if ignored.contains(&status_code) {
        LinkStatus::Ignored
    } else {
        LinkStatus::NotOk
    }
}

fn error_kind(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "Timeout"
    } else if err.is_redirect() {
        "TooManyRedirects"
    } else if err.is_connect() {
        "ConnectionError"
    } else if err.is_builder() {
        "InvalidURL"
    } else if err.is_body() || err.is_decode() {
        "ContentDecodingError"
    } else {
        "RequestException"
    }
}

#[async_trait]
pub trait CheckLinks {
    /// Request every URL once. Results come back in the order of `urls`.
    async fn check_urls(&self, urls: &[String]) -> Vec<LinkCheckResult>;
}

#[derive(Debug, Clone)]
pub struct Validator {
    client: reqwest::Client,
    threads: usize,
    ignored_status_codes: FxHashSet<u16>,
}

impl Validator {
    pub fn from_config(config: &Config) -> Result<Self> {
        let threads = config.thread_count();
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(timeouts::MAX_REDIRECTS))
            .user_agent(config.user_agent_or_default())
            .pool_max_idle_per_host(threads.min(20))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            client,
            threads,
            ignored_status_codes: config.ignored_status_codes_set().into_iter().collect(),
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

#[async_trait]
impl CheckLinks for Validator {
    async fn check_urls(&self, urls: &[String]) -> Vec<LinkCheckResult> {
        let client = &self.client;
        let ignored = &self.ignored_status_codes;

        stream::iter(urls.iter().cloned())
            .map(|url: String| async move {
                let result = match client.get(url.as_str()).send().await {
                    Ok(response) => {
                        LinkCheckResult::from_status(url, response.status().as_u16(), ignored)
                    }
                    Err(err) => LinkCheckResult::from_error(url, &err),
                };
                logging::log_url_result(&result);
                result
            })
            .buffered(self.threads.max(1))
            .collect()
            .await
    }
}
