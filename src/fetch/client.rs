//! HTTP sampling client.

use crate::analysis::FetchedCookies;
use crate::config::{Credentials, PayloadEncoding, SamplerConfig};
use futures::{stream, StreamExt, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Url;
use std::fmt;

/// Error returned when sampling fails. Any failed request aborts the run.
#[derive(Debug)]
pub enum FetchError {
    /// The target could not be parsed as a URL.
    InvalidUrl(String),
    /// Building the client or sending a request failed.
    Http(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "invalid target url: {url}"),
            Self::Http(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl(_) => None,
            Self::Http(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Parse a target, assuming `http://` when no scheme is given.
///
/// # Example
///
/// ```rust
/// use cookieget::normalize_url;
///
/// let url = normalize_url("example.com/login").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/login");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, FetchError> {
    let raw = raw.trim();
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };
    Url::parse(&candidate).map_err(|_| FetchError::InvalidUrl(raw.to_string()))
}

/// Sends repeated requests to a target and records the cookies it sets.
///
/// The client keeps no cookie jar, so every request arrives without cookies
/// and the server has to mint a fresh session for each one.
///
/// # Example
///
/// ```rust,no_run
/// use cookieget::{AnalysisReport, CookieFetcher, SamplerConfig, reference_timestamp};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SamplerConfig::from_env();
/// let now = reference_timestamp();
/// let fetcher = CookieFetcher::new(&config)?;
/// let fetches = fetcher.fetch_samples("example.com", config.count, None).await?;
/// let report = AnalysisReport::from_fetches(fetches, &now)?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CookieFetcher {
    client: reqwest::Client,
    concurrency: usize,
    show_progress: bool,
}

impl CookieFetcher {
    pub fn new(config: &SamplerConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            concurrency: config.concurrency.max(1),
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while fetching.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Send `count` requests and return the cookies of each, in issue order.
    ///
    /// Without credentials every request is a GET; with them, a POST carrying
    /// the payload. Non-success statuses are kept: login endpoints often set
    /// cookies on a 401.
    pub async fn fetch_samples(
        &self,
        target: &str,
        count: usize,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<FetchedCookies>, FetchError> {
        let url = normalize_url(target)?;
        tracing::info!(%url, count, concurrency = self.concurrency, "fetching cookies");

        let progress = self.progress_bar(count);
        let result = self.fetch_with_progress(&url, count, credentials, &progress).await;
        progress.finish_and_clear();

        let fetches = result?;
        let total: usize = fetches.iter().map(Vec::len).sum();
        tracing::info!(fetches = fetches.len(), cookies = total, "finished fetching");
        Ok(fetches)
    }

    fn progress_bar(&self, count: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(count as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{msg} {bar:40.green/white} {pos}/{len} {eta}")
        {
            bar.set_style(style);
        }
        bar.set_message("Fetching cookies");
        bar
    }

    /// Issue the requests, advancing `progress` once per completed fetch.
    async fn fetch_with_progress(
        &self,
        url: &Url,
        count: usize,
        credentials: Option<&Credentials>,
        progress: &ProgressBar,
    ) -> Result<Vec<FetchedCookies>, FetchError> {
        stream::iter(0..count)
            .map(move |index| async move {
                let cookies = self.fetch_one(url, index, credentials).await;
                progress.inc(1);
                cookies
            })
            .buffered(self.concurrency)
            .try_collect()
            .await
    }

    async fn fetch_one(
        &self,
        url: &Url,
        index: usize,
        credentials: Option<&Credentials>,
    ) -> Result<FetchedCookies, FetchError> {
        let request = match credentials {
            None => self.client.get(url.clone()),
            Some(creds) => match creds.encoding() {
                PayloadEncoding::Form => self.client.post(url.clone()).form(creds.pairs()),
                PayloadEncoding::Json => self.client.post(url.clone()).json(&json_body(creds)),
            },
        };

        let response = request.send().await?;
        let status = response.status();
        let cookies: FetchedCookies = response
            .cookies()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();

        if cookies.is_empty() {
            tracing::warn!(index, %status, "response set no cookies");
        } else {
            tracing::debug!(index, %status, cookies = cookies.len(), "received cookies");
        }
        Ok(cookies)
    }
}

fn json_body(creds: &Credentials) -> serde_json::Value {
    let object = creds
        .pairs()
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(object)
}
