use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

// The endpoint serves browsers only; requests without a browser user-agent
// get rejected.
const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures are caught per phrase and never abort the run; the distinction
/// between a transport failure and a rejected request only matters for the
/// log line.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned HTTP {0}")]
    Status(StatusCode),
}

/// Blocking client for the translate TTS endpoint. One GET per phrase; the
/// response body is treated as opaque MP3 bytes.
pub struct TtsClient {
    http: Client,
    endpoint: String,
    lang: String,
}

impl TtsClient {
    pub fn new(endpoint: String, lang: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("build http client")?;
        Ok(Self {
            http,
            endpoint,
            lang,
        })
    }

    pub fn fetch(&self, text: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("q", text),
                ("tl", self.lang.as_str()),
                ("client", "tw-ob"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.bytes()?.to_vec())
    }
}
