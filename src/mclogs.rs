//! Client for the mclo.gs paste service.
//!
//! mclo.gs is the collaborator used by log sharing: it accepts raw log text
//! and answers with an identifier and URLs for the created paste. It is not
//! part of the exaroton API and does not use the exaroton response envelope.

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::LogShare;

/// Default mclo.gs API host.
const DEFAULT_HOST: &str = "https://api.mclo.gs";

/// Minimal client for the mclo.gs paste service.
///
/// # Examples
///
/// ```no_run
/// use exaroton::Mclogs;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mclogs = Mclogs::new();
/// let share = mclogs.upload("[12:00:00] [Server thread/INFO]: Done").await.unwrap();
/// println!("log shared at {}", share.url);
/// # }
/// ```
pub struct Mclogs {
    /// Paste service host
    host: String,
    /// HTTP client
    client: Client,
}

/// Wire shape of an upload response. Unlike the exaroton envelope, the paste
/// fields sit next to the success flag instead of under `data`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UploadResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    raw: Option<String>,
}

impl Mclogs {
    /// Create a new [Mclogs] client against the public mclo.gs host.
    pub fn new() -> Self {
        Self::with_host(DEFAULT_HOST)
    }

    /// Create a new [Mclogs] client against a custom host.
    ///
    /// # Arguments
    ///
    /// * `host` - The paste service host, without a trailing slash.
    pub fn with_host(host: &str) -> Self {
        Mclogs {
            host: host.to_string(),
            client: Client::new(),
        }
    }

    /// Upload raw log content as a new paste.
    ///
    /// The content is sent as a `content=<text>` form field to `/1/log`.
    ///
    /// # Arguments
    ///
    /// * `content` - The log text to upload.
    pub async fn upload(&self, content: &str) -> Result<LogShare> {
        let endpoint = "1/log";
        let url = format!("{}/{}", &self.host, endpoint);
        info!("upload {} bytes of log content to paste service", content.len());
        debug!("request POST {}", &url);

        let response = self
            .client
            .post(&url)
            .form(&[("content", content)])
            .send()
            .await
            .map_err(|e| Error::http(endpoint, e))?;
        let status = response.status();
        let payload = response
            .text()
            .await
            .map_err(|e| Error::http(endpoint, e))?;

        let upload: UploadResponse = match serde_json::from_str(&payload) {
            Ok(upload) => upload,
            Err(_) if !status.is_success() => return Err(Error::status(endpoint, status)),
            Err(e) => return Err(Error::malformed(endpoint, e)),
        };

        if !upload.success {
            let message = upload
                .error
                .unwrap_or_else(|| "unspecified paste service error".to_owned());
            return Err(Error::api(endpoint, message));
        }

        match (upload.id, upload.url, upload.raw) {
            (Some(id), Some(url), Some(raw)) => {
                let share = LogShare { id, url, raw };
                debug!("created paste {}", share);
                Ok(share)
            }
            _ => Err(Error::missing_data(endpoint)),
        }
    }
}

impl Default for Mclogs {
    fn default() -> Self {
        Self::new()
    }
}
