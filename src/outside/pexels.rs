use std::time::Duration;

use miette::{Context, IntoDiagnostic};
use reqwest::{blocking::Client, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, trace};

use super::catalog::{FootageCatalog, SearchOptions};
use crate::{
    result::{bail, Error, Result},
    types::{FileVariant, VideoCandidate},
};

pub const DEFAULT_BASE_URL: &str = "https://api.pexels.com";

/// Longest part of an error body kept in an error message
const MAX_DETAIL_LEN: usize = 200;

/// Interface for the [Pexels](https://www.pexels.com/api/) video search API
#[derive(Debug)]
pub struct Pexels {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Pexels {
    /// Build the HTTP client used for every request.
    ///
    /// `timeout` applies to each request as a whole, including downloads.
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return bail("No Pexels API key configured");
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .into_diagnostic()
            .wrap_err("Could not build the HTTP client")?;

        Self::with_client(client, api_key, base_url)
    }

    /// Use an already configured HTTP client
    pub fn with_client(client: Client, api_key: &str, base_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return bail("No Pexels API key configured");
        }

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key: api_key.trim().to_owned(),
        })
    }

    /// The HTTP client, also used to download the selected files
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl FootageCatalog for Pexels {
    fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<VideoCandidate>> {
        let term = term.trim();
        if term.is_empty() {
            return bail("Search term must not be empty");
        }

        let url = format!("{}/videos/search", self.base_url);
        let query = [
            ("query", term.to_owned()),
            ("per_page", options.results_per_page.to_string()),
            ("page", options.page.to_string()),
            ("orientation", options.orientation.to_string()),
        ];
        debug!("Searching '{term}' ({options:?})");

        let res = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .query(&query)
            .send()
            .map_err(|err| Error::remote(err.status().map(|s| s.as_u16()), err.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .map_err(|err| Error::remote(Some(status), err.to_string()))?;
        debug!("status: {status}");
        trace!("body: {} bytes long", body.len());

        if !(200..300).contains(&status) {
            return Err(remote_failure(status, &body));
        }

        parse_search_response(&body).map_err(|err| match err {
            Error::Miette(report) => {
                let detail: Vec<String> = report.chain().map(ToString::to_string).collect();
                Error::remote(Some(status), detail.join(": "))
            }
            err => err,
        })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    videos: Vec<RawVideo>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawVideo {
    id: RawId,
    #[serde(default)]
    video_files: Vec<RawFile>,
    duration: Option<u32>,
    url: Option<String>,
    image: Option<String>,
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    width: Option<u32>,
    height: Option<u32>,
    file_type: Option<String>,
    link: Option<String>,
}

impl RawFile {
    /// Adaptive playlists have no dimension, those cannot be selected by width
    fn into_variant(self) -> Option<FileVariant> {
        let width = self.width.filter(|&w| w > 0)?;
        let height = self.height.filter(|&h| h > 0)?;
        let url = self.link.filter(|l| !l.is_empty())?;

        Some(FileVariant {
            width,
            height,
            container_format: container_from_mime(self.file_type.as_deref()),
            url,
        })
    }
}

/// `video/mp4` -> `mp4`
fn container_from_mime(mime: Option<&str>) -> String {
    mime.and_then(|mime| mime.rsplit('/').next())
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("unknown")
        .to_lowercase()
}

/// Normalize the body of a successful search into candidates, keeping the catalog order
pub fn parse_search_response(body: &str) -> Result<Vec<VideoCandidate>> {
    let response: SearchResponse = serde_json::from_str(body)
        .into_diagnostic()
        .wrap_err("Could not parse the search response")?;

    let candidates = response
        .videos
        .into_iter()
        .map(|video| {
            let id = match video.id {
                RawId::Number(n) => n.to_string(),
                RawId::Text(s) => s,
            };
            let variants = video
                .video_files
                .into_iter()
                .filter_map(RawFile::into_variant)
                .collect();

            VideoCandidate {
                id,
                variants,
                duration: video.duration,
                page_url: video.url,
                preview_image: video.image,
                author: video.user.and_then(|u| u.name),
            }
        })
        .collect();

    Ok(candidates)
}

/// Build the error of a non-success response, keeping the upstream detail when there is one
pub fn remote_failure(status: u16, body: &str) -> Error {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            let json = json.as_object()?;
            ["error", "message", "code"]
                .iter()
                .find_map(|k| json.get(*k).and_then(|v| v.as_str()).map(str::to_owned))
        });

    let detail = from_json.unwrap_or_else(|| body.trim().chars().take(MAX_DETAIL_LEN).collect());
    Error::remote(Some(status), detail)
}
