//! Google Cloud Storage log source for Prow build logs.

use std::io::BufReader;
use std::path::Path;

use tracing::info;

use crate::auth::Credentials;
use crate::error::{ApiCovError, Result};
use crate::logs::{filter_lines, LogSource};

const GCS_ENDPOINT: &str = "https://storage.googleapis.com";
const LATEST_BUILD_FILE: &str = "latest-build.txt";
const BUILD_LOG_FILE: &str = "build-log.txt";

pub const DEFAULT_BUCKET: &str = "knative-prow";
pub const DEFAULT_LOG_DIR: &str = "logs/ci-knative-serving-continuous";

/// Build logs stored under `<bucket>/<log_dir>/<build>/build-log.txt`, with
/// the newest build number in `<bucket>/<log_dir>/latest-build.txt`.
pub struct GcsLogSource {
    bucket: String,
    log_dir: String,
    endpoint: String,
    token: Option<String>,
}

impl GcsLogSource {
    pub fn new(bucket: &str, log_dir: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            log_dir: log_dir.trim_matches('/').to_string(),
            endpoint: GCS_ENDPOINT.to_string(),
            token: None,
        }
    }

    /// Authenticate requests with the credentials file at `path`: a service
    /// account key or an access token.
    pub fn with_credentials(self, path: &Path) -> Result<Self> {
        let credentials = Credentials::from_file(path)?;
        Ok(self.with_token(credentials.access_token()?))
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Point at a different storage endpoint (emulators, mirrors).
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    fn object_url(&self, object: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.endpoint, self.bucket, self.log_dir, object
        )
    }

    fn get(&self, url: &str) -> Result<ureq::Response> {
        let mut req = ureq::get(url).set("User-Agent", "apicov");
        if let Some(token) = &self.token {
            req = req.set("Authorization", &format!("Bearer {}", token));
        }
        req.call().map_err(|e| ApiCovError::from_ureq(url, e))
    }
}

impl LogSource for GcsLogSource {
    fn latest_build(&self) -> Result<u64> {
        let url = self.object_url(LATEST_BUILD_FILE);
        let body = self.get(&url)?.into_string()?;
        let build = parse_build_number(&body)?;
        info!(build, "latest build");
        Ok(build)
    }

    fn read_log(
        &self,
        build: u64,
        filter: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Vec<String>> {
        let url = self.object_url(&format!("{}/{}", build, BUILD_LOG_FILE));
        info!(%url, "fetching build log");
        let mut reader = BufReader::new(self.get(&url)?.into_reader());
        filter_lines(&mut reader, filter)
    }

    fn describe(&self) -> String {
        format!("gs://{}/{}", self.bucket, self.log_dir)
    }
}

/// Parse the content of `latest-build.txt`.
pub fn parse_build_number(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| ApiCovError::InvalidBuildNumber(trimmed.to_string()))
}
