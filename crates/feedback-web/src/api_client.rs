//! HTTP client for communicating with the feedback backend API

use feedback_core::types::{ApiErrorBody, NewSubmission};
use feedback_core::{AnalyticsSummary, Error, Result, Submission, SubmissionList};
use reqwest::Client;

/// API client for making HTTP requests to the feedback backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// A trailing slash on the base URL is dropped so endpoint paths can be
    /// appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full submission list
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn list_submissions(&self) -> Result<SubmissionList> {
        let url = format!("{}/v1/submissions", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Failed to fetch submissions: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Http {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Other(format!("Failed to parse submissions: {e}")))
    }

    /// Get the precomputed analytics summary
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be
    /// parsed.
    pub async fn fetch_analytics(&self) -> Result<AnalyticsSummary> {
        let url = format!("{}/v1/analytics", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Failed to fetch analytics: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::Http {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Other(format!("Failed to parse analytics: {e}")))
    }

    /// Create a submission and return the backend's annotated record
    ///
    /// On a non-2xx response the backend's `detail.message`, when present,
    /// is surfaced as [`Error::Api`]; otherwise the status code alone is
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the backend rejects the
    /// submission, or the response cannot be parsed.
    pub async fn create_submission(&self, body: &NewSubmission) -> Result<Submission> {
        let url = format!("{}/v1/submissions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Request(format!("Failed to submit review: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(match error_body.detail {
                Some(detail) => Error::Api {
                    status: status.as_u16(),
                    message: detail.message,
                },
                None => Error::Http {
                    status: status.as_u16(),
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Other(format!("Failed to parse submission: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
