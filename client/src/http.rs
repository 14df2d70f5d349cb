// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

//! Thin reqwest wrapper with timeout and status-code triage.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for the events backend.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a request. The backend carries its token in the path, so no
    /// auth headers are attached here.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Executes a request and maps error status codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;

        match resp.status() {
            reqwest::StatusCode::OK
            | reqwest::StatusCode::CREATED
            | reqwest::StatusCode::NO_CONTENT => Ok(resp),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(ApiError::Auth(read_body(resp).await))
            }
            reqwest::StatusCode::NOT_FOUND => Err(ApiError::NotFound(read_body(resp).await)),
            status => {
                let text = read_body(resp).await;
                Err(ApiError::Http(format!("{status}: {text}")))
            }
        }
    }
}

async fn read_body(resp: Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "Unable to read response".to_string())
}
