// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the tavern events backend.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use tavern_core::{Event, EventSource, Place};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;

/// Client for the events backend REST API.
///
/// # Example
///
/// ```ignore
/// use tavern_client::{ApiClient, ApiConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "https://events.example.com".to_string(),
///     token: Some("user-token".to_string()),
///     ..Default::default()
/// };
///
/// let client = ApiClient::new(config)?;
/// let events = client.get_all_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new events backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is empty or HTTP client
    /// initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The configured session token, if any.
    pub fn token(&self) -> Option<&str> {
        self.config.token.as_deref()
    }

    /// Fetches the full current event collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn get_all_events(&self) -> Result<Vec<Event>, ApiError> {
        let url = self.full_url("/events/all");
        tracing::debug!(%url, "fetching all events");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        let body: EventsResponse = resp.json().await?;
        Ok(body.events)
    }

    /// Fetches the events liked by the holder of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn get_liked_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        let url = self.full_url(&format!("/events/likedEvents/{token}"));
        tracing::debug!("fetching liked events");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        let body: LikedEventsResponse = resp.json().await?;
        Ok(body.liked_events)
    }

    /// Fetches the events created by the holder of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn get_created_events(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        let url = self.full_url(&format!("/events/createdEvents/{token}"));
        tracing::debug!("fetching created events");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        let body: EventsResponse = resp.json().await?;
        Ok(body.events)
    }

    /// Records a like on `event_id` for the holder of `token`.
    ///
    /// The backend keeps the liked set per user, so repeating the call is
    /// harmless. Callers re-fetch the liked list afterwards rather than
    /// patching local state.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn like_event(&self, token: &str, event_id: &str) -> Result<(), ApiError> {
        let url = self.full_url(&format!("/events/likeEvent/{token}"));
        tracing::debug!(event_id, "liking event");

        self.http
            .execute(
                self.http
                    .build_request(Method::POST, &url)
                    .json(&EventIdBody { event_id }),
            )
            .await?;
        Ok(())
    }

    /// Removes an event owned by the holder of `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_event(&self, token: &str, event_id: &str) -> Result<(), ApiError> {
        let url = self.full_url(&format!("/events/deleteEvent/{token}"));
        tracing::debug!(event_id, "deleting event");

        self.http
            .execute(
                self.http
                    .build_request(Method::DELETE, &url)
                    .json(&EventIdBody { event_id }),
            )
            .await?;
        Ok(())
    }

    /// Fetches all known venues.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn get_all_places(&self) -> Result<Vec<Place>, ApiError> {
        let url = self.full_url("/places/all");
        tracing::debug!(%url, "fetching places");

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        let body: PlacesResponse = resp.json().await?;
        Ok(body.places)
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl EventSource for ApiClient {
    type Error = ApiError;

    async fn get_all(&self) -> Result<Vec<Event>, ApiError> {
        self.get_all_events().await
    }

    async fn get_liked(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.get_liked_events(token).await
    }

    async fn get_created(&self, token: &str) -> Result<Vec<Event>, ApiError> {
        self.get_created_events(token).await
    }

    async fn like(&self, token: &str, event_id: &str) -> Result<(), ApiError> {
        self.like_event(token, event_id).await
    }

    async fn delete(&self, token: &str, event_id: &str) -> Result<(), ApiError> {
        self.delete_event(token, event_id).await
    }
}

#[derive(Debug, serde::Deserialize)]
struct EventsResponse {
    events: Vec<Event>,
}

#[derive(Debug, serde::Deserialize)]
struct LikedEventsResponse {
    #[serde(rename = "likedEvents")]
    liked_events: Vec<Event>,
}

#[derive(Debug, serde::Deserialize)]
struct PlacesResponse {
    places: Vec<Place>,
}

#[derive(Debug, serde::Serialize)]
struct EventIdBody<'a> {
    #[serde(rename = "eventId")]
    event_id: &'a str,
}
