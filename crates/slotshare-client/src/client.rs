//! HTTP client for the schedule-sharing backend.
//!
//! Three endpoints: create a schedule (`POST /schedules`, success is
//! strictly 201), fetch one (`GET /schedules/{id}`), and confirm a selection
//! (`POST /schedules/{id}/select`). Bodies are JSON; any non-success status
//! surfaces as [`ClientError::Server`] with the HTTP status code, and decode
//! failures as [`ClientError::Malformed`].

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use slotshare_core::{Schedule, ShareableSchedule, ShareableSlot};

use crate::error::{ClientError, Result};

/// Client for one schedule backend instance.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    base_url: String,
    http: reqwest::Client,
}

/// Create payload wrapper: the backend expects `{"schedule": {...}}`.
#[derive(Serialize)]
struct CreateScheduleRequest<'a> {
    schedule: &'a ShareableSchedule,
}

/// Selection payload for `POST /schedules/{id}/select`.
#[derive(Serialize)]
struct SelectSlotsRequest<'a> {
    selected_slots: &'a [ShareableSlot],
}

/// Response to a successful selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectionResponse {
    pub success: bool,
    pub redirect_url: String,
}

impl ScheduleClient {
    /// Client against `base_url` (e.g. "http://localhost:3000"). A trailing
    /// slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Submit a new schedule. Success is exactly HTTP 201 with the stored
    /// `Schedule` record (status `pending`, nothing selected yet).
    pub async fn create_schedule(&self, schedule: &ShareableSchedule) -> Result<Schedule> {
        let url = format!("{}/schedules", self.base_url);
        debug!(%url, slots = schedule.slots.len(), "creating schedule");

        let response = self
            .http
            .post(&url)
            .json(&CreateScheduleRequest { schedule })
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(ClientError::Server {
                status: response.status().as_u16(),
            });
        }

        decode(response).await
    }

    /// Fetch a schedule record by id.
    pub async fn fetch_schedule(&self, id: i64) -> Result<Schedule> {
        let url = format!("{}/schedules/{id}", self.base_url);
        debug!(%url, "fetching schedule");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Server {
                status: response.status().as_u16(),
            });
        }

        decode(response).await
    }

    /// Confirm the remote party's pick of slots on an existing schedule.
    pub async fn select_slots(
        &self,
        id: i64,
        selected: &[ShareableSlot],
    ) -> Result<SelectionResponse> {
        let url = format!("{}/schedules/{id}/select", self.base_url);
        debug!(%url, selected = selected.len(), "selecting slots");

        let response = self
            .http
            .post(&url)
            .json(&SelectSlotsRequest {
                selected_slots: selected,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Server {
                status: response.status().as_u16(),
            });
        }

        decode(response).await
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| ClientError::Malformed(err.to_string()))
}
