// src/api/client.rs
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::{BreweryApi, FetchError};
use crate::config::BreweryRecord;

/// Blocking client for the Open Brewery DB API. One call is one GET,
/// no retry, no cache.
#[derive(Debug, Clone)]
pub struct BreweryClient {
    http: Client,
    base_url: Url,
}

impl BreweryClient {
    /// `timeout: None` leaves requests unbounded.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // `id` is percent-encoded as a single segment
    fn breweries_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("breweries");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!(%url, "GET");

        let response = self.http.get(url.clone())
            .send()
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().map_err(FetchError::Network)?;
        let parsed = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

impl BreweryApi for BreweryClient {
    fn fetch_breweries(&self, per_page: usize) -> Result<Vec<BreweryRecord>, FetchError> {
        let mut url = self.breweries_url(None);
        url.query_pairs_mut().append_pair("per_page", &per_page.to_string());

        let breweries: Vec<BreweryRecord> = self.get_json(url)?;
        tracing::info!(count = breweries.len(), "fetched brewery list");
        Ok(breweries)
    }

    fn fetch_brewery(&self, id: &str) -> Result<BreweryRecord, FetchError> {
        let brewery: BreweryRecord = self.get_json(self.breweries_url(Some(id)))?;
        tracing::info!(id = %brewery.id, "fetched brewery");
        Ok(brewery)
    }
}
