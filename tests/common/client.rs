//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per server endpoint. When routes or
//! request formats change, update only this file.

use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }

    pub async fn get_recent(&self, username: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}/v1/recent", self.base_url));
        if let Some(username) = username {
            request = request.query(&[("username", username)]);
        }
        request.send().await.expect("recent request failed")
    }

    pub async fn get_wrapped(&self, username: Option<&str>, period: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}/v1/wrapped", self.base_url));
        if let Some(username) = username {
            request = request.query(&[("username", username)]);
        }
        if let Some(period) = period {
            request = request.query(&[("period", period)]);
        }
        request.send().await.expect("wrapped request failed")
    }

    pub async fn post_genres(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/v1/genres", self.base_url))
            .json(body)
            .send()
            .await
            .expect("genres request failed")
    }
}
