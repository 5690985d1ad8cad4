//! reqwest（blocking）による HttpClient 実装

use crate::error::Error;
use crate::ports::outbound::{HttpClient, HttpResponse};
use std::time::Duration;

/// reqwest::blocking::Client を包む HttpClient 実装
pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    /// タイムアウト付きでクライアントを生成する
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("got-match/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| Error::io_msg(format!("HTTP request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| Error::io_msg(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse::new(status, body))
    }
}
