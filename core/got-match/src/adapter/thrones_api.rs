//! Thrones API（HTTP）からキャラクター一覧を取得する CharacterSource

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::HttpClient;

use crate::domain::{parse_characters, RawCharacter};
use crate::ports::outbound::CharacterSource;

/// HTTP GET で JSON 配列を取得する取得元
pub struct ThronesApiSource {
    http: Arc<dyn HttpClient>,
    url: String,
}

impl ThronesApiSource {
    pub fn new(http: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

impl CharacterSource for ThronesApiSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Vec<RawCharacter>, Error> {
        let response = self
            .http
            .get(&self.url)
            .map_err(|e| Error::data_unavailable(format!("{}: {}", self.url, e)))?;
        if !response.is_success() {
            return Err(Error::data_unavailable(format!(
                "{}: HTTP {}",
                self.url, response.status
            )));
        }
        parse_characters(&response.body)
    }
}
