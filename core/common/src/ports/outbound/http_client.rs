//! HTTP クライアント Outbound ポート
//!
//! adapter は reqwest を直接触らずこの trait 経由で GET する（テストではスタブを注入）。

use crate::error::Error;

/// HTTP レスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// ブロッキング HTTP GET
pub trait HttpClient: Send + Sync {
    /// `url` を GET する。接続失敗・タイムアウトは Err、HTTP エラーステータスは Ok で返す。
    fn get(&self, url: &str) -> Result<HttpResponse, Error>;
}
