//! 固定設定（シード・件数上限・取得元 URL）
//!
//! シードと件数上限は定数で、環境変数や CLI からは変更できない。

use std::time::Duration;

/// 特徴量付与に使う乱数シード
pub const FEATURE_SEED: u32 = 42;

/// セッションに保持するレコード数の上限
pub const RECORD_CAP: usize = 25;

/// キャラクター一覧の取得元
pub const THRONES_API_URL: &str = "https://thronesapi.com/api/v2/Characters";

/// 取得時の HTTP タイムアウト（秒）
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// セッション読み込みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub seed: u32,
    pub record_cap: usize,
    pub api_url: String,
    pub http_timeout: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: FEATURE_SEED,
            record_cap: RECORD_CAP,
            api_url: THRONES_API_URL.to_string(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MatchConfig::default();
        assert_eq!(c.seed, 42);
        assert_eq!(c.record_cap, 25);
        assert_eq!(c.api_url, "https://thronesapi.com/api/v2/Characters");
        assert_eq!(c.http_timeout, Duration::from_secs(30));
    }
}
