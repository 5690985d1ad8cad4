//! エラーハンドリング
//!
//! ワークスペース共通のエラー型。`main` は `exit_code()` を終了コードに、
//! `Display` を stderr 表示に使う。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// データ取得元に到達できない、またはレスポンスが不正（セッション開始不可）
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// マッチングに必要なレコード数（2件）に満たない
    #[error("record set too small: need at least 2 records, got {count}")]
    EmptySet { count: usize },

    /// 選択されたキャラクターがレコードセットに存在しない
    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    /// 環境変数の解決失敗
    #[error("{0}")]
    Env(String),

    /// 内部エラー
    #[error("{0}")]
    System(String),
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// I/O エラー
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// データ取得失敗
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Error::DataUnavailable(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    /// システムエラー
    pub fn system(msg: impl Into<String>) -> Self {
        Error::System(msg.into())
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// sysexits.h に合わせた終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::EmptySet { .. } | Error::UnknownCharacter(_) => 65,
            Error::DataUnavailable(_) | Error::Io(_) | Error::Json(_) => 74,
            Error::Env(_) | Error::System(_) => 70,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e.to_string())
    }
}
