//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・ログファイルのパスを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリ（GOT_MATCH_HOME）を返す。未設定なら None。
    fn home_dir_from_env(&self) -> Option<HomeDir>;

    /// 構造化ログ（JSONL）の出力先
    ///
    /// 優先順位:
    /// 1. $GOT_MATCH_HOME/log/got-match.jsonl
    /// 2. $XDG_STATE_HOME/got-match/got-match.jsonl
    /// 3. $HOME/.local/state/got-match/got-match.jsonl
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
