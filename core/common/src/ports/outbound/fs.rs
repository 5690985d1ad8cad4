//! ファイルシステム Outbound ポート
//!
//! ログの追記とローカル JSON の読み込みはこの trait 経由で行う。

use crate::error::Error;
use std::io::Write;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
pub trait FileSystem: Send + Sync {
    /// UTF-8 として全体を読む
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;

    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;

    /// 追記用に開く（無ければ作成）。Writer の drop で閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;

    /// 通常ファイルとして存在するか
    fn is_file(&self, path: &Path) -> bool;
}
