//! アダプター（外界の I/O を trait で抽象化）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・環境変数・HTTP・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod composite_log;
pub mod file_json_log;
pub mod reqwest_http_client;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use composite_log::CompositeLog;
pub use file_json_log::{FileJsonLog, NoopLog};
pub use reqwest_http_client::ReqwestHttpClient;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
