//! got-match 共通ライブラリ
//!
//! エラー型・ポート（FS / 環境変数 / HTTP / ログ）・標準アダプタ・シード付き乱数を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート
pub mod ports;

/// 標準アダプタ
pub mod adapter;

/// numpy 互換のシード付き乱数
pub mod rng;
