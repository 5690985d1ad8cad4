//! キャラクター取得元 Outbound ポート

use common::error::Error;

use crate::domain::RawCharacter;

/// キャラクター一覧の取得元（HTTP API・ローカル JSON 等）
///
/// 到達不能・不正なデータはいずれも `Error::DataUnavailable` で返す。リトライはしない。
pub trait CharacterSource: Send + Sync {
    /// ログ用の取得元の名前
    fn describe(&self) -> String;

    /// 取得元の順序のまま生レコードを返す
    fn fetch(&self) -> Result<Vec<RawCharacter>, Error>;
}
