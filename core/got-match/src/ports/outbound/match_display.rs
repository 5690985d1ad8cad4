//! 表示 Outbound ポート
//!
//! 選択肢の提示・選択の受け取り・結果パネルの描画を担う。

use common::error::Error;

use crate::domain::{MatchResult, RecordSet, Selection};

/// 表示と選択の窓口（コンソール・JSON 等）
pub trait MatchDisplay: Send + Sync {
    /// レコードセットの一覧を出力する（--list）
    fn render_list(&self, set: &RecordSet) -> Result<(), Error>;

    /// 選択肢を提示する（対話モード開始時）
    fn present_options(&self, set: &RecordSet) -> Result<(), Error>;

    /// 次の選択を 1 件受け取る。入力終了（EOF・空行）なら None
    fn choose(&self) -> Result<Option<Selection>, Error>;

    /// 選択キャラクターと最近傍を描画する
    fn render_match(&self, result: &MatchResult) -> Result<(), Error>;

    /// 対話中の回復可能なエラー（存在しない名前など）を表示する
    fn render_error(&self, error: &Error) -> Result<(), Error>;
}
