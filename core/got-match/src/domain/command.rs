//! got-match コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、main の Runner で match ディスパッチする。

use crate::domain::Selection;

/// got-match の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchCommand {
    /// ヘルプ表示
    Help,
    /// 読み込んだレコードセットの一覧（id と表示名）
    List,
    /// 指定キャラクターの最近傍を 1 回表示
    Match { selection: Selection, top: usize },
    /// 一覧を表示して選択を受け付け、選択ごとに最近傍を表示（空行・EOF で終了）
    Interactive { top: usize },
}

impl MatchCommand {
    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            MatchCommand::Help => "help",
            MatchCommand::List => "list",
            MatchCommand::Match { .. } => "match",
            MatchCommand::Interactive { .. } => "interactive",
        }
    }
}
