//! 人間向けログ（LogRecord → stderr に 1 行で出力）
//!
//! -v / --verbose 指定時のみ配線される。fields は要点だけ短くまとめる。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields を `k=v` 形式の短い文字列にする（巨大化防止）
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = fields
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ");
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}...", truncated)
}

/// 1 行に整形する（stderr 出力と単体テストで共用）
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[{}] {}", record.level.as_str(), record.message);
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" ({})", layer));
    }
    let summary = fields_summary(record);
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr に出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
