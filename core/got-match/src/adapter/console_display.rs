//! コンソール向けの MatchDisplay 実装
//!
//! 選択キャラクターと最近傍を 2 つのラベル付きパネルとして出力する。
//! 画像は取得せず imageUrl を表示する。

use common::error::Error;

use crate::adapter::line_io::LineIo;
use crate::domain::{CharacterRecord, MatchResult, RecordSet, Selection};
use crate::ports::outbound::MatchDisplay;

const PROMPT: &str = "Select a character (number or name, empty line to quit): ";

pub struct ConsoleDisplay {
    io: LineIo,
}

impl ConsoleDisplay {
    pub fn new(io: LineIo) -> Self {
        Self { io }
    }
}

fn panel(heading: &str, record: &CharacterRecord) -> String {
    let mut s = format!("== {} ==\n", heading);
    if !record.title().is_empty() {
        s.push_str(&format!("  title:  {}\n", record.title()));
    }
    if !record.family().is_empty() {
        s.push_str(&format!("  family: {}\n", record.family()));
    }
    s.push_str(&format!("  image:  {}\n", record.image_url()));
    s
}

/// 結果パネルの文字列を作る
pub fn format_match(result: &MatchResult) -> String {
    let mut out = panel(result.selected.name(), &result.selected);
    out.push('\n');
    out.push_str(&panel(
        &format!("Similar: {}", result.nearest.record.name()),
        &result.nearest.record,
    ));
    out.push_str(&format!("  distance: {:.4}\n", result.nearest.distance));
    if !result.runners_up.is_empty() {
        out.push_str("\nAlso close:\n");
        for (i, r) in result.runners_up.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {} ({:.4})\n",
                i + 2,
                r.record.name(),
                r.distance
            ));
        }
    }
    out
}

impl MatchDisplay for ConsoleDisplay {
    fn render_list(&self, set: &RecordSet) -> Result<(), Error> {
        let mut out = String::new();
        for r in set.records() {
            out.push_str(&format!("{}\t{}\n", r.id(), r.name()));
        }
        self.io.write_str(&out)
    }

    fn present_options(&self, set: &RecordSet) -> Result<(), Error> {
        let mut out = String::new();
        for (i, r) in set.records().iter().enumerate() {
            out.push_str(&format!("{:>3}. {}\n", i + 1, r.name()));
        }
        self.io.write_str(&out)
    }

    fn choose(&self) -> Result<Option<Selection>, Error> {
        self.io.write_str(PROMPT)?;
        Ok(self
            .io
            .read_line()?
            .and_then(|line| Selection::parse_input(&line)))
    }

    fn render_match(&self, result: &MatchResult) -> Result<(), Error> {
        self.io.write_str(&format_match(result))
    }

    fn render_error(&self, error: &Error) -> Result<(), Error> {
        self.io.write_str(&format!("error: {}\n", error))
    }
}
