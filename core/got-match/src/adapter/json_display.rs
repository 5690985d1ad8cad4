//! JSON 出力の MatchDisplay 実装（--json）
//!
//! 1 出力につき 1 行の JSON。選択入力はコンソールと同じく 1 行 1 件。

use serde_json::json;

use common::error::Error;

use crate::adapter::line_io::LineIo;
use crate::domain::{MatchResult, RecordSet, Selection};
use crate::ports::outbound::MatchDisplay;

pub struct JsonDisplay {
    io: LineIo,
}

impl JsonDisplay {
    pub fn new(io: LineIo) -> Self {
        Self { io }
    }

    fn write_json(&self, value: &serde_json::Value) -> Result<(), Error> {
        let line = serde_json::to_string(value)?;
        self.io.write_str(&format!("{}\n", line))
    }
}

fn options_json(set: &RecordSet) -> serde_json::Value {
    serde_json::Value::Array(
        set.records()
            .iter()
            .map(|r| json!({ "id": r.id(), "name": r.name() }))
            .collect(),
    )
}

impl MatchDisplay for JsonDisplay {
    fn render_list(&self, set: &RecordSet) -> Result<(), Error> {
        self.write_json(&options_json(set))
    }

    fn present_options(&self, set: &RecordSet) -> Result<(), Error> {
        self.write_json(&json!({ "options": options_json(set) }))
    }

    fn choose(&self) -> Result<Option<Selection>, Error> {
        Ok(self
            .io
            .read_line()?
            .and_then(|line| Selection::parse_input(&line)))
    }

    fn render_match(&self, result: &MatchResult) -> Result<(), Error> {
        self.write_json(&serde_json::to_value(result)?)
    }

    fn render_error(&self, error: &Error) -> Result<(), Error> {
        self.write_json(&json!({ "error": error.to_string() }))
    }
}
