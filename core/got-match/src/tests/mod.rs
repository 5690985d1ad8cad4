//! got-match のユースケース・配線のテスト（スタブ群と共通ヘルパ）

mod recommend_tests;

use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};

use common::error::Error;
use common::ports::outbound::{Log, LogRecord};

use crate::domain::{MatchResult, RawCharacter, RecordSet, Selection};
use crate::ports::outbound::{CharacterSource, MatchDisplay};

/// clone しても同じバッファに書き込む Write（出力の検証用）
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub(crate) fn raw(id: i64, name: &str) -> RawCharacter {
    RawCharacter {
        id,
        full_name: name.to_string(),
        title: None,
        family: None,
        image_url: format!("https://img.test/{}.jpg", id),
    }
}

/// id 0..n、名前 "c{id}" の生レコード
pub(crate) fn raws(n: i64) -> Vec<RawCharacter> {
    (0..n).map(|i| raw(i, &format!("c{}", i))).collect()
}

/// 決まった結果を返す取得元
pub(crate) struct StubSource {
    result: Result<Vec<RawCharacter>, Error>,
    calls: Mutex<usize>,
}

impl StubSource {
    pub(crate) fn ok(raws: Vec<RawCharacter>) -> Self {
        Self {
            result: Ok(raws),
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn err(e: Error) -> Self {
        Self {
            result: Err(e),
            calls: Mutex::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl CharacterSource for StubSource {
    fn describe(&self) -> String {
        "stub".to_string()
    }

    fn fetch(&self) -> Result<Vec<RawCharacter>, Error> {
        *self.calls.lock().unwrap() += 1;
        self.result.clone()
    }
}

/// 出力を記録し、用意した選択を順に返す表示
#[derive(Default)]
pub(crate) struct RecordingDisplay {
    choices: Mutex<VecDeque<Selection>>,
    pub(crate) listed: Mutex<Vec<usize>>,
    pub(crate) presented: Mutex<Vec<usize>>,
    pub(crate) matches: Mutex<Vec<MatchResult>>,
    pub(crate) errors: Mutex<Vec<Error>>,
}

impl RecordingDisplay {
    pub(crate) fn with_choices(choices: Vec<Selection>) -> Self {
        Self {
            choices: Mutex::new(choices.into()),
            ..Default::default()
        }
    }
}

impl MatchDisplay for RecordingDisplay {
    fn render_list(&self, set: &RecordSet) -> Result<(), Error> {
        self.listed.lock().unwrap().push(set.len());
        Ok(())
    }

    fn present_options(&self, set: &RecordSet) -> Result<(), Error> {
        self.presented.lock().unwrap().push(set.len());
        Ok(())
    }

    fn choose(&self) -> Result<Option<Selection>, Error> {
        Ok(self.choices.lock().unwrap().pop_front())
    }

    fn render_match(&self, result: &MatchResult) -> Result<(), Error> {
        self.matches.lock().unwrap().push(result.clone());
        Ok(())
    }

    fn render_error(&self, error: &Error) -> Result<(), Error> {
        self.errors.lock().unwrap().push(error.clone());
        Ok(())
    }
}

/// 受け取ったレコードを保持する Log
#[derive(Default)]
pub(crate) struct RecordingLog {
    pub(crate) records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
