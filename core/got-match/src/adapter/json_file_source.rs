//! ローカルの JSON ファイルからキャラクター一覧を読む CharacterSource（オフライン用）
//!
//! ファイル形式は Thrones API のレスポンスと同じ JSON 配列。

use std::path::PathBuf;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::domain::{parse_characters, RawCharacter};
use crate::ports::outbound::CharacterSource;

pub struct JsonFileSource {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl CharacterSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<RawCharacter>, Error> {
        if !self.fs.is_file(&self.path) {
            return Err(Error::data_unavailable(format!(
                "source file not found: {}",
                self.path.display()
            )));
        }
        let body = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| Error::data_unavailable(e.to_string()))?;
        parse_characters(&body)
    }
}
