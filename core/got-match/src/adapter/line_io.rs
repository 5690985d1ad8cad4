//! 表示アダプタ共通の入出力（1 行読み・書き込み）
//!
//! 本番は stdin / stdout、テストはメモリ上のバッファを注入する。

use std::io::{BufRead, Write};
use std::sync::Mutex;

use common::error::Error;

pub struct LineIo {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl LineIo {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(std::io::BufReader::new(std::io::stdin())),
            Box::new(std::io::stdout()),
        )
    }

    /// 1 行読む。EOF なら None
    pub fn read_line(&self) -> Result<Option<String>, Error> {
        let mut input = self
            .input
            .lock()
            .map_err(|_| Error::system("input lock poisoned"))?;
        let mut line = String::new();
        let n = input
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read input: {}", e)))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn write_str(&self, s: &str) -> Result<(), Error> {
        let mut output = self
            .output
            .lock()
            .map_err(|_| Error::system("output lock poisoned"))?;
        output
            .write_all(s.as_bytes())
            .and_then(|_| output.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write output: {}", e)))
    }
}
