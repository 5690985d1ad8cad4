//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const LOG_FILE_NAME: &str = "got-match.jsonl";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn home_dir_from_env(&self) -> Option<HomeDir> {
        non_empty_var("GOT_MATCH_HOME")
            .map(PathBuf::from)
            .map(HomeDir::new)
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        if let Some(home) = self.home_dir_from_env() {
            return Ok(home.join("log").join(LOG_FILE_NAME));
        }

        let state_base = non_empty_var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                non_empty_var("HOME").map(|h| PathBuf::from(h).join(".local").join("state"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(state_base.join("got-match").join(LOG_FILE_NAME))
    }
}
