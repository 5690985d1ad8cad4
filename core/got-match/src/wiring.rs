//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    CompositeLog, FileJsonLog, NoopLog, ReqwestHttpClient, StderrLog, StdEnvResolver,
    StdFileSystem,
};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, HttpClient, Log};

use crate::adapter::{ConsoleDisplay, JsonDisplay, JsonFileSource, LineIo, ThronesApiSource};
use crate::cli::Config;
use crate::domain::{MatchConfig, NameCorrections};
use crate::ports::outbound::{CharacterSource, MatchDisplay};
use crate::usecase::{LoadSessionUseCase, MatchSessionUseCase, RecommendUseCase};

/// 配線で組み立てたユースケースとポート群（main の Command ディスパッチで利用）
pub struct App {
    pub session: MatchSessionUseCase,
    /// 構造化ログ（ファイルへ JSONL、-v 指定時は stderr にも）
    pub logger: Arc<dyn Log>,
}

/// ログ出力先を組み立てる。パス解決に失敗したらファイルには書かない。
fn wire_logger(env_resolver: &dyn EnvResolver, fs: &Arc<dyn FileSystem>, verbose: bool) -> Arc<dyn Log> {
    let file_log: Arc<dyn Log> = env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog));
    if verbose {
        Arc::new(CompositeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    }
}

/// 配線: Config に応じて取得元（HTTP / ローカル JSON）と表示（コンソール / JSON）を選ぶ
pub fn wire_got_match(config: &Config) -> Result<App, Error> {
    let match_config = MatchConfig::default();
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver = StdEnvResolver;
    let logger = wire_logger(&env_resolver, &fs, config.verbose);

    let source: Arc<dyn CharacterSource> = match &config.source_file {
        Some(path) => Arc::new(JsonFileSource::new(Arc::clone(&fs), path)),
        None => {
            let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(match_config.http_timeout)?);
            Arc::new(ThronesApiSource::new(http, match_config.api_url.clone()))
        }
    };

    let display: Arc<dyn MatchDisplay> = if config.json {
        Arc::new(JsonDisplay::new(LineIo::stdio()))
    } else {
        Arc::new(ConsoleDisplay::new(LineIo::stdio()))
    };

    Ok(wire_with(source, display, match_config, logger))
}

/// 配線: 取得元・表示・ログを差し替えて App を組み立てる（テストからも利用）
pub fn wire_with(
    source: Arc<dyn CharacterSource>,
    display: Arc<dyn MatchDisplay>,
    match_config: MatchConfig,
    logger: Arc<dyn Log>,
) -> App {
    let loader = LoadSessionUseCase::new(
        source,
        NameCorrections::got_defaults(),
        match_config,
        Arc::clone(&logger),
    );
    let recommender = RecommendUseCase::new(Arc::clone(&logger));
    let session = MatchSessionUseCase::new(loader, recommender, display, Arc::clone(&logger));
    App { session, logger }
}
