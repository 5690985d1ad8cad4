use std::path::PathBuf;

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

use crate::domain::{CharacterId, MatchCommand, Selection};

const BIN_NAME: &str = "got-match";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: 構造化ログを stderr にも出力する
    pub verbose: bool,
    /// --json: 結果を 1 行 JSON で出力する
    pub json: bool,
    /// --list: レコードセットの一覧を表示して終了
    pub list: bool,
    /// --top <k>: 近い順に k 件表示する（既定 1）
    pub top: usize,
    /// --id <id>: ID で選択する
    pub id: Option<CharacterId>,
    /// --source-file <path>: HTTP の代わりにローカル JSON から読む
    pub source_file: Option<PathBuf>,
    /// 位置引数（空白で連結してキャラクター名にする）
    pub name_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            json: false,
            list: false,
            top: 1,
            id: None,
            source_file: None,
            name_args: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Recommend the most similar Game of Thrones character")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror structured logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print results as one JSON object per line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list")
                .long("list")
                .help("List the loaded characters (id and name) and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("top")
                .long("top")
                .value_name("k")
                .help("Show the k nearest characters (default 1)")
                .value_parser(value_parser!(u64).range(1..))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("id")
                .long("id")
                .value_name("id")
                .help("Select the character by id instead of name")
                .value_parser(value_parser!(i64))
                .conflicts_with("positional")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("source-file")
                .long("source-file")
                .value_name("path")
                .help("Read characters from a local JSON file instead of the API")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("positional")
                .index(1)
                .value_name("name")
                .help("Character name (words are joined with spaces)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let top = matches
        .get_one::<u64>("top")
        .map(|k| *k as usize)
        .unwrap_or(1);
    let name_args: Vec<String> = matches
        .get_many::<String>("positional")
        .map(|i| i.cloned().collect())
        .unwrap_or_default();

    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        json: matches.get_flag("json"),
        list: matches.get_flag("list"),
        top,
        id: matches.get_one::<i64>("id").map(|id| CharacterId::new(*id)),
        source_file: matches.get_one::<PathBuf>("source-file").cloned(),
        name_args,
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を MatchCommand に変換する
pub fn config_to_command(config: &Config) -> MatchCommand {
    if config.help {
        return MatchCommand::Help;
    }

    if config.list {
        return MatchCommand::List;
    }

    if let Some(id) = config.id {
        return MatchCommand::Match {
            selection: Selection::Id(id),
            top: config.top,
        };
    }

    let name = config.name_args.join(" ");
    if name.trim().is_empty() {
        return MatchCommand::Interactive { top: config.top };
    }
    MatchCommand::Match {
        selection: Selection::Name(name.trim().to_string()),
        top: config.top,
    }
}
