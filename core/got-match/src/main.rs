mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::MatchCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_got_match, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config);
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            MatchCommand::Help => {
                print_help();
                Ok(0)
            }
            MatchCommand::List => self.app.session.list(),
            MatchCommand::Match { selection, top } => self.app.session.match_once(&selection, top),
            MatchCommand::Interactive { top } => self.app.session.interactive(top),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("got-match: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_got_match(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: got-match [options] [--id <id> | <name>...]");
}

fn print_help() {
    println!("Usage: got-match [options] [--id <id> | <name>...]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -v, --verbose             Mirror structured logs to stderr (for troubleshooting)");
    println!("  --json                    Print results as one JSON object per line");
    println!("  --list                    List the loaded characters (id and name) and exit");
    println!("  --top <k>                 Show the k nearest characters (default 1)");
    println!("  --id <id>                 Select the character by id instead of name");
    println!("  --source-file <path>      Read characters from a local JSON file instead of the API");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  GOT_MATCH_HOME  Log directory root: $GOT_MATCH_HOME/log/got-match.jsonl");
    println!("                  If unset, $XDG_STATE_HOME/got-match (or ~/.local/state/got-match) is used.");
    println!();
    println!("Description:");
    println!("  Loads the first 25 characters from thronesapi.com, gives each two synthetic");
    println!("  features (seed 42) and shows the character nearest to the one you select.");
    println!("  Without a name or --id, lists the characters and asks for a choice.");
    println!();
    println!("Examples:");
    println!("  got-match Jon Snow");
    println!("  got-match --id 12 --top 3");
    println!("  got-match --json --source-file characters.json Varys");
}
