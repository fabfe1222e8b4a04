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
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::RelayCommand;
use ports::inbound::UseCaseRunner;
use wiring::{wire_relay, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match cmd {
            RelayCommand::Help => {
                print_help();
                Ok(0)
            }
            RelayCommand::Relay { model } => {
                let model = self.app.model_resolver.resolve(model);
                self.app.relay_use_case.run(&model)
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &RelayCommand) -> &'static str {
    match cmd {
        RelayCommand::Help => "help",
        RelayCommand::Relay { .. } => "relay",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("orelay: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wire_relay();
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: orelay [options] < prompt.txt");
}

fn print_help() {
    println!("Usage: orelay [options] < prompt.txt");
    println!("Options:");
    println!("  -h, --help             Show this help message");
    println!("  -m, --model <model>    Specify model name. Default: ORELAY_MODEL, or qwen2.5-coder:7b if not set.");
    println!("  --generate <shell>     Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  ORELAY_MODEL        Model name used when -m/--model is not given.");
    println!("  ORELAY_OLLAMA_BIN   Inference command to invoke. Default: ollama (from PATH).");
    println!("  ORELAY_LOG          Path of a JSONL log file. Logging is disabled when unset.");
    println!();
    println!("Description:");
    println!("  Read a prompt from stdin and forward it to `ollama run <model>`.");
    println!("  On success the model output is written to stdout unchanged; on failure");
    println!("  the runner's stderr is forwarded and its exit code is propagated.");
    println!("  Whitespace-only input exits 0 without invoking the runner.");
    println!();
    println!("Examples:");
    println!("  echo 'Explain borrowing in Rust' | orelay");
    println!("  orelay -m llama3.1 < prompt.txt");
    println!("  ORELAY_MODEL=qwen2.5-coder:32b orelay < prompt.txt");
}
