use crate::domain::RelayCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::ModelName;
use common::error::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -m / --model: モデル名を明示する（環境変数より優先）
    pub model: Option<ModelName>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("orelay")
        .about("Relay a prompt from stdin to a local Ollama model")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. qwen2.5-coder:7b)")
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
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let model = matches
        .get_one::<String>("model")
        .map(|s| ModelName::new(s.clone()));

    Config { help, model }
}

/// コマンドラインを解析する。補完生成が要求された場合は
/// ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
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
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let opts = "-h --help -m --model --generate";
    match shell {
        Shell::Bash => {
            println!(
                r#"# Completion for orelay
_orelay() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{opts}" -- "$cur"))
}}
complete -F _orelay orelay
"#,
                opts = opts
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Completion for orelay
#compdef orelay
local -a reply
reply=({opts})
_describe 'orelay' reply
"#,
                opts = opts
            );
        }
        Shell::Fish => {
            println!(
                r#"# Completion for orelay
complete -c orelay -l help -s h -d "Show help"
complete -c orelay -l model -s m -d "Model name" -r
complete -c orelay -l generate -d "Generate completion script" -r -a "bash zsh fish"
"#
            );
        }
        _ => {}
    }
}

/// Config を RelayCommand に変換する
pub fn config_to_command(config: Config) -> RelayCommand {
    if config.help {
        return RelayCommand::Help;
    }

    RelayCommand::Relay {
        model: config.model,
    }
}
