//! 標準アダプター実装
//!
//! usecase は ports::outbound の trait 経由でのみ環境変数・ファイル・
//! 子プロセスに触れる。実装は標準実装（Std* / OllamaRunner / FileJsonLog）や
//! テスト用のモックを注入する。

pub mod file_json_log;
pub mod ollama_runner;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use ollama_runner::{OllamaRunner, DEFAULT_RUNNER_BIN};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
