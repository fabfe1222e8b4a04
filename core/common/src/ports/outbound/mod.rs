//! Outbound ポート: アプリが外界（環境変数・FS・子プロセス・ログ）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod runner;

pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use runner::{InferenceRunner, RunnerOutput};
