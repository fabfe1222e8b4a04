//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::ModelName;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
///
/// 空文字列の値は未設定として扱う。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn model_from_env(&self) -> Option<ModelName> {
        env::var("ORELAY_MODEL")
            .ok()
            .filter(|s| !s.is_empty())
            .map(ModelName::new)
    }

    fn runner_bin_from_env(&self) -> Option<PathBuf> {
        env::var("ORELAY_OLLAMA_BIN")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    fn log_path_from_env(&self) -> Option<PathBuf> {
        env::var("ORELAY_LOG")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}
