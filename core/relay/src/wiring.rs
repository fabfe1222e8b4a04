//! 配線: 標準アダプターで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    FileJsonLog, NoopLog, OllamaRunner, StdEnvResolver, StdFileSystem, DEFAULT_RUNNER_BIN,
};
use common::ports::outbound::{EnvResolver, FileSystem, InferenceRunner, Log};

use crate::adapter::{ModelResolver, StdinPromptSource, StdioRelaySink};
use crate::ports::outbound::{PromptSource, RelaySink};
use crate::usecase::RelayUseCase;

/// 組み立て済みアプリケーション
pub struct App {
    pub logger: Arc<dyn Log>,
    pub model_resolver: ModelResolver,
    pub relay_use_case: RelayUseCase,
}

/// 配線: 標準アダプターで App を組み立てる
pub fn wire_relay() -> App {
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);

    // ORELAY_LOG 未設定ならログは無効
    let logger: Arc<dyn Log> = match env_resolver.log_path_from_env() {
        Some(path) => Arc::new(FileJsonLog::new(Arc::clone(&fs), path)),
        None => Arc::new(NoopLog),
    };

    let bin = env_resolver
        .runner_bin_from_env()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RUNNER_BIN));
    let runner: Arc<dyn InferenceRunner> = Arc::new(OllamaRunner::new(bin));

    let prompt_source: Arc<dyn PromptSource> = Arc::new(StdinPromptSource);
    let sink: Arc<dyn RelaySink> = Arc::new(StdioRelaySink);

    let model_resolver = ModelResolver::new(Arc::clone(&env_resolver));
    let relay_use_case = RelayUseCase::new(prompt_source, runner, sink, Arc::clone(&logger));

    App {
        logger,
        model_resolver,
        relay_use_case,
    }
}
