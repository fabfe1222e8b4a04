//! モデル名の解決
//!
//! 優先順位:
//! 1. -m / --model で明示された値
//! 2. 環境変数 ORELAY_MODEL（非空のとき）
//! 3. 既定値 DEFAULT_MODEL

use common::domain::ModelName;
use common::ports::outbound::EnvResolver;
use std::sync::Arc;

/// 既定のモデル名
pub const DEFAULT_MODEL: &str = "qwen2.5-coder:7b";

/// モデル名を解決する
pub struct ModelResolver {
    env_resolver: Arc<dyn EnvResolver>,
}

impl ModelResolver {
    pub fn new(env_resolver: Arc<dyn EnvResolver>) -> Self {
        Self { env_resolver }
    }

    pub fn resolve(&self, explicit: Option<ModelName>) -> ModelName {
        explicit
            .or_else(|| self.env_resolver.model_from_env())
            .unwrap_or_else(|| ModelName::new(DEFAULT_MODEL))
    }
}
