//! Relay コマンドのユースケース
//!
//! 標準入力を読み切り、空白のみなら何もせず成功で終わる。そうでなければ
//! 推論コマンドを 1 回実行し、成功なら stdout を、失敗なら stderr を
//! バイト単位でそのまま転送して子の終了コードを返す。

use crate::ports::outbound::{PromptSource, RelaySink};
use common::domain::{ModelName, Prompt};
use common::error::Error;
use common::ports::outbound::{now_iso8601, InferenceRunner, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Relay コマンドのユースケース
pub struct RelayUseCase {
    prompt_source: Arc<dyn PromptSource>,
    runner: Arc<dyn InferenceRunner>,
    sink: Arc<dyn RelaySink>,
    logger: Arc<dyn Log>,
}

impl RelayUseCase {
    pub fn new(
        prompt_source: Arc<dyn PromptSource>,
        runner: Arc<dyn InferenceRunner>,
        sink: Arc<dyn RelaySink>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            prompt_source,
            runner,
            sink,
            logger,
        }
    }

    /// プロンプトを転送して終了コードを返す
    ///
    /// 子プロセスの非ゼロ終了は Ok(code) として返す。Err は relay 自身の
    /// 失敗（stdin 読み込み・子プロセス起動・転送書き込み）のみ。
    pub fn run(&self, model: &ModelName) -> Result<i32, Error> {
        let prompt = Prompt::new(self.prompt_source.read_to_end()?);

        if prompt.is_blank() {
            let _ = self.logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Debug,
                message: "blank prompt, skipping runner".to_string(),
                layer: Some("usecase".to_string()),
                kind: None,
                fields: None,
            });
            return Ok(0);
        }

        let output = self.runner.run(model, prompt.as_bytes())?;

        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "runner finished".to_string(),
            layer: Some("usecase".to_string()),
            kind: None,
            fields: {
                let mut m = BTreeMap::new();
                m.insert("model".to_string(), serde_json::json!(model.as_ref()));
                m.insert("prompt_bytes".to_string(), serde_json::json!(prompt.len()));
                m.insert("exit_code".to_string(), serde_json::json!(output.code));
                Some(m)
            },
        });

        if output.code == 0 {
            self.sink.write_stdout(&output.stdout)?;
            Ok(0)
        } else {
            self.sink.write_stderr(&output.stderr)?;
            Ok(output.code)
        }
    }
}
