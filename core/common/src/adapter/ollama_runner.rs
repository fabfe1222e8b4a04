//! Ollama CLI を子プロセスとして実行する InferenceRunner 実装
//!
//! `<bin> run <model>` を 3 ストリームすべてパイプで起動し、プロンプトを
//! 標準入力へ書き込んでから終了までブロックする。出力は無加工で保持する。

use crate::domain::ModelName;
use crate::error::Error;
use crate::ports::outbound::{InferenceRunner, RunnerOutput};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// 既定の推論コマンド名（PATH から解決）
pub const DEFAULT_RUNNER_BIN: &str = "ollama";

/// std::process::Command を使う InferenceRunner 実装
#[derive(Debug, Clone)]
pub struct OllamaRunner {
    bin: PathBuf,
}

impl OllamaRunner {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn bin(&self) -> &Path {
        &self.bin
    }
}

impl Default for OllamaRunner {
    fn default() -> Self {
        Self::new(DEFAULT_RUNNER_BIN)
    }
}

impl InferenceRunner for OllamaRunner {
    fn run(&self, model: &ModelName, prompt: &[u8]) -> Result<RunnerOutput, Error> {
        let mut child = Command::new(&self.bin)
            .arg("run")
            .arg(model.as_ref())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::unavailable(format!(
                    "inference runner not found: '{}'",
                    self.bin.display()
                )),
                _ => Error::unavailable(format!(
                    "failed to launch '{}': {}",
                    self.bin.display(),
                    e
                )),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(prompt) {
                Ok(()) => {}
                // 子が stdin を読み切らずに終了することがある
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    return Err(Error::io_msg(format!(
                        "failed to write prompt to '{}': {}",
                        self.bin.display(),
                        e
                    )))
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| {
            Error::io_msg(format!("failed to wait for '{}': {}", self.bin.display(), e))
        })?;

        Ok(RunnerOutput {
            code: output.status.code().unwrap_or(1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
