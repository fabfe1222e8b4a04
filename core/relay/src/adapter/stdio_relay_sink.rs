//! 標準出力・標準エラーへ書き出す RelaySink 実装

use crate::ports::outbound::RelaySink;
use common::error::Error;
use std::io::Write;

/// std::io::stdout / stderr へそのまま書き出す RelaySink 実装
#[derive(Debug, Clone, Default)]
pub struct StdioRelaySink;

impl RelaySink for StdioRelaySink {
    fn write_stdout(&self, bytes: &[u8]) -> Result<(), Error> {
        let mut out = std::io::stdout().lock();
        out.write_all(bytes)
            .and_then(|_| out.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))
    }

    fn write_stderr(&self, bytes: &[u8]) -> Result<(), Error> {
        let mut err = std::io::stderr().lock();
        err.write_all(bytes)
            .and_then(|_| err.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write stderr: {}", e)))
    }
}
