//! 標準入力からプロンプトを読む PromptSource 実装

use crate::ports::outbound::PromptSource;
use common::error::Error;
use std::io::Read;

/// 標準入力を EOF まで読み切る PromptSource 実装
#[derive(Debug, Clone, Default)]
pub struct StdinPromptSource;

impl PromptSource for StdinPromptSource {
    fn read_to_end(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    }
}
